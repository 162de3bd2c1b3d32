mod catalog_search;
mod image_resolver;
mod local_cache;
mod record_store;
mod stages;

pub use catalog_search::{CatalogQuery, ICatalogSearch};
pub use image_resolver::IImageResolver;
pub use local_cache::{ILocalCache, LocalCacheExt};
pub use record_store::IRecordStore;
pub use stages::{
    IContextualRecommendation, IPersonalizationStage, IRecommendationStage, IStylingStage,
    IValidationStage,
};
