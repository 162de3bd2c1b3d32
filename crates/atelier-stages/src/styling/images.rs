//! Display-image resolution: resolver, then product-only pattern, then placeholder.

use atelier_catalog::ProductImageMatcher;
use atelier_core::models::CatalogItem;
use atelier_core::traits::IImageResolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Resolver,
    Pattern,
    Placeholder,
}

pub async fn resolve_display_image(
    item: &mut CatalogItem,
    resolver: &dyn IImageResolver,
    matcher: &ProductImageMatcher,
    placeholder: &str,
) -> ImageSource {
    if let Some(best) = resolver.best_image(&item.id).await {
        item.display_image = Some(best);
        return ImageSource::Resolver;
    }
    if let Some(url) = matcher.best_match(&item.images) {
        item.display_image = Some(url.to_string());
        return ImageSource::Pattern;
    }
    tracing::debug!(item_id = %item.id, "no product image, using placeholder");
    item.display_image = Some(placeholder.to_string());
    ImageSource::Placeholder
}
