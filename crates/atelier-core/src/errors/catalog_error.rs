/// Errors from the live catalog search and image resolution services.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog search failed: {reason}")]
    SearchFailed { reason: String },

    #[error("image resolution failed for {item_id}: {reason}")]
    ImageResolutionFailed { item_id: String, reason: String },

    #[error("invalid catalog response: {reason}")]
    InvalidResponse { reason: String },
}
