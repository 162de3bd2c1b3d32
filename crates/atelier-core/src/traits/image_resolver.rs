use async_trait::async_trait;

/// Image resolution service. `None` is a normal answer.
#[async_trait]
pub trait IImageResolver: Send + Sync {
    async fn best_image(&self, item_id: &str) -> Option<String>;
}
