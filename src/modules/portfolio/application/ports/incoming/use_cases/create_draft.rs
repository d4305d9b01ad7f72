use async_trait::async_trait;

use crate::portfolio::application::domain::item::{Item, ItemKind};

#[async_trait]
pub trait CreateDraftUseCase: Send + Sync {
    async fn execute(&self, kind: ItemKind, parent_id: Option<String>) -> Item;
}
