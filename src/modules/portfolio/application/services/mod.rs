mod commit_item_service;
mod create_draft_service;
mod document_write_lock;
mod edit_draft_service;
mod get_portfolio_service;
mod open_item_service;
mod remove_item_service;
mod reorder_item_service;
mod replace_portfolio_service;

pub use commit_item_service::CommitItemService;
pub use create_draft_service::CreateDraftService;
pub use document_write_lock::DocumentWriteLock;
pub use edit_draft_service::EditDraftService;
pub use get_portfolio_service::GetPortfolioService;
pub use open_item_service::OpenItemService;
pub use remove_item_service::RemoveItemService;
pub use reorder_item_service::ReorderItemService;
pub use replace_portfolio_service::ReplacePortfolioService;
