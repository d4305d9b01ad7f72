mod commit_item;
mod create_draft;
mod edit_draft;
mod get_portfolio;
mod open_item;
mod remove_item;
mod reorder_item;
mod replace_portfolio;

pub use commit_item::{CommitItemError, CommitItemUseCase};
pub use create_draft::CreateDraftUseCase;
pub use edit_draft::{DraftEdit, EditDraftError, EditDraftUseCase};
pub use get_portfolio::{GetPortfolioError, GetPortfolioUseCase};
pub use open_item::{OpenItemError, OpenItemUseCase};
pub use remove_item::{RemoveItemError, RemoveItemUseCase};
pub use reorder_item::{ReorderItemError, ReorderItemUseCase};
pub use replace_portfolio::{ReplacePortfolioError, ReplacePortfolioUseCase};
