mod commit_item;
mod drafts;
mod error_mapping;
mod get_portfolio;
mod open_item;
mod remove_item;
mod reorder_item;
mod replace_portfolio;

pub use commit_item::{__path_commit_item_handler, commit_item_handler};
pub use drafts::{
    __path_append_list_value_handler, __path_attach_file_handler, __path_create_draft_handler,
    __path_detach_file_handler, __path_remove_list_value_handler, append_list_value_handler,
    attach_file_handler, create_draft_handler, detach_file_handler, remove_list_value_handler,
    AttachFileRequest, DraftRequest, ListValueRequest,
};
pub use get_portfolio::{
    __path_get_admin_portfolio_handler, __path_get_portfolio_handler, get_admin_portfolio_handler,
    get_portfolio_handler,
};
pub use open_item::{__path_open_item_handler, open_item_handler};
pub use remove_item::{__path_remove_item_handler, remove_item_handler};
pub use reorder_item::{__path_reorder_item_handler, reorder_item_handler, MoveItemRequest};
pub use replace_portfolio::{__path_replace_portfolio_handler, replace_portfolio_handler};

use serde::Deserialize;
use utoipa::IntoParams;

/// Owning skill category for skill operations.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ParentQuery {
    /// Skill category id; only used when `kind` is `skill`
    #[param(example = "programming")]
    pub parent_id: Option<String>,
}
