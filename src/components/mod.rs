//! Reusable view components.

pub mod alert;
pub mod comment_item;
pub mod confirm_dialog;
pub mod header;
pub mod loader;
pub mod pagination;
pub mod post_card;
