//! Pure helpers shared across pages: pagination windowing and timestamp
//! formatting.

pub mod pagination;
pub mod time;
