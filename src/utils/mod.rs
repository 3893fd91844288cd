//! Shared helpers.

mod selector;

pub use selector::parse_static_selector;
