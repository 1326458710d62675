//! Prelude module for persian_calendar_fast crate.
//!
//! Re-exports commonly used derive macros from derive_more.

#[allow(unused_imports)]
pub use derive_more::{Deref, Display, From, Into};
