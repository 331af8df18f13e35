//! Quill Search - Free-text filtering over records
//!
//! Provides the case-insensitive substring filter behind the `query`
//! argument of the root list fields.

pub mod filter;
pub mod traits;

pub use filter::TextFilter;
pub use traits::Searchable;
