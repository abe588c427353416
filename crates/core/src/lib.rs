//! Domain logic for the tabletop review API.
//!
//! Pure functions and types only: no I/O happens in this crate.

pub mod comments;
pub mod error;
pub mod messages;
pub mod review_query;
pub mod types;
pub mod votes;
