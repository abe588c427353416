//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers decode input through the extractors in [`crate::extract`],
//! delegate to the repositories in `tabletop_db`, and map errors via
//! [`crate::error::AppError`].

pub mod categories;
pub mod comments;
pub mod fallback;
pub mod reviews;
pub mod users;
