//! Row types returned by the repositories.

pub mod category;
pub mod comment;
pub mod review;
pub mod user;
