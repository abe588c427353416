//! Stable client-facing error messages.
//!
//! Clients match on these strings, so they only ever change together with
//! the HTTP contract tests.

pub const PATH_NOT_FOUND: &str = "Path not found";
pub const ID_NOT_FOUND: &str = "ID not found";
pub const COMMENT_NOT_FOUND: &str = "Not a valid comment";
pub const USERNAME_NOT_FOUND: &str = "Username not found";

pub const BAD_REQUEST: &str = "Bad request";
pub const DELTA_NOT_A_NUMBER: &str = "This input should be a number";
pub const VOTES_OUT_OF_RANGE: &str = "Vote count out of range";
pub const MISSING_FIELD: &str = "Missing required field";

pub const INVALID_USERNAME: &str = "Invalid username";
pub const INVALID_REFERENCE: &str = "Invalid reference";

pub const INVALID_SORT: &str = "Cannot sort by this input";
pub const INVALID_ORDER: &str = "Can only order by asc or desc";
pub const UNKNOWN_CATEGORY: &str = "This category does not exist";

pub const INTERNAL_ERROR: &str = "Internal server error";
pub const SERVICE_UNAVAILABLE: &str = "Service unavailable";
