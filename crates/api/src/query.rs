//! Raw query-string parameters for listing endpoints.
//!
//! Everything arrives as an optional string and is resolved against the
//! allow-lists in `tabletop_core::review_query`.

use serde::Deserialize;
use tabletop_core::error::CoreError;
use tabletop_core::review_query::{CommentListParams, ReviewListParams};

/// `GET /reviews?sort_by=&order=&category=`
#[derive(Debug, Default, Deserialize)]
pub struct ReviewListQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
    pub category: Option<String>,
}

impl ReviewListQuery {
    pub fn resolve(&self) -> Result<ReviewListParams, CoreError> {
        ReviewListParams::parse(
            self.sort_by.as_deref(),
            self.order.as_deref(),
            self.category.as_deref(),
        )
    }
}

/// `GET /reviews/{review_id}/comments?sort_by=&order=`
#[derive(Debug, Default, Deserialize)]
pub struct CommentListQuery {
    pub sort_by: Option<String>,
    pub order: Option<String>,
}

impl CommentListQuery {
    pub fn resolve(&self) -> Result<CommentListParams, CoreError> {
        CommentListParams::parse(self.sort_by.as_deref(), self.order.as_deref())
    }
}
