//! Sorting and filtering knobs for the review and comment listings.
//!
//! Raw query-string values are resolved here into closed enums. Only the
//! `&'static str` fragments returned by [`ReviewSortColumn::as_sql`],
//! [`CommentSortColumn::as_sql`] and [`SortOrder::as_sql`] ever end up in
//! query text; the category filter is always bound as a parameter.

use crate::error::CoreError;
use crate::messages;

// ---------------------------------------------------------------------------
// Sort order
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc` (case-insensitive).
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        if raw.eq_ignore_ascii_case("asc") {
            Ok(SortOrder::Asc)
        } else if raw.eq_ignore_ascii_case("desc") {
            Ok(SortOrder::Desc)
        } else {
            Err(CoreError::UnknownFilterValue(messages::INVALID_ORDER))
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

// ---------------------------------------------------------------------------
// Review listing
// ---------------------------------------------------------------------------

/// Columns a review listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReviewSortColumn {
    ReviewId,
    Title,
    Designer,
    Owner,
    Category,
    #[default]
    CreatedAt,
    Votes,
    CommentCount,
}

impl ReviewSortColumn {
    pub const ALL: &'static [ReviewSortColumn] = &[
        ReviewSortColumn::ReviewId,
        ReviewSortColumn::Title,
        ReviewSortColumn::Designer,
        ReviewSortColumn::Owner,
        ReviewSortColumn::Category,
        ReviewSortColumn::CreatedAt,
        ReviewSortColumn::Votes,
        ReviewSortColumn::CommentCount,
    ];

    /// The name clients use in `?sort_by=`.
    pub fn name(self) -> &'static str {
        match self {
            ReviewSortColumn::ReviewId => "review_id",
            ReviewSortColumn::Title => "title",
            ReviewSortColumn::Designer => "designer",
            ReviewSortColumn::Owner => "owner",
            ReviewSortColumn::Category => "category",
            ReviewSortColumn::CreatedAt => "created_at",
            ReviewSortColumn::Votes => "votes",
            ReviewSortColumn::CommentCount => "comment_count",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .copied()
            .find(|col| col.name() == raw)
            .ok_or(CoreError::UnknownFilterValue(messages::INVALID_SORT))
    }

    /// SQL expression for the `ORDER BY` clause of the listing query.
    pub fn as_sql(self) -> &'static str {
        match self {
            ReviewSortColumn::ReviewId => "reviews.review_id",
            ReviewSortColumn::Title => "reviews.title",
            ReviewSortColumn::Designer => "reviews.designer",
            ReviewSortColumn::Owner => "reviews.owner",
            ReviewSortColumn::Category => "reviews.category",
            ReviewSortColumn::CreatedAt => "reviews.created_at",
            ReviewSortColumn::Votes => "reviews.votes",
            ReviewSortColumn::CommentCount => "comment_count",
        }
    }
}

/// Validated parameters for `GET /reviews`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ReviewListParams {
    pub sort_by: ReviewSortColumn,
    pub order: SortOrder,
    /// Exact-match category slug. `None` lists every category.
    pub category: Option<String>,
}

impl ReviewListParams {
    /// Resolve raw query-string values, applying defaults for absent ones.
    ///
    /// `sort_by` is checked before `order`, so a request with both invalid
    /// reports the sort key. An empty `category` counts as absent.
    pub fn parse(
        sort_by: Option<&str>,
        order: Option<&str>,
        category: Option<&str>,
    ) -> Result<Self, CoreError> {
        let sort_by = sort_by
            .map(ReviewSortColumn::parse)
            .transpose()?
            .unwrap_or_default();
        let order = order.map(SortOrder::parse).transpose()?.unwrap_or_default();
        let category = category.filter(|c| !c.is_empty()).map(str::to_owned);

        Ok(Self {
            sort_by,
            order,
            category,
        })
    }
}

// ---------------------------------------------------------------------------
// Comment listing
// ---------------------------------------------------------------------------

/// Columns a comment listing can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CommentSortColumn {
    CommentId,
    Votes,
    Author,
    #[default]
    CreatedAt,
}

impl CommentSortColumn {
    pub const ALL: &'static [CommentSortColumn] = &[
        CommentSortColumn::CommentId,
        CommentSortColumn::Votes,
        CommentSortColumn::Author,
        CommentSortColumn::CreatedAt,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommentSortColumn::CommentId => "comment_id",
            CommentSortColumn::Votes => "votes",
            CommentSortColumn::Author => "author",
            CommentSortColumn::CreatedAt => "created_at",
        }
    }

    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        Self::ALL
            .iter()
            .copied()
            .find(|col| col.name() == raw)
            .ok_or(CoreError::UnknownFilterValue(messages::INVALID_SORT))
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            CommentSortColumn::CommentId => "comment_id",
            CommentSortColumn::Votes => "votes",
            CommentSortColumn::Author => "author",
            CommentSortColumn::CreatedAt => "created_at",
        }
    }
}

/// Validated parameters for `GET /reviews/{review_id}/comments`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CommentListParams {
    pub sort_by: CommentSortColumn,
    pub order: SortOrder,
}

impl CommentListParams {
    pub fn parse(sort_by: Option<&str>, order: Option<&str>) -> Result<Self, CoreError> {
        let sort_by = sort_by
            .map(CommentSortColumn::parse)
            .transpose()?
            .unwrap_or_default();
        let order = order.map(SortOrder::parse).transpose()?.unwrap_or_default();
        Ok(Self { sort_by, order })
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn defaults_to_created_at_desc_without_filter() {
        let params = ReviewListParams::parse(None, None, None).unwrap();
        assert_eq!(params.sort_by, ReviewSortColumn::CreatedAt);
        assert_eq!(params.order, SortOrder::Desc);
        assert_eq!(params.category, None);
    }

    #[test]
    fn accepts_every_allow_listed_column() {
        for col in ReviewSortColumn::ALL {
            assert_eq!(ReviewSortColumn::parse(col.name()).unwrap(), *col);
        }
    }

    #[test]
    fn rejects_unknown_sort_key() {
        let err = ReviewListParams::parse(Some("rating"), None, None).unwrap_err();
        assert_matches!(err, CoreError::UnknownFilterValue("Cannot sort by this input"));
    }

    #[test]
    fn rejects_sql_in_sort_key() {
        let err = ReviewSortColumn::parse("votes; DROP TABLE reviews").unwrap_err();
        assert_matches!(err, CoreError::UnknownFilterValue(_));
    }

    #[test]
    fn review_body_is_not_sortable() {
        assert!(ReviewSortColumn::parse("review_body").is_err());
    }

    #[test]
    fn rejects_unknown_order() {
        let err = ReviewListParams::parse(None, Some("highest"), None).unwrap_err();
        assert_matches!(
            err,
            CoreError::UnknownFilterValue("Can only order by asc or desc")
        );
    }

    #[test]
    fn order_is_case_insensitive() {
        assert_eq!(SortOrder::parse("ASC").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("Desc").unwrap(), SortOrder::Desc);
    }

    #[test]
    fn sort_key_is_reported_before_order() {
        let err = ReviewListParams::parse(Some("rating"), Some("highest"), None).unwrap_err();
        assert_eq!(err.public_message(), "Cannot sort by this input");
    }

    #[test]
    fn empty_category_counts_as_absent() {
        let params = ReviewListParams::parse(None, None, Some("")).unwrap();
        assert_eq!(params.category, None);

        let params = ReviewListParams::parse(None, None, Some("euro game")).unwrap();
        assert_eq!(params.category.as_deref(), Some("euro game"));
    }

    #[test]
    fn comment_listing_has_its_own_allow_list() {
        let params = CommentListParams::parse(Some("votes"), Some("asc")).unwrap();
        assert_eq!(params.sort_by, CommentSortColumn::Votes);
        assert_eq!(params.order, SortOrder::Asc);

        assert_matches!(
            CommentListParams::parse(Some("title"), None),
            Err(CoreError::UnknownFilterValue(_))
        );
    }
}
