//! Pagination and ordering parameters shared by every list endpoint.
//!
//! The wire contract is 1-based `pageNumber`/`pageSize` with an
//! `asc`/`desc` sort direction. Out-of-range values are rejected rather than
//! clamped -- callers sending `pageSize=0` get a validation error back.

use serde::Deserialize;

use crate::error::CoreError;
use crate::filter::FilterCriteria;

/// Page size used when the caller does not send one.
pub const DEFAULT_PAGE_SIZE: i64 = 20;

/// Page number used when the caller does not send one.
pub const DEFAULT_PAGE_NUMBER: i64 = 1;

/// A validated 1-based page request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    number: i64,
    size: i64,
}

impl Page {
    /// Validate `pageNumber >= 1` and `pageSize >= 1`.
    pub fn new(number: i64, size: i64) -> Result<Self, CoreError> {
        if size < 1 {
            return Err(CoreError::Validation(format!(
                "pageSize must be at least 1, got {size}"
            )));
        }
        if number < 1 {
            return Err(CoreError::Validation(format!(
                "pageNumber must be at least 1, got {number}"
            )));
        }
        Ok(Self { number, size })
    }

    pub fn number(&self) -> i64 {
        self.number
    }

    pub fn size(&self) -> i64 {
        self.size
    }

    /// Number of rows skipped before this page starts.
    ///
    /// Saturates at `i64::MAX` for absurdly large page numbers; the page is
    /// simply empty.
    pub fn offset(&self) -> i64 {
        (self.number - 1).saturating_mul(self.size)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self {
            number: DEFAULT_PAGE_NUMBER,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// Sort direction, parsed case-insensitively from `asc`/`desc`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            other => Err(CoreError::Validation(format!(
                "sortOrder must be 'asc' or 'desc', got '{other}'"
            ))),
        }
    }

    pub fn as_sql(&self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

/// A requested ordering: field name plus direction.
///
/// The field is resolved against the entity's column registry in the
/// repository layer; an unknown field is a validation error there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sort {
    pub field: String,
    pub order: SortOrder,
}

/// Fully validated parameters for a list operation.
///
/// Built by the API layer from query parameters; consumed by the repository
/// layer's query builder.
#[derive(Debug, Clone, Default)]
pub struct ListRequest {
    pub filters: Vec<FilterCriteria>,
    pub search: Option<String>,
    pub page: Page,
    pub sort: Option<Sort>,
}

/// Untyped list parameters as they arrive on the wire (camelCase).
///
/// Deserialized by the API layer and converted into a [`ListRequest`] via
/// [`RawListParams::into_request`], which performs all parameter validation.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawListParams {
    /// JSON-encoded array of filter criteria objects.
    pub filters: Option<String>,
    pub search_term: Option<String>,
    pub page_number: Option<i64>,
    pub page_size: Option<i64>,
    pub sort_field: Option<String>,
    pub sort_order: Option<String>,
}

impl RawListParams {
    /// Validate and convert into a [`ListRequest`].
    ///
    /// Fails with [`CoreError::Validation`] on a malformed `filters` payload,
    /// an out-of-range page, or an unknown sort order. `sortOrder` is
    /// validated even when `sortField` is absent.
    pub fn into_request(self) -> Result<ListRequest, CoreError> {
        let filters = match self.filters.as_deref() {
            None | Some("") => Vec::new(),
            Some(raw) => FilterCriteria::parse_list(raw)?,
        };

        let page = Page::new(
            self.page_number.unwrap_or(DEFAULT_PAGE_NUMBER),
            self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        )?;

        let order = match self.sort_order.as_deref() {
            Some(raw) => Some(SortOrder::parse(raw)?),
            None => None,
        };

        let sort = self.sort_field.map(|field| Sort {
            field,
            order: order.unwrap_or_default(),
        });

        let search = self
            .search_term
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        Ok(ListRequest {
            filters,
            search,
            page,
            sort,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn page_rejects_zero_size() {
        assert_matches!(Page::new(1, 0), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_rejects_zero_number() {
        assert_matches!(Page::new(0, 10), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_rejects_negative_values() {
        assert_matches!(Page::new(-1, 10), Err(CoreError::Validation(_)));
        assert_matches!(Page::new(1, -5), Err(CoreError::Validation(_)));
    }

    #[test]
    fn page_offset_is_one_based() {
        let page = Page::new(1, 20).unwrap();
        assert_eq!(page.offset(), 0);

        // Page 2 of size N starts at row N.
        let page = Page::new(2, 20).unwrap();
        assert_eq!(page.offset(), 20);
    }

    #[test]
    fn page_offset_saturates_instead_of_overflowing() {
        let page = Page::new(i64::MAX, 20).unwrap();
        assert_eq!(page.offset(), i64::MAX);

        let page = Page::new(2, i64::MAX).unwrap();
        assert_eq!(page.offset(), i64::MAX);
    }

    #[test]
    fn sort_order_is_case_insensitive() {
        assert_eq!(SortOrder::parse("ASC").unwrap(), SortOrder::Asc);
        assert_eq!(SortOrder::parse("Desc").unwrap(), SortOrder::Desc);
    }

    #[test]
    fn sort_order_rejects_unknown_values() {
        assert_matches!(SortOrder::parse("upwards"), Err(CoreError::Validation(_)));
        assert_matches!(SortOrder::parse(""), Err(CoreError::Validation(_)));
    }

    #[test]
    fn raw_params_default_to_first_page() {
        let req = RawListParams::default().into_request().unwrap();
        assert_eq!(req.page.number(), DEFAULT_PAGE_NUMBER);
        assert_eq!(req.page.size(), DEFAULT_PAGE_SIZE);
        assert!(req.sort.is_none());
        assert!(req.filters.is_empty());
    }

    #[test]
    fn raw_params_validate_sort_order_without_sort_field() {
        let params = RawListParams {
            sort_order: Some("sideways".into()),
            ..Default::default()
        };
        assert_matches!(params.into_request(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn raw_params_reject_malformed_filters() {
        let params = RawListParams {
            filters: Some("not json".into()),
            ..Default::default()
        };
        assert_matches!(params.into_request(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn raw_params_drop_blank_search_term() {
        let params = RawListParams {
            search_term: Some("   ".into()),
            ..Default::default()
        };
        assert!(params.into_request().unwrap().search.is_none());
    }
}
