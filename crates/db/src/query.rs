//! Generic list-query construction.
//!
//! Every entity repository declares a [`Table`]: its SQL table name plus a
//! registry of filterable/sortable columns and their types. Caller-supplied
//! filter criteria and sort fields are resolved against that registry, and
//! filter values are parsed into the column's Rust type before being bound.
//! Anything that doesn't resolve or parse is a validation error -- a typo in
//! a field name never silently matches nothing.
//!
//! SQL is assembled with [`sqlx::QueryBuilder`]; column names pushed into the
//! SQL text always come from the registry (`&'static str`), never from user
//! input.

use chrono::{DateTime, Utc};
use emr_core::error::CoreError;
use emr_core::filter::FilterOperator;
use emr_core::paging::ListRequest;
use sqlx::{Postgres, QueryBuilder};
use uuid::Uuid;

/// The type a column's filter values must parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Uuid,
    Text,
    Integer,
    Double,
    Boolean,
    Timestamp,
}

/// One registered column of an entity table.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub ty: ColumnType,
}

/// An entity table plus its column registry.
///
/// The registry covers the scalar columns exposed for filtering, searching,
/// and sorting; navigation properties are handled separately by projection.
#[derive(Debug, Clone, Copy)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
}

impl Table {
    /// Resolve a caller-supplied field name to a registered column.
    pub fn column(&self, name: &str) -> Result<&Column, CoreError> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "unknown field '{name}' for {}",
                    self.name
                ))
            })
    }

    fn text_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|c| c.ty == ColumnType::Text)
    }
}

/// Escape `%`, `_` and `\` so a search term matches literally inside ILIKE.
fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Parse a filter value and bind it with the column's Postgres type.
fn bind_value(
    qb: &mut QueryBuilder<'static, Postgres>,
    column: &Column,
    value: &str,
) -> Result<(), CoreError> {
    let invalid = |ty: &str| {
        CoreError::Validation(format!(
            "value '{value}' for field '{}' is not a valid {ty}",
            column.name
        ))
    };

    match column.ty {
        ColumnType::Uuid => {
            qb.push_bind(Uuid::parse_str(value).map_err(|_| invalid("uuid"))?);
        }
        ColumnType::Text => {
            qb.push_bind(value.to_string());
        }
        ColumnType::Integer => {
            qb.push_bind(value.parse::<i64>().map_err(|_| invalid("integer"))?);
        }
        ColumnType::Double => {
            qb.push_bind(value.parse::<f64>().map_err(|_| invalid("number"))?);
        }
        ColumnType::Boolean => {
            qb.push_bind(value.parse::<bool>().map_err(|_| invalid("boolean"))?);
        }
        ColumnType::Timestamp => {
            let ts = DateTime::parse_from_rfc3339(value)
                .map(|dt| dt.with_timezone(&Utc))
                .map_err(|_| invalid("RFC 3339 timestamp"))?;
            qb.push_bind(ts);
        }
    }
    Ok(())
}

/// Build the SELECT for a list operation: filters, free-text search,
/// ordering, and pagination.
///
/// A secondary `id ASC` key keeps page boundaries deterministic when the
/// requested sort column has duplicate values.
pub fn build_list_query(
    table: &Table,
    select: &str,
    req: &ListRequest,
) -> Result<QueryBuilder<'static, Postgres>, CoreError> {
    let mut qb = QueryBuilder::new(format!("SELECT {select} FROM {}", table.name));
    let mut has_where = false;

    for criteria in &req.filters {
        let column = table.column(&criteria.property_name)?;
        let op = criteria.parse_operator()?;

        qb.push(if has_where { " AND " } else { " WHERE " });
        has_where = true;

        match op.comparison_sql() {
            Some(token) => {
                qb.push(column.name).push(' ').push(token).push(' ');
                bind_value(&mut qb, column, &criteria.value)?;
            }
            None => {
                // contains / startswith / endswith only make sense on text.
                if column.ty != ColumnType::Text {
                    return Err(CoreError::Validation(format!(
                        "operator '{}' requires a text field, but '{}' is not one",
                        criteria.operator, column.name
                    )));
                }
                let escaped = escape_like(&criteria.value);
                let pattern = match op {
                    FilterOperator::Contains => format!("%{escaped}%"),
                    FilterOperator::StartsWith => format!("{escaped}%"),
                    FilterOperator::EndsWith => format!("%{escaped}"),
                    _ => unreachable!("non-text operators are handled above"),
                };
                qb.push(column.name).push(" ILIKE ");
                qb.push_bind(pattern);
            }
        }
    }

    if let Some(term) = &req.search {
        let pattern = format!("%{}%", escape_like(term));
        let mut text_columns = table.text_columns().peekable();
        if text_columns.peek().is_some() {
            qb.push(if has_where { " AND (" } else { " WHERE (" });
            let mut first = true;
            for column in text_columns {
                if !first {
                    qb.push(" OR ");
                }
                first = false;
                qb.push(column.name).push(" ILIKE ");
                qb.push_bind(pattern.clone());
            }
            qb.push(")");
        }
    }

    match &req.sort {
        Some(sort) => {
            let column = table.column(&sort.field)?;
            qb.push(format!(
                " ORDER BY {} {}, id ASC",
                column.name,
                sort.order.as_sql()
            ));
        }
        None => {
            qb.push(" ORDER BY created_at ASC, id ASC");
        }
    }

    qb.push(" LIMIT ");
    qb.push_bind(req.page.size());
    qb.push(" OFFSET ");
    qb.push_bind(req.page.offset());

    tracing::debug!(table = table.name, sql = qb.sql(), "Built list query");

    Ok(qb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use emr_core::filter::FilterCriteria;
    use emr_core::paging::{Page, Sort, SortOrder};

    const TABLE: Table = Table {
        name: "locations",
        columns: &[
            Column { name: "id", ty: ColumnType::Uuid },
            Column { name: "name", ty: ColumnType::Text },
            Column { name: "description", ty: ColumnType::Text },
            Column { name: "reorder_level", ty: ColumnType::Integer },
            Column { name: "created_at", ty: ColumnType::Timestamp },
        ],
    };

    fn criteria(property: &str, operator: &str, value: &str) -> FilterCriteria {
        FilterCriteria {
            property_name: property.into(),
            operator: operator.into(),
            value: value.into(),
        }
    }

    #[test]
    fn bare_request_selects_page_with_default_order() {
        let req = ListRequest::default();
        let qb = build_list_query(&TABLE, "id, name", &req).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT id, name FROM locations ORDER BY created_at ASC, id ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn equality_filter_binds_value() {
        let req = ListRequest {
            filters: vec![criteria("name", "eq", "Main Pharmacy")],
            ..Default::default()
        };
        let qb = build_list_query(&TABLE, "*", &req).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM locations WHERE name = $1 \
             ORDER BY created_at ASC, id ASC LIMIT $2 OFFSET $3"
        );
    }

    #[test]
    fn multiple_filters_are_anded() {
        let req = ListRequest {
            filters: vec![
                criteria("reorder_level", "gte", "5"),
                criteria("name", "contains", "ward"),
            ],
            ..Default::default()
        };
        let qb = build_list_query(&TABLE, "*", &req).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM locations WHERE reorder_level >= $1 AND name ILIKE $2 \
             ORDER BY created_at ASC, id ASC LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn search_ors_across_text_columns() {
        let req = ListRequest {
            search: Some("clinic".into()),
            ..Default::default()
        };
        let qb = build_list_query(&TABLE, "*", &req).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM locations WHERE (name ILIKE $1 OR description ILIKE $2) \
             ORDER BY created_at ASC, id ASC LIMIT $3 OFFSET $4"
        );
    }

    #[test]
    fn explicit_sort_keeps_id_tiebreak() {
        let req = ListRequest {
            sort: Some(Sort {
                field: "name".into(),
                order: SortOrder::Desc,
            }),
            ..Default::default()
        };
        let qb = build_list_query(&TABLE, "*", &req).unwrap();
        assert_eq!(
            qb.sql(),
            "SELECT * FROM locations ORDER BY name DESC, id ASC LIMIT $1 OFFSET $2"
        );
    }

    #[test]
    fn pagination_uses_validated_offset() {
        let req = ListRequest {
            page: Page::new(3, 25).unwrap(),
            ..Default::default()
        };
        let qb = build_list_query(&TABLE, "*", &req).unwrap();
        // Offset/limit are bound, not inlined; the math is covered in core.
        assert!(qb.sql().ends_with("LIMIT $1 OFFSET $2"));
    }

    #[test]
    fn unknown_filter_field_is_rejected() {
        let req = ListRequest {
            filters: vec![criteria("favourite_color", "eq", "red")],
            ..Default::default()
        };
        assert_matches!(
            build_list_query(&TABLE, "*", &req).map(|_| ()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let req = ListRequest {
            sort: Some(Sort {
                field: "no_such_column".into(),
                order: SortOrder::Asc,
            }),
            ..Default::default()
        };
        assert_matches!(
            build_list_query(&TABLE, "*", &req).map(|_| ()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn contains_on_non_text_column_is_rejected() {
        let req = ListRequest {
            filters: vec![criteria("reorder_level", "contains", "5")],
            ..Default::default()
        };
        assert_matches!(
            build_list_query(&TABLE, "*", &req).map(|_| ()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn unparsable_typed_value_is_rejected() {
        let req = ListRequest {
            filters: vec![criteria("reorder_level", "gt", "many")],
            ..Default::default()
        };
        assert_matches!(
            build_list_query(&TABLE, "*", &req).map(|_| ()),
            Err(CoreError::Validation(_))
        );

        let req = ListRequest {
            filters: vec![criteria("id", "eq", "not-a-uuid")],
            ..Default::default()
        };
        assert_matches!(
            build_list_query(&TABLE, "*", &req).map(|_| ()),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn like_metacharacters_are_escaped() {
        let req = ListRequest {
            filters: vec![criteria("name", "contains", "100%_pure")],
            ..Default::default()
        };
        // The pattern is bound, so the SQL itself is unchanged; building must
        // still succeed with metacharacters in the value.
        let qb = build_list_query(&TABLE, "*", &req).unwrap();
        assert!(qb.sql().contains("name ILIKE $1"));
        assert_eq!(escape_like("100%_pure"), "100\\%\\_pure");
    }
}
