//! Filter criteria wire types.
//!
//! List endpoints accept a `filters` query parameter holding a JSON array of
//! `{"PropertyName": ..., "Operator": ..., "Value": ...}` objects (the key
//! casing is part of the wire contract). Property names are resolved against
//! each entity's typed column registry in the repository layer; this module
//! only covers the parts that are entity-independent.

use serde::Deserialize;

use crate::error::CoreError;

/// One caller-supplied `(field, operator, value)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct FilterCriteria {
    pub property_name: String,
    pub operator: String,
    pub value: String,
}

impl FilterCriteria {
    /// Parse the raw `filters` query parameter (a JSON array).
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, CoreError> {
        serde_json::from_str(raw)
            .map_err(|e| CoreError::Validation(format!("filters must be a JSON array: {e}")))
    }

    /// Parse this criterion's operator string.
    pub fn parse_operator(&self) -> Result<FilterOperator, CoreError> {
        FilterOperator::parse(&self.operator)
    }
}

/// Supported comparison operators.
///
/// Word and symbol spellings are both accepted (`eq` and `==`, etc.) since
/// existing clients use either. The text-only operators (`contains`,
/// `startswith`, `endswith`) are rejected for non-text columns by the query
/// builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOperator {
    Eq,
    Neq,
    Gt,
    Gte,
    Lt,
    Lte,
    Contains,
    StartsWith,
    EndsWith,
}

impl FilterOperator {
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s.to_ascii_lowercase().as_str() {
            "eq" | "==" | "=" => Ok(Self::Eq),
            "neq" | "ne" | "!=" => Ok(Self::Neq),
            "gt" | ">" => Ok(Self::Gt),
            "gte" | ">=" => Ok(Self::Gte),
            "lt" | "<" => Ok(Self::Lt),
            "lte" | "<=" => Ok(Self::Lte),
            "contains" => Ok(Self::Contains),
            "startswith" => Ok(Self::StartsWith),
            "endswith" => Ok(Self::EndsWith),
            other => Err(CoreError::Validation(format!(
                "unknown filter operator '{other}'"
            ))),
        }
    }

    /// The SQL comparison token for the ordering operators.
    ///
    /// Text-matching operators have no direct token; the query builder turns
    /// them into `ILIKE` patterns instead.
    pub fn comparison_sql(&self) -> Option<&'static str> {
        match self {
            Self::Eq => Some("="),
            Self::Neq => Some("<>"),
            Self::Gt => Some(">"),
            Self::Gte => Some(">="),
            Self::Lt => Some("<"),
            Self::Lte => Some("<="),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn deserializes_pascal_case_wire_format() {
        let raw = r#"[{"PropertyName": "status", "Operator": "eq", "Value": "open"}]"#;
        let criteria = FilterCriteria::parse_list(raw).unwrap();
        assert_eq!(criteria.len(), 1);
        assert_eq!(criteria[0].property_name, "status");
        assert_eq!(criteria[0].operator, "eq");
        assert_eq!(criteria[0].value, "open");
    }

    #[test]
    fn rejects_non_array_payload() {
        assert_matches!(
            FilterCriteria::parse_list(r#"{"PropertyName": "x"}"#),
            Err(CoreError::Validation(_))
        );
    }

    #[test]
    fn parses_word_and_symbol_operators() {
        assert_eq!(FilterOperator::parse("eq").unwrap(), FilterOperator::Eq);
        assert_eq!(FilterOperator::parse("==").unwrap(), FilterOperator::Eq);
        assert_eq!(FilterOperator::parse("!=").unwrap(), FilterOperator::Neq);
        assert_eq!(FilterOperator::parse(">=").unwrap(), FilterOperator::Gte);
        assert_eq!(
            FilterOperator::parse("Contains").unwrap(),
            FilterOperator::Contains
        );
    }

    #[test]
    fn rejects_unknown_operator() {
        assert_matches!(
            FilterOperator::parse("like"),
            Err(CoreError::Validation(_))
        );
    }
}
