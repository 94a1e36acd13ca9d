//! Search filter model and the closed vocabularies it resolves against

use serde::{Deserialize, Serialize};

/// A single field/match-type/value condition used to narrow a user search.
///
/// `field` and `match_type` arrive as raw wire tokens and are resolved
/// against [`FilterField`] and [`MatchType`] during validation, so an unknown
/// token produces a specific validation code instead of a JSON decoding
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: String,
    pub match_type: String,
    pub value: String,
}

impl Filter {
    /// Construct a filter from wire tokens.
    pub fn new(
        field: impl Into<String>,
        match_type: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            match_type: match_type.into(),
            value: value.into(),
        }
    }
}

/// Closed set of user columns that may be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    FirstName,
    LastName,
    Nickname,
    Email,
    Country,
}

impl FilterField {
    /// Resolve a wire token against the closed set.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "first_name" => Some(Self::FirstName),
            "last_name" => Some(Self::LastName),
            "nickname" => Some(Self::Nickname),
            "email" => Some(Self::Email),
            "country" => Some(Self::Country),
            _ => None,
        }
    }

    /// The column name spliced into query text. Only these fixed tokens ever
    /// reach SQL.
    pub fn column(self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Nickname => "nickname",
            Self::Email => "email",
            Self::Country => "country",
        }
    }
}

/// Closed set of comparison operators for filter values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    /// Exact equality.
    Equal,
    /// Case-insensitive substring match.
    Like,
}

impl MatchType {
    /// Resolve a wire token against the closed set. The tokens are the
    /// operator spellings themselves: `=` and `ILIKE`.
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "=" => Some(Self::Equal),
            "ILIKE" => Some(Self::Like),
            _ => None,
        }
    }

    /// The operator token spliced into query text.
    pub fn operator(self) -> &'static str {
        match self {
            Self::Equal => "=",
            Self::Like => "ILIKE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_field_tokens_resolve() {
        assert_eq!(FilterField::parse("first_name"), Some(FilterField::FirstName));
        assert_eq!(FilterField::parse("last_name"), Some(FilterField::LastName));
        assert_eq!(FilterField::parse("nickname"), Some(FilterField::Nickname));
        assert_eq!(FilterField::parse("email"), Some(FilterField::Email));
        assert_eq!(FilterField::parse("country"), Some(FilterField::Country));
    }

    #[test]
    fn unknown_field_tokens_are_rejected() {
        assert_eq!(FilterField::parse("password"), None);
        assert_eq!(FilterField::parse("id"), None);
        assert_eq!(FilterField::parse("FIRST_NAME"), None);
        assert_eq!(FilterField::parse(""), None);
    }

    #[test]
    fn match_type_tokens_resolve_to_operators() {
        assert_eq!(MatchType::parse("="), Some(MatchType::Equal));
        assert_eq!(MatchType::parse("ILIKE"), Some(MatchType::Like));
        assert_eq!(MatchType::Equal.operator(), "=");
        assert_eq!(MatchType::Like.operator(), "ILIKE");
    }

    #[test]
    fn unknown_match_type_tokens_are_rejected() {
        assert_eq!(MatchType::parse("LIKE"), None);
        assert_eq!(MatchType::parse("ilike"), None);
        assert_eq!(MatchType::parse("=="), None);
        assert_eq!(MatchType::parse(""), None);
    }

    #[test]
    fn filter_deserializes_from_wire_shape() {
        let filter: Filter =
            serde_json::from_str(r#"{"field": "country", "match_type": "=", "value": "UK"}"#)
                .unwrap();

        assert_eq!(filter, Filter::new("country", "=", "UK"));
    }
}
