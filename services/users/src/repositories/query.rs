//! Dynamic query construction for user search

use common::error::{Code, ServiceError};

use crate::models::{Filter, FilterField, MatchType};

/// A find query ready for execution: SQL text plus the filter values in
/// placeholder order. When pagination applies, the limit and offset are bound
/// after the filter values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindUsersQuery {
    pub sql: String,
    pub values: Vec<String>,
    pub page: Option<Page>,
}

/// Pagination bounds bound into the query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

/// Build the search query for a non-empty filter list.
///
/// Each filter becomes a `<column> <operator> $<n>` predicate with
/// positional, 1-indexed placeholders matching the order of `values`;
/// predicates are joined with AND and results are ordered by ascending id.
/// An ILIKE value is wrapped as `%value%`, an equality value passes through
/// unchanged. A limit greater than zero appends LIMIT/OFFSET placeholders;
/// any other limit means no pagination.
///
/// Only the fixed column and operator tokens from the closed vocabularies are
/// spliced into the SQL text; everything caller-supplied is bound. A filter
/// whose tokens do not resolve yields the matching validation error, so the
/// builder stays safe even when called without prior validation.
pub fn build_find_users_query(
    filters: &[Filter],
    offset: i64,
    limit: i64,
) -> Result<FindUsersQuery, ServiceError> {
    let mut predicates = Vec::with_capacity(filters.len());
    let mut values = Vec::with_capacity(filters.len());

    for (i, filter) in filters.iter().enumerate() {
        let field = FilterField::parse(&filter.field)
            .ok_or_else(|| ServiceError::from(Code::InvalidFilterField))?;
        let match_type = MatchType::parse(&filter.match_type)
            .ok_or_else(|| ServiceError::from(Code::InvalidFilterMatchType))?;

        predicates.push(format!(
            "{} {} ${}",
            field.column(),
            match_type.operator(),
            i + 1
        ));
        values.push(bind_value(match_type, &filter.value));
    }

    let mut sql = format!(
        "SELECT * FROM users WHERE {} ORDER BY id ASC",
        predicates.join(" AND ")
    );

    let mut page = None;
    if limit > 0 {
        sql.push_str(&format!(
            " LIMIT ${} OFFSET ${}",
            filters.len() + 1,
            filters.len() + 2
        ));
        page = Some(Page { limit, offset });
    }

    Ok(FindUsersQuery { sql, values, page })
}

fn bind_value(match_type: MatchType, value: &str) -> String {
    match match_type {
        MatchType::Like => format!("%{}%", value),
        MatchType::Equal => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_equality_filter() {
        let filters = vec![Filter::new("country", "=", "UK")];

        let query = build_find_users_query(&filters, 0, 0).unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM users WHERE country = $1 ORDER BY id ASC"
        );
        assert_eq!(query.values, vec!["UK".to_string()]);
        assert_eq!(query.page, None);
    }

    #[test]
    fn like_values_are_wrapped_for_substring_match() {
        let filters = vec![Filter::new("first_name", "ILIKE", "jo")];

        let query = build_find_users_query(&filters, 0, 0).unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM users WHERE first_name ILIKE $1 ORDER BY id ASC"
        );
        assert_eq!(query.values, vec!["%jo%".to_string()]);
    }

    #[test]
    fn multiple_filters_are_conjoined_with_sequential_placeholders() {
        let filters = vec![
            Filter::new("country", "=", "UK"),
            Filter::new("last_name", "ILIKE", "smith"),
            Filter::new("email", "=", "jo@example.com"),
        ];

        let query = build_find_users_query(&filters, 0, 0).unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM users WHERE country = $1 AND last_name ILIKE $2 AND email = $3 \
             ORDER BY id ASC"
        );
        assert_eq!(
            query.values,
            vec![
                "UK".to_string(),
                "%smith%".to_string(),
                "jo@example.com".to_string()
            ]
        );
    }

    #[test]
    fn positive_limit_appends_pagination_placeholders() {
        let filters = vec![Filter::new("country", "=", "UK")];

        let query = build_find_users_query(&filters, 20, 10).unwrap();

        assert_eq!(
            query.sql,
            "SELECT * FROM users WHERE country = $1 ORDER BY id ASC LIMIT $2 OFFSET $3"
        );
        assert_eq!(
            query.page,
            Some(Page {
                limit: 10,
                offset: 20
            })
        );
    }

    #[test]
    fn zero_or_negative_limit_means_no_pagination() {
        let filters = vec![Filter::new("country", "=", "UK")];

        let unlimited = build_find_users_query(&filters, 5, 0).unwrap();
        assert_eq!(unlimited.page, None);
        assert!(!unlimited.sql.contains("LIMIT"));

        let negative = build_find_users_query(&filters, 5, -1).unwrap();
        assert_eq!(negative.page, None);
    }

    #[test]
    fn unresolved_field_token_is_rejected() {
        let filters = vec![Filter::new("password", "=", "x")];

        let err = build_find_users_query(&filters, 0, 0).unwrap_err();
        assert_eq!(err.code(), Some(common::error::Code::InvalidFilterField));
    }

    #[test]
    fn unresolved_match_type_token_is_rejected() {
        // The raw token never reaches the SQL text.
        let filters = vec![Filter::new("country", "= OR 1=1", "UK")];

        let err = build_find_users_query(&filters, 0, 0).unwrap_err();
        assert_eq!(
            err.code(),
            Some(common::error::Code::InvalidFilterMatchType)
        );
    }
}
