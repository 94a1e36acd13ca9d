//! Filter validation

use common::error::{Code, ServiceError};
use tracing::error;

use crate::models::{Filter, FilterField, MatchType};

/// Validate search filters against the closed field and match-type
/// vocabularies.
///
/// Filters are checked in order and the first violation wins; per filter the
/// value is checked before the match type, the match type before the field.
/// An empty list is valid here; requiring at least one filter is the store's
/// concern.
pub fn validate_filters(filters: &[Filter]) -> Result<(), ServiceError> {
    for (index, filter) in filters.iter().enumerate() {
        if filter.value.is_empty() {
            error!("empty filter value provided at index {}", index);
            return Err(ServiceError::from(Code::InvalidFilterValue));
        }

        if MatchType::parse(&filter.match_type).is_none() {
            error!(
                "match type {:?} at index {} is not supported",
                filter.match_type, index
            );
            return Err(ServiceError::from(Code::InvalidFilterMatchType));
        }

        if FilterField::parse(&filter.field).is_none() {
            error!(
                "filter field {:?} at index {} is not supported",
                filter.field, index
            );
            return Err(ServiceError::from(Code::InvalidFilterField));
        }
    }

    Ok(())
}
