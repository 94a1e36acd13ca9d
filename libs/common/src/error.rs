//! Service error taxonomy
//!
//! Every failure the service surfaces is classified by a coarse [`Kind`] and
//! optionally a finer [`Code`]. The persistence layer maps raw database
//! errors into this taxonomy at the boundary, the service layer passes them
//! through unchanged, and the transport layer derives an HTTP status from the
//! kind while logging the full cause chain server-side.

use std::error::Error as StdError;
use std::fmt;

use thiserror::Error;

/// Coarse category of a service failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// The request parameters or body were invalid.
    InvalidRequest,
    /// The input failed validation.
    Validation,
    /// The requested resource was not found.
    NotFound,
    /// An unexpected failure.
    Unknown,
}

impl Kind {
    /// Stable client-facing message for the category.
    pub fn message(self) -> &'static str {
        match self {
            Kind::InvalidRequest => "err_invalid_request: invalid request received",
            Kind::Validation => "err_validation: failed validation",
            Kind::NotFound => "err_not_found: not found",
            Kind::Unknown => "err_unknown: unknown error occurred",
        }
    }
}

/// Fine-grained failure code. Every code belongs to exactly one [`Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Code {
    #[error("invalid_filter_value: invalid filter value")]
    InvalidFilterValue,
    #[error("invalid_filter_match_type: invalid filter match type")]
    InvalidFilterMatchType,
    #[error("invalid_filter_field: invalid filter field")]
    InvalidFilterField,
    #[error("invalid_email: email is invalid")]
    InvalidEmail,
    #[error("email_already_used: email is already in use")]
    EmailAlreadyUsed,
    #[error("empty_nickname: nickname is empty")]
    EmptyNickname,
    #[error("nickname_already_used: nickname is already in use")]
    NicknameAlreadyUsed,
    #[error("empty_password: password is empty")]
    EmptyPassword,
    #[error("empty_country: country is empty")]
    EmptyCountry,
    #[error("invalid_id: id is invalid")]
    InvalidId,
    #[error("user_not_updated: user record wasn't updated")]
    UserNotUpdated,
    #[error("user_not_deleted: user record wasn't deleted")]
    UserNotDeleted,
    #[error("invalid_filters: filters invalid for finding user")]
    InvalidFilters,
}

impl Code {
    /// The category this code belongs to.
    pub fn kind(self) -> Kind {
        match self {
            Code::InvalidFilterValue
            | Code::InvalidFilterMatchType
            | Code::InvalidFilterField
            | Code::InvalidEmail
            | Code::EmailAlreadyUsed
            | Code::EmptyNickname
            | Code::NicknameAlreadyUsed
            | Code::EmptyPassword
            | Code::EmptyCountry
            | Code::InvalidId => Kind::Validation,
            Code::UserNotUpdated | Code::UserNotDeleted => Kind::NotFound,
            Code::InvalidFilters => Kind::InvalidRequest,
        }
    }
}

type Cause = Box<dyn StdError + Send + Sync + 'static>;

/// Typed service error carrying its taxonomy classification and an optional
/// underlying cause.
///
/// The `Display` output is the stable, client-safe message (code message when
/// present, kind message otherwise); the cause is only reachable through
/// [`StdError::source`] and never serialized to clients.
#[derive(Debug)]
pub struct ServiceError {
    kind: Kind,
    code: Option<Code>,
    source: Option<Cause>,
}

impl ServiceError {
    /// An error classified only by its coarse kind.
    pub fn new(kind: Kind) -> Self {
        Self {
            kind,
            code: None,
            source: None,
        }
    }

    /// Shorthand for a bare [`Kind::InvalidRequest`] error.
    pub fn invalid_request() -> Self {
        Self::new(Kind::InvalidRequest)
    }

    /// Shorthand for a bare [`Kind::NotFound`] error.
    pub fn not_found() -> Self {
        Self::new(Kind::NotFound)
    }

    /// Shorthand for a bare [`Kind::Unknown`] error.
    pub fn unknown() -> Self {
        Self::new(Kind::Unknown)
    }

    /// Attach the underlying cause, preserved for server-side logging.
    pub fn with_source(mut self, source: impl Into<Cause>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// The coarse category of this error.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// The fine-grained code, when one applies.
    pub fn code(&self) -> Option<Code> {
        self.code
    }

    /// Hierarchical "is-a" check against a coarse category, so callers can
    /// test e.g. "is this at least a validation error" without knowing the
    /// specific code.
    pub fn is(&self, kind: Kind) -> bool {
        self.kind == kind
    }
}

impl From<Code> for ServiceError {
    fn from(code: Code) -> Self {
        Self {
            kind: code.kind(),
            code: Some(code),
            source: None,
        }
    }
}

impl From<Kind> for ServiceError {
    fn from(kind: Kind) -> Self {
        Self::new(kind)
    }
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "{}", self.kind.message()),
        }
    }
}

impl StdError for ServiceError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source.as_deref().map(|s| s as &(dyn StdError + 'static))
    }
}

/// Type alias for results carrying a [`ServiceError`].
pub type ServiceResult<T> = Result<T, ServiceError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_map_to_their_kind() {
        assert_eq!(Code::InvalidFilterValue.kind(), Kind::Validation);
        assert_eq!(Code::InvalidId.kind(), Kind::Validation);
        assert_eq!(Code::UserNotUpdated.kind(), Kind::NotFound);
        assert_eq!(Code::UserNotDeleted.kind(), Kind::NotFound);
        assert_eq!(Code::InvalidFilters.kind(), Kind::InvalidRequest);
    }

    #[test]
    fn sub_kinds_satisfy_their_coarse_kind() {
        let err = ServiceError::from(Code::UserNotUpdated);
        assert!(err.is(Kind::NotFound));
        assert!(!err.is(Kind::Validation));

        let err = ServiceError::from(Code::EmailAlreadyUsed);
        assert!(err.is(Kind::Validation));
        assert_eq!(err.code(), Some(Code::EmailAlreadyUsed));
    }

    #[test]
    fn display_is_the_client_safe_message() {
        assert_eq!(
            ServiceError::from(Code::InvalidId).to_string(),
            "invalid_id: id is invalid"
        );
        assert_eq!(
            ServiceError::not_found().to_string(),
            "err_not_found: not found"
        );
    }

    #[test]
    fn source_carries_the_cause_chain() {
        let cause = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = ServiceError::unknown().with_source(cause);

        let source = err.source().expect("cause should be preserved");
        assert_eq!(source.to_string(), "boom");
        // The cause never leaks into the client-facing message.
        assert_eq!(err.to_string(), "err_unknown: unknown error occurred");
    }
}
