//! Search errors
//!
//! Every failure of a search is terminal for that search and reaches the
//! rendering layer as one [`SearchError`] value.

use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

/// Errors that can end a search
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// Search text was blank or whitespace-only
    #[error("Search text is empty")]
    EmptyInput,

    /// The location resolver had no match for the query
    #[error("No place matches '{0}'")]
    NotFound(String),

    /// A collaborator call failed or returned a non-success status
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// The forecast payload was inconsistent or incomplete
    #[error("Malformed payload: {0}")]
    MalformedPayload(String),

    /// A newer search started before this one completed
    #[error("Superseded by a newer search")]
    Stale,
}

/// Discriminant of a [`SearchError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchErrorKind {
    EmptyInput,
    NotFound,
    UpstreamUnavailable,
    MalformedPayload,
    Stale,
}

impl SearchError {
    /// Create an upstream error
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::UpstreamUnavailable(message.into())
    }

    /// Create a malformed payload error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedPayload(message.into())
    }

    #[must_use]
    pub const fn kind(&self) -> SearchErrorKind {
        match self {
            Self::EmptyInput => SearchErrorKind::EmptyInput,
            Self::NotFound(_) => SearchErrorKind::NotFound,
            Self::UpstreamUnavailable(_) => SearchErrorKind::UpstreamUnavailable,
            Self::MalformedPayload(_) => SearchErrorKind::MalformedPayload,
            Self::Stale => SearchErrorKind::Stale,
        }
    }

    /// Message shown to the user (pt)
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::EmptyInput => "Por favor, digite o nome de uma cidade",
            Self::NotFound(_) => "Cidade não encontrada. Verifique o nome e tente novamente.",
            Self::UpstreamUnavailable(_) => {
                "Erro ao buscar dados do clima. Verifique sua conexão e tente novamente."
            },
            Self::MalformedPayload(_) => "Dados do clima inválidos recebidos do servidor.",
            Self::Stale => "Pesquisa substituída por uma mais recente.",
        }
    }

    /// Whether this error came from a superseded search and must not be shown
    #[must_use]
    pub const fn is_stale(&self) -> bool {
        matches!(self, Self::Stale)
    }
}

impl From<DomainError> for SearchError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::MalformedPayload(message) => Self::MalformedPayload(message),
            DomainError::InvalidCoordinates(e) => Self::MalformedPayload(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::value_objects::InvalidCoordinates;

    #[test]
    fn kinds_match_variants() {
        assert_eq!(SearchError::EmptyInput.kind(), SearchErrorKind::EmptyInput);
        assert_eq!(
            SearchError::NotFound("Atlantis".into()).kind(),
            SearchErrorKind::NotFound
        );
        assert_eq!(
            SearchError::upstream("503").kind(),
            SearchErrorKind::UpstreamUnavailable
        );
        assert_eq!(
            SearchError::malformed("bad").kind(),
            SearchErrorKind::MalformedPayload
        );
        assert_eq!(SearchError::Stale.kind(), SearchErrorKind::Stale);
    }

    #[test]
    fn user_messages_are_fixed_locale() {
        assert_eq!(
            SearchError::EmptyInput.user_message(),
            "Por favor, digite o nome de uma cidade"
        );
        assert_eq!(
            SearchError::NotFound("x".into()).user_message(),
            "Cidade não encontrada. Verifique o nome e tente novamente."
        );
        assert!(
            SearchError::upstream("timeout")
                .user_message()
                .starts_with("Erro ao buscar dados do clima")
        );
    }

    #[test]
    fn display_includes_detail() {
        let err = SearchError::NotFound("Atlantis".into());
        assert_eq!(err.to_string(), "No place matches 'Atlantis'");
    }

    #[test]
    fn domain_errors_become_malformed_payload() {
        let err: SearchError = DomainError::malformed("6 weather codes").into();
        assert_eq!(err, SearchError::MalformedPayload("6 weather codes".into()));

        let err: SearchError = DomainError::from(InvalidCoordinates {
            latitude: 0.0,
            longitude: 200.0,
        })
        .into();
        assert_eq!(err.kind(), SearchErrorKind::MalformedPayload);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&SearchErrorKind::UpstreamUnavailable).unwrap();
        assert_eq!(json, "\"upstream_unavailable\"");
    }
}
