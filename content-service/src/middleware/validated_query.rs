use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use serde::de::DeserializeOwned;
use service_core::error::AppError;
use validator::Validate;

/// Query string extractor that decodes `T` and runs its `validator` rules.
///
/// Both decoding failures (a non-numeric `limit`, an unknown boolean
/// spelling) and rule violations reject the request with `422` before the
/// handler runs, so no store access happens for bad input. A key given
/// more than once takes its last value.
#[derive(Debug, Clone)]
pub struct ValidatedQuery<T>(pub T);

/// Collapses repeated keys to their last occurrence, keeping first-seen
/// key order, and re-encodes the result.
pub(crate) fn last_value_wins(query: &str) -> Result<String, AppError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_str(query)
        .map_err(|e| AppError::InvalidQuery(e.to_string()))?;

    let mut collapsed: Vec<(String, String)> = Vec::with_capacity(pairs.len());
    for (key, value) in pairs {
        match collapsed.iter_mut().find(|(seen, _)| *seen == key) {
            Some(slot) => slot.1 = value,
            None => collapsed.push((key, value)),
        }
    }

    serde_urlencoded::to_string(&collapsed).map_err(|e| AppError::InvalidQuery(e.to_string()))
}

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidatedQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let query = last_value_wins(parts.uri.query().unwrap_or_default())?;
        let value: T = serde_urlencoded::from_str(&query).map_err(|e| {
            tracing::debug!(uri = %parts.uri, "Rejected query string: {}", e);
            AppError::InvalidQuery(format!("Failed to deserialize query string: {e}"))
        })?;

        value.validate()?;

        Ok(ValidatedQuery(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_keys_keep_the_last_value() {
        let query = last_value_wins("limit=2&featured=true&limit=3").unwrap();
        assert_eq!(query, "limit=3&featured=true");
    }

    #[test]
    fn encoded_values_survive_collapsing() {
        let query = last_value_wins("q=a%26b&q=c+d").unwrap();
        assert_eq!(query, "q=c+d");
    }

    #[test]
    fn empty_query_stays_empty() {
        assert_eq!(last_value_wins("").unwrap(), "");
    }
}
