pub mod analytics;
pub mod decimal;
pub mod inventory;
pub mod orders;

use serde::Deserialize;

/// List payload as returned by the API.
///
/// List endpoints answer either with a bare JSON array or with a DRF-style
/// pagination envelope `{"results": [...]}`. Both shapes normalize to a
/// plain `Vec` here so the rest of the app never sees the difference.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ListEnvelope<T> {
    Plain(Vec<T>),
    Paginated { results: Vec<T> },
}

impl<T> ListEnvelope<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListEnvelope::Plain(items) => items,
            ListEnvelope::Paginated { results } => results,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_array_payload() {
        let envelope: ListEnvelope<i64> = serde_json::from_str("[1, 2, 3]").unwrap();
        assert_eq!(envelope.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn paginated_payload() {
        let envelope: ListEnvelope<i64> =
            serde_json::from_str(r#"{"count": 3, "results": [1, 2, 3]}"#).unwrap();
        assert_eq!(envelope.into_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn empty_results() {
        let envelope: ListEnvelope<i64> = serde_json::from_str(r#"{"results": []}"#).unwrap();
        assert!(envelope.into_vec().is_empty());
    }
}
