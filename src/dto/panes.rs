use serde::Serialize;
use serde_json::Value;

/// Independent result and error panes of the upload and ingester pages.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct ResultPane {
    /// Pretty-printed JSON returned by the backend.
    pub result: Option<String>,
    pub error: Option<String>,
}

impl ResultPane {
    pub fn success(body: &Value) -> Self {
        Self {
            result: Some(serde_json::to_string_pretty(body).unwrap_or_else(|_| body.to_string())),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }
}

/// Panes of the ingester page, one pair per action.
#[derive(Clone, Debug, Default, Serialize)]
pub struct IngesterPageData {
    pub get_by_id: ResultPane,
    pub publish: ResultPane,
    pub id: String,
    pub numbers: String,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn success_is_pretty_printed() {
        let pane = ResultPane::success(&json!({"id": 1}));
        assert_eq!(pane.result.as_deref(), Some("{\n  \"id\": 1\n}"));
        assert_eq!(pane.error, None);
    }
}
