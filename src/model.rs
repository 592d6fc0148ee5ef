use serde::Serialize;

/// One candidate source file: its display path and full text, read fresh for
/// every query and never cached across calls.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: String,
    pub text: String,
}

impl SourceFile {
    pub fn new(path: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            text: text.into(),
        }
    }
}

/// Where a matching handler class was declared. `line` is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HandlerLocation {
    pub file_path: String,
    pub line: i64,
}

/// Outcome of a single locate query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum QueryResult {
    /// A handler class was found at the given location.
    Found(HandlerLocation),
    /// The active file declares no public request type.
    RequestTypeNotDetermined,
    /// No workspace file declares a matching handler.
    HandlerNotFound,
    /// The active file could not be processed, or the query itself faulted.
    Failure { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_result_json_shape() {
        let found = QueryResult::Found(HandlerLocation {
            file_path: "src/CreateOrderHandler.cs".to_string(),
            line: 7,
        });
        let value = serde_json::to_value(&found).unwrap();
        assert_eq!(value["status"], "found");
        assert_eq!(value["file_path"], "src/CreateOrderHandler.cs");
        assert_eq!(value["line"], 7);

        let missing = serde_json::to_value(&QueryResult::HandlerNotFound).unwrap();
        assert_eq!(missing["status"], "handler_not_found");
    }
}
