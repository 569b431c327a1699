//! Message protocol between the popup UI and the content-script engine.
//!
//! Commands arrive as JSON tagged by an `action` field; every outcome,
//! including internal failures, is reported back as a [`Response`] rather
//! than propagated.

use serde::{Deserialize, Serialize};

use crate::engine::HighlightEngine;
use crate::layer::ViewerDocument;

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Command {
    Highlight { keywords: Vec<String> },
    Clear,
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl Response {
    fn ok() -> Self {
        Response {
            success: true,
            count: None,
            error: None,
        }
    }

    fn ok_with_count(count: usize) -> Self {
        Response {
            success: true,
            count: Some(count),
            error: None,
        }
    }

    fn failed(message: impl Into<String>) -> Self {
        Response {
            success: false,
            count: None,
            error: Some(message.into()),
        }
    }
}

/// Single dispatch point for incoming messages.
pub fn handle_command(
    engine: &mut HighlightEngine,
    doc: &mut ViewerDocument,
    command: Command,
) -> Response {
    match command {
        Command::Highlight { keywords } => match engine.highlight(doc, &keywords) {
            Ok(count) => Response::ok_with_count(count),
            Err(e) => Response::failed(e.to_string()),
        },
        Command::Clear => {
            engine.clear(doc);
            Response::ok()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layer::TextRun;
    use pretty_assertions::assert_eq;

    fn doc(text: &str) -> ViewerDocument {
        ViewerDocument::with_text_layer(vec![TextRun::new(text)])
    }

    #[test]
    fn test_command_deserializes_highlight() {
        let json = r#"{"action":"highlight","keywords":["eval","exec"]}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, Command::Highlight { ref keywords } if keywords.len() == 2));
    }

    #[test]
    fn test_command_deserializes_clear() {
        let json = r#"{"action":"clear"}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert!(matches!(cmd, Command::Clear));
    }

    #[test]
    fn test_unknown_action_is_rejected_by_decoding() {
        let json = r#"{"action":"scroll"}"#;
        assert!(serde_json::from_str::<Command>(json).is_err());
    }

    #[test]
    fn test_highlight_response_carries_count() {
        let mut engine = HighlightEngine::new();
        let mut doc = doc("an eval call");

        let response = handle_command(
            &mut engine,
            &mut doc,
            Command::Highlight {
                keywords: vec!["eval".to_string()],
            },
        );

        assert!(response.success);
        assert_eq!(response.count, Some(1));
        assert_eq!(response.error, None);
    }

    #[test]
    fn test_failure_is_reported_not_propagated() {
        let mut engine = HighlightEngine::new();
        let mut doc = ViewerDocument::empty();

        let response = handle_command(
            &mut engine,
            &mut doc,
            Command::Highlight {
                keywords: vec!["eval".to_string()],
            },
        );

        assert!(!response.success);
        assert!(response.error.unwrap().contains("compatible PDF viewer"));
    }

    #[test]
    fn test_clear_response_has_no_count() {
        let mut engine = HighlightEngine::new();
        let mut d = doc("text");

        let response = handle_command(&mut engine, &mut d, Command::Clear);
        let json = serde_json::to_string(&response).unwrap();
        assert_eq!(json, r#"{"success":true}"#);
    }
}
