//! Output formatting for CLI.

use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};

use sagapay_types::ApiResult;

/// Output format for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable output.
    #[default]
    Human,
    /// JSON output.
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "human" | "text" => Ok(Self::Human),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown format: {}. Use 'human' or 'json'.", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Human => write!(f, "human"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Trait for renderable output.
pub trait Render {
    /// Render as human-readable string.
    fn render_human(&self) -> String;

    /// Render as JSON string.
    fn render_json(&self) -> String;

    /// Render in the specified format.
    fn render(&self, format: OutputFormat) -> String {
        match format {
            OutputFormat::Human => self.render_human(),
            OutputFormat::Json => self.render_json(),
        }
    }
}

/// Human form of a JSON scalar, without quotes around strings.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

fn render_fields(object: &Map<String, Value>) -> Vec<String> {
    let width = object.keys().map(|k| k.len()).max().unwrap_or(0) + 1;
    object
        .iter()
        .map(|(key, value)| {
            format!(
                "{:<width$} {}",
                format!("{}:", key).bold(),
                display_value(value),
                width = width
            )
        })
        .collect()
}

// =============================================================================
// Output Types
// =============================================================================

/// Gateway response for deposit, withdraw, status and balance.
#[derive(Debug, Serialize)]
pub struct ApiOutput {
    pub operation: String,
    pub result: ApiResult,
}

impl ApiOutput {
    pub fn new(operation: impl Into<String>, result: ApiResult) -> Self {
        Self {
            operation: operation.into(),
            result,
        }
    }
}

impl Render for ApiOutput {
    fn render_human(&self) -> String {
        let mut lines = vec![format!("{}", self.operation.to_uppercase().green().bold())];
        if self.result.is_empty() {
            lines.push("(empty response)".dimmed().to_string());
        } else {
            lines.extend(render_fields(&self.result));
        }
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the sign command.
#[derive(Debug, Serialize)]
pub struct SignatureOutput {
    pub file: String,
    pub bytes: usize,
    pub signature: String,
}

impl Render for SignatureOutput {
    fn render_human(&self) -> String {
        [
            format!("{} {}", "File:".bold(), self.file),
            format!("{} {}", "Bytes:".bold(), self.bytes),
            format!("{} {}", "x-sagapay-signature:".bold(), self.signature.cyan()),
        ]
        .join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}

/// Output for the verify-webhook command: the envelope an endpoint would
/// answer with.
#[derive(Debug, Serialize)]
pub struct WebhookOutput {
    pub status: u16,
    pub body: Map<String, Value>,
}

impl WebhookOutput {
    /// Whether the notification was accepted.
    pub fn accepted(&self) -> bool {
        self.body
            .get("received")
            .and_then(Value::as_bool)
            .unwrap_or(false)
    }
}

impl Render for WebhookOutput {
    fn render_human(&self) -> String {
        let headline = if self.accepted() {
            "Webhook accepted".green().bold()
        } else {
            "Webhook rejected".red().bold()
        };
        let mut lines = vec![
            headline.to_string(),
            format!("{} {}", "HTTP status:".bold(), self.status),
        ];
        lines.extend(render_fields(&self.body));
        lines.join("\n")
    }

    fn render_json(&self) -> String {
        serde_json::to_string_pretty(&self.body).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("TEXT".parse::<OutputFormat>().unwrap(), OutputFormat::Human);
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_api_output() {
        let output = ApiOutput::new(
            "Deposit",
            object(json!({"id": "dep_1", "address": "0xnew", "amount": "0.5"})),
        );

        let human = output.render(OutputFormat::Human);
        assert!(human.contains("DEPOSIT"));
        assert!(human.contains("0xnew"));
        assert!(!human.contains("\"0xnew\""));

        let json = output.render(OutputFormat::Json);
        assert!(json.contains("\"operation\": \"Deposit\""));
        assert!(json.contains("\"address\": \"0xnew\""));
    }

    #[test]
    fn test_api_output_empty() {
        let output = ApiOutput::new("Balance", Map::new());
        assert!(output.render_human().contains("empty response"));
    }

    #[test]
    fn test_signature_output() {
        let output = SignatureOutput {
            file: "body.json".into(),
            bytes: 2,
            signature: "ab".repeat(32),
        };
        assert!(output.render_human().contains("x-sagapay-signature"));
        let json: Value = serde_json::from_str(&output.render_json()).unwrap();
        assert_eq!(json["bytes"], 2);
    }

    #[test]
    fn test_webhook_output() {
        let accepted = WebhookOutput {
            status: 200,
            body: object(json!({"received": true, "id": "1"})),
        };
        assert!(accepted.accepted());
        assert!(accepted.render_human().contains("accepted"));

        let rejected = WebhookOutput {
            status: 200,
            body: object(json!({"received": false, "error": "Invalid webhook signature", "code": 1004})),
        };
        assert!(!rejected.accepted());
        assert!(rejected.render_human().contains("rejected"));
        let json: Value = serde_json::from_str(&rejected.render_json()).unwrap();
        assert_eq!(json["code"], 1004);
    }
}
