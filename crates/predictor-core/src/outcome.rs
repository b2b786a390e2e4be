use serde_json::Value as JsonValue;
use thiserror::Error;

/// Predicted result of a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    WhiteWin,
    BlackWin,
    Draw,
    Unknown(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OutcomeError {
    /// The response carried an `{"error": ...}` envelope.
    #[error("{0}")]
    Service(String),

    #[error("No prediction received from server")]
    Missing,
}

impl Outcome {
    /// The model has emitted both "White Win" and "White Wins" over time.
    pub fn parse(label: &str) -> Self {
        match label.trim() {
            "White Win" | "White Wins" => Outcome::WhiteWin,
            "Black Win" | "Black Wins" => Outcome::BlackWin,
            "Draw" => Outcome::Draw,
            other => Outcome::Unknown(other.to_string()),
        }
    }

    /// Interpret a prediction response body.
    pub fn from_response(body: &JsonValue) -> Result<Self, OutcomeError> {
        if let Some(msg) = body.get("error").and_then(|v| v.as_str()) {
            return Err(OutcomeError::Service(msg.to_string()));
        }
        body.get("prediction")
            .and_then(|v| v.as_str())
            .filter(|s| !s.is_empty())
            .map(Outcome::parse)
            .ok_or(OutcomeError::Missing)
    }

    pub fn summary(&self) -> &str {
        match self {
            Outcome::WhiteWin => "White has the advantage and is predicted to win",
            Outcome::BlackWin => "Black has the advantage and is predicted to win",
            Outcome::Draw | Outcome::Unknown(_) => {
                "The game is evenly matched and likely to end in a draw"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_labels() {
        assert_eq!(Outcome::parse("White Win"), Outcome::WhiteWin);
        assert_eq!(Outcome::parse("Black Wins"), Outcome::BlackWin);
        assert_eq!(Outcome::parse("Draw"), Outcome::Draw);
        assert_eq!(Outcome::parse("Abandoned"), Outcome::Unknown("Abandoned".into()));
    }

    #[test]
    fn test_from_response() {
        let ok = json!({ "prediction": "White Win" });
        assert_eq!(Outcome::from_response(&ok), Ok(Outcome::WhiteWin));

        let err = json!({ "error": "Backend error: 503 - Service Unavailable" });
        assert_eq!(
            Outcome::from_response(&err),
            Err(OutcomeError::Service(
                "Backend error: 503 - Service Unavailable".into()
            ))
        );

        assert_eq!(Outcome::from_response(&json!({})), Err(OutcomeError::Missing));
    }
}
