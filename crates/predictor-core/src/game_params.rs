use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::eco::EcoCode;

/// Game parameters collected by the prediction wizard.
///
/// Ranges mirror the wizard's sliders. The proxy never enforces them; they
/// exist so callers can reject nonsense before a round trip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct GameParameters {
    pub rated: bool,

    /// Expected game length in half-moves.
    #[validate(range(min = 10, max = 100))]
    pub turns: u32,

    pub opening_eco: EcoCode,

    #[validate(range(min = 2, max = 30))]
    pub opening_ply: u32,

    #[validate(range(min = 500, max = 3000))]
    pub white_rating: u32,

    #[validate(range(min = 500, max = 3000))]
    pub black_rating: u32,

    /// Minutes on the clock.
    #[validate(range(min = 1, max = 60))]
    pub base_time: u32,

    /// Seconds added per move.
    #[validate(range(max = 30))]
    pub increment: u32,
}

impl Default for GameParameters {
    fn default() -> Self {
        Self {
            rated: true,
            turns: 40,
            opening_eco: EcoCode::default(),
            opening_ply: 10,
            white_rating: 1500,
            black_rating: 1500,
            base_time: 10,
            increment: 5,
        }
    }
}

/// Wire shape of a prediction request. Field order is the order sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PredictionRequest {
    pub rated: u8,
    pub turns: u32,
    pub opening_eco: u16,
    pub opening_ply: u32,
    pub white_rating: u32,
    pub black_rating: u32,
    pub base_time: u32,
    pub increment: u32,
}

impl GameParameters {
    pub fn to_request(&self) -> PredictionRequest {
        PredictionRequest {
            rated: u8::from(self.rated),
            turns: self.turns,
            opening_eco: self.opening_eco.to_numeric(),
            opening_ply: self.opening_ply,
            white_rating: self.white_rating,
            black_rating: self.black_rating,
            base_time: self.base_time,
            increment: self.increment,
        }
    }

    pub fn rating_diff(&self) -> i64 {
        self.white_rating as i64 - self.black_rating as i64
    }

    pub fn total_rating(&self) -> u64 {
        self.white_rating as u64 + self.black_rating as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_wizard() {
        let params = GameParameters::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.opening_eco.to_string(), "C00");
        assert_eq!(params.rating_diff(), 0);
        assert_eq!(params.total_rating(), 3000);
    }

    #[test]
    fn test_request_field_order() {
        let json = serde_json::to_string(&GameParameters::default().to_request()).unwrap();
        assert_eq!(
            json,
            r#"{"rated":1,"turns":40,"opening_eco":200,"opening_ply":10,"white_rating":1500,"black_rating":1500,"base_time":10,"increment":5}"#
        );
    }

    #[test]
    fn test_out_of_range_rejected() {
        let params = GameParameters {
            white_rating: 3200,
            increment: 45,
            ..GameParameters::default()
        };
        let errors = params.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("white_rating"));
        assert!(fields.contains_key("increment"));
        assert!(!fields.contains_key("turns"));
    }

    #[test]
    fn test_rating_diff_negative() {
        let params = GameParameters {
            white_rating: 1200,
            black_rating: 1850,
            ..GameParameters::default()
        };
        assert_eq!(params.rating_diff(), -650);
    }

    #[test]
    fn test_rating_sums_unvalidated_extremes() {
        let params: GameParameters = serde_json::from_value(serde_json::json!({
            "rated": true,
            "turns": 40,
            "opening_eco": "C00",
            "opening_ply": 10,
            "white_rating": u32::MAX,
            "black_rating": u32::MAX,
            "base_time": 10,
            "increment": 5
        }))
        .unwrap();
        assert!(params.validate().is_err());
        assert_eq!(params.total_rating(), 2 * u32::MAX as u64);
        assert_eq!(params.rating_diff(), 0);
    }

    #[test]
    fn test_unrated_serializes_zero() {
        let params = GameParameters {
            rated: false,
            ..GameParameters::default()
        };
        assert_eq!(params.to_request().rated, 0);
    }
}
