pub mod eco;
pub mod game_params;
pub mod outcome;

pub use eco::{EcoCode, EcoError, OpeningFamily};
pub use game_params::{GameParameters, PredictionRequest};
pub use outcome::{Outcome, OutcomeError};
