//! ECO (Encyclopedia of Chess Openings) codes.
//!
//! Codes run from `A00` to `E99`. The prediction model consumes them as a
//! single integer: the volume letter selects a hundred, the two digits the
//! offset inside it, so `C00` is 200 and `E99` is 499.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static ECO_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Ea-e])(\d{2})$").expect("static ECO regex"));

pub const MAX_NUMERIC: u16 = 499;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EcoError {
    #[error("Invalid ECO code '{0}': expected a letter A-E followed by two digits")]
    Invalid(String),

    #[error("ECO value {0} out of range (0-499)")]
    OutOfRange(u16),
}

/// The five ECO volumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpeningFamily {
    Flank,
    SemiOpen,
    Open,
    Closed,
    Indian,
}

impl OpeningFamily {
    pub const ALL: [OpeningFamily; 5] = [
        OpeningFamily::Flank,
        OpeningFamily::SemiOpen,
        OpeningFamily::Open,
        OpeningFamily::Closed,
        OpeningFamily::Indian,
    ];

    pub fn letter(self) -> char {
        match self {
            OpeningFamily::Flank => 'A',
            OpeningFamily::SemiOpen => 'B',
            OpeningFamily::Open => 'C',
            OpeningFamily::Closed => 'D',
            OpeningFamily::Indian => 'E',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'A' => Some(OpeningFamily::Flank),
            'B' => Some(OpeningFamily::SemiOpen),
            'C' => Some(OpeningFamily::Open),
            'D' => Some(OpeningFamily::Closed),
            'E' => Some(OpeningFamily::Indian),
            _ => None,
        }
    }

    fn index(self) -> u16 {
        (self.letter() as u16) - ('A' as u16)
    }

    pub fn description(self) -> &'static str {
        match self {
            OpeningFamily::Flank => "Flank openings like the English or Réti, where White develops without immediately occupying the center with pawns.",
            OpeningFamily::SemiOpen => "Semi-open games, typically responses to 1.e4 other than 1...e5, such as the Sicilian or Caro-Kann Defense.",
            OpeningFamily::Open => "Open games starting with 1.e4 e5, including the Italian Game, Ruy Lopez, and King's Gambit.",
            OpeningFamily::Closed => "Closed games and semi-closed games, typically starting with 1.d4 d5, including the Queen's Gambit.",
            OpeningFamily::Indian => "Indian defenses and other responses to 1.d4 where Black doesn't play 1...d5, such as the King's Indian.",
        }
    }

    pub fn white_strategy(self) -> &'static str {
        match self {
            OpeningFamily::Flank => "Control the center indirectly and develop flexibly, often fianchettoing bishops.",
            OpeningFamily::SemiOpen => "Establish a strong pawn center and develop pieces to control key squares.",
            OpeningFamily::Open => "Rapid development, kingside castling, and direct attacks on the opponent's king.",
            OpeningFamily::Closed => "Build a strong pawn center and seek positional advantages through piece activity.",
            OpeningFamily::Indian => "Create a strong pawn center and develop pieces to control space and restrict opponent's options.",
        }
    }

    pub fn black_strategy(self) -> &'static str {
        match self {
            OpeningFamily::Flank => "Counter White's flank strategy with central control and active piece play.",
            OpeningFamily::SemiOpen => "Create imbalances and counterattack White's center, often with asymmetrical pawn structures.",
            OpeningFamily::Open => "Develop pieces actively and establish a solid position before launching counterplay.",
            OpeningFamily::Closed => "Maintain a solid pawn structure and seek piece activity for counterplay.",
            OpeningFamily::Indian => "Allow White to establish a pawn center, then attack it with pieces and pawn breaks.",
        }
    }
}

/// A validated ECO code such as `C60`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EcoCode {
    family: OpeningFamily,
    number: u8,
}

impl EcoCode {
    pub fn new(family: OpeningFamily, number: u8) -> Result<Self, EcoError> {
        if number > 99 {
            return Err(EcoError::Invalid(format!("{}{number}", family.letter())));
        }
        Ok(Self { family, number })
    }

    pub fn family(&self) -> OpeningFamily {
        self.family
    }

    pub fn number(&self) -> u8 {
        self.number
    }

    /// Numeric form fed to the model (0-499).
    pub fn to_numeric(&self) -> u16 {
        self.family.index() * 100 + self.number as u16
    }

    pub fn from_numeric(value: u16) -> Result<Self, EcoError> {
        if value > MAX_NUMERIC {
            return Err(EcoError::OutOfRange(value));
        }
        let family = OpeningFamily::ALL[(value / 100) as usize];
        Ok(Self {
            family,
            number: (value % 100) as u8,
        })
    }
}

impl Default for EcoCode {
    fn default() -> Self {
        // C00, the French Defence
        Self {
            family: OpeningFamily::Open,
            number: 0,
        }
    }
}

impl FromStr for EcoCode {
    type Err = EcoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let caps = ECO_RE
            .captures(trimmed)
            .ok_or_else(|| EcoError::Invalid(s.to_string()))?;

        let family = caps[1]
            .chars()
            .next()
            .and_then(OpeningFamily::from_letter)
            .ok_or_else(|| EcoError::Invalid(s.to_string()))?;
        let number: u8 = caps[2]
            .parse()
            .map_err(|_| EcoError::Invalid(s.to_string()))?;

        Ok(Self { family, number })
    }
}

impl TryFrom<String> for EcoCode {
    type Error = EcoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EcoCode> for String {
    fn from(code: EcoCode) -> Self {
        code.to_string()
    }
}

impl fmt::Display for EcoCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:02}", self.family.letter(), self.number)
    }
}
