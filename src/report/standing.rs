use crate::*;
use serde::Serialize;

/// One player's equilibrium position and win probability.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Standing {
    pub label: String,
    pub position: Coordinate,
    pub probability: Probability,
}

impl Standing {
    /// Letter label for a 0-indexed seat: A, B, ..., Z, then P27, P28, ...
    pub fn label(seat: usize) -> String {
        match u8::try_from(seat) {
            Ok(i) if i < 26 => char::from(b'A' + i).to_string(),
            _ => format!("P{}", seat + 1),
        }
    }
    /// Render with `precision` decimal places.
    pub fn render(&self, precision: usize) -> String {
        format!(
            "player {} = {:.*}  (probability = {:.*})",
            self.label, precision, self.position, precision, self.probability
        )
    }
}

impl std::fmt::Display for Standing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.render(DEFAULT_PRECISION))
    }
}
