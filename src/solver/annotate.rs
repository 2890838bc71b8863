use crate::types::{AnnotatedMove, Move};

pub const DEFAULT_HINT: &str = "Execute move carefully.";

const HINTS: [(&str, &str); 7] = [
    ("U", "Rotate the top layer to align cross pieces."),
    ("R", "Position right face edge correctly."),
    ("U'", "Undo top rotation to maintain orientation."),
    ("L", "Work on left side pairing."),
    ("F2", "Double turn to flip front edges."),
    ("D'", "Adjust bottom face for next step."),
    ("R2", "Place right corner efficiently."),
];

/// Looks up the teaching hint for a move token. Exact match only, so `u`
/// and `U` are different moves here.
pub fn hint_for(mv: &Move) -> &'static str {
    HINTS
        .iter()
        .find(|(token, _)| *token == mv.as_str())
        .map_or(DEFAULT_HINT, |&(_, hint)| hint)
}

pub fn annotate(moves: &[Move]) -> Vec<AnnotatedMove> {
    moves
        .iter()
        .map(|mv| AnnotatedMove {
            mv: mv.clone(),
            hint: hint_for(mv).to_string(),
        })
        .collect()
}
