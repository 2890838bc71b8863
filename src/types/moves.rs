use serde::{Deserialize, Serialize};

/// A single turn in cube notation, e.g. `U`, `R2` or `U'`.
///
/// Treated as an opaque token, nothing looks at the face or the modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Move(String);

impl Move {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Move {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedMove {
    #[serde(rename = "move")]
    pub mv: Move,
    pub hint: String,
}

/// What a solver hands back: either bare moves that still need hints,
/// or moves it already annotated itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    Raw(Vec<Move>),
    Annotated(Vec<AnnotatedMove>),
}
