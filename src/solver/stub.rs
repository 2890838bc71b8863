use crate::types::{FaceletString, Move, Solution};

use super::Solver;

// TODO: replace with a two-phase search once there's a cube state model to search over
const PLACEHOLDER_MOVES: [&str; 7] = ["U", "R", "U'", "L", "F2", "D'", "R2"];

/// Hands back the same seven moves for every cube.
#[derive(Debug, Default, Clone, Copy)]
pub struct StubSolver;

impl Solver for StubSolver {
    fn solve(&self, _cube: &FaceletString) -> Solution {
        Solution::Raw(PLACEHOLDER_MOVES.into_iter().map(Move::from).collect())
    }
}
