mod annotate;
mod stub;

pub use annotate::annotate;
pub use stub::StubSolver;

use crate::types::{AnnotatedMove, FaceletString, InvalidFormat, Solution};

/// Turns a validated cube into a move sequence.
pub trait Solver {
    fn solve(&self, cube: &FaceletString) -> Solution;
}

/// Raw moves get hints from the table, moves the solver already annotated
/// are returned untouched.
pub fn resolve(solution: Solution) -> Vec<AnnotatedMove> {
    match solution {
        Solution::Raw(moves) => annotate(&moves),
        Solution::Annotated(moves) => moves,
    }
}

/// Validate, solve, then make sure every move carries a hint.
pub fn solve(cube: &str, solver: &dyn Solver) -> Result<Vec<AnnotatedMove>, InvalidFormat> {
    let cube = FaceletString::parse(cube)?;
    Ok(resolve(solver.solve(&cube)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Move;

    struct Scripted;

    impl Solver for Scripted {
        fn solve(&self, _cube: &FaceletString) -> Solution {
            Solution::Annotated(vec![AnnotatedMove {
                mv: Move::from("U"),
                hint: "already annotated".to_string(),
            }])
        }
    }

    #[test]
    fn annotated_solution_passes_through() {
        let moves = vec![
            AnnotatedMove { mv: Move::from("U"), hint: "custom".to_string() },
            AnnotatedMove { mv: Move::from("Z"), hint: "".to_string() },
        ];
        assert_eq!(resolve(Solution::Annotated(moves.clone())), moves);
    }

    #[test]
    fn raw_solution_gets_hints() {
        let annotated = resolve(Solution::Raw(vec![Move::from("L"), Move::from("B'")]));
        assert_eq!(annotated[0].hint, "Work on left side pairing.");
        assert_eq!(annotated[1].hint, "Execute move carefully.");
    }

    #[test]
    fn solved_cube_gets_fixed_annotated_sequence() {
        let solution = solve(&"U".repeat(54), &StubSolver).unwrap();
        let pairs: Vec<(&str, &str)> = solution
            .iter()
            .map(|m| (m.mv.as_str(), m.hint.as_str()))
            .collect();

        assert_eq!(
            pairs,
            [
                ("U", "Rotate the top layer to align cross pieces."),
                ("R", "Position right face edge correctly."),
                ("U'", "Undo top rotation to maintain orientation."),
                ("L", "Work on left side pairing."),
                ("F2", "Double turn to flip front edges."),
                ("D'", "Adjust bottom face for next step."),
                ("R2", "Place right corner efficiently."),
            ]
        );
    }

    #[test]
    fn short_input_is_rejected() {
        let err = solve(&"R".repeat(53), &StubSolver).unwrap_err();
        assert_eq!(err.to_string(), "Cube string must be exactly 54 characters.");
    }

    #[test]
    fn foreign_character_is_rejected() {
        let cube = format!("X{}", "U".repeat(53));
        let err = solve(&cube, &StubSolver).unwrap_err();
        assert_eq!(err.to_string(), "Cube contains invalid characters.");
    }

    #[test]
    fn pre_annotated_solution_skips_annotation() {
        let solution = solve(&"b".repeat(54), &Scripted).unwrap();
        assert_eq!(solution.len(), 1);
        assert_eq!(solution[0].hint, "already annotated");
    }

    #[test]
    fn invalid_input_never_reaches_solver() {
        struct Unreachable;
        impl Solver for Unreachable {
            fn solve(&self, _cube: &FaceletString) -> Solution {
                panic!("solver called with invalid cube");
            }
        }
        assert!(solve("", &Unreachable).is_err());
    }
}
