use axum::{extract::State, routing::post, Router};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{error::ApiError, extractors::Json, solver, types::AnnotatedMove, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/solve", post(solve))
}

#[derive(Deserialize, Debug)]
struct SolveRequest {
    cube: String,
}

#[derive(Serialize, Debug)]
struct SolveResponse {
    solution: Vec<AnnotatedMove>,
}

async fn solve(
    State(state): State<AppState>,
    Json(req): Json<SolveRequest>,
) -> Result<Json<SolveResponse>, ApiError> {
    let solution = solver::solve(&req.cube, state.solver.as_ref()).map_err(|e| {
        debug!("Rejected cube {:?}: {e:?}", req.cube);
        e
    })?;

    debug!("Solved cube in {} moves", solution.len());

    Ok(Json(SolveResponse { solution }))
}
