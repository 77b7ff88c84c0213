//! HTTP routes: health, daily and level puzzles, guess checking, hints, pools.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::addressing;
use crate::catalog::Catalog;
use crate::difficulty::{self, Difficulty, UnknownDifficulty};
use crate::hint::{HintError, HintResponse, HintService, LocalHintService};
use crate::puzzle::{GuessReport, PublicPuzzle, Puzzle};

#[derive(Clone)]
pub struct AppState {
    pub catalog: &'static Catalog,
    pub hints: Arc<dyn HintService>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            catalog: Catalog::global(),
            hints: Arc::new(LocalHintService),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    UnknownDifficulty(#[from] UnknownDifficulty),
    #[error("no puzzle for {difficulty} level {level}")]
    NoPuzzle { difficulty: Difficulty, level: u32 },
    #[error("no daily puzzle available")]
    NoDaily,
    #[error(transparent)]
    Hint(#[from] HintError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::UnknownDifficulty(_) => StatusCode::BAD_REQUEST,
            ApiError::NoPuzzle { .. } | ApiError::NoDaily => StatusCode::NOT_FOUND,
            ApiError::Hint(_) => StatusCode::UNPROCESSABLE_ENTITY,
        };
        tracing::debug!(%status, error = %self, "request rejected");
        (status, self.to_string()).into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct LevelPath {
    pub difficulty: String,
    pub level: u32,
}

#[derive(Debug, Deserialize)]
pub struct CheckRequest {
    pub guesses: BTreeMap<char, char>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HintQuery {
    pub encrypted_letter: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolEntry {
    pub id: u32,
    pub author: String,
    pub letter_count: usize,
}

pub async fn healthz() -> &'static str { "ok" }

fn level_puzzle(state: &AppState, path: LevelPath) -> Result<Puzzle, ApiError> {
    let difficulty: Difficulty = path.difficulty.parse()?;
    state
        .catalog
        .puzzle_for_level(difficulty, path.level)
        .ok_or(ApiError::NoPuzzle { difficulty, level: path.level })
}

fn daily(state: &AppState) -> Result<Puzzle, ApiError> {
    state
        .catalog
        .puzzle_for_date(addressing::today())
        .ok_or(ApiError::NoDaily)
}

fn hint_for(state: &AppState, puzzle: &Puzzle, letter: &str) -> Result<HintResponse, ApiError> {
    let response = state.hints.hint(&puzzle.hint_request(letter))?;
    tracing::info!(puzzle = puzzle.id, letter, "hint served");
    Ok(response)
}

pub async fn get_daily(State(state): State<AppState>) -> Result<Json<PublicPuzzle>, ApiError> {
    Ok(Json(daily(&state)?.public()))
}

pub async fn check_daily(
    State(state): State<AppState>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<GuessReport>, ApiError> {
    Ok(Json(daily(&state)?.check(&req.guesses)))
}

pub async fn hint_daily(
    State(state): State<AppState>,
    Json(req): Json<HintQuery>,
) -> Result<Json<HintResponse>, ApiError> {
    let puzzle = daily(&state)?;
    Ok(Json(hint_for(&state, &puzzle, &req.encrypted_letter)?))
}

pub async fn get_level(
    State(state): State<AppState>,
    Path(path): Path<LevelPath>,
) -> Result<Json<PublicPuzzle>, ApiError> {
    Ok(Json(level_puzzle(&state, path)?.public()))
}

pub async fn check_level(
    State(state): State<AppState>,
    Path(path): Path<LevelPath>,
    Json(req): Json<CheckRequest>,
) -> Result<Json<GuessReport>, ApiError> {
    let puzzle = level_puzzle(&state, path)?;
    let report = puzzle.check(&req.guesses);
    if report.solved {
        tracing::info!(puzzle = puzzle.id, "level solved");
    }
    Ok(Json(report))
}

pub async fn hint_level(
    State(state): State<AppState>,
    Path(path): Path<LevelPath>,
    Json(req): Json<HintQuery>,
) -> Result<Json<HintResponse>, ApiError> {
    let puzzle = level_puzzle(&state, path)?;
    Ok(Json(hint_for(&state, &puzzle, &req.encrypted_letter)?))
}

pub async fn get_pool(
    State(state): State<AppState>,
    Path(tag): Path<String>,
) -> Result<Json<Vec<PoolEntry>>, ApiError> {
    let difficulty: Difficulty = tag.parse()?;
    let entries = state
        .catalog
        .pool(difficulty)
        .into_iter()
        .map(|p| PoolEntry {
            id: p.id,
            author: p.author.clone(),
            letter_count: difficulty::letter_count(&p.quote),
        })
        .collect();
    Ok(Json(entries))
}
