//! JSON API for embedding hosts
//!
//! One request forms one set of teams. The request carries the raw roster
//! input, so a host can stay stateless between calls.
//!
//! ```json
//! {
//!   "schema_version": "v1",
//!   "input": { "format": "text", "data": "Alice, Striker, Good\nBob, Keeper, Weak" },
//!   "team_count": 2,
//!   "seed": 42
//! }
//! ```

use crate::distribution::{distribute_seeded, BalanceReport};
use crate::error::{ParseError, ValidationError};
use crate::models::PlayerRecord;
use crate::roster::{parse, RawInput};
use rand::Rng;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

pub const API_VERSION: &str = "v1";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid JSON request: {0}")]
    InvalidRequest(String),

    #[error("Unsupported schema version: {0}")]
    UnsupportedSchema(String),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Stable machine-readable code for hosts.
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::InvalidRequest(_) => "INVALID_REQUEST",
            ApiError::UnsupportedSchema(_) => "UNSUPPORTED_SCHEMA",
            ApiError::Parse(_) => "PARSE_ERROR",
            ApiError::Validation(ValidationError::NoPlayers) => "NO_PLAYERS",
            ApiError::Validation(ValidationError::InvalidTeamCount { .. }) => "INVALID_TEAM_COUNT",
            ApiError::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}

/// Roster input. Row cells may be any JSON scalar (hosts that infer types
/// send numbers and booleans) and are read as text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "format", content = "data", rename_all = "lowercase")]
pub enum InputPayload {
    Text(String),
    Rows(Vec<Vec<serde_json::Value>>),
    Csv(String),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FormTeamsRequest {
    #[serde(default)]
    pub schema_version: Option<String>,
    pub input: InputPayload,
    pub team_count: i64,
    #[serde(default)]
    pub seed: Option<u64>,
    #[serde(default = "default_sort")]
    pub sort_for_display: bool,
}

fn default_sort() -> bool {
    true
}

#[derive(Debug, Clone, Serialize)]
pub struct FormTeamsResponse {
    pub schema_version: String,
    pub seed: u64,
    pub roster_size: usize,
    pub skill_levels: Vec<String>,
    pub teams: Vec<Vec<PlayerRecord>>,
    pub balance: BalanceReport,
}

fn cell_text(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        other => other.to_string(),
    }
}

pub fn form_teams(request: &FormTeamsRequest) -> Result<FormTeamsResponse, ApiError> {
    if let Some(version) = &request.schema_version {
        if version != API_VERSION {
            return Err(ApiError::UnsupportedSchema(version.clone()));
        }
    }

    let roster = match &request.input {
        InputPayload::Text(text) => parse(RawInput::Text(text))?,
        InputPayload::Csv(csv) => parse(RawInput::Csv(csv.as_bytes()))?,
        InputPayload::Rows(rows) => {
            let rows: Vec<Vec<String>> = rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect();
            parse(RawInput::Rows(&rows))?
        }
    };

    // negative counts fall through to the same "invalid team count" error
    let team_count = usize::try_from(request.team_count).unwrap_or(0);
    let seed = request.seed.unwrap_or_else(|| rand::thread_rng().gen());
    debug!(seed, team_count, players = roster.len(), "form_teams request");

    let tiers = roster.skill_levels();
    let mut assignment = distribute_seeded(&roster, team_count, seed)?;
    let balance = BalanceReport::new(&assignment, &tiers);
    if request.sort_for_display {
        assignment = assignment.sorted_for_display(&tiers);
    }

    Ok(FormTeamsResponse {
        schema_version: API_VERSION.to_string(),
        seed,
        roster_size: roster.len(),
        skill_levels: tiers.iter().map(|t| t.to_string()).collect(),
        teams: assignment.teams.into_iter().map(|team| team.members).collect(),
        balance,
    })
}

/// String-in, string-out wrapper around [`form_teams`].
pub fn form_teams_json(request_json: &str) -> Result<String, ApiError> {
    let request: FormTeamsRequest = serde_json::from_str(request_json)
        .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

    let response = form_teams(&request).map_err(|err| {
        warn!(code = err.code(), error = %err, "form_teams_json failed");
        err
    })?;

    serde_json::to_string(&response).map_err(|e| ApiError::Serialization(e.to_string()))
}
