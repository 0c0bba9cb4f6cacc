//! # teamgen_core - Skill-Balanced Team Generator
//!
//! Splits a roster of players into teams so that team sizes and skill tiers
//! are spread as evenly as possible.
//!
//! ## Features
//! - Manual text (tab or comma separated) and CSV roster input
//! - Header row detection on the first row
//! - Per-tier shuffle + round-robin striping
//! - Injected RNG or seed (same seed = same teams)
//! - JSON API for embedding hosts

pub mod api;
pub mod config;
pub mod distribution;
pub mod error;
pub mod models;
pub mod roster;
pub mod session;

pub use api::{form_teams, form_teams_json, ApiError, FormTeamsRequest, FormTeamsResponse};
pub use config::TeamGenConfig;
pub use distribution::{distribute, distribute_seeded, validate, BalanceReport};
pub use error::{ConfigError, ParseError, ValidationError};
pub use models::{PlayerRecord, Roster, Team, TeamAssignment};
pub use roster::{parse, parse_rows, parse_text, RawInput, SourceFormat};
pub use session::TeamGenSession;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
