//! Team Distributor
//!
//! Roster + team count → [`TeamAssignment`], balanced by skill tier:
//! 1. tier list = distinct skill levels in first-appearance order
//! 2. each tier shuffled independently (Fisher–Yates)
//! 3. tiers concatenated in tier order
//! 4. player `k` goes to team `k mod team_count`
//!
//! Team sizes and per-tier counts are fixed by the tier sizes and the team
//! count; the RNG only decides which players end up together. Preferred
//! position plays no part in the balancing.

pub mod balance;
pub mod shuffle;
pub mod tiers;


use crate::error::ValidationError;
use crate::models::{PlayerRecord, Roster, Team, TeamAssignment};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info, warn};

pub use balance::BalanceReport;
pub use shuffle::fisher_yates;
pub use tiers::group_by_tier;

/// Check the distributor preconditions.
///
/// An empty roster is reported before the team count is looked at.
pub fn validate(roster: &Roster, team_count: usize) -> Result<(), ValidationError> {
    if roster.is_empty() {
        return Err(ValidationError::NoPlayers);
    }

    if team_count == 0 || team_count > roster.len() {
        return Err(ValidationError::InvalidTeamCount {
            requested: team_count,
            players: roster.len(),
        });
    }

    Ok(())
}

/// Split `roster` into `team_count` skill-balanced teams.
///
/// # Arguments
///
/// * `roster` - Players to distribute (not modified)
/// * `team_count` - Number of teams, `1..=roster.len()`
/// * `rng` - Source of randomness for the per-tier shuffle
///
/// # Errors
///
/// [`ValidationError::NoPlayers`] for an empty roster,
/// [`ValidationError::InvalidTeamCount`] for a zero or too large team count.
pub fn distribute<R: Rng + ?Sized>(
    roster: &Roster,
    team_count: usize,
    rng: &mut R,
) -> Result<TeamAssignment, ValidationError> {
    if let Err(err) = validate(roster, team_count) {
        warn!(players = roster.len(), team_count, error = %err, "distribution rejected");
        return Err(err);
    }

    let mut flattened: Vec<&PlayerRecord> = Vec::with_capacity(roster.len());
    for (tier, mut members) in group_by_tier(roster) {
        debug!(tier, size = members.len(), "shuffling tier");
        fisher_yates(&mut members, rng);
        flattened.extend(members);
    }

    let mut teams = vec![Team::default(); team_count];
    for (k, player) in flattened.into_iter().enumerate() {
        teams[k % team_count].members.push(player.clone());
    }

    info!(players = roster.len(), team_count, "teams formed");
    Ok(TeamAssignment { teams })
}

/// [`distribute`] with a `ChaCha8Rng` seeded from `seed`; the same seed and
/// roster always give the same assignment.
pub fn distribute_seeded(
    roster: &Roster,
    team_count: usize,
    seed: u64,
) -> Result<TeamAssignment, ValidationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    distribute(roster, team_count, &mut rng)
}
