//! Interactive session state
//!
//! Holds what the team generator page used to keep in component state: the
//! current roster, the requested team count, the last formed teams and the
//! current error message. Each attempt replaces the error message; failed
//! attempts leave the roster and teams as they were.
//!
//! Loading a new roster does not clear the teams. Display order and the
//! balance report always use the tier list the teams were formed with.

use crate::config::TeamGenConfig;
use crate::distribution::{distribute, BalanceReport};
use crate::error::ParseError;
use crate::models::{Roster, TeamAssignment};
use crate::roster::{parse, parse_rows, parse_text, RawInput};
use rand::Rng;
use tracing::debug;

#[derive(Debug, Clone, Default)]
pub struct TeamGenSession {
    roster: Roster,
    team_count: usize,
    teams: Option<TeamAssignment>,
    /// Tier order of `roster` at the time `teams` was formed.
    team_tiers: Vec<String>,
    error: String,
}

impl TeamGenSession {
    pub fn new(team_count: usize) -> Self {
        Self {
            team_count,
            ..Self::default()
        }
    }

    pub fn from_config(config: &TeamGenConfig) -> Self {
        Self::new(config.default_team_count)
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn team_count(&self) -> usize {
        self.team_count
    }

    pub fn set_team_count(&mut self, team_count: usize) {
        self.team_count = team_count;
    }

    pub fn teams(&self) -> Option<&TeamAssignment> {
        self.teams.as_ref()
    }

    /// Current error message, empty when the last attempt succeeded.
    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn skill_levels(&self) -> Vec<&str> {
        self.roster.skill_levels()
    }

    /// Manual text never fails to parse.
    pub fn load_manual_input(&mut self, text: &str) {
        self.replace_roster(parse_text(text));
    }

    pub fn load_rows(&mut self, rows: &[Vec<String>]) {
        self.replace_roster(parse_rows(rows));
    }

    pub fn load_csv(&mut self, bytes: &[u8]) -> Result<(), ParseError> {
        self.load(RawInput::Csv(bytes))
    }

    /// Replace the roster from `input`. On failure the roster and teams are
    /// kept and only the error message changes.
    pub fn load(&mut self, input: RawInput<'_>) -> Result<(), ParseError> {
        match parse(input) {
            Ok(roster) => {
                self.replace_roster(roster);
                Ok(())
            }
            Err(err) => {
                self.error = err.to_string();
                Err(err)
            }
        }
    }

    fn replace_roster(&mut self, roster: Roster) {
        debug!(players = roster.len(), "roster loaded");
        self.roster = roster;
        self.error.clear();
    }

    /// Form teams from the current roster and team count.
    ///
    /// On a validation failure the previous teams stay in place.
    pub fn form_teams<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<&TeamAssignment> {
        match distribute(&self.roster, self.team_count, rng) {
            Ok(assignment) => {
                self.team_tiers = self
                    .roster
                    .skill_levels()
                    .into_iter()
                    .map(String::from)
                    .collect();
                self.teams = Some(assignment);
                self.error.clear();
            }
            Err(err) => {
                self.error = err.to_string();
                return None;
            }
        }
        self.teams.as_ref()
    }

    /// Tier list the current teams were formed with.
    pub fn team_tiers(&self) -> Vec<&str> {
        self.team_tiers.iter().map(String::as_str).collect()
    }

    /// Teams with members sorted by descending tier rank.
    pub fn sorted_teams(&self) -> Option<TeamAssignment> {
        let tiers = self.team_tiers();
        self.teams.as_ref().map(|teams| teams.sorted_for_display(&tiers))
    }

    pub fn balance_report(&self) -> Option<BalanceReport> {
        let tiers = self.team_tiers();
        self.teams
            .as_ref()
            .map(|teams| BalanceReport::new(teams, &tiers))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const INPUT: &str = "Alice, Striker, Good\nBob, Keeper, Good\nCara, Defender, Weak";

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(3)
    }

    #[test]
    fn test_form_teams_after_manual_input() {
        let mut session = TeamGenSession::new(2);
        session.load_manual_input(INPUT);
        assert_eq!(session.skill_levels(), vec!["Good", "Weak"]);

        let teams = session.form_teams(&mut rng()).unwrap();
        assert_eq!(teams.total_players(), 3);
        assert_eq!(session.error(), "");
    }

    #[test]
    fn test_form_teams_without_roster_reports_error() {
        let mut session = TeamGenSession::new(2);
        assert!(session.form_teams(&mut rng()).is_none());
        assert_eq!(session.error(), "no players available");
        assert!(session.teams().is_none());
    }

    #[test]
    fn test_validation_error_keeps_stale_teams() {
        let mut session = TeamGenSession::new(2);
        session.load_manual_input(INPUT);
        let formed = session.form_teams(&mut rng()).cloned().unwrap();

        session.set_team_count(9);
        assert!(session.form_teams(&mut rng()).is_none());
        assert_eq!(session.error(), "invalid team count");
        assert_eq!(session.teams(), Some(&formed));
    }

    #[test]
    fn test_csv_error_keeps_roster_and_teams() {
        let mut session = TeamGenSession::new(1);
        session.load_manual_input(INPUT);
        session.form_teams(&mut rng());
        let roster = session.roster().clone();

        let err = session.load_csv(b"Dan,\xff,Weak\n").unwrap_err();
        assert_eq!(session.error(), err.to_string());
        assert!(session.error().starts_with("Error parsing CSV: "));
        assert_eq!(session.roster(), &roster);
        assert!(session.teams().is_some());
    }

    #[test]
    fn test_successful_load_clears_error() {
        let mut session = TeamGenSession::new(2);
        session.form_teams(&mut rng());
        assert!(!session.error().is_empty());

        session.load_csv(b"Alice,ST,Good\nBob,GK,Weak\n").unwrap();
        assert_eq!(session.error(), "");
        assert_eq!(session.roster().len(), 2);
    }

    #[test]
    fn test_sorted_teams_and_report() {
        let mut session = TeamGenSession::new(1);
        session.load_rows(&[
            vec!["Alice".into(), "ST".into(), "Good".into()],
            vec!["Cara".into(), "DF".into(), "Weak".into()],
            vec!["Bob".into(), "GK".into(), "Good".into()],
        ]);
        session.form_teams(&mut rng());

        let sorted = session.sorted_teams().unwrap();
        assert_eq!(sorted.teams[0].members[0].skill_level, "Weak");

        let report = session.balance_report().unwrap();
        assert_eq!(report.counts, vec![vec![2, 1]]);
    }

    #[test]
    fn test_report_uses_tiers_teams_were_formed_with() {
        let mut session = TeamGenSession::new(1);
        session.load_manual_input("Alice, ST, Good\nCara, DF, Weak\nBob, GK, Good");
        session.form_teams(&mut rng());

        session.load_manual_input("Dan, MF, Average\nEve, ST, Weak");
        assert_eq!(session.skill_levels(), vec!["Average", "Weak"]);
        assert_eq!(session.team_tiers(), vec!["Good", "Weak"]);

        let report = session.balance_report().unwrap();
        assert_eq!(report.tiers, vec!["Good", "Weak"]);
        assert_eq!(report.counts, vec![vec![2, 1]]);

        let sorted = session.sorted_teams().unwrap();
        assert_eq!(sorted.teams[0].members[0].full_name, "Cara");
    }

    #[test]
    fn test_from_config() {
        let session = TeamGenSession::from_config(&TeamGenConfig::default());
        assert_eq!(session.team_count(), 2);
    }
}
