//! Per-team tier counts for an assignment.
//!
//! Used by the CLI summary and by tests to check the size and tier-spread
//! bounds of a distribution.

use crate::models::TeamAssignment;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BalanceReport {
    pub tiers: Vec<String>,
    /// `counts[team][tier]`
    pub counts: Vec<Vec<usize>>,
    pub team_sizes: Vec<usize>,
}

impl BalanceReport {
    pub fn new(assignment: &TeamAssignment, tiers: &[&str]) -> Self {
        let counts = assignment
            .iter()
            .map(|team| tiers.iter().map(|tier| team.count_tier(tier)).collect())
            .collect();

        Self {
            tiers: tiers.iter().map(|t| t.to_string()).collect(),
            counts,
            team_sizes: assignment.team_sizes(),
        }
    }

    pub fn team_count(&self) -> usize {
        self.team_sizes.len()
    }

    /// Size of `tier_idx` summed over all teams, `None` past the last tier.
    pub fn tier_total(&self, tier_idx: usize) -> Option<usize> {
        if tier_idx >= self.tiers.len() {
            return None;
        }
        Some(
            self.counts
                .iter()
                .filter_map(|row| row.get(tier_idx))
                .sum(),
        )
    }

    /// Team sizes differ by at most one.
    pub fn sizes_balanced(&self) -> bool {
        match (self.team_sizes.iter().min(), self.team_sizes.iter().max()) {
            (Some(min), Some(max)) => max - min <= 1,
            _ => true,
        }
    }

    /// Every tier of size S puts between ⌊S/T⌋ and ⌈S/T⌉ players on each team.
    pub fn tiers_spread(&self) -> bool {
        let teams = self.team_count();
        if teams == 0 {
            return true;
        }

        (0..self.tiers.len()).all(|idx| {
            let total = self.tier_total(idx).unwrap_or(0);
            let floor = total / teams;
            let ceil = total.div_ceil(teams);
            self.counts.iter().all(|row| {
                row.get(idx)
                    .is_some_and(|count| (floor..=ceil).contains(count))
            })
        })
    }

    pub fn is_balanced(&self) -> bool {
        self.sizes_balanced() && self.tiers_spread()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlayerRecord, Team};

    fn team(skills: &[&str]) -> Team {
        Team {
            members: skills
                .iter()
                .enumerate()
                .map(|(i, s)| PlayerRecord::new(format!("P{}", i), "", *s))
                .collect(),
        }
    }

    #[test]
    fn test_balanced_assignment() {
        let assignment = TeamAssignment {
            teams: vec![team(&["Good", "Weak"]), team(&["Good", "Weak"])],
        };
        let report = BalanceReport::new(&assignment, &["Good", "Weak"]);

        assert_eq!(report.counts, vec![vec![1, 1], vec![1, 1]]);
        assert_eq!(report.tier_total(0), Some(2));
        assert_eq!(report.tier_total(2), None);
        assert!(report.is_balanced());
    }

    #[test]
    fn test_unbalanced_tiers_detected() {
        // sizes are fine but both Good players sit on one team
        let assignment = TeamAssignment {
            teams: vec![team(&["Good", "Good"]), team(&["Weak", "Weak"])],
        };
        let report = BalanceReport::new(&assignment, &["Good", "Weak"]);

        assert!(report.sizes_balanced());
        assert!(!report.tiers_spread());
    }

    #[test]
    fn test_unbalanced_sizes_detected() {
        let assignment = TeamAssignment {
            teams: vec![team(&["Good", "Good", "Good"]), team(&["Good"])],
        };
        let report = BalanceReport::new(&assignment, &["Good"]);
        assert!(!report.sizes_balanced());
    }
}
