use super::PlayerRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    pub members: Vec<PlayerRecord>,
}

impl Team {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Number of members whose skill level equals `tier`.
    pub fn count_tier(&self, tier: &str) -> usize {
        self.members.iter().filter(|p| p.skill_level == tier).count()
    }
}

/// Result of one distribution request.
///
/// `teams.len()` always equals the requested team count, and the members of
/// all teams together are exactly the input roster.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamAssignment {
    pub teams: Vec<Team>,
}

impl TeamAssignment {
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Team> {
        self.teams.iter()
    }

    pub fn team_sizes(&self) -> Vec<usize> {
        self.teams.iter().map(Team::len).collect()
    }

    pub fn total_players(&self) -> usize {
        self.teams.iter().map(Team::len).sum()
    }

    /// Copy with each team sorted by descending tier rank, for display.
    ///
    /// Rank is the index of the member's skill level in `tiers`; levels not in
    /// `tiers` rank lowest. The sort is stable, and the assignment itself is
    /// not modified.
    pub fn sorted_for_display(&self, tiers: &[&str]) -> TeamAssignment {
        let rank = |level: &str| tiers.iter().position(|t| *t == level);

        let teams = self
            .teams
            .iter()
            .map(|team| {
                let mut members = team.members.clone();
                members.sort_by(|a, b| {
                    rank(b.skill_level.as_str()).cmp(&rank(a.skill_level.as_str()))
                });
                Team { members }
            })
            .collect();

        TeamAssignment { teams }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn team(members: &[(&str, &str)]) -> Team {
        Team {
            members: members
                .iter()
                .map(|(name, skill)| PlayerRecord::new(*name, "", *skill))
                .collect(),
        }
    }

    #[test]
    fn test_sorted_for_display_descending_rank() {
        let assignment = TeamAssignment {
            teams: vec![team(&[("A", "Good"), ("B", "Weak"), ("C", "Good")])],
        };

        let sorted = assignment.sorted_for_display(&["Good", "Weak"]);
        let names: Vec<&str> = sorted.teams[0]
            .members
            .iter()
            .map(|p| p.full_name.as_str())
            .collect();

        // Weak has the higher index, so it sorts first; A stays before C.
        assert_eq!(names, vec!["B", "A", "C"]);
        // source assignment is not reordered
        assert_eq!(assignment.teams[0].members[0].full_name, "A");
    }

    #[test]
    fn test_sizes_and_tier_counts() {
        let assignment = TeamAssignment {
            teams: vec![team(&[("A", "Good"), ("B", "Weak")]), team(&[("C", "Good")])],
        };
        assert_eq!(assignment.team_sizes(), vec![2, 1]);
        assert_eq!(assignment.total_players(), 3);
        assert_eq!(assignment.teams[0].count_tier("Good"), 1);
        assert_eq!(assignment.teams[1].count_tier("Weak"), 0);
    }
}
