use serde::{Deserialize, Serialize};

/// One participant to be placed on a team.
///
/// All three fields are free-form text taken from the input. A field that was
/// missing from a short row is stored as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerRecord {
    pub full_name: String,
    pub preferred_position: String,
    pub skill_level: String,
}

impl PlayerRecord {
    pub fn new(
        full_name: impl Into<String>,
        preferred_position: impl Into<String>,
        skill_level: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            preferred_position: preferred_position.into(),
            skill_level: skill_level.into(),
        }
    }

    /// Display line: `name - position (skill)`
    pub fn display(&self) -> String {
        format!(
            "{} - {} ({})",
            self.full_name, self.preferred_position, self.skill_level
        )
    }
}

/// Ordered list of players, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    players: Vec<PlayerRecord>,
}

impl Roster {
    pub fn new(players: Vec<PlayerRecord>) -> Self {
        Self { players }
    }

    pub fn players(&self) -> &[PlayerRecord] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlayerRecord> {
        self.players.iter()
    }

    /// Distinct skill levels in order of first appearance.
    ///
    /// This is the tier list used both for balancing and for the
    /// "detected skill levels" summary.
    pub fn skill_levels(&self) -> Vec<&str> {
        let mut tiers: Vec<&str> = Vec::new();
        for player in &self.players {
            if !tiers.contains(&player.skill_level.as_str()) {
                tiers.push(player.skill_level.as_str());
            }
        }
        tiers
    }
}

impl From<Vec<PlayerRecord>> for Roster {
    fn from(players: Vec<PlayerRecord>) -> Self {
        Self::new(players)
    }
}

impl FromIterator<PlayerRecord> for Roster {
    fn from_iter<I: IntoIterator<Item = PlayerRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a PlayerRecord;
    type IntoIter = std::slice::Iter<'a, PlayerRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.players.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_skill_levels_first_appearance_order() {
        let roster: Roster = vec![
            PlayerRecord::new("A", "ST", "Weak"),
            PlayerRecord::new("B", "GK", "Good"),
            PlayerRecord::new("C", "DF", "Weak"),
            PlayerRecord::new("D", "MF", "Average"),
        ]
        .into();

        assert_eq!(roster.skill_levels(), vec!["Weak", "Good", "Average"]);
    }

    #[test]
    fn test_empty_roster_has_no_tiers() {
        let roster = Roster::default();
        assert!(roster.is_empty());
        assert!(roster.skill_levels().is_empty());
    }

    #[test]
    fn test_display_line() {
        let player = PlayerRecord::new("Alice", "Striker", "Good");
        assert_eq!(player.display(), "Alice - Striker (Good)");
    }

    #[test]
    fn test_roster_serializes_as_list() {
        let roster: Roster = vec![PlayerRecord::new("Alice", "Striker", "Good")].into();
        let json = serde_json::to_value(&roster).unwrap();
        assert_eq!(json[0]["full_name"], "Alice");
        assert_eq!(json[0]["skill_level"], "Good");
    }
}
