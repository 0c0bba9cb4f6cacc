use crate::models::{PlayerRecord, Roster};

/// Players grouped by skill level, tiers in order of first appearance and
/// players within a tier in roster order.
pub fn group_by_tier(roster: &Roster) -> Vec<(&str, Vec<&PlayerRecord>)> {
    roster
        .skill_levels()
        .into_iter()
        .map(|tier| {
            let members = roster.iter().filter(|p| p.skill_level == tier).collect();
            (tier, members)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_tier() {
        let roster: Roster = vec![
            PlayerRecord::new("A", "", "Weak"),
            PlayerRecord::new("B", "", "Good"),
            PlayerRecord::new("C", "", "Weak"),
            PlayerRecord::new("D", "", ""),
        ]
        .into();

        let groups = group_by_tier(&roster);
        let shape: Vec<(&str, Vec<&str>)> = groups
            .iter()
            .map(|(tier, members)| {
                (*tier, members.iter().map(|p| p.full_name.as_str()).collect())
            })
            .collect();

        assert_eq!(
            shape,
            vec![("Weak", vec!["A", "C"]), ("Good", vec!["B"]), ("", vec!["D"])]
        );
    }
}
