use crate::catalog::Milestone;
use std::collections::BTreeSet;

pub fn newly_unlocked<'a>(
    catalog: &'a [Milestone],
    today_seconds: u64,
    unlocked: &mut BTreeSet<u64>,
) -> Vec<&'a Milestone> {
    let mut fresh = Vec::new();
    for milestone in catalog {
        if today_seconds >= milestone.time && unlocked.insert(milestone.time) {
            fresh.push(milestone);
        }
    }
    fresh
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MILESTONES;

    #[test]
    fn nothing_unlocks_below_first_threshold() {
        let mut unlocked = BTreeSet::new();
        assert!(newly_unlocked(MILESTONES, 59, &mut unlocked).is_empty());
        assert!(unlocked.is_empty());
    }

    #[test]
    fn crossing_a_threshold_unlocks_once() {
        let mut unlocked = BTreeSet::new();

        let fresh = newly_unlocked(MILESTONES, 60, &mut unlocked);
        assert_eq!(fresh.len(), 1);
        assert_eq!(fresh[0].title, "First Minute");

        let again = newly_unlocked(MILESTONES, 60, &mut unlocked);
        assert!(again.is_empty());
        assert_eq!(unlocked.len(), 1);
    }

    #[test]
    fn coalesced_jump_emits_batch_in_ascending_order() {
        let mut unlocked = BTreeSet::new();
        let fresh = newly_unlocked(MILESTONES, 900, &mut unlocked);

        let times: Vec<u64> = fresh.iter().map(|m| m.time).collect();
        assert_eq!(times, vec![60, 300, 600, 900]);
        assert!(!unlocked.contains(&1800));
    }

    #[test]
    fn already_unlocked_ids_are_skipped_mid_catalog() {
        let mut unlocked = BTreeSet::from([60, 600]);
        let fresh = newly_unlocked(MILESTONES, 600, &mut unlocked);

        let times: Vec<u64> = fresh.iter().map(|m| m.time).collect();
        assert_eq!(times, vec![300]);
    }
}
