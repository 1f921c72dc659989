//! Comptage par personne, tenu par l'appelant entre les passes.
//!
//! The assignment pass never mutates staff records; callers that need running totals
//! feed each pass's results into a [`WorkLedger`].

use crate::model::{Day, Roster};
use crate::scheduler::SlotAssignment;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WorkTally {
    pub slots: u32,
    pub days: BTreeSet<Day>,
}

impl WorkTally {
    pub fn day_count(&self) -> u32 {
        u32::try_from(self.days.len()).unwrap_or(u32::MAX)
    }
}

/// Personne dont le nombre de jours assignés dépasse `max_days`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayLimitExcess {
    pub name: String,
    pub days: u32,
    pub max_days: u32,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct WorkLedger {
    by_name: BTreeMap<String, WorkTally>,
}

impl WorkLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une passe. Duplicate names share one tally.
    pub fn record(&mut self, results: &[SlotAssignment]) {
        for r in results {
            for name in &r.assigned {
                let tally = self.by_name.entry(name.clone()).or_default();
                tally.slots += 1;
                tally.days.insert(r.day);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&WorkTally> {
        self.by_name.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WorkTally)> {
        self.by_name.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Rapport seulement : l'assignation n'applique jamais `max_days`.
    ///
    /// Members with `max_days == 0` are treated as having no limit.
    pub fn days_over_limit(&self, roster: &Roster) -> Vec<DayLimitExcess> {
        let mut seen = BTreeSet::new();
        roster
            .iter()
            .filter(|s| s.max_days > 0 && seen.insert(s.name.as_str()))
            .filter_map(|s| {
                let days = self.get(&s.name)?.day_count();
                (days > s.max_days).then(|| DayLimitExcess {
                    name: s.name.clone(),
                    days,
                    max_days: s.max_days,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Staff;
    use crate::scheduler::Requirement;

    fn result(day: u8, hour: u8, names: &[&str]) -> SlotAssignment {
        SlotAssignment {
            day,
            hour,
            assigned: names.iter().map(|n| n.to_string()).collect(),
            required: Requirement {
                headcount: 1,
                min_ability: 0,
            },
            ability_sum: 0,
        }
    }

    #[test]
    fn counts_slots_and_distinct_days() {
        let mut ledger = WorkLedger::new();
        ledger.record(&[
            result(1, 9, &["A", "B"]),
            result(1, 10, &["A"]),
            result(2, 9, &["A"]),
        ]);
        let a = ledger.get("A").unwrap();
        assert_eq!(a.slots, 3);
        assert_eq!(a.day_count(), 2);
        assert_eq!(ledger.get("B").unwrap().slots, 1);
        assert!(ledger.get("C").is_none());
    }

    #[test]
    fn accumulates_across_passes() {
        let mut ledger = WorkLedger::new();
        ledger.record(&[result(1, 9, &["A"])]);
        ledger.record(&[result(3, 9, &["A"])]);
        assert_eq!(ledger.get("A").unwrap().day_count(), 2);
    }

    #[test]
    fn reports_members_over_max_days() {
        let roster = Roster::new(vec![
            Staff::new("A", [1, 2], [9]).unwrap().with_max_days(1),
            Staff::new("B", [1, 2], [9]).unwrap(),
        ]);
        let mut ledger = WorkLedger::new();
        ledger.record(&[result(1, 9, &["A", "B"]), result(2, 9, &["A", "B"])]);
        assert_eq!(
            ledger.days_over_limit(&roster),
            vec![DayLimitExcess {
                name: "A".into(),
                days: 2,
                max_days: 1
            }]
        );
    }
}
