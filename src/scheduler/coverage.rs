use super::{Shortfall, SlotAssignment};

/// Liste les créneaux en sous-effectif (effectif ou compétence non atteints).
pub fn detect_shortfalls(results: &[SlotAssignment]) -> Vec<Shortfall> {
    results
        .iter()
        .filter_map(|r| {
            r.shortfall().map(|kind| Shortfall {
                slot: r.slot(),
                kind,
                assigned: r.headcount(),
                required: r.required.headcount,
                ability_sum: r.ability_sum,
                min_ability: r.required.min_ability,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::{Requirement, ShortfallKind, Slot};

    fn result(day: u8, assigned: &[&str], ability_sum: u32, n: u32, m: u32) -> SlotAssignment {
        SlotAssignment {
            day,
            hour: 9,
            assigned: assigned.iter().map(|s| s.to_string()).collect(),
            required: Requirement {
                headcount: n,
                min_ability: m,
            },
            ability_sum,
        }
    }

    #[test]
    fn classifies_each_kind_of_gap() {
        let results = vec![
            result(1, &["A"], 2, 1, 0),
            result(2, &["A"], 2, 2, 0),
            result(3, &["A", "B"], 3, 1, 5),
            result(4, &[], 0, 1, 1),
        ];
        let gaps = detect_shortfalls(&results);
        let kinds: Vec<(Slot, ShortfallKind)> = gaps.iter().map(|g| (g.slot, g.kind)).collect();
        assert_eq!(
            kinds,
            vec![
                (Slot { day: 2, hour: 9 }, ShortfallKind::Headcount),
                (Slot { day: 3, hour: 9 }, ShortfallKind::Ability),
                (Slot { day: 4, hour: 9 }, ShortfallKind::Both),
            ]
        );
        assert_eq!(gaps[0].assigned, 1);
        assert_eq!(gaps[0].required, 2);
    }

    #[test]
    fn zero_need_overstaffing_is_not_a_gap() {
        let results = vec![result(1, &["A"], 0, 0, 0)];
        assert!(detect_shortfalls(&results).is_empty());
    }
}
