use super::{Requirement, Slot, SlotAssignment};
use crate::model::Staff;

/// Sélection gloutonne pour un créneau, dans l'ordre du roster.
///
/// Each eligible member is appended before the thresholds are checked, so a slot
/// requiring zero people still receives the first eligible member. Scanning stops only
/// once both `headcount` and `min_ability` are reached.
pub fn assign_slot(slot: Slot, staff: &[Staff], required: Requirement) -> SlotAssignment {
    let mut assigned = Vec::new();
    let mut count = 0u32;
    let mut ability_sum = 0u32;

    for member in staff {
        if !member.is_eligible(slot.day, slot.hour) {
            continue;
        }
        assigned.push(member.name.clone());
        ability_sum = ability_sum.saturating_add(member.ability);
        count += 1;

        if count >= required.headcount && ability_sum >= required.min_ability {
            break;
        }
    }

    SlotAssignment {
        day: slot.day,
        hour: slot.hour,
        assigned,
        required,
        ability_sum,
    }
}
