mod assignment;
mod collector;
mod coverage;
mod requirements;
mod slots;
mod types;

pub use assignment::assign_slot;
pub use collector::SlotCollector;
pub use coverage::detect_shortfalls;
pub use requirements::resolve_requirement;
pub use slots::slot_space;
pub use types::{Requirement, SchedError, Shortfall, ShortfallKind, Slot, SlotAssignment};

use crate::config::ScheduleConfig;
use crate::model::Staff;

/// Passe complète : (staff, config) -> un résultat par créneau, dans l'ordre de génération.
///
/// Fails on the first generated slot whose requirement is missing from either table;
/// no partial result is returned in that case. Understaffed slots are not errors.
pub fn assign_shifts(
    staff: &[Staff],
    config: &ScheduleConfig,
) -> Result<Vec<SlotAssignment>, SchedError> {
    let slots = slot_space(config);
    let mut collector = SlotCollector::with_capacity(slots.len());

    for slot in slots {
        let required = resolve_requirement(config, slot.day, slot.hour)?;
        let result = assign_slot(slot, staff, required);

        #[cfg(feature = "logging")]
        {
            tracing::debug!(
                day = slot.day,
                hour = slot.hour,
                assigned = result.assigned.len(),
                ability = result.ability_sum,
                "slot filled"
            );
            if let Some(kind) = result.shortfall() {
                tracing::warn!(
                    day = slot.day,
                    hour = slot.hour,
                    kind = kind.as_str(),
                    "slot understaffed"
                );
            }
        }

        collector.push(result);
    }

    #[cfg(feature = "logging")]
    tracing::info!(
        slots = collector.len(),
        staff = staff.len(),
        "assignment pass complete"
    );

    Ok(collector.finish())
}

/// Scheduler : encapsule une configuration validée.
#[derive(Debug, Clone)]
pub struct Scheduler {
    config: ScheduleConfig,
}

impl Scheduler {
    pub fn new(config: ScheduleConfig) -> Result<Self, SchedError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ScheduleConfig {
        &self.config
    }

    pub fn slots(&self) -> Vec<Slot> {
        slot_space(&self.config)
    }

    pub fn assign(&self, staff: &[Staff]) -> Result<Vec<SlotAssignment>, SchedError> {
        assign_shifts(staff, &self.config)
    }

    pub fn detect_shortfalls(&self, results: &[SlotAssignment]) -> Vec<Shortfall> {
        detect_shortfalls(results)
    }
}
