use super::Slot;
use crate::config::ScheduleConfig;

/// Énumère les créneaux candidats : jours fériés et heures hors fenêtre exclus.
///
/// Keeps the configured day order, then the configured hour order within each day.
pub fn slot_space(config: &ScheduleConfig) -> Vec<Slot> {
    config
        .days
        .iter()
        .filter(|&&day| !config.holidays.contains(&day))
        .flat_map(|&day| {
            config
                .hours
                .iter()
                .filter(|&&hour| config.in_window(hour))
                .map(move |&hour| Slot { day, hour })
        })
        .collect()
}
