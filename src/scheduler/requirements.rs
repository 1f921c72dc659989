use super::{Requirement, SchedError};
use crate::config::ScheduleConfig;
use crate::model::{Day, Hour};

/// N(day, hour) depuis la table d'effectifs, M(hour) depuis la table de compétence.
pub fn resolve_requirement(
    config: &ScheduleConfig,
    day: Day,
    hour: Hour,
) -> Result<Requirement, SchedError> {
    let headcount = config
        .headcount_for(day, hour)
        .ok_or(SchedError::MissingHeadcount { day, hour })?;
    let min_ability = config
        .min_ability_for(hour)
        .ok_or(SchedError::MissingMinAbility { day, hour })?;
    Ok(Requirement {
        headcount,
        min_ability,
    })
}
