use crate::model::{Day, Hour};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Un créneau (jour, heure).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Slot {
    pub day: Day,
    pub hour: Hour,
}

/// Seuils d'un créneau : effectif `headcount` (N) et compétence cumulée `min_ability` (M).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    pub headcount: u32,
    pub min_ability: u32,
}

/// Résultat d'un créneau. `assigned` garde l'ordre de sélection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotAssignment {
    pub day: Day,
    pub hour: Hour,
    pub assigned: Vec<String>,
    pub required: Requirement,
    pub ability_sum: u32,
}

impl SlotAssignment {
    pub fn slot(&self) -> Slot {
        Slot {
            day: self.day,
            hour: self.hour,
        }
    }

    pub fn headcount(&self) -> u32 {
        u32::try_from(self.assigned.len()).unwrap_or(u32::MAX)
    }

    pub fn is_understaffed(&self) -> bool {
        self.shortfall().is_some()
    }

    pub fn shortfall(&self) -> Option<ShortfallKind> {
        let short_count = self.headcount() < self.required.headcount;
        let short_ability = self.ability_sum < self.required.min_ability;
        match (short_count, short_ability) {
            (false, false) => None,
            (true, false) => Some(ShortfallKind::Headcount),
            (false, true) => Some(ShortfallKind::Ability),
            (true, true) => Some(ShortfallKind::Both),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortfallKind {
    Headcount,
    Ability,
    Both,
}

impl ShortfallKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ShortfallKind::Headcount => "headcount",
            ShortfallKind::Ability => "ability",
            ShortfallKind::Both => "both",
        }
    }
}

/// Créneau en sous-effectif : ce n'est pas une erreur, c'est une donnée à examiner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Shortfall {
    pub slot: Slot,
    pub kind: ShortfallKind,
    pub assigned: u32,
    pub required: u32,
    pub ability_sum: u32,
    pub min_ability: u32,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("no headcount entry for day {day}, hour {hour}")]
    MissingHeadcount { day: Day, hour: Hour },
    #[error("no minimum ability entry for hour {hour} (slot day {day})")]
    MissingMinAbility { day: Day, hour: Hour },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl SchedError {
    /// Tables incomplètes pour un créneau généré : fatal pour la passe.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            SchedError::MissingHeadcount { .. } | SchedError::MissingMinAbility { .. }
        )
    }

    pub fn slot(&self) -> Option<Slot> {
        match *self {
            SchedError::MissingHeadcount { day, hour }
            | SchedError::MissingMinAbility { day, hour } => Some(Slot { day, hour }),
            _ => None,
        }
    }
}
