use crate::model::{Day, Hour};
use crate::scheduler::SchedError;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Options reconnues mais pas encore appliquées par l'assignation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reserved {
    pub leader_per_slot: u32,
    pub max_work_hours_per_day: u32,
    pub min_work_hours_per_day: u32,
}

impl Default for Reserved {
    fn default() -> Self {
        Self {
            leader_per_slot: 1,
            max_work_hours_per_day: 8,
            min_work_hours_per_day: 4,
        }
    }
}

/// Configuration complète d'une passe d'assignation.
///
/// `days` et `hours` sont ordonnés : leur ordre fixe l'ordre des créneaux produits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleConfig {
    pub days: Vec<Day>,
    pub hours: Vec<Hour>,
    #[serde(default)]
    pub holidays: BTreeSet<Day>,
    pub start_hour: Hour,
    pub end_hour: Hour,
    /// day -> hour -> effectif requis
    #[serde(default)]
    pub headcount: BTreeMap<Day, BTreeMap<Hour, u32>>,
    /// hour -> somme de compétence minimale
    #[serde(default)]
    pub min_ability: BTreeMap<Hour, u32>,
    #[serde(default)]
    pub reserved: Reserved,
}

impl Default for ScheduleConfig {
    fn default() -> Self {
        let mut cfg = Self::uniform((1..=7).collect(), (8..=20).collect(), 3, 5);
        cfg.holidays = [6, 7].into_iter().collect();
        cfg.start_hour = 8;
        cfg.end_hour = 18;
        cfg
    }
}

impl ScheduleConfig {
    /// Remplit les deux tables avec la même valeur pour chaque jour/heure.
    ///
    /// Fenêtre = min..=max des heures, aucun jour férié.
    pub fn uniform(days: Vec<Day>, hours: Vec<Hour>, headcount: u32, min_ability: u32) -> Self {
        let start_hour = hours.iter().copied().min().unwrap_or(0);
        let end_hour = hours.iter().copied().max().unwrap_or(0);
        let per_hour: BTreeMap<Hour, u32> = hours.iter().map(|&h| (h, headcount)).collect();
        Self {
            headcount: days.iter().map(|&d| (d, per_hour.clone())).collect(),
            min_ability: hours.iter().map(|&h| (h, min_ability)).collect(),
            days,
            hours,
            holidays: BTreeSet::new(),
            start_hour,
            end_hour,
            reserved: Reserved::default(),
        }
    }

    pub fn set_headcount(&mut self, day: Day, hour: Hour, n: u32) {
        self.headcount.entry(day).or_default().insert(hour, n);
    }

    pub fn set_min_ability(&mut self, hour: Hour, m: u32) {
        self.min_ability.insert(hour, m);
    }

    pub fn headcount_for(&self, day: Day, hour: Hour) -> Option<u32> {
        self.headcount.get(&day).and_then(|row| row.get(&hour)).copied()
    }

    pub fn min_ability_for(&self, hour: Hour) -> Option<u32> {
        self.min_ability.get(&hour).copied()
    }

    pub fn in_window(&self, hour: Hour) -> bool {
        self.start_hour <= hour && hour <= self.end_hour
    }

    /// Vérifie la cohérence des bornes (pas la complétude des tables).
    pub fn validate(&self) -> Result<(), SchedError> {
        if self.days.is_empty() {
            return Err(SchedError::InvalidConfig("at least one day is required".into()));
        }
        if self.hours.is_empty() {
            return Err(SchedError::InvalidConfig("at least one hour is required".into()));
        }
        if let Some(day) = self.days.iter().find(|d| !(1..=7).contains(*d)) {
            return Err(SchedError::InvalidConfig(format!(
                "day {day} out of range 1..=7"
            )));
        }
        if let Some(hour) = self.hours.iter().find(|h| **h > 23) {
            return Err(SchedError::InvalidConfig(format!(
                "hour {hour} out of range 0..=23"
            )));
        }
        if self.start_hour > self.end_hour {
            return Err(SchedError::InvalidConfig(format!(
                "start_hour {} after end_hour {}",
                self.start_hour, self.end_hour
            )));
        }
        let r = &self.reserved;
        if r.min_work_hours_per_day > r.max_work_hours_per_day {
            return Err(SchedError::InvalidConfig(
                "min_work_hours_per_day exceeds max_work_hours_per_day".into(),
            ));
        }
        Ok(())
    }

    /// Contrôle de complétude des tables, identique à celui de la passe.
    pub fn validate_tables(&self) -> Result<(), SchedError> {
        for slot in crate::scheduler::slot_space(self) {
            crate::scheduler::resolve_requirement(self, slot.day, slot.hour)?;
        }
        Ok(())
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read(path).with_context(|| format!("reading config {}", path.display()))?;
        let cfg: ScheduleConfig = serde_json::from_slice(&data)
            .with_context(|| format!("parsing config {}", path.display()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> anyhow::Result<()> {
        self.validate()?;
        let path = path.as_ref();
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).with_context(|| format!("writing config {}", path.display()))?;
        Ok(())
    }
}
