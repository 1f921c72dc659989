use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Numéro de jour (1 = lundi … 7 = dimanche).
pub type Day = u8;
/// Heure de la journée (0..=23).
pub type Hour = u8;

/// Rôle d'un membre du personnel.
///
/// `Leader` est conservé mais n'a aucun poids lors de l'assignation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    General,
    Leader,
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "general" | "一般" => Ok(Role::General),
            "leader" | "責任者" => Ok(Role::Leader),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::General => f.write_str("general"),
            Role::Leader => f.write_str("leader"),
        }
    }
}

/// Membre du personnel avec ses disponibilités.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub name: String,
    #[serde(default)]
    pub preferred_days: BTreeSet<Day>,
    #[serde(default)]
    pub available_hours: BTreeSet<Hour>,
    /// Réservé : collecté, jamais appliqué par l'assignation.
    #[serde(default)]
    pub max_days: u32,
    #[serde(default)]
    pub role: Role,
    #[serde(default = "default_ability")]
    pub ability: u32,
}

fn default_ability() -> u32 {
    1
}

impl Staff {
    /// Crée un membre en validant que le nom n'est pas vide.
    pub fn new<N: Into<String>>(
        name: N,
        preferred_days: impl IntoIterator<Item = Day>,
        available_hours: impl IntoIterator<Item = Hour>,
    ) -> Result<Self, String> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err("staff name cannot be empty".to_string());
        }
        Ok(Self {
            name,
            preferred_days: preferred_days.into_iter().collect(),
            available_hours: available_hours.into_iter().collect(),
            max_days: 0,
            role: Role::General,
            ability: default_ability(),
        })
    }

    pub fn with_ability(mut self, ability: u32) -> Self {
        self.ability = ability;
        self
    }

    pub fn with_role(mut self, role: Role) -> Self {
        self.role = role;
        self
    }

    pub fn with_max_days(mut self, max_days: u32) -> Self {
        self.max_days = max_days;
        self
    }

    /// Éligible pour `(day, hour)` ssi les deux ensembles les contiennent.
    pub fn is_eligible(&self, day: Day, hour: Hour) -> bool {
        self.preferred_days.contains(&day) && self.available_hours.contains(&hour)
    }
}

/// Liste ordonnée : l'ordre d'insertion est l'ordre de sélection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    pub staff: Vec<Staff>,
}

impl Roster {
    pub fn new(staff: Vec<Staff>) -> Self {
        Self { staff }
    }

    pub fn push(&mut self, staff: Staff) {
        self.staff.push(staff);
    }

    pub fn len(&self) -> usize {
        self.staff.len()
    }

    pub fn is_empty(&self) -> bool {
        self.staff.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Staff> {
        self.staff.iter()
    }

    /// Les noms ne sont pas uniques : renvoie la première occurrence.
    pub fn find_by_name<'a>(&'a self, name: &str) -> Option<&'a Staff> {
        self.staff.iter().find(|s| s.name == name)
    }
}
