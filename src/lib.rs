#![forbid(unsafe_code)]
//! Shiftplan — remplissage glouton de créneaux horaires à partir d'un roster (sans BD).
//!
//! - Créneaux (jour, heure) hors jours fériés et dans la fenêtre globale.
//! - Sélection dans l'ordre du roster jusqu'à l'effectif et la compétence requis.
//! - Sous-effectif rendu comme donnée, tables incomplètes rendues comme erreur.
//! - Stockage fichiers (JSON/CSV).

pub mod config;
pub mod io;
pub mod ledger;
pub mod model;
pub mod scheduler;
pub mod storage;

pub use config::{Reserved, ScheduleConfig};
pub use ledger::{DayLimitExcess, WorkLedger, WorkTally};
pub use model::{Day, Hour, Role, Roster, Staff};
pub use scheduler::{
    assign_shifts, detect_shortfalls, Requirement, SchedError, Scheduler, Shortfall,
    ShortfallKind, Slot, SlotAssignment,
};
pub use storage::{JsonStorage, Storage};
