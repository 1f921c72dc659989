use crate::model::{Day, Role, Roster, Staff};
use crate::scheduler::{Shortfall, SlotAssignment};
use anyhow::{bail, Context};
use chrono::Weekday;
use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::collections::BTreeSet;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// Import du personnel depuis CSV.
///
/// Header `name,preferred_days,available_hours[,max_days][,role][,ability]`.
/// List cells accept `,` or `;` separators; tokens that are not numbers are skipped.
pub fn import_staff_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<Staff>> {
    let path = path.as_ref();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (line, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?;
        if name.is_empty() {
            bail!("invalid staff row {} (empty name)", line + 1);
        }
        let days = parse_number_list(rec.get(1).unwrap_or(""));
        let hours = parse_number_list(rec.get(2).unwrap_or(""));
        let mut staff = Staff::new(name, days, hours).map_err(anyhow::Error::msg)?;

        if let Some(raw) = rec.get(3).filter(|s| !s.is_empty()) {
            staff.max_days = raw
                .parse::<u32>()
                .with_context(|| format!("invalid max_days for {name}"))?;
        }
        if let Some(raw) = rec.get(4) {
            staff.role = raw
                .parse::<Role>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("invalid role for {name}"))?;
        }
        if let Some(raw) = rec.get(5).filter(|s| !s.is_empty()) {
            staff.ability = raw
                .parse::<u32>()
                .with_context(|| format!("invalid ability for {name}"))?;
        }
        out.push(staff);
    }
    Ok(out)
}

/// "1,2,x;3" -> {1, 2, 3}
pub fn parse_number_list(raw: &str) -> BTreeSet<u8> {
    raw.split([',', ';'])
        .filter_map(|tok| tok.trim().parse().ok())
        .collect()
}

/// Export JSON des résultats (jolie mise en forme)
pub fn export_results_json<P: AsRef<Path>>(
    path: P,
    results: &[SlotAssignment],
) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(results)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV: header `day,hour,assigned,required,min_ability,ability_sum` (assigned joint par `;`)
pub fn export_results_csv<P: AsRef<Path>>(
    path: P,
    results: &[SlotAssignment],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "day",
        "hour",
        "assigned",
        "required",
        "min_ability",
        "ability_sum",
    ])?;
    for r in results {
        w.write_record([
            r.day.to_string(),
            r.hour.to_string(),
            r.assigned.join(";"),
            r.required.headcount.to_string(),
            r.required.min_ability.to_string(),
            r.ability_sum.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// Export CSV des sous-effectifs: header `day,hour,kind,assigned,required,ability_sum,min_ability`
pub fn export_shortfalls_csv<P: AsRef<Path>>(
    path: P,
    shortfalls: &[Shortfall],
) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record([
        "day",
        "hour",
        "kind",
        "assigned",
        "required",
        "ability_sum",
        "min_ability",
    ])?;
    for s in shortfalls {
        w.write_record([
            s.slot.day.to_string(),
            s.slot.hour.to_string(),
            s.kind.as_str().to_string(),
            s.assigned.to_string(),
            s.required.to_string(),
            s.ability_sum.to_string(),
            s.min_ability.to_string(),
        ])?;
    }
    w.flush()?;
    Ok(())
}

/// 1 -> "Mon" … 7 -> "Sun", sinon le numéro brut.
pub fn day_label(day: Day) -> String {
    day.checked_sub(1)
        .and_then(|idx| Weekday::try_from(idx).ok())
        .map(|wd| wd.to_string())
        .unwrap_or_else(|| day.to_string())
}

/// Une ligne par créneau : `Mon 9h: A,B`.
pub fn render_results(results: &[SlotAssignment]) -> String {
    let mut out = String::new();
    for r in results {
        let _ = writeln!(
            out,
            "{} {}h: {}",
            day_label(r.day),
            r.hour,
            r.assigned.join(",")
        );
    }
    out
}

pub fn render_roster(roster: &Roster) -> String {
    let mut out = String::new();
    for s in roster.iter() {
        let days: Vec<String> = s.preferred_days.iter().map(u8::to_string).collect();
        let hours: Vec<String> = s.available_hours.iter().map(u8::to_string).collect();
        let _ = writeln!(
            out,
            "{} | days {} | hours {} | max {} | {} | ability {}",
            s.name,
            days.join(","),
            hours.join(","),
            s.max_days,
            s.role,
            s.ability
        );
    }
    out
}
