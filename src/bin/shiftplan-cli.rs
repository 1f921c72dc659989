#![forbid(unsafe_code)]
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use shiftplan::{
    io,
    ledger::WorkLedger,
    model::{Role, Staff},
    scheduler::Scheduler,
    storage::{JsonStorage, Storage},
    ScheduleConfig,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI d'affectation de créneaux horaires (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON du personnel
    #[arg(long, global = true, default_value = "staff.json")]
    staff: String,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Ajouter un membre en fin de roster
    AddStaff {
        #[arg(long)]
        name: String,
        /// liste "1,2,3"
        #[arg(long)]
        days: String,
        /// liste "8,9,10"
        #[arg(long)]
        hours: String,
        #[arg(long, default_value_t = 5)]
        max_days: u32,
        /// general | leader
        #[arg(long, default_value = "general")]
        role: String,
        #[arg(long, default_value_t = 1)]
        ability: u32,
    },

    /// Importer le personnel depuis un CSV (remplace le roster sauf --append)
    ImportStaff {
        #[arg(long)]
        csv: String,
        #[arg(long)]
        append: bool,
    },

    /// Lister le personnel dans l'ordre de sélection
    ListStaff,

    /// Écrire une configuration par défaut
    InitConfig {
        #[arg(long, default_value = "config.json")]
        out: String,
        #[arg(long)]
        force: bool,
    },

    /// Affecter le personnel aux créneaux
    Assign {
        #[arg(long, default_value = "config.json")]
        config: String,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier les créneaux en sous-effectif
    Check {
        #[arg(long, default_value = "config.json")]
        config: String,
        /// Export CSV des sous-effectifs (optionnel)
        #[arg(long)]
        report: Option<String>,
    },

    /// Compter créneaux et jours par personne
    Ledger {
        #[arg(long, default_value = "config.json")]
        config: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let storage = JsonStorage::open(&cli.staff)?;
    let mut roster = storage.load_or_default()?;

    let code = match cli.cmd {
        Commands::AddStaff {
            name,
            days,
            hours,
            max_days,
            role,
            ability,
        } => {
            let role: Role = role.parse().map_err(anyhow::Error::msg)?;
            let staff = Staff::new(
                name,
                io::parse_number_list(&days),
                io::parse_number_list(&hours),
            )
            .map_err(anyhow::Error::msg)?
            .with_max_days(max_days)
            .with_role(role)
            .with_ability(ability);
            roster.push(staff);
            storage.save(&roster)?;
            0
        }
        Commands::ImportStaff { csv, append } => {
            let staff = io::import_staff_csv(csv)?;
            if !append {
                roster.staff.clear();
            }
            roster.staff.extend(staff);
            storage.save(&roster)?;
            0
        }
        Commands::ListStaff => {
            print!("{}", io::render_roster(&roster));
            0
        }
        Commands::InitConfig { out, force } => {
            if !force && std::path::Path::new(&out).exists() {
                bail!("{out} already exists (use --force to overwrite)");
            }
            ScheduleConfig::default().save_to_file(&out)?;
            0
        }
        Commands::Assign {
            config,
            out_json,
            out_csv,
        } => {
            let scheduler = Scheduler::new(ScheduleConfig::load_from_file(&config)?)?;
            let results = scheduler.assign(&roster.staff)?;
            if let Some(path) = out_json {
                io::export_results_json(path, &results)?;
            }
            if let Some(path) = out_csv {
                io::export_results_csv(path, &results)?;
            }
            print!("{}", io::render_results(&results));
            0
        }
        Commands::Check { config, report } => {
            let scheduler = Scheduler::new(ScheduleConfig::load_from_file(&config)?)?;
            let results = scheduler.assign(&roster.staff)?;
            let shortfalls = scheduler.detect_shortfalls(&results);
            if shortfalls.is_empty() {
                println!("OK: every slot staffed");
                0
            } else {
                eprintln!("Found {} understaffed slot(s)", shortfalls.len());
                for s in &shortfalls {
                    eprintln!(
                        "{} {}h: {} ({}/{} staff, ability {}/{})",
                        io::day_label(s.slot.day),
                        s.slot.hour,
                        s.kind.as_str(),
                        s.assigned,
                        s.required,
                        s.ability_sum,
                        s.min_ability
                    );
                }
                if let Some(path) = report {
                    io::export_shortfalls_csv(path, &shortfalls)?;
                }
                // Code 2 = WARNING/INCOMPLETE
                2
            }
        }
        Commands::Ledger { config } => {
            let scheduler = Scheduler::new(ScheduleConfig::load_from_file(&config)?)?;
            let results = scheduler.assign(&roster.staff)?;
            let mut ledger = WorkLedger::new();
            ledger.record(&results);
            for (name, tally) in ledger.iter() {
                println!("{name} | {} slot(s) | {} day(s)", tally.slots, tally.day_count());
            }
            for excess in ledger.days_over_limit(&roster) {
                eprintln!(
                    "Warning: {} assigned {} day(s), max_days {}",
                    excess.name, excess.days, excess.max_days
                );
            }
            0
        }
    };

    std::process::exit(code);
}
