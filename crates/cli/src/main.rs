// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]
#![allow(clippy::multiple_crate_versions)]

use clap::{Parser, Subcommand};
use siop_api::{AuthenticationService, require_mutation};
use siop_core::{
    BackupPayload, DashboardState, InfractionDraft, ProductivityDraft, apply_import,
    create_infraction, create_productivity, create_user, delete_infraction, delete_productivity,
    delete_user, export_json, parse_import, update_infraction, update_productivity,
};
use siop_domain::{
    MUNICIPALITIES, MunicipalRecord, Period, ProductivityTotals, Role,
    battalion_totals, selection_totals, snapshot_for_period, table_rows, time_series,
    validate_month,
};
use siop_persistence::FileStore;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

/// SIOP - battalion statistics dashboard for the 22º BPM
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the dashboard data files
    #[arg(short, long, default_value = "siop-data")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and open the operator session
    Login {
        /// Login name, case-insensitive
        username: String,
        /// Password
        password: String,
    },
    /// Close the current session
    Logout,
    /// Show the current session
    Whoami,
    /// Traffic-infraction records (AITs)
    #[command(subcommand)]
    Ait(AitCommand),
    /// Operational-productivity records
    #[command(subcommand)]
    Prod(ProdCommand),
    /// Operator accounts
    #[command(subcommand)]
    User(UserCommand),
    /// Aggregated views over the stored records
    #[command(subcommand)]
    Report(ReportCommand),
    /// Backup export and restore
    #[command(subcommand)]
    Backup(BackupCommand),
    /// Wipe every stored collection and the session
    Reset {
        /// Confirm the wipe
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum AitCommand {
    /// Record a month of infraction counts for a municipality
    Add {
        /// Municipality name
        city: String,
        /// Month, 1-12
        #[arg(short, long)]
        month: u8,
        /// Year
        #[arg(short, long)]
        year: u16,
        /// Infractions against cars; blank or invalid input counts as zero
        #[arg(long, default_value = "")]
        cars: String,
        /// Infractions against motorcycles
        #[arg(long, default_value = "")]
        motorcycles: String,
        /// Infractions against trucks
        #[arg(long, default_value = "")]
        trucks: String,
        /// Infractions against other categories
        #[arg(long, default_value = "")]
        others: String,
    },
    /// Replace an existing record, keeping its identity
    Update {
        /// The record identifier
        id: String,
        /// Municipality name
        city: String,
        /// Month, 1-12
        #[arg(short, long)]
        month: u8,
        /// Year
        #[arg(short, long)]
        year: u16,
        /// Infractions against cars
        #[arg(long, default_value = "")]
        cars: String,
        /// Infractions against motorcycles
        #[arg(long, default_value = "")]
        motorcycles: String,
        /// Infractions against trucks
        #[arg(long, default_value = "")]
        trucks: String,
        /// Infractions against other categories
        #[arg(long, default_value = "")]
        others: String,
    },
    /// Delete a record
    Delete {
        /// The record identifier
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List records, newest period first
    List {
        /// Restrict to these municipalities; all of them when omitted
        #[arg(short, long)]
        city: Vec<String>,
        /// Restrict to one year
        #[arg(short, long)]
        year: Option<u16>,
        /// Case-insensitive city-name filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

#[derive(Subcommand, Debug)]
enum ProdCommand {
    /// Record a month of productivity statistics for a municipality
    Add {
        /// Municipality name
        city: String,
        /// Month, 1-12
        #[arg(short, long)]
        month: u8,
        /// Year
        #[arg(short, long)]
        year: u16,
        #[command(flatten)]
        stats: ProdStats,
    },
    /// Replace an existing record, keeping its identity
    Update {
        /// The record identifier
        id: String,
        /// Municipality name
        city: String,
        /// Month, 1-12
        #[arg(short, long)]
        month: u8,
        /// Year
        #[arg(short, long)]
        year: u16,
        #[command(flatten)]
        stats: ProdStats,
    },
    /// Delete a record
    Delete {
        /// The record identifier
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
    /// List records, newest period first
    List {
        /// Restrict to these municipalities; all of them when omitted
        #[arg(short, long)]
        city: Vec<String>,
        /// Restrict to one year
        #[arg(short, long)]
        year: Option<u16>,
        /// Case-insensitive city-name filter
        #[arg(short, long, default_value = "")]
        search: String,
    },
}

/// The nine productivity statistics, raw. Blank or invalid input counts as
/// zero.
#[derive(clap::Args, Debug, Default)]
struct ProdStats {
    /// Boletins de atendimento
    #[arg(long, default_value = "")]
    ba: String,
    /// Comunicações de ocorrência policial
    #[arg(long, default_value = "")]
    cop: String,
    /// Termos circunstanciados
    #[arg(long, default_value = "")]
    tc: String,
    /// Fugitives recaptured
    #[arg(long, default_value = "")]
    fugitives: String,
    /// Vehicles inspected
    #[arg(long, default_value = "")]
    vehicles_inspected: String,
    /// People approached
    #[arg(long, default_value = "")]
    people_approached: String,
    /// Drugs seized, kilograms
    #[arg(long, default_value = "")]
    drugs_kg: String,
    /// Weapons seized
    #[arg(long, default_value = "")]
    weapons: String,
    /// Arrests made
    #[arg(long, default_value = "")]
    arrests: String,
}

#[derive(Subcommand, Debug)]
enum UserCommand {
    /// Create an operator account
    Add {
        /// Login name, stored lowercase
        username: String,
        /// Role: ADMIN, COMANDO, or USER
        #[arg(short, long, default_value = "USER")]
        role: String,
        /// Rank label (posto/graduação)
        #[arg(long, default_value = "")]
        rank: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List accounts
    List,
    /// Delete an account
    Delete {
        /// The account identifier
        id: String,
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
enum ReportCommand {
    /// Per-period infraction totals per municipality, oldest first
    Trend {
        /// Restrict to these municipalities; all of them when omitted
        #[arg(short, long)]
        city: Vec<String>,
        /// Restrict to one year
        #[arg(short, long)]
        year: Option<u16>,
    },
    /// Per-municipality infraction breakdown for one period
    Snapshot {
        /// Restrict to these municipalities; all of them when omitted
        #[arg(short, long)]
        city: Vec<String>,
        /// Month, 1-12; latest recorded period when omitted
        #[arg(short, long, requires = "year")]
        month: Option<u8>,
        /// Year; latest recorded period when omitted
        #[arg(short, long, requires = "month")]
        year: Option<u16>,
    },
    /// Productivity totals for a year
    Totals {
        /// Restrict to these municipalities; whole battalion when omitted
        #[arg(short, long)]
        city: Vec<String>,
        /// Year to total
        #[arg(short, long)]
        year: u16,
    },
}

#[derive(Subcommand, Debug)]
enum BackupCommand {
    /// Write a full backup document
    Export {
        /// Destination file; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Restore a backup document, replacing the stored records
    Import {
        /// Backup file to read
        file: PathBuf,
        /// Confirm the replacement
        #[arg(long)]
        yes: bool,
    },
}

fn main() {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(args) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut store: FileStore = FileStore::open(&args.data_dir)?;
    let mut state: DashboardState = DashboardState::load(&mut store)?;

    match args.command {
        Command::Login { username, password } => {
            let session =
                AuthenticationService::login(&mut state, &mut store, &username, &password)?;
            println!("logged in as {} ({})", session.username, session.role);
        }
        Command::Logout => {
            AuthenticationService::logout(&mut state, &mut store)?;
            println!("logged out");
        }
        Command::Whoami => match state.session {
            Some(session) => {
                println!("{} {} ({})", session.rank, session.username, session.role);
            }
            None => println!("not logged in"),
        },
        Command::Ait(command) => run_ait(&mut state, &mut store, command)?,
        Command::Prod(command) => run_prod(&mut state, &mut store, command)?,
        Command::User(command) => run_user(&mut state, &mut store, command)?,
        Command::Report(command) => run_report(&state, command)?,
        Command::Backup(command) => run_backup(&mut state, &mut store, command)?,
        Command::Reset { yes } => {
            require_mutation(state.session.as_ref(), "reset")?;
            confirm(yes, "reset wipes every stored collection")?;
            state.reset(&mut store)?;
            info!("store reset");
            println!("store reset; defaults will be reseeded on next run");
        }
    }
    Ok(())
}

fn run_ait(
    state: &mut DashboardState,
    store: &mut FileStore,
    command: AitCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        AitCommand::Add {
            city,
            month,
            year,
            cars,
            motorcycles,
            trucks,
            others,
        } => {
            require_mutation(state.session.as_ref(), "ait_add")?;
            let draft: InfractionDraft = InfractionDraft {
                city,
                month: stored_month(month)?,
                year,
                cars,
                motorcycles,
                trucks,
                others,
            };
            let record = create_infraction(state, store, &draft)?;
            println!("recorded {} for {} ({} total)", record.id, record.city, record.total);
        }
        AitCommand::Update {
            id,
            city,
            month,
            year,
            cars,
            motorcycles,
            trucks,
            others,
        } => {
            require_mutation(state.session.as_ref(), "ait_update")?;
            let draft: InfractionDraft = InfractionDraft {
                city,
                month: stored_month(month)?,
                year,
                cars,
                motorcycles,
                trucks,
                others,
            };
            let record = update_infraction(state, store, &id, &draft)?;
            println!("updated {} ({} total)", record.id, record.total);
        }
        AitCommand::Delete { id, yes } => {
            require_mutation(state.session.as_ref(), "ait_delete")?;
            confirm(yes, "deleting a record cannot be undone")?;
            delete_infraction(state, store, &id)?;
            println!("deleted {id}");
        }
        AitCommand::List { city, year, search } => {
            let cities: Vec<String> = selection(city);
            let rows = table_rows(&state.infractions, &cities, year, &search);
            println!("{:<24} {:<22} {:>9} {:>6} {:>6} {:>6} {:>6} {:>6}",
                "ID", "CITY", "PERIOD", "CARS", "MOTOS", "TRUCKS", "OTHERS", "TOTAL");
            for record in rows {
                println!(
                    "{:<24} {:<22} {:>9} {:>6} {:>6} {:>6} {:>6} {:>6}",
                    record.id,
                    record.city,
                    record.period().short_label(),
                    record.cars,
                    record.motorcycles,
                    record.trucks,
                    record.others,
                    record.total
                );
            }
        }
    }
    Ok(())
}

fn run_prod(
    state: &mut DashboardState,
    store: &mut FileStore,
    command: ProdCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ProdCommand::Add {
            city,
            month,
            year,
            stats,
        } => {
            require_mutation(state.session.as_ref(), "prod_add")?;
            let draft: ProductivityDraft = prod_draft(city, stored_month(month)?, year, stats);
            let record = create_productivity(state, store, &draft)?;
            println!("recorded {} for {}", record.id, record.city);
        }
        ProdCommand::Update {
            id,
            city,
            month,
            year,
            stats,
        } => {
            require_mutation(state.session.as_ref(), "prod_update")?;
            let draft: ProductivityDraft = prod_draft(city, stored_month(month)?, year, stats);
            let record = update_productivity(state, store, &id, &draft)?;
            println!("updated {}", record.id);
        }
        ProdCommand::Delete { id, yes } => {
            require_mutation(state.session.as_ref(), "prod_delete")?;
            confirm(yes, "deleting a record cannot be undone")?;
            delete_productivity(state, store, &id)?;
            println!("deleted {id}");
        }
        ProdCommand::List { city, year, search } => {
            let cities: Vec<String> = selection(city);
            let rows = table_rows(&state.productivity, &cities, year, &search);
            println!(
                "{:<24} {:<22} {:>9} {:>5} {:>5} {:>5} {:>8} {:>8} {:>8} {:>7}",
                "ID", "CITY", "PERIOD", "BA", "COP", "TC", "VEHICLES", "PEOPLE", "DRUGS", "ARRESTS"
            );
            for record in rows {
                println!(
                    "{:<24} {:<22} {:>9} {:>5} {:>5} {:>5} {:>8} {:>8} {:>8.2} {:>7}",
                    record.id,
                    record.city,
                    record.period().short_label(),
                    record.ba,
                    record.cop,
                    record.tc,
                    record.vehicles_inspected,
                    record.people_approached,
                    record.drugs_kg,
                    record.arrests
                );
            }
        }
    }
    Ok(())
}

fn run_user(
    state: &mut DashboardState,
    store: &mut FileStore,
    command: UserCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        UserCommand::Add {
            username,
            role,
            rank,
            password,
        } => {
            require_mutation(state.session.as_ref(), "user_add")?;
            let role: Role = Role::from_str(&role)?;
            let user = create_user(state, store, &username, role, &rank, &password)?;
            println!("created account {} ({})", user.username, user.role);
        }
        UserCommand::List => {
            println!("{:<24} {:<16} {:<8} {}", "ID", "USERNAME", "ROLE", "RANK");
            for user in &state.users {
                println!(
                    "{:<24} {:<16} {:<8} {}",
                    user.id, user.username, user.role, user.rank
                );
            }
        }
        UserCommand::Delete { id, yes } => {
            require_mutation(state.session.as_ref(), "user_delete")?;
            confirm(yes, "deleting an account cannot be undone")?;
            delete_user(state, store, &id)?;
            println!("deleted {id}");
        }
    }
    Ok(())
}

fn run_report(
    state: &DashboardState,
    command: ReportCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        ReportCommand::Trend { city, year } => {
            let cities: Vec<String> = selection(city);
            let series = time_series(&state.infractions, &cities, year);
            println!("{}", serde_json::to_string_pretty(&series)?);
        }
        ReportCommand::Snapshot { city, month, year } => {
            let cities: Vec<String> = selection(city);
            let period: Option<Period> = match (month, year) {
                (Some(m), Some(y)) => Some(Period::new(y, stored_month(m)?)),
                _ => None,
            };
            let snapshot = snapshot_for_period(&state.infractions, &cities, period);
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
        ReportCommand::Totals { city, year } => {
            let totals: ProductivityTotals = if city.is_empty() {
                battalion_totals(&state.productivity, year)
            } else {
                selection_totals(&state.productivity, &city, year)
            };
            println!("{}", serde_json::to_string_pretty(&totals)?);
        }
    }
    Ok(())
}

fn run_backup(
    state: &mut DashboardState,
    store: &mut FileStore,
    command: BackupCommand,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        BackupCommand::Export { output } => {
            require_mutation(state.session.as_ref(), "backup_export")?;
            let document: String = export_json(state)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &document)?;
                    println!("backup written to {}", path.display());
                }
                None => println!("{document}"),
            }
        }
        BackupCommand::Import { file, yes } => {
            require_mutation(state.session.as_ref(), "backup_import")?;
            confirm(yes, "restoring a backup replaces the stored records")?;
            let raw: String = std::fs::read_to_string(&file)?;
            let payload: BackupPayload = parse_import(&raw)?;
            apply_import(state, store, payload)?;
            println!(
                "restored {} infractions, {} productivity records, {} accounts",
                state.infractions.len(),
                state.productivity.len(),
                state.users.len()
            );
        }
    }
    Ok(())
}

/// Converts the operator-facing 1-12 month to the stored zero-based month.
fn stored_month(month: u8) -> Result<u8, Box<dyn std::error::Error>> {
    let zero_based: u8 = month.wrapping_sub(1);
    validate_month(zero_based).map_err(|_| {
        Box::<dyn std::error::Error>::from(format!("month must be between 1 and 12, got {month}"))
    })?;
    Ok(zero_based)
}

/// An explicit city selection, or every covered municipality when empty.
fn selection(cities: Vec<String>) -> Vec<String> {
    if cities.is_empty() {
        MUNICIPALITIES.iter().map(ToString::to_string).collect()
    } else {
        cities
    }
}

fn prod_draft(city: String, month: u8, year: u16, stats: ProdStats) -> ProductivityDraft {
    ProductivityDraft {
        city,
        month,
        year,
        ba: stats.ba,
        cop: stats.cop,
        tc: stats.tc,
        fugitives: stats.fugitives,
        vehicles_inspected: stats.vehicles_inspected,
        people_approached: stats.people_approached,
        drugs_kg: stats.drugs_kg,
        weapons: stats.weapons,
        arrests: stats.arrests,
    }
}

/// Destructive operations refuse to run without an explicit `--yes`.
fn confirm(yes: bool, warning: &str) -> Result<(), Box<dyn std::error::Error>> {
    if yes {
        Ok(())
    } else {
        Err(format!("{warning}; pass --yes to confirm").into())
    }
}
