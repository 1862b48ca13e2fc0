use std::{path::PathBuf, time::Instant};

use anyhow::{bail, Context, Result};
use booking_core::{
    load_appointments_file, AppointmentDraft, AppointmentStore, BookingSession, DraftEdit,
};
use clap::{Args, Parser, Subcommand};
use shared::{
    domain::{Appointment, Gender, VisitType},
    toast::{Toast, ToastKind},
};
use tracing_subscriber::EnvFilter;

/// Stdout carries the table, so only warnings are logged unless `RUST_LOG` says otherwise.
const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Parser, Debug)]
struct Cli {
    /// JSON file of appointments to load instead of the example bookings.
    #[arg(long, global = true)]
    seed: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the appointments table.
    List,
    /// Run the submission checks on a draft without booking it.
    Check(DraftArgs),
    /// Book the draft and print the resulting table.
    Book(DraftArgs),
}

#[derive(Args, Debug)]
struct DraftArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    age: String,
    #[arg(long, default_value = "")]
    phone: String,
    #[arg(long, default_value = "")]
    dr_name: String,
    #[arg(long, default_value = "")]
    visit_date: String,
    #[arg(long, default_value = "")]
    visit_time: String,
    #[arg(long)]
    visit_type: Option<VisitType>,
    #[arg(long)]
    gender: Option<Gender>,
}

impl DraftArgs {
    fn into_edits(self) -> [DraftEdit; 8] {
        [
            DraftEdit::Name(self.name),
            DraftEdit::Age(self.age),
            DraftEdit::Phone(self.phone),
            DraftEdit::DrName(self.dr_name),
            DraftEdit::VisitDate(self.visit_date),
            DraftEdit::VisitTime(self.visit_time),
            DraftEdit::VisitType(self.visit_type),
            DraftEdit::Gender(self.gender),
        ]
    }
}

fn load_store(seed: Option<PathBuf>) -> Result<AppointmentStore> {
    let mut store = AppointmentStore::seeded();
    if let Some(path) = seed {
        let appointments = load_appointments_file(&path)
            .with_context(|| format!("failed to bulk-load appointments from '{}'", path.display()))?;
        store.set_appointments(appointments);
    }
    Ok(store)
}

fn format_row(appointment: &Appointment) -> String {
    format!(
        "{:>3}  {:<18} {:>3} yrs, {:<6}  {:<7}  {:<8} {:<10}  {:<16}  {}",
        appointment.id,
        appointment.name,
        appointment.age,
        appointment.gender.label(),
        appointment.visit_type.label(),
        appointment.visit_time,
        appointment.visit_date,
        appointment.phone,
        appointment.dr_name,
    )
}

fn print_table(appointments: &[Appointment]) {
    if appointments.is_empty() {
        println!("No appointments booked");
        return;
    }
    for appointment in appointments {
        println!("{}", format_row(appointment));
    }
}

fn print_toast(toast: Option<&Toast>) {
    if let Some(toast) = toast {
        let tag = match toast.kind {
            ToastKind::Success => "ok",
            ToastKind::Error => "error",
        };
        println!("[{tag}] {}", toast.message);
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)))
        .init();
    let cli = Cli::parse();
    let store = load_store(cli.seed)?;

    match cli.command {
        Command::List => print_table(store.appointments()),
        Command::Check(draft_args) => {
            let mut draft = AppointmentDraft::default();
            for edit in draft_args.into_edits() {
                draft.apply(edit);
            }
            match draft.validate() {
                Ok(_) => println!("[ok] draft is ready to book"),
                Err(err) => bail!("{err}"),
            }
        }
        Command::Book(draft_args) => {
            let mut session = BookingSession::new(store);
            for edit in draft_args.into_edits() {
                session.edit_field(edit);
            }
            let outcome = session.submit(Instant::now());
            print_toast(session.store().toast());
            if let Err(err) = outcome {
                bail!("{err}");
            }
            print_table(session.store().appointments());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use booking_core::seed_appointments;

    #[test]
    fn parses_book_command_with_select_values() {
        let cli = Cli::parse_from([
            "tools",
            "book",
            "--name",
            "Rhea",
            "--visit-type",
            "revisit",
            "--gender",
            "Female",
        ]);
        let Command::Book(args) = cli.command else {
            panic!("expected book command");
        };
        assert_eq!(args.name, "Rhea");
        assert_eq!(args.visit_type, Some(VisitType::Revisit));
        assert_eq!(args.gender, Some(Gender::Female));
        assert_eq!(args.phone, "");
    }

    #[test]
    fn rejects_unknown_gender() {
        assert!(Cli::try_parse_from(["tools", "check", "--gender", "robot"]).is_err());
    }

    #[test]
    fn row_shows_the_table_columns() {
        let row = format_row(&seed_appointments()[1]);
        assert!(row.contains("Mukul Rao"));
        assert!(row.contains("28 yrs, Male"));
        assert!(row.contains("Revisit"));
        assert!(row.contains("06:00 PM"));
        assert!(row.contains("Dr. Ananth"));
        assert!(row.starts_with("  2  Mukul Rao"));
    }

    #[test]
    fn default_log_filter_keeps_stdout_for_output() {
        assert_eq!(DEFAULT_LOG_FILTER, "warn");
    }
}
