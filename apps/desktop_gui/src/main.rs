use std::path::PathBuf;

use anyhow::Context;
use booking_core::{load_appointments_file, AppointmentStore, BookingSession};
use clap::Parser;
use eframe::egui;
use tracing_subscriber::EnvFilter;

mod config;
mod controller;
mod ui;

use config::DeskSettings;
use ui::BookingDeskApp;

#[derive(Parser, Debug)]
#[command(about = "Doctor appointment booking desk")]
struct Args {
    /// JSON file of appointments that replaces the example bookings.
    #[arg(long)]
    seed: Option<PathBuf>,
    /// Settings file; defaults to ./booking.toml or the user config dir.
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    title: Option<String>,
}

fn apply_cli_overrides(settings: &mut DeskSettings, args: Args) {
    if let Some(seed) = args.seed {
        settings.seed_path = Some(seed);
    }
    if let Some(title) = args.title {
        settings.window_title = title;
    }
}

fn build_store(settings: &DeskSettings) -> anyhow::Result<AppointmentStore> {
    let mut store = AppointmentStore::seeded();
    if let Some(path) = &settings.seed_path {
        let appointments = load_appointments_file(path)
            .with_context(|| format!("failed to bulk-load appointments from '{}'", path.display()))?;
        tracing::info!(
            count = appointments.len(),
            path = %path.display(),
            "replacing example bookings"
        );
        store.set_appointments(appointments);
    }
    Ok(store)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();
    let mut settings = config::load_settings(args.config.as_deref())?;
    apply_cli_overrides(&mut settings, args);

    let session = BookingSession::new(build_store(&settings)?);
    tracing::info!(
        appointments = session.store().appointments().len(),
        "booking desk ready"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(settings.window_title.clone())
            .with_inner_size([settings.window_width, settings.window_height])
            .with_min_inner_size([820.0, 520.0]),
        ..Default::default()
    };
    eframe::run_native(
        &settings.window_title,
        options,
        Box::new(move |_cc| Ok(Box::new(BookingDeskApp::new(session)))),
    )
    .map_err(|err| anyhow::anyhow!("booking window failed: {err}"))
}
