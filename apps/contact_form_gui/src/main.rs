use std::path::PathBuf;

mod config;
mod controller;
mod ui;

use clap::Parser;
use eframe::egui;
use form_core::DateDisplayFormat;
use tracing_subscriber::EnvFilter;

use crate::ui::ContactFormApp;

#[derive(Parser, Debug)]
#[command(about = "Contact form")]
struct Args {
    /// Settings file; defaults to ./contact_form.toml when present.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Restore the default values after every successful submit.
    #[arg(long)]
    reset_after_submit: bool,
    /// How the chosen date is displayed: iso, slash or us.
    #[arg(long)]
    date_format: Option<DateDisplayFormat>,
}

fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
    let args = Args::parse();

    let mut settings = config::load_settings(args.config.as_deref())?;
    if args.reset_after_submit {
        settings.reset_after_submit = true;
    }
    if let Some(format) = args.date_format {
        settings.date_format = format;
    }
    tracing::info!(?settings, "starting contact form");

    let title = settings.window_title.clone();
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(&title)
            .with_inner_size([720.0, 820.0])
            .with_min_inner_size([520.0, 600.0]),
        ..Default::default()
    };
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(ContactFormApp::new(settings)))),
    )
    .map_err(|err| anyhow::anyhow!("contact form window failed: {err}"))
}
