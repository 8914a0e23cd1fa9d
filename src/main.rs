mod cli;

use checklist::app::AppState;
use checklist::checklist::today;
use checklist::config::Config;
use checklist::storage::{Store, load_or_seed};
use checklist::ui;
use checklist::ui::components::checklist::format_row;
use checklist::ui::theme::Theme;
use checklist::utils::paths::{
    get_config_path, get_crash_log_path, get_logs_dir, resolve_database_path,
};

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use cli::{Cli, Commands};
use std::fs;
use std::io::Write;
use std::panic;
use std::path::Path;

/// Install a panic hook that restores the terminal and appends a crash report
fn install_crash_handler() {
    let default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        ui::restore_terminal();

        if let Ok(crash_log_path) = get_crash_log_path() {
            let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
            let mut crash_report = format!("=== CRASH at {timestamp} ===\n");

            if let Some(message) = panic_info.payload().downcast_ref::<&str>() {
                crash_report.push_str(&format!("Message: {message}\n"));
            } else if let Some(message) = panic_info.payload().downcast_ref::<String>() {
                crash_report.push_str(&format!("Message: {message}\n"));
            }

            if let Some(location) = panic_info.location() {
                crash_report.push_str(&format!(
                    "Location: {}:{}:{}\n",
                    location.file(),
                    location.line(),
                    location.column()
                ));
            }
            crash_report.push('\n');

            if let Some(parent) = crash_log_path.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Ok(mut file) = fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(&crash_log_path)
            {
                let _ = file.write_all(crash_report.as_bytes());
                eprintln!("\nCrash logged to: {}", crash_log_path.display());
            }
        }

        default_hook(panic_info);
    }));
}

/// File logging for the TUI, which owns stdout.
///
/// Logs go to ~/.checklist/logs/checklist.log, rolled daily.
/// Level comes from RUST_LOG (default: info).
fn init_file_logging() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let logs_dir = get_logs_dir().ok()?;

    if let Err(e) = fs::create_dir_all(&logs_dir) {
        eprintln!("Warning: Could not create logs directory: {e}");
        return None;
    }

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "checklist.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    Some(guard)
}

fn open_store(path: &Path) -> Result<Store> {
    let store = Store::open(path)
        .with_context(|| format!("Failed to open database at {}", path.display()))?;
    store
        .ensure_schema()
        .with_context(|| format!("Failed to create schema in {}", path.display()))?;
    Ok(store)
}

fn handle_init_config() -> Result<()> {
    let config_path = get_config_path()?;
    if config_path.exists() {
        println!("Config already exists at {}", config_path.display());
        return Ok(());
    }

    Config::default().save()?;
    println!("Wrote default config to {}", config_path.display());
    Ok(())
}

fn main() -> Result<()> {
    install_crash_handler();

    // Guard must outlive the app so buffered log lines get flushed
    let _log_guard = init_file_logging();

    let cli = Cli::parse();
    let config = Config::load()?;
    let db_path = resolve_database_path(cli.db.as_deref(), config.database_path.as_deref());
    let today = today();

    tracing::info!(db = %db_path.display(), "checklist starting");

    match cli.command {
        Some(Commands::Add { label }) => {
            let store = open_store(&db_path)?;
            store.insert(label.trim(), &today, true)?;
            println!("Added \"{}\"", label.trim());
        }
        Some(Commands::Show) => {
            let store = open_store(&db_path)?;
            for item in store.list_items()? {
                println!("{}", format_row(' ', item.check_marker(), &item.label));
            }
        }
        Some(Commands::Toggle { label }) => {
            let store = open_store(&db_path)?;
            store.toggle_checked(&label)?;
            let checked = store.is_checked(&label)?;
            println!("[{}] {label}", if checked { 'x' } else { ' ' });
        }
        Some(Commands::Remove { label }) => {
            let store = open_store(&db_path)?;
            match store.delete_by_label(&label)? {
                0 => anyhow::bail!("\"{label}\" is not on the list"),
                _ => println!("Removed \"{label}\""),
            }
        }
        Some(Commands::InitConfig) => {
            handle_init_config()?;
        }
        None => {
            let store = open_store(&db_path)?;
            let list = load_or_seed(&store, &config.default_items, &today)
                .context("Failed to load checklist")?;
            let theme = Theme::from_config(&config);
            let state = AppState::new(list, store, theme, today, config.char_limit);

            let state = ui::run_tui(state)?;
            tracing::info!(items = state.checklist.len(), "checklist exiting gracefully");
        }
    }

    Ok(())
}
