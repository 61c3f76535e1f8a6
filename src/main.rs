use clap::Parser;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tracing::info;
use typeahead::config::{self, AppConfig};
use typeahead::terminal::Terminal;
use typeahead::{Dropdown, Result, Runtime, Session};

/// Pick a word from a list by typing part of it.
#[derive(Debug, Parser)]
#[command(name = "typeahead", version)]
struct Cli {
    /// YAML file with words and widget settings.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Plain text word list, one entry per line. Replaces config words.
    #[arg(long)]
    words: Option<PathBuf>,

    /// Debounce window in milliseconds.
    #[arg(long)]
    delay: Option<u64>,

    /// Hint shown while the input is empty.
    #[arg(long)]
    placeholder: Option<String>,

    /// Write logs here (filtered by RUST_LOG).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    typeahead::logging::init(cli.log_file.as_deref())?;

    let mut app_config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(path) = &cli.words {
        app_config.words = config::read_words(path)?;
    }
    if let Some(delay) = cli.delay {
        app_config.delay_ms = delay;
    }
    if let Some(placeholder) = cli.placeholder {
        app_config.placeholder = placeholder;
    }
    info!(words = app_config.words.len(), delay_ms = app_config.delay_ms, "starting");

    let selected = Arc::new(Mutex::new(None::<String>));
    let sink = Arc::clone(&selected);
    let dropdown = Dropdown::new("search", app_config.dropdown_config(), move |value: &str| {
        info!(value, "saved");
        if let Ok(mut slot) = sink.lock() {
            *slot = Some(value.to_string());
        }
    });

    let shown = Arc::clone(&selected);
    let title = move || match shown.lock().ok().and_then(|slot| slot.clone()) {
        Some(value) => format!("Selected: {value}"),
        None => "Nothing selected yet".to_string(),
    };

    let mut runtime = Runtime::new(Session::new(dropdown), Terminal::new()?).with_title(title);
    runtime.run()?;

    if let Ok(slot) = selected.lock()
        && let Some(value) = slot.as_ref()
    {
        println!("{value}");
    }
    Ok(())
}
