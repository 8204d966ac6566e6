mod cache;
mod cli;
mod config;
mod dataset;
mod logging;
mod model;
mod output;
mod source;
mod tui;

use anyhow::Result;
use cache::SessionCache;
use cli::{CacheActions, Cli, Commands, ConfigActions, OutputFormat};
use config::Config;
use dataset::{load_dataset, DATASET_KEY};
use output::ListResult;
use source::HttpSource;
use std::fs;
use std::process::ExitCode;
use tui::logic::{sort, Column, SortState};
use tui::service::loader::session_cache;
use tui::terminal::TerminalGuard;
use tui::App;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = match Config::load() {
        Ok(config) => run(cli, config),
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli, config: Config) -> Result<ExitCode> {
    let session = cli
        .session
        .clone()
        .unwrap_or_else(|| config.cache.session.clone());

    match cli.command {
        None => {
            let log_path = logging::init_file(&Config::data_dir(), &config.log.level)?;
            tracing::info!(session = %session, log = %log_path.display(), "starting table");
            run_tui(config, session)?
        }
        Some(Commands::List {
            sort,
            desc,
            format,
            out,
        }) => {
            logging::init_stderr(&config.log.level)?;
            run_list(&config, &session, sort, desc, format, out.as_deref())?
        }
        Some(Commands::Cache { action }) => run_cache(action, &config, &session)?,
        Some(Commands::Config { action }) => run_config(action, config)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn run_tui(config: Config, session: String) -> Result<()> {
    let mut guard = TerminalGuard::new()?;
    let mut app = App::new(config, session);
    app.run(guard.terminal())
}

fn run_list(
    config: &Config,
    session: &str,
    column: Option<Column>,
    desc: bool,
    format: OutputFormat,
    out: Option<&str>,
) -> Result<()> {
    let cache = session_cache(config, session);
    let source = HttpSource::new(&config.source)?;

    // a failed fetch still prints the empty table
    let (records, from_cache) = match load_dataset(cache.as_deref(), &source) {
        Ok(dataset) => (dataset.records, dataset.from_cache),
        Err(e) => {
            tracing::error!("failed to load users: {}", e);
            (Vec::new(), false)
        }
    };

    let (records, sort_state) = match column {
        Some(column) => {
            let ascending = !desc;
            (
                sort(&records, column, ascending),
                SortState {
                    active: Some(column),
                    ascending,
                },
            )
        }
        None => (records, SortState::default()),
    };

    let result = ListResult::new(&records, sort_state, from_cache, &config.ui.date_format);

    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(&result)?,
        OutputFormat::Human => result.to_human(),
    };

    if let Some(path) = out {
        fs::write(path, &text)?;
    } else {
        println!("{}", text.trim_end());
    }

    Ok(())
}

fn run_cache(action: CacheActions, config: &Config, session: &str) -> Result<()> {
    let cache = cache::FileSessionCache::new(&Config::cache_dir(), session)?;

    match action {
        CacheActions::Show => {
            println!("Session: {}", session);
            println!("  Path: {}", cache.dir().display());
            println!("  Enabled: {}", config.cache.enabled);
            match cache.get(DATASET_KEY)? {
                Some(stored) => {
                    let count = serde_json::from_str::<Vec<model::UserRecord>>(&stored)
                        .map(|records| records.len().to_string())
                        .unwrap_or_else(|_| "unreadable".to_string());
                    println!("  Dataset: {} records", count);
                }
                None => println!("  Dataset: none"),
            }
        }
        CacheActions::Clear => {
            cache.clear()?;
            println!("Cleared session cache: {}", session);
        }
    }

    Ok(())
}

fn run_config(action: ConfigActions, mut config: Config) -> Result<()> {
    match action {
        ConfigActions::Show => {
            println!("Current configuration ({}):", Config::config_path().display());
            println!("  Source URL: {}", config.source.url);
            println!("  Nationality: {}", config.source.nationality);
            println!("  Results: {}", config.source.results);
            println!("  Timeout: {}s", config.source.timeout_secs);
            println!("  Cache enabled: {}", config.cache.enabled);
            println!("  Cache session: {}", config.cache.session);
            println!("  Date format: {}", config.ui.date_format);
            println!("  Disabled columns:");
            for column in &config.ui.disabled_columns {
                println!("    - {}", column);
            }
            println!("  Log level: {}", config.log.level);
        }
        ConfigActions::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("Set {} to {}", key, value);
        }
        ConfigActions::DisableColumn { column } => {
            config.set_column_disabled(column, true);
            config.save()?;
            println!("Disabled column: {}", column);
        }
        ConfigActions::EnableColumn { column } => {
            config.set_column_disabled(column, false);
            config.save()?;
            println!("Enabled column: {}", column);
        }
    }

    Ok(())
}
