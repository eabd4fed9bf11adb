mod api;
mod cli;
mod config;
mod history;
mod model;
mod tui;
mod utils;

use anyhow::Result;
use api::{ApiClient, CourseQuery};
use cli::{Cli, Commands, ConfigActions, OutputFormat};
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use history::FetchLog;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs;
use std::io;
use std::process::ExitCode;
use tui::App;
use utils::format_created_date;

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
    match cli.command {
        None => run_tui(config)?,
        Some(Commands::Categories { format, out }) => {
            run_categories(&config, format, out.as_deref())?
        }
        Some(Commands::Courses {
            query,
            category,
            page,
            format,
            out,
        }) => {
            let course_query = CourseQuery {
                q: query,
                category_id: category,
                page,
            };
            run_courses(&config, course_query, format, out.as_deref())?
        }
        Some(Commands::Config { action }) => run_config(action, config)?,
        Some(Commands::History { limit }) => run_history(limit)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn run_tui(config: Config) -> Result<()> {
    let api = ApiClient::new(&config.api)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, api);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_categories(config: &Config, format: OutputFormat, out: Option<&str>) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let cates = runtime()?.block_on(api.categories())?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&cates)?;
            write_or_print(out, &json)?;
        }
        OutputFormat::Human => {
            for cate in &cates {
                println!("{:>6}  {}", cate.id, cate.name);
            }
            println!();
            println!("Total: {} categories", cates.len());
        }
    }

    Ok(())
}

fn run_courses(
    config: &Config,
    query: CourseQuery,
    format: OutputFormat,
    out: Option<&str>,
) -> Result<()> {
    let api = ApiClient::new(&config.api)?;
    let requested_page = query.page.unwrap_or(1);
    let page = runtime()?.block_on(api.courses(&query))?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&page)?;
            write_or_print(out, &json)?;
        }
        OutputFormat::Human => {
            for course in &page.results {
                println!(
                    "{:>6}  {}  {}",
                    course.id,
                    format_created_date(&course.created_date),
                    course.subject
                );
            }
            println!();
            println!(
                "Page {}: {} of {} courses{}",
                requested_page,
                page.results.len(),
                page.count,
                if page.has_next() { " (more pages)" } else { "" }
            );
        }
    }

    Ok(())
}

fn run_config(action: ConfigActions, mut config: Config) -> Result<()> {
    match action {
        ConfigActions::Show => {
            println!("Current configuration:");
            println!("  Base URL: {}", config.api.base_url);
            println!("  Timeout: {}s", config.api.timeout_secs);
            println!("  Log fetches: {}", config.api.log_fetches);
            println!("  Show image URLs: {}", config.ui.show_image_urls);
        }
        ConfigActions::Set { key, value } => match key.as_str() {
            "base_url" => {
                config.api.base_url = value.clone();
                config.save()?;
                println!("Set base_url to {}", value);
            }
            "timeout" => {
                config.api.timeout_secs = value.parse()?;
                config.save()?;
                println!("Set timeout to {}s", value);
            }
            _ => {
                println!("Unknown key: {}", key);
                println!("Available keys: base_url, timeout");
            }
        },
    }

    Ok(())
}

fn run_history(limit: usize) -> Result<()> {
    let log = FetchLog::new();
    let entries = log.read(Some(limit))?;

    if entries.is_empty() {
        println!("No fetch history found.");
        return Ok(());
    }

    println!("Last {} fetch(es):\n", entries.len());

    for entry in entries {
        println!(
            "{} {:4} {}{}",
            entry.timestamp.format("%Y-%m-%d %H:%M:%S"),
            entry.outcome,
            entry.endpoint,
            entry
                .detail
                .map(|d| format!(" {}", d))
                .unwrap_or_default()
        );
    }

    Ok(())
}

fn runtime() -> Result<tokio::runtime::Runtime> {
    tokio::runtime::Runtime::new()
        .map_err(|e| anyhow::anyhow!("Failed to create tokio runtime: {}", e))
}

fn write_or_print(out: Option<&str>, content: &str) -> Result<()> {
    if let Some(path) = out {
        fs::write(path, content)?;
    } else {
        println!("{}", content);
    }
    Ok(())
}
