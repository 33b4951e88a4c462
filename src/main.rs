use anyhow::{Context, Result};
use std::env;
use std::ffi::OsStr;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use portfolio::{html, render, App, Config, NavLayout, QueryLinker, RenderContext};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let config = Config::from_env().context("Invalid PORTFOLIO_* environment")?;

    // Held until exit so buffered log lines are flushed
    let _log_guard = init_logging(&config);

    if args.len() > 1 && args[1] == "dump" {
        // Static HTML mode
        run_dump(&config, args.get(2).map(String::as_str).unwrap_or("home"))?;
    } else {
        // UI mode (default)
        run_ui_mode(&config)?;
    }

    Ok(())
}

/// Logs go to a file or nowhere: stderr would tear the alternate screen
fn init_logging(config: &Config) -> Option<WorkerGuard> {
    let path = config.log_file.as_ref()?;
    let (log_dir, log_filename) = split_log_path(path);

    let file_appender = tracing_appender::rolling::never(log_dir, log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(true)
        .init();

    Some(guard)
}

/// Directory and file name for the appender; a bare name lands in the cwd
fn split_log_path(path: &Path) -> (&Path, &OsStr) {
    let log_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let log_filename = path.file_name().unwrap_or(OsStr::new("portfolio.log"));
    (log_dir, log_filename)
}

fn run_dump(config: &Config, view: &str) -> Result<()> {
    let content = config.load_content().context("Failed to load content")?;
    let ctx = RenderContext {
        content: &content,
        form_endpoint: &config.form_endpoint,
    };

    let mut app = App::new();
    app.navigate_to(view);
    let page = render(&app, &ctx, NavLayout::Desktop);

    print!("{}", html::render_fragment(&page.body, &QueryLinker { app: &app }));
    Ok(())
}

#[cfg(feature = "tui")]
fn run_ui_mode(config: &Config) -> Result<()> {
    use portfolio::ui;

    let content = config.load_content().context("Failed to load content")?;
    tracing::info!(
        certificates = content.certificates.len(),
        projects = content.projects.len(),
        "starting terminal UI"
    );

    let mut app = ui::TerminalApp::new(content, config.form_endpoint.clone());
    ui::run_ui(&mut app)?;

    println!("\n👋 Thanks for visiting");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_config: &Config) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or use the web UI: cargo run --bin portfolio-server --features server");
    std::process::exit(1);
}
