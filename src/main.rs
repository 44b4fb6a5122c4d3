use std::io::{self, Stdout};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{mpsc, Arc};
use std::time::Duration;

use clap::Parser;
use neli_hr::app::{UiTheme, Workbench};
use neli_hr::core::{InputEvent, View};
use neli_hr::kernel::services::adapters::{
    ensure_settings_file, load_settings_from, AsyncRuntime, HttpHrApi,
};
use neli_hr::kernel::services::ports::Settings;
use neli_hr::tui::terminal_guard::{TerminalGuard, TerminationSignal};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

mod logging;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const WINDOW_TITLE: &str = "Neli RRHH";

#[derive(Parser, Debug)]
#[command(name = "neli-hr", version, about = "Neli World Solutions - Recursos Humanos")]
struct Cli {
    /// Base URL of the REST backend (overrides the settings file).
    #[arg(long, env = "NELI_HR_API_URL", value_name = "URL")]
    api_url: Option<String>,

    /// Settings file to read instead of the per-user one.
    #[arg(long, value_name = "FILE")]
    settings: Option<PathBuf>,

    /// Request timeout in milliseconds.
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "neli_hr=info", value_name = "FILTER")]
    log_level: String,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let mut logging = logging::init(&cli.log_level);
    let log_rx = logging.as_mut().and_then(|guard| guard.take_log_rx());
    if let Some(guard) = logging.as_ref() {
        tracing::debug!(log_dir = %guard.log_dir().display(), "logging ready");
    }

    match run(&cli, log_rx) {
        Ok(None) => ExitCode::SUCCESS,
        Ok(Some(signal)) => ExitCode::from(signal.exit_code() as u8),
        Err(e) => {
            tracing::error!(error = %e, "neli-hr failed");
            eprintln!("neli-hr: {e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_settings(cli: &Cli) -> Settings {
    let path = match &cli.settings {
        Some(path) => Some(path.clone()),
        None => ensure_settings_file()
            .map_err(|e| tracing::warn!(error = %e, "settings file unavailable"))
            .ok(),
    };

    let mut settings = path
        .and_then(|path| match load_settings_from(&path) {
            Ok(settings) => Some(settings),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "using default settings");
                None
            }
        })
        .unwrap_or_default();

    if let Some(url) = &cli.api_url {
        settings.api.base_url = url.clone();
    }
    if let Some(timeout_ms) = cli.timeout_ms {
        settings.api.timeout_ms = timeout_ms;
    }
    settings
}

fn run(
    cli: &Cli,
    log_rx: Option<mpsc::Receiver<String>>,
) -> io::Result<Option<TerminationSignal>> {
    let settings = resolve_settings(cli);
    tracing::info!(api = %settings.api.base_url, "starting");

    let mut theme = UiTheme::from_settings(&settings.theme);
    theme.adapt_to_terminal_capabilities();

    let api = HttpHrApi::new(&settings.api).map_err(io::Error::other)?;
    let (tx, rx) = mpsc::channel();
    let runtime = AsyncRuntime::new(tx, Arc::new(api))?;
    let mut workbench = Workbench::new(
        runtime,
        log_rx,
        theme,
        chrono::Local::now().date_naive(),
    );

    let guard = TerminalGuard::new(WINDOW_TITLE)?;
    let restorer = guard.restorer();
    restorer.restore_on_panic();

    let (signal_tx, signal_rx) = mpsc::channel::<TerminationSignal>();
    #[cfg(unix)]
    neli_hr::tui::terminal_guard::install_termination_signals(restorer, signal_tx)?;
    #[cfg(not(unix))]
    drop((restorer, signal_tx));

    let mut terminal: Terminal<CrosstermBackend<Stdout>> =
        Terminal::new(CrosstermBackend::new(io::stdout()))?;
    terminal.clear()?;

    let mut dirty = true;
    workbench.start();

    let signal = loop {
        if dirty {
            terminal.draw(|frame| {
                let area = frame.area();
                workbench.render(frame, area);
            })?;
            dirty = false;
        }

        if crossterm::event::poll(POLL_INTERVAL)? {
            let event = InputEvent::from(crossterm::event::read()?);
            let result = workbench.handle_input(&event);
            dirty |= !matches!(result, neli_hr::core::EventResult::Ignored);
        }

        while let Ok(msg) = rx.try_recv() {
            dirty |= workbench.handle_message(msg);
        }
        dirty |= workbench.tick();

        if workbench.should_quit() {
            break None;
        }
        if let Ok(signal) = signal_rx.try_recv() {
            break Some(signal);
        }
    };

    drop(terminal);
    drop(guard);
    tracing::info!(?signal, "exiting");
    Ok(signal)
}
