use aqmon::adapters::ChannelNotifier;
use aqmon::app::{App, AppMessage};
use aqmon::cli::{parse_args, run_once, version_string, CliCommand, USAGE};
use aqmon::startup::{self, logging, AppConfig, LogTarget};
use aqmon::terminal::{setup_panic_hook, TerminalManager};
use aqmon::ui;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Animation tick for the refresh spinner.
const TICK: Duration = Duration::from_millis(120);

fn main() -> Result<()> {
    color_eyre::install()?;

    let parsed = match parse_args(std::env::args()) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    match parsed.command {
        CliCommand::Version => {
            println!("{}", version_string());
            return Ok(());
        }
        CliCommand::Help => {
            println!("{}", USAGE);
            return Ok(());
        }
        CliCommand::Once { .. } | CliCommand::RunTui => {}
    }

    let config = match AppConfig::from_env().and_then(|c| parsed.overrides.apply(c)) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;

    if let CliCommand::Once { json } = parsed.command {
        logging::init(LogTarget::Stderr)?;
        return runtime.block_on(run_once(&config, json));
    }

    // The dashboard owns the terminal; without a log file there is no logging.
    if let Some(path) = startup::default_log_path() {
        if let Err(e) = logging::init(LogTarget::File(path.clone())) {
            eprintln!("Warning: logging disabled ({}): {}", path.display(), e);
        }
    }
    tracing::info!(version = %version_string(), "Starting dashboard");

    setup_panic_hook();
    runtime.block_on(run_dashboard(config))
}

async fn run_dashboard(config: AppConfig) -> Result<()> {
    let (message_tx, message_rx) = mpsc::unbounded_channel();
    let controller = startup::build_controller(&config, Arc::new(ChannelNotifier::new(message_tx)));
    let mut app = App::new(controller, message_rx, config.toast_duration);

    let mut term = TerminalManager::new()?;

    // Initial load
    app.request_refresh();

    let result = run_app(term.terminal(), &mut app).await;
    term.restore();

    if let Err(ref e) = result {
        tracing::error!(error = %e, "Dashboard exited with an error");
    }
    result
}

async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();
    let mut snapshot_rx = app.controller.subscribe();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => app.quit(),
                }
            }

            changed = snapshot_rx.changed() => {
                if changed.is_ok() {
                    let snapshot = snapshot_rx.borrow_and_update().clone();
                    app.apply_snapshot(snapshot);
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                match msg {
                    Some(msg) => app.handle_message(msg),
                    None => message_rx = None,
                }
            }
        }

        if app.should_quit {
            tracing::info!("Quit requested");
            return Ok(());
        }
    }
}
