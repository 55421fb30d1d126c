use std::time::Duration;

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use tokio::sync::mpsc;

use greenlens::app::{App, AppMessage};
use greenlens::cli::{parse_args, version_line, CliCommand, HELP};
use greenlens::config::AppConfig;
use greenlens::input::{Command, CommandRegistry};
use greenlens::logging::init_logging;
use greenlens::terminal::{setup_panic_hook, TerminalManager};
use greenlens::ui;

/// Spinner and notice-expiry cadence.
const TICK: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let options = match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("{}", version_line());
            return Ok(());
        }
        CliCommand::Help => {
            print!("{}", HELP);
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    color_eyre::install()?;
    setup_panic_hook();

    let config = AppConfig::from_env()?.with_cli(options.api_url.as_deref())?;
    if let Err(e) = init_logging(&config) {
        // Not fatal: the client works the same without a log file.
        eprintln!("greenlens: logging disabled: {}", e);
    }

    // Single-threaded: every completion is applied on the UI thread.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        let mut app = App::from_config(&config);
        app.refresh_stores();
        run_app(manager.terminal(), &mut app).await
    });
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!(error = %e, "event loop exited with an error");
    }
    tracing::info!("greenlens exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();
    let mut ticker = tokio::time::interval(TICK);

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, &app.view_state()))?;
            app.needs_redraw = false;
        }

        tokio::select! {
            _ = ticker.tick() => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        let context = app.build_input_context();
                        if let Some(cmd) = registry.dispatch(key, &context) {
                            tracing::trace!(command = ?cmd, "key dispatched");
                            app.execute_command(cmd);
                        }
                    }
                    Some(Ok(Event::Paste(text))) => {
                        app.execute_command(Command::Paste(text));
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    // Input closed: nothing left to drive the UI.
                    None => app.quit(),
                }
            }

            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
