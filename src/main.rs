use elpick::app::App;
use elpick::cli::{parse_args, run_cli_command};
use elpick::config::PickerConfig;
use elpick::terminal::{setup_panic_hook, TerminalManager};
use elpick::{logging, ui};

use color_eyre::Result;
use crossterm::event::EventStream;
use futures::StreamExt;
use ratatui::{backend::Backend, Terminal};

fn main() -> Result<()> {
    let config_path = match run_cli_command(parse_args(std::env::args())) {
        Ok(path) => path,
        Err(code) => std::process::exit(code),
    };

    color_eyre::install()?;

    let log_path = logging::init(None)?;
    tracing::info!(log = %log_path.display(), "elpick starting");

    let config = match &config_path {
        Some(path) => PickerConfig::load(path)?,
        None => PickerConfig::default(),
    };

    // Restore the terminal before the panic message prints
    setup_panic_hook();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let mut app = App::new(config)?;
    let mut term = TerminalManager::new()?;
    let result = runtime.block_on(run_app(term.terminal(), &mut app));
    term.restore();
    drop(term);

    let picks = app.shutdown();
    result?;

    tracing::info!(count = picks.len(), "elpick exiting");
    println!("{}", serde_json::to_string_pretty(&picks)?);
    Ok(())
}

/// Draw, wait for one terminal event, apply it; until the app quits.
async fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }
        if app.should_quit {
            return Ok(());
        }

        match event_stream.next().await {
            Some(Ok(event)) => app.handle_event(event),
            Some(Err(err)) => return Err(err.into()),
            None => return Ok(()),
        }
    }
}
