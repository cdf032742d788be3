use color_eyre::Result;
use crossterm::event::EventStream;

use filmreel::app::App;
use filmreel::cli::{parse_args, CliCommand, USAGE};
use filmreel::event_loop::run_app;
use filmreel::startup::{init_logging, AppConfig};
use filmreel::terminal::{setup_panic_hook, TerminalManager};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() -> Result<()> {
    let overrides = match parse_args(std::env::args()) {
        Ok(CliCommand::Version) => {
            println!("filmreel {}", VERSION);
            return Ok(());
        }
        Ok(CliCommand::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Ok(CliCommand::Run(overrides)) => overrides,
        Err(e) => {
            eprintln!("filmreel: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    color_eyre::install()?;

    let config = overrides.apply(AppConfig::from_env());
    // Logging is optional; the app runs without it.
    let _log_path = init_logging(&config.log_filter, None);
    tracing::info!(url = %config.films_url, timeout_secs = config.timeout_secs, "configuration loaded");

    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;
    let mut app = App::new(config)?;

    let result = runtime.block_on(async {
        let mut manager = TerminalManager::new()?;
        let outcome = run_app(manager.terminal(), &mut app, EventStream::new()).await;
        manager.restore();
        outcome
    });

    // Aborts a fetch that is still in flight.
    app.quit();

    if let Err(err) = &result {
        tracing::error!("exiting with error: {:#}", err);
    }
    result
}
