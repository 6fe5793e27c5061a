use base_bharat::app::App;
use base_bharat::cli::CliArgs;
use base_bharat::config::AppConfig;
use base_bharat::{event, logging, terminal};
use clap::Parser;
use color_eyre::Result;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = AppConfig::from_env()?;

    let headless = args.headless || args.json || !is_terminal();
    logging::init(&config, headless)?;
    info!(route = %config.start_route, headless, "starting");

    let mut app = App::new(&config);

    if headless {
        return event::run_headless(&mut app, config.reveal_delay, args.json);
    }

    let mut terminal = terminal::setup_terminal()?;
    let result = event::run(&mut terminal, &mut app).await;
    terminal::cleanup_terminal_state(true, true);

    result
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
