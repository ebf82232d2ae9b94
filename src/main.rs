//! vidcue command line entry point

use anyhow::Result;
use clap::Parser;

use vidcue::cli::Cli;
use vidcue::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;
    if let Err(e) = vidcue::logging::init(&config.log) {
        eprintln!("vidcue: logging disabled: {:#}", e);
    }
    tracing::info!(entries = cli.paths.len(), "starting vidcue");

    run(&cli, &config)
}

#[cfg(unix)]
fn run(cli: &Cli, config: &Config) -> Result<()> {
    use anyhow::Context;
    use vidcue::backend::MpvBackend;
    use vidcue::player::shell;
    use vidcue::Player;

    let backend = MpvBackend::spawn(&config.backend.mpv_options()).context("Could not start mpv")?;
    let mut player = Player::open(&cli.paths, backend, config.player_options())?;
    shell::run(&mut player)
}

#[cfg(not(unix))]
fn run(_cli: &Cli, _config: &Config) -> Result<()> {
    anyhow::bail!("vidcue talks to mpv over a Unix socket and only runs on Unix platforms")
}
