use anyhow::Context;
use clap::Parser;
use langton_ant::prelude::*;
use langton_ant::world::read_map;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(args.log_level())),
        )
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color)
        .init();

    if args.no_color {
        colored::control::set_override(false);
    }

    // Load the map before touching stdin
    let lines = read_map(&args.map)
        .with_context(|| format!("failed to read map {}", args.map.display()))?;
    let world = World::from_lines(&lines)
        .with_context(|| format!("malformed map {}", args.map.display()))?;

    let mut handler = CommandHandler::new(SimulationEngine::new(world));
    let stdin = std::io::stdin();
    handler.run(stdin.lock(), &mut std::io::stdout().lock(), &mut std::io::stderr().lock())?;

    Ok(())
}
