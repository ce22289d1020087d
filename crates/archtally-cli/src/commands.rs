use super::args::{Cli, Commands, TopologyCommand};
use super::handlers;
use crate::config::Config;
use crate::context::RunContext;
use crate::types::LogLevel;
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    init_tracing(cli.log_level);

    match cli.command {
        Commands::Stats {
            paths,
            format,
            top,
            keep_going,
        } => {
            let config = Config::load_from(&cli.config)?;
            let ctx = RunContext::new(config, cli.cloc_bin, cli.no_color);
            handlers::stats::handle(&ctx, paths, format, top, keep_going)
        }

        Commands::Report {
            paths,
            output,
            title,
            keep_going,
        } => {
            let config = Config::load_from(&cli.config)?;
            let ctx = RunContext::new(config, cli.cloc_bin, cli.no_color);
            handlers::report::handle(&ctx, paths, output, title, keep_going)
        }

        Commands::Topology { command } => {
            let config = Config::load_from(&cli.config)?;
            let ctx = RunContext::new(config, cli.cloc_bin, cli.no_color);
            match command {
                TopologyCommand::Show => handlers::topology::show(&ctx),
                TopologyCommand::Check => handlers::topology::check(&ctx),
            }
        }

        // init never loads the config, so --force can replace a broken one
        Commands::Init { paths, force } => handlers::init::handle(&cli.config, paths, force),
    }
}

fn init_tracing(level: LogLevel) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
