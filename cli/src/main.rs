mod commands;
mod terminal;

use commands::{CommandLine, Commands, classify, redirects, serve};
use testbed_common::config::Config;
use testbed_core::server::ServerConfig;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        no_banner: commands.no_banner,
        quiet: commands.quiet,
    };

    logging::init(&cfg);
    print::banner(&cfg);

    match commands.command {
        Commands::Classify { inputs, only } => {
            print::header("classifying input", cfg.quiet);
            classify::classify(&inputs, only, &cfg)
        }
        Commands::Serve { bind } => {
            print::header("starting server", cfg.quiet);
            serve::serve(ServerConfig { bind }, &cfg).await
        }
        Commands::Redirects => {
            print::header("redirect table", cfg.quiet);
            redirects::redirects(&cfg)
        }
    }
}
