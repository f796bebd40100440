pub mod classify;
pub mod redirects;
pub mod serve;

use std::net::SocketAddr;

use clap::{ArgAction, Parser, Subcommand};
use testbed_core::classify::CategoryFilter;
use testbed_core::server::ServerConfig;

#[derive(Parser)]
#[command(name = "testbed")]
#[command(about = "Input classifier and demo endpoints for UI-testing playgrounds.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q drops decorations, -qq only shows results and warnings)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Classify inputs as IPv4, IPv6, CIDR, domain, URL or port
    #[command(alias = "c")]
    Classify {
        #[arg(required = true)]
        inputs: Vec<String>,
        /// Only show results of one kind: all, success, error, warning, info
        #[arg(long, default_value = "all")]
        only: CategoryFilter,
    },
    /// Serve the forms and redirect endpoints over HTTP
    #[command(alias = "s")]
    Serve {
        #[arg(long, default_value_t = ServerConfig::default().bind)]
        bind: SocketAddr,
    },
    /// List the page aliases known to the redirect endpoint
    #[command(alias = "r")]
    Redirects,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
