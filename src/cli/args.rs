//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::net::IpAddr;
use std::path::PathBuf;

/// Config-driven landing page generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path
    #[arg(short = 'C', long, global = true, default_value = "landing.json", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Initialize a new landing page project
    #[command(visible_alias = "i")]
    Init {
        /// Project directory (relative to current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        name: Option<PathBuf>,
    },

    /// Render the page into the output directory
    #[command(visible_alias = "b")]
    Build {
        /// Output directory path (relative to project root)
        #[arg(short, long, default_value = "dist", value_hint = clap::ValueHint::DirPath)]
        output: PathBuf,
    },

    /// Start the development server with a local lead endpoint
    #[command(visible_alias = "s")]
    Serve {
        /// Network interface to bind (e.g., 127.0.0.1, 0.0.0.0)
        #[arg(short, long, default_value = "127.0.0.1")]
        interface: IpAddr,

        /// Port number to listen on
        #[arg(short, long, default_value_t = 4040)]
        port: u16,
    },

    /// Validate the config, reporting every problem at once
    #[command(visible_alias = "c")]
    Check,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::parse_from(["lander", "serve"]);
        let Commands::Serve { interface, port } = cli.command else {
            panic!("expected serve");
        };
        assert_eq!(port, 4040);
        assert!(interface.is_loopback());
        assert_eq!(cli.config, PathBuf::from("landing.json"));
    }

    #[test]
    fn test_build_output_override() {
        let cli = Cli::parse_from(["lander", "build", "--output", "public"]);
        let Commands::Build { output } = cli.command else {
            panic!("expected build");
        };
        assert_eq!(output, PathBuf::from("public"));
    }
}
