//! lander - config-driven landing page generator with a lead-capture
//! dev server.

#![allow(dead_code)]

mod cli;
mod config;
mod core;
mod dom;
mod embed;
mod form;
mod logger;
mod populate;
mod utils;
mod widgets;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::{Landing, init_config};
use std::path::Path;

fn main() -> Result<()> {
    // Setup global Ctrl+C handler (before any blocking operations)
    core::state::setup_shutdown_handler()?;

    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    match &cli.command {
        Commands::Init { name } => cli::init::new_project(name.as_deref()),
        Commands::Build { output } => {
            let config = init_config(Landing::load(&cli.config)?);
            cli::build::build_site(&config, output)
        }
        Commands::Serve { interface, port } => {
            init_serve_config(&cli);
            cli::serve::serve(*interface, *port)
        }
        Commands::Check => cli::check::check_config(&cli.config),
    }
}

/// Serve starts even with a broken config: the handle gets a placeholder
/// pointing at the config path, requests show the error banner, and the
/// next successful reload replaces it.
fn init_serve_config(cli: &Cli) {
    match Landing::load(&cli.config) {
        Ok(config) => {
            init_config(config);
        }
        Err(err) => {
            log!("error"; "{err}");
            let mut placeholder = Landing::default();
            placeholder.config_path = cli.config.clone();
            placeholder.root = cli
                .config
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default();
            init_config(placeholder);
        }
    }
}
