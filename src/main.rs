//! cdnify - CDN asset URL rewriter for generated sites.

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cdnify::cli::{self, Cli, Commands};
use cdnify::config::CdnifyConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = CdnifyConfig::load(&cli)?;

    match &cli.command {
        Commands::Rewrite {
            input,
            output,
            name,
            mode,
        } => cli::file::rewrite_file(&config, input, output.as_deref(), name.as_deref(), *mode),
        Commands::Site { dir, mode, dry } => {
            cli::site::rewrite_site(&config, dir, *mode, *dry).map(|_| ())
        }
        Commands::Check => cli::check::check_config(&config),
    }
}
