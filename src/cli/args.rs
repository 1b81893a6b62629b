//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

use crate::core::Mode;

/// Rewrite asset URLs in generated sites to a CDN
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: cdnify.toml, searched upward)
    #[arg(short = 'C', long, global = true, default_value = "cdnify.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Override the CDN URL from the config file.
    ///
    /// Accepts a bare domain or a full URL; the scheme and a trailing `/`
    /// are stripped.
    ///
    /// Example:
    ///   cdnify --cdn-url "https://cdn.example.com" site public
    #[arg(long = "cdn-url", global = true, value_hint = clap::ValueHint::Url)]
    pub cdn_url: Option<String>,

    /// Override the site URL used for feed and sitemap rewriting
    #[arg(short = 'U', long = "site-url", global = true, value_hint = clap::ValueHint::Url)]
    pub site_url: Option<String>,

    /// Enable verbose output for debugging
    #[arg(short = 'v', long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Rewrite a single generated document
    #[command(visible_alias = "r")]
    Rewrite {
        /// Document to rewrite (.html, .htm, .xml or .json)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        input: PathBuf,

        /// Write the result here instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,

        /// Output file name seen by the rewriters (default: input file name)
        #[arg(short, long)]
        name: Option<String>,

        /// Render mode; preview modes leave documents untouched
        #[arg(short, long, value_enum, default_value_t = Mode::Deploy)]
        mode: Mode,
    },

    /// Rewrite every document of a built site in place
    #[command(visible_alias = "s")]
    Site {
        /// Output directory of the site generator
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: PathBuf,

        /// Render mode; preview modes leave documents untouched
        #[arg(short, long, value_enum, default_value_t = Mode::Deploy)]
        mode: Mode,

        /// Report what would change without writing any file
        #[arg(short, long)]
        dry: bool,
    },

    /// Show config diagnostics, match patterns and hook registrations
    #[command(visible_alias = "c")]
    Check,
}

#[allow(unused)]
impl Cli {
    pub const fn is_rewrite(&self) -> bool {
        matches!(self.command, Commands::Rewrite { .. })
    }
    pub const fn is_site(&self) -> bool {
        matches!(self.command, Commands::Site { .. })
    }
    pub const fn is_check(&self) -> bool {
        matches!(self.command, Commands::Check)
    }
}
