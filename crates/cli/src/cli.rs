use clap::{Args, Parser, Subcommand};
use quotefix_core::Variant;
use quotefix_io::ConfigLayer;
use std::path::PathBuf;

/// Options shared by every command
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Content root to scan [default: src/app/questions]
    #[clap(short, long)]
    pub root: Option<PathBuf>,
    /// Escape variant: baseline or hardened [default: hardened]
    #[clap(short, long)]
    pub variant: Option<Variant>,
    /// File extension to process, repeatable [default: the variant's set]
    #[clap(short = 'e', long = "ext")]
    pub extensions: Vec<String>,
    /// Config file [default: ./quotefix.json when present]
    #[clap(short, long)]
    pub config: Option<PathBuf>,
    /// Print the run report as JSON on stdout
    #[clap(long)]
    pub json: bool,
    /// Also write debug logs to a file in this directory
    #[clap(long)]
    pub log_dir: Option<PathBuf>,
}

impl RunArgs {
    /// The command-line configuration layer
    pub fn layer(&self, dry_run: bool) -> ConfigLayer {
        ConfigLayer {
            root: self.root.clone(),
            variant: self.variant,
            extensions: (!self.extensions.is_empty()).then(|| self.extensions.clone()),
            dry_run: dry_run.then_some(true),
        }
    }
}

#[derive(Subcommand, Debug)]
#[command(version, about, long_about = None)]
pub enum Commands {
    /// Escape quotes in element text and write changed files back
    Fix {
        #[command(flatten)]
        args: RunArgs,
        /// Report what would change without writing
        #[clap(short = 'n', long)]
        dry_run: bool,
    },

    /// Dry run that exits with status 1 when any file would change
    Check {
        #[command(flatten)]
        args: RunArgs,
    },
}

impl Default for Commands {
    fn default() -> Self {
        Self::Fix {
            args: RunArgs::default(),
            dry_run: false,
        }
    }
}

impl Commands {
    pub fn args(&self) -> &RunArgs {
        match self {
            Self::Fix { args, .. } | Self::Check { args } => args,
        }
    }
}

/// quotefix Command
#[derive(Parser, Debug)]
#[command(version, about = "Escape quotes in markup content files", long_about = None)]
pub struct Cli {
    /// Runs `fix` with defaults when omitted
    #[command(subcommand)]
    pub cmd: Option<Commands>,
}
