//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Write a default `.glossarc.json`
//! - `translate`: Translate one piece of text, forward or backward
//! - `import`: Import translation bundles into the store
//! - `export`: Export one language's translations as a bundle
//! - `classify`: Check names against the ignore rules
//! - `ignore`: Mark stored bindings matched by the ignore rules
//! - `capture`: Bind a form snapshot's controls to translation ids
//! - `apply`: Translate a form snapshot

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.command
            .as_ref()
            .and_then(Command::common)
            .is_some_and(|common| common.verbose)
    }
}

/// Common arguments shared by all store-backed commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Translation store directory (overrides config file)
    #[arg(long, env = "GLOSSA_STORE")]
    pub store: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Text to translate (an id or an already translated string)
    pub text: String,

    /// Target language code
    #[arg(short, long)]
    pub language: String,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ImportCommand {
    /// Bundle files or glob patterns (e.g. "translations/*.json")
    #[arg(required = true)]
    pub patterns: Vec<String>,

    /// Language of the bundles (default: each file's stem)
    #[arg(short, long)]
    pub language: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ExportCommand {
    /// Language to export
    #[arg(short, long)]
    pub language: String,

    /// Output file (default: <bundlesRoot>/<language>.json, "-" for stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ClassifyCommand {
    /// Control names to classify
    #[arg(required = true)]
    pub names: Vec<String>,

    /// Ignore rule file (overrides config file)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct IgnoreCommand {
    /// Ignore rule file (overrides config file)
    #[arg(long)]
    pub rules: Option<PathBuf>,

    /// Actually update bindings (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CaptureCommand {
    /// Form snapshot JSON produced by the component tree walker
    pub snapshot: PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct ApplyCommand {
    /// Form snapshot JSON produced by the component tree walker
    pub snapshot: PathBuf,

    /// Target language code
    #[arg(short, long)]
    pub language: String,

    /// Write the translated snapshot here (default: stdout)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initialize a new .glossarc.json configuration file
    Init,
    /// Translate text into a language, from an id or from another translation
    Translate(TranslateCommand),
    /// Import flat id -> text JSON bundles, one language per file
    Import(ImportCommand),
    /// Export a language's translations as a flat id -> text JSON bundle
    Export(ExportCommand),
    /// Classify control names against the ignore rules
    Classify(ClassifyCommand),
    /// Mark stored controls matched by the ignore rules as DoNotTranslate
    Ignore(IgnoreCommand),
    /// Bind a form snapshot's controls to static ids or dynamic lookups
    Capture(CaptureCommand),
    /// Translate a form snapshot using the stored bindings
    Apply(ApplyCommand),
}

impl Command {
    pub fn common(&self) -> Option<&CommonArgs> {
        match self {
            Command::Init => None,
            Command::Translate(cmd) => Some(&cmd.common),
            Command::Import(cmd) => Some(&cmd.common),
            Command::Export(cmd) => Some(&cmd.common),
            Command::Classify(cmd) => Some(&cmd.common),
            Command::Ignore(cmd) => Some(&cmd.common),
            Command::Capture(cmd) => Some(&cmd.common),
            Command::Apply(cmd) => Some(&cmd.common),
        }
    }
}
