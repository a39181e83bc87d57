//! Command-line interface.

pub mod check;
pub mod completions;
pub mod info;
pub mod manifest;
pub mod output;
pub mod resolve;
pub mod secret;
pub mod set;
pub mod signing;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::core::build::BuildVariant;
use crate::core::settings::Settings;
use crate::error::Result;

/// ecomap-config - Build configuration resolver for the Ecomap Android app.
#[derive(Parser)]
#[command(
    name = "ecomap-config",
    about = "Resolve local properties, signing credentials and manifest placeholders for the Ecomap build",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Project directory containing local.properties and key.properties
    #[arg(
        short = 'C',
        long,
        global = true,
        env = "ECOMAP_PROJECT_DIR",
        default_value = "."
    )]
    pub project_dir: PathBuf,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the resolved build configuration
    Resolve {
        /// Output as JSON
        #[arg(long)]
        json: bool,
        /// Show secrets in clear text
        #[arg(long)]
        reveal: bool,
    },

    /// Print a single resolved secret (empty if unset)
    Secret {
        /// Property key (e.g., GOOGLE_MAPS_API_KEY)
        key: String,
        /// Property file to read from
        #[arg(short, long, value_enum, default_value_t = Target::Local)]
        file: Target,
    },

    /// Show the signing identity
    Signing {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify signing material for each build variant
    Check {
        /// Only check this variant
        #[arg(long, value_enum)]
        variant: Option<Variant>,
    },

    /// Inject manifest placeholders into a template
    Manifest {
        /// Manifest template containing ${NAME} tokens
        template: PathBuf,
        /// Write the result here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a key into a property file
    Set {
        /// Property key
        key: String,
        /// Property value (prompted without echo when omitted)
        value: Option<String>,
        /// Property file to write to
        #[arg(short, long, value_enum, default_value_t = Target::Local)]
        file: Target,
    },

    /// Show SDK settings and declared dependencies
    Info,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Property file selector.
#[derive(clap::ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// local.properties
    Local,
    /// key.properties
    Signing,
}

impl Target {
    /// Path of the selected file under the project settings
    pub fn path(self, settings: &Settings) -> PathBuf {
        match self {
            Target::Local => settings.local_properties_path(),
            Target::Signing => settings.signing_properties_path(),
        }
    }
}

/// Build variant selector.
#[derive(clap::ValueEnum, Clone, Copy, Debug)]
pub enum Variant {
    Debug,
    Release,
}

impl From<Variant> for BuildVariant {
    fn from(variant: Variant) -> Self {
        match variant {
            Variant::Debug => BuildVariant::Debug,
            Variant::Release => BuildVariant::Release,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command against the project in `project_dir`.
pub fn execute(command: Command, project_dir: PathBuf) -> Result<()> {
    use Command::*;

    let settings = || Settings::load(&project_dir);

    match command {
        Resolve { json, reveal } => resolve::execute(&settings()?, json, reveal),
        Secret { key, file } => secret::execute(&settings()?, &key, file),
        Signing { json } => signing::execute(&settings()?, json),
        Check { variant } => check::execute(&settings()?, variant.map(Into::into)),
        Manifest { template, output } => {
            manifest::execute(&settings()?, &template, output.as_deref())
        }
        Set { key, value, file } => set::execute(&settings()?, &key, value, file),
        Info => info::execute(),
        Completions { shell } => completions::execute(shell),
    }
}
