//! Command-line interface for jobseed.

use crate::fixtures::FixtureSet;
use crate::models::TimestampPolicy;
use clap::{Parser, Subcommand};

/// jobseed - Firestore fixture loader for the job board
/// Seeds hand-authored sample job listings for local development.
#[derive(Parser)]
#[command(name = "jobseed")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Upsert a fixture set into the jobs collection
    #[command(alias = "s")]
    Seed {
        /// Which fixture set to write
        #[arg(long, value_enum, default_value_t = FixtureSet::Sorting)]
        set: FixtureSet,

        /// How posting timestamps are written. Pick `authored` when testing
        /// recency sorting; `server` collapses the whole run to write time.
        #[arg(long = "timestamps", value_enum, default_value_t = TimestampPolicy::Authored)]
        timestamps: TimestampPolicy,

        /// Encode and log every record without opening a session or writing
        #[arg(long)]
        dry_run: bool,
    },

    /// Print the records a set would write
    #[command(alias = "ls")]
    List {
        #[arg(long, value_enum, default_value_t = FixtureSet::Sorting)]
        set: FixtureSet,
    },

    /// Create default config file
    #[command(alias = "--init")]
    Init,
}
