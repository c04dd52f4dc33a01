/// CLI argument definitions for the `bb` command.
///
/// Defines all subcommands, their arguments, and long help text using the
/// `clap` derive macros.
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

/// Top-level CLI parser with a single subcommand selector.
#[derive(Parser)]
#[command(
    name = "bb",
    version,
    about = "NBA draft prospect evaluation — scores, roles, archetypes, risk"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Common arguments shared by the evaluation commands.
#[derive(Args)]
pub struct CommonArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// All available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate one prospect record and print the scouting report
    #[command(long_about = "\
Evaluate one prospect record and print the scouting report.

The record is a flat JSON object of season statistics; only `name` and
`pos` are required. Every other field may be absent and is treated as
unknown rather than zero.

Report sections:
  Scores     -- weighted composites on a 0-100 scale (Overall, Feel,
                Athleticism, Shooting, Defense, Floor, Ceiling)
  Roles      -- 14 role fitness z-scores, banded Elite / Impact /
                Neutral / Liability
  Archetype  -- first-match classification with comps and risks
  Swing      -- the one skill gap most likely to move the outcome tier
  Risk       -- bust/sleeper clusters and a 1-10 risk score
  Badges     -- boolean skill badges and red flags
  vs. Tier   -- raw rates against NBA outcome-tier medians")]
    Eval {
        /// Player record file (JSON)
        path: PathBuf,

        #[command(flatten)]
        common: CommonArgs,

        /// NBA tier to compare raw rates against:
        /// replacement, role-player, starter, all-star
        #[arg(long, default_value = "replacement")]
        vs: String,
    },

    /// Evaluate a class of records and print the ranked big board
    Board {
        /// Record file (JSON object or array) or directory of .json records
        path: PathBuf,

        #[command(flatten)]
        common: CommonArgs,

        /// Show only the top N prospects (default: 60)
        #[arg(long)]
        top: Option<usize>,

        /// Sort key: ceiling, overall, floor, bpm, risk (default: ceiling)
        #[arg(long)]
        sort: Option<String>,

        /// Exclude record files matching a glob (repeatable)
        #[arg(long)]
        exclude: Vec<String>,

        /// Include records below the minimum-minutes sample
        #[arg(long)]
        all: bool,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}
