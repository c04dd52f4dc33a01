mod archetype;
mod badges;
mod board;
mod cli;
mod config;
mod eval;
mod position;
mod quantile;
mod record;
mod report_helpers;
mod risk;
mod roles;
mod scale;
mod scores;
mod swing;
mod tables;
mod walk;

use std::path::Path;

use clap::{CommandFactory, Parser};

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    if let Err(err) = tables::validate() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }

    let result = match cli.command {
        Commands::Eval { path, common, vs } => eval::run(&path, common.json, &vs),
        Commands::Board {
            path,
            common,
            top,
            sort,
            exclude,
            all,
        } => config::load(Path::new(".")).and_then(|config| {
            board::run(
                &board::BoardOpts {
                    path,
                    json: common.json,
                    top,
                    sort,
                    exclude,
                    include_all: all,
                },
                &config,
            )
        }),
        Commands::Completions { shell } => {
            clap_complete::generate(shell, &mut Cli::command(), "bb", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
