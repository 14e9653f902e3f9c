use clap::Parser;

use knights_knaves::{
    config::Config,
    procedures::{puzzle_report, truth_table},
    structures::Testimony,
    types::err::ErrorKind,
};

mod args;
mod read;
mod render;

use args::{Cli, Commands};

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let cli = Cli::parse();
    let config = Config::default();

    let result = match cli.command {
        Commands::Table(args) => table(args, &config, cli.json),
        Commands::Puzzle(args) => puzzle(args, &config, cli.json),
    };

    if let Err(e) = result {
        println!("c {e}");
        std::process::exit(1);
    }
}

fn table(args: args::TableArgs, config: &Config, json: bool) -> Result<(), ErrorKind> {
    let request = read::read_table_request(args, config)?;

    let table = truth_table(config, &request.statement, request.speaker, &request.claims);

    match json {
        true => render::write_json(&table),
        false => render::write_table(&request, &table),
    }

    Ok(())
}

fn puzzle(args: args::PuzzleArgs, config: &Config, json: bool) -> Result<(), ErrorKind> {
    let testimony = read::read_testimony(args)?;

    for Testimony { speaker, statement } in &testimony {
        if !json {
            println!("c {speaker} says '{statement}'");
        }
    }

    let report = puzzle_report(config, &testimony);

    match json {
        true => render::write_json(&report),
        false => render::write_puzzle(&report),
    }

    Ok(())
}
