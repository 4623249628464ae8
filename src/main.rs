use clap::{CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use teamscore::config::ScoringParams;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with scoring params; explicit CLI flags still win.
    #[arg(global = true, long)]
    params: Option<String>,

    #[arg(global = true, long, default_value_t = false)]
    debug: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Score(cmd::score::ScoreArgs),
    Params(cmd::params::ParamsArgs),
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    tracing_subscriber::fmt()
        .with_max_level(if cli.debug { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    let mut config = match &cli.command {
        Commands::Score(args) => args.config.clone(),
        Commands::Params(args) => args.config.clone(),
    };

    if let Some(path) = &cli.params {
        info!("Loading params from: {}", path);
        let mut file_params = ScoringParams::load_from_file(path).unwrap_or_else(|e| {
            error!("{}", e);
            process::exit(1);
        });
        // Subcommand flags live in the subcommand's matches, not the root.
        if let Some((_, sub_matches)) = matches.subcommand() {
            file_params.merge_from_cli(&config.scoring, sub_matches);
        }
        config.scoring = file_params;
    }

    if let Err(e) = config.scoring.validate() {
        error!("{}", e);
        process::exit(1);
    }

    let result = match cli.command {
        Commands::Score(args) => cmd::score::run(args, config),
        Commands::Params(_) => cmd::params::run(&config),
    };

    if let Err(e) = result {
        error!("{}", e);
        process::exit(1);
    }
}
