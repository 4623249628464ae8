use clap::Args;
use teamscore::config::Config;
use teamscore::error::TsResult;

#[derive(Args, Debug, Clone)]
pub struct ParamsArgs {
    #[command(flatten)]
    pub config: Config,
}

/// Prints the effective params as JSON, ready to be saved and passed back
/// with `--params`.
pub fn run(config: &Config) -> TsResult<()> {
    println!("{}", serde_json::to_string_pretty(&config.scoring)?);
    Ok(())
}
