use crate::reports;
use clap::Args;
use std::fs;
use std::path::PathBuf;
use teamscore::api::{self, DashboardState};
use teamscore::config::Config;
use teamscore::error::TsResult;
use teamscore::loader::load_period_records_from_path;
use teamscore::period::PeriodKey;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub config: Config,

    /// CSV with year,month,name,interactions,avg_time,errors rows.
    #[arg(short, long)]
    pub input: PathBuf,

    #[arg(short, long)]
    pub year: i32,

    #[arg(short, long)]
    pub month: u32,

    /// Write the period report as JSON to this path.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn run(args: ScoreArgs, config: Config) -> TsResult<()> {
    let key = PeriodKey::new(args.year, args.month)?;
    let state = DashboardState::new(config.scoring.clone());

    let periods = load_period_records_from_path(&args.input)?;
    info!("Loaded {} periods", periods.len());
    for (period, records) in periods {
        api::save_period(&state, period, records)?;
    }

    let results = api::period_scores(&state, key)?;
    println!("\n📊 Desempenho da equipe: {} ({})", key, config.scoring.mode);

    if results.is_empty() {
        println!("Sem dados para {}.", key);
    } else {
        reports::print_score_table(&results, &config.report);
        reports::print_team_summary(&results, &config.report);
        if !config.report.hide_notes {
            reports::print_coaching_notes(&results);
        }
    }

    if let Some(path) = &args.export {
        let report = api::period_report(&state, key)?;
        fs::write(path, report.to_json_pretty()?)?;
        info!("Report exported to: {}", path.display());
    }

    Ok(())
}
