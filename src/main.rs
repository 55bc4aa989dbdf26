use clap::Parser;
use season_standings::{
    args::Args,
    model::{ranked_entries, structures::included_weeklies::IncludedWeeklies},
    season_file::{SeasonFile, SeasonFileError}
};
use tracing::{error, info, warn};
use tracing_indicatif::IndicatifLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    dotenv::dotenv().ok();
    let args = Args::parse();
    init_tracing(&args.log_level);

    if let Err(e) = run(&args) {
        error!("{}", e);
        std::process::exit(1);
    }
}

fn init_tracing(log_level: &str) {
    let indicatif_layer = IndicatifLayer::new();
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(indicatif_layer.get_stderr_writer()))
        .with(indicatif_layer)
        .init();
}

fn run(args: &Args) -> Result<(), SeasonFileError> {
    let season_file = SeasonFile::load(&args.season_file)?;
    let included_override = args.included_weeklies.map(IncludedWeeklies::new).transpose()?;

    let tracker = season_file.into_tracker(included_override)?;

    let output = match args.weekly {
        Some(weekly) => {
            let results = tracker.weekly_results(weekly)?;
            if results.is_empty() {
                warn!("Weekly #{} has no eligible entries", weekly);
            }
            info!("Weekly #{} has {} scored entries", weekly, results.len());
            serde_json::to_string_pretty(&ranked_entries(results))?
        }
        None => {
            let standings = tracker.standings()?;
            info!(
                "Ranked {} players, {} tie-blocks",
                standings.standings.len(),
                standings.tiebreaks.len()
            );
            serde_json::to_string_pretty(&standings)?
        }
    };

    println!("{}", output);
    Ok(())
}
