pub mod cli;
pub mod config;
pub mod firestore;
pub mod fixtures;
pub mod models;
pub mod seeder;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
pub use config::Config;
use firestore::FirestoreClient;
use fixtures::FixtureSet;
use models::TimestampPolicy;
use seeder::seed_all;

pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    match cli.command {
        Commands::Seed {
            set,
            timestamps,
            dry_run,
        } => cmd_seed(&config, set, timestamps, dry_run).await,

        Commands::List { set } => {
            cmd_list(set);
            Ok(())
        }

        Commands::Init => {
            if Config::create_default_if_missing()? {
                println!("Created config.toml - edit app_id and service_account_key, then run 'jobseed seed'");
            } else {
                println!("config.toml already exists");
            }
            Ok(())
        }
    }
}

async fn cmd_seed(
    config: &Config,
    set: FixtureSet,
    timestamps: TimestampPolicy,
    dry_run: bool,
) -> anyhow::Result<()> {
    config.validate().context("Startup check failed")?;

    let records = set.records();
    let collection_path = config.collection_path();

    if dry_run {
        for record in &records {
            record.validate()?;
            let encoded = firestore::value::encode_job(record, timestamps)?;
            info!(
                "[dry-run] {}/{}: {} fields, {} server-time fields",
                collection_path,
                record.job_id,
                encoded.fields.len(),
                encoded.server_time_fields.len()
            );
        }
        println!("[dry-run] {} records checked, nothing written", records.len());
        return Ok(());
    }

    let store = FirestoreClient::connect(config)
        .await
        .context("Firestore initialization failed. Check that the service account key path in config.toml points at a valid key file")?;

    let report = seed_all(&store, &collection_path, &records, timestamps).await?;

    println!(
        "Seeding completed: {} written, {} failed (collection {})",
        report.written, report.failed, collection_path
    );
    for failure in &report.failures {
        warn!("  {}: {}", failure.job_id, failure.error);
    }

    if report.failed > 0 {
        error!("{} of {} records were not written", report.failed, records.len());
        anyhow::bail!("{} of {} records failed", report.failed, records.len());
    }

    Ok(())
}

fn cmd_list(set: FixtureSet) {
    let records = set.records();
    for job in &records {
        let location = job.job_state.as_ref().map_or_else(
            || format!("{}, {}", job.job_city, job.job_country),
            |state| format!("{}, {state}, {}", job.job_city, job.job_country),
        );
        println!(
            "{:<22} {} @ {} ({location}) [{}]",
            job.job_id, job.job_title, job.employer_name, job.job_category
        );
    }
    println!("{} records", records.len());
}
