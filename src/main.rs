//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `resource_radar` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use std::process;

use resource_radar::cli::{Cli, Command, ListTarget};
use resource_radar::export::ExportOptions;
use resource_radar::geo::{distance_km, EnvLocation};
use resource_radar::initialization::init_logger_with;
use resource_radar::ops::{self, ProximityArgs};
use resource_radar::registry::{ResourceDetail, ResourceRecord, ThreatRecord};
use resource_radar::{DistanceQuery, Located};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists)
    // Try the current directory first, then next to the executable
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let cli = Cli::parse();

    init_logger_with(cli.log_level.clone().into(), cli.log_format.clone())
        .context("Failed to initialize logger")?;

    match run(cli).await {
        Ok(()) => Ok(()),
        Err(e) => {
            eprintln!("resource_radar error: {:#}", e);
            process::exit(1);
        }
    }
}

async fn run(cli: Cli) -> Result<()> {
    let pool = resource_radar::init_db_pool_with_path(&cli.db_path)
        .await
        .context("Failed to initialize database pool")?;
    resource_radar::run_migrations(&pool)
        .await
        .context("Failed to run database migrations")?;

    let provider = EnvLocation::new();

    match cli.command {
        // Pool setup above already created the file and ran migrations
        Command::Init => {
            println!("✅ Database ready at {}", cli.db_path.display());
        }

        Command::Signup {
            username,
            security_level,
            referred_by,
        } => {
            let outcome =
                ops::signup(&pool, &username, security_level, referred_by.as_deref()).await?;
            println!(
                "✅ Created profile '{}' ({}) - id {}",
                outcome.username, outcome.role, outcome.profile_id
            );
            if let Some(referrer) = outcome.referrer {
                println!("   Referral credited to '{referrer}'");
            }
        }

        Command::Register {
            user,
            category,
            description,
            capacity,
            location_note,
            at,
            availability,
            detail,
        } => {
            let detail = detail
                .map(|raw| serde_json::from_str::<ResourceDetail>(&raw))
                .transpose()
                .context("Failed to parse --detail payload")?;
            let outcome = ops::register_resource(
                &pool,
                ops::RegisterRequest {
                    username: user,
                    category,
                    description,
                    capacity,
                    location_note,
                    position: at,
                    availability_percent: availability,
                    detail,
                },
            )
            .await?;
            println!(
                "✅ Registered {} resource #{} for {} (+{} points)",
                outcome.category, outcome.resource_id, outcome.owner, outcome.points_awarded
            );
        }

        Command::Report {
            user,
            kind,
            description,
            at,
        } => {
            let outcome = ops::report_threat(&pool, &user, kind, description, at).await?;
            println!(
                "✅ Recorded {} threat #{} from {} (+{} points)",
                outcome.kind, outcome.threat_id, outcome.reporter, outcome.points_awarded
            );
        }

        Command::List { target } => match target {
            ListTarget::Resources {
                user,
                mine,
                category,
                near,
                locate,
                within,
            } => {
                let proximity = ProximityArgs {
                    near,
                    locate,
                    within,
                };
                let listing =
                    ops::list_resources(&pool, &user, mine, category, &proximity, &provider)
                        .await?;
                print_scope(listing.records.len(), listing.total, "resources", &listing.query);
                for record in &listing.records {
                    print_resource(record, &listing.query);
                }
            }
            ListTarget::Threats {
                user,
                kind,
                near,
                locate,
                within,
            } => {
                let proximity = ProximityArgs {
                    near,
                    locate,
                    within,
                };
                let listing =
                    ops::list_threats(&pool, &user, kind, &proximity, &provider).await?;
                print_scope(listing.records.len(), listing.total, "threats", &listing.query);
                for record in &listing.records {
                    print_threat(record, &listing.query);
                }
            }
        },

        Command::Confirm { user } => {
            let outcome =
                ops::confirm_resources(&pool, &user, Utc::now().timestamp_millis()).await?;
            println!(
                "✅ Confirmed {} resource{} for {user} (+{} points)",
                outcome.resources_confirmed,
                if outcome.resources_confirmed == 1 { "" } else { "s" },
                outcome.points_awarded
            );
        }

        Command::Score { user } => {
            let outcome = ops::contribution_score(&pool, &user).await?;
            let summary = &outcome.summary;
            println!(
                "{}: level {} ({}) - {} points",
                outcome.username,
                summary.level(),
                summary.title(),
                summary.total_points
            );
            println!(
                "   {} resources, {} threats, {} confirmations, {} referrals",
                summary.resources_registered,
                summary.threats_reported,
                summary.confirmations,
                summary.members_referred
            );
            println!(
                "   {} points into level {}",
                summary.points_into_level(),
                summary.level()
            );
        }

        Command::Export {
            user,
            target,
            format,
            output,
            category,
            kind,
            since_ms,
        } => {
            let opts = ExportOptions {
                output,
                category,
                kind,
                since_ms,
            };
            let outcome = ops::export_records(&pool, &user, target, format, opts).await?;
            println!(
                "✅ Exported {} record{} to {}",
                outcome.records,
                if outcome.records == 1 { "" } else { "s" },
                outcome.destination
            );
        }
    }

    Ok(())
}

fn print_scope(shown: usize, total: usize, noun: &str, query: &Option<DistanceQuery>) {
    match query {
        Some(query) => println!(
            "{shown} of {total} {noun} within {:.1} km of {}",
            query.max_distance_km, query.origin
        ),
        None => println!("{shown} {noun}"),
    }
}

fn print_resource(record: &ResourceRecord, query: &Option<DistanceQuery>) {
    let mut line = format!(
        "#{} [{}] {} - {}, {}% available",
        record.id,
        record.category,
        record.description,
        record.owner_username,
        record.availability_percent
    );
    if let Some(note) = &record.location_note {
        line.push_str(&format!(" ({note})"));
    }
    if let (Some(query), Some(position)) = (query, record.position()) {
        line.push_str(&format!(
            " - {:.1} km away",
            distance_km(query.origin, position)
        ));
    }
    println!("{line}");
}

fn print_threat(record: &ThreatRecord, query: &Option<DistanceQuery>) {
    let mut line = format!(
        "#{} [{}] reported by {}",
        record.id, record.kind, record.reporter_username
    );
    if let Some(description) = &record.description {
        line.push_str(&format!(": {description}"));
    }
    if let (Some(query), Some(position)) = (query, record.position()) {
        line.push_str(&format!(
            " - {:.1} km away",
            distance_km(query.origin, position)
        ));
    }
    println!("{line}");
}
