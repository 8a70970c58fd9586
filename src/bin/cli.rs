use clap::{Parser, Subcommand};
use statsnap_engine::{source::JsonTableSource, EngineOptions, StatEngine};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "statsnap-cli")]
#[command(about = "StatSnap NFL stats engine CLI", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding ids.json, seasonal.json, weekly.json, rosters.json
    #[arg(short, long, env = "STATSNAP_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,

    /// Season to query (defaults to the latest in the data)
    #[arg(short, long)]
    season: Option<u16>,
}

#[derive(Subcommand)]
enum Commands {
    /// Season per-game stats for a player
    Player {
        name: String,
    },

    /// A player's stats for one week
    Week {
        name: String,
        week: u32,
    },

    /// Players at a position meeting a per-game threshold
    Filter {
        position: String,
        stat: String,
        threshold: f64,
    },

    /// Team roster grouped by position
    Roster {
        team: String,
    },

    /// Compare two players
    Compare {
        first: String,
        second: String,
    },

    /// Games-played availability report
    Availability {
        name: String,
    },

    /// Loaded snapshot summary
    Info,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "statsnap_engine=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let mut options = EngineOptions::from_env();
    if cli.season.is_some() {
        options.season = cli.season;
    }

    let engine = StatEngine::new(options);
    engine.refresh(&JsonTableSource::new(&cli.data_dir)).await?;

    match cli.command {
        Commands::Player { name } => {
            let result = engine.season_stats(&name)?;

            println!("📊 {} ({}) - {} season", result.player.name, result.player.position, result.season);
            println!("   Match: {:.1}%", result.score);
            println!("   GP: {}", result.stats.games);
            for (key, value) in result.featured_values() {
                println!("   {}: {:.2}", key.label(), value);
            }
        }

        Commands::Week { name, week } => {
            let result = engine.week_stats(&name, week)?;
            let t = &result.totals;

            println!("📅 Week {} - {} ({})", result.week, result.player.name, result.player.position);
            println!("   Opponent: {}", result.opponent);
            println!("   Passing: {} yds, {} TD", t.passing_yards, t.passing_tds);
            println!("   Rushing: {} yds, {} TD", t.rushing_yards, t.rushing_tds);
            println!(
                "   Receiving: {} rec, {} yds, {} TD",
                t.receptions, t.receiving_yards, t.receiving_tds
            );
            println!("   Fantasy Points (PPR): {:.2}", result.fantasy_points);
        }

        Commands::Filter { position, stat, threshold } => {
            let result = engine.filter_by_stat(&position, &stat, threshold)?;

            println!("🔍 {} players with {} >= {}", result.position, result.stat.label(), threshold);
            for row in &result.rows {
                println!("   • {}: {:.2} ({} GP)", row.name, row.value, row.games);
            }
            if result.truncated {
                println!("   (showing top {} of {})", result.rows.len(), result.total_matches);
            }
        }

        Commands::Roster { team } => {
            let roster = engine.roster(&team)?;

            println!("🏈 {} Roster ({} season)", roster.team, roster.season);
            for group in &roster.groups {
                let (shown, hidden) = group.preview(10);
                let mut line = shown.join(", ");
                if hidden > 0 {
                    line.push_str(&format!(" (+{} more)", hidden));
                }
                println!("   {}: {}", group.position, line);
            }
        }

        Commands::Compare { first, second } => {
            let comparison = engine.compare(&first, &second)?;

            println!(
                "⚖️  {} ({}) vs {} ({})",
                comparison.first.player.name,
                comparison.first.player.position,
                comparison.second.player.name,
                comparison.second.player.position
            );
            println!(
                "   Games Played: {} vs {}",
                comparison.first.stats.games, comparison.second.stats.games
            );
            for (key, a, b) in comparison.rows() {
                println!("   {}: {:.2} vs {:.2}", key.label(), a, b);
            }
            println!("   Fantasy Leader: {}", comparison.winner_name());
        }

        Commands::Availability { name } => {
            let report = engine.availability(&name)?;

            println!("🩺 {} ({}) - {} season", report.player.name, report.player.position, report.season);
            println!("   Games Played: {}/{}", report.games_played, report.season_games);
            println!("   Missed: {}", report.missed);
            println!("   Status: {}", report.status.description());
        }

        Commands::Info => {
            let info = engine.snapshot_info()?;

            println!("📦 Snapshot {}", info.generation);
            println!("   Loaded: {}", info.loaded_at.format("%Y-%m-%d %H:%M:%S"));
            println!("   Players: {}", info.players);
            println!("   Season records: {:?}", info.season_records);
            println!("   Week records: {:?}", info.week_records);
            println!("   Roster entries: {:?}", info.roster_entries);
        }
    }

    Ok(())
}
