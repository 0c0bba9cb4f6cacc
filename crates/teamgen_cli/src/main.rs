//! Team Gen CLI
//!
//! Roster file (manual text or CSV) → skill-balanced teams on stdout.

mod telemetry;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::io::Read;
use std::path::{Path, PathBuf};
use teamgen_core::{BalanceReport, SourceFormat, TeamAssignment, TeamGenConfig, TeamGenSession};
use tracing::{info, Level};

#[derive(Parser)]
#[command(name = "teamgen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split a roster into skill-balanced teams", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Form teams from a roster
    Form {
        /// Roster file, or "-" for stdin
        #[arg(long)]
        input: PathBuf,

        /// Input format (text or csv); guessed from the file extension if omitted
        #[arg(long)]
        format: Option<SourceFormat>,

        /// Number of teams (overrides the config file)
        #[arg(long)]
        teams: Option<usize>,

        /// RNG seed for a reproducible split
        #[arg(long)]
        seed: Option<u64>,

        /// YAML config file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Print the result as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },

    /// List the skill levels detected in a roster
    Tiers {
        /// Roster file, or "-" for stdin
        #[arg(long)]
        input: PathBuf,

        /// Input format (text or csv); guessed from the file extension if omitted
        #[arg(long)]
        format: Option<SourceFormat>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    telemetry::init_tracing(cli.log_json, level);

    match cli.command {
        Commands::Form {
            input,
            format,
            teams,
            seed,
            config,
            json,
        } => {
            let config = match config {
                Some(path) => TeamGenConfig::load(&path)
                    .with_context(|| format!("Failed to load config: {}", path.display()))?,
                None => TeamGenConfig::default(),
            };

            let mut session = TeamGenSession::from_config(&config);
            load_roster(&mut session, &input, format)?;
            if let Some(count) = teams {
                session.set_team_count(count);
            }

            let seed = seed.or(config.seed).unwrap_or_else(rand::random);
            info!(seed, team_count = session.team_count(), "forming teams");

            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            if session.form_teams(&mut rng).is_none() {
                bail!("{}", session.error());
            }

            let assignment = if config.sort_for_display {
                session.sorted_teams()
            } else {
                session.teams().cloned()
            }
            .unwrap_or_default();
            let report = session.balance_report().context("No teams formed")?;

            if json {
                print_json(&session, &assignment, &report, seed)?;
            } else {
                print_skill_levels(&session);
                print_teams(&assignment);
                print_balance(&report);
                println!("\nSeed: {}", seed);
            }
        }

        Commands::Tiers { input, format } => {
            let mut session = TeamGenSession::default();
            load_roster(&mut session, &input, format)?;
            print_skill_levels(&session);
        }
    }

    Ok(())
}

fn read_input(input: &Path) -> Result<Vec<u8>> {
    if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read roster from stdin")?;
        return Ok(buf);
    }

    std::fs::read(input).with_context(|| format!("Failed to read roster: {}", input.display()))
}

fn load_roster(
    session: &mut TeamGenSession,
    input: &Path,
    format: Option<SourceFormat>,
) -> Result<()> {
    let bytes = read_input(input)?;
    let format = format.unwrap_or_else(|| SourceFormat::from_path(input));

    match format {
        SourceFormat::Csv => {
            if session.load_csv(&bytes).is_err() {
                bail!("{}", session.error());
            }
        }
        SourceFormat::Text => {
            let text = String::from_utf8(bytes).context("Roster text is not valid UTF-8")?;
            session.load_manual_input(&text);
        }
        SourceFormat::Rows => bail!("rows input is only available through the JSON API"),
    }

    info!(players = session.roster().len(), "roster loaded");
    Ok(())
}

fn print_skill_levels(session: &TeamGenSession) {
    let roster = session.roster();
    println!("Detected Skill Levels ({} players)", roster.len());
    for level in session.skill_levels() {
        let count = roster.iter().filter(|p| p.skill_level == level).count();
        let label = if level.is_empty() { "(none)" } else { level };
        println!("   - {} ({})", label, count);
    }
}

fn print_teams(assignment: &TeamAssignment) {
    println!("\nFormed Teams");
    for (idx, team) in assignment.iter().enumerate() {
        println!("\nTeam {} ({} players)", idx + 1, team.len());
        for player in &team.members {
            println!("   {}", player.display());
        }
    }
}

fn print_balance(report: &BalanceReport) {
    println!("\nBalance");
    for (idx, row) in report.counts.iter().enumerate() {
        let cells: Vec<String> = report
            .tiers
            .iter()
            .zip(row)
            .map(|(tier, count)| format!("{}={}", tier, count))
            .collect();
        println!("   Team {}: {}", idx + 1, cells.join(", "));
    }
}

fn print_json(
    session: &TeamGenSession,
    assignment: &TeamAssignment,
    report: &BalanceReport,
    seed: u64,
) -> Result<()> {
    let output = serde_json::json!({
        "seed": seed,
        "roster_size": session.roster().len(),
        "skill_levels": session.skill_levels(),
        "teams": assignment.teams,
        "balance": report,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
