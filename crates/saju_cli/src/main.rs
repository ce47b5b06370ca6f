use std::path::{Path, PathBuf};

use chrono::Datelike;
use clap::{Parser, Subcommand};
use saju_base::{Branch, FourPillars, Stem, life_stage, ten_god};
use saju_chart::{ChartConfig, DirectionBasis, Gender, annual_luck, chart_with_local_cycle};
use serde_json::json;

#[derive(Parser)]
#[command(name = "saju", about = "Four-pillars (saju) chart CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full chart from four pillars as JSON
    Chart {
        /// Year pillar, e.g. 庚午
        year: String,
        /// Month pillar
        month: String,
        /// Day pillar
        day: String,
        /// Hour pillar
        hour: String,
        /// male or female
        #[arg(long)]
        gender: String,
        /// Age at which the first decade begins
        #[arg(long)]
        start_age: u32,
        /// Birth year (CE)
        #[arg(long)]
        birth_year: i32,
        /// Reference year for current decade and annual luck (default: this year)
        #[arg(long)]
        reference_year: Option<i32>,
        /// TOML file with chart options
        #[arg(long)]
        config: Option<PathBuf>,
        /// Luck direction from the year stem instead of the day stem
        #[arg(long)]
        year_stem_direction: bool,
        /// Skip interaction detection
        #[arg(long)]
        no_interactions: bool,
        /// Skip auxiliary stars
        #[arg(long)]
        no_stars: bool,
        /// Number of decades to generate
        #[arg(long)]
        decades: Option<u8>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
    /// Ten god of a target stem against a reference stem
    TenGod {
        /// Reference stem (usually the day master)
        reference: String,
        /// Target stem
        target: String,
    },
    /// Life stage of a stem at a branch
    Stage {
        stem: String,
        branch: String,
    },
    /// Annual luck of a year against four pillars
    Annual {
        year_pillar: String,
        month: String,
        day: String,
        hour: String,
        /// Calendar year to evaluate (default: this year)
        #[arg(long)]
        year: Option<i32>,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },
}

fn fail(msg: impl std::fmt::Display) -> ! {
    eprintln!("{msg}");
    std::process::exit(1);
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn load_config(path: Option<&Path>) -> ChartConfig {
    let Some(path) = path else {
        return ChartConfig::default();
    };
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| fail(format!("Failed to read {}: {e}", path.display())));
    toml::from_str(&text)
        .unwrap_or_else(|e| fail(format!("Invalid config {}: {e}", path.display())))
}

fn parse_pillars(year: &str, month: &str, day: &str, hour: &str) -> FourPillars {
    FourPillars::parse(year, month, day, hour).unwrap_or_else(|e| fail(e))
}

fn print_json(value: &impl serde::Serialize, pretty: bool) {
    let out = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    match out {
        Ok(s) => println!("{s}"),
        Err(e) => fail(format!("Failed to serialize: {e}")),
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Chart {
            year,
            month,
            day,
            hour,
            gender,
            start_age,
            birth_year,
            reference_year,
            config,
            year_stem_direction,
            no_interactions,
            no_stars,
            decades,
            pretty,
        } => {
            let pillars = parse_pillars(&year, &month, &day, &hour);
            let gender: Gender = gender.parse().unwrap_or_else(|e| fail(e));

            let mut config = load_config(config.as_deref());
            if let Some(y) = reference_year {
                config.reference_year = Some(y);
            }
            if config.reference_year.is_none() {
                config.reference_year = Some(current_year());
            }
            if year_stem_direction {
                config.direction_basis = DirectionBasis::YearStem;
            }
            if no_interactions {
                config.include_interactions = false;
            }
            if no_stars {
                config.include_stars = false;
            }
            if let Some(n) = decades {
                config.decade_count = n;
            }
            log::debug!("chart config: {config:?}");

            let chart = chart_with_local_cycle(pillars, gender, start_age, birth_year, &config)
                .unwrap_or_else(|e| fail(e));
            print_json(&chart, pretty);
        }

        Commands::TenGod { reference, target } => {
            let reference: Stem = reference.parse().unwrap_or_else(|e| fail(e));
            let target: Stem = target.parse().unwrap_or_else(|e| fail(e));
            let god = ten_god(reference, target);
            print_json(
                &json!({
                    "reference": reference,
                    "target": target,
                    "tenGod": god,
                    "hanja": god.hanja(),
                    "korean": god.korean(),
                }),
                false,
            );
        }

        Commands::Stage { stem, branch } => {
            let stem: Stem = stem.parse().unwrap_or_else(|e| fail(e));
            let branch: Branch = branch.parse().unwrap_or_else(|e| fail(e));
            let stage = life_stage(stem, branch);
            print_json(
                &json!({
                    "stem": stem,
                    "branch": branch,
                    "stage": stage,
                    "hanja": stage.hanja(),
                    "korean": stage.korean(),
                }),
                false,
            );
        }

        Commands::Annual {
            year_pillar,
            month,
            day,
            hour,
            year,
            pretty,
        } => {
            let pillars = parse_pillars(&year_pillar, &month, &day, &hour);
            let entry = annual_luck(year.unwrap_or_else(current_year), &pillars);
            print_json(&entry, pretty);
        }
    }
}
