use clap::{Parser, Subcommand, ValueEnum};
use engine::api::{builtin_preset_list, load_session_config, run_session};
use engine::{
    AdMode, Dice, DieKind, RollRequest, RollResult, Statistics, compute_statistics, create_roll,
    format_roll, validate_request,
};
use std::path::PathBuf;

#[derive(Copy, Clone, ValueEnum)]
enum Adv {
    Normal,
    Advantage,
    Disadvantage,
}

#[derive(Copy, Clone, ValueEnum)]
enum Die {
    D4,
    D6,
    D8,
    D10,
    D12,
    D20,
    D100,
}

#[derive(Subcommand)]
enum Cmd {
    /// Roll dice and print each result (plus statistics when repeating)
    Roll {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Die kind
        #[arg(long, value_enum, default_value_t = Die::D20)]
        die: Die,
        /// Number of dice per roll
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        /// Flat modifier added to the total
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
        /// Advantage mode (single d20 only)
        #[arg(long, value_enum, default_value_t = Adv::Normal)]
        adv: Adv,
        /// Number of rolls
        #[arg(long, default_value_t = 1)]
        repeat: u32,
        /// Print each result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the built-in roll presets
    Presets,
    /// Roll a built-in preset by id
    Preset {
        /// Preset id (see `presets`)
        name: String,
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Number of rolls
        #[arg(long, default_value_t = 1)]
        repeat: u32,
    },
    /// Roll many times and print aggregate statistics
    Stats {
        /// RNG seed for determinism
        #[arg(long, default_value_t = 42)]
        seed: u64,
        /// Die kind
        #[arg(long, value_enum, default_value_t = Die::D20)]
        die: Die,
        /// Number of dice per roll
        #[arg(long, default_value_t = 1)]
        quantity: u32,
        /// Flat modifier added to the total
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        modifier: i32,
        /// Number of rolls to aggregate
        #[arg(long, default_value_t = 100)]
        rolls: u32,
        /// Print the statistics as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Run a session config file (JSON or YAML) and print its log + statistics
    Session {
        /// Path to the session config
        #[arg(long)]
        file: PathBuf,
        /// Print the full session result as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Parser)]
#[command(name = "roller-cli")]
#[command(about = "Dice roller CLI harness")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

fn to_mode(a: Adv) -> AdMode {
    match a {
        Adv::Normal => AdMode::Normal,
        Adv::Advantage => AdMode::Advantage,
        Adv::Disadvantage => AdMode::Disadvantage,
    }
}

fn to_die(d: Die) -> DieKind {
    match d {
        Die::D4 => DieKind::D4,
        Die::D6 => DieKind::D6,
        Die::D8 => DieKind::D8,
        Die::D10 => DieKind::D10,
        Die::D12 => DieKind::D12,
        Die::D20 => DieKind::D20,
        Die::D100 => DieKind::D100,
    }
}

fn print_statistics(stats: &Statistics) {
    println!("rolls:   {}", stats.total_rolls);
    println!("average: {:.2}", stats.average_roll);
    println!("highest: {}", stats.highest_roll);
    println!("lowest:  {}", stats.lowest_roll);
    let mut faces: Vec<(u32, u32)> = stats.most_rolled.iter().map(|(&f, &c)| (f, c)).collect();
    faces.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    for (face, count) in faces.into_iter().take(5) {
        println!("  face {:>3}: x{}", face, count);
    }
}

fn roll_many(
    dice: &mut Dice,
    request: RollRequest,
    repeat: u32,
    json: bool,
) -> anyhow::Result<Vec<RollResult>> {
    let mut history = Vec::with_capacity(repeat as usize);
    for _ in 0..repeat {
        let roll = create_roll(dice, request)?;
        if json {
            println!("{}", serde_json::to_string(&roll)?);
        } else {
            println!("{}", format_roll(&roll));
        }
        history.push(roll);
    }
    Ok(history)
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Roll {
            seed,
            die,
            quantity,
            modifier,
            adv,
            repeat,
            json,
        } => {
            if !validate_request(quantity, modifier) {
                anyhow::bail!("quantity must be 1..=100 and modifier -100..=100");
            }
            let request = RollRequest {
                die: to_die(die),
                quantity,
                modifier,
                advantage: to_mode(adv),
            };
            let mut dice = Dice::from_seed(seed);
            let history = roll_many(&mut dice, request, repeat, json)?;
            if repeat > 1 && !json {
                println!();
                print_statistics(&compute_statistics(&history));
            }
        }
        Cmd::Presets => {
            for preset in builtin_preset_list("basic")? {
                println!(
                    "{:<14} {:<14} {}",
                    preset.id, preset.name, preset.description
                );
            }
        }
        Cmd::Preset { name, seed, repeat } => {
            let presets = builtin_preset_list("basic")?;
            let Some(preset) = presets.iter().find(|p| p.id.eq_ignore_ascii_case(&name)) else {
                anyhow::bail!("preset '{}' not found (try `presets`)", name);
            };
            let mut dice = Dice::from_seed(seed);
            let history = roll_many(&mut dice, preset.to_request(), repeat, false)?;
            if repeat > 1 {
                println!();
                print_statistics(&compute_statistics(&history));
            }
        }
        Cmd::Stats {
            seed,
            die,
            quantity,
            modifier,
            rolls,
            json,
        } => {
            let request = RollRequest {
                die: to_die(die),
                quantity,
                modifier,
                advantage: AdMode::Normal,
            };
            let mut dice = Dice::from_seed(seed);
            let mut history = Vec::with_capacity(rolls as usize);
            for _ in 0..rolls {
                history.push(create_roll(&mut dice, request)?);
            }
            let stats = compute_statistics(&history);
            if json {
                println!("{}", serde_json::to_string_pretty(&stats)?);
            } else {
                print_statistics(&stats);
            }
        }
        Cmd::Session { file, json } => {
            let cfg = load_session_config(&file)?;
            let result = run_session(cfg)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&result)?);
            } else {
                for line in &result.log {
                    println!("{}", line);
                }
                println!();
                print_statistics(&result.statistics);
            }
        }
    }
    Ok(())
}
