use clap::Parser;
use engine::{AdMode, Dice, DieKind, RollRequest, create_roll};

#[derive(Parser)]
#[command(name = "adv-compare")]
#[command(about = "Monte Carlo: d20 outcomes under normal/advantage/disadvantage")]
struct Args {
    /// Number of trials per mode
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,

    /// Modifier applied to every roll
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    modifier: i32,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    println!("adv-compare results");
    println!("-------------------");
    println!("trials per mode: {}", args.trials);
    println!("modifier:        {:+}", args.modifier);
    println!();

    for mode in [AdMode::Normal, AdMode::Advantage, AdMode::Disadvantage] {
        let request = RollRequest {
            die: DieKind::D20,
            quantity: 1,
            modifier: args.modifier,
            advantage: mode,
        };
        let mut total = 0i64;
        let mut crits = 0u32;
        let mut fumbles = 0u32;
        for i in 0..args.trials {
            let mut dice = Dice::from_seed(args.seed.wrapping_add(u64::from(i)));
            let roll = create_roll(&mut dice, request)?;
            total += i64::from(roll.total);
            if roll.critical {
                crits += 1;
            }
            if roll.critical_failure() {
                fumbles += 1;
            }
        }
        let trials = f64::from(args.trials.max(1));
        println!("{:?}:", mode);
        println!("  avg total:   {:.2}", total as f64 / trials);
        println!("  crit rate:   {:.1}%", f64::from(crits) / trials * 100.0);
        println!("  fumble rate: {:.1}%", f64::from(fumbles) / trials * 100.0);
    }

    Ok(())
}
