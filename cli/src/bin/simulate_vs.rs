use clap::Parser;
use engine::duel::fight;
use engine::log::NullLog;
use engine::{Combatant, Dice, Hero, HeroClass, Monster, Side, Species};

#[derive(Parser)]
#[command(name = "simulate-vs")]
#[command(about = "Monte Carlo sim: many duels of one hero against one monster")]
struct Args {
    /// Hero class: knight | wizard
    #[arg(long, default_value = "knight")]
    hero: String,

    /// Monster species: dragon | spider
    #[arg(long, default_value = "spider")]
    monster: String,

    /// Weapon in hand (defaults to the class's first weapon)
    #[arg(long)]
    weapon: Option<String>,

    /// Number of trials
    #[arg(long, default_value_t = 1000)]
    trials: u32,

    /// RNG base seed (trial i uses seed+i)
    #[arg(long, default_value_t = 12345)]
    seed: u64,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let class: HeroClass = args.hero.parse()?;
    let species: Species = args.monster.parse()?;
    let weapon = match args.weapon.as_deref() {
        Some(name) => name.to_string(),
        None => class.allowed_weapons()[0].to_string(),
    };

    // Validate the weapon once so every trial starts from the same hero.
    let mut template = Hero::new(class);
    template.equip(&weapon)?;

    let mut wins = 0u32;
    let mut exchanges_vec: Vec<u32> = Vec::with_capacity(args.trials as usize);
    let mut hp_left_on_wins = 0i64;

    for i in 0..args.trials {
        let mut hero = template.clone();
        let mut monster = Monster::new(species);
        let mut dice = Dice::from_seed(args.seed.wrapping_add(i as u64));
        let result = fight(&mut hero, &mut monster, &mut dice, &mut NullLog);

        exchanges_vec.push(result.exchanges);
        if result.winner == Side::Hero {
            wins += 1;
            hp_left_on_wins += hero.health() as i64;
        }
    }

    exchanges_vec.sort_unstable();
    let trials_f = args.trials.max(1) as f64;
    let win_rate = wins as f64 / trials_f;
    let avg_exchanges = if exchanges_vec.is_empty() {
        0.0
    } else {
        exchanges_vec.iter().map(|&r| r as u64).sum::<u64>() as f64 / exchanges_vec.len() as f64
    };
    let median_exchanges = if exchanges_vec.is_empty() {
        0
    } else {
        let m = exchanges_vec.len() / 2;
        if exchanges_vec.len() % 2 == 1 {
            exchanges_vec[m]
        } else {
            (exchanges_vec[m - 1] + exchanges_vec[m]) / 2
        }
    };
    let avg_hp_left = if wins == 0 {
        0.0
    } else {
        hp_left_on_wins as f64 / wins as f64
    };

    println!("simulate-vs results");
    println!("-------------------");
    println!("trials:             {}", args.trials);
    println!(
        "hero:               {} (HP {}) with {}",
        class,
        class.starting_health(),
        weapon.to_lowercase()
    );
    println!(
        "monster:            {} (HP {})",
        species,
        species.starting_health()
    );
    println!();
    println!("hero win rate:      {:.1}%", win_rate * 100.0);
    println!("avg exchanges:      {:.2}", avg_exchanges);
    println!("median exchanges:   {}", median_exchanges);
    println!("avg hero HP left:   {:.2}", avg_hp_left);

    Ok(())
}
