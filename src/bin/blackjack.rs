use blackjack_table::agents::{FixedPacing, Intent};
use blackjack_table::config::TableConfig;
use blackjack_table::engine::TableEngine;
use blackjack_table::history::RoundSummary;
use blackjack_table::player::Status;
use blackjack_table::table::{Phase, Table, TableError, GAME_TYPE};
use clap::Parser;
use dialoguer::Select;
use std::error::Error;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play or simulate rounds at a blackjack table", long_about = None)]
struct Args {
    /// Number of rounds to play
    #[arg(long, default_value_t = 1)]
    rounds: u32,
    /// Seed for the shuffle; random when omitted
    #[arg(long)]
    seed: Option<u64>,
    /// JSON table configuration
    #[arg(long)]
    config: Option<PathBuf>,
    /// Name of the middle seat
    #[arg(long, default_value = "AI-2")]
    name: String,
    /// Who plays the middle seat: ai or user
    #[arg(long, default_value = "ai")]
    role: String,
    /// Delay before each automated or dealer decision
    #[arg(long, default_value_t = 0)]
    pace_ms: u64,
    /// Print each round summary as one JSON line
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => TableConfig::from_path(path)?,
        None => TableConfig::default(),
    };
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    let denominations = config.bet_denominations.clone();

    let mut table = Table::from_role_str(config, GAME_TYPE, &args.name, &args.role)?
        .with_pacing(FixedPacing::from_millis(args.pace_ms, args.pace_ms));

    for _ in 0..args.rounds {
        if table.phase() == Phase::RoundOver {
            table.next_round()?;
        }
        play_round(&mut table, &denominations)?;
        if let Some(summary) = table.results_log().last() {
            report(summary, args.json)?;
        }
        if table.any_broke() {
            log::info!("a seat ran out of chips after round {}", table.round() - 1);
            break;
        }
    }
    Ok(())
}

fn play_round<E: TableEngine>(table: &mut E, denominations: &[u64]) -> Result<(), Box<dyn Error>> {
    while table.phase() != Phase::RoundOver {
        match table.have_turn() {
            Ok(()) => {}
            Err(TableError::AwaitingInput { seat }) => {
                let intent = prompt(table, seat, denominations)?;
                table.submit(seat, intent);
            }
            Err(TableError::SurrenderUnsupported) => println!("Surrender is not offered at this table."),
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

fn prompt<E: TableEngine>(table: &E, seat: usize, denominations: &[u64]) -> Result<Intent, Box<dyn Error>> {
    let Some(player) = table.seats().get(seat) else {
        return Err(TableError::NoSuchSeat(seat).into());
    };

    if player.status() == Status::Betting {
        let labels: Vec<String> = denominations.iter().map(u64::to_string).collect();
        let choice = Select::new()
            .with_prompt(format!("{} ({} chips), place a bet", player.name(), player.chips()))
            .items(&labels)
            .default(0)
            .interact()?;
        return Ok(Intent::Bet(denominations[choice]));
    }

    let up = table
        .dealer()
        .hand()
        .first()
        .map_or_else(|| "?".to_string(), |c| c.to_string());
    let actions = [Intent::Hit, Intent::Stand, Intent::Double, Intent::Surrender];
    let labels = ["hit", "stand", "double", "surrender"];
    let choice = Select::new()
        .with_prompt(format!(
            "{}: {} ({}), bet {}, dealer shows {}",
            player.name(),
            player.hand(),
            player.score(),
            player.bet(),
            up
        ))
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(actions[choice])
}

fn report(summary: &RoundSummary, json: bool) -> Result<(), Box<dyn Error>> {
    if json {
        println!("{}", summary.to_json()?);
        return Ok(());
    }
    println!("Round {}", summary.round);
    println!("  {:<8} {:>3}  {}", summary.dealer.name, summary.dealer.total, summary.dealer.hand);
    for s in &summary.seats {
        println!(
            "  {:<8} {:>3}  {:<20} {:>+5}  chips {}",
            s.name, s.total, s.hand.to_string(), s.win_amount, s.chips
        );
    }
    Ok(())
}
