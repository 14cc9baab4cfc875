//! godtrial - text front end for the match core
//!
//! Renders snapshots onto a character grid and feeds typed commands back
//! into the controller as named actions.

use clap::{Parser, Subcommand};
use godtrial::catalog::Catalog;
use godtrial::core::{GodName, Team};
use godtrial::game::{layout, Action, Game, Phase, Snapshot, TrialDriver, VerbosityLevel};
use godtrial::Result;
use std::io::{self, BufRead, Write};
use std::time::Duration;

const GRID_WIDTH: usize = 42;
const GRID_HEIGHT: usize = 26;

#[derive(Parser)]
#[command(name = "godtrial")]
#[command(about = "Aether-drafting card battles before the pantheon", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive text play on stdin
    Play {
        /// RNG seed for the prayer shoe
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Trial tick period in milliseconds
        #[arg(long, default_value_t = 100)]
        tick_ms: u64,
    },
    /// Scripted headless match (deterministic for a given seed)
    Simulate {
        /// RNG seed for the prayer shoe
        #[arg(long, default_value_t = 0)]
        seed: u64,

        /// Print the final snapshot as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    match Cli::parse().command {
        Commands::Play { seed, tick_ms } => play(seed, Duration::from_millis(tick_ms)).await,
        Commands::Simulate { seed, json } => simulate(seed, json),
    }
}

async fn play(seed: u64, period: Duration) -> Result<()> {
    let mut game = Game::with_seed(seed);
    let catalog = Catalog::standard();
    let driver = TrialDriver::new().with_period(period);
    let stdin = io::stdin();

    loop {
        let snapshot = game.snapshot();
        render(&snapshot, &catalog);

        if snapshot.phase == Phase::Trial {
            let outcome = driver
                .run_with(&mut game, |g| render(&g.snapshot(), &catalog))
                .await?;
            println!("The gods have judged: {outcome:?}");
            continue;
        }

        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();
        if line == "quit" {
            return Ok(());
        }
        match parse_command(line) {
            Some(action) => game.apply(action),
            None => print_help(),
        }
    }
}

fn simulate(seed: u64, json: bool) -> Result<()> {
    let mut game = Game::with_seed(seed);
    if json {
        game.logger.set_verbosity(VerbosityLevel::Silent);
    }

    // Fixed script: pick Mesin, draft the two cheapest offers, field both
    game.apply(Action::SelectGod(GodName::Mesin));
    game.apply(Action::SelectCard(0));
    game.apply(Action::SelectCard(1));
    game.apply(Action::ConfirmPrayer);
    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SelectBoardSlot(0));
    game.apply(Action::SelectHandCard(0));
    game.apply(Action::SelectBoardSlot(1));
    game.apply(Action::StartTrial);

    let outcome = TrialDriver::new().run_to_completion(&mut game)?;
    let snapshot = game.snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("Outcome: {outcome:?}");
        println!("Round: {}", snapshot.round);
        println!("Aether: {}", snapshot.aether);
        for unit in &snapshot.units {
            println!(
                "  {} at ({}, {}) with {} hp",
                unit.glyph, unit.x, unit.y, unit.hp
            );
        }
    }
    Ok(())
}

fn parse_command(line: &str) -> Option<Action> {
    let mut parts = line.split_whitespace();
    match parts.next()? {
        "god" => parts.next()?.parse::<GodName>().ok().map(Action::SelectGod),
        "pick" => parts.next()?.parse().ok().map(Action::SelectCard),
        "confirm" => Some(Action::ConfirmPrayer),
        "hand" => parts.next()?.parse().ok().map(Action::SelectHandCard),
        "slot" => parts.next()?.parse().ok().map(Action::SelectBoardSlot),
        "sacrifice" => Some(Action::SacrificeCard),
        "trial" => Some(Action::StartTrial),
        "continue" => Some(Action::Continue),
        _ => None,
    }
}

fn print_help() {
    println!("commands:");
    println!("  god <name>   choose a god (god selection)");
    println!("  pick <i>     toggle offer card i (prayer)");
    println!("  confirm      pay for the selection (prayer)");
    println!("  hand <i>     select hand card i (casting)");
    println!("  slot <i>     place selection into board slot i (casting)");
    println!("  sacrifice    burn the selection for 1 Aether (casting)");
    println!("  trial        begin combat (casting)");
    println!("  continue     next round (judgement)");
    println!("  quit");
}

fn render(snapshot: &Snapshot, catalog: &Catalog) {
    let mut grid = vec![vec![' '; GRID_WIDTH]; GRID_HEIGHT];

    match snapshot.phase {
        Phase::GodSelection => {
            put_text(&mut grid, 13, 4, "CHOOSE YOUR GOD");
            for (i, god) in catalog.pantheon().iter().enumerate() {
                let row = layout::god_row(i);
                put_text(&mut grid, 5, row, &format!("{} {}", god.avatar.glyph, god.name));
                put_text(&mut grid, 8, row + 1, &god.theme);
            }
        }
        Phase::Prayer => {
            put_text(&mut grid, 16, 4, "PRAYER");
            for (i, card) in snapshot.prayer_offer.iter().enumerate() {
                if let Some((x, y)) = layout::prayer_card_position(i) {
                    let mark = if snapshot.selected_prayer.contains(&i) {
                        '*'
                    } else {
                        ' '
                    };
                    put_text(&mut grid, x, y, &format!("[{i}]{}{mark}", card.glyph));
                    put_text(&mut grid, x, y + 1, &card.name);
                }
            }
            put_text(
                &mut grid,
                5,
                24,
                &format!(
                    "Aether {}  selection costs {}",
                    snapshot.aether, snapshot.prayer_cost
                ),
            );
        }
        Phase::Casting => {
            put_text(&mut grid, 16, 4, "CASTING");
            for (slot, card) in snapshot.board.iter().enumerate() {
                let (x, y) = layout::board_slot_position(slot);
                match card {
                    Some(card) => put_text(&mut grid, x, y, &format!("[{}]", card.glyph)),
                    None => put_text(&mut grid, x, y, &format!("({slot})")),
                }
            }
            for (i, card) in snapshot.hand.iter().enumerate() {
                let x = layout::hand_card_column(i);
                let mark = if snapshot.selected_hand == Some(i) {
                    '^'
                } else {
                    ' '
                };
                put_text(&mut grid, x, 23, &format!("{i}:{}{mark}", card.glyph));
            }
            put_text(&mut grid, 5, 24, &format!("Aether {}", snapshot.aether));
        }
        Phase::Trial => {
            for x in 0..GRID_WIDTH {
                grid[godtrial::game::trial::CENTER_LINE as usize][x] = '·';
            }
            for unit in &snapshot.units {
                put_glyph(&mut grid, unit.x, unit.y, unit.glyph);
            }
        }
        Phase::Judgement => {
            let verdict = match snapshot.outcome {
                Some(outcome) => format!("{outcome:?}"),
                None => String::from("..."),
            };
            put_text(&mut grid, 16, 10, "JUDGEMENT");
            put_text(&mut grid, 16, 12, &verdict);
            let survivors = snapshot
                .units
                .iter()
                .filter(|u| u.team == Team::Player)
                .count();
            put_text(&mut grid, 10, 15, &format!("{survivors} of yours survive"));
        }
    }

    let mut out = String::with_capacity(GRID_HEIGHT * (GRID_WIDTH + 1));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }
    print!("{out}");
    println!("[{} | round {}]", snapshot.phase, snapshot.round);
}

fn put_text(grid: &mut [Vec<char>], x: i32, y: i32, text: &str) {
    for (i, ch) in text.chars().enumerate() {
        put_glyph(grid, x + i as i32, y, ch);
    }
}

fn put_glyph(grid: &mut [Vec<char>], x: i32, y: i32, ch: char) {
    if x < 0 || y < 0 {
        return;
    }
    let (x, y) = (x as usize, y as usize);
    if y < grid.len() && x < grid[y].len() {
        grid[y][x] = ch;
    }
}
