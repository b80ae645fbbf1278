//! Fair Dice CLI
//!
//! Interactive non-transitive dice game against the computer. Every random
//! decision (turn order, both rolls) goes through the commit-reveal protocol,
//! and the commitments and revealed seeds are printed so the player can
//! verify the game afterwards.

use fair_dice_core::{CoinToss, Die, DuelOutcome, FairRoll, ProtocolError, SecretGenerator};
use rand::Rng;
use std::io::{self, BufRead};
use std::process::ExitCode;
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;

fn main() -> ExitCode {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("setting tracing subscriber failed");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let dice = match parse_dice(&args) {
        Ok(dice) => dice,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    match play(&dice) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}

fn parse_dice(args: &[String]) -> Result<Vec<Die>, String> {
    if args.len() < 3 {
        return Err(
            "Error: At least 3 dice must be provided.\n\
             Example: fair-dice-cli \"2,2,4,4,9,9\" \"6,8,1,1,8,6\" \"7,5,3,7,5,3\""
                .to_string(),
        );
    }

    args.iter()
        .enumerate()
        .map(|(i, arg)| {
            arg.parse::<Die>().map_err(|_| {
                format!(
                    "Error: Dice #{} is invalid. Use 6 integers like: 2,2,4,4,9,9",
                    i + 1
                )
            })
        })
        .collect()
}

fn play(dice: &[Die]) -> Result<(), ProtocolError> {
    let mut generator = SecretGenerator::new();

    println!("Welcome to the Non-Transitive Dice Game!");
    println!();

    let toss = CoinToss::run(&mut generator)?;
    debug!(verified = toss.verify(), "coin toss complete");
    println!(
        "Fair toss result: {}",
        if toss.player_first {
            "You go first"
        } else {
            "Computer goes first"
        }
    );
    println!("Computer commit hash: {}", toss.computer_commitment);
    println!();

    let Some(user_choice) = prompt_die_choice(dice) else {
        println!("Goodbye!");
        return Ok(());
    };

    let computer_choice = pick_computer_die(dice.len(), user_choice);
    println!("Computer chose die #{}", computer_choice + 1);

    let user_roll = FairRoll::roll(&dice[user_choice], &mut generator)?;
    let computer_roll = FairRoll::roll(&dice[computer_choice], &mut generator)?;
    debug!(
        user = user_roll.verify(&dice[user_choice]),
        computer = computer_roll.verify(&dice[computer_choice]),
        "roll verification"
    );

    println!();
    println!("Your roll: {} (Seed: {})", user_roll.face, user_roll.secret);
    println!(
        "Computer roll: {} (Seed: {})",
        computer_roll.face, computer_roll.secret
    );
    println!(
        "{}",
        DuelOutcome::judge(user_roll.face, computer_roll.face)
    );

    Ok(())
}

fn prompt_die_choice(dice: &[Die]) -> Option<usize> {
    let stdin = io::stdin();

    loop {
        println!("Choose your die:");
        for (i, die) in dice.iter().enumerate() {
            println!("{}. Die {}: {}", i + 1, i + 1, die);
        }
        println!("H. Help");
        println!("X. Exit");

        let mut input = String::new();
        match stdin.lock().read_line(&mut input) {
            Ok(0) | Err(_) => return None,
            Ok(_) => {}
        }

        match input.trim().to_ascii_uppercase().as_str() {
            "H" => println!("Enter the number of the die you want to choose (e.g., 1)."),
            "X" => return None,
            other => match other.parse::<usize>() {
                Ok(choice) if (1..=dice.len()).contains(&choice) => return Some(choice - 1),
                _ => println!("Invalid input. Try again."),
            },
        }
    }
}

/// Pick a die the user did not take. Not fairness-critical: the computer's
/// die choice is its own strategy, only the rolls need the protocol.
fn pick_computer_die(total: usize, user_choice: usize) -> usize {
    let mut rng = rand::thread_rng();
    loop {
        let choice = rng.gen_range(0..total);
        if choice != user_choice {
            return choice;
        }
    }
}
