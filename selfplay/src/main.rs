use std::{error::Error, io, process, time::Instant};

use alpha_gomoku::{config::N, Engine};
use clap::Parser;
use cli::Args;
use gomoku::{Game, GameResult, Player};
use log::{error, info};
use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod cli;

fn main() -> io::Result<()> {
    let args = Args::parse();
    match &args.log_file {
        Some(path) => simple_logging::log_to_file(path, args.log_level.into())?,
        None => simple_logging::log_to_stderr(args.log_level.into()),
    }

    let mut tally = [0u32; 3];
    for number in 1..=args.games {
        let start = Instant::now();
        match play_game(&args) {
            Ok(game) => {
                info!(
                    "game {number} ended after {} plies in {:.1?}: {:?}",
                    game.ply,
                    start.elapsed(),
                    game.result
                );
                println!("{}", game.board);
                let slot = match game.result {
                    GameResult::Winner(player) => usize::from(player.index()),
                    _ => 0,
                };
                tally[slot] += 1;
            }
            Err(err) => {
                error!("game {number} aborted: {err}");
                process::exit(1);
            }
        }
    }
    println!(
        "one: {}, two: {}, draws: {}",
        tally[usize::from(Player::One.index())],
        tally[usize::from(Player::Two.index())],
        tally[0]
    );
    Ok(())
}

fn play_game(args: &Args) -> Result<Game<N>, Box<dyn Error>> {
    let mut engines = [
        Engine::<N>::new(args.search_config(0)),
        Engine::<N>::new(args.search_config(1)),
    ];
    let mut game = Game::<N>::default();
    while !game.result.is_over() {
        let player = game.to_move;
        let engine = &mut engines[usize::from(player.index() - 1)];
        let pos = engine.get_action(&game.board, player, None)?;
        game.play(pos)?;
        for engine in &mut engines {
            engine.update_with_move(pos);
        }

        println!("{:>3}. {player:?} {pos}", game.ply);
        if args.verbose {
            println!("{}", game.board);
        }
    }
    Ok(game)
}
