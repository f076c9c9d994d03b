use std::collections::HashMap;
use std::time::Instant;

use colored::Colorize;
use enum_iterator::all;
use pennydrop_rs::games::pennydrop::{text, AiStrategy, PennyDropGame, Player};

fn main() {
    sample_game();
    strategy_comparison(2000);
    throughput(10_000);
}

// One table seat per strategy on the menu
fn new_table_game() -> PennyDropGame {
    let players: Vec<Player> = all::<AiStrategy>()
        .map(|strategy| Player::ai(strategy.display_name(), strategy))
        .collect();
    PennyDropGame::new(players).expect("the strategy menu is never empty")
}

fn play_to_completion(game: &mut PennyDropGame) -> usize {
    while !game.game_over {
        game.play_ai_turn()
            .expect("an all-AI table always has an applicable action");
    }
    game.winner.expect("finished games have a winner")
}

fn sample_game() {
    let mut game = new_table_game();
    play_to_completion(&mut game);
    println!("{}", game.turn_text);
    println!();
    println!("{}", text::current_standings(&game.players));
    println!();
}

fn strategy_comparison(games: usize) {
    let mut wins: HashMap<&'static str, usize> = HashMap::new();
    for _ in 0..games {
        let mut game = new_table_game();
        let winner = play_to_completion(&mut game);
        let name = game.players[winner]
            .strategy
            .expect("all players at this table are AIs")
            .display_name();
        *wins.entry(name).or_insert(0) += 1;
    }
    let mut totals: Vec<(&str, usize)> = wins.into_iter().collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    println!("{} ({} games)", "Strategy win totals".bold(), games);
    for (name, count) in totals {
        println!("  {}: {}", name.green(), count);
    }
}

fn throughput(games: usize) {
    let start = Instant::now();
    for _ in 0..games {
        let mut game = new_table_game();
        play_to_completion(&mut game);
    }
    let duration = start.elapsed();
    println!("Time elapsed for {} games in Rust: {:?}", games, duration);
}
