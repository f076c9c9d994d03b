use once_cell::sync::Lazy;
use rand::seq::SliceRandom;
use rand::thread_rng;

use super::game::{TurnEnd, TurnResult};
use super::roster::Player;

pub static OH_NO_PHRASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Oh no!",
        "Bummer!",
        "Dang.",
        "Whoops.",
        "Ah, fiddlesticks.",
        "Oh, kitty cats.",
        "Piffle.",
        "Well, crud.",
        "Ah, cinnamon bits.",
        "Ooh, bad luck.",
        "Shucks!",
        "Woopsie daisy.",
        "Nooooooo!",
        "Aw, rats and bats.",
        "Blood and thunder!",
        "Gee whillikins.",
        "Well that's disappointing.",
        "I find your lack of luck disturbing.",
        "That stunk, huh?",
        "Uff da.",
    ]
});

fn player_line(players: &[Player], index: Option<usize>) -> (&str, i32) {
    index
        .and_then(|i| players.get(i))
        .map(|player| (player.name.as_str(), player.pennies))
        .unwrap_or(("???", 0))
}

// Builds the narration line for an outcome and prepends it to the running
// text. Penny counts are read after the transfer has been applied.
pub fn generate_turn_text(
    result: &TurnResult,
    players: &[Player],
    winner: Option<usize>,
    previous_text: &str,
) -> String {
    if result.is_game_over {
        return game_over_text(players, winner);
    }
    let (current_name, _) = player_line(players, result.current_player);
    let (previous_name, previous_pennies) = player_line(players, result.previous_player);
    match result.turn_end {
        Some(TurnEnd::Bust) => {
            let phrase = OH_NO_PHRASES
                .choose(&mut thread_rng())
                .copied()
                .unwrap_or("Oh no!");
            format!(
                "{} {} rolled a {}. They collected {} pennies for a total of {}.\n{}",
                phrase,
                previous_name,
                result.last_roll.unwrap_or_default(),
                result.coin_change_count.unwrap_or_default(),
                previous_pennies,
                previous_text
            )
        }
        Some(TurnEnd::Pass) => format!(
            "{} passed. They currently have {} pennies.\n{}",
            previous_name, previous_pennies, previous_text
        ),
        _ => match result.last_roll {
            Some(roll) => format!("{} rolled a {}.\n{}", current_name, roll, previous_text),
            None => String::new(),
        },
    }
}

pub fn current_standings(players: &[Player]) -> String {
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|player| player.pennies);
    let lines: Vec<String> = sorted
        .iter()
        .map(|player| format!("\t{} - {} pennies", player.name, player.pennies))
        .collect();
    format!("Current Standings:\n{}", lines.join("\n"))
}

pub fn game_over_text(players: &[Player], winner: Option<usize>) -> String {
    let winner_name = winner
        .and_then(|i| players.get(i))
        .map(|player| player.name.as_str())
        .unwrap_or("N/A");
    let mut sorted: Vec<&Player> = players.iter().collect();
    sorted.sort_by_key(|player| player.pennies);
    let scores: Vec<String> = sorted
        .iter()
        .map(|player| format!("\t{} - {} pennies.", player.name, player.pennies))
        .collect();
    format!(
        "Game Over!\n{} is the winner!\n\nFinal Scores:\n{}",
        winner_name,
        scores.join("\n")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::pennydrop::ai::AiStrategy;

    fn players() -> Vec<Player> {
        let mut alice = Player::human("Alice");
        alice.pennies = 7;
        let mut bot = Player::ai("Bot", AiStrategy::Basic);
        bot.pennies = 12;
        vec![alice, bot]
    }

    #[test]
    fn test_plain_roll_text() {
        let result = TurnResult {
            last_roll: Some(4),
            current_player: Some(0),
            can_roll: true,
            can_pass: true,
            ..Default::default()
        };
        let text = generate_turn_text(&result, &players(), None, "older line\n");
        assert_eq!(text, "Alice rolled a 4.\nolder line\n");
    }

    #[test]
    fn test_pass_text_reads_from_the_previous_player() {
        let result = TurnResult {
            coin_change_count: Some(2),
            previous_player: Some(0),
            current_player: Some(1),
            player_changed: true,
            turn_end: Some(TurnEnd::Pass),
            ..Default::default()
        };
        let text = generate_turn_text(&result, &players(), None, "");
        assert_eq!(text, "Alice passed. They currently have 7 pennies.\n");
    }

    #[test]
    fn test_bust_text_carries_the_collected_count() {
        let result = TurnResult {
            last_roll: Some(3),
            coin_change_count: Some(4),
            previous_player: Some(1),
            current_player: Some(0),
            player_changed: true,
            turn_end: Some(TurnEnd::Bust),
            clear_slots: true,
            ..Default::default()
        };
        let text = generate_turn_text(&result, &players(), None, "");
        assert!(
            text.contains("Bot rolled a 3. They collected 4 pennies for a total of 12."),
            "unexpected bust narration: {}",
            text
        );
    }

    #[test]
    fn test_standings_sort_fewest_first() {
        let standings = current_standings(&players());
        assert_eq!(
            standings,
            "Current Standings:\n\tAlice - 7 pennies\n\tBot - 12 pennies"
        );
    }

    #[test]
    fn test_game_over_text() {
        let text = game_over_text(&players(), Some(0));
        assert!(text.starts_with("Game Over!\nAlice is the winner!"));
        assert!(text.contains("\tAlice - 7 pennies."));
        assert!(text.contains("\tBot - 12 pennies."));
    }
}
