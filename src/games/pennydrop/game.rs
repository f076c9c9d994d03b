use rand::{thread_rng, Rng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ai::AiDecision;
use super::board::{RollOutcome, SlotBoard};
use super::roster::{Player, DEFAULT_PENNY_COUNT};
use super::text;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    #[error("no applicable action for the current game state")]
    InvalidAction,
    #[error("a game needs at least one player")]
    EmptyRoster,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum TurnEnd {
    Pass,
    Bust,
    Win,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum EndCondition {
    // The first player to drop their last penny wins immediately
    #[default]
    FirstToRunOut,
    // Play continues until at most one player still holds pennies;
    // lowest remaining count wins
    SolePlayerWithPennies,
}

// One record per roll or pass, consumed by the UI/persistence layer to
// update penny counts, the active-player marker, and the slot visuals.
// Players are referenced by roster index.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TurnResult {
    pub last_roll: Option<i32>,
    pub coin_change_count: Option<i32>,
    pub previous_player: Option<usize>,
    pub current_player: Option<usize>,
    pub player_changed: bool,
    pub turn_end: Option<TurnEnd>,
    pub can_roll: bool,
    pub can_pass: bool,
    pub clear_slots: bool,
    pub is_game_over: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PennyDropGame {
    pub board: SlotBoard,
    pub players: Vec<Player>,
    // Whose turn it is; the only record of the active player
    pub current_player: usize,
    pub can_roll: bool,
    pub can_pass: bool,
    pub last_roll: Option<i32>,
    // Running narration shown to the player, newest line first
    pub turn_text: String,
    clear_text: bool,
    pub winner: Option<usize>,
    pub game_over: bool,
    pub end_condition: EndCondition,
}

impl PennyDropGame {
    pub fn new(players: Vec<Player>) -> Result<Self, GameError> {
        Self::with_settings(players, DEFAULT_PENNY_COUNT, EndCondition::default())
    }

    pub fn with_settings(
        mut players: Vec<Player>,
        starting_pennies: i32,
        end_condition: EndCondition,
    ) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::EmptyRoster);
        }
        for player in players.iter_mut() {
            player.pennies = starting_pennies;
        }
        Ok(Self {
            board: SlotBoard::new(),
            players,
            current_player: 0,
            can_roll: true,
            can_pass: false,
            last_roll: None,
            turn_text: String::new(),
            clear_text: false,
            winner: None,
            game_over: false,
            end_condition,
        })
    }

    // Roll a fair die for the active player
    pub fn roll(&mut self) -> Result<TurnResult, GameError> {
        if self.game_over || !self.can_roll {
            return Err(GameError::InvalidAction);
        }
        let die_value = thread_rng().gen_range(1..=6);
        self.apply_roll(die_value)
    }

    // Deterministic core of a roll; `roll` feeds it the die value
    pub fn apply_roll(&mut self, die_value: i32) -> Result<TurnResult, GameError> {
        if self.game_over || !self.can_roll || !(1..=6).contains(&die_value) {
            return Err(GameError::InvalidAction);
        }
        self.last_roll = Some(die_value);
        let result = match self.board.roll(die_value) {
            RollOutcome::Filled => self.fill(die_value),
            RollOutcome::SixRolled => self.free_choice(die_value),
            RollOutcome::Bust => self.bust(die_value),
        };
        self.record(&result);
        Ok(result)
    }

    // Passing locks in the pennies dropped this turn: the board clears and
    // nothing comes back to the player
    pub fn pass(&mut self) -> Result<TurnResult, GameError> {
        if self.game_over || !self.can_pass {
            return Err(GameError::InvalidAction);
        }
        let previous_player = self.current_player;
        self.board.clear();
        self.last_roll = None;
        self.advance_turn();
        let result = TurnResult {
            coin_change_count: Some(0),
            previous_player: Some(previous_player),
            current_player: Some(self.current_player),
            player_changed: true,
            turn_end: Some(TurnEnd::Pass),
            can_roll: true,
            can_pass: false,
            clear_slots: true,
            ..Default::default()
        };
        self.record(&result);
        Ok(result)
    }

    // Runs the active AI player's whole turn; intermediate rolls are not
    // surfaced, only the result that ended the turn (or the game)
    pub fn play_ai_turn(&mut self) -> Result<TurnResult, GameError> {
        let strategy = self.players[self.current_player]
            .strategy
            .ok_or(GameError::InvalidAction)?;
        if self.game_over {
            return Err(GameError::InvalidAction);
        }
        loop {
            let decision = strategy.decide(self.board.open_fillable_count(), self.can_pass);
            let result = match decision {
                AiDecision::Roll => self.roll()?,
                AiDecision::Pass => self.pass()?,
            };
            if result.turn_end.is_some() || result.is_game_over {
                return Ok(result);
            }
        }
    }

    pub fn active_player(&self) -> &Player {
        &self.players[self.current_player]
    }

    // Penny dropped into an open slot; the turn continues
    fn fill(&mut self, die_value: i32) -> TurnResult {
        let player_index = self.current_player;
        if !self.players[player_index].pennies_left(false) {
            // Cannot pay the slot penny. Only reachable under
            // SolePlayerWithPennies, where broke players keep taking turns.
            return self.end_game(Some(die_value), None);
        }
        self.players[player_index].add_pennies(-1);
        if self.game_finished() {
            return self.end_game(Some(die_value), Some(-1));
        }
        self.can_roll = true;
        self.can_pass = self.board.filled_count() > 0;
        TurnResult {
            last_roll: Some(die_value),
            coin_change_count: Some(-1),
            current_player: Some(player_index),
            can_roll: self.can_roll,
            can_pass: self.can_pass,
            ..Default::default()
        }
    }

    // A six drops straight through the board: nothing fills, nothing busts,
    // and the player may always roll again or pass
    fn free_choice(&mut self, die_value: i32) -> TurnResult {
        self.can_roll = true;
        self.can_pass = true;
        TurnResult {
            last_roll: Some(die_value),
            current_player: Some(self.current_player),
            can_roll: true,
            can_pass: true,
            ..Default::default()
        }
    }

    // Rolled an occupied slot: collect every penny on the board
    fn bust(&mut self, die_value: i32) -> TurnResult {
        let collected = self.board.filled_count();
        let previous_player = self.current_player;
        self.players[previous_player].add_pennies(collected);
        self.board.clear();
        self.advance_turn();
        TurnResult {
            last_roll: Some(die_value),
            coin_change_count: Some(collected),
            previous_player: Some(previous_player),
            current_player: Some(self.current_player),
            player_changed: true,
            turn_end: Some(TurnEnd::Bust),
            can_roll: true,
            can_pass: false,
            clear_slots: true,
            ..Default::default()
        }
    }

    fn advance_turn(&mut self) {
        self.current_player = (self.current_player + 1) % self.players.len();
        self.can_roll = true;
        self.can_pass = false;
    }

    fn game_finished(&self) -> bool {
        match self.end_condition {
            EndCondition::FirstToRunOut => self.players[self.current_player].pennies == 0,
            EndCondition::SolePlayerWithPennies => {
                self.players.iter().filter(|p| p.pennies > 0).count() <= 1
            }
        }
    }

    fn end_game(&mut self, last_roll: Option<i32>, coin_change_count: Option<i32>) -> TurnResult {
        self.game_over = true;
        self.can_roll = false;
        self.can_pass = false;
        self.board.clear();
        let winner = self.lowest_penny_player();
        self.winner = Some(winner);
        TurnResult {
            last_roll,
            coin_change_count,
            previous_player: Some(self.current_player),
            current_player: Some(self.current_player),
            turn_end: Some(TurnEnd::Win),
            clear_slots: true,
            is_game_over: true,
            ..Default::default()
        }
    }

    // Fewest pennies wins; first registered breaks ties
    fn lowest_penny_player(&self) -> usize {
        self.players
            .iter()
            .enumerate()
            .min_by_key(|(_, player)| player.pennies)
            .map(|(index, _)| index)
            .expect("roster is never empty")
    }

    fn record(&mut self, result: &TurnResult) {
        let previous_text = if self.clear_text {
            ""
        } else {
            self.turn_text.as_str()
        };
        let new_text = text::generate_turn_text(result, &self.players, self.winner, previous_text);
        self.turn_text = new_text;
        self.clear_text = result.turn_end.is_some();
    }
}
