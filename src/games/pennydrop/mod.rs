/*
Game: Penny Drop
Traditional pub dice game played on a wooden board with six slots.
Players drop pennies into the slots they roll; rolling an occupied slot
busts and collects everything on the board. Fewest pennies wins.
*/

pub mod ai;
pub mod board;
pub mod game;
pub mod roster;
pub mod text;

// Re-export the main types
pub use ai::{AiDecision, AiStrategy, StrategyProfile, STRATEGY_PROFILES};
pub use board::{RollOutcome, Slot, SlotBoard};
pub use game::{EndCondition, GameError, PennyDropGame, TurnEnd, TurnResult};
pub use roster::{Player, DEFAULT_PENNY_COUNT};
