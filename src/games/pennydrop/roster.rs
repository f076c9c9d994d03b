use serde::{Deserialize, Serialize};

use super::ai::AiStrategy;

pub const DEFAULT_PENNY_COUNT: i32 = 10;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub is_human: bool,
    pub strategy: Option<AiStrategy>,
    pub pennies: i32,
}

impl Player {
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_human: true,
            strategy: None,
            pennies: DEFAULT_PENNY_COUNT,
        }
    }

    pub fn ai(name: impl Into<String>, strategy: AiStrategy) -> Self {
        Self {
            name: name.into(),
            is_human: false,
            strategy: Some(strategy),
            pennies: DEFAULT_PENNY_COUNT,
        }
    }

    pub fn add_pennies(&mut self, count: i32) {
        self.pennies += count;
        debug_assert!(self.pennies >= 0);
    }

    pub fn pennies_left(&self, subtract_penny: bool) -> bool {
        self.pennies - if subtract_penny { 1 } else { 0 } > 0
    }
}
