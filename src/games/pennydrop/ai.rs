use enum_iterator::{all, Sequence};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

// Fixed menu of opponents the UI can offer. Strategies are looked up by tag
// in STRATEGY_PROFILES rather than by list position.
#[derive(
    Debug, Clone, Copy, Default, Sequence, Serialize, Deserialize, PartialEq, Eq, Hash,
)]
#[serde(rename_all = "camelCase")]
pub enum AiStrategy {
    #[default]
    Basic,
    Cautious,
    Balanced,
    Relentless,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum AiDecision {
    Roll,
    Pass,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StrategyProfile {
    pub strategy: AiStrategy,
    pub name: &'static str,
    // Pass once the number of open fillable slots drops to this value or lower
    // (and passing is allowed). Below zero means the strategy never passes.
    pub pass_threshold: i32,
}

pub static STRATEGY_PROFILES: Lazy<Vec<StrategyProfile>> = Lazy::new(|| {
    vec![
        StrategyProfile {
            strategy: AiStrategy::Basic,
            name: "Steady Eddie",
            pass_threshold: 0,
        },
        StrategyProfile {
            strategy: AiStrategy::Cautious,
            name: "Bail-Out Bea",
            pass_threshold: 4,
        },
        StrategyProfile {
            strategy: AiStrategy::Balanced,
            name: "Even Keel Evan",
            pass_threshold: 2,
        },
        StrategyProfile {
            strategy: AiStrategy::Relentless,
            name: "All-In Al",
            pass_threshold: -1,
        },
    ]
});

impl AiStrategy {
    pub fn all() -> Vec<AiStrategy> {
        all::<AiStrategy>().collect()
    }

    pub fn profile(&self) -> &'static StrategyProfile {
        STRATEGY_PROFILES
            .iter()
            .find(|profile| profile.strategy == *self)
            .expect("every strategy has a profile")
    }

    pub fn display_name(&self) -> &'static str {
        self.profile().name
    }

    pub fn decide(&self, open_fillable_slots: i32, can_pass: bool) -> AiDecision {
        if can_pass && open_fillable_slots <= self.profile().pass_threshold {
            AiDecision::Pass
        } else {
            AiDecision::Roll
        }
    }
}
