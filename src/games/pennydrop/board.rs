use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub number: i32,
    pub can_be_filled: bool,
    pub is_filled: bool,
    pub was_last_rolled: bool,
}

// What happened to the board when a die landed on it
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum RollOutcome {
    // An open slot took the penny; the turn may continue
    Filled,
    // The slot already held a penny; the roller collects the board
    Bust,
    // Slot 6 has no cup; the penny drops straight through
    SixRolled,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SlotBoard {
    slots: Vec<Slot>,
}

impl Default for SlotBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl SlotBoard {
    pub fn new() -> Self {
        Self {
            slots: (1..=6)
                .map(|number| Slot {
                    number,
                    // Slot 6 is the hole in the board and can never hold a penny
                    can_be_filled: number != 6,
                    is_filled: false,
                    was_last_rolled: false,
                })
                .collect(),
        }
    }

    pub fn roll(&mut self, die_value: i32) -> RollOutcome {
        debug_assert!((1..=6).contains(&die_value));
        for slot in self.slots.iter_mut() {
            slot.was_last_rolled = slot.number == die_value;
        }
        let slot = &mut self.slots[(die_value - 1) as usize];
        if !slot.can_be_filled {
            return RollOutcome::SixRolled;
        }
        if slot.is_filled {
            return RollOutcome::Bust;
        }
        slot.is_filled = true;
        RollOutcome::Filled
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.is_filled = false;
            slot.was_last_rolled = false;
        }
    }

    pub fn filled_count(&self) -> i32 {
        self.slots.iter().filter(|slot| slot.is_filled).count() as i32
    }

    pub fn open_fillable_count(&self) -> i32 {
        self.slots
            .iter()
            .filter(|slot| slot.can_be_filled && !slot.is_filled)
            .count() as i32
    }

    pub fn all_fillable_filled(&self) -> bool {
        self.open_fillable_count() == 0
    }

    pub fn last_rolled(&self) -> Option<i32> {
        self.slots
            .iter()
            .find(|slot| slot.was_last_rolled)
            .map(|slot| slot.number)
    }

    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_open() {
        let board = SlotBoard::new();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.open_fillable_count(), 5);
        assert_eq!(board.last_rolled(), None);
        let unfillable: Vec<i32> = board
            .slots()
            .iter()
            .filter(|slot| !slot.can_be_filled)
            .map(|slot| slot.number)
            .collect();
        assert_eq!(unfillable, vec![6]);
    }

    #[test]
    fn test_every_open_slot_fills_without_busting() {
        for die_value in 1..=5 {
            let mut board = SlotBoard::new();
            assert_eq!(board.roll(die_value), RollOutcome::Filled);
            assert!(board.slots()[(die_value - 1) as usize].is_filled);
            assert_eq!(board.last_rolled(), Some(die_value));
        }
    }

    #[test]
    fn test_filled_slot_busts() {
        for die_value in 1..=5 {
            let mut board = SlotBoard::new();
            board.roll(die_value);
            assert_eq!(board.roll(die_value), RollOutcome::Bust);
            // A bust leaves the decision to collect and clear to the engine
            assert_eq!(board.filled_count(), 1);
        }
    }

    #[test]
    fn test_six_never_fills_or_busts() {
        let mut board = SlotBoard::new();
        for die_value in 1..=5 {
            board.roll(die_value);
        }
        assert!(board.all_fillable_filled());
        assert_eq!(board.roll(6), RollOutcome::SixRolled);
        assert_eq!(board.roll(6), RollOutcome::SixRolled);
        assert_eq!(board.filled_count(), 5);
        assert_eq!(board.last_rolled(), Some(6));
    }

    #[test]
    fn test_at_most_one_last_rolled_marker() {
        let mut board = SlotBoard::new();
        board.roll(2);
        board.roll(4);
        let marked: Vec<i32> = board
            .slots()
            .iter()
            .filter(|slot| slot.was_last_rolled)
            .map(|slot| slot.number)
            .collect();
        assert_eq!(marked, vec![4]);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut board = SlotBoard::new();
        for die_value in [1, 3, 5] {
            board.roll(die_value);
        }
        board.clear();
        assert_eq!(board.filled_count(), 0);
        assert_eq!(board.last_rolled(), None);
        assert!(board.slots().iter().all(|slot| !slot.is_filled));
    }
}
