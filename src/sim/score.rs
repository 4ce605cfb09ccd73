//! Running score

use serde::{Deserialize, Serialize};

/// Holds the session score; only the gameplay loop writes to it.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Scoreboard {
    total: u32,
}

impl Scoreboard {
    pub fn total(&self) -> u32 {
        self.total
    }

    /// Add to the running score and return the new total for the display.
    pub fn increment(&mut self, amount: u32) -> u32 {
        self.total += amount;
        self.total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_increments_accumulate() {
        let mut board = Scoreboard::default();
        assert_eq!(board.total(), 0);
        assert_eq!(board.increment(10), 10);
        assert_eq!(board.increment(10), 20);
        assert_eq!(board.total(), 20);
    }
}
