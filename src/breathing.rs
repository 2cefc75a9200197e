//! Breathing brightness animation
//!
//! A triangle wave between 0 and a peak level, one step per tick.

/// Direction of the brightness ramp
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Ascending,
    Descending,
}

/// Breathing animation state
///
/// Starts dark and ascending. The direction flips once the level reaches
/// `peak` and again once it is back at zero.
#[derive(Debug, Clone)]
pub struct Breathing {
    level: u8,
    peak: u8,
    direction: Direction,
}

impl Breathing {
    pub const fn new(peak: u8) -> Self {
        Self {
            level: 0,
            peak,
            direction: Direction::Ascending,
        }
    }

    pub const fn level(&self) -> u8 {
        self.level
    }

    pub const fn peak(&self) -> u8 {
        self.peak
    }

    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Move one step and return the new level
    pub fn advance(&mut self) -> u8 {
        match self.direction {
            Direction::Ascending => {
                self.level = self.level.saturating_add(1).min(self.peak);
                if self.level >= self.peak {
                    self.direction = Direction::Descending;
                }
            }
            Direction::Descending => {
                self.level = self.level.saturating_sub(1);
                if self.level == 0 {
                    self.direction = Direction::Ascending;
                }
            }
        }
        self.level
    }
}
