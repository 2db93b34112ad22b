use crate::world::Cell;

/// What an ant is currently doing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AntState {
    /// Foraging, follows the food trail
    Searching,
    /// Carrying food back to the nest, follows the home trail
    Returning,
}

/// A single ant: where it is, where it was last tick, and whether it carries food
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub id: u32,
    pos: Cell,
    prev: Cell,
    state: AntState,
}

impl Ant {
    /// Create a new searching ant at the given cell
    pub fn new(id: u32, pos: Cell) -> Self {
        Self {
            id,
            pos,
            prev: pos,
            state: AntState::Searching,
        }
    }

    /// Current cell
    #[inline]
    pub fn pos(&self) -> Cell {
        self.pos
    }

    /// Cell at the start of the last tick (render interpolation only)
    #[inline]
    pub fn prev(&self) -> Cell {
        self.prev
    }

    #[inline]
    pub fn state(&self) -> AntState {
        self.state
    }

    /// Check if ant is carrying food
    #[inline]
    pub fn is_carrying(&self) -> bool {
        self.state == AntState::Returning
    }

    /// Start of a tick: remember the current cell
    #[inline]
    pub fn mark_prev(&mut self) {
        self.prev = self.pos;
    }

    /// Move to `next`, which must be the current cell or a cardinal neighbour
    #[inline]
    pub fn move_to(&mut self, next: Cell) {
        debug_assert!(self.pos.manhattan(next) <= 1);
        self.pos = next;
    }

    /// searching -> returning
    #[inline]
    pub fn pick_up(&mut self) {
        self.state = AntState::Returning;
    }

    /// returning -> searching
    #[inline]
    pub fn drop_off(&mut self) {
        self.state = AntState::Searching;
    }

    /// Render position between `prev` and `pos`; `alpha` in `[0, 1]`,
    /// normally `FixedTimestep::alpha` from the frame loop of a renderer
    pub fn lerp(&self, alpha: f64) -> (f64, f64) {
        let px = self.prev.x as f64;
        let py = self.prev.y as f64;
        (
            px + (self.pos.x as f64 - px) * alpha,
            py + (self.pos.y as f64 - py) * alpha,
        )
    }
}
