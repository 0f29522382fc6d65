use super::state::Snake;
use super::vector::Vector;

/// Result of testing a candidate head cell. Both hits are reported independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Collision {
    /// Candidate lies outside `[0, N)` on either axis
    pub wall: bool,
    /// Candidate matches a cell of the pre-move body
    pub self_hit: bool,
}

impl Collision {
    pub fn any(&self) -> bool {
        self.wall || self.self_hit
    }
}

/// Test `candidate` against the grid boundary and the body as it stands
/// before the move, including the tail cell that is about to be vacated.
pub fn detect(candidate: Vector, grid_size: usize, snake: &Snake) -> Collision {
    Collision {
        wall: !candidate.is_within(grid_size),
        self_hit: snake.contains(candidate),
    }
}
