use crate::game::Direction;

/// Classify a drag displacement. The dominant axis wins; drags shorter than
/// `min_distance` on both axes are not swipes.
pub fn classify_swipe(dx: f32, dy: f32, min_distance: f32) -> Option<Direction> {
    if dx.abs().max(dy.abs()) < min_distance {
        return None;
    }

    let direction = if dx.abs() > dy.abs() {
        if dx > 0.0 { Direction::Right } else { Direction::Left }
    } else if dy > 0.0 {
        Direction::Down
    } else {
        Direction::Up
    };
    Some(direction)
}

/// Turns terminal mouse drags into swipes.
///
/// Terminal cells are not square, so column and row deltas are scaled to the
/// pixel units the classifier threshold is expressed in. A grid cell is drawn
/// two columns wide and one row tall.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    start: Option<(u16, u16)>,
    px_per_column: f32,
    px_per_row: f32,
    min_distance: f32,
}

impl SwipeTracker {
    pub fn new(cell_px: u32, min_distance: f32) -> Self {
        Self {
            start: None,
            px_per_column: cell_px as f32 / 2.0,
            px_per_row: cell_px as f32,
            min_distance,
        }
    }

    pub fn begin(&mut self, column: u16, row: u16) {
        self.start = Some((column, row));
    }

    /// Finish the drag at `(column, row)`, yielding a direction if it was long enough
    pub fn end(&mut self, column: u16, row: u16) -> Option<Direction> {
        let (start_column, start_row) = self.start.take()?;
        let dx = (column as f32 - start_column as f32) * self.px_per_column;
        let dy = (row as f32 - start_row as f32) * self.px_per_row;
        classify_swipe(dx, dy, self.min_distance)
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dominant_axis_wins() {
        assert_eq!(classify_swipe(80.0, 20.0, 30.0), Some(Direction::Right));
        assert_eq!(classify_swipe(-80.0, 20.0, 30.0), Some(Direction::Left));
        assert_eq!(classify_swipe(10.0, 45.0, 30.0), Some(Direction::Down));
        assert_eq!(classify_swipe(10.0, -45.0, 30.0), Some(Direction::Up));
    }

    #[test]
    fn test_short_swipes_ignored() {
        assert_eq!(classify_swipe(29.0, -29.0, 30.0), None);
        assert_eq!(classify_swipe(0.0, 0.0, 30.0), None);
        assert_eq!(classify_swipe(30.0, 0.0, 30.0), Some(Direction::Right));
    }

    #[test]
    fn test_tracker_scales_cells() {
        let mut tracker = SwipeTracker::new(20, 30.0);

        // Two rows down = 40px
        tracker.begin(10, 10);
        assert_eq!(tracker.end(10, 12), Some(Direction::Down));

        // Two columns = 20px, too short
        tracker.begin(10, 10);
        assert_eq!(tracker.end(12, 10), None);

        // Four columns left = 40px
        tracker.begin(10, 10);
        assert_eq!(tracker.end(6, 10), Some(Direction::Left));
    }

    #[test]
    fn test_tracker_needs_begin() {
        let mut tracker = SwipeTracker::new(20, 30.0);
        assert_eq!(tracker.end(0, 50), None);

        tracker.begin(0, 0);
        tracker.cancel();
        assert_eq!(tracker.end(0, 50), None);
    }
}
