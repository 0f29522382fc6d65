use rand::Rng;
use rand::seq::SliceRandom;

use super::state::Snake;
use super::vector::Vector;

/// Pick a uniformly random cell of the `grid_size` x `grid_size` board that the
/// snake does not occupy. Returns `None` only when the board is full.
///
/// Uses rejection sampling while the board is mostly empty; once the snake
/// covers half the board it samples from the explicit free-cell list instead,
/// so the expected number of draws stays bounded as occupancy approaches 100%.
pub fn spawn_food<R: Rng + ?Sized>(rng: &mut R, grid_size: usize, snake: &Snake) -> Option<Vector> {
    let cells = grid_size * grid_size;
    if snake.len() >= cells {
        return None;
    }

    if snake.len() * 2 < cells {
        loop {
            let x = rng.gen_range(0..grid_size) as i32;
            let y = rng.gen_range(0..grid_size) as i32;
            let pos = Vector::new(x, y);

            if !snake.contains(pos) {
                return Some(pos);
            }
        }
    }

    let free: Vec<Vector> = (0..grid_size as i32)
        .flat_map(|y| (0..grid_size as i32).map(move |x| Vector::new(x, y)))
        .filter(|pos| !snake.contains(*pos))
        .collect();
    free.choose(rng).copied()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_food_never_on_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let snake = Snake::new(Vector::new(5, 5), Direction::Right, 4);

        for _ in 0..500 {
            let food = spawn_food(&mut rng, 10, &snake).unwrap();
            assert!(!snake.contains(food));
            assert!(food.is_within(10));
        }
    }

    #[test]
    fn test_dense_board_uses_free_cells() {
        let mut rng = StdRng::seed_from_u64(3);
        // Fill a 4x4 board except (3,3)
        let cells: Vec<Vector> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Vector::new(x, y)))
            .filter(|pos| *pos != Vector::new(3, 3))
            .collect();
        let snake = Snake::from_cells(cells);

        for _ in 0..20 {
            assert_eq!(spawn_food(&mut rng, 4, &snake), Some(Vector::new(3, 3)));
        }
    }

    #[test]
    fn test_full_board_has_no_food() {
        let mut rng = StdRng::seed_from_u64(1);
        let cells: Vec<Vector> = (0..4)
            .flat_map(|y| (0..4).map(move |x| Vector::new(x, y)))
            .collect();
        let snake = Snake::from_cells(cells);

        assert_eq!(spawn_food(&mut rng, 4, &snake), None);
    }
}
