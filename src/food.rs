use std::collections::HashSet;

use rand::Rng;

use crate::error::SpawnError;
use crate::geometry::{GridGeometry, Position};
use crate::snake::Snake;

/// Random draws attempted before falling back to enumerating free cells.
pub const MAX_RANDOM_ATTEMPTS: usize = 64;

/// Food entity currently on the board.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    #[must_use]
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    /// Spawns food in a cell the snake does not occupy.
    pub fn spawn<R: Rng + ?Sized>(rng: &mut R, snake: &Snake) -> Result<Self, SpawnError> {
        let occupied: HashSet<Position> = snake.segments().copied().collect();
        spawn_position(rng, snake.geometry(), &occupied).map(Self::new)
    }
}

/// Draws a uniformly random cell that is not in `occupied`.
///
/// Redraws on collision up to [`MAX_RANDOM_ATTEMPTS`] times, then picks
/// uniformly among the remaining free cells. Fails when none are left.
pub fn spawn_position<R: Rng + ?Sized>(
    rng: &mut R,
    geometry: GridGeometry,
    occupied: &HashSet<Position>,
) -> Result<Position, SpawnError> {
    let total_cells = geometry.total_cells();
    let occupied_on_board = occupied
        .iter()
        .filter(|position| geometry.is_cell(**position))
        .count();
    if occupied_on_board >= total_cells {
        return Err(SpawnError::NoFreeCell { total_cells });
    }

    for _ in 0..MAX_RANDOM_ATTEMPTS {
        let candidate = geometry.cell_at(
            rng.gen_range(0..geometry.columns()),
            rng.gen_range(0..geometry.rows()),
        );
        if !occupied.contains(&candidate) {
            return Ok(candidate);
        }
    }

    let mut candidates = Vec::with_capacity(total_cells - occupied_on_board);
    for row in 0..geometry.rows() {
        for column in 0..geometry.columns() {
            let position = geometry.cell_at(column, row);
            if !occupied.contains(&position) {
                candidates.push(position);
            }
        }
    }

    let index = rng.gen_range(0..candidates.len());
    Ok(candidates[index])
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use crate::error::SpawnError;
    use crate::geometry::{GridGeometry, Position};
    use crate::input::Direction;
    use crate::snake::Snake;

    use super::{spawn_position, Food};

    #[test]
    fn food_spawn_never_overlaps_snake() {
        let mut rng = StdRng::seed_from_u64(7);
        let geometry = GridGeometry::new(160, 120, 20).unwrap();
        let snake = Snake::from_segments(
            geometry,
            vec![
                Position::new(0, 0),
                Position::new(20, 0),
                Position::new(40, 0),
            ],
            Direction::Right,
        );

        for _ in 0..100 {
            let food = Food::spawn(&mut rng, &snake).unwrap();
            assert!(!snake.occupies(food.position));
            assert!(geometry.contains(food.position));
            assert_eq!(food.position.x % 20, 0);
            assert_eq!(food.position.y % 20, 0);
        }
    }

    #[test]
    fn nearly_full_board_yields_the_single_free_cell() {
        let mut rng = StdRng::seed_from_u64(11);
        let geometry = GridGeometry::new(100, 100, 20).unwrap();
        let free = Position::new(60, 80);
        let occupied: HashSet<Position> = (0..5)
            .flat_map(|row| (0..5).map(move |column| geometry.cell_at(column, row)))
            .filter(|position| *position != free)
            .collect();

        for _ in 0..20 {
            assert_eq!(spawn_position(&mut rng, geometry, &occupied), Ok(free));
        }
    }

    #[test]
    fn full_board_fails_instead_of_looping() {
        let mut rng = StdRng::seed_from_u64(3);
        let geometry = GridGeometry::new(40, 40, 20).unwrap();
        let occupied: HashSet<Position> = [(0, 0), (1, 0), (0, 1), (1, 1)]
            .into_iter()
            .map(|(column, row)| geometry.cell_at(column, row))
            .collect();

        assert_eq!(
            spawn_position(&mut rng, geometry, &occupied),
            Err(SpawnError::NoFreeCell { total_cells: 4 })
        );
    }

    #[test]
    fn off_board_cells_do_not_count_as_occupied() {
        let mut rng = StdRng::seed_from_u64(5);
        let geometry = GridGeometry::new(20, 20, 20).unwrap();
        let occupied: HashSet<Position> = [Position::new(20, 0)].into_iter().collect();

        assert_eq!(
            spawn_position(&mut rng, geometry, &occupied),
            Ok(Position::new(0, 0))
        );
    }

    #[test]
    fn misaligned_positions_do_not_fill_the_board() {
        let mut rng = StdRng::seed_from_u64(13);
        let geometry = GridGeometry::new(40, 20, 20).unwrap();
        let occupied: HashSet<Position> = [Position::new(0, 0), Position::new(5, 5)]
            .into_iter()
            .collect();

        assert_eq!(
            spawn_position(&mut rng, geometry, &occupied),
            Ok(Position::new(20, 0))
        );
    }

    #[test]
    fn spawns_cover_the_free_cells() {
        let mut rng = StdRng::seed_from_u64(19);
        let geometry = GridGeometry::new(60, 20, 20).unwrap();
        let occupied: HashSet<Position> = [Position::new(20, 0)].into_iter().collect();

        let seen: HashSet<Position> = (0..200)
            .map(|_| spawn_position(&mut rng, geometry, &occupied).unwrap())
            .collect();

        assert_eq!(
            seen,
            [Position::new(0, 0), Position::new(40, 0)]
                .into_iter()
                .collect()
        );
    }
}
