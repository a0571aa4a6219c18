/// A `(row, col)` coordinate on the grid. Row `0` is the top of the screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

/// A single cell of the grid.
///
/// The position is fixed when the grid is built and always matches the cell's index in the
/// grid. Only the grid itself flips `alive`, either while committing a generation or while
/// seeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    position: Position,
    alive: bool,
}

impl Cell {
    pub(crate) const fn dead(position: Position) -> Self {
        Self {
            position,
            alive: false,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn is_alive(&self) -> bool {
        self.alive
    }

    pub(crate) fn set(&mut self, alive: bool) {
        self.alive = alive;
    }
}

#[cfg(test)]
mod test {
    use super::Cell;
    use super::Position;

    #[test]
    fn new_cells_are_dead() {
        let cell = Cell::dead(Position::new(2, 7));

        assert!(!cell.is_alive());
        assert_eq!(cell.position(), Position { row: 2, col: 7 });
    }

    #[test]
    fn set_keeps_position() {
        let mut cell = Cell::dead((4, 1).into());
        cell.set(true);

        assert!(cell.is_alive());
        assert_eq!(cell.position(), Position::new(4, 1));
    }
}
