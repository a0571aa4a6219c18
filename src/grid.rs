use crate::cell::Cell;
use crate::cell::Position;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

/// Offsets of the Moore neighborhood, as `(d_row, d_col)`.
const NEIGHBORHOOD: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A fixed size, bounded Life grid.
///
/// Cells are stored row-major, so the cell at `(row, col)` lives at `row * cols + col`.
/// Positions outside of `[0, rows) x [0, cols)` are always dead: there is no wraparound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,

    /// Life rules
    rules: RuleSet,

    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all dead grid. Either dimension may be `0`, which gives an empty grid that
    /// never changes.
    pub fn new(rows: usize, cols: usize) -> Self {
        let (rows, cols) = if rows == 0 || cols == 0 {
            (0, 0)
        } else {
            (rows, cols)
        };

        let cells = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| Cell::dead(Position::new(row, col))))
            .collect();

        Self {
            rows,
            cols,
            rules: B3S23,
            cells,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate over the grid one row at a time, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols.max(1))
    }

    /// A copy of the alive/dead state of every cell, indexed as `[row][col]`.
    pub fn alive_matrix(&self) -> Vec<Vec<bool>> {
        self.iter_rows()
            .map(|row| row.iter().map(Cell::is_alive).collect())
            .collect()
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.rows && col < self.cols).then(|| row * self.cols + col)
    }

    /// Whether the cell at `(row, col)` is alive. Anything off the grid is dead.
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.index(row, col).is_some_and(|i| self.cells[i].is_alive())
    }

    /// Marks the cell at `(row, col)` alive. Positions off the grid are ignored.
    pub fn set_alive(&mut self, row: usize, col: usize) {
        if let Some(i) = self.index(row, col) {
            self.cells[i].set(true);
        }
    }

    /// Number of live cells among the 8 cells surrounding `(row, col)`.
    pub fn neighbor_count(&self, row: usize, col: usize) -> u8 {
        let mut n = 0;

        for (dr, dc) in NEIGHBORHOOD {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };

            if self.is_alive(r, c) {
                n += 1;
            }
        }

        n
    }

    /// What the cell at `(row, col)` becomes in the next generation. Only reads the current
    /// state of the grid.
    pub fn next_state(&self, row: usize, col: usize) -> bool {
        self.rules.next(self.is_alive(row, col), self.neighbor_count(row, col))
    }

    pub fn population_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Snapshot phase of a generation step.
    ///
    /// Fills `next` with the next state of every cell, row-major, without touching the grid.
    pub fn snapshot_into(&self, next: &mut Vec<bool>) {
        next.clear();
        next.extend(self.cells.iter().map(|cell| {
            let Position { row, col } = cell.position();
            self.next_state(row, col)
        }));
    }

    /// Commit phase of a generation step. `next` must come from [`Grid::snapshot_into`] on this
    /// same grid.
    pub(crate) fn commit(&mut self, next: &[bool]) {
        assert_eq!(next.len(), self.cells.len(), "next generation has the wrong size");

        for (cell, &alive) in self.cells.iter_mut().zip(next) {
            cell.set(alive);
        }
    }
}
