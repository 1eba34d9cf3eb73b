//! Fixed-size board grid.
//!
//! The board owns every placed tile in an arena (`Vec<Tile>`) and maps each
//! cell to an optional arena slot. Cells are never cleared, so a [`TileId`]
//! handed out by [`Board::place`] stays valid for the rest of the game.
//!
//! The number of treasure-bearing tiles is cached and updated on every
//! mutation; [`Board::scan_treasures`] recomputes it from scratch.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{PlacementError, TileId};
use crate::tiles::{Resource, Tile};

/// A validated, 0-indexed board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Occupied orthogonal neighbours, at most four.
pub type Neighbors = SmallVec<[TileId; 4]>;

/// `rows × cols` grid of optional tiles.
///
/// ## Usage
///
/// ```
/// use rust_tne::board::{Board, Position};
/// use rust_tne::core::{KingdomId, PlacementError};
/// use rust_tne::tiles::{Resource, Tile};
///
/// let red = KingdomId::new(0);
/// let mut board = Board::new(3, 3);
///
/// let id = board.place(1, 1, Tile::new(Resource::Temple, red)).unwrap();
/// assert_eq!(board.tile(id).unwrap().position(), Some(Position::new(1, 1)));
///
/// let err = board.place(1, 1, Tile::new(Resource::Farm, red)).unwrap_err();
/// assert_eq!(err, PlacementError::CellOccupied { row: 1, col: 1 });
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Row-major cell contents.
    cells: Vec<Option<TileId>>,
    /// Placed tiles, indexed by `TileId`.
    arena: Vec<Tile>,
    treasure_count: usize,
}

impl Board {
    /// Create an empty board.
    ///
    /// Panics if either dimension is zero.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        assert!(rows > 0 && cols > 0, "Board must have at least one cell");

        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
            arena: Vec::new(),
            treasure_count: 0,
        }
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    fn cell_index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }

    /// Check that `(row, col)` is on the board and empty.
    pub fn validate(&self, row: i64, col: i64) -> Result<Position, PlacementError> {
        let pos = self.position(row, col).ok_or(PlacementError::OutOfBounds { row, col })?;
        if self.tile_id_at(pos).is_some() {
            return Err(PlacementError::CellOccupied { row: pos.row, col: pos.col });
        }
        Ok(pos)
    }

    /// Convert signed coordinates to a position if they are in bounds.
    #[must_use]
    pub fn position(&self, row: i64, col: i64) -> Option<Position> {
        let row = usize::try_from(row).ok().filter(|&r| r < self.rows)?;
        let col = usize::try_from(col).ok().filter(|&c| c < self.cols)?;
        Some(Position::new(row, col))
    }

    /// Place a tile, recording its coordinate on the tile.
    ///
    /// Fails without touching the board when the cell is out of bounds or
    /// already occupied. Retrying is the caller's business.
    pub fn place(&mut self, row: i64, col: i64, mut tile: Tile) -> Result<TileId, PlacementError> {
        let pos = self.validate(row, col)?;

        let id = TileId::new(self.arena.len() as u32);
        tile.set_position(pos);
        if tile.has_treasure() {
            self.treasure_count += 1;
        }

        let idx = self.cell_index(pos);
        self.cells[idx] = Some(id);
        self.arena.push(tile);
        Ok(id)
    }

    /// Append a resource to an already placed tile.
    ///
    /// Returns false if `id` is not on this board.
    pub(crate) fn append_resource(&mut self, id: TileId, resource: Resource) -> bool {
        let Some(tile) = self.arena.get_mut(id.index()) else {
            return false;
        };
        let had_treasure = tile.has_treasure();
        tile.push_resource(resource);
        if !had_treasure && tile.has_treasure() {
            self.treasure_count += 1;
        }
        true
    }

    /// Get a placed tile by ID.
    #[must_use]
    pub fn tile(&self, id: TileId) -> Option<&Tile> {
        self.arena.get(id.index())
    }

    /// ID of the tile occupying `pos`, if any.
    #[must_use]
    pub fn tile_id_at(&self, pos: Position) -> Option<TileId> {
        if pos.row >= self.rows || pos.col >= self.cols {
            return None;
        }
        self.cells[self.cell_index(pos)]
    }

    /// Tile occupying `pos`, if any.
    #[must_use]
    pub fn tile_at(&self, pos: Position) -> Option<&Tile> {
        self.tile_id_at(pos).and_then(|id| self.tile(id))
    }

    /// Occupied orthogonal neighbours of `pos`, in up, down, left, right order.
    #[must_use]
    pub fn neighbors(&self, pos: Position) -> Neighbors {
        let mut out = Neighbors::new();
        let candidates = [
            pos.row.checked_sub(1).map(|r| Position::new(r, pos.col)),
            Some(Position::new(pos.row + 1, pos.col)),
            pos.col.checked_sub(1).map(|c| Position::new(pos.row, c)),
            Some(Position::new(pos.row, pos.col + 1)),
        ];
        for candidate in candidates.into_iter().flatten() {
            if let Some(id) = self.tile_id_at(candidate) {
                out.push(id);
            }
        }
        out
    }

    /// Read-only view of the full grid in row-major order.
    pub fn tiles(&self) -> impl Iterator<Item = (Position, Option<&Tile>)> + '_ {
        self.cells.iter().enumerate().map(move |(i, cell)| {
            let pos = Position::new(i / self.cols, i % self.cols);
            (pos, cell.and_then(|id| self.tile(id)))
        })
    }

    /// Placed tiles in placement order.
    pub fn placed(&self) -> impl Iterator<Item = (TileId, &Tile)> {
        self.arena
            .iter()
            .enumerate()
            .map(|(i, t)| (TileId::new(i as u32), t))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.arena.len()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.arena.len() == self.cells.len()
    }

    /// Cached number of placed tiles carrying Treasure.
    #[must_use]
    pub fn treasure_count(&self) -> usize {
        self.treasure_count
    }

    /// Count treasure-bearing cells with a full scan of the grid.
    #[must_use]
    pub fn scan_treasures(&self) -> usize {
        self.tiles()
            .filter(|(_, tile)| tile.is_some_and(Tile::has_treasure))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::KingdomId;

    const RED: KingdomId = KingdomId::new(0);
    const BLUE: KingdomId = KingdomId::new(1);

    fn temple(k: KingdomId) -> Tile {
        Tile::new(Resource::Temple, k)
    }

    #[test]
    fn test_place_records_position() {
        let mut board = Board::new(5, 5);
        let id = board.place(2, 3, temple(RED)).unwrap();

        assert_eq!(board.tile_id_at(Position::new(2, 3)), Some(id));
        assert_eq!(board.tile(id).unwrap().position(), Some(Position::new(2, 3)));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_out_of_bounds() {
        let mut board = Board::new(5, 5);

        for (row, col) in [(-1, 0), (0, -1), (5, 0), (0, 5), (i64::MAX, 0)] {
            let err = board.place(row, col, temple(RED)).unwrap_err();
            assert_eq!(err, PlacementError::OutOfBounds { row, col });
        }
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_cell_occupied_keeps_original() {
        let mut board = Board::new(2, 2);
        let id = board.place(0, 0, temple(RED)).unwrap();

        let err = board.place(0, 0, Tile::new(Resource::Treasure, BLUE)).unwrap_err();
        assert_eq!(err, PlacementError::CellOccupied { row: 0, col: 0 });

        let tile = board.tile_at(Position::new(0, 0)).unwrap();
        assert_eq!(board.tile_id_at(Position::new(0, 0)), Some(id));
        assert_eq!(tile.kingdom(), RED);
        assert_eq!(board.treasure_count(), 0);
    }

    #[test]
    fn test_neighbors_order() {
        let mut board = Board::new(3, 3);
        let right = board.place(1, 2, temple(RED)).unwrap();
        let left = board.place(1, 0, temple(RED)).unwrap();
        let down = board.place(2, 1, temple(RED)).unwrap();
        let up = board.place(0, 1, temple(RED)).unwrap();
        board.place(0, 0, temple(RED)).unwrap(); // diagonal, ignored

        let neighbors = board.neighbors(Position::new(1, 1));
        assert_eq!(neighbors.as_slice(), &[up, down, left, right]);
    }

    #[test]
    fn test_neighbors_at_corner() {
        let mut board = Board::new(2, 2);
        let right = board.place(0, 1, temple(RED)).unwrap();

        assert_eq!(board.neighbors(Position::new(0, 0)).as_slice(), &[right]);
        assert!(board.neighbors(Position::new(1, 0)).is_empty());
    }

    #[test]
    fn test_treasure_cache() {
        let mut board = Board::new(2, 2);
        board.place(0, 0, Tile::new(Resource::Treasure, RED)).unwrap();
        let plain = board.place(0, 1, temple(BLUE)).unwrap();
        assert_eq!(board.treasure_count(), 1);

        board.append_resource(plain, Resource::Treasure);
        assert_eq!(board.treasure_count(), 2);
        assert_eq!(board.scan_treasures(), 2);

        // A second treasure on the same tile does not count twice
        board.append_resource(plain, Resource::Treasure);
        assert_eq!(board.treasure_count(), 2);
        assert_eq!(board.scan_treasures(), 2);
    }

    #[test]
    fn test_tiles_view() {
        let mut board = Board::new(2, 3);
        board.place(1, 2, temple(RED)).unwrap();

        let view: Vec<_> = board.tiles().collect();
        assert_eq!(view.len(), 6);
        assert_eq!(view[5].0, Position::new(1, 2));
        assert!(view[5].1.is_some());
        assert!(view[..5].iter().all(|(_, t)| t.is_none()));
    }

    #[test]
    fn test_is_full() {
        let mut board = Board::new(1, 2);
        board.place(0, 0, temple(RED)).unwrap();
        assert!(!board.is_full());
        board.place(0, 1, temple(RED)).unwrap();
        assert!(board.is_full());
    }

    #[test]
    #[should_panic(expected = "Board must have at least one cell")]
    fn test_empty_board_panics() {
        let _ = Board::new(0, 3);
    }
}
