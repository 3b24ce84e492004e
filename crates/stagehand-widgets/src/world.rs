//! Tile map edited by [`crate::Editor`] and shown by [`crate::Game`].
//!
//! Encoding: little-endian `i32` width, `i32` height, then one byte per cell
//! in column-major order (all of column 0, then column 1, ...).

use kurbo::{Point, Rect};
use thiserror::Error;

use stagehand_core::{Frame, StyleColor};

/// Edge length of one cell in pixels.
pub const TILE_SIZE: f64 = 100.0;

/// Largest number of cells a map may hold.
pub const MAX_CELLS: usize = 1 << 20;

/// Tile map decoding errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    #[error("Truncated tile map: expected {expected} bytes, found {found}")]
    Truncated { expected: usize, found: usize },
    #[error("Invalid tile map size {width}x{height}")]
    InvalidSize { width: i64, height: i64 },
}

/// Cell count of a `width` x `height` map, if each side fits the `i32`
/// header and the total stays within [`MAX_CELLS`].
fn cell_count(width: i64, height: i64) -> Result<(usize, usize, usize), WorldError> {
    let invalid = WorldError::InvalidSize { width, height };
    let (Ok(w), Ok(h)) = (i32::try_from(width), i32::try_from(height)) else {
        return Err(invalid);
    };
    let (Ok(w), Ok(h)) = (usize::try_from(w), usize::try_from(h)) else {
        return Err(invalid);
    };
    match w.checked_mul(h) {
        Some(cells) if cells <= MAX_CELLS => Ok((w, h, cells)),
        _ => Err(invalid),
    }
}

/// Grid of tile ids; 0 is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tilemap {
    width: usize,
    height: usize,
    cells: Vec<u8>,
}

impl Tilemap {
    /// An empty map. Negative sides, sides beyond `i32` and maps over
    /// [`MAX_CELLS`] are rejected.
    pub fn new(width: i64, height: i64) -> Result<Self, WorldError> {
        let (width, height, cells) = cell_count(width, height)?;
        Ok(Self {
            width,
            height,
            cells: vec![0; cells],
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Cell containing `point`.
    pub fn cell_at(point: Point) -> (i64, i64) {
        (
            (point.x / TILE_SIZE).floor() as i64,
            (point.y / TILE_SIZE).floor() as i64,
        )
    }

    fn index(&self, x: i64, y: i64) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        (x < self.width && y < self.height).then(|| x * self.height + y)
    }

    /// Tile at `(x, y)`, or `None` outside the map.
    pub fn get(&self, x: i64, y: i64) -> Option<u8> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Set a tile. Out-of-range cells are ignored.
    ///
    /// Returns whether the map changed.
    pub fn set_cell(&mut self, x: i64, y: i64, value: u8) -> bool {
        match self.index(x, y) {
            Some(i) if self.cells[i] != value => {
                self.cells[i] = value;
                true
            }
            _ => false,
        }
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(8 + self.cells.len());
        // Both sides fit i32, checked at construction
        bytes.extend_from_slice(&(self.width as i32).to_le_bytes());
        bytes.extend_from_slice(&(self.height as i32).to_le_bytes());
        bytes.extend_from_slice(&self.cells);
        bytes
    }

    pub fn decode(bytes: &[u8]) -> Result<Self, WorldError> {
        let header = |at: usize| -> Result<i32, WorldError> {
            bytes
                .get(at..at + 4)
                .and_then(|b| b.try_into().ok())
                .map(i32::from_le_bytes)
                .ok_or(WorldError::Truncated {
                    expected: 8,
                    found: bytes.len(),
                })
        };
        let (width, height) = (header(0)?, header(4)?);
        let (w, h, count) = cell_count(i64::from(width), i64::from(height))?;

        let expected = count + 8;
        let cells = bytes.get(8..expected).ok_or(WorldError::Truncated {
            expected,
            found: bytes.len(),
        })?;
        Ok(Self {
            width: w,
            height: h,
            cells: cells.to_vec(),
        })
    }

    /// Fill every non-empty cell.
    pub fn draw(&self, frame: &mut Frame<'_>) {
        let color = frame.style().color(StyleColor::Check1);
        for x in 0..self.width {
            for y in 0..self.height {
                if self.cells[x * self.height + y] > 0 {
                    let origin = Point::new(x as f64 * TILE_SIZE, y as f64 * TILE_SIZE);
                    let rect = Rect::from_origin_size(origin, (TILE_SIZE, TILE_SIZE));
                    frame.painter().fill_rect(rect, color);
                }
            }
        }
    }
}
