//! Piece catalog - canonical shapes and 90-degree rotation.
//!
//! Shapes are small rectangular matrices of cells, immutable once built.
//! The canonical tables are authored sideways and normalized by one
//! clockwise turn at construction; spawn orientations depend on this
//! (see DESIGN.md).

use blockfall_types::{Cell, PieceType};

/// A rectangular matrix of cells with explicit width (columns) and
/// height (rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceShape {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl PieceShape {
    /// Build a shape from rows of 0/1 flags.
    fn from_rows(rows: &[&[u8]]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        debug_assert!(rows.iter().all(|row| row.len() == width));

        let cells = rows
            .iter()
            .flat_map(|row| row.iter())
            .map(|&flag| if flag == 0 { Cell::Empty } else { Cell::Filled })
            .collect();

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn at(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({}, {}) outside {}x{} shape",
            row,
            col,
            self.width,
            self.height
        );
        self.cells[row * self.width + col]
    }
}

/// The canonical shape for a piece type, normalized by one clockwise turn.
///
/// Total over the enum; never fails.
pub fn shape_for(piece: PieceType) -> PieceShape {
    let authored = match piece {
        PieceType::Line => PieceShape::from_rows(&[&[1], &[1], &[1], &[1]]),
        PieceType::L => PieceShape::from_rows(&[&[1, 0], &[1, 0], &[1, 1]]),
        PieceType::MirroredL => PieceShape::from_rows(&[&[0, 1], &[0, 1], &[1, 1]]),
        PieceType::Square => PieceShape::from_rows(&[&[1, 1], &[1, 1]]),
        PieceType::S => PieceShape::from_rows(&[&[1, 0], &[1, 1], &[0, 1]]),
        PieceType::Z => PieceShape::from_rows(&[&[0, 1], &[1, 1], &[1, 0]]),
        PieceType::T => PieceShape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
    };

    rotate(&authored, true)
}

/// Rotate a shape 90 degrees around its bounding box.
///
/// The output's dimensions are the input's swapped. There is no wall-kick
/// adjustment here: callers reject rotations that would collide, wholesale.
pub fn rotate(shape: &PieceShape, clockwise: bool) -> PieceShape {
    let (w, h) = (shape.width, shape.height);

    // Output has `w` rows of `h` columns.
    let mut cells = vec![Cell::Empty; w * h];
    for row in 0..w {
        for col in 0..h {
            let cell = if clockwise {
                shape.at(h - 1 - col, row)
            } else {
                shape.at(col, w - 1 - row)
            };
            cells[row * h + col] = cell;
        }
    }

    PieceShape {
        width: h,
        height: w,
        cells,
    }
}
