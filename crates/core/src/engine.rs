//! Engine module - the falling-block state machine.
//!
//! Two entry points mutate state: [`Engine::tick`] (gravity, locking, row
//! compaction, spawning) and [`Engine::apply_input`] (player transforms).
//! Both build a candidate piece, validate it against the board, and only
//! then swap it in, so the active piece is always in bounds and
//! overlap-free. Rejected moves are not errors; they are silently dropped.

use arrayvec::ArrayVec;

use blockfall_types::{Cell, InputCommand, PieceType};

use crate::board::Board;
use crate::catalog::{self, PieceShape};
use crate::rng::{PieceSource, UniformSource};
use crate::snapshot::Snapshot;

/// A piece shape anchored at a board coordinate.
///
/// `x`/`y` address the top-left corner of the shape's bounding box. `x` may
/// go negative in candidate positions, which the collision check rejects;
/// `y` only ever grows. Every transform produces a new value and the engine
/// swaps the old one out after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedPiece {
    shape: PieceShape,
    x: i32,
    y: i32,
}

impl PositionedPiece {
    fn new(shape: PieceShape, x: i32, y: i32) -> Self {
        Self { shape, x, y }
    }

    pub fn shape(&self) -> &PieceShape {
        &self.shape
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    fn translated(&self, dx: i32, dy: i32) -> Self {
        Self {
            shape: self.shape.clone(),
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    fn rotated(&self, clockwise: bool) -> Self {
        Self {
            shape: catalog::rotate(&self.shape, clockwise),
            x: self.x,
            y: self.y,
        }
    }

    /// Visit the board coordinates of every filled shape cell.
    ///
    /// Only valid for pieces that passed the collision check.
    fn for_each_filled(&self, mut f: impl FnMut(usize, usize)) {
        for row in 0..self.shape.height() {
            for col in 0..self.shape.width() {
                if self.shape.at(row, col).is_filled() {
                    f((self.y + row as i32) as usize, (self.x + col as i32) as usize);
                }
            }
        }
    }
}

/// What the last `tick` did, for hosts that want to react promptly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    /// The active piece settled; `rows_cleared` full rows were compacted.
    Locked { rows_cleared: u32 },
    /// A spawn collided: the board was full and has been reset.
    Toppled,
}

/// The complete game state: settled board, active piece, next-piece preview.
pub struct Engine {
    board: Board,
    current: Option<PositionedPiece>,
    next_type: PieceType,
    source: Box<dyn PieceSource + Send>,
    last_event: Option<TickEvent>,
}

impl Engine {
    /// Engine with the default uniform randomizer.
    pub fn new(width: usize, height: usize, seed: u32) -> Self {
        Self::with_source(width, height, Box::new(UniformSource::new(seed)))
    }

    /// Engine with a caller-supplied piece source.
    pub fn with_source(
        width: usize,
        height: usize,
        mut source: Box<dyn PieceSource + Send>,
    ) -> Self {
        let next_type = source.draw();
        Self {
            board: Board::new(width, height),
            current: None,
            next_type,
            source,
            last_event: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn current(&self) -> Option<&PositionedPiece> {
        self.current.as_ref()
    }

    pub fn next_type(&self) -> PieceType {
        self.next_type
    }

    /// Discard the board and start over with the same dimensions.
    ///
    /// The randomizer keeps its state; nothing else survives.
    pub fn reset(&mut self) {
        self.board = Board::new(self.board.width(), self.board.height());
        self.current = None;
        self.next_type = self.source.draw();
    }

    /// One gravity step.
    ///
    /// With an active piece: move it down one row, or lock it and compact
    /// full rows when it cannot descend. Without one: spawn from the
    /// preview, resetting the whole game if the spawn position is blocked.
    pub fn tick(&mut self) {
        match self.current.take() {
            Some(piece) => {
                let candidate = piece.translated(0, 1);
                if self.collides(&candidate) {
                    self.lock(piece);
                } else {
                    self.current = Some(candidate);
                }
            }
            None => self.spawn(),
        }
    }

    /// Apply a player command; colliding candidates are dropped silently.
    ///
    /// No-op without an active piece.
    pub fn apply_input(&mut self, cmd: InputCommand) {
        let Some(piece) = self.current.as_ref() else {
            return;
        };

        let candidate = match cmd {
            InputCommand::Accelerate => piece.translated(0, 1),
            InputCommand::ShiftLeft => piece.translated(-1, 0),
            InputCommand::ShiftRight => piece.translated(1, 0),
            InputCommand::RotateClockwise => piece.rotated(true),
            // Recognized but deliberately inert; see DESIGN.md.
            InputCommand::RotateAntiClockwise => return,
        };

        if !self.collides(&candidate) {
            self.current = Some(candidate);
        }
    }

    /// Take and clear the last lock/topple event.
    pub fn take_last_event(&mut self) -> Option<TickEvent> {
        self.last_event.take()
    }

    /// Fill `out` with the merged view of settled cells and active piece.
    pub fn snapshot_into(&self, out: &mut Snapshot) {
        out.reset_from(&self.board, self.next_type);
        if let Some(piece) = &self.current {
            piece.for_each_filled(|row, col| out.mark(row, col));
        }
    }

    /// Allocate a fresh merged snapshot.
    pub fn snapshot(&self) -> Snapshot {
        let mut snap = Snapshot::new(self.board.width(), self.board.height());
        self.snapshot_into(&mut snap);
        snap
    }

    fn spawn(&mut self) {
        let shape = catalog::shape_for(self.next_type);
        let x = (self.board.width() / 2) as i32 - (shape.width() / 2) as i32;
        let piece = PositionedPiece::new(shape, x, 0);

        if self.collides(&piece) {
            // Board full at spawn: the game silently starts over.
            self.reset();
            self.last_event = Some(TickEvent::Toppled);
        } else {
            self.current = Some(piece);
        }

        // A fresh preview is drawn whether or not the spawn stuck.
        self.next_type = self.source.draw();
    }

    /// Merge the piece into the board, then compact full rows top to bottom.
    fn lock(&mut self, piece: PositionedPiece) {
        piece.for_each_filled(|row, col| self.board.set(row, col, Cell::Filled));

        // At most four rows can complete from a single lock.
        let mut cleared: ArrayVec<usize, 4> = ArrayVec::new();
        for row in 0..self.board.height() {
            if self.board.is_row_filled(row) {
                self.board.clear_row_and_shift(row);
                cleared.push(row);
            }
        }

        self.last_event = Some(TickEvent::Locked {
            rows_cleared: cleared.len() as u32,
        });
    }

    /// Boundary and overlap test for a candidate piece position.
    fn collides(&self, piece: &PositionedPiece) -> bool {
        let shape = piece.shape();
        let width = shape.width() as i32;
        let height = shape.height() as i32;

        if piece.x < 0 || piece.x + width > self.board.width() as i32 {
            return true;
        }
        // Pieces never move up, so y stays non-negative; only the floor
        // needs checking.
        if piece.y + height > self.board.height() as i32 {
            return true;
        }

        let mut overlap = false;
        piece.for_each_filled(|row, col| {
            overlap |= self.board.get(row, col).is_filled();
        });
        overlap
    }
}
