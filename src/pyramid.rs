//! The pyramid of face-down cards.

use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::card::Card;
use crate::error::PyramidError;

/// Returns the number of cards in a pyramid with `rows` rows.
#[must_use]
pub const fn triangular(rows: usize) -> usize {
    rows * (rows + 1) / 2
}

/// Returns the largest row count whose pyramid fits in `remaining` cards.
///
/// Counts too large for `8 * remaining + 1` to fit in a `usize` are clamped
/// to the largest count that does.
///
/// ```
/// use pyramid_game::pyramid::max_rows;
///
/// assert_eq!(max_rows(40), 8);
/// assert_eq!(max_rows(36), 8);
/// assert_eq!(max_rows(35), 7);
/// ```
#[must_use]
pub const fn max_rows(remaining: usize) -> usize {
    (remaining.saturating_mul(8).saturating_add(1).isqrt() - 1) / 2
}

/// Cursor into the pyramid: the next card to reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct PyramidPosition {
    /// Row index, bottom row is 0.
    pub row: usize,
    /// Column index within the row, left is 0.
    pub col: usize,
}

/// A triangle of cards revealed bottom row first, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pyramid {
    /// Rows from bottom (widest) to top (single card).
    rows: Vec<Vec<Card>>,
    /// Next card to reveal.
    pos: PyramidPosition,
}

impl Pyramid {
    /// Builds a pyramid with `rows` rows from a flat card list.
    ///
    /// The bottom row takes the first `rows` cards, the next row the following
    /// `rows - 1`, and so on up to a single top card. `cards` must hold exactly
    /// [`triangular(rows)`](triangular) cards.
    #[must_use]
    pub fn new(cards: Vec<Card>, rows: usize) -> Self {
        debug_assert_eq!(cards.len(), triangular(rows), "pyramid card count");

        let mut cards = cards.into_iter();
        let rows: Vec<Vec<Card>> = (1..=rows)
            .rev()
            .map(|size| cards.by_ref().take(size).collect::<Vec<_>>())
            .collect();

        Self {
            rows,
            pos: PyramidPosition::default(),
        }
    }

    /// Rebuilds a pyramid from saved rows and cursor.
    ///
    /// # Errors
    ///
    /// Returns [`PyramidError::InvalidRow`] if the rows do not shrink by one
    /// card per row down to a single top card, and
    /// [`PyramidError::InvalidPosition`] if the cursor is neither inside the
    /// pyramid nor the exhausted position `(rows, 0)`.
    pub fn restore(rows: Vec<Vec<Card>>, pos: PyramidPosition) -> Result<Self, PyramidError> {
        let height = rows.len();
        for (index, row) in rows.iter().enumerate() {
            let expected = height - index;
            if row.len() != expected {
                return Err(PyramidError::InvalidRow {
                    row: index,
                    expected,
                    found: row.len(),
                });
            }
        }

        let inside = rows.get(pos.row).is_some_and(|row| pos.col < row.len());
        let exhausted = pos.row == height && pos.col == 0;
        if !inside && !exhausted {
            return Err(PyramidError::InvalidPosition {
                row: pos.row,
                col: pos.col,
            });
        }

        Ok(Self { rows, pos })
    }

    /// Reveals the next card and moves the cursor past it.
    ///
    /// Returns `None` once every card has been revealed, and keeps doing so on
    /// later calls.
    pub fn next_card(&mut self) -> Option<Card> {
        let card = self.peek()?;

        self.pos.col += 1;
        if self.pos.col >= self.rows[self.pos.row].len() {
            self.pos.row += 1;
            self.pos.col = 0;
        }

        Some(card)
    }

    /// Returns the card [`next_card`](Self::next_card) would reveal, without
    /// moving the cursor.
    #[must_use]
    pub fn peek(&self) -> Option<Card> {
        self.rows
            .get(self.pos.row)
            .and_then(|row| row.get(self.pos.col))
            .copied()
    }

    /// Returns the rows, bottom row first.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Card>] {
        &self.rows
    }

    /// Returns the cursor.
    #[must_use]
    pub const fn position(&self) -> PyramidPosition {
        self.pos
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Returns the total number of cards in the pyramid.
    #[must_use]
    pub fn len(&self) -> usize {
        triangular(self.rows.len())
    }

    /// Returns whether the pyramid holds no cards at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the number of cards not yet revealed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        let height = self.rows.len();
        if self.pos.row >= height {
            return 0;
        }
        // Rows above the cursor row hold `height - row - 1` down to 1 cards.
        let current = height - self.pos.row - self.pos.col;
        current + triangular(height - self.pos.row - 1)
    }

    /// Returns whether the cursor has passed the top card.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.pos.row >= self.rows.len()
    }
}
