//! Board positions.

/// A cell position on the 9x9 board, 0-based.
///
/// `x` is the column and `y` is the row, both in the range 0-8.
///
/// # Examples
///
/// ```
/// use numchoice_core::Position;
///
/// let pos = Position::new(4, 7);
/// assert_eq!(pos.x(), 4);
/// assert_eq!(pos.y(), 7);
/// assert_eq!(pos.box_index(), 7);
/// assert_eq!(pos.box_origin(), Position::new(3, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("({x}, {y})")]
pub struct Position {
    y: u8,
    x: u8,
}

impl Position {
    /// All 81 positions in row-major order.
    pub const ALL: [Self; 81] = {
        let mut all = [Self { x: 0, y: 0 }; 81];
        let mut i = 0;
        #[expect(clippy::cast_possible_truncation)]
        while i < 81 {
            all[i] = Self {
                x: (i % 9) as u8,
                y: (i / 9) as u8,
            };
            i += 1;
        }
        all
    };

    /// Creates a position from a column `x` and a row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x` or `y` is not in the range 0-8.
    #[must_use]
    pub const fn new(x: u8, y: u8) -> Self {
        assert!(x < 9 && y < 9);
        Self { x, y }
    }

    /// Creates a position, returning `None` if either coordinate is out of range.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn try_new(x: usize, y: usize) -> Option<Self> {
        if x < 9 && y < 9 {
            Some(Self {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Creates the position of cell `i` (0-8, row-major) within box `box_index` (0-8).
    ///
    /// # Panics
    ///
    /// Panics if `box_index` or `i` is not in the range 0-8.
    #[must_use]
    pub const fn from_box(box_index: u8, i: u8) -> Self {
        assert!(box_index < 9 && i < 9);
        Self::new((box_index % 3) * 3 + i % 3, (box_index / 3) * 3 + i / 3)
    }

    /// Returns the column (0-8).
    #[must_use]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// Returns the row (0-8).
    #[must_use]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Returns the index of the 3x3 box containing this position.
    ///
    /// Boxes are numbered 0-8 left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self) -> u8 {
        (self.y / 3) * 3 + self.x / 3
    }

    /// Returns the top-left position of the 3x3 box containing this position.
    ///
    /// Each coordinate is rounded down to the nearest multiple of 3.
    #[must_use]
    pub const fn box_origin(self) -> Self {
        Self {
            x: self.x - self.x % 3,
            y: self.y - self.y % 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_is_row_major() {
        assert_eq!(Position::ALL[0], Position::new(0, 0));
        assert_eq!(Position::ALL[8], Position::new(8, 0));
        assert_eq!(Position::ALL[9], Position::new(0, 1));
        assert_eq!(Position::ALL[80], Position::new(8, 8));
        assert!(Position::ALL.is_sorted());
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Position::try_new(8, 8), Some(Position::new(8, 8)));
        assert_eq!(Position::try_new(9, 0), None);
        assert_eq!(Position::try_new(0, 9), None);
    }

    #[test]
    fn test_box_origin_and_index_agree() {
        for pos in Position::ALL {
            let origin = pos.box_origin();
            assert_eq!(origin.x() % 3, 0);
            assert_eq!(origin.y() % 3, 0);
            assert_eq!(origin.box_index(), pos.box_index());
            assert_eq!(Position::from_box(pos.box_index(), 0), origin);
        }
    }

    #[test]
    fn test_from_box_covers_box() {
        for box_index in 0..9 {
            for i in 0..9 {
                assert_eq!(Position::from_box(box_index, i).box_index(), box_index);
            }
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Position::new(2, 5).to_string(), "(2, 5)");
    }
}
