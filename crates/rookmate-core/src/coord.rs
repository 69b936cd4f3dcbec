//! Board coordinates: a rank and a file, each in `1..=8`.

use std::fmt;

/// A square on the 8x8 board, addressed by rank (`x`, 1 = bottom row) and
/// file (`y`, 1 = leftmost column).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    x: u8,
    y: u8,
}

impl Coord {
    /// Lowest valid rank or file.
    pub const MIN: u8 = 1;
    /// Highest valid rank or file.
    pub const MAX: u8 = 8;

    /// Create a coordinate, returning `None` if either axis is off the board.
    #[inline]
    pub const fn new(x: u8, y: u8) -> Option<Coord> {
        if Self::on_board(x as i16) && Self::on_board(y as i16) {
            Some(Coord { x, y })
        } else {
            None
        }
    }

    #[inline]
    const fn on_board(v: i16) -> bool {
        v >= Self::MIN as i16 && v <= Self::MAX as i16
    }

    /// Parse algebraic notation ("a1" .. "h8"). The letter is the file,
    /// the digit the rank.
    pub fn from_algebraic(s: &str) -> Option<Coord> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let (file_byte, rank_byte) = (bytes[0], bytes[1]);
        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Coord::new(rank_byte - b'0', file_byte - b'a' + 1)
    }

    /// Rank, `1..=8`.
    #[inline]
    pub const fn x(self) -> u8 {
        self.x
    }

    /// File, `1..=8`.
    #[inline]
    pub const fn y(self) -> u8 {
        self.y
    }

    /// Shift by `(dx, dy)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, dx: i8, dy: i8) -> Option<Coord> {
        let x = self.x as i16 + dx as i16;
        let y = self.y as i16 + dy as i16;
        if Self::on_board(x) && Self::on_board(y) {
            Some(Coord {
                x: x as u8,
                y: y as u8,
            })
        } else {
            None
        }
    }

    /// Chebyshev distance (king-move distance).
    #[inline]
    pub const fn chebyshev(self, other: Coord) -> u8 {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);
        if dx > dy { dx } else { dy }
    }

    /// `true` if `other` is this square or one of its eight neighbours.
    #[inline]
    pub const fn touches(self, other: Coord) -> bool {
        self.chebyshev(other) <= 1
    }

    /// Straight-line distance between square centres.
    #[inline]
    pub fn euclidean(self, other: Coord) -> f64 {
        let dx = f64::from(self.x.abs_diff(other.x));
        let dy = f64::from(self.y.abs_diff(other.y));
        (dx * dx + dy * dy).sqrt()
    }

    /// Number of king steps to the nearest board edge (0 on the edge).
    #[inline]
    pub const fn edge_distance(self) -> u8 {
        let to_x = min(self.x - Self::MIN, Self::MAX - self.x);
        let to_y = min(self.y - Self::MIN, Self::MAX - self.y);
        min(to_x, to_y)
    }

    /// Iterate over all 64 coordinates, rank 1 first, file 1 first within a rank.
    pub fn all() -> impl Iterator<Item = Coord> {
        (Self::MIN..=Self::MAX)
            .flat_map(|x| (Self::MIN..=Self::MAX).map(move |y| Coord { x, y }))
    }
}

const fn min(a: u8, b: u8) -> u8 {
    if a < b { a } else { b }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (b'a' + self.y - 1) as char, self.x)
    }
}

impl fmt::Debug for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coord({self})")
    }
}
