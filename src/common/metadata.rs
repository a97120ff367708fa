// Version
//------------------------------------------------------------------------------

/// Symbol version. Version 1 is a 21x21 grid and each subsequent version
/// grows the grid by 4 modules per side.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub struct Version(usize);

impl Version {
    pub const fn new(v: usize) -> Self {
        Self(v)
    }

    pub const fn number(self) -> usize {
        self.0
    }

    pub const fn width(self) -> usize {
        21 + (self.0 - 1) * 4
    }

    /// Inverse of `width`. Non-conforming widths truncate to an approximate
    /// version via integer division.
    pub const fn from_width(w: usize) -> Self {
        Self((w - 21) / 4 + 1)
    }

    /// Bit capacity used during matrix construction. Versions outside the
    /// tabulated range fall back to the version 5 row rather than failing.
    pub fn data_bit_capacity(self, ecl: ECLevel) -> usize {
        let row = match self.0 {
            1..=5 => self.0 - 1,
            _ => 4,
        };
        CAPACITY_TABLE[row][ecl as usize]
    }

    /// Bit capacity used during version selection. Grows by 32 bits per
    /// version beyond the tabulated range.
    pub fn projected_bit_capacity(self, ecl: ECLevel) -> usize {
        match self.0 {
            1..=5 => CAPACITY_TABLE[self.0 - 1][ecl as usize],
            v => CAPACITY_TABLE[4][ecl as usize] + 32 * (v - 5),
        }
    }

    /// Alignment anchor positions. Versions beyond 4 share one row; anchors
    /// that don't fit the grid are filtered by the painter.
    pub fn alignment_positions(self) -> &'static [usize] {
        match self.0 {
            1 => &[6, 18],
            2 => &[6, 22],
            3 => &[6, 26],
            4 => &[6, 30],
            _ => &[6, 18, 42],
        }
    }
}

// Error correction level
//------------------------------------------------------------------------------

/// Nominal error correction level. Only keys the capacity table; no
/// redundancy codewords are generated.
#[derive(Debug, PartialEq, Eq, Copy, Clone, PartialOrd, Ord)]
pub enum ECLevel {
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    pub const fn recovery_percentage(self) -> usize {
        match self {
            Self::L => 7,
            Self::M => 15,
            Self::Q => 25,
            Self::H => 30,
        }
    }
}

// Capacity table
//------------------------------------------------------------------------------

// Bit capacities for versions 1-5, indexed by [version - 1][ec level].
pub static CAPACITY_TABLE: [[usize; 4]; 5] = [
    [26, 20, 16, 13],
    [48, 36, 28, 22],
    [72, 54, 42, 32],
    [88, 68, 52, 40],
    [108, 84, 64, 49],
];
