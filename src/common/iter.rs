// Iterator for placing data bits along the data column
//------------------------------------------------------------------------------

/// Walks row indices for the single-column data layout. The walk bounces
/// between rows 6 and `width - 8` with a 2-row rebound at each boundary and
/// never terminates; callers take one position per data bit.
pub struct ColumnWalk {
    pos: i16,
    width: i16,
    going_up: bool,
}

impl ColumnWalk {
    pub const fn new(width: usize) -> Self {
        let w = width as i16;
        Self { pos: w - 8, width: w, going_up: false }
    }
}

impl Iterator for ColumnWalk {
    type Item = usize;
    fn next(&mut self) -> Option<Self::Item> {
        // Re-enter the usable region below the horizontal timing row.
        if self.pos < 6 {
            self.pos = self.width - 8;
        }
        if self.going_up {
            self.pos -= 1;
            if self.pos < 6 {
                self.pos += 2;
                self.going_up = false;
            }
        } else {
            self.pos += 1;
            if self.pos >= self.width - 8 {
                self.pos -= 2;
                self.going_up = true;
            }
        }
        Some(self.pos as usize)
    }
}

#[cfg(test)]
mod iter_tests {
    use super::ColumnWalk;

    #[test]
    fn test_column_walk_trace() {
        let walk = ColumnWalk::new(21);
        let rows = walk.take(20).collect::<Vec<_>>();
        let exp_rows = vec![12, 11, 10, 9, 8, 7, 6, 7, 8, 9, 10, 11, 12, 11, 10, 9, 8, 7, 6, 7];
        assert_eq!(rows, exp_rows);
    }

    #[test]
    fn test_column_walk_stays_in_bounds() {
        for width in [21usize, 25, 29, 33, 37, 41] {
            let walk = ColumnWalk::new(width);
            for r in walk.take(width * 8) {
                assert!((6..=width - 8).contains(&r), "width {width}, row {r}");
            }
        }
    }
}
