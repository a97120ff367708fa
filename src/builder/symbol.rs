use image::{GrayImage, Luma};

use crate::common::{
    codec,
    error::SymbolResult,
    iter::ColumnWalk,
    metadata::{ECLevel, Version},
    BitStream,
};

// Symbol type for builder
//------------------------------------------------------------------------------

/// A square matrix symbol. Structural patterns are painted at construction;
/// `encode` writes the data bits. Cells carry no layer information, so a
/// later stage may overwrite an earlier one where the geometry collides.
#[derive(Debug, Clone)]
pub struct Symbol {
    grid: Vec<bool>,
    w: usize,
    ver: Version,
    ecl: ECLevel,
}

impl Symbol {
    pub fn new(size: usize, ecl: ECLevel) -> Self {
        let mut sym = Self::blank(size, ecl);
        sym.draw_finder_patterns();
        sym.draw_timing_patterns();
        sym.draw_alignment_patterns();
        sym
    }

    fn blank(size: usize, ecl: ECLevel) -> Self {
        debug_assert!(size >= 21 && (size - 21) % 4 == 0, "Invalid size: {size}");

        Self { grid: vec![false; size * size], w: size, ver: Version::from_width(size), ecl }
    }

    pub fn width(&self) -> usize {
        self.w
    }

    pub fn version(&self) -> Version {
        self.ver
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ecl
    }

    pub fn metadata(&self) -> String {
        format!(
            "{{ Version: {}, Ec level: {:?}, Size: {} }}",
            self.ver.number(),
            self.ecl,
            self.w
        )
    }

    pub fn count_dark_modules(&self) -> usize {
        self.grid.iter().filter(|&&m| m).count()
    }

    fn coord_to_index(&self, r: usize, c: usize) -> usize {
        debug_assert!(r < self.w, "Row out of bounds: {r}");
        debug_assert!(c < self.w, "Column out of bounds: {c}");

        r * self.w + c
    }

    pub fn get(&self, r: usize, c: usize) -> bool {
        self.grid[self.coord_to_index(r, c)]
    }

    pub fn set(&mut self, r: usize, c: usize, dark: bool) {
        let index = self.coord_to_index(r, c);
        self.grid[index] = dark;
    }

    #[cfg(test)]
    pub fn to_debug_str(&self) -> String {
        let mut res = String::with_capacity(self.w * (self.w + 1) + 1);
        res.push('\n');
        for r in 0..self.w {
            for c in 0..self.w {
                res.push(if self.get(r, c) { 'X' } else { '.' });
            }
            res.push('\n');
        }
        res
    }
}


// Finder patterns
//------------------------------------------------------------------------------

impl Symbol {
    fn draw_finder_patterns(&mut self) {
        self.draw_finder_pattern_at(0, 0);
        self.draw_finder_pattern_at(0, self.w - 7);
        self.draw_finder_pattern_at(self.w - 7, 0);
    }

    // 7x7 block anchored at the top left corner (r, c): dark on the outer
    // border and in the inner 3x3 core. No separating light ring is drawn.
    fn draw_finder_pattern_at(&mut self, r: usize, c: usize) {
        for i in 0..7 {
            for j in 0..7 {
                let dark = i == 0 || i == 6 || j == 0 || j == 6 || ((2..=4).contains(&i) && (2..=4).contains(&j));
                self.set(r + i, c + j, dark);
            }
        }
    }
}


// Timing patterns
//------------------------------------------------------------------------------

impl Symbol {
    fn draw_timing_patterns(&mut self) {
        for i in 8..self.w - 8 {
            self.set(6, i, i % 2 == 0);
            self.set(i, 6, i % 2 == 0);
        }
    }
}


// Alignment patterns
//------------------------------------------------------------------------------

impl Symbol {
    fn draw_alignment_patterns(&mut self) {
        let positions = self.ver.alignment_positions();
        for &x in positions {
            // Ensure enough space for the block
            if x >= self.w - 4 {
                continue;
            }
            for &y in positions {
                self.draw_alignment_pattern_at(x, y);
            }
        }
    }

    // 5x5 block anchored at the top left corner (x, y), clipped to the grid.
    fn draw_alignment_pattern_at(&mut self, x: usize, y: usize) {
        for i in 0..5 {
            for j in 0..5 {
                if x + i >= self.w || y + j >= self.w {
                    continue;
                }
                let dark = i == 0 || i == 4 || j == 0 || j == 4 || ((1..=3).contains(&i) && (1..=3).contains(&j));
                self.set(x + i, y + j, dark);
            }
        }
    }
}


// Encoding
//------------------------------------------------------------------------------

impl Symbol {
    /// Encodes `data` into the matrix: builds the byte mode bitstream
    /// against the symbol capacity and writes it along the data column.
    pub fn encode(&mut self, data: &[u8]) -> SymbolResult<()> {
        let capacity = self.ver.data_bit_capacity(self.ecl);
        let payload = codec::encode(data, capacity)?;
        self.draw_payload(payload);
        Ok(())
    }

    fn draw_payload(&mut self, payload: BitStream) {
        let walk = ColumnWalk::new(self.w);
        for (bit, r) in payload.zip(walk) {
            self.set(r, 6, bit);
        }
    }
}

#[cfg(test)]
mod encoding_tests {
    use super::Symbol;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_encode_writes_data_column() {
        // "A" at version 1, level L produces the 26 bit stream
        // 0010 00000001 01000001 011100. Walked along column 6, the last
        // write wins for every revisited row.
        let mut symbol = Symbol::new(21, ECLevel::L);
        symbol.encode(b"A").unwrap();
        assert_eq!(
            symbol.to_debug_str(),
            "\n\
             XXXXXXX.......XXXXXXX\n\
             X.....X.......X.....X\n\
             X.XXX.X.......X.XXX.X\n\
             X.XXX.X.......X.XXX.X\n\
             X.XXX.X.......X.XXX.X\n\
             X.....X.......X.....X\n\
             XXXXXX.XXXX.X.XXXXXXX\n\
             ......XXXXX.......XXX\n\
             .......XXXX.......XXX\n\
             ......XXXXX.......XXX\n\
             ......XXXXX.......XXX\n\
             .....................\n\
             .....................\n\
             .....................\n\
             XXXXXXX..............\n\
             X.....X..............\n\
             X.XXX.X..............\n\
             X.XXX.X..............\n\
             X.XXX.X..............\n\
             X.....X..............\n\
             XXXXXXX..............\n"
        );
    }

    #[test]
    fn test_encode_leaves_other_columns_untouched() {
        let patterns_only = Symbol::new(21, ECLevel::L);
        let mut symbol = Symbol::new(21, ECLevel::L);
        symbol.encode(b"A").unwrap();
        for r in 0..21 {
            for c in 0..21 {
                if c != 6 {
                    assert_eq!(symbol.get(r, c), patterns_only.get(r, c), "({r}, {c})");
                }
            }
        }
    }
}

// Function pattern composition
//------------------------------------------------------------------------------

#[cfg(test)]
mod function_pattern_tests {
    use super::Symbol;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_all_function_patterns() {
        let symbol = Symbol::new(21, ECLevel::L);
        assert_eq!(
            symbol.to_debug_str(),
            "\n\
             XXXXXXX.......XXXXXXX\n\
             X.....X.......X.....X\n\
             X.XXX.X.......X.XXX.X\n\
             X.XXX.X.......X.XXX.X\n\
             X.XXX.X.......X.XXX.X\n\
             X.....X.......X.....X\n\
             XXXXXXXXXXX.X.XXXXXXX\n\
             ......XXXXX.......XXX\n\
             ......XXXXX.......XXX\n\
             ......XXXXX.......XXX\n\
             ......XXXXX.......XXX\n\
             .....................\n\
             ......X..............\n\
             .....................\n\
             XXXXXXX..............\n\
             X.....X..............\n\
             X.XXX.X..............\n\
             X.XXX.X..............\n\
             X.XXX.X..............\n\
             X.....X..............\n\
             XXXXXXX..............\n"
        );
    }
}

// Render
//------------------------------------------------------------------------------

impl Symbol {
    /// Rasterizes the symbol, one `module_sz` square block of pixels per
    /// module. Dark modules are black, light modules white; no quiet zone.
    pub fn to_image(&self, module_sz: u32) -> GrayImage {
        debug_assert!(module_sz > 0, "Module size must be positive");

        let total_sz = self.w as u32 * module_sz;
        let mut canvas = GrayImage::new(total_sz, total_sz);
        for i in 0..total_sz {
            for j in 0..total_sz {
                let r = (i / module_sz) as usize;
                let c = (j / module_sz) as usize;
                let pixel = if self.get(r, c) { Luma([0]) } else { Luma([255]) };
                canvas.put_pixel(j, i, pixel);
            }
        }
        canvas
    }

    pub fn to_str(&self) -> String {
        let mut canvas = String::with_capacity(self.w * (self.w + 1));
        for r in 0..self.w {
            for c in 0..self.w {
                canvas.push(if self.get(r, c) { '█' } else { ' ' });
            }
            canvas.push('\n');
        }
        canvas
    }
}

#[cfg(test)]
mod render_tests {
    use super::Symbol;
    use crate::common::metadata::ECLevel;

    #[test]
    fn test_to_image_one_pixel_per_module() {
        let symbol = Symbol::new(21, ECLevel::L);
        let img = symbol.to_image(1);
        assert_eq!(img.dimensions(), (21, 21));
        for r in 0..21 {
            for c in 0..21 {
                let exp = if symbol.get(r, c) { 0u8 } else { 255 };
                assert_eq!(img.get_pixel(c as u32, r as u32).0, [exp], "({r}, {c})");
            }
        }
    }

    #[test]
    fn test_to_image_scales_modules() {
        let symbol = Symbol::new(21, ECLevel::L);
        let img = symbol.to_image(4);
        assert_eq!(img.dimensions(), (84, 84));
        // (0, 0) is dark: its whole 4x4 block is black.
        for i in 0..4 {
            for j in 0..4 {
                assert_eq!(img.get_pixel(j, i).0, [0]);
            }
        }
        // (1, 1) is light.
        assert_eq!(img.get_pixel(5, 5).0, [255]);
    }

    #[test]
    fn test_to_str() {
        let symbol = Symbol::new(21, ECLevel::L);
        let s = symbol.to_str();
        assert_eq!(s.lines().count(), 21);
        assert!(s.starts_with("███████"));
    }
}
