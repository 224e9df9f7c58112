//! Packed 1-bit grid
//!
//! Bits are packed MSB to LSB within each 32-bit word, row after row with
//! no per-row padding: bit `i = y * width + x` lives in word `i / 32` at
//! bit `31 - i % 32`.

/// Dense `width × height` grid of flags.
///
/// Accessors take a row-major index and trust it; callers validate
/// coordinates before reaching the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitGrid {
    words: Vec<u32>,
}

impl BitGrid {
    /// Create a grid with every bit cleared.
    pub fn new(width: u32, height: u32) -> Self {
        let bits = width as usize * height as usize;
        Self {
            words: vec![0; bits.div_ceil(32)],
        }
    }

    /// Get the bit at row-major `index`.
    #[inline]
    pub fn get(&self, index: usize) -> bool {
        (self.words[index >> 5] >> (31 - (index & 31))) & 1 != 0
    }

    /// Set the bit at row-major `index`.
    #[inline]
    pub fn set(&mut self, index: usize) {
        self.words[index >> 5] |= 0x8000_0000 >> (index & 31);
    }

    /// Clear every bit.
    pub fn clear_all(&mut self) {
        self.words.fill(0);
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_clear_all() {
        let mut grid = BitGrid::new(7, 5);
        assert_eq!(grid.count_ones(), 0);

        for i in [0, 31, 32, 34] {
            grid.set(i);
        }
        assert!(grid.get(0));
        assert!(grid.get(31));
        assert!(grid.get(32));
        assert!(!grid.get(33));
        assert!(grid.get(34));
        assert_eq!(grid.count_ones(), 4);

        // Setting a set bit is a no-op
        grid.set(31);
        assert_eq!(grid.count_ones(), 4);

        grid.clear_all();
        assert_eq!(grid.count_ones(), 0);
    }

    #[test]
    fn test_msb_first_packing() {
        let mut grid = BitGrid::new(32, 1);
        grid.set(0);
        assert_eq!(grid.words[0], 0x8000_0000);
        grid.set(31);
        assert_eq!(grid.words[0], 0x8000_0001);
    }
}
