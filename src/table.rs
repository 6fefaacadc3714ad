//! Precomputed symbol comparisons.
//!
//! The comparator's inner loop only needs to know how two differing symbols
//! relate. Instead of decoding both symbols and subtracting their ranks, the
//! table is indexed directly by the raw symbol bytes: `(a << 7) | b`.

use crate::alphabet::{PATH_SAFE_SYMBOLS, STANDARD_SYMBOLS};
use std::cmp::Ordering;
use std::fmt;

/// Cell value for pairs where at least one byte is not a symbol.
const NO_VERDICT: i8 = i8::MIN;

const CELLS: usize = 1 << 14;

pub(crate) static STANDARD_TABLE: ComparisonTable = ComparisonTable::build(&STANDARD_SYMBOLS);
pub(crate) static PATH_SAFE_TABLE: ComparisonTable = ComparisonTable::build(&PATH_SAFE_SYMBOLS);

/// Pairwise ordering of the symbols of one alphabet, 128 x 128 cells.
pub struct ComparisonTable {
    cells: [i8; CELLS],
}

impl ComparisonTable {
    const fn build(symbols: &[u8; 64]) -> Self {
        let mut cells = [NO_VERDICT; CELLS];
        let mut a = 0;
        while a < 64 {
            let mut b = 0;
            while b < 64 {
                let sign = if a > b {
                    1
                } else if a < b {
                    -1
                } else {
                    0
                };
                cells[((symbols[a] as usize) << 7) | symbols[b] as usize] = sign;
                b += 1;
            }
            a += 1;
        }
        ComparisonTable { cells }
    }

    /// Looks up the order of two raw symbol bytes.
    ///
    /// Returns `None` if either byte is not a symbol of the table's alphabet.
    #[inline]
    pub fn probe(&self, a: u8, b: u8) -> Option<Ordering> {
        if a >= 128 || b >= 128 {
            return None;
        }
        match self.cells[((a as usize) << 7) | b as usize] {
            -1 => Some(Ordering::Less),
            0 => Some(Ordering::Equal),
            1 => Some(Ordering::Greater),
            _ => None,
        }
    }
}

impl fmt::Debug for ComparisonTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let filled = self.cells.iter().filter(|&&c| c != NO_VERDICT).count();
        f.debug_struct("ComparisonTable")
            .field("filled", &filled)
            .finish()
    }
}
