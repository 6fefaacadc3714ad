use crate::table::{ComparisonTable, PATH_SAFE_TABLE, STANDARD_TABLE};
use std::fmt;

/// Marks a byte that is not part of an alphabet in the inverse table.
const INVALID: u8 = u8::MAX;

pub(crate) const STANDARD_SYMBOLS: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";
pub(crate) const PATH_SAFE_SYMBOLS: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

static STANDARD: Alphabet = Alphabet::new(
    AlphabetVariant::Standard,
    STANDARD_SYMBOLS,
    Some(b'='),
    &STANDARD_TABLE,
);
static PATH_SAFE: Alphabet =
    Alphabet::new(AlphabetVariant::PathSafe, PATH_SAFE_SYMBOLS, None, &PATH_SAFE_TABLE);

/// The two 64-symbol alphabets keys and integers are written in.
///
/// Both share ranks 0..=61 (`A-Z`, `a-z`, `0-9`) and differ at ranks 62 and 63:
/// - Standard (RFC 1113 style): `+` and `/`, padded with `=`
/// - PathSafe: `-` and `_`, never padded, safe inside file names and URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AlphabetVariant {
    Standard,
    PathSafe,
}

impl AlphabetVariant {
    /// Returns both variants, standard first.
    pub fn all() -> &'static [AlphabetVariant] {
        &[AlphabetVariant::Standard, AlphabetVariant::PathSafe]
    }

    /// Human readable name used by the command line tool.
    pub fn name(&self) -> &'static str {
        match self {
            AlphabetVariant::Standard => "standard",
            AlphabetVariant::PathSafe => "path-safe",
        }
    }
}

impl fmt::Display for AlphabetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A fixed 64-symbol alphabet together with its inverse mapping.
///
/// Alphabets are built at compile time and only ever handed out as
/// `&'static Alphabet`, so they can be read from any thread without locking.
pub struct Alphabet {
    variant: AlphabetVariant,
    symbols: [u8; 64],
    ranks: [u8; 128],
    padding: Option<u8>,
    table: &'static ComparisonTable,
}

impl Alphabet {
    const fn new(
        variant: AlphabetVariant,
        symbols: [u8; 64],
        padding: Option<u8>,
        table: &'static ComparisonTable,
    ) -> Self {
        let mut ranks = [INVALID; 128];
        let mut rank = 0;
        while rank < 64 {
            ranks[symbols[rank] as usize] = rank as u8;
            rank += 1;
        }
        Alphabet {
            variant,
            symbols,
            ranks,
            padding,
            table,
        }
    }

    /// Returns the shared alphabet for a variant.
    pub fn get(variant: AlphabetVariant) -> &'static Alphabet {
        match variant {
            AlphabetVariant::Standard => &STANDARD,
            AlphabetVariant::PathSafe => &PATH_SAFE,
        }
    }

    pub fn standard() -> &'static Alphabet {
        &STANDARD
    }

    pub fn path_safe() -> &'static Alphabet {
        &PATH_SAFE
    }

    pub fn variant(&self) -> AlphabetVariant {
        self.variant
    }

    /// The 64 symbols in rank order.
    pub fn symbols(&self) -> &[u8; 64] {
        &self.symbols
    }

    /// Padding symbol appended by the byte codec, if this variant pads.
    pub fn padding(&self) -> Option<u8> {
        self.padding
    }

    /// Precomputed symbol comparisons for this alphabet.
    pub fn table(&self) -> &'static ComparisonTable {
        self.table
    }

    /// Encodes a 6-bit rank as its symbol. Bits above the low six are ignored.
    #[inline]
    pub fn encode_symbol(&self, rank: u8) -> u8 {
        self.symbols[(rank & 0x3f) as usize]
    }

    /// Decodes a symbol back to its rank.
    ///
    /// Returns `None` for every byte outside the alphabet, including all bytes >= 128.
    #[inline]
    pub fn decode_symbol(&self, byte: u8) -> Option<u8> {
        match self.ranks.get(byte as usize) {
            Some(&rank) if rank != INVALID => Some(rank),
            _ => None,
        }
    }

    #[inline]
    pub fn is_symbol(&self, byte: u8) -> bool {
        self.decode_symbol(byte).is_some()
    }

    /// Returns true iff every byte of `key` is a symbol of this alphabet.
    ///
    /// The empty key is well-formed.
    pub fn well_formed(&self, key: &[u8]) -> bool {
        key.iter().all(|&b| self.is_symbol(b))
    }

    /// Symbol of rank 63, used as the "maximum" placeholder.
    pub fn max_symbol(&self) -> u8 {
        self.symbols[63]
    }

    /// A key of `length` rank-0 symbols, the smallest key of that length.
    pub fn zero(&self, length: usize) -> Vec<u8> {
        vec![self.symbols[0]; length]
    }
}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("variant", &self.variant)
            .field("symbols", &String::from_utf8_lossy(&self.symbols))
            .field("padding", &self.padding.map(char::from))
            .finish()
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.variant == other.variant
    }
}

impl Eq for Alphabet {}
