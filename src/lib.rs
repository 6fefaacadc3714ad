//! Key order, ring cardinals and base64 codecs for a peer-distributed key-value index.
//!
//! - [`KeyOrder`] sorts byte keys by base64 symbol rank, optionally as a ring
//!   rotated around an origin key, and never fails on malformed keys.
//! - [`KeyOrder::cardinal`] projects keys onto `[0, 2^63)` for range partitioning.
//! - [`Alphabet`] encodes integers and byte payloads as compact base64 text.
//!
//! # Example
//!
//! ```
//! use ring_order::{Alphabet, KeyOrder};
//! use std::cmp::Ordering;
//!
//! let order = KeyOrder::from_signature("Bu").unwrap();
//! assert_eq!(order.compare(b"AB", b"AC"), Ordering::Less);
//!
//! let text = Alphabet::standard().encode_bytes(b"foo");
//! assert_eq!(text, "Zm9v");
//! assert_eq!(Alphabet::standard().decode_bytes(&text), b"foo");
//! ```

mod alphabet;
mod cardinal;
mod codec;
mod config;
mod error;
mod order;
mod table;

pub use alphabet::{Alphabet, AlphabetVariant};
pub use cardinal::{CARDINAL_SYMBOLS, MAX_CARDINAL, raw_cardinal};
pub use config::{OrderConfig, OrderRegistry, Settings};
pub use error::{ConfigError, DecodeError, OrderError};
pub use order::{Direction, KeyOrder, natural_compare};
pub use table::ComparisonTable;
