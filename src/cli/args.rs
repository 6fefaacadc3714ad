use clap::{Args, Subcommand};
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Encode bytes as base64 text
    Encode(EncodeArgs),
    /// Decode base64 text back to bytes
    Decode(DecodeArgs),
    /// Encode an unsigned integer as fixed-width text
    EncodeLong(EncodeLongArgs),
    /// Decode fixed-width text to an unsigned integer
    DecodeLong(DecodeLongArgs),
    /// Print the cardinal (ring position) of a key
    Cardinal(CardinalArgs),
    /// Print the canonical key of a cardinal
    Uncardinal(UncardinalArgs),
    /// Compare two keys, printing -1, 0 or 1
    Compare(CompareArgs),
    /// Sort newline-separated keys
    Sort(SortArgs),
    /// Describe a signature code
    Signature(SignatureArgs),
    /// List configured orders
    List,
}

/// Arguments for encoding data
#[derive(Args, Debug)]
pub struct EncodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for decoding data
#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,
}

/// Arguments for integer encoding
#[derive(Args, Debug)]
pub struct EncodeLongArgs {
    pub value: u64,

    /// Number of symbols to emit
    #[arg(short, long, default_value_t = 4)]
    pub width: usize,

    /// Clamp values that do not fit instead of truncating them
    #[arg(long)]
    pub saturate: bool,
}

/// Arguments for integer decoding
#[derive(Args, Debug)]
pub struct DecodeLongArgs {
    pub text: String,
}

/// Arguments for cardinal computation
#[derive(Args, Debug)]
pub struct CardinalArgs {
    pub key: String,

    /// Print the cardinal scaled into 0..1
    #[arg(short, long)]
    pub normalized: bool,
}

/// Arguments for the inverse cardinal
#[derive(Args, Debug)]
pub struct UncardinalArgs {
    pub cardinal: u64,
}

/// Arguments for comparing keys
#[derive(Args, Debug)]
pub struct CompareArgs {
    pub a: String,
    pub b: String,
}

/// Arguments for sorting keys
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Input file (reads from stdin if not provided)
    pub file: Option<PathBuf>,

    /// Append each key's cardinal after a tab
    #[arg(short, long)]
    pub cardinals: bool,
}

/// Arguments for describing a signature
#[derive(Args, Debug)]
pub struct SignatureArgs {
    pub code: String,
}
