use crate::cli::{
    args::DecodeArgs,
    config::{read_input, resolve_order},
    global::GlobalArgs,
};
use ring_order::OrderRegistry;
use std::io::{self, Write};

pub fn handle(
    args: DecodeArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = resolve_order(global, config)?;
    let input_data = read_input(args.file.as_deref(), global)?;
    let input_text =
        String::from_utf8(input_data).map_err(|_| "Input must be valid UTF-8 for decoding")?;

    // the command line reports corrupt input instead of printing nothing
    let decoded = order.alphabet().try_decode_bytes(input_text.trim())?;
    io::stdout().write_all(&decoded)?;
    Ok(())
}
