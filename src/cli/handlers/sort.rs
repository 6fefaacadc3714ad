use crate::cli::{
    args::SortArgs,
    config::{read_input, resolve_order},
    global::GlobalArgs,
};
use ring_order::OrderRegistry;
use std::io::{self, BufWriter, Write};

pub fn handle(
    args: SortArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = resolve_order(global, config)?;
    let input_data = read_input(args.file.as_deref(), global)?;

    let mut keys: Vec<&[u8]> = input_data
        .split(|&b| b == b'\n')
        .map(|line| line.strip_suffix(b"\r").unwrap_or(line))
        .filter(|line| !line.is_empty())
        .collect();

    let malformed = keys.iter().filter(|key| !order.well_formed(key)).count();
    if malformed > 0 {
        tracing::warn!(malformed, total = keys.len(), "sorting keys that are not well-formed");
    }

    order.sort(&mut keys);

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    for key in keys {
        out.write_all(key)?;
        if args.cardinals {
            write!(out, "\t{}", order.cardinal(key))?;
        }
        out.write_all(b"\n")?;
    }
    out.flush()?;
    Ok(())
}
