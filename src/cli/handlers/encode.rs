use crate::cli::{
    args::EncodeArgs,
    config::{read_input, resolve_order},
    global::GlobalArgs,
};
use ring_order::OrderRegistry;

pub fn handle(
    args: EncodeArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = resolve_order(global, config)?;
    let input_data = read_input(args.file.as_deref(), global)?;

    let encoded = order.alphabet().encode_bytes(&input_data);
    println!("{}", encoded);
    Ok(())
}
