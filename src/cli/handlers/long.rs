use crate::cli::{
    args::{DecodeLongArgs, EncodeLongArgs},
    config::resolve_order,
    global::GlobalArgs,
};
use ring_order::OrderRegistry;

pub fn handle_encode(
    args: EncodeLongArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_order(global, config)?.alphabet();

    let encoded = if args.saturate {
        alphabet.encode_long_saturating(args.value, args.width)
    } else {
        alphabet.encode_long(args.value, args.width)
    };
    println!("{}", encoded);
    Ok(())
}

pub fn handle_decode(
    args: DecodeLongArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let alphabet = resolve_order(global, config)?.alphabet();

    let value = alphabet.try_decode_long(args.text.trim())?;
    println!("{}", value);
    Ok(())
}
