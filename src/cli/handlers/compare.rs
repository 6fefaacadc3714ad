use crate::cli::{args::CompareArgs, config::resolve_order, global::GlobalArgs};
use ring_order::OrderRegistry;
use std::cmp::Ordering;

pub fn handle(
    args: CompareArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = resolve_order(global, config)?;

    let result = match order.compare(args.a.as_bytes(), args.b.as_bytes()) {
        Ordering::Less => -1,
        Ordering::Equal => 0,
        Ordering::Greater => 1,
    };
    println!("{}", result);
    Ok(())
}
