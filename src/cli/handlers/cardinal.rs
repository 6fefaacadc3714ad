use crate::cli::{
    args::{CardinalArgs, UncardinalArgs},
    config::resolve_order,
    global::GlobalArgs,
};
use ring_order::{MAX_CARDINAL, OrderRegistry};

pub fn handle(
    args: CardinalArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    let order = resolve_order(global, config)?;
    let key = args.key.as_bytes();

    if !order.well_formed(key) {
        tracing::warn!(key = %args.key, "key is not well-formed for {}", order);
    }

    if args.normalized {
        println!("{}", order.normalized_cardinal(key));
    } else {
        println!("{}", order.cardinal(key));
    }
    Ok(())
}

pub fn handle_uncardinal(
    args: UncardinalArgs,
    global: &GlobalArgs,
    config: &OrderRegistry,
) -> Result<(), Box<dyn std::error::Error>> {
    if args.cardinal > MAX_CARDINAL {
        return Err(format!(
            "Cardinal {} exceeds the maximum {}",
            args.cardinal, MAX_CARDINAL
        )
        .into());
    }

    let order = resolve_order(global, config)?;
    let key = order.uncardinal(args.cardinal);
    println!("{}", String::from_utf8_lossy(&key));
    Ok(())
}
