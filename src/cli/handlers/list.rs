use crate::cli::args::SignatureArgs;
use ring_order::{KeyOrder, OrderRegistry};

pub fn handle(config: &OrderRegistry) -> Result<(), Box<dyn std::error::Error>> {
    println!("Available orders:\n");
    let default = config.settings.default_order.as_deref();

    for name in config.names() {
        let Some(order_config) = config.get_order(name) else {
            continue;
        };
        let marker = if Some(name) == default { "*" } else { " " };
        let origin = order_config
            .origin
            .as_deref()
            .map(|origin| format!(" origin={}", origin))
            .unwrap_or_default();
        let description = order_config.description.as_deref().unwrap_or("");
        println!(
            "{} {:<15} {:<3}{}  {}",
            marker, name, order_config.signature, origin, description
        );
    }
    Ok(())
}

pub fn handle_signature(args: SignatureArgs) -> Result<(), Box<dyn std::error::Error>> {
    let order = KeyOrder::from_signature(&args.code)?;
    println!("{}", order);
    Ok(())
}
