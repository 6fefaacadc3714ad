mod args;
mod config;
mod global;
mod handlers;

use args::Commands;
use clap::Parser;
use global::GlobalArgs;
use ring_order::OrderRegistry;

#[derive(Parser)]
#[command(name = "ring-order")]
#[command(version)]
#[command(about = "Base64 key order, ring cardinals and compact base64 codecs", long_about = None)]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(global: &GlobalArgs) {
    // --quiet turns logging off, --verbose honours RUST_LOG and falls back to
    // debug, otherwise only warnings reach stderr
    let filter = if global.quiet {
        tracing_subscriber::EnvFilter::new("off")
    } else if global.verbose {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "debug".into())
    } else {
        tracing_subscriber::EnvFilter::new("warn")
    };

    let ansi = !(global.no_color || std::env::var_os("NO_COLOR").is_some());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(ansi)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_tracing(&cli.global);

    let registry = OrderRegistry::load_with_overrides()?;

    match cli.command {
        Commands::Encode(args) => handlers::encode::handle(args, &cli.global, &registry),
        Commands::Decode(args) => handlers::decode::handle(args, &cli.global, &registry),
        Commands::EncodeLong(args) => handlers::long::handle_encode(args, &cli.global, &registry),
        Commands::DecodeLong(args) => handlers::long::handle_decode(args, &cli.global, &registry),
        Commands::Cardinal(args) => handlers::cardinal::handle(args, &cli.global, &registry),
        Commands::Uncardinal(args) => {
            handlers::cardinal::handle_uncardinal(args, &cli.global, &registry)
        }
        Commands::Compare(args) => handlers::compare::handle(args, &cli.global, &registry),
        Commands::Sort(args) => handlers::sort::handle(args, &cli.global, &registry),
        Commands::Signature(args) => handlers::list::handle_signature(args),
        Commands::List => handlers::list::handle(&registry),
    }
}
