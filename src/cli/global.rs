use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Named order from orders.toml (default: settings.default_order)
    #[arg(short = 'O', long, global = true, value_name = "NAME")]
    pub order: Option<String>,

    /// Signature code (bu, bd, Bu, Bd); takes precedence over --order
    #[arg(short = 'S', long, global = true, value_name = "CODE")]
    pub signature: Option<String>,

    /// Rotate the order so this key becomes position zero of the ring
    #[arg(long, global = true, value_name = "KEY")]
    pub origin: Option<String>,

    /// Show diagnostics on stderr (honours RUST_LOG)
    #[arg(short = 'v', long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress all diagnostics
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited)
    #[arg(long, global = true, default_value = "104857600")]
    pub max_size: usize,

    /// Process files exceeding --max-size limit
    #[arg(long, global = true)]
    pub force: bool,
}
