use crate::cli::global::GlobalArgs;
use ring_order::{KeyOrder, OrderRegistry};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Resolves the order selected on the command line.
///
/// `--signature` wins over `--order`, which wins over the configured default.
/// `--origin` rotates whichever order was selected.
pub fn resolve_order(
    global: &GlobalArgs,
    registry: &OrderRegistry,
) -> Result<KeyOrder, Box<dyn std::error::Error>> {
    let mut order = match (&global.signature, &global.order) {
        (Some(code), _) => KeyOrder::from_signature(code)?,
        (None, Some(name)) => registry.build(name)?,
        (None, None) => registry.build_default()?,
    };

    if let Some(origin) = &global.origin {
        order.rotate(origin.as_bytes())?;
    }

    tracing::debug!(order = %order, origin = ?global.origin, "resolved key order");
    Ok(order)
}

/// Reads a file, or stdin if no file is given, enforcing `--max-size`.
///
/// Files over the limit are read only with `--force`; stdin over the limit is
/// always rejected.
pub fn read_input(
    file: Option<&Path>,
    global: &GlobalArgs,
) -> Result<Vec<u8>, Box<dyn std::error::Error>> {
    let Some(path) = file else {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;

        if global.max_size > 0 && buffer.len() > global.max_size {
            return Err(format!(
                "Input size ({} bytes) exceeds maximum ({} bytes). Use a file with --force.",
                buffer.len(),
                global.max_size
            )
            .into());
        }
        return Ok(buffer);
    };

    if global.max_size > 0 {
        let file_size = fs::metadata(path)
            .map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?
            .len() as usize;

        if file_size > global.max_size {
            if !global.force {
                return Err(format!(
                    "File size ({} bytes) exceeds limit ({} bytes). Use --force to process anyway.",
                    file_size, global.max_size
                )
                .into());
            }
            tracing::warn!(
                path = %path.display(),
                size = file_size,
                limit = global.max_size,
                "processing large file"
            );
        }
    }

    let data = fs::read(path).map_err(|e| format!("Cannot read '{}': {}", path.display(), e))?;
    Ok(data)
}
