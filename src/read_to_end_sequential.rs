use std::io::{Read, Write};
use std::path::Path;

use anyhow::Context;
use log::debug;

use crate::compute::{process_chunk, Totals};

pub const LOG_PATH: &str = "../log/log.txt";

pub fn main() -> anyhow::Result<()> {
    run(LOG_PATH, &mut std::io::stdout().lock())?;
    Ok(())
}

/// Sums every row of the log at `path` and writes the report to `out`.
/// The report is only written once the whole file has been aggregated, so a
/// bad line leaves `out` untouched.
pub fn run(path: impl AsRef<Path>, out: &mut impl Write) -> anyhow::Result<Totals> {
    let path = path.as_ref();

    let mut input = String::new();
    std::fs::File::open(path)
        .with_context(|| format!("failed to open {}", path.display()))?
        .read_to_string(&mut input)
        .with_context(|| format!("failed to read {}", path.display()))?;
    debug!("read {} bytes from {}", input.len(), path.display());

    let mut totals = Totals::default();
    let rows = process_chunk(&input, &mut totals)
        .with_context(|| format!("malformed log {}", path.display()))?;
    debug!("aggregated {rows} rows");

    out.write_all(totals.to_string().as_bytes())?;
    out.flush()?;
    Ok(totals)
}
