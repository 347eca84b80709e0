//! Paths command handler.

use anyhow::Result;

use eventreg_core::ResolvedPaths;

/// Print the resolved data paths in `key = value` format.
pub fn execute() -> Result<()> {
    let paths = ResolvedPaths::resolve()?;
    println!("{paths}");
    Ok(())
}
