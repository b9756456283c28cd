use anyhow::{bail, Result};
use predict::format::format_long_date;
use predict::validate;
use tracing::debug;

use crate::cli::DateArgs;

/// Prints the ISO date a selection resolves to, or fails with the reason it
/// is outside the prediction window.
pub fn check(args: &DateArgs) -> Result<()> {
    let today = args.today();
    debug!("Checking {:?} against {}", args.selection(), today);

    match validate(&args.selection(), today) {
        Ok(target) => {
            println!("{} ({})", target.iso(), format_long_date(target.date()));
            Ok(())
        }
        Err(e) => bail!("{}", e),
    }
}
