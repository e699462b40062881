use std::path::PathBuf;

use tracing::debug;

use super::{CommandError, exit_on_error, load_binary};

pub struct CheckArgs {
    pub binary_path: PathBuf,
}

pub fn run(args: CheckArgs) {
    exit_on_error(execute(&args));
    // Silent on success (like cargo check)
}

fn execute(args: &CheckArgs) -> Result<(), CommandError> {
    let binary = load_binary(&args.binary_path)?;
    let regions = binary.regions()?;
    debug!(
        regions = regions.len(),
        bound = binary.header().bound,
        "binary is well-formed"
    );
    Ok(())
}
