pub mod check;
pub mod demo;
pub mod dump;
pub mod info;


use std::io;
use std::path::{Path, PathBuf};

use spvkit_bytecode::{Binary, BinaryError};

/// Failure of a CLI command. Printed as `error: ...` before exiting 1.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("cannot load {}: {source}", path.display())]
    Load { path: PathBuf, source: BinaryError },

    #[error("cannot write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("{0}")]
    Invalid(#[from] BinaryError),

    #[error("assembled module is malformed: {0}")]
    Structure(#[from] spvkit_assembler::StructureError),

    #[error("cannot serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_binary(path: &Path) -> Result<Binary, CommandError> {
    Binary::from_path(path).map_err(|source| CommandError::Load {
        path: path.to_path_buf(),
        source,
    })
}

/// Print the error and exit 1.
pub fn exit_on_error<T>(result: Result<T, CommandError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(1);
        }
    }
}
