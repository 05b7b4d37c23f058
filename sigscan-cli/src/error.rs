//! Top-level CLI error, realizing spec.md §7's `InvalidInput` variant on
//! top of `sigscan-engine`'s wrapped taxonomy.

use crate::input::InputError;
use sigscan_engine::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InputError),

    #[error("{0}")]
    Engine(#[from] EngineError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
