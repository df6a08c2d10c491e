//! The only errors this crate surfaces as `Result`s: fatal, outer-boundary
//! failures. The interpreter itself never fails (see spec §7).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("failed to read ROM file: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    #[error("ROM is {size} bytes but only {available} bytes are available from the load base")]
    RomTooLarge { size: usize, available: usize },

    #[error("host initialization failed: {0}")]
    HostInit(String),
}
