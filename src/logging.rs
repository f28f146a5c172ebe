// src/logging.rs

//! Logging initialisation.
//!
//! The library itself only emits records through the `log` facade. Binaries
//! and tests that want output call [`init`] once at start-up.

/// Default filter directive for the given verbosity.
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

/// Install `env_logger`, honouring `RUST_LOG` when set.
///
/// Calling this more than once is harmless; later calls are ignored.
#[cfg(feature = "logging")]
pub fn init(verbose: bool) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter(verbose)),
    )
    .format_timestamp_secs()
    .try_init();
}
