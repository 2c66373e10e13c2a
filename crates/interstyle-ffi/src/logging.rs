//! Log output for hosts that have no `tracing` subscriber of their own

use tracing_subscriber::EnvFilter;

/// Install a formatting subscriber filtered by `RUST_LOG` (default `warn`).
///
/// Calling it again, or after the host installed its own subscriber, has
/// no effect.
#[no_mangle]
pub extern "C" fn interstyle_init_logging() {
    crate::guarded((), || {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    })
}
