//! Tracing support for the test and diagnostics layer.
//!
//! Provides tracing functionality when the `tracing` feature is enabled, and
//! no-op implementations when it's disabled, so callers never need their own
//! feature gates.

#[cfg(feature = "tracing")]
mod enabled {
    use std::sync::Once;

    /// Installs a fmt subscriber once per process.  Safe to call from every
    /// test; later calls are no-ops.
    pub fn init_tracing() {
        static INIT: Once = Once::new();
        INIT.call_once(|| {
            let _ = tracing_subscriber::fmt().with_test_writer().try_init();
        });
    }

    // Re-export tracing macros for convenience
    pub use tracing::info_span;
}

#[cfg(not(feature = "tracing"))]
mod disabled {
    pub fn init_tracing() {
        // No-op when tracing is disabled
    }

    // Provide a no-op macro replacement for info_span
    #[macro_export]
    macro_rules! info_span {
        ($name:expr) => {{ $crate::tracing_support::NoOpSpan }};
        ($name:expr, $($fields:tt)*) => {{ $crate::tracing_support::NoOpSpan }};
    }

    pub use info_span;

    pub struct NoOpSpan;

    impl NoOpSpan {
        pub fn entered(self) -> NoOpSpanGuard {
            NoOpSpanGuard
        }
    }

    pub struct NoOpSpanGuard;
}

// Re-export the appropriate implementation
#[cfg(feature = "tracing")]
pub use enabled::*;

#[cfg(not(feature = "tracing"))]
pub use disabled::*;
