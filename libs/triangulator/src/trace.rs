//! Step-level tracing that is compiled out unless `verbose-logs` is enabled.
//!
//! Operation boundaries log through `log::debug!` directly. The per-vertex
//! classification chatter goes through [`trace_state!`] so builds without the
//! feature never format or emit it.

/// Emits a `log::trace!` record when the `verbose-logs` feature is enabled.
#[cfg(feature = "verbose-logs")]
macro_rules! trace_state {
    ($($arg:tt)+) => {
        log::trace!($($arg)+)
    };
}

/// Type-checks the arguments and discards them.
#[cfg(not(feature = "verbose-logs"))]
macro_rules! trace_state {
    ($($arg:tt)+) => {
        if false {
            log::trace!($($arg)+)
        }
    };
}

pub(crate) use trace_state;
