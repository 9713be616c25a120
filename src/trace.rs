//! Logging shims: forward to `tracing` with the `with-tracing` feature,
//! compile to nothing otherwise.

macro_rules! trace_debug {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with-tracing")]
        {
            ::tracing::debug!($($arg)*);
        }
        #[cfg(not(feature = "with-tracing"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

macro_rules! trace_info {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with-tracing")]
        {
            ::tracing::info!($($arg)*);
        }
        #[cfg(not(feature = "with-tracing"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}

macro_rules! trace_warn {
    ($($arg:tt)*) => {{
        #[cfg(feature = "with-tracing")]
        {
            ::tracing::warn!($($arg)*);
        }
        #[cfg(not(feature = "with-tracing"))]
        {
            if false {
                let _ = format!($($arg)*);
            }
        }
    }};
}
