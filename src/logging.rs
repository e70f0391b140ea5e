// Not every macro is used under every feature combination.
#![allow(unused_macros)]

// Without the `logging` feature the arguments are still type checked, so
// values that only feed a log line do not trip unused warnings.
macro_rules! log {
    ($level:ident, $($tt:tt)*) => {{
        #[cfg(feature = "logging")]
        {
            log::$level!(target: "dualcal", $($tt)*);
        }
        #[cfg(not(feature = "logging"))]
        {
            let _ = format_args!($($tt)*);
        }
    }};
}

macro_rules! debug {
    ($($tt:tt)*) => { log!(debug, $($tt)*) }
}

macro_rules! trace {
    ($($tt:tt)*) => { log!(trace, $($tt)*) }
}
