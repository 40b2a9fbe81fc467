//! Logging macros that only fire the first time they are reached.
//!
//! Useful in hot loops where a diagnostic would otherwise flood the output.

#[macro_export]
macro_rules! log_once {
    (target: $target:expr, $lvl:expr, $($arg:tt)+) => {{
        static ONCE: std::sync::Once = std::sync::Once::new();
        ONCE.call_once(|| {
            log::log!(target: $target, $lvl, $($arg)+);
        });
    }};
    ($lvl:expr, $($arg:tt)+) => ($crate::log_once!(target: module_path!(), $lvl, $($arg)+));
}

#[macro_export]
macro_rules! error_once {
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Error, $($arg)+));
}

#[macro_export]
macro_rules! warn_once {
    ($($arg:tt)+) => ($crate::log_once!(log::Level::Warn, $($arg)+));
}

#[cfg(test)]
mod tests {
    #[test]
    fn fires_without_a_logger() {
        for _ in 0..3 {
            crate::warn_once!("reached {} times at most once", 3);
        }
        crate::log_once!(target: "blob", log::Level::Info, "explicit target");
    }
}
