// Core channel.

#[macro_export]
macro_rules! core_trace {
    ($($arg:tt)+) => {
        $crate::__private::log::trace!(target: $crate::logging::CORE_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! core_debug {
    ($($arg:tt)+) => {
        $crate::__private::log::debug!(target: $crate::logging::CORE_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! core_info {
    ($($arg:tt)+) => {
        $crate::__private::log::info!(target: $crate::logging::CORE_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! core_warn {
    ($($arg:tt)+) => {
        $crate::__private::log::warn!(target: $crate::logging::CORE_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! core_error {
    ($($arg:tt)+) => {
        $crate::__private::log::error!(target: $crate::logging::CORE_TARGET, $($arg)+)
    };
}

/// Logs at `Error` severity with a `FATAL` marker on the core channel.
#[macro_export]
macro_rules! core_fatal {
    ($($arg:tt)+) => {
        $crate::__private::log::error!(
            target: $crate::logging::CORE_TARGET,
            "{}{}",
            $crate::logging::FATAL_MARKER,
            ::core::format_args!($($arg)+)
        )
    };
}

// Client channel. Use them qualified (`vern::info!`) to avoid clashing with
// the `log` macros of the same name.

#[macro_export]
macro_rules! trace {
    ($($arg:tt)+) => {
        $crate::__private::log::trace!(target: $crate::logging::CLIENT_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)+) => {
        $crate::__private::log::debug!(target: $crate::logging::CLIENT_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! info {
    ($($arg:tt)+) => {
        $crate::__private::log::info!(target: $crate::logging::CLIENT_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)+) => {
        $crate::__private::log::warn!(target: $crate::logging::CLIENT_TARGET, $($arg)+)
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)+) => {
        $crate::__private::log::error!(target: $crate::logging::CLIENT_TARGET, $($arg)+)
    };
}

/// Logs at `Error` severity with a `FATAL` marker on the client channel.
#[macro_export]
macro_rules! fatal {
    ($($arg:tt)+) => {
        $crate::__private::log::error!(
            target: $crate::logging::CLIENT_TARGET,
            "{}{}",
            $crate::logging::FATAL_MARKER,
            ::core::format_args!($($arg)+)
        )
    };
}
