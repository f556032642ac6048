use log::error;
use std::fmt::Debug;

pub mod env_args;

/// Log the error with a message and discard it.
pub fn log_message<E: Debug>(message: &str) -> impl FnOnce(E) {
    move |e| {
        error!("{message}\n{e:#?}");
    }
}

/// Log the error, then replace it with `value_to_return`.
pub fn log_error_and_return<E: Debug, T>(value_to_return: T) -> impl FnOnce(E) -> T {
    |e| {
        error!("{e:#?}");
        value_to_return
    }
}

/// Log the error with a message, then replace it with `value_to_return`.
/// Meant to be used with `map_err`.
pub fn log_message_and_return<E: Debug, T>(
    message: &str,
    value_to_return: T,
) -> impl FnOnce(E) -> T {
    move |e| {
        error!("{message}\n{e:#?}");
        value_to_return
    }
}
