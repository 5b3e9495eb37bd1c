use std::env;

use once_cell::sync::Lazy;

pub static DEBUG_ENABLED: Lazy<bool> = Lazy::new(|| {
    env::var("DOCSTEP_DEBUG").map_or(false, |log_level| log_level.eq("true") || log_level.eq("1"))
});

/// Builds a message optionally carrying extra details.
///
/// # Arguments
///
/// * `message` - The main message.
/// * `details` - Additional details, only appended when debugging is enabled.
///
/// # Returns
///
/// A formatted string containing the message and, when debugging, the details.
pub fn debug_message<M, D>(message: M, details: D) -> String
where
    M: AsRef<str>,
    D: AsRef<str>,
{
    if *DEBUG_ENABLED {
        format!("{}{}", message.as_ref(), details.as_ref())
    } else {
        message.as_ref().to_string()
    }
}

/// Logs a debug message with optional formatted arguments.
///
/// Messages go to stderr so the rendered document on stdout stays intact.
///
/// # Examples
///
/// ```
/// use docstep::debug;
///
/// debug!("Rendering started");
/// debug!("Step {} for {}", "head", "xml");
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:expr) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!("{}", $fmt)));
        }
    };
    ($fmt:expr, $($arg:tt)*) => {
        if *$crate::log::DEBUG_ENABLED {
            eprintln!("{}", nu_ansi_term::Color::Yellow.paint(format!($fmt, $($arg)*)));
        }
    };
}
