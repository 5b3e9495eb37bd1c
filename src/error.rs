use std::io::Write;
use strum_macros::Display;
use thiserror::Error;

#[derive(Debug, Display)]
pub enum ConfigType {
    #[strum(serialize = "Main config")]
    MAIN,
    #[strum(serialize = "Command line")]
    ARGS,
}

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unable to read configuration file {file:?}. Cause : {cause}")]
    ConfigReadError { file: String, cause: String },
    #[error("unable to parse {location} file {file:?}. Cause : {cause}")]
    SerdeTomlError {
        location: ConfigType,
        file: String,
        cause: String,
    },
    #[error("unknown format \"{name}\" in {location} (expected xml, html or plain)")]
    UnknownFormat { location: ConfigType, name: String },
    #[error(transparent)]
    Io(#[from] ::std::io::Error),
    #[error("{0}")]
    Msg(String),
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn default_error_handler(error: &Error, output: &mut dyn Write) {
    use nu_ansi_term::Color::Red;

    match error {
        Error::Io(io_error) if io_error.kind() == ::std::io::ErrorKind::BrokenPipe => {
            ::std::process::exit(0);
        }
        Error::ConfigReadError { .. }
        | Error::SerdeTomlError { .. }
        | Error::UnknownFormat {
            location: ConfigType::MAIN,
            ..
        } => {
            writeln!(output, "{}: {}", Red.paint("[config error]"), error).ok();
        }
        Error::UnknownFormat {
            location: ConfigType::ARGS,
            ..
        } => {
            writeln!(output, "{}: {}", Red.paint("[args error]"), error).ok();
        }
        _ => {
            writeln!(output, "{}: {}", Red.paint("[docstep error]"), error).ok();
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn handled(error: &Error) -> String {
        let mut output = Vec::new();
        default_error_handler(error, &mut output);
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn test_unknown_format_message() {
        let error = Error::UnknownFormat {
            location: ConfigType::MAIN,
            name: "yaml".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "unknown format \"yaml\" in Main config (expected xml, html or plain)"
        );
    }

    #[test]
    fn test_unknown_format_from_args_is_args_error() {
        let printed = handled(&Error::UnknownFormat {
            location: ConfigType::ARGS,
            name: "pdf".to_string(),
        });
        assert!(printed.contains("[args error]"));
        assert!(printed.contains("in Command line"));
    }

    #[test]
    fn test_unknown_format_from_config_is_config_error() {
        let printed = handled(&Error::UnknownFormat {
            location: ConfigType::MAIN,
            name: "pdf".to_string(),
        });
        assert!(printed.contains("[config error]"));
        assert!(!printed.contains("[args error]"));
    }

    #[test]
    fn test_read_error_is_config_error() {
        let printed = handled(&Error::ConfigReadError {
            file: "docstep.toml".to_string(),
            cause: "file not found".to_string(),
        });
        assert!(printed.contains("[config error]"));
        assert!(printed.contains("file not found"));
    }

    #[test]
    fn test_other_errors_use_generic_prefix() {
        let printed = handled(&Error::Msg("invalid output".to_string()));
        assert!(printed.contains("[docstep error]"));
        assert!(printed.contains("invalid output"));
    }
}
