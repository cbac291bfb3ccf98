// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use thiserror::Error;

/// The error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    //------------------------------
    // Configuration errors (programmer error)
    //------------------------------
    /// No registered options means nothing can be parsed.
    #[error("no options registered")]
    NoOpts,

    /// Two options were registered with the same short option character.
    #[error("duplicate short option '-{0}'")]
    DuplicateShortOpt(char),

    /// Two options were registered with the same long option name.
    #[error("duplicate long option '--{0}'")]
    DuplicateLongOpt(String),

    /// An option was registered with an empty long option name.
    #[error("empty long option name")]
    MissingLongName,

    /// An option without help text was passed to the help formatter.
    #[error("option '--{0}' has no help text")]
    MissingHelpText(String),

    //------------------------------
    // Runtime errors (user error)
    //------------------------------
    /// User specified an option that was not registered.
    #[error("unknown option {0:?}")]
    UnknownOpt(String),

    /// An option that requires an argument was specified without one.
    #[error("missing argument for option {0:?}")]
    MissingOptArg(String),

    /// A flag option was given an attached argument (`--flag=value`).
    #[error("option {0:?} does not take an argument")]
    UnexpectedOptArg(String),

    /// An option argument could not be converted to the option's
    /// native type. The stored value is left unchanged.
    #[error("invalid value {value:?} for option {option:?}")]
    InvalidOptValue {
        /// Long name of the offending option.
        option: String,
        /// The raw text that failed to convert.
        value: String,
    },
}

impl Error {
    /// Returns `true` if the error denotes a mistake in the option
    /// definitions rather than in the command line being parsed.
    ///
    /// Configuration errors indicate a bug in the calling program and
    /// are reported before any command-line token is looked at.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::NoOpts
                | Error::DuplicateShortOpt(_)
                | Error::DuplicateLongOpt(_)
                | Error::MissingLongName
                | Error::MissingHelpText(_)
        )
    }
}

/// Convenience type that allows a function to be defined as returning a
/// [Result], but which only requires the success type to be specified,
/// defaulting the error type to this crates `Error` type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
