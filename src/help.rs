// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::path::Path;

use crate::error::{Error, Result};
use crate::opts::OptSet;

const USAGE_PREFIX: &str = "Usage:  ";
const EXAMPLE_PREFIX: &str = "Example:  ";

/// Left padding for long-only option rows, the width of a `-x, `
/// prefix, so their `--name` lines up with the short option rows.
const LONG_ONLY_PAD: &str = "    ";

/// Spaces between the widest option column and the help text.
const GUTTER: usize = 2;

/// Fixed header above the option table, kept for compatibility with
/// GNU-style help output.
const MANDATORY_NOTE: &str =
    "Mandatory arguments to long options are mandatory for short options too.";

/// Builds a help/usage message from the same option collection the
/// parser consumes.
///
/// The formatter reads only the static fields of each option (short
/// character, long name, placeholder, help text), so it can run
/// before or after parsing. It produces a [String]; writing it out
/// is the caller's responsibility.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HelpMessage {
    program: String,
    usage: Vec<String>,
    description: String,
    examples: Vec<String>,
}

impl HelpMessage {
    /// Create a help message for the specified program.
    ///
    /// # Arguments
    ///
    /// - `program`: the program invocation path (`argv[0]`); only its
    ///   final path component is substituted into usage and example
    ///   lines.
    pub fn new(program: &str) -> Self {
        let program = Path::new(program)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| program.into());

        HelpMessage {
            program,
            ..HelpMessage::default()
        }
    }

    /// Add a usage pattern line (without the program name, which is
    /// substituted automatically). May be called repeatedly.
    pub fn usage(mut self, line: &str) -> Self {
        self.usage.push(line.into());
        self
    }

    /// Specify free-text description shown after the usage lines.
    pub fn description(self, description: &str) -> Self {
        HelpMessage {
            description: description.into(),
            ..self
        }
    }

    /// Add an example invocation line (without the program name).
    /// May be called repeatedly.
    pub fn example(mut self, line: &str) -> Self {
        self.examples.push(line.into());
        self
    }

    /// Render the full help message.
    ///
    /// Every option in the set must carry help text; one that does
    /// not is a configuration error, reported before any output is
    /// assembled.
    ///
    /// The help text column is aligned across all rows: its offset
    /// is computed from the widest `long name + placeholder` pair in
    /// the set.
    pub fn render(&self, opts: &OptSet) -> Result<String> {
        for opt in opts.iter() {
            if opt.help.is_none() {
                return Err(Error::MissingHelpText(opt.long.clone()));
            }
        }

        let mut msg = String::new();

        for (i, line) in self.usage.iter().enumerate() {
            if i == 0 {
                msg.push_str(USAGE_PREFIX);
            } else {
                msg.push_str(&" ".repeat(USAGE_PREFIX.len()));
            }

            msg.push_str(&self.program);
            msg.push(' ');
            msg.push_str(line);
            msg.push('\n');
        }

        if !self.description.is_empty() {
            msg.push_str(&self.description);
            msg.push('\n');
        }

        for (i, line) in self.examples.iter().enumerate() {
            if i == 0 {
                msg.push_str(EXAMPLE_PREFIX);
            } else {
                msg.push_str(&" ".repeat(EXAMPLE_PREFIX.len()));
            }

            msg.push_str(&self.program);
            msg.push(' ');
            msg.push_str(line);
            msg.push('\n');
        }

        let max_width = opts
            .iter()
            .map(|o| o.long.len() + o.placeholder.len())
            .max()
            .unwrap_or(0);

        msg.push('\n');
        msg.push_str(MANDATORY_NOTE);
        msg.push('\n');

        for opt in opts.iter() {
            match opt.short_code() {
                Some(short) => {
                    msg.push('-');
                    msg.push(short);
                    msg.push_str(", --");
                }
                None => {
                    msg.push_str(LONG_ONLY_PAD);
                    msg.push_str("--");
                }
            }

            msg.push_str(&opt.long);
            msg.push_str(&opt.placeholder);

            let pad = max_width - (opt.long.len() + opt.placeholder.len()) + GUTTER;
            msg.push_str(&" ".repeat(pad));

            if let Some(help) = &opt.help {
                msg.push_str(help);
            }

            msg.push('\n');
        }

        Ok(msg)
    }
}
