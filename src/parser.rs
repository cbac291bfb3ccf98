// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::opts::{Need, OptSet};

const OPT_PREFIX: char = '-';
const LONG_OPT_PREFIX: &str = "--";

/// Special argument that is silently consumed and used to denote the
/// end of all options; all arguments that follow are positional
/// arguments (even if they start with `-`!)
///
/// See: `getopt(3)`.
const END_OF_OPTIONS: &str = "--";

/// One row of the synthesized long option table: a long name paired
/// with its argument requirement and the matching code of the [Opt]
/// it belongs to.
///
/// [Opt]: crate::Opt
#[derive(Clone, Debug, PartialEq)]
pub(crate) struct LongSpec {
    name: String,
    need: Need,
    code: u32,
}

/// Build the short option specification string in `getopt(3)` form:
/// each short option character, followed by `:` if it requires an
/// argument or `::` if the argument is optional.
///
/// Duplicate short option characters are a configuration error.
pub(crate) fn short_spec(opts: &OptSet) -> Result<String> {
    let mut spec = String::new();
    let mut seen = HashSet::new();

    for opt in opts.iter() {
        // Long-only options never enter the short option table.
        let short = match opt.short_code() {
            Some(short) => short,
            None => continue,
        };

        if !seen.insert(short) {
            return Err(Error::DuplicateShortOpt(short));
        }

        spec.push(short);

        match opt.need {
            Need::Nothing => (),
            Need::Argument => spec.push(':'),
            Need::OptionalArgument => spec.push_str("::"),
        }
    }

    Ok(spec)
}

/// Build the long option table: one entry per registered option,
/// long-only options included.
///
/// Empty and duplicate long names are configuration errors.
pub(crate) fn long_specs(opts: &OptSet) -> Result<Vec<LongSpec>> {
    let mut specs = Vec::with_capacity(opts.len());
    let mut seen = HashSet::new();

    for opt in opts.iter() {
        if opt.long.is_empty() {
            return Err(Error::MissingLongName);
        }

        if !seen.insert(opt.long.clone()) {
            return Err(Error::DuplicateLongOpt(opt.long.clone()));
        }

        specs.push(LongSpec {
            name: opt.long.clone(),
            need: opt.need,
            code: opt.code,
        });
    }

    Ok(specs)
}

/// Look up a short option character in the specification string and
/// decode its requirement from the trailing colon count.
fn short_need(spec: &str, short: char) -> Option<Need> {
    let mut chars = spec.chars().peekable();

    while let Some(c) = chars.next() {
        let mut colons = 0;

        while chars.peek() == Some(&':') {
            chars.next();
            colons += 1;
        }

        if c == short {
            let need = match colons {
                0 => Need::Nothing,
                1 => Need::Argument,
                _ => Need::OptionalArgument,
            };

            return Some(need);
        }
    }

    None
}

/// Scans an argument vector against an [OptSet], recording presence
/// and converted values on the matched options.
///
/// The parser holds the only mutable reference to the set for the
/// duration of the parse, so no reader can observe a half-updated
/// set: a parse either runs to completion or returns an error.
///
/// # Notes
///
/// - Scanning is POSIX-style: it stops at `--` or at the first
///   non-option token, whose index is returned for the caller's own
///   positional argument handling.
/// - Options are matched by short character or long name, never by
///   position.
#[derive(Debug)]
pub struct Parser<'a> {
    opts: &'a mut OptSet,
}

impl<'a> Parser<'a> {
    /// Create a parser borrowing the specified option collection.
    pub fn new(opts: &'a mut OptSet) -> Self {
        Parser { opts }
    }

    /// Parse an argument vector.
    ///
    /// # Arguments
    ///
    /// - `argv`: the full argument vector, program name at index
    ///   zero (as returned by [crate::argv()]).
    ///
    /// # Return value
    ///
    /// The index into `argv` of the first positional argument. If
    /// the command line holds nothing but options, this is
    /// `argv.len()`.
    ///
    /// Configuration errors (duplicate or missing names, an empty
    /// set) are reported before any token is looked at.
    pub fn parse(&mut self, argv: &[String]) -> Result<usize> {
        if self.opts.is_empty() {
            return Err(Error::NoOpts);
        }

        // Synthesize the matching tables up front so that broken
        // option definitions surface before any user input is
        // processed.
        let shorts = short_spec(self.opts)?;
        let longs = long_specs(self.opts)?;

        let mut i = 1;

        while i < argv.len() {
            let token = argv[i].as_str();

            if token == END_OF_OPTIONS {
                return Ok(i + 1);
            }

            if let Some(body) = token.strip_prefix(LONG_OPT_PREFIX) {
                i = self.scan_long(body, argv, i, &longs)?;
            } else if token.len() > 1 && token.starts_with(OPT_PREFIX) {
                i = self.scan_cluster(&token[1..], argv, i, &shorts)?;
            } else {
                // First positional argument; a bare "-" counts as one.
                break;
            }
        }

        Ok(i)
    }

    /// Handle a `--name` or `--name=value` token. Returns the index
    /// of the next unconsumed token.
    fn scan_long(
        &mut self,
        body: &str,
        argv: &[String],
        i: usize,
        longs: &[LongSpec],
    ) -> Result<usize> {
        let (name, attached) = match body.split_once('=') {
            Some((name, value)) => (name, Some(value)),
            None => (body, None),
        };

        let spec = longs
            .iter()
            .find(|l| l.name == name)
            .ok_or_else(|| Error::UnknownOpt(format!("--{}", name)))?;

        let opt = self
            .opts
            .find_code_mut(spec.code)
            .ok_or_else(|| Error::UnknownOpt(format!("--{}", name)))?;

        opt.present = true;

        match spec.need {
            Need::Nothing => {
                if attached.is_some() {
                    return Err(Error::UnexpectedOptArg(format!("--{}", name)));
                }

                Ok(i + 1)
            }
            Need::Argument => {
                if let Some(value) = attached {
                    opt.set_value(value)?;
                    Ok(i + 1)
                } else if i + 1 < argv.len() {
                    opt.set_value(&argv[i + 1])?;
                    Ok(i + 2)
                } else {
                    Err(Error::MissingOptArg(format!("--{}", name)))
                }
            }
            Need::OptionalArgument => {
                // An optional argument must be attached; a bare
                // `--name` keeps the default value.
                if let Some(value) = attached {
                    opt.set_value(value)?;
                }

                Ok(i + 1)
            }
        }
    }

    /// Handle a short option token, including clusters (`-vn10` is
    /// `-v -n10`). Returns the index of the next unconsumed token.
    fn scan_cluster(
        &mut self,
        cluster: &str,
        argv: &[String],
        i: usize,
        shorts: &str,
    ) -> Result<usize> {
        let mut chars = cluster.chars();

        while let Some(short) = chars.next() {
            let need = short_need(shorts, short)
                .ok_or_else(|| Error::UnknownOpt(format!("-{}", short)))?;

            let opt = self
                .opts
                .find_code_mut(short as u32)
                .ok_or_else(|| Error::UnknownOpt(format!("-{}", short)))?;

            opt.present = true;

            match need {
                // A flag; keep scanning the cluster.
                Need::Nothing => continue,
                Need::Argument => {
                    let rest = chars.as_str();

                    return if !rest.is_empty() {
                        opt.set_value(rest)?;
                        Ok(i + 1)
                    } else if i + 1 < argv.len() {
                        opt.set_value(&argv[i + 1])?;
                        Ok(i + 2)
                    } else {
                        Err(Error::MissingOptArg(format!("-{}", short)))
                    };
                }
                Need::OptionalArgument => {
                    let rest = chars.as_str();

                    if !rest.is_empty() {
                        opt.set_value(rest)?;
                    }

                    return Ok(i + 1);
                }
            }
        }

        Ok(i + 1)
    }
}
