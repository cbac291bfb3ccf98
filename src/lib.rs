// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

#![deny(missing_docs)]
#![forbid(unsafe_code)]

//! Simple crate for parsing POSIX/GNU-style command-line options.
//!
//! If you want lots of extra features (sub-commands, derive macros,
//! shell completion), you should consider the excellent
//! [`clap`](https://crates.io/crates/clap) crate instead.
//!
//! ---
//!
//! Table of contents:
//!
//! * [Overview](#overview)
//! * [Quickstart](#quickstart)
//! * [Example](#example)
//! * [Terminology](#terminology)
//! * [Summary of features and behaviour](#summary-of-features-and-behaviour)
//! * [Limitations](#limitations)
//!
//! ---
//!
//! # Overview
//!
//! This crate parses command-line arguments the way `getopt_long(3)`
//! does: you declare each recognized option once (short character,
//! long name, argument requirement, typed default value, help text)
//! and hand the collection to a parser, which walks the argument
//! vector, records which options appeared and converts their
//! arguments into each option's native type. The same collection can
//! be rendered into a column-aligned help message.
//!
//! # Quickstart
//!
//! 1. Create an [OptSet] and add an [Opt] for each option you wish to
//!    support.
//!
//!    ```rust
//!    # use cmdopts::{Need, Opt, OptSet, Value};
//!    #
//!    let mut opts = OptSet::new();
//!
//!    // Support "-n NUM" / "--number=NUM" with a default of 10.
//!    opts.add(
//!        Opt::new("number")
//!            .short('n')
//!            .needs(Need::Argument)
//!            .default_value(Value::Int(10))
//!            .placeholder("=NUM")
//!            .help("Number of lines"),
//!    );
//!
//!    // Support the "-v" / "--version" flag.
//!    opts.add(Opt::new("version").short('v').help("Version"));
//!    ```
//!
//! 1. Create a [Parser] borrowing the set and call `parse()` with the
//!    full argument vector (program name first).
//!
//!    ```rust
//!    # use cmdopts::{Need, Opt, OptSet, Parser, Value};
//!    #
//!    # let mut opts = OptSet::new();
//!    # opts.add(
//!    #     Opt::new("number")
//!    #         .short('n')
//!    #         .needs(Need::Argument)
//!    #         .default_value(Value::Int(10)),
//!    # );
//!    #
//!    let argv: Vec<String> = vec!["prog".into(), "-n".into(), "42".into()];
//!
//!    let first_posn = Parser::new(&mut opts).parse(&argv)?;
//!    # assert_eq!(first_posn, 3);
//!    # Ok::<(), cmdopts::Error>(())
//!    ```
//!
//! 1. Inspect the options for presence and values; anything from
//!    `first_posn` onwards is yours to interpret as positional
//!    arguments.
//!
//!    ```rust
//!    # use cmdopts::{Need, Opt, OptSet, Parser, Value};
//!    #
//!    # let mut opts = OptSet::new();
//!    # opts.add(
//!    #     Opt::new("number")
//!    #         .short('n')
//!    #         .needs(Need::Argument)
//!    #         .default_value(Value::Int(10)),
//!    # );
//!    #
//!    # let argv: Vec<String> = vec!["prog".into(), "-n".into(), "42".into()];
//!    # let first_posn = Parser::new(&mut opts).parse(&argv)?;
//!    let number = opts.get("number").unwrap();
//!
//!    if number.is_present() {
//!        println!("number: {}", number.value.as_int().unwrap());
//!    }
//!    # Ok::<(), cmdopts::Error>(())
//!    ```
//!
//! # Example
//!
//! A program accepting an integer option and printing help on `-h`:
//!
//! ```rust
//! use cmdopts::{HelpMessage, Need, Opt, OptSet, Parser, Result, Value};
//!
//! fn run(argv: Vec<String>) -> Result<()> {
//!     let mut opts = OptSet::new();
//!
//!     opts.add(
//!         Opt::new("number")
//!             .short('n')
//!             .needs(Need::Argument)
//!             .default_value(Value::Int(10))
//!             .placeholder("=NUM")
//!             .help("Number of lines"),
//!     );
//!     opts.add(Opt::new("help").short('h').help("Help"));
//!
//!     let first_posn = Parser::new(&mut opts).parse(&argv)?;
//!
//!     if opts.get("help").unwrap().is_present() {
//!         let msg = HelpMessage::new(&argv[0])
//!             .usage("[OPTION]... FILE")
//!             .description("Print the first NUM lines of FILE.")
//!             .example("-n 10 file.txt")
//!             .render(&opts)?;
//!
//!         print!("{}", msg);
//!         return Ok(());
//!     }
//!
//!     println!("number: {}", opts.get("number").unwrap().value.as_int().unwrap());
//!     println!("positional arguments: {:?}", &argv[first_posn..]);
//!
//!     Ok(())
//! }
//!
//! # fn main() -> Result<()> {
//! run(vec!["prog".into(), "-n".into(), "3".into(), "file.txt".into()])
//! # }
//! ```
//!
//! For further examples, try out the programs in the `demos/`
//! directory:
//!
//! ```bash
//! $ cargo run --example first-n -- -n 3 Cargo.toml
//! $ cargo run --example typed-options -- -n 10 -s string --double=3.141 -o4
//! ```
//!
//! # Terminology
//!
//! > **Note:** For further details, see `getopt(3)`.
//!
//! - A "short option" is a single-character flag form, e.g. `-n`.
//!
//! - A "long option" is a multi-character named form, e.g. `--number`.
//!
//! - An "option argument" is the value bound to an option, either
//!   attached (`-n10`, `--number=10`) or as the following token
//!   (`-n 10`, `--number 10`).
//!
//! - "Clustering" combines multiple short options behind one dash:
//!   `-vn10` is `-v` followed by `-n` with the argument `10`.
//!
//! - A "positional argument" is a token not consumed as an option or
//!   an option argument; parsing stops at the first one (or at the
//!   special `--` token) and reports its index.
//!
//! # Summary of features and behaviour
//!
//! - Declarative option registration with typed default values
//!   (integer, float, text, flag).
//! - GNU `getopt_long(3)`-compatible syntax: `-x`, `-xVALUE`,
//!   `-x VALUE`, clustered `-xyz`, `--name`, `--name=VALUE`,
//!   `--name VALUE`, and `--` to end option processing.
//! - Options with optional arguments (attached form only, as with
//!   `getopt`'s `::` specifier).
//! - Long-only options: an [Opt] registered without a short
//!   character is assigned a synthetic matching code of `0x100` or
//!   above, outside the byte range, so it can never be matched (or
//!   collided with) as a short option.
//! - Presence and converted values are recorded on the options
//!   themselves; the index of the first positional argument is
//!   returned to the caller.
//! - All failures are ordinary [Result] values. Configuration
//!   mistakes (duplicate names, missing help text) are detected
//!   before any user input is processed and are distinguishable from
//!   user input errors (unknown option, missing or malformed
//!   argument) via [Error::is_config_error].
//! - Help output with the help text column aligned across all rows.
//!
//! # Limitations
//!
//! - Options are not permuted: parsing stops at the first positional
//!   argument (`POSIXLY_CORRECT` behaviour).
//! - Long option names must be matched exactly; abbreviations
//!   (`--num` for `--number`) are not supported.
//! - An [OptSet] records one parse: `present` and `value` are
//!   overwritten, not accumulated, so re-parsing needs a freshly
//!   built set.
//! - Option repetition counts are not recorded; a repeated option
//!   simply overwrites its previous value.

mod error;
mod help;
mod opts;
mod parser;

pub use error::{Error, Result};

pub use help::HelpMessage;
pub use opts::{argv, Need, Opt, OptSet, Value, SYNTHETIC_CODE_BASE};
pub use parser::Parser;
