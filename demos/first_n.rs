// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Example program that prints the first NUM lines of a file,
//! `head(1)`-style, with a generated help message.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::process::exit;

use cmdopts::{argv, HelpMessage, Need, Opt, OptSet, Parser, Value};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let argv = argv();

    let mut opts = OptSet::new();

    opts.add(
        Opt::new("number")
            .short('n')
            .needs(Need::Argument)
            .default_value(Value::Int(10))
            .placeholder("=NUM")
            .help("Number of lines"),
    );
    opts.add(Opt::new("version").short('v').help("Version"));
    opts.add(Opt::new("help").short('h').help("Help"));

    let first_posn = Parser::new(&mut opts).parse(&argv)?;

    if opts.get("help").unwrap().is_present() {
        let msg = HelpMessage::new(&argv[0])
            .usage("[OPTION]... FILE")
            .usage("--help")
            .description("Print the first NUM lines of FILE.")
            .example("-n 10 file.txt")
            .example("--number=10 file.txt")
            .example("-vn10 file.txt")
            .render(&opts)?;

        print!("{}", msg);
        return Ok(());
    }

    if opts.get("version").unwrap().is_present() {
        println!("version = 1.0");
        return Ok(());
    }

    let number = opts.get("number").unwrap().value.as_int().unwrap();

    let path = match argv.get(first_posn) {
        Some(path) => path,
        None => {
            eprintln!("ERROR: no input file specified (try --help)");
            exit(1);
        }
    };

    let file = File::open(path)?;

    for line in BufReader::new(file).lines().take(number.max(0) as usize) {
        println!("{}", line?);
    }

    Ok(())
}
