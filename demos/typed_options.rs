// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

//! Example program exercising every option value type: integer,
//! text, float, optional argument and long-only options.

use cmdopts::{argv, HelpMessage, Need, Opt, OptSet, Parser, Result, Value};

fn main() -> Result<()> {
    let argv = argv();

    let mut opts = OptSet::new();

    opts.add(
        Opt::new("number")
            .short('n')
            .needs(Need::Argument)
            .default_value(Value::Int(0))
            .placeholder("=NUM")
            .help("An integer value"),
    );
    opts.add(
        Opt::new("string")
            .short('s')
            .needs(Need::Argument)
            .default_value(Value::Text("default".into()))
            .placeholder("=STR")
            .help("A text value"),
    );
    opts.add(
        Opt::new("double")
            .short('d')
            .needs(Need::Argument)
            .default_value(Value::Float(3.141))
            .placeholder("=NUM")
            .help("A floating point value"),
    );
    opts.add(
        Opt::new("optional")
            .short('o')
            .needs(Need::OptionalArgument)
            .default_value(Value::Int(1))
            .placeholder("[=NUM]")
            .help("An optional integer value"),
    );
    opts.add(
        Opt::new("long-only")
            .needs(Need::Argument)
            .default_value(Value::Int(0))
            .placeholder("=NUM")
            .help("An integer value without a short option"),
    );
    opts.add(Opt::new("version").short('v').help("Version"));
    opts.add(Opt::new("help").short('h').help("Help"));

    let first_posn = Parser::new(&mut opts).parse(&argv)?;

    if opts.get("help").unwrap().is_present() {
        let msg = HelpMessage::new(&argv[0])
            .usage("[OPTION]...")
            .usage("--help")
            .description("Test harness for the cmdopts option types.")
            .example("-n 10 -s string --double=3.141 -o4")
            .example("-vn10")
            .render(&opts)?;

        print!("{}", msg);
        return Ok(());
    }

    println!(
        "number = {}",
        opts.get("number").unwrap().value.as_int().unwrap()
    );
    println!(
        "string = {}",
        opts.get("string").unwrap().value.as_text().unwrap()
    );
    println!(
        "double = {}",
        opts.get("double").unwrap().value.as_float().unwrap()
    );
    println!(
        "optional = {}",
        opts.get("optional").unwrap().value.as_int().unwrap()
    );
    println!(
        "long-only = {}",
        opts.get("long-only").unwrap().value.as_int().unwrap()
    );

    if opts.get("version").unwrap().is_present() {
        println!("version = 1.0");
    }

    println!("positional arguments: {:?}", &argv[first_posn..]);

    Ok(())
}
