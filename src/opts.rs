// Copyright (c) 2021 James O. D. Hunt.
//
// SPDX-License-Identifier: Apache-2.0
//

use std::env;

use crate::error::{Error, Result};

/// First code handed out to options registered without a short option
/// character. Codes below this value are ordinary short option
/// characters, so a synthetic code can never collide with one.
pub const SYNTHETIC_CODE_BASE: u32 = 0x100;

/// Code an [Opt] carries before registration when no short option was
/// specified.
const NO_SHORT_OPT: u32 = 0;

/// Used to specify whether an option is a "stand-alone" flag option
/// (needs no value), or whether it takes an option argument.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy)]
pub enum Need {
    /// Option is stand-alone (no argument).
    Nothing,
    /// Option needs an argument.
    Argument,
    /// Option accepts an argument, but only in attached form
    /// (`-o4` or `--opt=4`); a bare `-o` is valid and keeps the
    /// default value.
    OptionalArgument,
}

impl Default for Need {
    fn default() -> Self {
        Need::Nothing
    }
}

impl Need {
    /// Create a new default requirement for an [Opt].
    pub fn new() -> Self {
        Need::default()
    }
}

/// Typed storage for an option's value.
///
/// The variant chosen at construction time fixes the option's native
/// type: the parser converts raw command-line text into that type via
/// [Opt::set_value] and never changes the variant.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Integer option argument.
    Int(i64),
    /// Floating point option argument.
    Float(f64),
    /// Free text option argument.
    Text(String),
    /// Boolean flag.
    Flag(bool),
}

impl Value {
    /// Returns the integer value, or [None] for non-integer options.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the floating point value, or [None] for non-float options.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Returns the text value, or [None] for non-text options.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the flag value, or [None] for non-flag options.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            Value::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Convert raw text into the same variant as `self`.
    ///
    /// Conversion is locale-independent and trims surrounding
    /// whitespace. Returns [None] if the text does not convert.
    fn parsed(&self, raw: &str) -> Option<Value> {
        let text = raw.trim();

        match self {
            Value::Int(_) => text.parse::<i64>().ok().map(Value::Int),
            Value::Float(_) => text.parse::<f64>().ok().map(Value::Float),
            Value::Text(_) => Some(Value::Text(text.into())),
            Value::Flag(_) => parse_flag(text).map(Value::Flag),
        }
    }
}

/// Recognized spellings for flag values given as option arguments.
fn parse_flag(text: &str) -> Option<bool> {
    match text.to_ascii_lowercase().as_str() {
        "true" | "yes" | "1" => Some(true),
        "false" | "no" | "0" => Some(false),
        _ => None,
    }
}

/// One declared command-line option.
///
/// 1) It is used to specify how the option is to be matched
///    (short character, long name) and whether it takes an argument.
///
/// 2) To store the results of the parse for the option: the parser
///    records recognition in the `present` member and converted
///    option arguments in the `value` member.
///
/// # Notes
///
/// - All members are public for caller convenience.
/// - `Opt` instances are built once, parsed once and read afterwards;
///   `present` and `value` are overwritten, not accumulated, so a
///   re-parse needs a freshly built [OptSet].
#[derive(Clone, Debug, PartialEq)]
pub struct Opt {
    /// Matching code: the short option character code when below
    /// [SYNTHETIC_CODE_BASE], or a synthetic code assigned at
    /// registration for long-only options.
    pub code: u32,
    /// Long option name (required), matched as `--name`.
    pub long: String,
    /// Type of option (required, but defaults).
    pub need: Need,
    /// Typed value, initialized to the caller-supplied default.
    pub value: Value,
    /// Description of the option, used by the help formatter.
    pub help: Option<String>,
    /// Text describing the form of the option argument (e.g. `"=NUM"`),
    /// appended to the long name in help output.
    pub placeholder: String,

    //----------------------------------------
    // The following is set by the parser.
    //----------------------------------------
    /// Set once the option is recognized on the command line,
    /// whether or not it carried an argument.
    pub present: bool,
}

impl Default for Opt {
    fn default() -> Self {
        Opt {
            code: NO_SHORT_OPT,
            long: String::new(),
            need: Need::default(),
            value: Value::Flag(false),
            help: None,
            placeholder: String::new(),
            present: false,
        }
    }
}

impl Opt {
    /// Create a new option with the specified long name.
    ///
    /// Without further calls the option is a flag with no short
    /// option character; a synthetic code is assigned when the option
    /// is added to an [OptSet].
    pub fn new(long: &str) -> Self {
        Opt {
            long: long.into(),
            ..Opt::default()
        }
    }

    /// Specify the short option character for the option.
    pub fn short(self, short: char) -> Self {
        Opt {
            code: short as u32,
            ..self
        }
    }

    /// Specify the requirement for the option.
    pub fn needs(self, need: Need) -> Self {
        Opt { need, ..self }
    }

    /// Specify the default value (and with it the native type) for
    /// the option argument.
    pub fn default_value(self, value: Value) -> Self {
        Opt { value, ..self }
    }

    /// Specify the help text for the option.
    pub fn help(self, help: &str) -> Self {
        Opt {
            help: Some(help.into()),
            ..self
        }
    }

    /// Specify the option argument placeholder shown in help output.
    pub fn placeholder(self, placeholder: &str) -> Self {
        Opt {
            placeholder: placeholder.into(),
            ..self
        }
    }

    /// The short option character, or [None] for long-only options.
    pub fn short_code(&self) -> Option<char> {
        if self.code != NO_SHORT_OPT && self.code < SYNTHETIC_CODE_BASE {
            std::char::from_u32(self.code)
        } else {
            None
        }
    }

    /// Whether the option was seen on the command line.
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Convert `raw` into the option's native type and store it.
    ///
    /// On conversion failure the stored value is left unchanged and
    /// [Error::InvalidOptValue] is returned naming the option and the
    /// offending text.
    pub fn set_value(&mut self, raw: &str) -> Result<()> {
        match self.value.parsed(raw) {
            Some(value) => {
                self.value = value;
                Ok(())
            }
            None => Err(Error::InvalidOptValue {
                option: self.long.clone(),
                value: raw.into(),
            }),
        }
    }
}

/// Get the full list of command-line arguments specified to the
/// program, program name first.
///
/// # Note
///
/// Used with [crate::Parser::parse], which expects the program name
/// at index zero so that the returned positional index matches the
/// real argument vector.
pub fn argv() -> Vec<String> {
    env::args().collect()
}

/// An ordered collection of options.
///
/// Order determines help output order only; matching is by short
/// character or long name, never by position.
///
/// The set owns the synthetic code allocator for long-only options,
/// so independently built sets never influence each other.
#[derive(Clone, Debug, PartialEq)]
pub struct OptSet {
    entries: Vec<Opt>,
    next_code: u32,
}

impl OptSet {
    /// Create a new, empty option collection.
    pub fn new() -> Self {
        OptSet {
            entries: Vec::new(),
            next_code: SYNTHETIC_CODE_BASE,
        }
    }

    /// Returns the number of registered options.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no options have been registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Register a single option.
    ///
    /// An option built without a short character is assigned the next
    /// synthetic code (starting at [SYNTHETIC_CODE_BASE]) so that it
    /// can share the matching table with true short options without
    /// ever colliding with one.
    pub fn add(&mut self, mut opt: Opt) {
        if opt.code == NO_SHORT_OPT {
            opt.code = self.next_code;
            self.next_code += 1;
        }

        self.entries.push(opt);
    }

    /// Convenience method to add a set of options in one go.
    ///
    /// # Note
    ///
    /// Used by the test code.
    #[allow(dead_code)]
    pub(crate) fn set(&mut self, opts: Vec<Opt>) {
        self.entries.clear();

        for opt in opts {
            self.add(opt);
        }
    }

    /// Returns the option with the specified long name.
    pub fn get(&self, long: &str) -> Option<&Opt> {
        self.entries.iter().find(|o| o.long == long)
    }

    /// Returns the option with the specified short character.
    pub fn get_short(&self, short: char) -> Option<&Opt> {
        self.entries.iter().find(|o| o.code == short as u32)
    }

    /// Returns the option with the specified matching code.
    pub(crate) fn find_code_mut(&mut self, code: u32) -> Option<&mut Opt> {
        self.entries.iter_mut().find(|o| o.code == code)
    }

    /// Iterate the options in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Opt> {
        self.entries.iter()
    }
}

impl Default for OptSet {
    /// Create a default option collection.
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_need() {
        let n1 = Need::new();
        let n2 = Need::default();

        assert_eq!(n1, Need::Nothing);
        assert_eq!(n1, n2);
    }

    #[test]
    fn test_value_accessors() {
        let int = Value::Int(42);
        let float = Value::Float(3.141);
        let text = Value::Text("foo".into());
        let flag = Value::Flag(true);

        assert_eq!(int.as_int(), Some(42));
        assert_eq!(int.as_float(), None);
        assert_eq!(int.as_text(), None);
        assert_eq!(int.as_flag(), None);

        assert_eq!(float.as_float(), Some(3.141));
        assert_eq!(float.as_int(), None);

        assert_eq!(text.as_text(), Some("foo"));
        assert_eq!(text.as_flag(), None);

        assert_eq!(flag.as_flag(), Some(true));
        assert_eq!(flag.as_int(), None);
    }

    #[test]
    fn test_set_value() {
        #[derive(Debug)]
        struct TestData<'a> {
            default: Value,
            raw: &'a str,
            result: Option<Value>,
        }

        let tests = &[
            TestData {
                default: Value::Int(10),
                raw: "42",
                result: Some(Value::Int(42)),
            },
            TestData {
                default: Value::Int(10),
                raw: " 42 ",
                result: Some(Value::Int(42)),
            },
            TestData {
                default: Value::Int(10),
                raw: "-7",
                result: Some(Value::Int(-7)),
            },
            TestData {
                default: Value::Int(10),
                raw: "abc",
                result: None,
            },
            TestData {
                default: Value::Int(10),
                raw: "4.2",
                result: None,
            },
            TestData {
                default: Value::Int(10),
                raw: "",
                result: None,
            },
            //------------------------------
            TestData {
                default: Value::Float(3.141),
                raw: "2.718",
                result: Some(Value::Float(2.718)),
            },
            TestData {
                default: Value::Float(3.141),
                raw: "-1",
                result: Some(Value::Float(-1.0)),
            },
            TestData {
                default: Value::Float(3.141),
                raw: "x",
                result: None,
            },
            //------------------------------
            TestData {
                default: Value::Text("default".into()),
                raw: "hello world",
                result: Some(Value::Text("hello world".into())),
            },
            TestData {
                default: Value::Text("default".into()),
                raw: "  padded  ",
                result: Some(Value::Text("padded".into())),
            },
            //------------------------------
            TestData {
                default: Value::Flag(false),
                raw: "true",
                result: Some(Value::Flag(true)),
            },
            TestData {
                default: Value::Flag(false),
                raw: "YES",
                result: Some(Value::Flag(true)),
            },
            TestData {
                default: Value::Flag(true),
                raw: "0",
                result: Some(Value::Flag(false)),
            },
            TestData {
                default: Value::Flag(false),
                raw: "maybe",
                result: None,
            },
        ];

        for (i, d) in tests.iter().enumerate() {
            let msg = format!("test[{}]: {:?}", i, d);

            let mut opt = Opt::new("opt")
                .needs(Need::Argument)
                .default_value(d.default.clone());

            let result = opt.set_value(d.raw);

            match &d.result {
                Some(value) => {
                    assert!(result.is_ok(), "{}", msg);
                    assert_eq!(&opt.value, value, "{}", msg);
                }
                None => {
                    let expected = Err(Error::InvalidOptValue {
                        option: "opt".into(),
                        value: d.raw.into(),
                    });

                    assert_eq!(result, expected, "{}", msg);

                    // The failed conversion must not disturb the
                    // stored value.
                    assert_eq!(opt.value, d.default, "{}", msg);
                }
            }
        }
    }

    #[test]
    fn test_opt_builder() {
        let default_opt = Opt::default();

        let expected_default = Opt {
            code: 0,
            long: "".into(),
            need: Need::Nothing,
            value: Value::Flag(false),
            help: None,
            placeholder: "".into(),
            present: false,
        };

        assert_eq!(default_opt, expected_default);

        //--------------------

        let opt = Opt::new("number")
            .short('n')
            .needs(Need::Argument)
            .default_value(Value::Int(10))
            .placeholder("=NUM")
            .help("Number of lines");

        assert_eq!(opt.code, 'n' as u32);
        assert_eq!(opt.long, "number");
        assert_eq!(opt.need, Need::Argument);
        assert_eq!(opt.value, Value::Int(10));
        assert_eq!(opt.placeholder, "=NUM");
        assert_eq!(opt.help, Some("Number of lines".into()));
        assert_eq!(opt.short_code(), Some('n'));
        assert!(!opt.is_present());

        //--------------------

        let long_only = Opt::new("long-only");

        assert_eq!(long_only.code, 0);
        assert_eq!(long_only.short_code(), None);
    }

    #[test]
    fn test_optset() {
        let new_opts = OptSet::new();
        let def_opts = OptSet::default();

        assert_eq!(new_opts, def_opts);

        let mut opts = OptSet::new();

        assert_eq!(opts.len(), 0);
        assert!(opts.is_empty());
        assert_eq!(opts.get("number"), None);
        assert_eq!(opts.get_short('n'), None);

        opts.add(
            Opt::new("number")
                .short('n')
                .needs(Need::Argument)
                .default_value(Value::Int(10)),
        );
        opts.add(Opt::new("version").short('v'));

        assert_eq!(opts.len(), 2);
        assert!(!opts.is_empty());

        let number = opts.get("number").unwrap();
        assert_eq!(number.short_code(), Some('n'));
        assert_eq!(number.value.as_int(), Some(10));

        let version = opts.get_short('v').unwrap();
        assert_eq!(version.long, "version");

        assert_eq!(opts.get("nope"), None);
        assert_eq!(opts.get_short('z'), None);
    }

    #[test]
    fn test_optset_synthetic_codes() {
        let mut opts = OptSet::new();

        opts.add(Opt::new("alpha"));
        opts.add(Opt::new("beta").short('b'));
        opts.add(Opt::new("gamma"));

        let alpha = opts.get("alpha").unwrap();
        let beta = opts.get("beta").unwrap();
        let gamma = opts.get("gamma").unwrap();

        assert_eq!(alpha.code, SYNTHETIC_CODE_BASE);
        assert_eq!(beta.code, 'b' as u32);
        assert_eq!(gamma.code, SYNTHETIC_CODE_BASE + 1);

        assert_eq!(alpha.short_code(), None);
        assert_eq!(gamma.short_code(), None);

        // The allocator belongs to the set, so a second set starts
        // afresh.
        let mut other = OptSet::new();
        other.add(Opt::new("delta"));

        assert_eq!(other.get("delta").unwrap().code, SYNTHETIC_CODE_BASE);
    }

    #[test]
    fn test_argv() {
        let argv_result = argv();

        let args: Vec<String> = env::args().collect();

        assert_eq!(argv_result, args);
        assert!(!argv_result.is_empty());
    }
}
