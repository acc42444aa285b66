//! `schemargs` is a schema-driven command line parser for Rust.
//!
//! A program describes the flags it recognizes with a compact schema string, such as `"l,p#,d*"`.
//! `schemargs` then checks the command line against that schema, converts each flag's operand into its declared type, and hands back typed accessors.
//! When the command line doesn't fit the schema, the parser reports precisely one structured error: the first problem it found.
//!
//! `schemargs` prioritizes the following design concerns:
//! * *Compact configuration*:
//! The whole command line interface is declared in one short string.
//! * *Typed access*:
//! The user should not call any `&str -> T` conversion functions directly.
//! * *Fail fast, fail precisely*:
//! Parsing stops at the first error, which carries the offending flag and (where applicable) the offending text.
//!
//! # Usage
//! ```no_run
#![doc = include_str!("../demos/demo.rs")]
//! ```
//!
//! ```console
//! $ demo -l -p 8080 -d /var/log
//! logging: true
//! port: 8080
//! directory: /var/log
//! ratio: 0
//!
//! $ demo -lp 8080 -r 0.5
//! logging: true
//! port: 8080
//! directory:
//! ratio: 0.5
//!
//! $ demo -p eighty
//! Parse error: Argument -p expects an integer but was 'eighty'.
//! -p eighty
//!    ^
//! usage: demo -[l,p#,d*,r##]
//! ```
//!
//! # Schema
//! The schema is a comma separated list of elements.
//! Whitespace around an element is ignored, as are empty elements (ex: a trailing comma).
//! Each element is a single alphabetic identifier followed by an optional suffix which declares the kind of the flag:
//!
//! ```console
//! Suffix | Kind     | Operand                  | Getter           | Zero value
//! ----------------------------------------------------------------------------
//!        | boolean  | none                     | Args::get_bool   | false
//! *      | string   | the next token           | Args::get_string | ""
//! #      | integer  | the next token, as i32   | Args::get_int    | 0
//! ##     | double   | the next token, as f64   | Args::get_double | 0.0
//! ```
//!
//! A non-alphabetic identifier fails with [`ErrorCode::InvalidArgumentName`]; any other suffix fails with [`ErrorCode::InvalidFormat`].
//! If an identifier is declared more than once, the final declaration applies.
//!
//! # Cli Semantics
//! `schemargs` scans the Cli tokens left to right according to the following rules.
//!
//! * Only tokens beginning with `-` are scanned for flags.
//! Other tokens are ignored (positional arguments are not collected).
//! This holds for every schema, including the empty one: `Args::parse("", &["plain"])` succeeds with no flags.
//! * Each character after the `-` is one flag identifier.
//! For example, `-abc` is equivalent to `-a -b -c`.
//! * A flag which is not declared by the schema fails with [`ErrorCode::UnexpectedArgument`].
//! * Boolean flags take no operand.
//! Repeating a boolean flag is harmless.
//! * String, integer and double flags claim the next whole token as their operand.
//! This holds even within a group: `-pd 8080 /tmp` hands `8080` to `-p` and `/tmp` to `-d`.
//! * A token claimed as an operand is never scanned for flags.
//! For example, `-p -5` sets `-p` to `-5`.
//! * When no token remains for an operand, the parse fails with the kind's `Missing*` error.
//! When the operand cannot be converted, the parse fails with the kind's `Invalid*` error, carrying the operand text.
//! * The first error halts the parse; no partially parsed [`Args`] is produced.
//!
//! # Errors
//! Every failure is an [`ArgsError`].
//! Match on the variant, or use [`ArgsError::code`], [`ArgsError::argument`] and [`ArgsError::parameter`] to inspect it.
//! Its `Display` renders the canonical message:
//!
//! ```
//! use schemargs::{Args, ErrorCode};
//!
//! let error = Args::parse("x##", &["-x", "Forty two"]).unwrap_err();
//!
//! assert_eq!(error.code(), ErrorCode::InvalidDouble);
//! assert_eq!(error.argument(), 'x');
//! assert_eq!(error.parameter(), Some("Forty two"));
//! assert_eq!(error.to_string(), "Argument -x expects a double but was 'Forty two'.");
//! ```
//!
//! # Features
//! * `tracing_debug`: Emit `tracing` debug events while compiling schemas and scanning tokens.
pub use schemargs_core::*;
