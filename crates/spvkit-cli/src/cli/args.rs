//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that commands compose.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};
use spvkit_bytecode::Version;

/// Binary to read (positional, required).
pub fn binary_path_arg() -> Arg {
    Arg::new("binary_path")
        .value_name("FILE")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("SPIR-V binary file")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Write output to file (-o/--output).
pub fn output_file_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write the binary to a file instead of dumping it")
}

/// Header version (--version X.Y).
pub fn spirv_version_arg() -> Arg {
    Arg::new("spirv_version")
        .long("version")
        .value_name("X.Y")
        .default_value("1.0")
        .value_parser(|s: &str| s.parse::<Version>())
        .help("SPIR-V version written to the header")
}

/// Header generator word (--generator).
pub fn generator_arg() -> Arg {
    Arg::new("generator")
        .long("generator")
        .value_name("N")
        .default_value("0")
        .value_parser(value_parser!(u32))
        .help("Generator magic written to the header")
}

/// Skip OpName/OpMemberName (--no-debug-names).
pub fn no_debug_names_arg() -> Arg {
    Arg::new("no_debug_names")
        .long("no-debug-names")
        .action(ArgAction::SetTrue)
        .help("Omit debug names")
}

/// Output JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output JSON")
}
