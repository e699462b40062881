//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("spvkit")
        .about("Assemble, inspect and validate SPIR-V modules")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(demo_command())
        .subcommand(dump_command())
        .subcommand(check_command())
        .subcommand(info_command())
}

/// Assemble the built-in compute shader.
pub fn demo_command() -> Command {
    Command::new("demo")
        .about("Assemble a built-in compute shader")
        .after_help(
            r#"EXAMPLES:
  spvkit demo                          # dump the assembled module
  spvkit demo -o fill.spv              # write the binary
  spvkit demo --version 1.3 -o a.spv   # target SPIR-V 1.3
  spvkit demo --no-debug-names         # strip OpName/OpMemberName"#,
        )
        .arg(output_file_arg())
        .arg(spirv_version_arg())
        .arg(generator_arg())
        .arg(no_debug_names_arg())
        .arg(color_arg())
}

/// Disassemble a binary.
pub fn dump_command() -> Command {
    Command::new("dump")
        .about("Show a binary as annotated instructions")
        .after_help(
            r#"EXAMPLES:
  spvkit dump shader.spv
  spvkit dump shader.spv --color never | less"#,
        )
        .arg(binary_path_arg())
        .arg(color_arg())
}

/// Validate header and section order.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate a binary's header and section order")
        .after_help(
            r#"EXAMPLES:
  spvkit check shader.spv             # silent on success, exit 1 on failure"#,
        )
        .arg(binary_path_arg())
}

/// Summarize a binary.
pub fn info_command() -> Command {
    Command::new("info")
        .about("Show header fields and per-section instruction counts")
        .after_help(
            r#"EXAMPLES:
  spvkit info shader.spv
  spvkit info shader.spv --json"#,
        )
        .arg(binary_path_arg())
        .arg(json_arg())
}
