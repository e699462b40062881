//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs are populated from clap matches
//! - `Into<*Args>` impls bridge dispatch to the command handlers

use std::path::PathBuf;

use clap::ArgMatches;
use spvkit_bytecode::Version;

use super::ColorChoice;
use crate::commands::check::CheckArgs;
use crate::commands::demo::DemoArgs;
use crate::commands::dump::DumpArgs;
use crate::commands::info::InfoArgs;

pub struct DemoParams {
    pub output: Option<PathBuf>,
    pub version: Version,
    pub generator: u32,
    pub debug_names: bool,
    pub color: ColorChoice,
}

impl DemoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            output: m.get_one::<PathBuf>("output").cloned(),
            version: m
                .get_one::<Version>("spirv_version")
                .copied()
                .unwrap_or_default(),
            generator: m.get_one::<u32>("generator").copied().unwrap_or(0),
            debug_names: !m.get_flag("no_debug_names"),
            color: parse_color(m),
        }
    }
}

impl From<DemoParams> for DemoArgs {
    fn from(p: DemoParams) -> Self {
        Self {
            output: p.output,
            version: p.version,
            generator: p.generator,
            debug_names: p.debug_names,
            color: p.color.should_colorize(),
        }
    }
}

pub struct DumpParams {
    pub binary_path: PathBuf,
    pub color: ColorChoice,
}

impl DumpParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            binary_path: binary_path(m),
            color: parse_color(m),
        }
    }
}

impl From<DumpParams> for DumpArgs {
    fn from(p: DumpParams) -> Self {
        Self {
            binary_path: p.binary_path,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub binary_path: PathBuf,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            binary_path: binary_path(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            binary_path: p.binary_path,
        }
    }
}

pub struct InfoParams {
    pub binary_path: PathBuf,
    pub json: bool,
}

impl InfoParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            binary_path: binary_path(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<InfoParams> for InfoArgs {
    fn from(p: InfoParams) -> Self {
        Self {
            binary_path: p.binary_path,
            json: p.json,
        }
    }
}

/// Required positional; clap rejects the command before dispatch when it
/// is missing.
fn binary_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("binary_path")
        .cloned()
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
