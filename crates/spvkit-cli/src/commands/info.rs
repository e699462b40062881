use std::fmt::Write as _;
use std::path::PathBuf;

use serde::Serialize;
use spvkit_bytecode::{Binary, BinaryError, SectionKind};

use super::{CommandError, exit_on_error, load_binary};

pub struct InfoArgs {
    pub binary_path: PathBuf,
    pub json: bool,
}

/// Header fields plus per-section totals.
#[derive(Debug, Serialize)]
pub struct InfoReport {
    pub version: String,
    pub generator: u32,
    pub bound: u32,
    pub schema: u32,
    pub words: usize,
    pub sections: Vec<SectionInfo>,
}

#[derive(Debug, Serialize)]
pub struct SectionInfo {
    pub name: &'static str,
    pub instructions: usize,
    pub words: usize,
}

impl InfoReport {
    pub fn from_binary(binary: &Binary) -> Result<Self, BinaryError> {
        let mut sections: Vec<SectionInfo> = SectionKind::ALL
            .iter()
            .map(|kind| SectionInfo {
                name: kind.name(),
                instructions: 0,
                words: 0,
            })
            .collect();
        for region in binary.regions()? {
            let info = &mut sections[region.kind.index()];
            info.instructions += region.instruction_count;
            info.words += region.word_count;
        }

        let header = binary.header();
        Ok(Self {
            version: header.version.to_string(),
            generator: header.generator,
            bound: header.bound,
            schema: header.schema,
            words: binary.word_len(),
            sections,
        })
    }

    pub fn render_text(&self) -> String {
        let mut out = String::new();
        writeln!(out, "version    {}", self.version).unwrap();
        writeln!(out, "generator  {:#010x}", self.generator).unwrap();
        writeln!(out, "bound      {}", self.bound).unwrap();
        writeln!(out, "words      {}", self.words).unwrap();
        out.push('\n');
        writeln!(out, "{:<18}{:>13}{:>7}", "section", "instructions", "words").unwrap();
        for section in &self.sections {
            writeln!(
                out,
                "{:<18}{:>13}{:>7}",
                section.name, section.instructions, section.words
            )
            .unwrap();
        }
        out
    }
}

pub fn run(args: InfoArgs) {
    let output = exit_on_error(execute(&args));
    print!("{output}");
}

fn execute(args: &InfoArgs) -> Result<String, CommandError> {
    let binary = load_binary(&args.binary_path)?;
    let report = InfoReport::from_binary(&binary)?;

    if args.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        Ok(json)
    } else {
        Ok(report.render_text())
    }
}
