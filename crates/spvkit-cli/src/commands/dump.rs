use std::path::PathBuf;

use spvkit_bytecode::dump;
use spvkit_core::Palette;

use super::{exit_on_error, load_binary};

pub struct DumpArgs {
    pub binary_path: PathBuf,
    pub color: bool,
}

pub fn run(args: DumpArgs) {
    let binary = exit_on_error(load_binary(&args.binary_path));
    print!("{}", dump(&binary, Palette::new(args.color)));
}
