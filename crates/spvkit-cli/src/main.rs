mod cli;
mod commands;
mod logging;

use cli::{CheckParams, DemoParams, DumpParams, InfoParams, build_cli};

fn main() {
    logging::init_logging();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("demo", m)) => {
            let params = DemoParams::from_matches(m);
            commands::demo::run(params.into());
        }
        Some(("dump", m)) => {
            let params = DumpParams::from_matches(m);
            commands::dump::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            commands::check::run(params.into());
        }
        Some(("info", m)) => {
            let params = InfoParams::from_matches(m);
            commands::info::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
