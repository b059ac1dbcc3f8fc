mod cli;
mod commands;
mod logging;

use cli::{CheckParams, GenerateParams, PrimitivesParams, RenderParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            logging::init(params.verbose);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            logging::init(params.verbose);
            commands::check::run(params.into());
        }
        Some(("render", m)) => {
            let params = RenderParams::from_matches(m);
            logging::init(params.verbose);
            commands::render::run(params.into());
        }
        Some(("primitives", m)) => {
            let params = PrimitivesParams::from_matches(m);
            commands::primitives::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
