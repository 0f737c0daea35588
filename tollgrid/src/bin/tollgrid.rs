//! command line runner for the toll distance and rate stages. see `tollgrid --help`.
use clap::Parser;
use tollgrid::app::TollApp;

fn main() {
    env_logger::init();
    let args = TollApp::parse();
    if let Err(e) = args.op.run() {
        log::error!("{e}");
        std::process::exit(1);
    }
}
