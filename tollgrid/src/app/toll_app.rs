use super::TollOperation;
use clap::Parser;

/// command line tool for building toll distance matrices and toll rate tables
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct TollApp {
    #[command(subcommand)]
    pub op: TollOperation,
}
