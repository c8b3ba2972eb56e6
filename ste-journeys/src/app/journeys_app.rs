use super::JourneysOperation;
use clap::Parser;

/// command line tool for querying and post-processing school trip directions
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct JourneysApp {
    #[command(subcommand)]
    pub op: JourneysOperation,
}
