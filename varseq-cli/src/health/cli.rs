use clap::Command;

pub use varseq_client::consts::HEALTH_CMD;

use crate::common::api_arg;

pub fn create_health_cli() -> Command {
    Command::new(HEALTH_CMD)
        .about("Check that the prediction service is reachable")
        .arg(api_arg())
}
