use anyhow::{Result, bail};
use clap::ArgMatches;

use crate::common::build_client;

pub fn run_health(matches: &ArgMatches) -> Result<()> {
    let client = build_client(matches)?;

    if client.health_check()? {
        println!("{}: OK", client.api_url);
        Ok(())
    } else {
        bail!("{} answered, but does not report itself healthy", client.api_url)
    }
}
