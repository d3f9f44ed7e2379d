use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use log::info;

use varseq_core::fasta::{SAMPLE_FASTA, SAMPLE_FILENAME, write_sample};

pub fn run_sample(matches: &ArgMatches) -> Result<()> {
    if matches.get_flag("stdout") {
        println!("{}", SAMPLE_FASTA);
        return Ok(());
    }

    let output = matches
        .get_one::<String>("output")
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(SAMPLE_FILENAME));

    write_sample(&output)?;
    info!("Sample sequence written to {}", output.display());
    Ok(())
}
