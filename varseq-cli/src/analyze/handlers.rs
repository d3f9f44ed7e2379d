use std::io::{Read, stdin};
use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::ArgMatches;
use log::{debug, warn};

use varseq_client::notify::StderrNotifier;
use varseq_client::source::{UploadFile, filter_accepted};
use varseq_client::submit::{Outcome, Submitter};
use varseq_core::fasta::SAMPLE_FASTA;

use crate::common::{build_client, open_handoff};
use crate::results::handlers::show_results;

/// Execute `varseq analyze`
/// # Arguments
/// - matches: matched items from CLAP args
pub fn run_analyze(matches: &ArgMatches) -> Result<()> {
    let client = build_client(matches)?;
    let handoff = open_handoff(matches)?;
    let mut page = Submitter::new(client, handoff);
    let mut notifier = StderrNotifier;

    let outcome = if let Some(sequence) = matches.get_one::<String>("sequence") {
        let text = if sequence == "-" {
            let mut buffer = String::new();
            stdin().read_to_string(&mut buffer)?;
            buffer
        } else {
            sequence.to_string()
        };
        page.submit_text(&text, &mut notifier)
    } else if matches.get_flag("sample") {
        page.submit_text(SAMPLE_FASTA, &mut notifier)
    } else {
        let paths: Vec<PathBuf> = matches
            .get_many::<String>("file")
            .map(|values| values.map(PathBuf::from).collect())
            .unwrap_or_default();

        let files = read_upload(paths)?;
        page.drop_files(files, &mut notifier)
    };

    match outcome {
        Outcome::NavigateToResults => {
            if !matches.get_flag("no-results") {
                // the results page only knows the session, like a fresh process would
                show_results(&open_handoff(matches)?, None)?;
            }
            Ok(())
        }
        Outcome::Stay => bail!("Analysis did not complete; please resubmit"),
    }
}

/// Read the first accepted path into an upload; the other paths are never
/// opened.
pub fn read_upload(paths: Vec<PathBuf>) -> Result<Vec<UploadFile>> {
    let accepted = filter_accepted(paths.clone());
    for rejected in paths.iter().filter(|path| !accepted.contains(path)) {
        warn!("Skipping {}: only .fasta and .csv files are accepted", rejected.display());
    }
    let Some(first) = accepted.first() else {
        bail!("No .fasta or .csv file to upload");
    };
    for ignored in &accepted[1..] {
        debug!("Ignoring {}: only the first file is uploaded", ignored.display());
    }

    let file = UploadFile::from_path(first)
        .with_context(|| format!("Failed to read {}", first.display()))?;
    Ok(vec![file])
}
