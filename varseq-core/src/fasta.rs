//! FASTA helpers and the bundled sample sequence.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// File name offered when the sample is downloaded.
pub const SAMPLE_FILENAME: &str = "sample_sequence.fasta";

/// Fixed SARS-CoV-2 fragment used for quick-fill and download.
pub const SAMPLE_FASTA: &str = ">Sample_SARS_CoV_2
ATTAAAGGTTTATACCTTCCCAGGTAACAAACCAACCAACTTTCGATCTCTTGTAGATCT
GTTCTCTAAACGAACTTTAAAATCTGTGTGGCTGTCACTCGGCTGCATGCTTAGTGCACT
CACGCAGTATAATTAATAACTAATTACTGTCGTTGACAGGACACGAGTAACTCGTCTATC";

///
/// Concatenate every non-header line into a single run of bases
///
pub fn residues(text: &str) -> String {
    text.trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.starts_with('>'))
        .collect()
}

/// Write the sample sequence to `path`.
pub fn write_sample<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    let mut file = File::create(path)
        .with_context(|| format!("Failed to create sample file {}", path.display()))?;
    file.write_all(SAMPLE_FASTA.as_bytes())?;
    Ok(())
}
