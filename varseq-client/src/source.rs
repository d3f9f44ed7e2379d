//! Normalizes pasted text and uploaded files into one outbound payload.

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use varseq_core::errors::AnalysisError;
use varseq_core::fasta::residues;

use super::consts::ACCEPTED_EXTENSIONS;

/// A file picked or dropped by the user, already read into memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFile {
    pub filename: String,
    pub content: Vec<u8>,
}

impl UploadFile {
    pub fn new(filename: &str, content: impl Into<Vec<u8>>) -> Self {
        UploadFile {
            filename: filename.to_string(),
            content: content.into(),
        }
    }

    /// Read a file from disk. Only the file name (not the full path) is sent.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, AnalysisError> {
        let path = path.as_ref();
        let content = fs::read(path)?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        Ok(UploadFile { filename, content })
    }
}

/// One submission's request body: exactly one of the two input modes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencePayload {
    Sequence { sequence: String },
    File(UploadFile),
}

impl SequencePayload {
    ///
    /// Build a payload from pasted text. The text is sent verbatim (header
    /// line included); only an empty or whitespace-only input is rejected.
    ///
    pub fn from_pasted_text(text: &str) -> Result<Self, AnalysisError> {
        if text.trim().is_empty() {
            return Err(AnalysisError::EmptyInput);
        }
        Ok(SequencePayload::Sequence {
            sequence: text.to_string(),
        })
    }

    ///
    /// Build a payload from the files of a single drop. Only the first file
    /// is used; the rest are ignored without error.
    ///
    pub fn from_files(files: Vec<UploadFile>) -> Option<Self> {
        let total = files.len();
        let first = files.into_iter().next()?;
        if total > 1 {
            debug!(
                "Using {} as the upload, ignoring {} other file(s)",
                first.filename,
                total - 1
            );
        }
        Some(SequencePayload::File(first))
    }

    /// Short label for logs and notifications.
    pub fn describe(&self) -> String {
        match self {
            SequencePayload::Sequence { sequence } => {
                format!("pasted sequence ({} bases)", residues(sequence).len())
            }
            SequencePayload::File(file) => {
                format!("file {} ({} bytes)", file.filename, file.content.len())
            }
        }
    }
}

/// Whether a file name carries one of the accepted upload extensions.
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| accepted.eq_ignore_ascii_case(ext))
        })
        .unwrap_or(false)
}

///
/// Drop boundary filter: keep only `.fasta`/`.csv` paths, in their original order
///
pub fn filter_accepted(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    paths.into_iter().filter(|path| is_accepted(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use std::io::Write;
    use varseq_core::fasta::SAMPLE_FASTA;

    #[rstest]
    #[case("")]
    #[case("   ")]
    #[case("\n\t\r\n")]
    fn test_blank_text_is_rejected(#[case] text: &str) {
        let err = SequencePayload::from_pasted_text(text).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[rstest]
    #[case("A")]
    #[case(" ACGT ")]
    #[case(">Sample\nATTCT")]
    #[case(SAMPLE_FASTA)]
    fn test_text_is_sent_verbatim(#[case] text: &str) {
        let payload = SequencePayload::from_pasted_text(text).unwrap();
        assert_eq!(
            payload,
            SequencePayload::Sequence {
                sequence: text.to_string()
            }
        );
    }

    #[rstest]
    fn test_only_first_file_is_used() {
        let files = vec![
            UploadFile::new("first.fasta", ">a\nACGT"),
            UploadFile::new("second.fasta", ">b\nTTTT"),
        ];
        let payload = SequencePayload::from_files(files).unwrap();
        assert_eq!(
            payload,
            SequencePayload::File(UploadFile::new("first.fasta", ">a\nACGT"))
        );
    }

    #[rstest]
    fn test_no_files_no_payload() {
        assert!(SequencePayload::from_files(vec![]).is_none());
    }

    #[rstest]
    fn test_filter_accepted() {
        let paths = vec![
            PathBuf::from("a.fasta"),
            PathBuf::from("b.txt"),
            PathBuf::from("c.CSV"),
            PathBuf::from("noext"),
            PathBuf::from("d.fasta.gz"),
        ];
        assert_eq!(
            filter_accepted(paths),
            vec![PathBuf::from("a.fasta"), PathBuf::from("c.CSV")]
        );
    }

    #[rstest]
    fn test_upload_from_path() -> Result<(), Box<dyn std::error::Error>> {
        let tempdir = tempfile::tempdir()?;
        let path = tempdir.path().join("reads.fasta");
        let mut file = std::fs::File::create(&path)?;
        file.write_all(SAMPLE_FASTA.as_bytes())?;

        let upload = UploadFile::from_path(&path)?;
        assert_eq!(upload.filename, "reads.fasta");
        assert_eq!(upload.content, SAMPLE_FASTA.as_bytes());
        Ok(())
    }

    #[rstest]
    fn test_describe() {
        let payload = SequencePayload::from_pasted_text(SAMPLE_FASTA).unwrap();
        assert_eq!(payload.describe(), "pasted sequence (180 bases)");
    }
}
