use super::consts::{DEFAULT_API, DEFAULT_SESSION, VARSEQ_API_ENV, VARSEQ_CACHE_ENV, VARSEQ_SESSION_ENV};
use super::view::{CodonRow, MutationSummary, NucleotideRow};
use dirs::home_dir;
use std::env;
use std::path::PathBuf;
use tabled::{Table, Tabled};

#[derive(Tabled)]
pub struct NucleotidePrint {
    position: u64,
    reference: String,
    mutated: String,
}

#[derive(Tabled)]
pub struct CodonPrint {
    position: u64,
    reference: String,
    mutated: String,
    #[tabled(rename = "type")]
    mutation_type: String,
}

#[derive(Tabled)]
pub struct SummaryPrint {
    class: &'static str,
    count: usize,
}

/// Get default cache folder from environment variable, if not available then create it in home folder
///
/// # Returns
/// - path to cache folder
pub fn get_default_cache_folder() -> PathBuf {
    if let Ok(val) = env::var(VARSEQ_CACHE_ENV) {
        PathBuf::from(val)
    } else {
        let home = env::var("HOME")
            .or_else(|_| {
                home_dir()
                    .map(|p| p.to_string_lossy().into_owned())
                    .ok_or(std::env::VarError::NotPresent)
            })
            .unwrap_or_else(|_| "/tmp".to_string());

        let mut path = PathBuf::from(home);
        path.push(".varseq/");
        path
    }
}

/// Get default prediction service url from environment variable
pub fn get_default_api() -> String {
    env::var(VARSEQ_API_ENV).unwrap_or_else(|_| DEFAULT_API.to_string())
}

/// Get the session id from environment variable
pub fn get_default_session() -> String {
    env::var(VARSEQ_SESSION_ENV)
        .ok()
        .filter(|session| !session.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_SESSION.to_string())
}

/// Expand `~` and `$VARS` in a path, leaving it untouched if expansion fails
pub fn expand_path(path: PathBuf) -> PathBuf {
    let raw = path.to_string_lossy().into_owned();
    match shellexpand::full(&raw) {
        Ok(expanded) => PathBuf::from(expanded.into_owned()),
        Err(_) => path,
    }
}

pub fn print_nucleotide_rows(rows: &[NucleotideRow<'_>]) {
    let printable: Vec<NucleotidePrint> = rows
        .iter()
        .map(|row| NucleotidePrint {
            position: row.mutation.position,
            reference: row.mutation.reference.clone(),
            mutated: row.mutation.mutated.clone(),
        })
        .collect();

    println!("{}", Table::new(printable));
}

pub fn print_codon_rows(rows: &[CodonRow<'_>]) {
    let printable: Vec<CodonPrint> = rows
        .iter()
        .map(|row| CodonPrint {
            position: row.mutation.codon_position,
            reference: row.mutation.reference_codon.clone(),
            mutated: row.mutation.mutated_codon.clone(),
            mutation_type: row.mutation_type().to_string(),
        })
        .collect();

    println!("{}", Table::new(printable));
}

pub fn print_summary(summary: &MutationSummary) {
    let printable = vec![
        SummaryPrint { class: "nucleotide", count: summary.nucleotide },
        SummaryPrint { class: "codon", count: summary.codon },
        SummaryPrint { class: "missense", count: summary.missense },
        SummaryPrint { class: "silent", count: summary.silent },
        SummaryPrint { class: "nonsense", count: summary.nonsense },
        SummaryPrint { class: "other", count: summary.other },
    ];

    println!("{}", Table::new(printable));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_expand_path_unknown_var_is_untouched() {
        let path = PathBuf::from("$VARSEQ_TEST_SURELY_UNSET_VAR/cache");
        assert_eq!(expand_path(path.clone()), path);
    }

    #[rstest]
    fn test_expand_path_plain() {
        assert_eq!(
            expand_path(PathBuf::from("/tmp/varseq")),
            PathBuf::from("/tmp/varseq")
        );
    }
}
