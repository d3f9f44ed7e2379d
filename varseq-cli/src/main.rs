mod analyze;
mod common;
mod health;
mod results;
mod sample;

use anyhow::Result;
use clap::Command;
use env_logger::Env;

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "varseq";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .about("Predict the SARS-CoV-2 variant of a sequence and browse the mutations that explain it.")
        .subcommand_required(true)
        .subcommand(analyze::cli::create_analyze_cli())
        .subcommand(results::cli::create_results_cli())
        .subcommand(sample::cli::create_sample_cli())
        .subcommand(health::cli::create_health_cli())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let app = build_parser();
    let matches = app.get_matches();

    match matches.subcommand() {
        //
        // SUBMISSION
        //
        Some((analyze::cli::ANALYZE_CMD, matches)) => {
            analyze::handlers::run_analyze(matches)?;
        }

        //
        // RESULTS
        //
        Some((results::cli::RESULTS_CMD, matches)) => {
            results::handlers::run_results(matches)?;
        }

        //
        // UTILITIES
        //
        Some((sample::cli::SAMPLE_CMD, matches)) => {
            sample::handlers::run_sample(matches)?;
        }
        Some((health::cli::HEALTH_CMD, matches)) => {
            health::handlers::run_health(matches)?;
        }

        _ => unreachable!("Subcommand not found"),
    };

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_parser_is_consistent() {
        build_parser().debug_assert();
    }

    #[rstest]
    #[case(&["varseq", "analyze", "--sequence", "ACGT"])]
    #[case(&["varseq", "analyze", "--file", "a.fasta", "b.csv", "--session", "tab-1"])]
    #[case(&["varseq", "analyze", "--sample", "--api", "http://localhost:9000"])]
    #[case(&["varseq", "results", "--view", "codon"])]
    #[case(&["varseq", "results", "--clear", "--cache-folder", "/tmp/varseq"])]
    #[case(&["varseq", "sample", "--stdout"])]
    #[case(&["varseq", "health"])]
    fn test_accepts(#[case] argv: &[&str]) {
        assert!(build_parser().try_get_matches_from(argv).is_ok());
    }

    #[rstest]
    #[case(&["varseq", "analyze", "--sequence", "ACGT", "--sample"])]
    #[case(&["varseq", "results", "--view", "protein"])]
    #[case(&["varseq", "results", "--raw", "--clear"])]
    #[case(&["varseq", "sample", "--stdout", "--output", "x.fasta"])]
    fn test_rejects(#[case] argv: &[&str]) {
        assert!(build_parser().try_get_matches_from(argv).is_err());
    }
}
