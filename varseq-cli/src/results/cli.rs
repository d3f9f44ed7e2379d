use clap::{Arg, ArgAction, Command};

pub use varseq_client::consts::RESULTS_CMD;

use crate::common::session_args;

pub const VIEW_SUMMARY: &str = "summary";

pub fn create_results_cli() -> Command {
    Command::new(RESULTS_CMD)
        .about("Show the last analysis result of this session")
        .arg(
            Arg::new("view")
                .long("view")
                .short('v')
                .value_parser(["nucleotide", "codon", VIEW_SUMMARY])
                .default_value("nucleotide")
                .help("Which mutations to show"),
        )
        .arg(
            Arg::new("raw")
                .long("raw")
                .action(ArgAction::SetTrue)
                .conflicts_with("clear")
                .help("Print the stored service answer as-is"),
        )
        .arg(
            Arg::new("clear")
                .long("clear")
                .action(ArgAction::SetTrue)
                .help("Forget the stored result"),
        )
        .args(session_args())
}
