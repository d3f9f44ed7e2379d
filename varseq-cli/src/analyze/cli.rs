use clap::{Arg, ArgAction, ArgGroup, Command};

pub use varseq_client::consts::ANALYZE_CMD;

use crate::common::{api_arg, session_args};

pub fn create_analyze_cli() -> Command {
    Command::new(ANALYZE_CMD)
        .about("Submit a sequence or a FASTA/CSV file for variant prediction")
        .arg_required_else_help(true)
        .arg(
            Arg::new("sequence")
                .long("sequence")
                .short('s')
                .help("Sequence text, FASTA header allowed. Use '-' to read it from stdin"),
        )
        .arg(
            Arg::new("file")
                .long("file")
                .short('f')
                .num_args(1..)
                .help("File(s) to upload (.fasta or .csv). Only the first accepted file is sent"),
        )
        .arg(
            Arg::new("sample")
                .long("sample")
                .action(ArgAction::SetTrue)
                .help("Submit the bundled sample sequence"),
        )
        .group(
            ArgGroup::new("input")
                .args(["sequence", "file", "sample"])
                .required(true),
        )
        .arg(
            Arg::new("no-results")
                .long("no-results")
                .action(ArgAction::SetTrue)
                .help("Do not show the results after a successful analysis"),
        )
        .arg(api_arg())
        .args(session_args())
}
