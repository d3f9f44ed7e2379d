use clap::{Arg, ArgAction, Command};

pub use varseq_client::consts::SAMPLE_CMD;

pub fn create_sample_cli() -> Command {
    Command::new(SAMPLE_CMD)
        .about("Write the bundled sample sequence to a FASTA file")
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .help("Destination file [default: sample_sequence.fasta]"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .action(ArgAction::SetTrue)
                .conflicts_with("output")
                .help("Print the sample instead of writing a file"),
        )
}
