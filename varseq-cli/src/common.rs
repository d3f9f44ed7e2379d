use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Arg, ArgMatches};

use varseq_client::client::AnalysisClient;
use varseq_client::handoff::ResultHandoff;
use varseq_client::store::FileSessionStore;

pub fn api_arg() -> Arg {
    Arg::new("api")
        .long("api")
        .short('a')
        .help("Prediction service base url [env: VARSEQ_API, default: http://localhost:8000]")
}

pub fn session_args() -> [Arg; 2] {
    [
        Arg::new("cache-folder")
            .long("cache-folder")
            .short('c')
            .help("Folder holding session stores [env: VARSEQ_CACHE, default: ~/.varseq]"),
        Arg::new("session")
            .long("session")
            .help("Session id; each session has its own result slot [env: VARSEQ_SESSION]"),
    ]
}

/// Open the result slot of the session selected on the command line.
pub fn open_handoff(matches: &ArgMatches) -> Result<ResultHandoff<FileSessionStore>> {
    let cache_folder = matches.get_one::<String>("cache-folder").map(PathBuf::from);
    let session = matches.get_one::<String>("session").cloned();

    let store = FileSessionStore::open(cache_folder, session)
        .context("Failed to open the session store")?;
    Ok(ResultHandoff::new(store))
}

pub fn build_client(matches: &ArgMatches) -> Result<AnalysisClient> {
    let mut builder = AnalysisClient::builder();
    if let Some(api) = matches.get_one::<String>("api") {
        builder = builder.with_api_url(api.to_string());
    }
    builder
        .finish()
        .context("Failed to create the prediction service client")
}
