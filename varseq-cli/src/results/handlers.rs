use std::str::FromStr;

use anyhow::{Result, anyhow};
use clap::ArgMatches;

use varseq_client::handoff::ResultHandoff;
use varseq_client::notify::StderrNotifier;
use varseq_client::store::SessionStore;
use varseq_client::utils::{print_codon_rows, print_nucleotide_rows, print_summary};
use varseq_client::view::{ActiveView, ResultView, codon_view, mutation_summary, nucleotide_view};

use super::cli::VIEW_SUMMARY;
use crate::common::open_handoff;

/// Execute `varseq results`
/// # Arguments
/// - matches: matched items from CLAP args
pub fn run_results(matches: &ArgMatches) -> Result<()> {
    let mut handoff = open_handoff(matches)?;

    if matches.get_flag("clear") {
        handoff.clear()?;
        println!("Stored analysis result cleared.");
        return Ok(());
    }

    if matches.get_flag("raw") {
        if let Some(raw) = handoff.load_raw()? {
            println!("{}", raw);
        }
        return Ok(());
    }

    let view = matches
        .get_one::<String>("view")
        .map(String::as_str)
        .unwrap_or("nucleotide");
    show_results(&handoff, Some(view))
}

/// Render a fresh results page for the given slot.
///
/// `view` is `nucleotide`, `codon` or `summary`; `None` shows the default tab.
pub fn show_results<S: SessionStore>(handoff: &ResultHandoff<S>, view: Option<&str>) -> Result<()> {
    let mut page = ResultView::new();
    page.load(handoff, &mut StderrNotifier);

    let summary = view == Some(VIEW_SUMMARY);
    if let Some(name) = view.filter(|name| *name != VIEW_SUMMARY) {
        let active = ActiveView::from_str(name).map_err(|e| anyhow!(e))?;
        page.select(active);
    }

    let Some(result) = page.result() else {
        println!("{}", page.render());
        return Ok(());
    };

    println!("Predicted Variant: {}", result.variant);
    if summary {
        print_summary(&mutation_summary(result));
        return Ok(());
    }

    println!("{}", page.active_view().title());
    match page.active_view() {
        ActiveView::Nucleotide => print_nucleotide_rows(&nucleotide_view(result)),
        ActiveView::Codon => print_codon_rows(&codon_view(result)),
    }
    Ok(())
}
