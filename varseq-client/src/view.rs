//! Results page: reads the handed-off result once and derives the two
//! mutation views shown as tabs.

use std::fmt::{self, Display, Write};
use std::str::FromStr;

use log::{info, warn};
use varseq_core::errors::AnalysisError;
use varseq_core::models::{AnalysisResult, CodonMutation, MutationType, NucleotideMutation};

use super::handoff::ResultHandoff;
use super::notify::{MSG_MALFORMED, Notification, Notifier};
use super::store::SessionStore;

pub const EMPTY_TITLE: &str = "No Analysis Data";
pub const EMPTY_HINT: &str = "Please upload a sequence or file to analyze.";

/// Lifecycle of a results page. `Empty` and `Loaded` are terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewState {
    Loading,
    Empty,
    Loaded(AnalysisResult),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Nucleotide,
    Codon,
}

impl ActiveView {
    pub fn title(&self) -> &'static str {
        match self {
            ActiveView::Nucleotide => "Nucleotide Mutations",
            ActiveView::Codon => "Codon Mutations",
        }
    }
}

impl FromStr for ActiveView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "nucleotide" => Ok(ActiveView::Nucleotide),
            "codon" => Ok(ActiveView::Codon),
            _ => Err(format!("Invalid view: {}", s)),
        }
    }
}

impl Display for ActiveView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActiveView::Nucleotide => write!(f, "nucleotide"),
            ActiveView::Codon => write!(f, "codon"),
        }
    }
}

///
/// One entry of the nucleotide tab
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NucleotideRow<'a> {
    pub index: usize,
    pub mutation: &'a NucleotideMutation,
}

impl Display for NucleotideRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mutation)
    }
}

/// Badge style of a codon entry: missense changes stand out, everything
/// else is shown muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodonStyle {
    Highlight,
    Muted,
}

impl From<&MutationType> for CodonStyle {
    fn from(mutation_type: &MutationType) -> Self {
        match mutation_type {
            MutationType::Missense => CodonStyle::Highlight,
            _ => CodonStyle::Muted,
        }
    }
}

///
/// One entry of the codon tab, tagged with its mutation class
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodonRow<'a> {
    pub index: usize,
    pub mutation: &'a CodonMutation,
    pub style: CodonStyle,
}

impl CodonRow<'_> {
    pub fn mutation_type(&self) -> &MutationType {
        &self.mutation.mutation_type
    }
}

impl Display for CodonRow<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.mutation)
    }
}

/// Counts per mutation class over one result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MutationSummary {
    pub nucleotide: usize,
    pub codon: usize,
    pub missense: usize,
    pub silent: usize,
    pub nonsense: usize,
    pub other: usize,
}

/// Nucleotide substitutions in the order the service returned them.
pub fn nucleotide_view(result: &AnalysisResult) -> Vec<NucleotideRow<'_>> {
    result
        .mutations
        .iter()
        .enumerate()
        .map(|(index, mutation)| NucleotideRow { index, mutation })
        .collect()
}

/// Codon substitutions in the order the service returned them. The mutation
/// class is taken as-is; nothing is re-sorted or de-duplicated.
pub fn codon_view(result: &AnalysisResult) -> Vec<CodonRow<'_>> {
    result
        .codon_wise_mutations
        .iter()
        .enumerate()
        .map(|(index, mutation)| CodonRow {
            index,
            mutation,
            style: CodonStyle::from(&mutation.mutation_type),
        })
        .collect()
}

pub fn mutation_summary(result: &AnalysisResult) -> MutationSummary {
    let mut summary = MutationSummary {
        nucleotide: result.mutations.len(),
        codon: result.codon_wise_mutations.len(),
        ..Default::default()
    };
    for mutation in &result.codon_wise_mutations {
        match mutation.mutation_type {
            MutationType::Missense => summary.missense += 1,
            MutationType::Silent => summary.silent += 1,
            MutationType::Nonsense => summary.nonsense += 1,
            MutationType::Other(_) => summary.other += 1,
        }
    }
    summary
}

/// A results page instance.
///
/// It starts in [`ViewState::Loading`], reads the handoff slot exactly once
/// in [`ResultView::load`], and stays in whatever state that read produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultView {
    state: ViewState,
    active: ActiveView,
}

impl Default for ResultView {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultView {
    pub fn new() -> Self {
        ResultView {
            state: ViewState::Loading,
            active: ActiveView::default(),
        }
    }

    /// Read the handoff slot and settle into `Empty` or `Loaded`.
    ///
    /// A slot holding something that is not an analysis result (for instance
    /// without `mutations` or `codon_wise_mutations`) degrades to `Empty` and
    /// raises an error notification. Calls after the first are ignored.
    pub fn load<S: SessionStore>(
        &mut self,
        handoff: &ResultHandoff<S>,
        notifier: &mut dyn Notifier,
    ) -> &ViewState {
        if self.state != ViewState::Loading {
            return &self.state;
        }

        self.state = match handoff.inspect::<AnalysisResult>() {
            Ok(Some(result)) => {
                info!(
                    "Loaded {} result: {} nucleotide, {} codon mutations",
                    result.variant,
                    result.mutations.len(),
                    result.codon_wise_mutations.len()
                );
                ViewState::Loaded(result)
            }
            Ok(None) => ViewState::Empty,
            Err(AnalysisError::MalformedResult(reason)) => {
                warn!("Stored analysis result is malformed: {}", reason);
                notifier.notify(Notification::error(MSG_MALFORMED));
                ViewState::Empty
            }
            Err(e) => {
                warn!("Can't read stored analysis result: {}", e);
                notifier.notify(Notification::error(&e.to_string()));
                ViewState::Empty
            }
        };
        &self.state
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn result(&self) -> Option<&AnalysisResult> {
        match &self.state {
            ViewState::Loaded(result) => Some(result),
            _ => None,
        }
    }

    pub fn active_view(&self) -> ActiveView {
        self.active
    }

    /// Switch tabs. Only possible once a result is loaded.
    ///
    /// # Returns
    /// - true if the selection was applied
    pub fn select(&mut self, view: ActiveView) -> bool {
        if self.result().is_none() {
            return false;
        }
        self.active = view;
        true
    }

    /// Text of the page in its current state.
    pub fn render(&self) -> String {
        let result = match &self.state {
            ViewState::Loading => return "Loading analysis results...".to_string(),
            ViewState::Empty => return format!("{}\n{}", EMPTY_TITLE, EMPTY_HINT),
            ViewState::Loaded(result) => result,
        };

        let mut out = format!("Predicted Variant: {}\n", result.variant);
        let rows: Vec<String> = match self.active {
            ActiveView::Nucleotide => nucleotide_view(result)
                .iter()
                .map(|row| row.to_string())
                .collect(),
            ActiveView::Codon => codon_view(result).iter().map(|row| row.to_string()).collect(),
        };

        let _ = writeln!(out, "{} ({})", self.active.title(), rows.len());
        for row in rows {
            let _ = writeln!(out, "{}", row);
        }
        out
    }
}
