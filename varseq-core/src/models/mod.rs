pub mod analysis;
pub mod mutation;

// re-export for cleaner imports
pub use self::analysis::{AnalysisResult, RawPrediction};
pub use self::mutation::{CodonMutation, MutationType, NucleotideMutation};
