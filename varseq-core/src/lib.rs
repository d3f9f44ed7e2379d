//! Core data types for varseq.
//!
//! The prediction service answers every submission with an
//! [`AnalysisResult`](models::AnalysisResult): a lineage label, a list of
//! nucleotide substitutions and a list of codon substitutions classified by
//! coding effect. This crate holds those types, the shared error enum and a
//! few FASTA helpers.

pub mod errors;
pub mod fasta;
pub mod models;

pub use errors::AnalysisError;
