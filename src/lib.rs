//! Functional annotation of predicted protein sets.
//!
//! A [`Genome`](data_structs::Genome) is built from a Prodigal protein FASTA
//! file and annotated from sequence-search results: pairwise alignment
//! tables for KO and COG, hmmsearch domain tables for PFAM and TIGRFAM.
//! Overlapping hits of the same annotation type are resolved per protein in
//! favour of the lowest e-value.
//!
//! ```no_run
//! use protannot::prelude::*;
//!
//! # fn main() -> protannot::error::Result<()> {
//! let mut genome = Genome::from_path("genome.faa")?;
//! let config = AnnotationConfig::default();
//! genome.add("genome_ko.tsv", AnnotationType::KO, &config)?;
//! genome.add("genome_pfam.domtbl", AnnotationType::PFAM, &config)?;
//!
//! for sequence in genome.ordered_sequences() {
//!     println!("{}\t{}", sequence.id(), sequence.all_annotations().join(","));
//! }
//! # Ok(())
//! # }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod utils;
