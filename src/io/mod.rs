//! Readers for the files a genome is annotated from: Prodigal protein
//! FASTA, pairwise alignment tables, hmmsearch domain tables and identifier
//! vocabularies.

pub mod blast;
pub mod compression;
pub mod domtbl;
pub mod fasta;
pub mod hits;
pub mod vocabulary;

pub use blast::{
    BlastHitReader,
    BlastRecord,
};
pub use domtbl::{
    DomtblHitReader,
    DomtblRecord,
};
pub use fasta::{
    ProteinReader,
    ProteinRecord,
};
pub use hits::{
    AnnotationConfig,
    Cutoffs,
    Hit,
    HitReader,
    HitRecord,
};
pub use vocabulary::AnnotationVocabulary;
