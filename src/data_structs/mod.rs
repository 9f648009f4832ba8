//! Record model of an annotated genome.
//!
//! - [`Genome`]: all predicted proteins of one input file, in file order.
//! - [`Sequence`]: one protein, its decoded Prodigal header
//!   ([`SequenceDescription`]) and the annotations retained for it. Owns the
//!   overlap resolution step, [`Sequence::add`].
//! - [`Annotation`]: an accepted hit bound to a [`Region`] of its protein.
//! - Enumerations: [`AnnotationType`], [`SearchTool`], [`Strand`] and
//!   [`CoverageMode`].

pub mod annotation;
pub mod description;
pub mod enums;
pub mod genome;
pub mod region;
pub mod sequence;
pub mod typedef;

pub use annotation::Annotation;
pub use description::SequenceDescription;
pub use enums::{
    AnnotationType,
    CoverageMode,
    SearchTool,
    Strand,
};
pub use genome::{
    AddSummary,
    Genome,
};
pub use region::Region;
pub use sequence::{
    AddOutcome,
    Sequence,
};
