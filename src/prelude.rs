pub use crate::data_structs::{
    AddOutcome,
    AddSummary,
    Annotation,
    AnnotationType,
    CoverageMode,
    Genome,
    Region,
    SearchTool,
    Sequence,
    SequenceDescription,
    Strand,
};
pub use crate::error::{
    AnnotError,
    Result,
};
pub use crate::io::{
    AnnotationConfig,
    AnnotationVocabulary,
    BlastHitReader,
    Cutoffs,
    DomtblHitReader,
    Hit,
};
