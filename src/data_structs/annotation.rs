use arcstr::ArcStr;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::AnnotationType;
use crate::data_structs::region::Region;
use crate::data_structs::typedef::EvalueType;

/// A single accepted search hit bound to a region of a protein.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    id:              ArcStr,
    annotation_type: AnnotationType,
    evalue:          EvalueType,
    region:          Region,
}

impl Annotation {
    pub fn new<S: Into<ArcStr>>(
        id: S,
        annotation_type: AnnotationType,
        evalue: EvalueType,
        region: Region,
    ) -> Self {
        Self {
            id: id.into(),
            annotation_type,
            evalue,
            region,
        }
    }

    /// Returns the annotation accession (e.g. `K00001`, `PF00001.21`).
    pub fn id(&self) -> &ArcStr { &self.id }

    pub fn annotation_type(&self) -> AnnotationType { self.annotation_type }

    pub fn evalue(&self) -> EvalueType { self.evalue }

    pub fn region(&self) -> &Region { &self.region }

    /// Returns `true` if `self` should supersede `other`: strictly lower
    /// e-value. Ties keep the existing annotation.
    pub fn is_better_than(
        &self,
        other: &Self,
    ) -> bool {
        self.evalue < other.evalue
    }

    /// Same annotation type and at least one shared position.
    pub fn conflicts_with(
        &self,
        other: &Self,
    ) -> bool {
        self.annotation_type == other.annotation_type
            && self.region.overlaps(&other.region)
    }
}
