use std::str::FromStr;

use arcstr::ArcStr;
use log::debug;

use crate::data_structs::annotation::Annotation;
use crate::data_structs::description::SequenceDescription;
use crate::data_structs::enums::AnnotationType;
use crate::data_structs::typedef::PosType;
use crate::error::{
    AnnotError,
    Result,
};

/// What [`Sequence::add`] did with a candidate annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// First annotation of its type on this sequence.
    Appended,
    /// Replaced this many overlapping annotations with worse e-values.
    Replaced(usize),
    /// Not retained.
    Discarded,
}

/// A predicted protein and the annotations retained for it.
#[derive(Debug, Clone)]
pub struct Sequence {
    length:      PosType,
    description: SequenceDescription,
    annotations: Vec<Annotation>,
}

impl Sequence {
    pub fn new(
        description: SequenceDescription,
        length: PosType,
    ) -> Self {
        Self {
            length,
            description,
            annotations: Vec::new(),
        }
    }

    /// Decodes a Prodigal header and creates an unannotated sequence.
    pub fn from_header(
        header: &str,
        length: PosType,
    ) -> Result<Self> {
        Ok(Self::new(SequenceDescription::from_str(header)?, length))
    }

    /// Returns the protein id.
    pub fn id(&self) -> &ArcStr { &self.description.seq_id }

    /// Returns the protein length in residues.
    pub fn length(&self) -> PosType { self.length }

    pub fn description(&self) -> &SequenceDescription { &self.description }

    pub fn annotations(&self) -> &[Annotation] { &self.annotations }

    pub fn annotations_of(
        &self,
        annotation_type: AnnotationType,
    ) -> impl Iterator<Item = &Annotation> {
        self.annotations
            .iter()
            .filter(move |a| a.annotation_type() == annotation_type)
    }

    /// Ids of all retained annotations, in storage order.
    pub fn all_annotations(&self) -> Vec<&str> {
        self.annotations
            .iter()
            .map(|a| a.id().as_str())
            .collect()
    }

    pub fn has_annotation(
        &self,
        annotation_id: &str,
    ) -> bool {
        self.annotations
            .iter()
            .any(|a| a.id() == annotation_id)
    }

    /// Offers a candidate annotation to this sequence.
    ///
    /// The first annotation of a type is always kept. Later candidates of
    /// the same type replace every overlapping annotation they beat on
    /// e-value (strictly). A candidate overlapping no annotation of its
    /// type is dropped, as is a candidate with an empty region. Results
    /// depend on the order candidates arrive in.
    pub fn add(
        &mut self,
        candidate: Annotation,
    ) -> Result<AddOutcome> {
        if !candidate.region().fits_in(self.length) {
            return Err(AnnotError::RegionOutOfBounds {
                seq_id: self.id().to_string(),
                start:  candidate.region().start(),
                end:    candidate.region().end(),
                length: self.length,
            });
        }

        if candidate.region().is_empty() {
            debug!("{}: empty region for {}, skipped", self.id(), candidate.id());
            return Ok(AddOutcome::Discarded);
        }

        let has_type = self
            .annotations
            .iter()
            .any(|a| a.annotation_type() == candidate.annotation_type());
        if !has_type {
            debug!(
                "{}: new {} annotation {} {}",
                self.id(),
                candidate.annotation_type(),
                candidate.id(),
                candidate.region()
            );
            self.annotations.push(candidate);
            return Ok(AddOutcome::Appended);
        }

        let mut replaced = 0;
        for existing in self.annotations.iter_mut() {
            if existing.conflicts_with(&candidate)
                && candidate.is_better_than(existing)
            {
                debug!(
                    "{}: {} (evalue {:e}) replaces {} (evalue {:e})",
                    self.description.seq_id,
                    candidate.id(),
                    candidate.evalue(),
                    existing.id(),
                    existing.evalue()
                );
                *existing = candidate.clone();
                replaced += 1;
            }
        }

        if replaced > 0 {
            Ok(AddOutcome::Replaced(replaced))
        }
        else {
            Ok(AddOutcome::Discarded)
        }
    }

    /// Per-position view of the annotations: entry `i` holds the id of the
    /// last stored annotation covering position `i`.
    pub fn seqdict(&self) -> Vec<Option<&str>> {
        let mut positions = vec![None; self.length as usize];
        for annotation in self.annotations.iter() {
            for position in annotation.region().positions() {
                positions[position] = Some(annotation.id().as_str());
            }
        }
        positions
    }

    /// Looks up the annotation at each of `positions`, keeping their order
    /// and multiplicity.
    pub fn what<I>(
        &self,
        positions: I,
    ) -> Result<Vec<Option<&str>>>
    where
        I: IntoIterator<Item = usize>, {
        let seqdict = self.seqdict();
        positions
            .into_iter()
            .map(|position| {
                seqdict.get(position).copied().ok_or_else(|| {
                    AnnotError::PositionOutOfBounds {
                        seq_id: self.id().to_string(),
                        position,
                        length: self.length,
                    }
                })
            })
            .collect()
    }
}
