use std::io::Read;
use std::path::Path;

use arcstr::ArcStr;
use indexmap::map::Entry;
use indexmap::IndexMap;
use log::{
    debug,
    info,
};

use crate::data_structs::enums::{
    AnnotationType,
    SearchTool,
};
use crate::data_structs::sequence::{
    AddOutcome,
    Sequence,
};
use crate::error::{
    AnnotError,
    Result,
};
use crate::io::blast::BlastHitReader;
use crate::io::domtbl::DomtblHitReader;
use crate::io::fasta::{
    ProteinReader,
    ProteinRecord,
};
use crate::io::hits::{
    AnnotationConfig,
    Hit,
};
use crate::utils::file_stem_name;

/// Tally of one annotation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddSummary {
    /// Hits that passed the cutoffs.
    pub hits:      usize,
    pub appended:  usize,
    /// Existing annotations superseded by better hits.
    pub replaced:  usize,
    pub discarded: usize,
}

impl AddSummary {
    fn record(
        &mut self,
        outcome: AddOutcome,
    ) {
        self.hits += 1;
        match outcome {
            AddOutcome::Appended => self.appended += 1,
            AddOutcome::Replaced(n) => self.replaced += n,
            AddOutcome::Discarded => self.discarded += 1,
        }
    }
}

/// All predicted proteins of one genome and their annotations.
///
/// Proteins keep the order of the FASTA file they were read from.
#[derive(Debug, Clone)]
pub struct Genome {
    name:      String,
    sequences: IndexMap<ArcStr, Sequence>,
}

impl Genome {
    /// Reads a Prodigal protein FASTA file. The genome is named after the
    /// file stem.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let name = file_stem_name(&path);
        info!("Reading proteins of {} from {}", name, path.as_ref().display());
        Self::from_records(name, ProteinReader::from_path(path)?)
    }

    pub fn from_reader<R: Read, S: Into<String>>(
        name: S,
        reader: R,
    ) -> Result<Self> {
        Self::from_records(name, ProteinReader::new(reader))
    }

    pub fn from_records<I, S>(
        name: S,
        records: I,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = Result<ProteinRecord>>,
        S: Into<String>, {
        let mut sequences = IndexMap::new();
        for record in records {
            let record = record?;
            let sequence = Sequence::from_header(&record.header, record.length)?;
            match sequences.entry(record.id) {
                Entry::Occupied(entry) => {
                    return Err(AnnotError::format(format!(
                        "protein id '{}' occurs more than once",
                        entry.key()
                    )));
                },
                Entry::Vacant(entry) => {
                    entry.insert(sequence);
                },
            }
        }

        let genome = Self {
            name: name.into(),
            sequences,
        };
        debug!("{}: {} proteins", genome.name, genome.len());
        Ok(genome)
    }

    pub fn name(&self) -> &str { &self.name }

    /// Number of proteins.
    pub fn len(&self) -> usize { self.sequences.len() }

    pub fn is_empty(&self) -> bool { self.sequences.is_empty() }

    pub fn get(
        &self,
        seq_id: &str,
    ) -> Option<&Sequence> {
        self.sequences.get(seq_id)
    }

    /// Annotates proteins from a search result file.
    ///
    /// KO and COG annotations are read as pairwise alignment tables, PFAM
    /// and TIGRFAM as hmmsearch domain tables. Hits are applied in file
    /// order. On error, hits applied before the failing line stay in place.
    pub fn add<P: AsRef<Path>>(
        &mut self,
        path: P,
        annotation_type: AnnotationType,
        config: &AnnotationConfig,
    ) -> Result<AddSummary> {
        let path = path.as_ref();
        info!(
            "Parsing {} results for {} from {}",
            annotation_type,
            self.name,
            path.display()
        );
        let vocabulary = config.vocabulary(annotation_type)?;
        let cutoffs = config.cutoffs.clone();

        let summary = match annotation_type.search_tool() {
            SearchTool::PairwiseAlignment => {
                let reader = BlastHitReader::from_path(path, cutoffs)?
                    .with_vocabulary(vocabulary);
                self.add_hits(reader, annotation_type)?
            },
            SearchTool::DomainTable => {
                let reader = DomtblHitReader::from_path(path, cutoffs)?
                    .with_vocabulary(vocabulary);
                self.add_hits(reader, annotation_type)?
            },
        };

        info!(
            "{}: {} {} hits, {} new, {} replaced, {} discarded",
            self.name,
            summary.hits,
            annotation_type,
            summary.appended,
            summary.replaced,
            summary.discarded
        );
        Ok(summary)
    }

    /// Feeds already parsed hits into the owning sequences, in order.
    pub fn add_hits<I>(
        &mut self,
        hits: I,
        annotation_type: AnnotationType,
    ) -> Result<AddSummary>
    where
        I: IntoIterator<Item = Result<Hit>>, {
        let mut summary = AddSummary::default();
        for hit in hits {
            let (seq_id, annotation) = hit?.into_annotation(annotation_type);
            let sequence = self
                .sequences
                .get_mut(seq_id.as_str())
                .ok_or_else(|| AnnotError::UnknownSequence(seq_id.to_string()))?;
            summary.record(sequence.add(annotation)?);
        }
        Ok(summary)
    }

    /// Number of proteins (not hits) carrying `annotation_id`.
    pub fn count(
        &self,
        annotation_id: &str,
    ) -> usize {
        self.sequences
            .values()
            .filter(|s| s.has_annotation(annotation_id))
            .count()
    }

    /// Proteins in file order. Can be called any number of times.
    pub fn ordered_sequences(&self) -> impl Iterator<Item = &Sequence> + '_ {
        self.sequences.values()
    }
}
