//! Shared machinery for search-result readers.
//!
//! A result file is read line by line; each data line is decoded into a
//! format specific record ([`HitRecord`]), checked against [`Cutoffs`] and,
//! if accepted, reduced to a [`Hit`]. [`HitReader`] drives this as a lazy,
//! single-pass iterator. The first malformed line ends ingestion with an
//! [`AnnotError::Parse`].
use std::fmt::Display;
use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
    ErrorKind,
};
use std::marker::PhantomData;
use std::path::{
    Path,
    PathBuf,
};
use std::str::FromStr;

use anyhow::Context;
use arcstr::ArcStr;
use log::debug;
use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::annotation::Annotation;
use crate::data_structs::enums::{
    AnnotationType,
    CoverageMode,
};
use crate::data_structs::region::Region;
use crate::data_structs::typedef::EvalueType;
use crate::error::{
    AnnotError,
    Result,
};
use crate::io::compression::open_input;
use crate::io::vocabulary::AnnotationVocabulary;
use crate::with_field_fn;

/// An accepted search hit: which protein, which annotation, how confident
/// and where.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub seq_id:        ArcStr,
    pub annotation_id: ArcStr,
    pub evalue:        EvalueType,
    pub region:        Region,
}

impl Hit {
    pub fn into_annotation(
        self,
        annotation_type: AnnotationType,
    ) -> (ArcStr, Annotation) {
        (
            self.seq_id,
            Annotation::new(
                self.annotation_id,
                annotation_type,
                self.evalue,
                self.region,
            ),
        )
    }
}

/// Acceptance thresholds for search hits.
///
/// For pairwise alignments `percent_aln_query` is compared against percent
/// identity and `percent_aln_reference` is unused. For domain tables the two
/// percentages are alignment coverage fractions of target and profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Cutoffs {
    pub evalue:                EvalueType,
    pub bitscore:              f64,
    pub percent_aln_query:     f64,
    pub percent_aln_reference: f64,
    pub coverage_mode:         CoverageMode,
}

impl Default for Cutoffs {
    fn default() -> Self {
        Self {
            evalue:                1e-5,
            bitscore:              0.0,
            percent_aln_query:     0.0,
            percent_aln_reference: 0.0,
            coverage_mode:         CoverageMode::default(),
        }
    }
}

impl Cutoffs {
    with_field_fn!(evalue, EvalueType);

    with_field_fn!(bitscore, f64);

    with_field_fn!(percent_aln_query, f64);

    with_field_fn!(percent_aln_reference, f64);

    with_field_fn!(coverage_mode, CoverageMode);
}

/// Settings for one annotation pass over a genome.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationConfig {
    pub cutoffs:        Cutoffs,
    /// Directory holding `<TYPE>_IDS.txt` identifier lists. When set, hits
    /// with identifiers missing from the list are skipped.
    pub vocabulary_dir: Option<PathBuf>,
}

impl AnnotationConfig {
    with_field_fn!(cutoffs, Cutoffs);

    with_field_fn!(vocabulary_dir, Option<PathBuf>);

    /// Reads a JSON configuration file. Missing keys take their defaults.
    pub fn from_json<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref()).with_context(|| {
            format!("Failed to open config {}", path.as_ref().display())
        })?;
        serde_json::from_reader(BufReader::new(file))
            .with_context(|| format!("Invalid config {}", path.as_ref().display()))
    }

    /// Loads the vocabulary for `annotation_type` if a vocabulary
    /// directory is configured.
    pub fn vocabulary(
        &self,
        annotation_type: AnnotationType,
    ) -> Result<Option<AnnotationVocabulary>> {
        self.vocabulary_dir
            .as_ref()
            .map(|dir| AnnotationVocabulary::from_dir(dir, annotation_type))
            .transpose()
    }
}

/// A decoded data line of a search result file.
pub trait HitRecord: Sized {
    /// Decodes one non-comment line. `line` is the 1-based line number used
    /// in error messages.
    fn from_line(
        text: &str,
        line: usize,
    ) -> Result<Self>;

    /// Whether the record passes every threshold.
    fn passes(
        &self,
        cutoffs: &Cutoffs,
    ) -> bool;

    fn into_hit(self) -> Hit;
}

/// Parses a required field, mapping failures to [`AnnotError::Parse`].
pub(crate) fn parse_field<T>(
    value: &str,
    field: &'static str,
    line: usize,
) -> Result<T>
where
    T: FromStr,
    T::Err: Display, {
    value.parse::<T>().map_err(|e| {
        AnnotError::Parse {
            path: None,
            line,
            field,
            reason: format!("'{}': {}", value, e),
        }
    })
}

/// Parses an e-value. Negative or NaN values are rejected.
pub(crate) fn parse_evalue(
    value: &str,
    line: usize,
) -> Result<EvalueType> {
    let evalue: EvalueType = parse_field(value, "evalue", line)?;
    if evalue.is_nan() || evalue < 0.0 {
        return Err(AnnotError::Parse {
            path: None,
            line,
            field: "evalue",
            reason: format!("'{}' is not a non-negative number", value),
        });
    }
    Ok(evalue)
}

/// Parses a sequence or profile length used as a coverage denominator.
pub(crate) fn parse_length(
    value: &str,
    field: &'static str,
    line: usize,
) -> Result<f64> {
    let length: f64 = parse_field(value, field, line)?;
    if length.is_nan() || length <= 0.0 {
        return Err(AnnotError::Parse {
            path: None,
            line,
            field,
            reason: format!("'{}' is not a positive length", value),
        });
    }
    Ok(length)
}

/// Streaming reader yielding accepted hits of record type `T`.
pub struct HitReader<R: BufRead, T: HitRecord> {
    reader:      R,
    line_buf:    String,
    line_number: usize,
    cutoffs:     Cutoffs,
    vocabulary:  Option<AnnotationVocabulary>,
    source:      Option<PathBuf>,
    _phantom:    PhantomData<T>,
}

impl<R: BufRead, T: HitRecord> HitReader<R, T> {
    pub fn new(
        reader: R,
        cutoffs: Cutoffs,
    ) -> Self {
        Self {
            reader,
            line_buf: String::with_capacity(512),
            line_number: 0,
            cutoffs,
            vocabulary: None,
            source: None,
            _phantom: PhantomData,
        }
    }

    /// Restricts accepted hits to identifiers listed in `vocabulary`.
    pub fn with_vocabulary(
        mut self,
        vocabulary: Option<AnnotationVocabulary>,
    ) -> Self {
        self.vocabulary = vocabulary;
        self
    }

    /// Returns the current line number (1-based).
    pub fn line_number(&self) -> usize { self.line_number }

    fn error_context(
        &self,
        err: AnnotError,
    ) -> AnnotError {
        match &self.source {
            Some(path) => err.with_path(path),
            None => err,
        }
    }
}

impl<T: HitRecord> HitReader<Box<dyn BufRead>, T> {
    /// Opens a result file (plain or `.gz`).
    pub fn from_path<P: AsRef<Path>>(
        path: P,
        cutoffs: Cutoffs,
    ) -> Result<Self> {
        let mut new = Self::new(open_input(path.as_ref())?, cutoffs);
        new.source = Some(path.as_ref().to_path_buf());
        Ok(new)
    }
}

impl<R: BufRead, T: HitRecord> Iterator for HitReader<R, T> {
    type Item = Result<Hit>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_buf.clear();
            match self.reader.read_line(&mut self.line_buf) {
                Ok(0) => return None,
                Ok(_) => {
                    self.line_number += 1;
                    let text = self.line_buf.trim();
                    if text.is_empty() || text.starts_with('#') {
                        continue;
                    }

                    let record = match T::from_line(text, self.line_number) {
                        Ok(record) => record,
                        Err(e) => return Some(Err(self.error_context(e))),
                    };
                    if !record.passes(&self.cutoffs) {
                        continue;
                    }

                    let hit = record.into_hit();
                    if hit.region.is_empty() {
                        debug!(
                            "Skipping zero-width hit {} on {} at line {}",
                            hit.annotation_id, hit.seq_id, self.line_number
                        );
                        continue;
                    }
                    if let Some(vocabulary) = &self.vocabulary {
                        if !vocabulary.contains(&hit.annotation_id) {
                            debug!(
                                "Skipping {} on {}: not in {} vocabulary",
                                hit.annotation_id,
                                hit.seq_id,
                                vocabulary.annotation_type()
                            );
                            continue;
                        }
                    }
                    return Some(Ok(hit));
                },
                Err(e) if e.kind() == ErrorKind::InvalidData => {
                    self.line_number += 1;
                    let err = AnnotError::Parse {
                        path:   None,
                        line:   self.line_number,
                        field:  "line",
                        reason: e.to_string(),
                    };
                    return Some(Err(self.error_context(err)));
                },
                Err(e) => return Some(Err(e.into())),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// `seq annotation evalue start end`
    struct PlainRecord {
        seq_id:        String,
        annotation_id: String,
        evalue:        f64,
        start:         u32,
        end:           u32,
    }

    impl HitRecord for PlainRecord {
        fn from_line(
            text: &str,
            line: usize,
        ) -> Result<Self> {
            let fields: Vec<_> = text.split_whitespace().collect();
            Ok(PlainRecord {
                seq_id:        fields[0].to_string(),
                annotation_id: fields[1].to_string(),
                evalue:        parse_field(fields[2], "evalue", line)?,
                start:         parse_field(fields[3], "start", line)?,
                end:           parse_field(fields[4], "end", line)?,
            })
        }

        fn passes(
            &self,
            cutoffs: &Cutoffs,
        ) -> bool {
            self.evalue <= cutoffs.evalue
        }

        fn into_hit(self) -> Hit {
            Hit {
                seq_id:        self.seq_id.into(),
                annotation_id: self.annotation_id.into(),
                evalue:        self.evalue,
                region:        Region::from_span(self.start, self.end),
            }
        }
    }

    #[test]
    fn test_reader_skips_comments_blank_and_filtered() {
        let data = "# header\n\na K1 1e-10 1 10\nb K2 1 1 10\nc K3 1e-20 5 5\n";
        let hits = HitReader::<_, PlainRecord>::new(data.as_bytes(), Cutoffs::default())
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].seq_id, "a");
        assert_eq!(hits[0].region, Region::from(1..10));
    }

    #[test]
    fn test_reader_reports_line_number() {
        let data = "a K1 1e-10 1 10\n# comment\nb K2 oops 1 10\nc K3 1e-10 1 10\n";
        let mut reader =
            HitReader::<_, PlainRecord>::new(data.as_bytes(), Cutoffs::default());
        assert!(reader.next().unwrap().is_ok());
        match reader.next().unwrap() {
            Err(AnnotError::Parse { line, field, .. }) => {
                assert_eq!(line, 3);
                assert_eq!(field, "evalue");
            },
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn test_reader_invalid_utf8_is_located() {
        let data: &[u8] = b"a K1 1e-10 1 10\nb K2 1e-10 \xff\xfe 10\n";
        let mut reader = HitReader::<_, PlainRecord>::new(data, Cutoffs::default());
        assert!(reader.next().unwrap().is_ok());
        assert!(matches!(
            reader.next().unwrap(),
            Err(AnnotError::Parse { line: 2, field: "line", .. })
        ));
    }

    #[test]
    fn test_parse_evalue_rejects_negative() {
        assert_eq!(parse_evalue("0", 1).unwrap(), 0.0);
        assert_eq!(parse_evalue("1e-30", 1).unwrap(), 1e-30);
        assert!(matches!(
            parse_evalue("-1", 3),
            Err(AnnotError::Parse { field: "evalue", line: 3, .. })
        ));
        assert!(matches!(
            parse_evalue("NaN", 3),
            Err(AnnotError::Parse { field: "evalue", .. })
        ));
    }

    #[test]
    fn test_parse_length_rejects_zero() {
        assert_eq!(parse_length("120", "tlen", 1).unwrap(), 120.0);
        assert!(matches!(
            parse_length("0", "tlen", 5),
            Err(AnnotError::Parse { field: "tlen", line: 5, .. })
        ));
        assert!(matches!(
            parse_length("-3", "qlen", 5),
            Err(AnnotError::Parse { field: "qlen", .. })
        ));
    }

    #[test]
    fn test_reader_vocabulary_filter() {
        let data = "a K1 1e-10 1 10\nb K2 1e-10 1 10\n";
        let vocabulary =
            AnnotationVocabulary::from_ids(AnnotationType::KO, ["K2"]);
        let hits = HitReader::<_, PlainRecord>::new(data.as_bytes(), Cutoffs::default())
            .with_vocabulary(Some(vocabulary))
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].annotation_id, "K2");
    }

    #[test]
    fn test_cutoffs_builder_and_json() {
        let cutoffs = Cutoffs::default()
            .with_evalue(1e-10)
            .with_bitscore(50.0)
            .with_coverage_mode(CoverageMode::HmmSpan);
        assert_eq!(cutoffs.evalue, 1e-10);
        assert_eq!(cutoffs.percent_aln_query, 0.0);

        let config: AnnotationConfig = serde_json::from_str(
            r#"{"cutoffs": {"evalue": 1e-3, "percent_aln_reference": 0.5}}"#,
        )
        .unwrap();
        assert_eq!(config.cutoffs.evalue, 1e-3);
        assert_eq!(config.cutoffs.percent_aln_reference, 0.5);
        assert_eq!(config.cutoffs.bitscore, 0.0);
        assert_eq!(config.cutoffs.coverage_mode, CoverageMode::SequenceSpan);
        assert!(config.vocabulary_dir.is_none());
    }
}
