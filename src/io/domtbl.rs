//! hmmsearch per-domain table (`--domtblout`) results.
//!
//! Lines starting with `#` are headers. Data lines have 22 whitespace
//! separated columns followed by a free-text target description, which is
//! ignored. Columns used (0-based):
//!
//! | #  | column        | use                                 |
//! |----|---------------|-------------------------------------|
//! | 0  | target name   | protein id                          |
//! | 2  | tlen          | protein length                      |
//! | 4  | accession     | profile accession, the annotation id|
//! | 5  | qlen          | profile length                      |
//! | 6  | E-value       | full-sequence e-value               |
//! | 7  | score         | full-sequence bit score             |
//! | 15 | hmm from      | profile span start                  |
//! | 16 | hmm to        | profile span end                    |
//! | 17 | ali from      | protein span start                  |
//! | 18 | ali to        | protein span end                    |
use itertools::Itertools;

use crate::data_structs::enums::CoverageMode;
use crate::data_structs::region::Region;
use crate::data_structs::typedef::PosType;
use crate::error::{
    AnnotError,
    Result,
};
use crate::io::hits::{
    parse_evalue,
    parse_field,
    parse_length,
    Cutoffs,
    Hit,
    HitReader,
    HitRecord,
};

const N_FIELDS: usize = 22;

#[derive(Debug, Clone, PartialEq)]
pub struct DomtblRecord {
    pub target_name:   String,
    pub target_length: f64,
    pub accession:     String,
    pub query_length:  f64,
    pub evalue:        f64,
    pub score:         f64,
    pub hmm_from:      PosType,
    pub hmm_to:        PosType,
    pub seq_from:      PosType,
    pub seq_to:        PosType,
}

impl DomtblRecord {
    fn seq_span(&self) -> f64 { self.seq_from.abs_diff(self.seq_to) as f64 }

    fn hmm_span(&self) -> f64 { self.hmm_from.abs_diff(self.hmm_to) as f64 }

    /// Fraction of the protein covered by the alignment.
    pub fn target_coverage(&self) -> f64 {
        self.seq_span() / self.target_length
    }

    /// Fraction of the profile covered by the alignment.
    ///
    /// [`CoverageMode::SequenceSpan`] divides the protein-side span by the
    /// profile length, [`CoverageMode::HmmSpan`] uses the profile-side span.
    pub fn query_coverage(
        &self,
        mode: CoverageMode,
    ) -> f64 {
        match mode {
            CoverageMode::SequenceSpan => self.seq_span() / self.query_length,
            CoverageMode::HmmSpan => self.hmm_span() / self.query_length,
        }
    }
}

impl HitRecord for DomtblRecord {
    fn from_line(
        text: &str,
        line: usize,
    ) -> Result<Self> {
        let fields = text
            .split_whitespace()
            .take(N_FIELDS)
            .collect_vec();
        if fields.len() < N_FIELDS {
            return Err(AnnotError::Parse {
                path: None,
                line,
                field: "line",
                reason: format!(
                    "expected {} fields, found {}",
                    N_FIELDS,
                    fields.len()
                ),
            });
        }

        Ok(DomtblRecord {
            target_name:   fields[0].to_string(),
            target_length: parse_length(fields[2], "tlen", line)?,
            accession:     fields[4].to_string(),
            query_length:  parse_length(fields[5], "qlen", line)?,
            evalue:        parse_evalue(fields[6], line)?,
            score:         parse_field(fields[7], "score", line)?,
            hmm_from:      parse_field(fields[15], "hmm_from", line)?,
            hmm_to:        parse_field(fields[16], "hmm_to", line)?,
            seq_from:      parse_field(fields[17], "ali_from", line)?,
            seq_to:        parse_field(fields[18], "ali_to", line)?,
        })
    }

    fn passes(
        &self,
        cutoffs: &Cutoffs,
    ) -> bool {
        self.evalue <= cutoffs.evalue
            && self.score >= cutoffs.bitscore
            && self.target_coverage() >= cutoffs.percent_aln_query
            && self.query_coverage(cutoffs.coverage_mode)
                >= cutoffs.percent_aln_reference
    }

    fn into_hit(self) -> Hit {
        Hit {
            seq_id:        self.target_name.into(),
            annotation_id: self.accession.into(),
            evalue:        self.evalue,
            region:        Region::from_span(self.seq_from, self.seq_to),
        }
    }
}

/// Streaming reader of accepted domain-table hits.
pub type DomtblHitReader<R> = HitReader<R, DomtblRecord>;

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    // tlen 200, qlen 100, hmm 1..31, ali 10..60
    const LINE: &str = "c_1_1 - 200 7tm_1 PF00001.21 100 1e-9 45.2 0.1 1 1 \
                        2e-10 3e-9 44.0 0.1 1 31 10 60 8 62 0.95 some protein";

    fn read_all(
        data: &str,
        cutoffs: Cutoffs,
    ) -> Result<Vec<Hit>> {
        DomtblHitReader::new(data.as_bytes(), cutoffs).collect()
    }

    #[test]
    fn test_parse_line() {
        let record = DomtblRecord::from_line(LINE, 1).unwrap();
        assert_eq!(record.target_name, "c_1_1");
        assert_eq!(record.accession, "PF00001.21");
        assert_eq!(record.target_length, 200.0);
        assert_eq!(record.query_length, 100.0);
        assert_eq!(record.evalue, 1e-9);
        assert_eq!(record.score, 45.2);
        assert_eq!((record.hmm_from, record.hmm_to), (1, 31));
        assert_eq!((record.seq_from, record.seq_to), (10, 60));

        assert_approx_eq!(record.target_coverage(), 0.25);
        assert_approx_eq!(record.query_coverage(CoverageMode::SequenceSpan), 0.5);
        assert_approx_eq!(record.query_coverage(CoverageMode::HmmSpan), 0.3);

        let hit = record.into_hit();
        assert_eq!(hit.seq_id, "c_1_1");
        assert_eq!(hit.annotation_id, "PF00001.21");
        assert_eq!(hit.region, Region::from(10..60));
    }

    #[test]
    fn test_header_lines_skipped() {
        let data = format!(
            "#                                                                            --- full sequence --- \n\
             # target name        accession   tlen query name\n\
             {}\n\
             #\n",
            LINE
        );
        assert_eq!(read_all(&data, Cutoffs::default()).unwrap().len(), 1);
    }

    #[test]
    fn test_each_cutoff_excludes() {
        let base = Cutoffs::default()
            .with_evalue(1e-5)
            .with_bitscore(40.0)
            .with_percent_aln_query(0.2)
            .with_percent_aln_reference(0.4);
        assert_eq!(read_all(LINE, base.clone()).unwrap().len(), 1);

        let cases = [
            base.clone().with_evalue(1e-10),
            base.clone().with_bitscore(50.0),
            base.clone().with_percent_aln_query(0.3),
            base.clone().with_percent_aln_reference(0.6),
        ];
        for cutoffs in cases {
            assert!(read_all(LINE, cutoffs).unwrap().is_empty());
        }
    }

    #[test]
    fn test_coverage_modes() {
        // Sequence span over qlen is 0.5, hmm span over qlen is 0.3
        let cutoffs = Cutoffs::default().with_percent_aln_reference(0.4);
        assert_eq!(read_all(LINE, cutoffs.clone()).unwrap().len(), 1);
        let hmm = cutoffs.with_coverage_mode(CoverageMode::HmmSpan);
        assert!(read_all(LINE, hmm).unwrap().is_empty());
    }

    #[test]
    fn test_malformed_lines() {
        let bad_evalue = LINE.replace("1e-9", "NaN?");
        assert!(matches!(
            DomtblRecord::from_line(&bad_evalue, 7),
            Err(AnnotError::Parse { field: "evalue", line: 7, .. })
        ));
        assert!(matches!(
            DomtblRecord::from_line("c_1_1 - 200 7tm_1 PF00001.21 100", 1),
            Err(AnnotError::Parse { field: "line", .. })
        ));
    }

    #[test]
    fn test_zero_lengths_are_fatal() {
        let zero_tlen = LINE.replacen(" 200 ", " 0 ", 1);
        assert!(matches!(
            DomtblRecord::from_line(&zero_tlen, 1),
            Err(AnnotError::Parse { field: "tlen", .. })
        ));
        let zero_qlen = LINE.replacen(" 100 ", " 0 ", 1);
        assert!(matches!(
            DomtblRecord::from_line(&zero_qlen, 1),
            Err(AnnotError::Parse { field: "qlen", .. })
        ));
        let cutoffs = Cutoffs::default().with_percent_aln_query(0.99);
        assert!(read_all(&zero_tlen, cutoffs).is_err());
    }

    #[test]
    fn test_negative_evalue_is_rejected() {
        let line = LINE.replacen(" 1e-9 ", " -1 ", 1);
        assert!(matches!(
            DomtblRecord::from_line(&line, 1),
            Err(AnnotError::Parse { field: "evalue", .. })
        ));
    }
}
