//! Decoder for Prodigal protein FASTA headers.
//!
//! Prodigal writes one header per predicted protein:
//!
//! ```text
//! contig_1_3 # 2210 # 3121 # -1 # ID=1_3;partial=00;start_type=ATG;rbs_motif=AGGAG;rbs_spacer=5-10bp;gc_cont=0.512
//! ```
//!
//! Five fields separated by `" # "`: sequence id, start, end, strand and a
//! `;`-separated list of six `key=value` pairs in fixed order.
use std::fmt::Display;
use std::str::FromStr;

use arcstr::ArcStr;
use itertools::Itertools;

use crate::data_structs::enums::Strand;
use crate::error::AnnotError;

const FIELD_SEPARATOR: &str = " # ";
const N_FIELDS: usize = 5;
const ATTRIBUTE_KEYS: [&str; 6] = [
    "ID",
    "partial",
    "start_type",
    "rbs_motif",
    "rbs_spacer",
    "gc_cont",
];

#[derive(Debug, Clone, PartialEq)]
pub struct SequenceDescription {
    pub seq_id:     ArcStr,
    /// Genomic start coordinate of the gene (1-based).
    pub start:      u64,
    /// Genomic end coordinate of the gene (1-based, inclusive).
    pub end:        u64,
    pub strand:     Strand,
    pub protein_id: ArcStr,
    /// Two-character flag; `1` marks a gene running off the contig edge on
    /// that side.
    pub partial:    ArcStr,
    pub start_type: ArcStr,
    pub rbs_motif:  ArcStr,
    pub rbs_spacer: ArcStr,
    pub gc_content: f64,
}

impl SequenceDescription {
    /// Returns `true` when the gene call is truncated at either end.
    pub fn is_partial(&self) -> bool { self.partial.contains('1') }
}

impl FromStr for SequenceDescription {
    type Err = AnnotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s.trim().split(FIELD_SEPARATOR).collect_vec();
        if fields.len() != N_FIELDS {
            return Err(AnnotError::format(format!(
                "expected {} header fields separated by '{}', found {} in '{}'",
                N_FIELDS,
                FIELD_SEPARATOR,
                fields.len(),
                s
            )));
        }

        let start = fields[1].parse::<u64>().map_err(|e| {
            AnnotError::format(format!("invalid start '{}': {}", fields[1], e))
        })?;
        let end = fields[2].parse::<u64>().map_err(|e| {
            AnnotError::format(format!("invalid end '{}': {}", fields[2], e))
        })?;
        let strand = Strand::from_code(fields[3]).ok_or_else(|| {
            AnnotError::format(format!(
                "invalid strand '{}', expected 1 or -1",
                fields[3]
            ))
        })?;

        let pairs = fields[4].split(';').collect_vec();
        if pairs.len() != ATTRIBUTE_KEYS.len() {
            return Err(AnnotError::format(format!(
                "expected {} key=value attributes, found {} in '{}'",
                ATTRIBUTE_KEYS.len(),
                pairs.len(),
                fields[4]
            )));
        }

        let mut values = Vec::with_capacity(ATTRIBUTE_KEYS.len());
        for (pair, expected_key) in pairs.iter().zip(ATTRIBUTE_KEYS) {
            let (key, value) = pair.split_once('=').ok_or_else(|| {
                AnnotError::format(format!("attribute '{}' is not key=value", pair))
            })?;
            if key != expected_key {
                return Err(AnnotError::format(format!(
                    "expected attribute '{}', found '{}'",
                    expected_key, key
                )));
            }
            values.push(value);
        }

        let gc_content = values[5].parse::<f64>().map_err(|e| {
            AnnotError::format(format!("invalid gc_cont '{}': {}", values[5], e))
        })?;

        Ok(SequenceDescription {
            seq_id: fields[0].into(),
            start,
            end,
            strand,
            protein_id: values[0].into(),
            partial: values[1].into(),
            start_type: values[2].into(),
            rbs_motif: values[3].into(),
            rbs_spacer: values[4].into(),
            gc_content,
        })
    }
}

impl Display for SequenceDescription {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        write!(
            f,
            "{seq_id} # {start} # {end} # {strand} # ID={id};partial={partial};\
             start_type={start_type};rbs_motif={rbs_motif};\
             rbs_spacer={rbs_spacer};gc_cont={gc}",
            seq_id = self.seq_id,
            start = self.start,
            end = self.end,
            strand = self.strand.code(),
            id = self.protein_id,
            partial = self.partial,
            start_type = self.start_type,
            rbs_motif = self.rbs_motif,
            rbs_spacer = self.rbs_spacer,
            gc = self.gc_content,
        )
    }
}
