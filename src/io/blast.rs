//! Pairwise alignment tabular results (BLAST / DIAMOND `outfmt 6`).
//!
//! Whitespace separated, no header, 12 standard columns:
//!
//! 1. **qseqid**: query (protein) id
//! 2. **sseqid**: subject id, `<gene>~<accession>`; the accession after the
//!    `~` is the annotation id
//! 3. **pident**: percent identity
//! 4. **length**, 5. **mismatch**, 6. **gapopen**
//! 7. **qstart**, 8. **qend**: alignment span on the query
//! 9. **sstart**, 10. **send**
//! 11. **evalue**
//! 12. **bitscore**
//!
//! # Example
//!
//! ```no_run
//! use protannot::io::blast::BlastHitReader;
//! use protannot::io::hits::Cutoffs;
//!
//! # fn main() -> protannot::error::Result<()> {
//! let cutoffs = Cutoffs::default().with_evalue(1e-10).with_bitscore(60.0);
//! for hit in BlastHitReader::from_path("proteins_vs_ko.tsv", cutoffs)? {
//!     let hit = hit?;
//!     println!("{} -> {} ({:e})", hit.seq_id, hit.annotation_id, hit.evalue);
//! }
//! # Ok(())
//! # }
//! ```
use itertools::Itertools;

use crate::data_structs::region::Region;
use crate::data_structs::typedef::PosType;
use crate::error::{
    AnnotError,
    Result,
};
use crate::io::hits::{
    parse_evalue,
    parse_field,
    Cutoffs,
    Hit,
    HitReader,
    HitRecord,
};

const N_FIELDS: usize = 12;
const ACCESSION_DELIMITER: char = '~';

/// The columns of a tabular alignment line that annotation needs.
#[derive(Debug, Clone, PartialEq)]
pub struct BlastRecord {
    pub qseqid:    String,
    /// Accession parsed out of the subject id.
    pub accession: String,
    pub pident:    f64,
    pub qstart:    PosType,
    pub qend:      PosType,
    pub evalue:    f64,
    pub bitscore:  f64,
}

impl HitRecord for BlastRecord {
    fn from_line(
        text: &str,
        line: usize,
    ) -> Result<Self> {
        let fields = text.split_whitespace().collect_vec();
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

        let accession = fields[1]
            .split(ACCESSION_DELIMITER)
            .nth(1)
            .ok_or_else(|| {
                AnnotError::Parse {
                    path: None,
                    line,
                    field: "sseqid",
                    reason: format!(
                        "'{}' has no '{}' separated accession",
                        fields[1], ACCESSION_DELIMITER
                    ),
                }
            })?;

        Ok(BlastRecord {
            qseqid: fields[0].to_string(),
            accession: accession.to_string(),
            pident: parse_field(fields[2], "pident", line)?,
            qstart: parse_field(fields[6], "qstart", line)?,
            qend: parse_field(fields[7], "qend", line)?,
            evalue: parse_evalue(fields[10], line)?,
            bitscore: parse_field(fields[11], "bitscore", line)?,
        })
    }

    fn passes(
        &self,
        cutoffs: &Cutoffs,
    ) -> bool {
        self.evalue <= cutoffs.evalue
            && self.bitscore >= cutoffs.bitscore
            && self.pident >= cutoffs.percent_aln_query
    }

    fn into_hit(self) -> Hit {
        Hit {
            seq_id:        self.qseqid.into(),
            annotation_id: self.accession.into(),
            evalue:        self.evalue,
            region:        Region::from_span(self.qstart, self.qend),
        }
    }
}

/// Streaming reader of accepted pairwise alignment hits.
pub type BlastHitReader<R> = HitReader<R, BlastRecord>;
