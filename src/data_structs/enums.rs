use std::fmt::Display;
use std::str::FromStr;

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::AnnotError;

/// Search tool whose output carries a given annotation type.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug)]
pub enum SearchTool {
    /// Pairwise alignment search, tabular output (BLAST/DIAMOND outfmt 6).
    PairwiseAlignment,
    /// Profile search, hmmsearch `--domtblout` output.
    DomainTable,
}

#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum AnnotationType {
    /// KEGG orthology.
    KO,
    /// Pfam domains.
    PFAM,
    /// TIGRFAM families.
    TIGRFAM,
    /// Clusters of orthologous groups.
    COG,
}

impl AnnotationType {
    pub const ALL: [AnnotationType; 4] = [
        AnnotationType::KO,
        AnnotationType::PFAM,
        AnnotationType::TIGRFAM,
        AnnotationType::COG,
    ];

    /// Which result format annotations of this type are read from.
    pub fn search_tool(&self) -> SearchTool {
        match self {
            AnnotationType::KO | AnnotationType::COG => {
                SearchTool::PairwiseAlignment
            },
            AnnotationType::PFAM | AnnotationType::TIGRFAM => {
                SearchTool::DomainTable
            },
        }
    }

    /// File name of the identifier list for this type inside a vocabulary
    /// directory.
    pub fn vocabulary_file_name(&self) -> &'static str {
        match self {
            AnnotationType::KO => "KO_IDS.txt",
            AnnotationType::PFAM => "PFAM_IDS.txt",
            AnnotationType::TIGRFAM => "TIGRFAM_IDS.txt",
            AnnotationType::COG => "COG_IDS.txt",
        }
    }
}

impl Display for AnnotationType {
    fn fmt(
        &self,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match self {
            AnnotationType::KO => write!(f, "KO"),
            AnnotationType::PFAM => write!(f, "PFAM"),
            AnnotationType::TIGRFAM => write!(f, "TIGRFAM"),
            AnnotationType::COG => write!(f, "COG"),
        }
    }
}

impl FromStr for AnnotationType {
    type Err = AnnotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "KO" => Ok(AnnotationType::KO),
            "PFAM" => Ok(AnnotationType::PFAM),
            "TIGRFAM" => Ok(AnnotationType::TIGRFAM),
            "COG" => Ok(AnnotationType::COG),
            other => {
                Err(AnnotError::Configuration(format!(
                    "unsupported annotation type '{}', expected one of KO, \
                     PFAM, TIGRFAM, COG",
                    other
                )))
            },
        }
    }
}

impl Serialize for AnnotationType {
    fn serialize<S>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer, {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AnnotationType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>, {
        let s = String::deserialize(deserializer)?;
        std::str::FromStr::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Strand of the gene a protein was predicted from.
#[derive(Eq, Hash, PartialEq, Copy, Clone, Debug, PartialOrd, Ord)]
pub enum Strand {
    Forward,
    Reverse,
}

impl Strand {
    /// Decodes the gene caller's strand column: `1` or `-1`.
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "1" => Some(Strand::Forward),
            "-1" => Some(Strand::Reverse),
            _ => None,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Strand::Forward => "1",
            Strand::Reverse => "-1",
        }
    }
}

/// How the profile-side coverage of a domain-table hit is measured.
#[derive(Eq, PartialEq, Copy, Clone, Debug, Default, Serialize, Deserialize)]
pub enum CoverageMode {
    /// Sequence-coordinate span divided by the profile length. This is how
    /// existing annotation runs were filtered.
    #[default]
    SequenceSpan,
    /// HMM-coordinate span divided by the profile length.
    HmmSpan,
}
