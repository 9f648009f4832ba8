use std::io::Read;
use std::path::Path;

use arcstr::ArcStr;
use bio::io::fasta::{
    Reader as FastaReader,
    Records,
};

use crate::data_structs::typedef::PosType;
use crate::error::Result;
use crate::io::compression::open_input;

/// Header and length of one predicted protein.
#[derive(Debug, Clone, PartialEq)]
pub struct ProteinRecord {
    pub id:     ArcStr,
    /// Full header line without `>`: id, a space and the description.
    pub header: String,
    /// Sequence length in residues, including a trailing stop `*` if the
    /// gene caller wrote one.
    pub length: PosType,
}

impl From<bio::io::fasta::Record> for ProteinRecord {
    fn from(value: bio::io::fasta::Record) -> Self {
        let header = match value.desc() {
            Some(desc) => format!("{} {}", value.id(), desc),
            None => value.id().to_string(),
        };
        Self {
            id: value.id().into(),
            header,
            length: value.seq().len() as PosType,
        }
    }
}

/// Iterator over the proteins of a FASTA file, in file order.
pub struct ProteinReader<R: Read> {
    records: Records<std::io::BufReader<R>>,
}

impl<R: Read> ProteinReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            records: FastaReader::new(reader).records(),
        }
    }
}

impl ProteinReader<Box<dyn std::io::BufRead>> {
    /// Opens a protein FASTA file (plain or `.gz`).
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(open_input(path)?))
    }
}

impl<R: Read> Iterator for ProteinReader<R> {
    type Item = Result<ProteinRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.records.next().map(|record| {
            record
                .map(ProteinRecord::from)
                .map_err(Into::into)
        })
    }
}
