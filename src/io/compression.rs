use std::fs::File;
use std::io::{
    BufRead,
    BufReader,
    Read,
};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use log::debug;

use crate::error::Result;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    None,
    Gz,
}

impl Compression {
    pub fn name(&self) -> &str {
        match self {
            Compression::None => "none",
            Compression::Gz => "gzip",
        }
    }

    /// Guesses compression from the file extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Self {
        match path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
        {
            Some("gz") | Some("gzip") => Compression::Gz,
            _ => Compression::None,
        }
    }

    pub fn get_decoder(
        &self,
        handle: File,
    ) -> Box<dyn Read> {
        match self {
            Compression::Gz => Box::new(MultiGzDecoder::new(handle)),
            Compression::None => Box::new(handle),
        }
    }
}

/// Opens `path` for buffered line reading, decompressing `.gz` files.
pub fn open_input<P: AsRef<Path>>(path: P) -> Result<Box<dyn BufRead>> {
    let compression = Compression::from_path(&path);
    debug!(
        "Opening {} ({} compression)",
        path.as_ref().display(),
        compression.name()
    );
    let handle = File::open(path.as_ref())?;
    Ok(Box::new(BufReader::new(compression.get_decoder(handle))))
}
