#![allow(dead_code)]
use std::fs::File;
use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use bio::io::fasta::{
    Record,
    Writer,
};
use flate2::write::GzEncoder;
use flate2::Compression;
use tempfile::TempDir;

/// Installs the logger once per test binary. Set `RUST_LOG=debug` to see
/// every replacement decision.
pub fn init_logger() { let _ = pretty_env_logger::try_init(); }

/// A protein of the demo genome: id and residue count.
pub struct DemoProtein {
    pub id:     &'static str,
    pub length: usize,
}

/// Writes Prodigal-like proteins, search results and vocabulary files
/// into a temporary directory.
pub struct DemoProject {
    dir: TempDir,
}

impl DemoProject {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            dir: tempfile::tempdir()?,
        })
    }

    pub fn path(
        &self,
        name: &str,
    ) -> PathBuf {
        self.dir.path().join(name)
    }

    pub fn dir(&self) -> &Path { self.dir.path() }

    pub fn write_proteins(
        &self,
        name: &str,
        proteins: &[DemoProtein],
    ) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        let mut writer = Writer::new(File::create(&path)?);
        let mut gene_start = 1;
        for (i, protein) in proteins.iter().enumerate() {
            let gene_end = gene_start + protein.length * 3 - 1;
            let desc = format!(
                "# {} # {} # 1 # ID=1_{};partial=00;start_type=ATG;\
                 rbs_motif=AGGAG;rbs_spacer=5-10bp;gc_cont=0.512",
                gene_start,
                gene_end,
                i + 1
            );
            let seq = "M".repeat(protein.length);
            writer.write_record(&Record::with_attrs(
                protein.id,
                Some(desc.as_str()),
                seq.as_bytes(),
            ))?;
            gene_start = gene_end + 10;
        }
        writer.flush()?;
        Ok(path)
    }

    pub fn write_text(
        &self,
        name: &str,
        content: &str,
    ) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, content)?;
        Ok(path)
    }

    pub fn write_gz(
        &self,
        name: &str,
        content: &str,
    ) -> anyhow::Result<PathBuf> {
        let path = self.path(name);
        let mut encoder = GzEncoder::new(File::create(&path)?, Compression::default());
        encoder.write_all(content.as_bytes())?;
        encoder.finish()?;
        Ok(path)
    }
}

/// One `outfmt 6` line with subject id `gene~<accession>`.
pub fn blast_line(
    seq_id: &str,
    accession: &str,
    pident: f64,
    start: u32,
    end: u32,
    evalue: f64,
    bitscore: f64,
) -> String {
    format!(
        "{}\tgene~{}\t{}\t{}\t0\t0\t{}\t{}\t1\t{}\t{:e}\t{}\n",
        seq_id,
        accession,
        pident,
        start.abs_diff(end),
        start,
        end,
        start.abs_diff(end),
        evalue,
        bitscore
    )
}

/// One `--domtblout` line. Envelope coordinates repeat the alignment ones.
#[allow(clippy::too_many_arguments)]
pub fn domtbl_line(
    seq_id: &str,
    target_length: u32,
    accession: &str,
    query_length: u32,
    evalue: f64,
    score: f64,
    hmm: (u32, u32),
    ali: (u32, u32),
) -> String {
    format!(
        "{seq_id:<20} - {target_length:>5} profile_name {accession:<12} \
         {query_length:>5} {evalue:9.1e} {score:6.1} 0.1 1 1 {evalue:9.1e} \
         {evalue:9.1e} {score:6.1} 0.1 {hf} {ht} {af} {at} {af} {at} 0.95 \
         hypothetical protein\n",
        hf = hmm.0,
        ht = hmm.1,
        af = ali.0,
        at = ali.1,
    )
}

pub const DOMTBL_HEADER: &str = "\
#                                                                            --- full sequence --- -------------- this domain -------------   hmm coord   ali coord   env coord
# target name        accession   tlen query name           accession   qlen   E-value  score  bias   #  of  c-Evalue  i-Evalue  score  bias  from    to  from    to  from    to  acc description of target
#------------------- ---------- ----- -------------------- ---------- ----- --------- ------ ----- --- --- --------- --------- ------ ----- ----- ----- ----- ----- ----- ----- ---- ---------------------
";
