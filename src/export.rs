//! CSV export of filtered papers

use std::fmt;
use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::{Terminator, WriterBuilder};
use tracing::{debug, instrument};

use crate::error::Result;
use crate::paper::FilteredPaper;

/// Header written ahead of the data rows
pub const CSV_HEADER: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Result of [`save_to_csv`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// Nothing to write; no file was created
    Empty,
    /// `count` papers written to `path`
    Saved { count: usize, path: PathBuf },
}

impl fmt::Display for SaveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SaveOutcome::Empty => write!(f, "No papers to save."),
            SaveOutcome::Saved { count, path } => {
                write!(f, "Saved {} papers to {}", count, path.display())
            }
        }
    }
}

/// Write a header row and one row per paper to `writer`
///
/// Fields are quoted only when needed and rows end with CRLF.
pub fn write_csv<W: io::Write>(writer: W, papers: &[FilteredPaper]) -> Result<()> {
    let mut csv_writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(writer);

    csv_writer.write_record(CSV_HEADER)?;
    for paper in papers {
        csv_writer.serialize(paper)?;
    }
    csv_writer.flush()?;

    Ok(())
}

/// Save papers to a CSV file, creating or truncating it
///
/// An empty slice is not an error: no file is touched and
/// [`SaveOutcome::Empty`] is returned.
#[instrument(skip_all, fields(path = %path.as_ref().display(), papers = papers.len()))]
pub fn save_to_csv<P: AsRef<Path>>(papers: &[FilteredPaper], path: P) -> Result<SaveOutcome> {
    let path = path.as_ref();

    if papers.is_empty() {
        debug!("Nothing to write");
        return Ok(SaveOutcome::Empty);
    }

    let file = File::create(path)?;
    write_csv(file, papers)?;
    debug!("CSV written");

    Ok(SaveOutcome::Saved {
        count: papers.len(),
        path: path.to_path_buf(),
    })
}
