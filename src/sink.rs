//! Persistence of degree histograms.

use crate::{error::Result, graph::DegreeHistogram};
use std::{io::Write, path::PathBuf};

/// Receives the histogram of every graph that reaches aggregation.
pub trait HistogramSink {
    /// Stores `histogram` under `name` and returns where it went.
    fn write(&mut self, name: &str, histogram: &DegreeHistogram) -> Result<PathBuf>;
}

/// Writes `<dir>/<name>.csv` files with a `degree,count` header.
#[derive(Debug, Clone)]
pub struct CsvSink {
    dir: PathBuf,
}

impl CsvSink {
    pub fn new<P: Into<PathBuf>>(dir: P) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{}.csv", name))
    }
}

impl HistogramSink for CsvSink {
    fn write(&mut self, name: &str, histogram: &DegreeHistogram) -> Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.path(name);
        let writer = csv::WriterBuilder::new()
            .has_headers(true)
            .from_path(&path)?;
        write_histogram(writer, histogram)?;
        Ok(path)
    }
}

/// Writes one `degree,count` row per bin, in ascending degree order.
pub fn write_histogram<W: Write>(
    mut writer: csv::Writer<W>,
    histogram: &DegreeHistogram,
) -> Result<()> {
    writer.write_record(&["degree", "count"])?;
    for (degree, count) in histogram.iter() {
        writer.write_record(&[degree.to_string(), count.to_string()])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn histogram() -> DegreeHistogram {
        vec![(3, 1), (1, 3)].into_iter().collect()
    }

    #[test]
    fn test_write_histogram() {
        let mut buf = Vec::new();
        write_histogram(csv::Writer::from_writer(&mut buf), &histogram()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "degree,count\n1,3\n3,1\n");
    }

    #[test]
    fn test_write_empty_histogram() {
        let mut buf = Vec::new();
        write_histogram(csv::Writer::from_writer(&mut buf), &DegreeHistogram::new()).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "degree,count\n");
    }

    #[test]
    fn test_csv_sink() {
        let dir = tempfile::tempdir().unwrap();
        let mut sink = CsvSink::new(dir.path().join("out"));
        let path = sink.write("edges.txt", &histogram()).unwrap();
        assert_eq!(path, dir.path().join("out").join("edges.txt.csv"));
        assert_eq!(
            std::fs::read_to_string(path).unwrap(),
            "degree,count\n1,3\n3,1\n"
        );
    }
}
