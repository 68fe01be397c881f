//! Edge-list ingestion.
//!
//! Every non-blank line is a record that must split into exactly two
//! non-empty tokens under the profile's delimiter. Under the `large`
//! profile the first line is a header and is discarded unread.

use crate::{
    config::{MalformedPolicy, Profile},
    error::{Error, Result},
    graph::Graph,
    input::InputBuffer,
    reduce::distinct,
    types::Edge,
};
use log::{info, warn};
use rayon::prelude::*;
use std::path::Path;

/// A raw graph and the number of malformed records skipped to build it.
#[derive(Debug)]
pub struct Ingested {
    pub graph: Graph<String>,
    pub skipped: usize,
}

/// Parses edge-list lines into a raw graph.
///
/// Duplicate records collapse into one edge. Line numbers in errors count
/// from 1 and include the header.
///
/// Records are parsed in parallel and the policy is applied once all of them
/// are parsed, so `Strict` reads the whole input before it reports the
/// malformed record with the lowest line number.
pub fn read_lines<I, S>(lines: I, profile: Profile, policy: MalformedPolicy) -> Result<Ingested>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str> + Send + Sync,
{
    let header = if profile.has_header() { 1 } else { 0 };
    let records: Vec<(usize, S)> = lines
        .into_iter()
        .enumerate()
        .skip(header)
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.as_ref().trim().is_empty())
        .collect();
    let delimiter = profile.delimiter();
    let parsed: Vec<std::result::Result<Edge<String>, (usize, &str)>> = records
        .par_iter()
        .map(|(line, record)| {
            parse_record(record.as_ref(), delimiter).ok_or((*line, record.as_ref()))
        })
        .collect();
    let malformed: Vec<(usize, &str)> = parsed
        .iter()
        .filter_map(|record| record.as_ref().err().copied())
        .collect();
    let edges = distinct(parsed.into_par_iter().filter_map(std::result::Result::ok));
    if let Some(&(line, record)) = malformed.first() {
        match policy {
            MalformedPolicy::Strict => {
                return Err(Error::Malformed {
                    line,
                    record: record.to_owned(),
                })
            }
            MalformedPolicy::Lenient => {
                for &(line, record) in &malformed {
                    warn!("line {}: skipping malformed record {:?}", line, record);
                }
            }
        }
    }
    info!(
        "read {} records, {} distinct edges, {} skipped",
        records.len(),
        edges.len(),
        malformed.len()
    );
    Ok(Ingested {
        graph: Graph::from_edges(edges),
        skipped: malformed.len(),
    })
}

/// Reads the edge-list file at `path`.
pub fn read_file<P: AsRef<Path>>(
    path: P,
    profile: Profile,
    policy: MalformedPolicy,
) -> Result<Ingested> {
    let buffer = InputBuffer::new_mmap(path)?;
    let text = buffer.as_str()?;
    read_lines(text.lines(), profile, policy)
}

fn parse_record(record: &str, delimiter: char) -> Option<Edge<String>> {
    let mut tokens = record.trim_end_matches('\r').split(delimiter);
    match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(src), Some(dst), None) if !src.is_empty() && !dst.is_empty() => {
            Some((src.to_owned(), dst.to_owned()))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphView;

    fn view(ingested: &Ingested) -> GraphView<&str> {
        GraphView::new(
            ingested.graph.vertices().iter().map(|v| v.as_str()).collect(),
            ingested
                .graph
                .edges()
                .iter()
                .map(|(s, d)| (s.as_str(), d.as_str()))
                .collect(),
        )
    }

    #[test]
    fn test_small_profile() {
        let ingested = read_lines(
            vec!["1,2", "2,3", "1,2", "3,3"],
            Profile::Small,
            MalformedPolicy::Strict,
        )
        .unwrap();
        assert_eq!(ingested.skipped, 0);
        assert_eq!(
            view(&ingested),
            GraphView::new(
                vec!["1", "2", "3"],
                vec![("1", "2"), ("2", "3"), ("3", "3")]
            )
        );
    }

    #[test]
    fn test_large_profile_discards_header() {
        let ingested = read_lines(
            vec!["FromNodeId ToNodeId", "a b", "b c"],
            Profile::Large,
            MalformedPolicy::Strict,
        )
        .unwrap();
        assert_eq!(
            view(&ingested),
            GraphView::new(vec!["a", "b", "c"], vec![("a", "b"), ("b", "c")])
        );
    }

    #[test]
    fn test_strict_reports_first_malformed_line() {
        let lines = vec!["1,2", "1,2,3", "4", "5,6"];
        match read_lines(lines, Profile::Small, MalformedPolicy::Strict) {
            Err(Error::Malformed { line, record }) => {
                assert_eq!(line, 2);
                assert_eq!(record, "1,2,3");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_strict_reports_lowest_line_of_many() {
        let mut lines: Vec<String> = (0..1000).map(|i| format!("{},{}", i, i + 1)).collect();
        lines[700] = "700".to_owned();
        lines[300] = "300;301".to_owned();
        match read_lines(lines, Profile::Small, MalformedPolicy::Strict) {
            Err(Error::Malformed { line, record }) => {
                assert_eq!(line, 301);
                assert_eq!(record, "300;301");
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_lenient_skips_malformed() {
        let lines = vec!["h", "1 2", "1  2", "3", "", "2 4\r"];
        let ingested = read_lines(lines, Profile::Large, MalformedPolicy::Lenient).unwrap();
        assert_eq!(ingested.skipped, 2);
        assert_eq!(
            view(&ingested),
            GraphView::new(vec!["1", "2", "4"], vec![("1", "2"), ("2", "4")])
        );
    }

    #[test]
    fn test_empty_tokens_are_malformed() {
        assert!(read_lines(vec![",2"], Profile::Small, MalformedPolicy::Strict).is_err());
        assert!(read_lines(vec!["1,"], Profile::Small, MalformedPolicy::Strict).is_err());
    }

    #[test]
    fn test_empty_input() {
        let ingested =
            read_lines(Vec::<String>::new(), Profile::Large, MalformedPolicy::Strict).unwrap();
        assert_eq!(ingested.graph.num_vertices(), 0);
        assert_eq!(ingested.graph.num_edges(), 0);
    }

    #[test]
    fn test_owned_lines() {
        let lines: Vec<String> = (0..100).map(|i| format!("{},{}", i, i + 1)).collect();
        let ingested = read_lines(lines, Profile::Small, MalformedPolicy::Strict).unwrap();
        assert_eq!(ingested.graph.num_edges(), 100);
        assert_eq!(ingested.graph.num_vertices(), 101);
    }
}
