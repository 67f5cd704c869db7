//! Collection of input file paths from a line-oriented stream

use std::io::BufRead;
use std::path::PathBuf;
use tracing::{debug, warn};

use crate::core::error::{DocNumError, Result};

/// Line that ends the list of paths. It is never treated as a path itself.
pub const SENTINEL: &str = "0";

/// Collection state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollectorState {
    Reading,
    Done,
}

/// Accumulates paths line by line until the sentinel arrives
#[derive(Debug)]
pub struct PathCollector {
    state: CollectorState,
    paths: Vec<PathBuf>,
}

impl Default for PathCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl PathCollector {
    pub fn new() -> Self {
        Self {
            state: CollectorState::Reading,
            paths: Vec::new(),
        }
    }

    /// Feed one input line and return the resulting state.
    ///
    /// Once `Done`, further lines are ignored.
    pub fn feed(&mut self, line: &str) -> CollectorState {
        if self.state == CollectorState::Reading {
            if line == SENTINEL {
                self.state = CollectorState::Done;
            } else {
                self.paths.push(PathBuf::from(line));
            }
        }
        self.state
    }

    pub fn state(&self) -> CollectorState {
        self.state
    }

    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    pub fn into_paths(self) -> Vec<PathBuf> {
        self.paths
    }
}

/// Read paths from `reader`, one per line, until the sentinel line
///
/// # Arguments
/// * `reader` - Line source, usually locked stdin
///
/// # Returns
/// Paths in input order. Nothing after the sentinel is consumed.
pub fn collect_paths<R: BufRead>(reader: R) -> Result<Vec<PathBuf>> {
    let mut collector = PathCollector::new();

    for line in reader.lines() {
        let line = line.map_err(|source| DocNumError::InputStream { source })?;
        if collector.feed(&line) == CollectorState::Done {
            break;
        }
        debug!(path = %line, "queued input file");
    }

    if collector.state() == CollectorState::Reading {
        warn!(
            count = collector.paths().len(),
            "input ended before the terminating \"{}\"; using the paths read so far",
            SENTINEL
        );
    }

    Ok(collector.into_paths())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};

    #[test]
    fn test_collect_until_sentinel() {
        let input = Cursor::new("a.txt\nb.txt\n0\n");
        let paths = collect_paths(input).unwrap();
        assert_eq!(paths, vec![PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
    }

    #[test]
    fn test_nothing_after_sentinel_is_consumed() {
        let mut input = Cursor::new("a.txt\n0\nleftover\n");
        let paths = collect_paths(&mut input).unwrap();
        assert_eq!(paths.len(), 1);

        let mut rest = String::new();
        input.read_to_string(&mut rest).unwrap();
        assert_eq!(rest, "leftover\n");
    }

    #[test]
    fn test_sentinel_first_gives_empty_list() {
        assert!(collect_paths(Cursor::new("0\n")).unwrap().is_empty());
    }

    #[test]
    fn test_eof_without_sentinel() {
        let paths = collect_paths(Cursor::new("only.txt")).unwrap();
        assert_eq!(paths, vec![PathBuf::from("only.txt")]);
    }

    #[test]
    fn test_only_exact_sentinel_terminates() {
        let paths = collect_paths(Cursor::new(" 0\n00\n0\n")).unwrap();
        assert_eq!(paths, vec![PathBuf::from(" 0"), PathBuf::from("00")]);
    }

    #[test]
    fn test_collector_ignores_lines_after_done() {
        let mut collector = PathCollector::new();
        assert_eq!(collector.feed("x"), CollectorState::Reading);
        assert_eq!(collector.feed("0"), CollectorState::Done);
        assert_eq!(collector.feed("y"), CollectorState::Done);
        assert_eq!(collector.into_paths(), vec![PathBuf::from("x")]);
    }
}
