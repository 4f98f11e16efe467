//! Reading quote snapshots line by line.
//!
//! The feed answers every request with a JSON array of quotes, one per stock.
//! A recorded feed keeps one such array per line.

use std::io::BufRead;

use log::debug;

use crate::error::PricingError;
use crate::quote::Quote;

/// Decode one snapshot: a JSON array of quotes.
pub fn parse_snapshot(line: &str) -> Result<Vec<Quote>, PricingError> {
    let quotes = serde_json::from_str(line)?;
    Ok(quotes)
}

/// Iterator over the snapshots of a recorded feed, one per non-empty line.
///
/// Lines are read lazily, so each snapshot is available as soon as its line
/// arrives. A line that cannot be read or decoded yields an error carrying its
/// 1-based number; iteration may continue past it.
pub struct Snapshots<R> {
    lines: std::io::Lines<R>,
    line_no: usize,
}

impl<R: BufRead> Snapshots<R> {
    /// Wrap a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for Snapshots<R> {
    type Item = Result<Vec<Quote>, PricingError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line_result = self.lines.next()?;
            self.line_no += 1;
            let line = match line_result {
                Ok(line) => line,
                Err(e) => return Some(Err(snapshot_error(self.line_no, PricingError::Io(e)))),
            };
            let trimmed_line = line.trim();
            if trimmed_line.is_empty() {
                continue;
            }

            return Some(match parse_snapshot(trimmed_line) {
                Ok(quotes) => {
                    debug!("Line {}: {} quotes", self.line_no, quotes.len());
                    Ok(quotes)
                }
                Err(e) => Err(snapshot_error(self.line_no, e)),
            });
        }
    }
}

/// Trait providing line-oriented parsing of recorded feeds.
pub trait FeedParser {
    /// Parses all snapshots from a buffered reader.
    ///
    /// The first line that cannot be read or decoded aborts parsing.
    fn parse_feed<R: BufRead>(reader: R) -> Result<Vec<Vec<Quote>>, PricingError>;

    /// Lazily parses snapshots from a buffered reader.
    fn snapshots<R: BufRead>(reader: R) -> Snapshots<R>;
}

impl FeedParser for Quote {
    fn parse_feed<R: BufRead>(reader: R) -> Result<Vec<Vec<Quote>>, PricingError> {
        Snapshots::new(reader).collect()
    }

    fn snapshots<R: BufRead>(reader: R) -> Snapshots<R> {
        Snapshots::new(reader)
    }
}

fn snapshot_error(line: usize, source: PricingError) -> PricingError {
    PricingError::Snapshot {
        line,
        source: Box::new(source),
    }
}
