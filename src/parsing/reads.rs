//! Line-level extraction of mapped reads from FASTQ-style read files.
//!
//! Read files arrive as 4-line records: identifier line, sequence line(s), a
//! separator line starting with `+`, and a quality line. The extractor walks
//! the lines of a file through a two-state machine:
//!
//! - **Idle**: waiting for an identifier line that carries the configured
//!   prefix marker and belongs to a mapped read
//! - **Capturing**: accumulating sequence lines for such a read until the
//!   next `+` separator ends the record
//!
//! Completed records come back tagged with the owning locus name; the
//! original read identity is intentionally discarded. The machine never
//! touches the filesystem, so the capture semantics are testable on plain
//! string slices.

use crate::core::records::LocusReads;

/// A read that mapped, re-keyed by the locus that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedRead {
    pub locus: String,
    pub sequence: String,
}

impl TaggedRead {
    fn new(locus: impl Into<String>) -> Self {
        Self {
            locus: locus.into(),
            sequence: String::new(),
        }
    }
}

enum ScanState {
    Idle,
    Capturing(TaggedRead),
}

/// The extraction state machine.
pub struct ReadExtractor<'a> {
    marker: &'a str,
    reads: &'a LocusReads,
    state: ScanState,
}

impl<'a> ReadExtractor<'a> {
    #[must_use]
    pub fn new(marker: &'a str, reads: &'a LocusReads) -> Self {
        Self {
            marker,
            reads,
            state: ScanState::Idle,
        }
    }

    /// Feed one line; returns a finished record when this line completes one.
    pub fn feed(&mut self, line: &str) -> Option<TaggedRead> {
        if let Some(id) = self.recognize(line) {
            if let Some(locus) = self.reads.locus_of(id) {
                let locus = locus.to_string();
                let done = self.end_capture();
                self.state = ScanState::Capturing(TaggedRead::new(locus));
                return done;
            }
        }

        if line.starts_with('+') {
            return self.end_capture();
        }

        if let ScanState::Capturing(read) = &mut self.state {
            read.sequence.push_str(line);
        }

        None
    }

    /// Flush a record left open at end of input.
    pub fn finish(&mut self) -> Option<TaggedRead> {
        self.end_capture()
    }

    /// The read identifier, if this line is an identifier line: the first
    /// whitespace token must carry the marker prefix; the identifier is that
    /// token minus the leading `@` and any `/1`-style mate suffix.
    fn recognize<'l>(&self, line: &'l str) -> Option<&'l str> {
        let token = line.split_whitespace().next()?;
        if !token.starts_with(self.marker) {
            return None;
        }

        let token = token.strip_prefix('@').unwrap_or(token);
        Some(token.split_once('/').map_or(token, |(id, _)| id))
    }

    fn end_capture(&mut self) -> Option<TaggedRead> {
        match std::mem::replace(&mut self.state, ScanState::Idle) {
            ScanState::Capturing(read) => Some(read),
            ScanState::Idle => None,
        }
    }
}
