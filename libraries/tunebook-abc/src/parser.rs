//! Single-pass tune segmenter
//!
//! One forward scan over the input lines with a single in-flight
//! accumulator. A start marker seals the previous tune (if any) and opens
//! the next; end of input seals the last one. Lines before the first marker
//! belong to no tune and are dropped.

use tunebook_core::Tune;

/// Canonical file extension for ABC notation files (lowercase, no dot)
pub const ABC_EXTENSION: &str = "abc";

/// Start-of-tune marker prefix
const START_MARKER: &str = "X:";

/// Recognized header tags inside a tune. Any other prefix is opaque body.
const TAG_TITLE: &str = "T:";
const TAG_RHYTHM: &str = "R:";
const TAG_METER: &str = "M:";
const TAG_UNIT_LENGTH: &str = "L:";
const TAG_KEY: &str = "K:";

/// Parse the full text of one ABC file into tune records.
///
/// `book_number` identifies the source collection and is attached verbatim
/// to every record; it is never derived from the file content.
pub fn parse_text(text: &str, book_number: i64) -> Vec<Tune> {
    parse_lines(text.lines(), book_number)
}

/// Parse an ordered sequence of lines into tune records.
///
/// Lines may carry trailing `\r`/`\n`; line endings are stripped before
/// classification and never appear in extracted values or stored raw text.
pub fn parse_lines<I>(lines: I, book_number: i64) -> Vec<Tune>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut tunes = Vec::new();
    let mut current: Option<TuneAccumulator> = None;

    for line in lines {
        let line = line.as_ref().trim_end_matches(['\r', '\n']);

        if let Some(index) = line.strip_prefix(START_MARKER) {
            // Start marker: seal any in-flight tune, then open the next.
            // The marker line itself is never examined for header tags.
            if let Some(done) = current.take() {
                tunes.push(done.seal());
            }
            current = Some(TuneAccumulator::open(book_number, index, line));
        } else if let Some(acc) = current.as_mut() {
            acc.push_line(line);
        }
        // No tune in progress: pre-amble, discarded.
    }

    if let Some(done) = current.take() {
        tunes.push(done.seal());
    }

    tracing::debug!(book_number, tunes = tunes.len(), "parsed ABC input");
    tunes
}

/// In-flight tune record plus its raw line accumulator.
///
/// Sealed exactly once, either at the next start marker or at end of input;
/// the produced `Tune` is not touched afterwards.
struct TuneAccumulator {
    tune: Tune,
    raw_lines: Vec<String>,
}

impl TuneAccumulator {
    fn open(book_number: i64, index: &str, marker_line: &str) -> Self {
        Self {
            tune: Tune::new(book_number, index.trim()),
            raw_lines: vec![marker_line.to_string()],
        }
    }

    /// Append a body line and extract a header field if the line carries a
    /// recognized tag. Repeated tags overwrite: last occurrence wins.
    fn push_line(&mut self, line: &str) {
        self.raw_lines.push(line.to_string());

        if let Some(value) = line.strip_prefix(TAG_TITLE) {
            self.tune.title = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(TAG_RHYTHM) {
            self.tune.tune_type = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(TAG_METER) {
            self.tune.meter = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(TAG_UNIT_LENGTH) {
            self.tune.unit_length = Some(value.trim().to_string());
        } else if let Some(value) = line.strip_prefix(TAG_KEY) {
            self.tune.key_signature = Some(value.trim().to_string());
        }
        // Unrecognized header tags and notation lines are kept only as body.
    }

    fn seal(mut self) -> Tune {
        self.tune.raw_text = self.raw_lines.join("\n");
        self.tune
    }
}
