//! Keyword highlighting with a reversible marker registry.
//!
//! Every mutation the engine makes to a [`ViewerDocument`] is recorded as a
//! registry entry; [`HighlightEngine::clear`] replays the registry in reverse
//! to restore the document text byte-for-byte. Undo never walks the live
//! tree looking for markers.

use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::error::HighlightError;
use crate::layer::{RunAddress, Segment, ViewerDocument};

/// One recorded mutation: a plain text segment replaced by up to three
/// segments (before, marker, after; empty pieces omitted).
#[derive(Debug, Clone)]
struct MarkerRecord {
    address: RunAddress,
    segment_index: usize,
    original_text: String,
    inserted: usize,
}

/// Highlights keyword occurrences in a viewer document and undoes them.
#[derive(Debug, Default)]
pub struct HighlightEngine {
    registry: Vec<MarkerRecord>,
}

impl HighlightEngine {
    pub fn new() -> Self {
        HighlightEngine::default()
    }

    /// Number of markers currently inserted in the document.
    pub fn match_count(&self) -> usize {
        self.registry.len()
    }

    /// Mark every case-insensitive occurrence of each keyword.
    ///
    /// Keywords are trimmed and empty entries dropped; an empty remainder is
    /// `InvalidInput`. Any previous highlights are cleared first, so
    /// re-highlighting never stacks. Returns the total number of markers
    /// inserted.
    ///
    /// Keyword text is matched literally (regex metacharacters escaped), and
    /// markers keep the casing found in the source. Later keywords never
    /// rescan earlier markers, so overlapping keyword lists resolve
    /// first-keyword-wins.
    pub fn highlight(
        &mut self,
        doc: &mut ViewerDocument,
        keywords: &[String],
    ) -> Result<usize, HighlightError> {
        let keywords: Vec<&str> = keywords
            .iter()
            .map(|k| k.trim())
            .filter(|k| !k.is_empty())
            .collect();
        if keywords.is_empty() {
            return Err(HighlightError::InvalidInput);
        }

        // Resolve the text surface before touching anything so an
        // incompatible viewer leaves the document unmodified.
        let surface = doc.resolve_surface()?;

        self.clear(doc);

        let mut total = 0;
        for keyword in &keywords {
            let pattern = literal_pattern(keyword);
            for &address in &surface {
                total += self.highlight_run(doc, address, keyword, &pattern);
            }
        }

        debug!(keywords = keywords.len(), markers = total, "highlight pass complete");
        Ok(total)
    }

    /// Remove every marker from the most recent highlight, restoring each
    /// original text in place. No-op when nothing is highlighted.
    pub fn clear(&mut self, doc: &mut ViewerDocument) {
        if self.registry.is_empty() {
            return;
        }
        // Reverse order: undoing the newest mutation first keeps every older
        // record's segment index valid.
        while let Some(record) = self.registry.pop() {
            let run = doc.run_mut(record.address);
            let span = record.segment_index..record.segment_index + record.inserted;
            run.segments
                .splice(span, std::iter::once(Segment::Text(record.original_text)));
        }
        debug!("all highlights cleared");
    }

    fn highlight_run(
        &mut self,
        doc: &mut ViewerDocument,
        address: RunAddress,
        keyword: &str,
        pattern: &Regex,
    ) -> usize {
        let run = doc.run_mut(address);
        let mut inserted = 0;
        let mut i = 0;
        while i < run.segments.len() {
            let Segment::Text(text) = &run.segments[i] else {
                i += 1;
                continue;
            };
            let Some(found) = pattern.find(text) else {
                i += 1;
                continue;
            };

            let original = text.clone();
            let before = &original[..found.start()];
            let matched = &original[found.start()..found.end()];
            let after = &original[found.end()..];

            let mut replacement = Vec::with_capacity(3);
            if !before.is_empty() {
                replacement.push(Segment::Text(before.to_string()));
            }
            let marker_offset = replacement.len();
            replacement.push(Segment::Marker {
                text: matched.to_string(),
                keyword: keyword.to_string(),
            });
            if !after.is_empty() {
                replacement.push(Segment::Text(after.to_string()));
            }

            let inserted_count = replacement.len();
            run.segments.splice(i..=i, replacement);
            self.registry.push(MarkerRecord {
                address,
                segment_index: i,
                original_text: original,
                inserted: inserted_count,
            });
            inserted += 1;

            // Resume at the trailing remainder so the rest of this run is
            // still scanned for further occurrences.
            i += marker_offset + 1;
        }
        inserted
    }
}

/// Case-insensitive pattern matching the keyword text literally.
fn literal_pattern(keyword: &str) -> Regex {
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
        .expect("escaped keyword is a valid literal pattern")
}
