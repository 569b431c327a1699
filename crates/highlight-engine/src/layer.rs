//! Text-layer model for a rendered PDF viewer.
//!
//! A viewer exposes its selectable text either through a structured per-page
//! API or through a single flat "text layer" container. Both surfaces bottom
//! out in [`TextRun`]s: ordered sequences of plain text and highlight-marker
//! segments.

use crate::error::HighlightError;

/// One node inside a text run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain text, eligible for keyword matching.
    Text(String),
    /// A highlight wrapper around one matched occurrence. `text` keeps the
    /// exact character sequence as found in the source, not as typed in the
    /// keyword.
    Marker { text: String, keyword: String },
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Text(t) => t,
            Segment::Marker { text, .. } => text,
        }
    }
}

/// A contiguous run of selectable text (one text div in the viewer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextRun {
    pub(crate) segments: Vec<Segment>,
}

impl TextRun {
    pub fn new(text: impl Into<String>) -> Self {
        TextRun {
            segments: vec![Segment::Text(text.into())],
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The observable text of this run, markers included.
    pub fn text_content(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }

    /// Markers currently inserted into this run.
    pub fn markers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Marker { text, keyword } => Some((text.as_str(), keyword.as_str())),
            Segment::Text(_) => None,
        })
    }
}

/// One rendered page of the structured text-layer API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub(crate) runs: Vec<TextRun>,
}

impl Page {
    pub fn new(runs: Vec<TextRun>) -> Self {
        Page { runs }
    }

    pub fn runs(&self) -> &[TextRun] {
        &self.runs
    }
}

/// Where a run lives inside the resolved surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum RunAddress {
    Structured { page: usize, run: usize },
    Layer { run: usize },
}

/// The host document as seen by the highlight engine.
///
/// A real viewer exposes at most one usable surface; resolution prefers the
/// structured per-page API, then the generic text layer.
#[derive(Debug, Clone, Default)]
pub struct ViewerDocument {
    structured: Option<Vec<Page>>,
    text_layer: Option<Vec<TextRun>>,
}

impl ViewerDocument {
    /// A document with no text surface at all (e.g. a plugin-rendered PDF).
    pub fn empty() -> Self {
        ViewerDocument::default()
    }

    /// A document exposing the structured per-page text API.
    pub fn with_structured_pages(pages: Vec<Page>) -> Self {
        ViewerDocument {
            structured: Some(pages),
            text_layer: None,
        }
    }

    /// A document exposing only a flat text-layer container.
    pub fn with_text_layer(runs: Vec<TextRun>) -> Self {
        ViewerDocument {
            structured: None,
            text_layer: Some(runs),
        }
    }

    /// Full text of the document, one line per run.
    pub fn text_content(&self) -> String {
        self.runs()
            .map(TextRun::text_content)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// All runs on the preferred surface, in document order.
    pub fn runs(&self) -> Box<dyn Iterator<Item = &TextRun> + '_> {
        if let Some(pages) = &self.structured {
            Box::new(pages.iter().flat_map(|p| p.runs.iter()))
        } else if let Some(runs) = &self.text_layer {
            Box::new(runs.iter())
        } else {
            Box::new(std::iter::empty())
        }
    }

    /// Addresses of every run on the preferred surface.
    ///
    /// Fails with `NoCompatibleViewer` when the document exposes neither
    /// surface; nothing is mutated in that case.
    pub(crate) fn resolve_surface(&self) -> Result<Vec<RunAddress>, HighlightError> {
        if let Some(pages) = &self.structured {
            Ok(pages
                .iter()
                .enumerate()
                .flat_map(|(page, p)| {
                    (0..p.runs.len()).map(move |run| RunAddress::Structured { page, run })
                })
                .collect())
        } else if let Some(runs) = &self.text_layer {
            Ok((0..runs.len()).map(|run| RunAddress::Layer { run }).collect())
        } else {
            Err(HighlightError::NoCompatibleViewer)
        }
    }

    pub(crate) fn run_mut(&mut self, address: RunAddress) -> &mut TextRun {
        match address {
            RunAddress::Structured { page, run } => {
                let pages = self.structured.as_mut().expect("structured surface resolved");
                &mut pages[page].runs[run]
            }
            RunAddress::Layer { run } => {
                let runs = self.text_layer.as_mut().expect("text layer resolved");
                &mut runs[run]
            }
        }
    }
}
