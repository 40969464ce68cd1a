/// Hyperlink support for paragraph content.
///
/// A hyperlink either points through a package relationship (`r:id`, an
/// external URL resolved by the package layer) or at a bookmark inside the
/// document (`w:anchor`). Both collapse onto one identifier; [`LinkKind`]
/// records which attribute it is written back to.
use super::run::Run;
use crate::ooxml::error::{DecodeError, DecodeResult, EncodeResult};
use crate::ooxml::xml::{attribute, local_name, next_event, skip_element, write_empty, write_end, write_start};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use smallvec::SmallVec;
use std::io::{BufRead, Write};

/// Which attribute the hyperlink identifier belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkKind {
    /// Relationship id of an external target (`r:id`)
    #[default]
    Relationship,
    /// Bookmark name inside the document (`w:anchor`)
    Anchor,
}

/// A hyperlink in a paragraph.
///
/// Represents a `<w:hyperlink>` element wrapping one or more runs.
///
/// # Identifier precedence
///
/// When a source element carries both `r:id` and `w:anchor`, the
/// relationship id wins and the anchor is dropped. With only an anchor the
/// link becomes an anchor link; with neither the identifier is empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Hyperlink {
    /// Relationship id or bookmark name, see [`LinkKind`]
    pub id: String,
    /// Kind of identifier
    pub kind: LinkKind,
    /// Tooltip text (`w:tooltip`)
    pub tooltip: Option<String>,
    /// Display runs
    pub runs: SmallVec<[Run; 2]>,
}

impl Hyperlink {
    /// Create a link through the relationship `r_id`.
    pub fn new(r_id: impl Into<String>) -> Self {
        Self {
            id: r_id.into(),
            kind: LinkKind::Relationship,
            ..Default::default()
        }
    }

    /// Create a link to a bookmark in the same document.
    pub fn to_anchor(anchor: impl Into<String>) -> Self {
        Self {
            id: anchor.into(),
            kind: LinkKind::Anchor,
            ..Default::default()
        }
    }

    /// Whether the link targets a bookmark in this document.
    #[inline]
    pub fn is_internal(&self) -> bool {
        self.kind == LinkKind::Anchor
    }

    /// Set the tooltip text.
    pub fn set_tooltip(&mut self, tooltip: impl Into<String>) -> &mut Self {
        self.tooltip = Some(tooltip.into());
        self
    }

    /// Append a run and return it for formatting.
    pub fn add_run(&mut self, run: Run) -> &mut Run {
        self.runs.push(run);
        let last = self.runs.len() - 1;
        &mut self.runs[last]
    }

    /// Display text of the link.
    pub fn text(&self) -> String {
        self.runs.iter().filter_map(Run::text).collect()
    }

    /// Write this link as `<w:hyperlink>`.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        let mut attributes: SmallVec<[(&str, &str); 2]> = SmallVec::new();
        // An anchor link keeps its attribute even when empty so the kind survives.
        match self.kind {
            LinkKind::Relationship if !self.id.is_empty() => attributes.push(("r:id", self.id.as_str())),
            LinkKind::Relationship => {},
            LinkKind::Anchor => attributes.push(("w:anchor", self.id.as_str())),
        }
        if let Some(ref tooltip) = self.tooltip {
            attributes.push(("w:tooltip", tooltip.as_str()));
        }

        if self.runs.is_empty() {
            return write_empty(writer, "w:hyperlink", &attributes);
        }

        write_start(writer, "w:hyperlink", &attributes)?;
        for run in &self.runs {
            run.encode(writer)?;
        }
        write_end(writer, "w:hyperlink")
    }

    /// Decode a `<w:hyperlink>` element whose start tag was just read.
    ///
    /// `id`, `anchor` and `tooltip` are taken from the start tag; nested
    /// runs are decoded and empty ones dropped. Other children are skipped.
    pub fn decode<R: BufRead>(
        reader: &mut Reader<R>,
        start: &BytesStart<'_>,
        empty: bool,
    ) -> DecodeResult<Self> {
        let mut link = Self::default();

        let id = attribute(start, b"id")?.filter(|v| !v.is_empty());
        let anchor = attribute(start, b"anchor")?;
        match (id, anchor) {
            (Some(id), _) => link.id = id,
            (None, Some(anchor)) => {
                link.id = anchor;
                link.kind = LinkKind::Anchor;
            },
            (None, None) => {},
        }
        link.tooltip = attribute(start, b"tooltip")?;

        if empty {
            return Ok(link);
        }

        let mut buf = Vec::new();
        loop {
            match next_event(reader, &mut buf)? {
                Event::Start(e) if e.local_name().as_ref() == b"r" => {
                    let run = Run::decode(reader, false)?;
                    if !run.is_empty() {
                        link.runs.push(run);
                    }
                },
                Event::Start(e) => {
                    log::trace!("skipping <{}> inside hyperlink", local_name(&e));
                    skip_element(reader, &e)?;
                },
                Event::End(_) => return Ok(link),
                Event::Eof => return Err(DecodeError::Truncated),
                _ => {},
            }
        }
    }
}
