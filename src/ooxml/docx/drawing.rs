/// Inline picture references inside runs.
///
/// A `<w:drawing>` carries a full DrawingML graphic. Only the parts needed to
/// reference an embedded image are modeled: extent, document-level id/name
/// and the relationship id of the image part. The image bytes themselves live
/// in the package and are resolved by the caller.
use crate::ooxml::error::{DecodeError, DecodeResult, EncodeResult};
use crate::ooxml::xml::{
    DRAWINGML_NS, PICTURE_NS, attribute, next_event, numeric_attribute, write_empty, write_end,
    write_start,
};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// EMUs per inch.
pub const EMU_PER_INCH: u64 = 914_400;
/// EMUs per point.
pub const EMU_PER_POINT: u64 = 12_700;

/// A picture embedded in a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Drawing {
    /// Unique drawing object id within the document (`wp:docPr/@id`)
    pub id: u32,
    /// Object name (`wp:docPr/@name`)
    pub name: String,
    /// Alternative text (`wp:docPr/@descr`)
    pub description: Option<String>,
    /// Relationship id of the image part (`a:blip/@r:embed`)
    pub embed: String,
    /// Width in EMUs (English Metric Units, 1 inch = 914400 EMUs)
    pub width: u64,
    /// Height in EMUs
    pub height: u64,
}

impl Drawing {
    /// Create a drawing referencing the image relationship `embed`.
    pub fn new(id: u32, embed: impl Into<String>, width: u64, height: u64) -> Self {
        Self {
            id,
            name: format!("Picture {}", id),
            description: None,
            embed: embed.into(),
            width,
            height,
        }
    }

    /// Set the object name.
    pub fn set_name(&mut self, name: impl Into<String>) -> &mut Self {
        self.name = name.into();
        self
    }

    /// Set the image description/alt text.
    pub fn set_description(&mut self, description: impl Into<String>) -> &mut Self {
        self.description = Some(description.into());
        self
    }

    /// Convert pixels to EMUs (assuming 96 DPI).
    pub fn px_to_emu(px: u32) -> u64 {
        u64::from(px) * EMU_PER_INCH / 96
    }

    /// Convert points to EMUs.
    pub fn pt_to_emu(pt: f64) -> u64 {
        (pt * EMU_PER_POINT as f64) as u64
    }

    /// Write `<w:drawing>` containing an inline picture.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        let mut id = itoa::Buffer::new();
        let id = id.format(self.id);
        let mut cx = itoa::Buffer::new();
        let cx = cx.format(self.width);
        let mut cy = itoa::Buffer::new();
        let cy = cy.format(self.height);

        write_start(writer, "w:drawing", &[])?;
        write_start(
            writer,
            "wp:inline",
            &[("distT", "0"), ("distB", "0"), ("distL", "0"), ("distR", "0")],
        )?;
        write_empty(writer, "wp:extent", &[("cx", cx), ("cy", cy)])?;
        write_empty(writer, "wp:effectExtent", &[("l", "0"), ("t", "0"), ("r", "0"), ("b", "0")])?;
        match self.description {
            Some(ref descr) => write_empty(
                writer,
                "wp:docPr",
                &[("id", id), ("name", self.name.as_str()), ("descr", descr.as_str())],
            )?,
            None => write_empty(writer, "wp:docPr", &[("id", id), ("name", self.name.as_str())])?,
        }
        write_start(writer, "wp:cNvGraphicFramePr", &[])?;
        write_empty(
            writer,
            "a:graphicFrameLocks",
            &[("xmlns:a", DRAWINGML_NS), ("noChangeAspect", "1")],
        )?;
        write_end(writer, "wp:cNvGraphicFramePr")?;

        write_start(writer, "a:graphic", &[("xmlns:a", DRAWINGML_NS)])?;
        write_start(writer, "a:graphicData", &[("uri", PICTURE_NS)])?;
        write_start(writer, "pic:pic", &[("xmlns:pic", PICTURE_NS)])?;

        write_start(writer, "pic:nvPicPr", &[])?;
        write_empty(writer, "pic:cNvPr", &[("id", "0"), ("name", self.name.as_str())])?;
        write_empty(writer, "pic:cNvPicPr", &[])?;
        write_end(writer, "pic:nvPicPr")?;

        write_start(writer, "pic:blipFill", &[])?;
        write_empty(writer, "a:blip", &[("r:embed", self.embed.as_str())])?;
        write_start(writer, "a:stretch", &[])?;
        write_empty(writer, "a:fillRect", &[])?;
        write_end(writer, "a:stretch")?;
        write_end(writer, "pic:blipFill")?;

        write_start(writer, "pic:spPr", &[])?;
        write_start(writer, "a:xfrm", &[])?;
        write_empty(writer, "a:off", &[("x", "0"), ("y", "0")])?;
        write_empty(writer, "a:ext", &[("cx", cx), ("cy", cy)])?;
        write_end(writer, "a:xfrm")?;
        write_start(writer, "a:prstGeom", &[("prst", "rect")])?;
        write_empty(writer, "a:avLst", &[])?;
        write_end(writer, "a:prstGeom")?;
        write_end(writer, "pic:spPr")?;

        write_end(writer, "pic:pic")?;
        write_end(writer, "a:graphicData")?;
        write_end(writer, "a:graphic")?;
        write_end(writer, "wp:inline")?;
        write_end(writer, "w:drawing")
    }

    /// Decode the content of a `<w:drawing>` element.
    ///
    /// The reader must be positioned just after the start tag. Both inline and
    /// anchored drawings are accepted; `extent`, `docPr` and `blip` are picked
    /// up wherever they occur in the subtree and everything else is ignored.
    pub fn decode<R: BufRead>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        let mut drawing = Self {
            id: 0,
            name: String::new(),
            description: None,
            embed: String::new(),
            width: 0,
            height: 0,
        };

        let mut buf = Vec::new();
        let mut depth = 0usize;
        loop {
            match next_event(reader, &mut buf)? {
                Event::Start(e) => {
                    drawing.apply(&e)?;
                    depth += 1;
                },
                Event::Empty(e) => drawing.apply(&e)?,
                Event::End(_) => {
                    if depth == 0 {
                        return Ok(drawing);
                    }
                    depth -= 1;
                },
                Event::Eof => return Err(DecodeError::Truncated),
                _ => {},
            }
        }
    }

    fn apply(&mut self, e: &BytesStart<'_>) -> DecodeResult<()> {
        match e.local_name().as_ref() {
            b"extent" => {
                self.width = numeric_attribute(e, b"cx")?.unwrap_or(0);
                self.height = numeric_attribute(e, b"cy")?.unwrap_or(0);
            },
            b"docPr" => {
                self.id = numeric_attribute(e, b"id")?.unwrap_or(0);
                self.name = attribute(e, b"name")?.unwrap_or_default();
                self.description = attribute(e, b"descr")?;
            },
            b"blip" => {
                if let Some(embed) = attribute(e, b"embed")? {
                    self.embed = embed;
                }
            },
            _ => {},
        }
        Ok(())
    }
}
