//! Run formatting (`<w:rPr>`), shared by the run and paragraph levels.
use crate::ooxml::error::{DecodeError, DecodeResult, EncodeResult};
use crate::ooxml::xml::{
    attribute, local_name, next_event, numeric_attribute, parse_on_off, skip_element, write_empty,
    write_end, write_start, write_val,
};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Underline styles for text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnderlineStyle {
    None,
    Single,
    Double,
    Thick,
    Dotted,
    Dashed,
    DotDash,
    DotDotDash,
    Wave,
    Words,
}

impl UnderlineStyle {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Single => "single",
            Self::Double => "double",
            Self::Thick => "thick",
            Self::Dotted => "dotted",
            Self::Dashed => "dash",
            Self::DotDash => "dotDash",
            Self::DotDotDash => "dotDotDash",
            Self::Wave => "wave",
            Self::Words => "words",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        Some(match value {
            "none" => Self::None,
            "single" => Self::Single,
            "double" => Self::Double,
            "thick" => Self::Thick,
            "dotted" => Self::Dotted,
            "dash" => Self::Dashed,
            "dotDash" => Self::DotDash,
            "dotDotDash" => Self::DotDotDash,
            "wave" => Self::Wave,
            "words" => Self::Words,
            _ => return None,
        })
    }
}

/// Vertical alignment of a run relative to the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Baseline,
    Superscript,
    Subscript,
}

impl VerticalAlign {
    pub(crate) fn as_str(&self) -> &'static str {
        match self {
            Self::Baseline => "baseline",
            Self::Superscript => "superscript",
            Self::Subscript => "subscript",
        }
    }

    pub(crate) fn parse(value: &str) -> Option<Self> {
        match value {
            "baseline" => Some(Self::Baseline),
            "superscript" => Some(Self::Superscript),
            "subscript" => Some(Self::Subscript),
            _ => None,
        }
    }
}

/// Formatting descriptor for a run or a paragraph mark.
///
/// Represents a `<w:rPr>` element. Every field is optional: `None` means
/// "not specified here", so the value is inherited from the style chain.
/// Fields are written in schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunProperties {
    /// Character style id (`w:rStyle`)
    pub style: Option<String>,
    /// Font name applied to ASCII and high-ANSI text (`w:rFonts`)
    pub font: Option<String>,
    /// Bold (`w:b`)
    pub bold: Option<bool>,
    /// Italic (`w:i`)
    pub italic: Option<bool>,
    /// Single strikethrough (`w:strike`)
    pub strike: Option<bool>,
    /// Hex RGB color such as `"FF0000"`, or `"auto"` (`w:color`)
    pub color: Option<String>,
    /// Font size in half-points, e.g. 24 = 12pt (`w:sz`)
    pub size: Option<u32>,
    /// Complex-script font size in half-points (`w:szCs`)
    pub size_complex: Option<u32>,
    /// Highlight color name such as `"yellow"` (`w:highlight`)
    pub highlight: Option<String>,
    /// Underline (`w:u`)
    pub underline: Option<UnderlineStyle>,
    /// Superscript / subscript (`w:vertAlign`)
    pub vertical_align: Option<VerticalAlign>,
}

impl RunProperties {
    /// Create an empty property set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any property is set.
    pub fn has_properties(&self) -> bool {
        *self != Self::default()
    }

    /// Write this record as `<w:rPr>`; an empty record is written as `<w:rPr/>`.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        if !self.has_properties() {
            return write_empty(writer, "w:rPr", &[]);
        }

        write_start(writer, "w:rPr", &[])?;

        if let Some(ref style) = self.style {
            write_val(writer, "w:rStyle", style)?;
        }
        if let Some(ref font) = self.font {
            write_empty(writer, "w:rFonts", &[("w:ascii", font.as_str()), ("w:hAnsi", font.as_str())])?;
        }
        write_toggle(writer, "w:b", self.bold)?;
        write_toggle(writer, "w:i", self.italic)?;
        write_toggle(writer, "w:strike", self.strike)?;
        if let Some(ref color) = self.color {
            write_val(writer, "w:color", color)?;
        }
        let mut num = itoa::Buffer::new();
        if let Some(size) = self.size {
            write_val(writer, "w:sz", num.format(size))?;
        }
        if let Some(size) = self.size_complex {
            write_val(writer, "w:szCs", num.format(size))?;
        }
        if let Some(ref highlight) = self.highlight {
            write_val(writer, "w:highlight", highlight)?;
        }
        if let Some(underline) = self.underline {
            write_val(writer, "w:u", underline.as_str())?;
        }
        if let Some(align) = self.vertical_align {
            write_val(writer, "w:vertAlign", align.as_str())?;
        }

        write_end(writer, "w:rPr")
    }

    /// Decode the content of an `<w:rPr>` element.
    ///
    /// The reader must be positioned just after the start tag; pass
    /// `empty = true` when it was self-closing, in which case nothing more is
    /// consumed.
    pub fn decode<R: BufRead>(reader: &mut Reader<R>, empty: bool) -> DecodeResult<Self> {
        let mut props = Self::default();
        if empty {
            return Ok(props);
        }

        let mut buf = Vec::new();
        loop {
            match next_event(reader, &mut buf)? {
                Event::Empty(e) => props.apply(&e)?,
                Event::Start(e) => {
                    props.apply(&e)?;
                    skip_element(reader, &e)?;
                },
                Event::End(_) => return Ok(props),
                Event::Eof => return Err(DecodeError::Truncated),
                _ => {},
            }
        }
    }

    /// Apply one child element of `<w:rPr>`. Unknown children are ignored.
    fn apply(&mut self, e: &BytesStart<'_>) -> DecodeResult<()> {
        match e.local_name().as_ref() {
            b"rStyle" => self.style = attribute(e, b"val")?,
            b"rFonts" => {
                self.font = match attribute(e, b"ascii")? {
                    Some(font) => Some(font),
                    None => attribute(e, b"hAnsi")?,
                }
            },
            b"b" => self.bold = Some(read_toggle(e)?),
            b"i" => self.italic = Some(read_toggle(e)?),
            b"strike" => self.strike = Some(read_toggle(e)?),
            b"color" => self.color = attribute(e, b"val")?,
            b"sz" => self.size = numeric_attribute(e, b"val")?,
            b"szCs" => self.size_complex = numeric_attribute(e, b"val")?,
            b"highlight" => self.highlight = attribute(e, b"val")?,
            b"u" => {
                self.underline = match attribute(e, b"val")? {
                    Some(value) => Some(
                        UnderlineStyle::parse(&value)
                            .ok_or_else(|| DecodeError::malformed(local_name(e)))?,
                    ),
                    None => Some(UnderlineStyle::Single),
                }
            },
            b"vertAlign" => {
                self.vertical_align = match attribute(e, b"val")? {
                    Some(value) => Some(
                        VerticalAlign::parse(&value)
                            .ok_or_else(|| DecodeError::malformed(local_name(e)))?,
                    ),
                    None => None,
                }
            },
            _ => {},
        }
        Ok(())
    }
}

fn write_toggle<W: Write>(writer: &mut Writer<W>, name: &str, value: Option<bool>) -> EncodeResult<()> {
    match value {
        Some(true) => write_empty(writer, name, &[]),
        Some(false) => write_val(writer, name, "0"),
        None => Ok(()),
    }
}

fn read_toggle(e: &BytesStart<'_>) -> DecodeResult<bool> {
    match attribute(e, b"val")? {
        Some(value) => parse_on_off(&value).ok_or_else(|| DecodeError::malformed(local_name(e))),
        None => Ok(true),
    }
}
