/// Runs: the smallest unit of formatted inline content.
use super::drawing::Drawing;
use super::format::{RunProperties, UnderlineStyle, VerticalAlign};
use crate::ooxml::error::{DecodeError, DecodeResult, EncodeResult};
use crate::ooxml::xml::{
    attribute, local_name, needs_space_preserve, next_event, read_text, skip_element, write_empty, write_end,
    write_start, write_text_element,
};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// Run payload. A run carries at most one kind of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunContent {
    /// Literal text. Tabs and line breaks are written as `<w:tab/>` and `<w:br/>`.
    Text(String),
    /// Field instruction code, e.g. `PAGE` or `HYPERLINK "..."`
    FieldInstruction(String),
    /// Embedded picture
    Drawing(Drawing),
}

/// A run within a paragraph or hyperlink.
///
/// Represents a `<w:r>` element: optional formatting plus one payload.
/// A run without payload is empty and is dropped when read back.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Run {
    /// Run properties (`<w:rPr>` inside the run)
    pub properties: Option<RunProperties>,
    /// Run payload
    pub content: Option<RunContent>,
}

impl Run {
    /// Create an empty run.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a text run.
    pub fn with_text(text: impl Into<String>) -> Self {
        Self {
            properties: None,
            content: Some(RunContent::Text(text.into())),
        }
    }

    /// Create a run holding a field instruction.
    pub fn with_field(instruction: impl Into<String>) -> Self {
        Self {
            properties: None,
            content: Some(RunContent::FieldInstruction(instruction.into())),
        }
    }

    /// Create a run holding a picture.
    pub fn with_drawing(drawing: Drawing) -> Self {
        Self {
            properties: None,
            content: Some(RunContent::Drawing(drawing)),
        }
    }

    /// Whether the run carries no text, no field instruction and no drawing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_none()
    }

    /// Set the text content, replacing any other payload.
    pub fn set_text(&mut self, text: &str) {
        self.content = Some(RunContent::Text(text.to_string()));
    }

    /// Get the text content, if this is a text run.
    pub fn text(&self) -> Option<&str> {
        match self.content {
            Some(RunContent::Text(ref s)) => Some(s),
            _ => None,
        }
    }

    /// Get the field instruction, if this is a field run.
    pub fn field_instruction(&self) -> Option<&str> {
        match self.content {
            Some(RunContent::FieldInstruction(ref s)) => Some(s),
            _ => None,
        }
    }

    /// Get the picture, if this is a drawing run.
    pub fn drawing(&self) -> Option<&Drawing> {
        match self.content {
            Some(RunContent::Drawing(ref d)) => Some(d),
            _ => None,
        }
    }

    fn props(&mut self) -> &mut RunProperties {
        self.properties.get_or_insert_with(RunProperties::default)
    }

    /// Set text color using hex RGB (e.g., "FF0000" for red).
    pub fn color(&mut self, color: &str) -> &mut Self {
        self.props().color = Some(color.to_string());
        self
    }

    /// Set font size in half-points (e.g., 24 = 12pt).
    pub fn size(&mut self, size: u32) -> &mut Self {
        self.props().size = Some(size);
        self
    }

    /// Make the text bold.
    pub fn bold(&mut self, bold: bool) -> &mut Self {
        self.props().bold = Some(bold);
        self
    }

    /// Make the text italic.
    pub fn italic(&mut self, italic: bool) -> &mut Self {
        self.props().italic = Some(italic);
        self
    }

    /// Strike the text through.
    pub fn strike(&mut self, strike: bool) -> &mut Self {
        self.props().strike = Some(strike);
        self
    }

    /// Set underline style.
    pub fn underline(&mut self, style: UnderlineStyle) -> &mut Self {
        self.props().underline = Some(style);
        self
    }

    /// Set font name.
    pub fn font(&mut self, name: &str) -> &mut Self {
        self.props().font = Some(name.to_string());
        self
    }

    /// Set text highlight color.
    pub fn highlight(&mut self, color: &str) -> &mut Self {
        self.props().highlight = Some(color.to_string());
        self
    }

    /// Set the character style.
    pub fn style(&mut self, style_id: &str) -> &mut Self {
        self.props().style = Some(style_id.to_string());
        self
    }

    /// Raise or lower the text.
    pub fn vertical_align(&mut self, align: VerticalAlign) -> &mut Self {
        self.props().vertical_align = Some(align);
        self
    }

    /// Write this run as `<w:r>`.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        write_start(writer, "w:r", &[])?;

        if let Some(ref props) = self.properties {
            props.encode(writer)?;
        }

        match self.content {
            Some(RunContent::Text(ref text)) => encode_text(writer, text)?,
            Some(RunContent::FieldInstruction(ref instr)) => {
                write_text_element(writer, text_start("w:instrText", instr), instr)?
            },
            Some(RunContent::Drawing(ref drawing)) => drawing.encode(writer)?,
            None => {},
        }

        write_end(writer, "w:r")
    }

    /// Decode the content of a `<w:r>` element.
    ///
    /// The reader must be positioned just after the start tag; `empty` tells
    /// whether it was self-closing. The first payload kind met decides the
    /// content: further `t`/`tab`/`br` extend a text run, further `instrText`
    /// extends a field run, and anything else is skipped. Page and column
    /// breaks are skipped too; only line breaks become text.
    pub fn decode<R: BufRead>(reader: &mut Reader<R>, empty: bool) -> DecodeResult<Self> {
        let mut run = Self::new();
        if empty {
            return Ok(run);
        }

        let mut buf = Vec::new();
        loop {
            match next_event(reader, &mut buf)? {
                Event::Start(e) => run.apply(reader, &e, false)?,
                Event::Empty(e) => run.apply(reader, &e, true)?,
                Event::End(_) => return Ok(run),
                Event::Eof => return Err(DecodeError::Truncated),
                _ => {},
            }
        }
    }

    fn apply<R: BufRead>(
        &mut self,
        reader: &mut Reader<R>,
        e: &BytesStart<'_>,
        empty: bool,
    ) -> DecodeResult<()> {
        match e.local_name().as_ref() {
            b"rPr" => self.properties = Some(RunProperties::decode(reader, empty)?),
            b"t" => {
                let text = if empty { String::new() } else { read_text(reader, e)? };
                self.push_text(&text);
            },
            b"br" if !is_line_break(e)? => {
                log::trace!("skipping page or column break inside run");
                if !empty {
                    skip_element(reader, e)?;
                }
            },
            b"tab" | b"br" | b"cr" => {
                if !empty {
                    skip_element(reader, e)?;
                }
                self.push_text(if e.local_name().as_ref() == b"tab" { "\t" } else { "\n" });
            },
            b"instrText" => {
                let instr = if empty { String::new() } else { read_text(reader, e)? };
                if !instr.is_empty() {
                    match self.content {
                        None => self.content = Some(RunContent::FieldInstruction(instr)),
                        Some(RunContent::FieldInstruction(ref mut existing)) => existing.push_str(&instr),
                        Some(_) => {},
                    }
                }
            },
            b"drawing" if !empty && self.content.is_none() => {
                self.content = Some(RunContent::Drawing(Drawing::decode(reader)?));
            },
            _ => {
                log::trace!("skipping <{}> inside run", local_name(e));
                if !empty {
                    skip_element(reader, e)?;
                }
            },
        }
        Ok(())
    }

    fn push_text(&mut self, text: &str) {
        match self.content {
            None => self.content = Some(RunContent::Text(text.to_string())),
            Some(RunContent::Text(ref mut existing)) => existing.push_str(text),
            Some(_) => {},
        }
    }
}

/// Whether a `<w:br>` is a plain line break. Page and column breaks are not text.
fn is_line_break(e: &BytesStart<'_>) -> DecodeResult<bool> {
    Ok(attribute(e, b"type")?.is_none_or(|kind| kind.is_empty() || kind == "textWrapping"))
}

/// Start tag for a text-bearing element, preserving edge whitespace when needed.
fn text_start<'a>(name: &'a str, text: &str) -> BytesStart<'a> {
    let mut start = BytesStart::new(name);
    if needs_space_preserve(text) {
        start.push_attribute(("xml:space", "preserve"));
    }
    start
}

/// Write text as `<w:t>` segments separated by `<w:tab/>` and `<w:br/>`.
fn encode_text<W: Write>(writer: &mut Writer<W>, text: &str) -> EncodeResult<()> {
    if text.is_empty() {
        return write_text_element(writer, BytesStart::new("w:t"), "");
    }

    for segment in text.split_inclusive(['\t', '\n']) {
        let (body, sep) = match segment.char_indices().last() {
            Some((idx, c @ ('\t' | '\n'))) => (&segment[..idx], Some(c)),
            _ => (segment, None),
        };
        if !body.is_empty() {
            write_text_element(writer, text_start("w:t", body), body)?;
        }
        match sep {
            Some('\t') => write_empty(writer, "w:tab", &[])?,
            Some(_) => write_empty(writer, "w:br", &[])?,
            None => {},
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn encode(run: &Run) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        run.encode(&mut writer).unwrap();
        String::from_utf8(writer.into_inner().into_inner()).unwrap()
    }

    fn decode(xml: &str) -> DecodeResult<Run> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        loop {
            match next_event(&mut reader, &mut buf)? {
                Event::Start(_) => return Run::decode(&mut reader, false),
                Event::Empty(_) => return Run::decode(&mut reader, true),
                Event::Eof => panic!("no run"),
                _ => {},
            }
        }
    }

    #[test]
    fn test_text_run() {
        let run = decode("<w:r><w:t>hi</w:t></w:r>").unwrap();
        assert_eq!(run.text(), Some("hi"));
        assert!(run.properties.is_none());
    }

    #[test]
    fn test_empty_runs() {
        assert!(decode("<w:r></w:r>").unwrap().is_empty());
        assert!(decode("<w:r/>").unwrap().is_empty());
        assert!(decode(r#"<w:r><w:rPr><w:b/></w:rPr><w:fldChar w:fldCharType="begin"/></w:r>"#).unwrap().is_empty());
        assert!(decode("<w:r><w:instrText></w:instrText></w:r>").unwrap().is_empty());
    }

    #[test]
    fn test_self_closing_text_is_content() {
        let run = decode("<w:r><w:t/></w:r>").unwrap();
        assert_eq!(run.text(), Some(""));
    }

    #[test]
    fn test_tab_and_break_become_characters() {
        let run = decode("<w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r>").unwrap();
        assert_eq!(run.text(), Some("a\tb\nc"));
        assert_eq!(
            encode(&run),
            "<w:r><w:t>a</w:t><w:tab/><w:t>b</w:t><w:br/><w:t>c</w:t></w:r>"
        );
    }

    #[test]
    fn test_page_and_column_breaks_skipped() {
        let run = decode(
            r#"<w:r><w:t>a</w:t><w:br w:type="page"/><w:t>b</w:t><w:br w:type="column"/><w:cr/><w:br w:type="textWrapping"/></w:r>"#,
        )
        .unwrap();
        assert_eq!(run.text(), Some("ab\n\n"));

        let run = decode(r#"<w:r><w:br w:type="page"/></w:r>"#).unwrap();
        assert!(run.is_empty());
    }

    #[test]
    fn test_whitespace_is_preserved() {
        let run = Run::with_text("  spaced ");
        let xml = encode(&run);
        assert_eq!(xml, r#"<w:r><w:t xml:space="preserve">  spaced </w:t></w:r>"#);
        assert_eq!(decode(&xml).unwrap(), run);
    }

    #[test]
    fn test_escaping() {
        let run = Run::with_text("a < b & c");
        let xml = encode(&run);
        assert_eq!(xml, "<w:r><w:t>a &lt; b &amp; c</w:t></w:r>");
        assert_eq!(decode(&xml).unwrap(), run);
    }

    #[test]
    fn test_field_instruction() {
        let run = decode(r#"<w:r><w:instrText xml:space="preserve"> PAGE </w:instrText></w:r>"#).unwrap();
        assert_eq!(run.field_instruction(), Some(" PAGE "));
        assert_eq!(decode(&encode(&run)).unwrap(), run);
    }

    #[test]
    fn test_first_payload_kind_wins() {
        let run = decode("<w:r><w:instrText>PAGE</w:instrText><w:t>ignored</w:t><w:instrText> \\* MERGEFORMAT</w:instrText></w:r>").unwrap();
        assert_eq!(run.field_instruction(), Some("PAGE \\* MERGEFORMAT"));
    }

    #[test]
    fn test_builder_formatting() {
        let mut run = Run::with_text("red");
        run.color("FF0000").size(32).bold(true);
        assert_eq!(
            encode(&run),
            r#"<w:r><w:rPr><w:b/><w:color w:val="FF0000"/><w:sz w:val="32"/></w:rPr><w:t>red</w:t></w:r>"#
        );
        assert_eq!(decode(&encode(&run)).unwrap(), run);
    }

    #[test]
    fn test_unknown_run_children_skipped() {
        let run = decode(r#"<w:r><w:lastRenderedPageBreak/><mc:AlternateContent><w:t>x</w:t></mc:AlternateContent><w:t>kept</w:t></w:r>"#).unwrap();
        assert_eq!(run.text(), Some("kept"));
    }

    #[test]
    fn test_drawing_run() {
        let run = Run::with_drawing(Drawing::new(1, "rId5", 10, 20));
        let decoded = decode(&encode(&run)).unwrap();
        assert_eq!(decoded.drawing().map(|d| d.embed.as_str()), Some("rId5"));
        assert_eq!(decoded, run);
    }

    #[test]
    fn test_truncated_run() {
        assert!(matches!(decode("<w:r><w:t>hi</w:t>"), Err(DecodeError::Truncated)));
    }
}
