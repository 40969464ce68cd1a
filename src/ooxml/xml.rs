//! Shared token-stream helpers for the WordprocessingML codec.
//!
//! Elements are matched by local name only, so any prefix binding for the
//! main namespace is accepted on input. Output always uses the canonical
//! prefixes declared below.
use crate::ooxml::error::{DecodeError, DecodeResult, EncodeResult};
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::escape::{resolve_predefined_entity, unescape};
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Write};

/// WordprocessingML main namespace.
pub const WORDPROCESSINGML_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
/// Office document relationships namespace.
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// WordprocessingML drawing namespace.
pub const WP_DRAWING_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
/// DrawingML main namespace.
pub const DRAWINGML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// DrawingML picture namespace.
pub const PICTURE_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Read the next event, classifying tokenizer failures.
#[inline]
pub(crate) fn next_event<'b, R: BufRead>(
    reader: &mut Reader<R>,
    buf: &'b mut Vec<u8>,
) -> DecodeResult<Event<'b>> {
    buf.clear();
    reader.read_event_into(buf).map_err(DecodeError::from)
}

/// Local name of an element, for error reporting.
pub(crate) fn local_name(start: &BytesStart<'_>) -> String {
    String::from_utf8_lossy(start.local_name().as_ref()).into_owned()
}

/// Find an attribute by local name and return its unescaped value.
pub(crate) fn attribute(start: &BytesStart<'_>, local: &[u8]) -> DecodeResult<Option<String>> {
    for attr in start.attributes() {
        let attr = attr.map_err(|_| DecodeError::malformed(local_name(start)))?;
        if attr.key.local_name().as_ref() == local {
            let value = attr
                .unescape_value()
                .map_err(|_| DecodeError::malformed(local_name(start)))?;
            return Ok(Some(value.into_owned()));
        }
    }
    Ok(None)
}

/// Parse a numeric attribute; a value that is present but not a number is malformed.
pub(crate) fn numeric_attribute<T: std::str::FromStr>(
    start: &BytesStart<'_>,
    local: &[u8],
) -> DecodeResult<Option<T>> {
    match attribute(start, local)? {
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| DecodeError::malformed(local_name(start))),
        None => Ok(None),
    }
}

/// Skip an element and its whole subtree.
///
/// `start` must be the start tag just read from `reader`.
pub(crate) fn skip_element<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart<'_>,
) -> DecodeResult<()> {
    let mut buf = Vec::new();
    reader.read_to_end_into(start.name(), &mut buf)?;
    Ok(())
}

/// Collect the character content of an element, descending into children.
///
/// Entity and character references are resolved. Text is not trimmed.
pub(crate) fn read_text<R: BufRead>(
    reader: &mut Reader<R>,
    start: &BytesStart<'_>,
) -> DecodeResult<String> {
    let tag = local_name(start);
    let mut text = String::new();
    let mut buf = Vec::new();
    let mut depth = 0usize;

    loop {
        match next_event(reader, &mut buf)? {
            Event::Start(_) => depth += 1,
            Event::End(_) => {
                if depth == 0 {
                    return Ok(text);
                }
                depth -= 1;
            },
            Event::Text(e) => {
                let raw = std::str::from_utf8(&e).map_err(|_| DecodeError::malformed(&tag))?;
                let unescaped = unescape(raw).map_err(|_| DecodeError::malformed(&tag))?;
                text.push_str(&unescaped);
            },
            Event::CData(e) => {
                let raw = std::str::from_utf8(&e).map_err(|_| DecodeError::malformed(&tag))?;
                text.push_str(raw);
            },
            Event::GeneralRef(e) => {
                let resolved = e.resolve_char_ref().map_err(|_| DecodeError::malformed(&tag))?;
                if let Some(ch) = resolved {
                    text.push(ch);
                } else {
                    let name = std::str::from_utf8(&e).map_err(|_| DecodeError::malformed(&tag))?;
                    let entity =
                        resolve_predefined_entity(name).ok_or_else(|| DecodeError::malformed(&tag))?;
                    text.push_str(entity);
                }
            },
            Event::Eof => return Err(DecodeError::Truncated),
            _ => {},
        }
    }
}

/// Write `<name/>` with the given attributes.
pub(crate) fn write_empty<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> EncodeResult<()> {
    let mut elem = BytesStart::new(name);
    for attr in attributes {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Empty(elem))?;
    Ok(())
}

/// Write `<name>` with the given attributes.
pub(crate) fn write_start<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    attributes: &[(&str, &str)],
) -> EncodeResult<()> {
    let mut elem = BytesStart::new(name);
    for attr in attributes {
        elem.push_attribute(*attr);
    }
    writer.write_event(Event::Start(elem))?;
    Ok(())
}

/// Write `<name w:val="value"/>`.
pub(crate) fn write_val<W: Write>(writer: &mut Writer<W>, name: &str, value: &str) -> EncodeResult<()> {
    write_empty(writer, name, &[("w:val", value)])
}

/// Write `<name>text</name>`, escaping the text.
pub(crate) fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    start: BytesStart<'_>,
    text: &str,
) -> EncodeResult<()> {
    let end = start.to_end().into_owned();
    writer.write_event(Event::Start(start))?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    writer.write_event(Event::End(end))?;
    Ok(())
}

/// Write an end tag.
#[inline]
pub(crate) fn write_end<W: Write>(writer: &mut Writer<W>, name: &str) -> EncodeResult<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

/// Whether text needs `xml:space="preserve"` to survive a consumer that trims.
pub(crate) fn needs_space_preserve(text: &str) -> bool {
    text.starts_with(char::is_whitespace) || text.ends_with(char::is_whitespace)
}

/// Parse an OOXML on/off value (`ST_OnOff`).
pub(crate) fn parse_on_off(value: &str) -> Option<bool> {
    match value {
        "1" | "true" | "on" => Some(true),
        "0" | "false" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_start(reader: &mut Reader<&[u8]>) -> BytesStart<'static> {
        let mut buf = Vec::new();
        loop {
            match next_event(reader, &mut buf).unwrap() {
                Event::Start(e) => return e.into_owned(),
                Event::Eof => panic!("no start tag"),
                _ => {},
            }
        }
    }

    #[test]
    fn test_read_text_resolves_references() {
        let mut reader = Reader::from_str(r#"<w:t>a &amp; b &#x41;&lt;</w:t>"#);
        let start = first_start(&mut reader);
        assert_eq!(read_text(&mut reader, &start).unwrap(), "a & b A<");
    }

    #[test]
    fn test_read_text_keeps_whitespace() {
        let mut reader = Reader::from_str("<w:t xml:space=\"preserve\">  two  </w:t>");
        let start = first_start(&mut reader);
        assert_eq!(read_text(&mut reader, &start).unwrap(), "  two  ");
    }

    #[test]
    fn test_read_text_truncated() {
        let mut reader = Reader::from_str("<w:t>never closed");
        let start = first_start(&mut reader);
        assert!(matches!(read_text(&mut reader, &start), Err(DecodeError::Truncated)));
    }

    #[test]
    fn test_attribute_by_local_name() {
        let mut reader = Reader::from_str(r#"<w:hyperlink r:id="rId7" w:anchor="top"></w:hyperlink>"#);
        let start = first_start(&mut reader);
        assert_eq!(attribute(&start, b"id").unwrap().as_deref(), Some("rId7"));
        assert_eq!(attribute(&start, b"anchor").unwrap().as_deref(), Some("top"));
        assert_eq!(attribute(&start, b"tooltip").unwrap(), None);
    }

    #[test]
    fn test_numeric_attribute_rejects_garbage() {
        let mut reader = Reader::from_str(r#"<w:sz w:val="big"></w:sz>"#);
        let start = first_start(&mut reader);
        let result: DecodeResult<Option<u32>> = numeric_attribute(&start, b"val");
        assert!(matches!(result, Err(DecodeError::Malformed(ref tag)) if tag == "sz"));
    }

    #[test]
    fn test_space_preserve_detection() {
        assert!(needs_space_preserve(" lead"));
        assert!(needs_space_preserve("trail\t"));
        assert!(!needs_space_preserve("in side"));
        assert!(!needs_space_preserve(""));
    }
}
