//! Paragraph content as an ordered sequence of typed children.
//!
//! A `<w:p>` element interleaves runs, hyperlinks and run-property blocks in
//! an order that matters and with no fixed count per kind. [`Children`]
//! keeps them as a list of [`ParagraphChild`] values; encoding walks the list
//! in order and decoding classifies each child tag by its local name.
//!
//! # Example
//!
//! ```rust
//! use wordml::ooxml::docx::Paragraph;
//!
//! let mut para = Paragraph::new();
//! para.add_text("See ").bold(true);
//! para.add_link("rId4", "the report");
//!
//! let xml = para.to_xml()?;
//! let back = Paragraph::from_xml(&xml)?;
//! assert_eq!(back, para);
//! assert_eq!(back.text(), "See the report");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
use super::drawing::Drawing;
use super::format::RunProperties;
use super::hyperlink::Hyperlink;
use super::options::WriteOptions;
use super::run::Run;
use crate::ooxml::error::{DecodeError, DecodeResult, EncodeError, EncodeResult};
use crate::ooxml::xml::{
    RELATIONSHIPS_NS, WORDPROCESSINGML_NS, local_name, next_event, skip_element, write_empty,
    write_end, write_start,
};
use quick_xml::events::Event;
use quick_xml::{Reader, Writer};
use std::io::{BufRead, Cursor, Write};

/// One child of a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParagraphChild {
    /// `<w:hyperlink>`
    Link(Hyperlink),
    /// `<w:r>`
    Run(Run),
    /// `<w:rPr>`
    Properties(RunProperties),
}

impl ParagraphChild {
    /// Write the single element for this child.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        match self {
            Self::Link(link) => link.encode(writer),
            Self::Run(run) => run.encode(writer),
            Self::Properties(props) => props.encode(writer),
        }
    }
}

impl From<Hyperlink> for ParagraphChild {
    fn from(link: Hyperlink) -> Self {
        Self::Link(link)
    }
}

impl From<Run> for ParagraphChild {
    fn from(run: Run) -> Self {
        Self::Run(run)
    }
}

impl From<RunProperties> for ParagraphChild {
    fn from(props: RunProperties) -> Self {
        Self::Properties(props)
    }
}

/// Ordered children of one paragraph. Append-only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Children {
    nodes: Vec<ParagraphChild>,
}

impl Children {
    /// Create an empty sequence.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a child at the end.
    #[inline]
    pub fn append(&mut self, node: ParagraphChild) {
        self.nodes.push(node);
    }

    /// Add a child at the end and return it.
    fn append_last(&mut self, node: ParagraphChild) -> &mut ParagraphChild {
        let idx = self.nodes.len();
        self.nodes.push(node);
        &mut self.nodes[idx]
    }

    /// Iterate the children in insertion order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, ParagraphChild> {
        self.nodes.iter()
    }

    /// Number of children.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Write every child in order, one element per child.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        for node in &self.nodes {
            node.encode(writer)?;
        }
        Ok(())
    }

    /// Decode a sequence of children until the end of input.
    ///
    /// `hyperlink`, `r` and `rPr` elements become children; runs without
    /// text, field instruction or drawing are dropped; every other element is
    /// skipped with its subtree. Nothing partial is returned on error.
    pub fn decode<R: BufRead>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        Self::decode_until(reader, false)
    }

    /// Decode children from an XML fragment such as the inside of a `<w:p>`.
    pub fn from_xml(xml: &str) -> DecodeResult<Self> {
        let mut reader = Reader::from_str(xml);
        Self::decode(&mut reader)
    }

    /// With `enclosed`, stop at the parent's end tag and treat end of input
    /// as truncation; otherwise stop at end of input.
    fn decode_until<R: BufRead>(reader: &mut Reader<R>, enclosed: bool) -> DecodeResult<Self> {
        let mut children = Self::new();
        let mut buf = Vec::new();

        loop {
            let (e, empty) = match next_event(reader, &mut buf)? {
                Event::Start(e) => (e, false),
                Event::Empty(e) => (e, true),
                Event::End(e) if !enclosed => {
                    return Err(DecodeError::malformed(String::from_utf8_lossy(
                        e.local_name().as_ref(),
                    )));
                },
                Event::End(_) => return Ok(children),
                Event::Eof if enclosed => return Err(DecodeError::Truncated),
                Event::Eof => return Ok(children),
                _ => continue,
            };

            match e.local_name().as_ref() {
                b"hyperlink" => {
                    let link = Hyperlink::decode(reader, &e, empty)?;
                    children.append(ParagraphChild::Link(link));
                },
                b"r" => {
                    let run = Run::decode(reader, empty)?;
                    if run.is_empty() {
                        log::debug!("dropping run without text, field instruction or drawing");
                    } else {
                        children.append(ParagraphChild::Run(run));
                    }
                },
                b"rPr" => {
                    let props = RunProperties::decode(reader, empty)?;
                    children.append(ParagraphChild::Properties(props));
                },
                _ => {
                    log::trace!("skipping unsupported paragraph child <{}>", local_name(&e));
                    if !empty {
                        skip_element(reader, &e)?;
                    }
                },
            }
        }
    }
}

impl<'a> IntoIterator for &'a Children {
    type Item = &'a ParagraphChild;
    type IntoIter = std::slice::Iter<'a, ParagraphChild>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

impl FromIterator<ParagraphChild> for Children {
    fn from_iter<I: IntoIterator<Item = ParagraphChild>>(iter: I) -> Self {
        Self {
            nodes: iter.into_iter().collect(),
        }
    }
}

impl Extend<ParagraphChild> for Children {
    fn extend<I: IntoIterator<Item = ParagraphChild>>(&mut self, iter: I) {
        self.nodes.extend(iter);
    }
}

/// A paragraph in a Word document.
///
/// Represents a `<w:p>` element. Paragraph properties (`<w:pPr>`) are not
/// modeled and are skipped when reading.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    children: Children,
}

impl Paragraph {
    /// Create an empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ordered children of this paragraph.
    #[inline]
    pub fn children(&self) -> &Children {
        &self.children
    }

    /// Append a child.
    pub fn push(&mut self, child: impl Into<ParagraphChild>) {
        self.children.append(child.into());
    }

    /// Add an empty run; it is only written out once it gets content.
    pub fn add_run(&mut self) -> &mut Run {
        self.push_run(Run::new())
    }

    /// Add a run with text.
    pub fn add_text(&mut self, text: &str) -> &mut Run {
        self.push_run(Run::with_text(text))
    }

    /// Add a run holding a field instruction such as `PAGE`.
    pub fn add_field(&mut self, instruction: &str) -> &mut Run {
        self.push_run(Run::with_field(instruction))
    }

    /// Add a run holding a picture.
    pub fn add_drawing(&mut self, drawing: Drawing) -> &mut Run {
        self.push_run(Run::with_drawing(drawing))
    }

    /// Add a hyperlink through the relationship `r_id`, displaying `text`.
    pub fn add_link(&mut self, r_id: &str, text: &str) -> &mut Hyperlink {
        let mut link = Hyperlink::new(r_id);
        link.add_run(Run::with_text(text));
        self.push_link(link)
    }

    /// Add a hyperlink to the bookmark `anchor`, displaying `text`.
    pub fn add_anchor_link(&mut self, anchor: &str, text: &str) -> &mut Hyperlink {
        let mut link = Hyperlink::to_anchor(anchor);
        link.add_run(Run::with_text(text));
        self.push_link(link)
    }

    /// Add a run-properties block.
    pub fn add_properties(&mut self, props: RunProperties) -> &mut RunProperties {
        match self.children.append_last(ParagraphChild::Properties(props)) {
            ParagraphChild::Properties(p) => p,
            _ => unreachable!(),
        }
    }

    fn push_run(&mut self, run: Run) -> &mut Run {
        match self.children.append_last(ParagraphChild::Run(run)) {
            ParagraphChild::Run(r) => r,
            _ => unreachable!(),
        }
    }

    fn push_link(&mut self, link: Hyperlink) -> &mut Hyperlink {
        match self.children.append_last(ParagraphChild::Link(link)) {
            ParagraphChild::Link(l) => l,
            _ => unreachable!(),
        }
    }

    /// Text of the paragraph, including link text. Drawings and fields contribute nothing.
    pub fn text(&self) -> String {
        let mut text = String::new();
        for child in &self.children {
            match child {
                ParagraphChild::Run(run) => text.push_str(run.text().unwrap_or_default()),
                ParagraphChild::Link(link) => text.push_str(&link.text()),
                ParagraphChild::Properties(_) => {},
            }
        }
        text
    }

    /// Write this paragraph as `<w:p>`.
    pub fn encode<W: Write>(&self, writer: &mut Writer<W>) -> EncodeResult<()> {
        self.encode_with(writer, &WriteOptions::default())
    }

    /// Write this paragraph as `<w:p>` using `options`.
    ///
    /// Indentation is a property of the writer; only namespace declaration
    /// is taken from `options` here.
    pub fn encode_with<W: Write>(&self, writer: &mut Writer<W>, options: &WriteOptions) -> EncodeResult<()> {
        let namespaces: &[(&str, &str)] = if options.declare_namespaces {
            &[("xmlns:w", WORDPROCESSINGML_NS), ("xmlns:r", RELATIONSHIPS_NS)]
        } else {
            &[]
        };

        if self.children.is_empty() {
            return write_empty(writer, "w:p", namespaces);
        }

        write_start(writer, "w:p", namespaces)?;
        self.children.encode(writer)?;
        write_end(writer, "w:p")
    }

    /// Serialize to an XML string.
    pub fn to_xml(&self) -> EncodeResult<String> {
        self.to_xml_with(&WriteOptions::default())
    }

    /// Serialize to an XML string using `options`.
    pub fn to_xml_with(&self, options: &WriteOptions) -> EncodeResult<String> {
        let sink = Cursor::new(Vec::with_capacity(256));
        let mut writer = match options.indent {
            Some((ch, size)) => Writer::new_with_indent(sink, ch, size),
            None => Writer::new(sink),
        };
        self.encode_with(&mut writer, options)?;

        String::from_utf8(writer.into_inner().into_inner())
            .map_err(|e| EncodeError::Write(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
    }

    /// Decode a paragraph whose `<w:p>` start tag was just read.
    pub fn decode<R: BufRead>(reader: &mut Reader<R>, empty: bool) -> DecodeResult<Self> {
        if empty {
            return Ok(Self::new());
        }
        Ok(Self {
            children: Children::decode_until(reader, true)?,
        })
    }

    /// Parse the first `<w:p>` found in `xml`.
    ///
    /// Enclosing elements such as `<w:document>` or `<w:body>` are descended into.
    pub fn from_xml(xml: &str) -> DecodeResult<Self> {
        let mut reader = Reader::from_str(xml);
        Self::find_and_decode(&mut reader)
    }

    /// Parse the first `<w:p>` read from `source`.
    pub fn from_reader<R: BufRead>(source: R) -> DecodeResult<Self> {
        let mut reader = Reader::from_reader(source);
        Self::find_and_decode(&mut reader)
    }

    fn find_and_decode<R: BufRead>(reader: &mut Reader<R>) -> DecodeResult<Self> {
        let mut buf = Vec::new();
        loop {
            match next_event(reader, &mut buf)? {
                Event::Start(e) if e.local_name().as_ref() == b"p" => return Self::decode(reader, false),
                Event::Empty(e) if e.local_name().as_ref() == b"p" => return Self::decode(reader, true),
                Event::Eof => return Err(DecodeError::malformed("p")),
                _ => {},
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::docx::format::UnderlineStyle;
    use crate::ooxml::docx::hyperlink::LinkKind;

    fn encode(children: &Children) -> String {
        let mut writer = Writer::new(Cursor::new(Vec::new()));
        children.encode(&mut writer).unwrap();
        String::from_utf8(writer.into_inner().into_inner()).unwrap()
    }

    fn top_level_tags(xml: &str) -> Vec<String> {
        let mut reader = Reader::from_str(xml);
        let mut buf = Vec::new();
        let mut depth = 0usize;
        let mut tags = Vec::new();
        loop {
            match next_event(&mut reader, &mut buf).unwrap() {
                Event::Start(e) => {
                    if depth == 0 {
                        tags.push(local_name(&e));
                    }
                    depth += 1;
                },
                Event::Empty(e) if depth == 0 => tags.push(local_name(&e)),
                Event::End(_) => depth -= 1,
                Event::Eof => return tags,
                _ => {},
            }
        }
    }

    #[test]
    fn test_append_and_iterate_in_order() {
        let mut children = Children::new();
        children.append(Run::with_text("a").into());
        children.append(RunProperties::default().into());
        children.append(Run::with_text("b").into());

        let texts: Vec<_> = children
            .iter()
            .map(|c| match c {
                ParagraphChild::Run(r) => r.text().unwrap_or_default(),
                _ => "-",
            })
            .collect();
        assert_eq!(texts, ["a", "-", "b"]);
        // Iteration is restartable.
        assert_eq!(children.iter().count(), 3);
        assert_eq!((&children).into_iter().count(), 3);
    }

    #[test]
    fn test_encode_preserves_order() {
        let children: Children = [
            ParagraphChild::Properties(RunProperties::default()),
            ParagraphChild::Run(Run::with_text("a")),
            ParagraphChild::Link({
                let mut link = Hyperlink::new("http://x");
                link.add_run(Run::with_text("b"));
                link
            }),
            ParagraphChild::Run(Run::with_text("b")),
        ]
        .into_iter()
        .collect();

        let xml = encode(&children);
        assert_eq!(
            xml,
            r#"<w:rPr/><w:r><w:t>a</w:t></w:r><w:hyperlink r:id="http://x"><w:r><w:t>b</w:t></w:r></w:hyperlink><w:r><w:t>b</w:t></w:r>"#
        );
        assert_eq!(top_level_tags(&xml), ["rPr", "r", "hyperlink", "r"]);
        assert_eq!(Children::from_xml(&xml).unwrap(), children);
    }

    #[test]
    fn test_empty_run_suppressed() {
        assert!(Children::from_xml("<w:r></w:r>").unwrap().is_empty());

        let children = Children::from_xml("<w:r><w:t>hi</w:t></w:r>").unwrap();
        assert_eq!(children.len(), 1);
        match children.iter().next() {
            Some(ParagraphChild::Run(run)) => assert_eq!(run.text(), Some("hi")),
            other => panic!("expected run, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_elements_skipped() {
        let with = Children::from_xml(
            r#"<w:r><w:t>a</w:t></w:r><w:bookmarkStart w:id="0" w:name="x"/><w:r><w:t>b</w:t></w:r>"#,
        )
        .unwrap();
        let without = Children::from_xml(r#"<w:r><w:t>a</w:t></w:r><w:r><w:t>b</w:t></w:r>"#).unwrap();
        assert_eq!(with, without);

        let nested = Children::from_xml(
            r#"<w:pPr><w:rPr><w:b/></w:rPr></w:pPr><w:ins w:id="1"><w:r><w:t>tracked</w:t></w:r></w:ins><w:r><w:t>a</w:t></w:r><w:r><w:t>b</w:t></w:r>"#,
        )
        .unwrap();
        assert_eq!(nested, without);
    }

    #[test]
    fn test_skipped_elements_not_reemitted() {
        let children = Children::from_xml(
            r#"<w:proofErr w:type="spellStart"/><w:r><w:t>x</w:t></w:r><w:proofErr w:type="spellEnd"/>"#,
        )
        .unwrap();
        assert_eq!(encode(&children), "<w:r><w:t>x</w:t></w:r>");
    }

    #[test]
    fn test_identifier_precedence_pinned() {
        let children =
            Children::from_xml(r#"<w:hyperlink w:id="rId1" w:anchor="sec2"><w:r><w:t>t</w:t></w:r></w:hyperlink>"#)
                .unwrap();
        match children.iter().next() {
            Some(ParagraphChild::Link(link)) => {
                assert_eq!(link.id, "rId1");
                assert_eq!(link.kind, LinkKind::Relationship);
            },
            other => panic!("expected link, got {:?}", other),
        }
    }

    #[test]
    fn test_truncated_inside_run() {
        let err = Children::from_xml("<w:r><w:t>hi</w:t>").unwrap_err();
        assert!(matches!(err, DecodeError::Truncated));

        let err = Paragraph::from_xml("<w:p><w:r><w:t>hi</w:t></w:r>").unwrap_err();
        assert!(matches!(err, DecodeError::Truncated));
    }

    #[test]
    fn test_truncated_inside_markup() {
        let cases = [
            "<w:r><w:t",
            r#"<w:r><w:t xml:space="pres"#,
            r#"<w:hyperlink r:id="rId1"#,
            "<w:hyperlink r:id='rId1",
            "<w:r><?pi ",
            "<w:r><!-- note",
            "<w:r><w:t><![CDATA[x",
            r#"<w:hyperlink r:id="rId1"><w:r><w:t>a"#,
        ];
        for xml in cases {
            let err = Children::from_xml(xml).unwrap_err();
            assert!(matches!(err, DecodeError::Truncated), "{xml}: {err:?}");
        }

        let err = Paragraph::from_xml(r#"<w:p><w:r><w:rPr><w:color w:val="FF"#).unwrap_err();
        assert!(matches!(err, DecodeError::Truncated));
    }

    #[test]
    fn test_malformed_payload() {
        let err = Children::from_xml(r#"<w:r><w:rPr><w:sz w:val="x"/></w:rPr><w:t>a</w:t></w:r>"#).unwrap_err();
        assert!(matches!(err, DecodeError::Malformed(ref tag) if tag == "sz"));
    }

    #[test]
    fn test_paragraph_round_trip_with_builder() {
        let mut para = Paragraph::new();
        para.add_properties(RunProperties::default()).color = Some("FF0000".into());
        para.add_text("Hello ").bold(true).underline(UnderlineStyle::Single);
        para.add_link("rId2", "world").set_tooltip("greeting");
        para.add_anchor_link("_Toc1", " (top)");
        para.add_field("PAGE");
        para.add_drawing(Drawing::new(1, "rId3", 914_400, 457_200));
        para.add_run();

        let xml = para.to_xml().unwrap();
        assert!(xml.starts_with("<w:p><w:rPr><w:color"));
        assert!(xml.ends_with("</w:drawing></w:r><w:r></w:r></w:p>"));

        let back = Paragraph::from_xml(&xml).unwrap();
        // The empty run added last is not structurally meaningful.
        assert_eq!(back.children().len(), para.children().len() - 1);
        assert_eq!(back.text(), "Hello world (top)");
        assert_eq!(back.to_xml().unwrap(), xml.replace("<w:r></w:r>", ""));
    }

    #[test]
    fn test_paragraph_inside_document() {
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?><w:document xmlns:w="{}"><w:body><w:p><w:pPr><w:jc w:val="center"/></w:pPr><w:r><w:t>centered</w:t></w:r></w:p></w:body></w:document>"#,
            WORDPROCESSINGML_NS
        );
        let para = Paragraph::from_xml(&xml).unwrap();
        assert_eq!(para.text(), "centered");

        let para = Paragraph::from_reader(xml.as_bytes()).unwrap();
        assert_eq!(para.children().len(), 1);
    }

    #[test]
    fn test_empty_paragraph() {
        assert_eq!(Paragraph::new().to_xml().unwrap(), "<w:p/>");
        assert!(Paragraph::from_xml("<w:p/>").unwrap().children().is_empty());
        assert!(matches!(Paragraph::from_xml("<w:body/>"), Err(DecodeError::Malformed(ref t)) if t == "p"));
    }

    #[test]
    fn test_write_options() {
        let mut para = Paragraph::new();
        para.add_text("x");

        let xml = para.to_xml_with(&WriteOptions::new().with_namespaces(true)).unwrap();
        assert_eq!(
            xml,
            format!(
                r#"<w:p xmlns:w="{}" xmlns:r="{}"><w:r><w:t>x</w:t></w:r></w:p>"#,
                WORDPROCESSINGML_NS, RELATIONSHIPS_NS
            )
        );

        let pretty = para.to_xml_with(&WriteOptions::new().with_indent(b' ', 2)).unwrap();
        assert!(pretty.contains("\n  <w:r>"));
        assert_eq!(Paragraph::from_xml(&pretty).unwrap(), para);
    }

    #[test]
    fn test_sink_failure_propagates() {
        struct FailingSink;
        impl Write for FailingSink {
            fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
                Err(std::io::Error::other("disk full"))
            }
            fn flush(&mut self) -> std::io::Result<()> {
                Ok(())
            }
        }

        let mut para = Paragraph::new();
        para.add_text("x");
        let mut writer = Writer::new(FailingSink);
        assert!(matches!(para.encode(&mut writer), Err(EncodeError::Write(_))));
    }

    mod proptests {
        use super::*;
        use crate::ooxml::docx::format::VerticalAlign;
        use proptest::prelude::*;

        fn text_strategy() -> impl Strategy<Value = String> {
            "[a-zA-Z0-9 .,&<>'\"\t\n]{1,16}"
        }

        fn properties_strategy() -> impl Strategy<Value = RunProperties> {
            (
                proptest::option::of(any::<bool>()),
                proptest::option::of(any::<bool>()),
                proptest::option::of("[0-9A-F]{6}"),
                proptest::option::of(2u32..200),
                proptest::option::of(prop_oneof![
                    Just(VerticalAlign::Superscript),
                    Just(VerticalAlign::Subscript)
                ]),
            )
                .prop_map(|(bold, italic, color, size, vertical_align)| RunProperties {
                    bold,
                    italic,
                    color,
                    size,
                    vertical_align,
                    ..Default::default()
                })
        }

        fn run_strategy() -> impl Strategy<Value = Run> {
            let content = prop_oneof![
                text_strategy().prop_map(|t| Run::with_text(t)),
                "[A-Z]{1,8}( [a-z]{1,5})?".prop_map(|i| Run::with_field(i)),
                (1u32..100, "rId[0-9]{1,3}", 1u64..10_000_000, 1u64..10_000_000)
                    .prop_map(|(id, embed, w, h)| Run::with_drawing(Drawing::new(id, embed, w, h))),
            ];
            (content, proptest::option::of(properties_strategy())).prop_map(|(mut run, props)| {
                run.properties = props;
                run
            })
        }

        fn child_strategy() -> impl Strategy<Value = ParagraphChild> {
            prop_oneof![
                run_strategy().prop_map(ParagraphChild::Run),
                properties_strategy().prop_map(ParagraphChild::Properties),
                (
                    "rId[0-9]{1,3}",
                    any::<bool>(),
                    proptest::collection::vec(run_strategy(), 0..3)
                )
                    .prop_map(|(id, anchor, runs)| {
                        let mut link = if anchor { Hyperlink::to_anchor(id) } else { Hyperlink::new(id) };
                        link.runs.extend(runs);
                        ParagraphChild::Link(link)
                    }),
            ]
        }

        proptest! {
            #![proptest_config(ProptestConfig::with_cases(128))]

            #[test]
            fn prop_decode_inverts_encode(nodes in proptest::collection::vec(child_strategy(), 0..12)) {
                let children: Children = nodes.into_iter().collect();
                let xml = encode(&children);
                let decoded = Children::from_xml(&xml);
                prop_assert!(decoded.is_ok(), "decode failed: {:?}", decoded.err());
                let decoded = decoded.unwrap();
                prop_assert_eq!(&decoded, &children);
                prop_assert_eq!(encode(&decoded), xml);
            }
        }
    }
}
