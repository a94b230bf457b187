use std::io::{self, Write};

use crate::sink::PdfWrite;

/// Byte-order mark prefixed to every transcoded text string.
const UTF16_BOM: [u8; 2] = [0xFE, 0xFF];

/// How a [`PdfString`] is delimited in the output.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum StringMode {
    /// `(...)` with backslash escapes.
    #[default]
    Literal,
    /// `<...>` with two uppercase hex digits per byte.
    Hexadecimal,
}

/// Escape used for bytes `>= 127` inside a literal string.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum LiteralEscape {
    /// Three octal digits, `\376`.
    #[default]
    Octal,
    /// Decimal digits, `\254`. Not understood by PDF readers as the byte
    /// value, kept for reproducing files written by older producers.
    Decimal,
}

#[derive(Debug, PartialEq, Clone)]
enum Content {
    /// Text fragments in append order, transcoded to UTF-16BE on write.
    Text(Vec<String>),
    /// Bytes written as they are.
    Bytes(Vec<u8>),
}

/// Represents string values in a PDF document.
///
/// A text string is built from one or more fragments so long values can be
/// assembled without repeated concatenation. On output the fragments are
/// transcoded to UTF-16BE behind a single byte-order mark and then rendered
/// either as a literal or as a hexadecimal string.
///
/// Byte strings skip transcoding. They carry identifiers and date strings.
///
/// # Examples
/// ```text
/// (\376\377\0A)     // "A" as a literal string
/// <FEFF0041>        // "A" as a hexadecimal string
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct PdfString {
    content: Content,
    mode: StringMode,
    escape: LiteralEscape,
}

impl PdfString {
    pub fn new(text: impl Into<String>, mode: StringMode) -> Self {
        Self {
            content: Content::Text(vec![text.into()]),
            mode,
            escape: LiteralEscape::default(),
        }
    }

    pub fn literal(text: impl Into<String>) -> Self {
        Self::new(text, StringMode::Literal)
    }

    pub fn hexadecimal(text: impl Into<String>) -> Self {
        Self::new(text, StringMode::Hexadecimal)
    }

    pub fn from_bytes(bytes: impl Into<Vec<u8>>, mode: StringMode) -> Self {
        Self {
            content: Content::Bytes(bytes.into()),
            mode,
            escape: LiteralEscape::default(),
        }
    }

    pub fn with_escape(mut self, escape: LiteralEscape) -> Self {
        self.escape = escape;
        self
    }

    pub fn mode(&self) -> StringMode {
        self.mode
    }

    /// Appends a fragment. Byte strings take the fragment's UTF-8 bytes.
    pub fn append(&mut self, fragment: impl Into<String>) -> &mut Self {
        match &mut self.content {
            Content::Text(fragments) => fragments.push(fragment.into()),
            Content::Bytes(bytes) => bytes.extend_from_slice(fragment.into().as_bytes()),
        }

        self
    }

    /// Returns the bytes placed between the delimiters before escaping.
    pub fn encoded(&self) -> Vec<u8> {
        match &self.content {
            Content::Text(fragments) => {
                let units: usize = fragments.iter().map(|fragment| fragment.len()).sum();
                let mut result = Vec::with_capacity(UTF16_BOM.len() + units * 2);
                result.extend_from_slice(&UTF16_BOM);

                for unit in fragments.iter().flat_map(|fragment| fragment.encode_utf16()) {
                    result.extend_from_slice(&unit.to_be_bytes());
                }

                result
            }
            Content::Bytes(bytes) => bytes.clone(),
        }
    }

    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let bytes = self.encoded();

        match self.mode {
            StringMode::Hexadecimal => {
                sink.write_byte(b'<')?;
                for byte in bytes {
                    write!(sink, "{byte:02X}")?;
                }
                sink.write_byte(b'>')
            }
            StringMode::Literal => {
                sink.write_byte(b'(')?;
                for byte in bytes {
                    self.write_literal_byte(sink, byte)?;
                }
                sink.write_byte(b')')
            }
        }
    }

    fn write_literal_byte<W: Write + ?Sized>(&self, sink: &mut W, byte: u8) -> io::Result<()> {
        match byte {
            b'\n' => sink.write_string("\\n"),
            b'\r' => sink.write_string("\\r"),
            b'\t' => sink.write_string("\\t"),
            0x08 => sink.write_string("\\b"),
            0x0C => sink.write_string("\\f"),
            b'(' | b')' | b'\\' => sink.write_bytes(&[b'\\', byte]),
            0..127 => sink.write_byte(byte),
            _ => match self.escape {
                LiteralEscape::Octal => write!(sink, "\\{byte:03o}"),
                LiteralEscape::Decimal => write!(sink, "\\{byte}"),
            },
        }
    }
}

impl std::fmt::Display for PdfString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.content {
            Content::Text(fragments) => fragments
                .iter()
                .try_for_each(|fragment| f.write_str(fragment)),
            Content::Bytes(bytes) => f.write_str(&String::from_utf8_lossy(bytes)),
        }
    }
}

impl From<&str> for PdfString {
    fn from(value: &str) -> Self {
        Self::literal(value)
    }
}

impl From<String> for PdfString {
    fn from(value: String) -> Self {
        Self::literal(value)
    }
}
