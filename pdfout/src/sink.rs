use std::io::{self, Write};

/// End-of-line marker used for every line the writer emits.
pub const EOL: &[u8] = b"\r\n";

/// Width of a byte offset inside a cross-reference entry.
const OFFSET_WIDTH: usize = 10;

/// Output sink that remembers how many bytes went through it.
///
/// The writer never seeks, so the running count is the byte offset of the
/// next byte in the produced file. The underlying writer is neither opened
/// nor closed here; [`Sink::into_inner`] hands it back untouched.
#[derive(Debug)]
pub struct Sink<W> {
    inner: W,
    position: u64,
}

impl<W: Write> Sink<W> {
    pub fn new(inner: W) -> Self {
        Self { inner, position: 0 }
    }

    /// Byte offset of the next byte to be written.
    pub fn position(&self) -> u64 {
        self.position
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for Sink<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let written = self.inner.write(buf)?;
        self.position += written as u64;

        Ok(written)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Low-level output primitives shared by every serializable value.
///
/// Each primitive has an `_ln` twin that terminates the line with CRLF.
pub trait PdfWrite: Write {
    fn write_ln(&mut self) -> io::Result<()> {
        self.write_all(EOL)
    }

    fn write_string(&mut self, value: &str) -> io::Result<()> {
        self.write_all(value.as_bytes())
    }

    fn write_string_ln(&mut self, value: &str) -> io::Result<()> {
        self.write_string(value)?;
        self.write_ln()
    }

    fn write_int(&mut self, value: i32) -> io::Result<()> {
        write!(self, "{value}")
    }

    fn write_int_ln(&mut self, value: i32) -> io::Result<()> {
        self.write_int(value)?;
        self.write_ln()
    }

    fn write_long(&mut self, value: i64) -> io::Result<()> {
        write!(self, "{value}")
    }

    fn write_long_ln(&mut self, value: i64) -> io::Result<()> {
        self.write_long(value)?;
        self.write_ln()
    }

    fn write_byte(&mut self, value: u8) -> io::Result<()> {
        self.write_all(&[value])
    }

    fn write_byte_ln(&mut self, value: u8) -> io::Result<()> {
        self.write_byte(value)?;
        self.write_ln()
    }

    fn write_bytes(&mut self, value: &[u8]) -> io::Result<()> {
        self.write_all(value)
    }

    fn write_bytes_ln(&mut self, value: &[u8]) -> io::Result<()> {
        self.write_bytes(value)?;
        self.write_ln()
    }

    /// Writes `offset` left-padded with zeros to the fixed xref entry width.
    fn write_offset(&mut self, offset: u64) -> io::Result<()> {
        write!(self, "{offset:0width$}", width = OFFSET_WIDTH)
    }
}

impl<W: Write + ?Sized> PdfWrite for W {}
