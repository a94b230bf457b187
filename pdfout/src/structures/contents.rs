use crate::{
    types::{Dictionary, Numeric, Object, Stream},
    writer::DocumentObject,
};

/// Decimal digits used for reals appended to a content stream by default.
const DEFAULT_REAL_PRECISION: i32 = 2;

/// Content stream of a page.
///
/// Drawing operators are appended as text and turned into the stream's bytes
/// only when the contents are converted for writing. The stream is
/// compressed.
///
/// # Example
/// ```
/// use pdfout::structures::Contents;
///
/// let mut contents = Contents::new();
/// contents
///     .append_str("q ")
///     .append_real(72.0)
///     .append_str(" 0 0 ")
///     .append_real(36.5)
///     .append_str(" 10 20 cm /Im1 Do Q")
///     .append_line();
///
/// assert_eq!(contents.as_str(), "q 72.00 0 0 36.50 10 20 cm /Im1 Do Q\n");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Contents {
    buffer: String,
    real_precision: i32,
}

impl Contents {
    pub fn new() -> Self {
        Self {
            buffer: String::new(),
            real_precision: DEFAULT_REAL_PRECISION,
        }
    }

    pub fn real_precision(&self) -> i32 {
        self.real_precision
    }

    /// Sets the decimal digits of reals appended from now on.
    pub fn set_real_precision(&mut self, precision: i32) {
        self.real_precision = precision;
    }

    pub fn append_str(&mut self, value: &str) -> &mut Self {
        self.buffer.push_str(value);
        self
    }

    pub fn append_real(&mut self, value: f64) -> &mut Self {
        let numeric = Numeric::with_precision(value, self.real_precision);
        self.buffer.push_str(&numeric.to_string());
        self
    }

    pub fn append_int(&mut self, value: i64) -> &mut Self {
        self.buffer.push_str(&value.to_string());
        self
    }

    pub fn append_line(&mut self) -> &mut Self {
        self.buffer.push('\n');
        self
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

impl Default for Contents {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Contents> for Stream {
    fn from(value: Contents) -> Self {
        Stream::new(Dictionary::new(), value.buffer.into_bytes())
    }
}

impl From<Contents> for Object {
    fn from(value: Contents) -> Self {
        Object::Stream(value.into())
    }
}

impl DocumentObject for Contents {}
