use std::io::{self, Write};

pub mod rectangle;

pub use rectangle::Rectangle;

use crate::{sink::PdfWrite, types::Object};

/// A PDF array object that contains an ordered collection of PDF objects.
///
/// Arrays may mix object types and repeat the same value or reference.
/// They are written as `[ a b c ]`, every element followed by a space.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Array {
    data: Vec<Object>,
}

impl Array {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, value: impl Into<Object>) -> &mut Self {
        self.data.push(value.into());
        self
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }

    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_string("[ ")?;
        for object in &self.data {
            object.write(sink)?;
            sink.write_byte(b' ')?;
        }
        sink.write_byte(b']')
    }
}

impl std::ops::Deref for Array {
    type Target = Vec<Object>;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl From<Vec<Object>> for Array {
    fn from(value: Vec<Object>) -> Self {
        Self { data: value }
    }
}

impl<const N: usize> From<[Object; N]> for Array {
    fn from(value: [Object; N]) -> Self {
        Self {
            data: value.to_vec(),
        }
    }
}

impl FromIterator<Object> for Array {
    fn from_iter<T: IntoIterator<Item = Object>>(iter: T) -> Self {
        Self {
            data: iter.into_iter().collect(),
        }
    }
}
