use std::io::{self, Write};

use crate::{
    sink::PdfWrite,
    types::{Array, Dictionary, IndirectReference, Name, Numeric, PdfString, Rectangle, Stream},
};

/// Represents every value kind this crate can write into a PDF file.
///
/// Each variant knows how to serialize itself; composite document structures
/// convert into one of these before they are handed to the writer.
///
/// # Examples
/// true                       // Boolean
/// 42                         // Numeric (Integer)
/// 3.14                       // Numeric (Real)
/// (\376\377\0A)              // String (Literal)
/// <FEFF0041>                 // String (Hexadecimal)
/// /Type                      // Name
/// [ 1 2 3 ]                  // Array
/// << /Key /Value >>          // Dictionary
/// << /Length 10 >> stream ... endstream // Stream
/// 1 0 R                      // Indirect Reference
#[derive(Debug, PartialEq, Clone)]
pub enum Object {
    /// A boolean value (true/false literal)
    Boolean(bool),
    /// Numeric values (integer or fixed-point real numbers)
    Numeric(Numeric),
    /// String values, literal "(string)" or hexadecimal "<ffffaa>"
    String(PdfString),
    /// Names starting with '/' followed by a sequence of characters
    Name(Name),
    /// Array object, contains 0 or more Objects
    Array(Array),
    /// Dictionary object, contains key-value pairs
    Dictionary(Dictionary),
    /// Stream object, contains key-value pairs and raw byte data
    Stream(Stream),
    /// Reference to an object written elsewhere in the file
    Reference(IndirectReference),
}

impl Object {
    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        match self {
            Object::Boolean(true) => sink.write_string("true"),
            Object::Boolean(false) => sink.write_string("false"),
            Object::Numeric(numeric) => numeric.write(sink),
            Object::String(string) => string.write(sink),
            Object::Name(name) => name.write(sink),
            Object::Array(array) => array.write(sink),
            Object::Dictionary(dictionary) => dictionary.write(sink),
            Object::Stream(stream) => stream.write(sink),
            Object::Reference(reference) => reference.write(sink),
        }
    }
}

impl From<bool> for Object {
    fn from(value: bool) -> Self {
        Object::Boolean(value)
    }
}

impl From<Numeric> for Object {
    fn from(value: Numeric) -> Self {
        Object::Numeric(value)
    }
}

impl From<i32> for Object {
    fn from(value: i32) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<i64> for Object {
    fn from(value: i64) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<u32> for Object {
    fn from(value: u32) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<usize> for Object {
    fn from(value: usize) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<f64> for Object {
    fn from(value: f64) -> Self {
        Object::Numeric(value.into())
    }
}

impl From<PdfString> for Object {
    fn from(value: PdfString) -> Self {
        Object::String(value)
    }
}

impl From<Name> for Object {
    fn from(value: Name) -> Self {
        Object::Name(value)
    }
}

impl From<Array> for Object {
    fn from(value: Array) -> Self {
        Object::Array(value)
    }
}

impl From<Rectangle> for Object {
    fn from(value: Rectangle) -> Self {
        Object::Array(value.into())
    }
}

impl From<Dictionary> for Object {
    fn from(value: Dictionary) -> Self {
        Object::Dictionary(value)
    }
}

impl From<Stream> for Object {
    fn from(value: Stream) -> Self {
        Object::Stream(value)
    }
}

impl From<IndirectReference> for Object {
    fn from(value: IndirectReference) -> Self {
        Object::Reference(value)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_object_write() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: Object,
            expected: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "boolean true",
                input: Object::from(true),
                expected: b"true",
            },
            TestCase {
                name: "boolean false",
                input: Object::from(false),
                expected: b"false",
            },
            TestCase {
                name: "integer",
                input: Object::from(3),
                expected: b"3",
            },
            TestCase {
                name: "real",
                input: Object::from(3.14159),
                expected: b"3.14",
            },
            TestCase {
                name: "name",
                input: Object::from(Name::from("Catalog")),
                expected: b"/Catalog",
            },
            TestCase {
                name: "hex string",
                input: Object::from(PdfString::hexadecimal("A")),
                expected: b"<FEFF0041>",
            },
            TestCase {
                name: "reference",
                input: Object::from(IndirectReference::new(12)),
                expected: b"12 0 R",
            },
            TestCase {
                name: "rectangle",
                input: Object::from(Rectangle::from_size(612.0, 792.0)),
                expected: b"[ 0.00 0.00 612.00 792.00 ]",
            },
        ];

        for case in &test_cases {
            let mut sink = Vec::new();
            case.input.write(&mut sink).unwrap();

            assert_eq!(
                sink,
                case.expected,
                "Test '{}' failed: expected {:?}, got {:?}",
                case.name,
                String::from_utf8_lossy(case.expected),
                String::from_utf8_lossy(&sink)
            );
        }
    }
}
