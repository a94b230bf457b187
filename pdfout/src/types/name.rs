use std::{
    borrow::Borrow,
    io::{self, Write},
};

use smol_str::SmolStr;

use crate::sink::PdfWrite;

/// A PDF name object, written as `/Identifier`.
///
/// Names are case-sensitive and compare by their exact text, which makes
/// them usable as [`Dictionary`](crate::types::Dictionary) keys.
///
/// # Examples
/// /Type
/// /A#20B        // "A B", the space escaped as #20
#[derive(Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Clone)]
pub struct Name {
    data: SmolStr,
}

impl Name {
    pub fn as_str(&self) -> &str {
        self.data.as_str()
    }

    /// Writes the name with every byte outside `[A-Za-z0-9]` escaped as `#XX`.
    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_byte(b'/')?;

        for byte in self.data.bytes() {
            if byte.is_ascii_alphanumeric() {
                sink.write_byte(byte)?;
            } else {
                write!(sink, "#{byte:02X}")?;
            }
        }

        Ok(())
    }
}

impl<T: std::convert::Into<SmolStr>> From<T> for Name {
    fn from(value: T) -> Self {
        Self { data: value.into() }
    }
}

impl std::ops::Deref for Name {
    type Target = SmolStr;

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        self.data.as_str()
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.data)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_name_write() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: &'static str,
            expected: &'static [u8],
        }

        let test_cases = [
            TestCase {
                name: "plain name",
                input: "Test1",
                expected: b"/Test1",
            },
            TestCase {
                name: "space is escaped",
                input: "A B",
                expected: b"/A#20B",
            },
            TestCase {
                name: "empty name",
                input: "",
                expected: b"/",
            },
            TestCase {
                name: "delimiters are escaped",
                input: "paired()parentheses",
                expected: b"/paired#28#29parentheses",
            },
            TestCase {
                name: "hash sign is escaped",
                input: "The_Key_of_F#_Minor",
                expected: b"/The#5FKey#5Fof#5FF#23#5FMinor",
            },
            TestCase {
                name: "dot is escaped",
                input: "1.5",
                expected: b"/1#2E5",
            },
            TestCase {
                name: "non-ascii is escaped per utf-8 byte",
                input: "é",
                expected: b"/#C3#A9",
            },
        ];

        for case in &test_cases {
            let mut sink = Vec::new();
            Name::from(case.input).write(&mut sink).unwrap();

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

    #[test]
    fn test_name_equality() {
        assert_eq!(Name::from("Type"), Name::from(String::from("Type")));
        assert_ne!(Name::from("Type"), Name::from("type"));

        let kids = Name::from("Kids");
        let borrowed: &str = kids.borrow();
        assert_eq!(borrowed, "Kids");
    }
}
