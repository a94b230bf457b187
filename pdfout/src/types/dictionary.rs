use std::io::{self, Write};

use indexmap::IndexMap;

use crate::{
    sink::PdfWrite,
    types::{Name, Object},
};

/// Represents a PDF dictionary object containing key-value pairs.
///
/// Keys are unique names; inserting an existing key replaces its value in
/// place. Entries keep their insertion order, which is the order they are
/// written in.
///
/// # Examples
/// <<
///   /Type /Catalog
///   /Pages 2 0 R
///   /MarkInfo << /Marked true >>
/// >>
#[derive(Debug, Default, PartialEq, Clone)]
pub struct Dictionary {
    records: IndexMap<Name, Object>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<Name>, value: impl Into<Object>) -> Option<Object> {
        self.records.insert(key.into(), value.into())
    }

    /// Removes `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Object> {
        self.records.shift_remove(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Object> {
        self.records.get_mut(key)
    }

    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        sink.write_string("<< ")?;
        for (key, value) in &self.records {
            key.write(sink)?;
            sink.write_byte(b' ')?;
            value.write(sink)?;
            sink.write_byte(b' ')?;
        }
        sink.write_string(">>")
    }
}

impl<K: std::convert::Into<Name>> From<Vec<(K, Object)>> for Dictionary {
    fn from(value: Vec<(K, Object)>) -> Self {
        let value = value.into_iter().map(|(key, val)| (key.into(), val));

        Self {
            records: IndexMap::from_iter(value),
        }
    }
}

impl<K: std::convert::Into<Name>, const N: usize> From<[(K, Object); N]> for Dictionary {
    fn from(value: [(K, Object); N]) -> Self {
        let value = value.map(|(key, val)| (key.into(), val));

        Self {
            records: IndexMap::from_iter(value),
        }
    }
}

impl std::ops::Deref for Dictionary {
    type Target = IndexMap<Name, Object>;

    fn deref(&self) -> &Self::Target {
        &self.records
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::types::{Array, Numeric};

    fn written(dictionary: &Dictionary) -> String {
        let mut sink = Vec::new();
        dictionary.write(&mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_dictionary_write() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            input: Dictionary,
            expected: &'static str,
        }

        let test_cases = [
            TestCase {
                name: "empty dictionary",
                input: Dictionary::new(),
                expected: "<< >>",
            },
            TestCase {
                name: "entries in insertion order",
                input: Dictionary::from([
                    ("Type", Object::from(Name::from("Pages"))),
                    ("Count", Object::from(0)),
                    ("Kids", Object::from(Array::new())),
                ]),
                expected: "<< /Type /Pages /Count 0 /Kids [ ] >>",
            },
            TestCase {
                name: "nested dictionary",
                input: Dictionary::from([(
                    "MarkInfo",
                    Object::from(Dictionary::from([("Marked", Object::Boolean(true))])),
                )]),
                expected: "<< /MarkInfo << /Marked true >> >>",
            },
            TestCase {
                name: "escaped key",
                input: Dictionary::from(vec![("A B", Object::from(Numeric::from_double(1.0)))]),
                expected: "<< /A#20B 1.00 >>",
            },
        ];

        for case in &test_cases {
            let result = written(&case.input);

            assert_eq!(
                result, case.expected,
                "Test '{}' failed: expected {:?}, got {:?}",
                case.name, case.expected, result
            );
        }
    }

    #[test]
    fn test_dictionary_keys_are_unique() {
        let mut dictionary = Dictionary::new();
        assert_eq!(dictionary.insert("Width", 10), None);
        dictionary.insert("Height", 20);

        let replaced = dictionary.insert("Width", 30);

        assert_eq!(replaced, Some(Object::from(10)));
        assert_eq!(dictionary.len(), 2);
        assert_eq!(dictionary.get("Width"), Some(&Object::from(30)));
        assert_eq!(written(&dictionary), "<< /Width 30 /Height 20 >>");
    }

    #[test]
    fn test_dictionary_remove() {
        let mut dictionary = Dictionary::from([
            ("Title", Object::from(1)),
            ("Author", Object::from(2)),
            ("Subject", Object::from(3)),
        ]);

        assert_eq!(dictionary.remove("Author"), Some(Object::from(2)));
        assert_eq!(dictionary.remove("Author"), None);
        assert!(!dictionary.contains_key("Author"));
        assert_eq!(written(&dictionary), "<< /Title 1 /Subject 3 >>");
    }
}
