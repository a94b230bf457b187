use chrono::{DateTime, FixedOffset};

use crate::{
    types::{Dictionary, Object, PdfString, StringMode},
    writer::{DocumentObject, TrailerKey},
};

/// Application recorded as the document's creator.
pub const CREATOR: &str = "pdfout";
/// Library recorded as the document's producer.
pub const PRODUCER: &str = concat!("pdfout ", env!("CARGO_PKG_VERSION"));

/// The document information dictionary.
///
/// Registering it with the [`Writer`](crate::Writer) makes it the trailer's
/// `Info`. Text fields set to an empty string are removed instead of being
/// written empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Info {
    dictionary: Dictionary,
}

impl Info {
    pub fn new() -> Self {
        let dictionary = Dictionary::from([
            ("Creator", Object::from(PdfString::hexadecimal(CREATOR))),
            ("Producer", Object::from(PdfString::hexadecimal(PRODUCER))),
        ]);

        Self { dictionary }
    }

    pub fn set_title(&mut self, title: &str) {
        self.set_text("Title", title);
    }

    pub fn set_author(&mut self, author: &str) {
        self.set_text("Author", author);
    }

    pub fn set_subject(&mut self, subject: &str) {
        self.set_text("Subject", subject);
    }

    pub fn set_keywords(&mut self, keywords: &str) {
        self.set_text("Keywords", keywords);
    }

    pub fn set_creation_date(&mut self, date: &DateTime<FixedOffset>) {
        self.dictionary.insert("CreationDate", date_string(date));
    }

    pub fn set_mod_date(&mut self, date: &DateTime<FixedOffset>) {
        self.dictionary.insert("ModDate", date_string(date));
    }

    pub fn dictionary(&self) -> &Dictionary {
        &self.dictionary
    }

    fn set_text(&mut self, key: &'static str, value: &str) {
        if value.is_empty() {
            self.dictionary.remove(key);
        } else {
            self.dictionary.insert(key, PdfString::literal(value));
        }
    }
}

impl Default for Info {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Info> for Object {
    fn from(value: Info) -> Self {
        Object::Dictionary(value.dictionary)
    }
}

impl DocumentObject for Info {
    const TRAILER_KEY: Option<TrailerKey> = Some(TrailerKey::Info);
}

/// Formats a date as a PDF date string, `D:YYYYMMDDHHmmSS+HH'mm'`.
fn date_string(date: &DateTime<FixedOffset>) -> PdfString {
    let offset = date.offset().local_minus_utc();
    let sign = if offset < 0 { '-' } else { '+' };
    let offset = offset.unsigned_abs();

    let text = format!(
        "{}{sign}{:02}'{:02}'",
        date.format("D:%Y%m%d%H%M%S"),
        offset / 3600,
        offset % 3600 / 60
    );

    PdfString::from_bytes(text.into_bytes(), StringMode::Literal)
}

#[cfg(test)]
mod test {
    use super::*;

    use chrono::TimeZone;

    fn written(info: &Info) -> String {
        let mut sink = Vec::new();
        info.dictionary().write(&mut sink).unwrap();
        String::from_utf8_lossy(&sink).into_owned()
    }

    #[test]
    fn test_info_text_fields() {
        let mut info = Info::new();
        info.set_title("Report");
        info.set_author("Jane");
        info.set_subject("Sales");
        info.set_keywords("q3");

        let keys: Vec<&str> = info.dictionary().keys().map(|key| key.as_str()).collect();
        assert_eq!(
            keys,
            ["Creator", "Producer", "Title", "Author", "Subject", "Keywords"]
        );
        assert_eq!(
            info.dictionary().get("Title"),
            Some(&Object::from(PdfString::literal("Report")))
        );

        info.set_author("");
        info.set_keywords("");

        let keys: Vec<&str> = info.dictionary().keys().map(|key| key.as_str()).collect();
        assert_eq!(keys, ["Creator", "Producer", "Title", "Subject"]);
    }

    #[test]
    fn test_info_fixed_fields() {
        let info = Info::new();

        assert_eq!(
            info.dictionary().get("Creator"),
            Some(&Object::from(PdfString::hexadecimal(CREATOR)))
        );
        assert!(written(&info).starts_with("<< /Creator <FEFF007000640066006F00750074> /Producer <FEFF"));
    }

    #[test]
    fn test_info_dates() {
        #[derive(Debug)]
        struct TestCase {
            name: &'static str,
            offset_seconds: i32,
            expected: &'static str,
        }

        let test_cases = [
            TestCase {
                name: "positive offset",
                offset_seconds: 2 * 3600,
                expected: "(D:20210421143000+02'00')",
            },
            TestCase {
                name: "negative offset with minutes",
                offset_seconds: -(3 * 3600 + 30 * 60),
                expected: "(D:20210421143000-03'30')",
            },
            TestCase {
                name: "utc",
                offset_seconds: 0,
                expected: "(D:20210421143000+00'00')",
            },
        ];

        for case in &test_cases {
            let date = FixedOffset::east_opt(case.offset_seconds)
                .unwrap()
                .with_ymd_and_hms(2021, 4, 21, 14, 30, 0)
                .unwrap();

            let mut info = Info::new();
            info.set_creation_date(&date);
            info.set_mod_date(&date);

            let mut sink = Vec::new();
            info.dictionary()
                .get("CreationDate")
                .unwrap()
                .write(&mut sink)
                .unwrap();
            let result = String::from_utf8(sink).unwrap();

            assert_eq!(
                result, case.expected,
                "Test '{}' failed: expected {:?}, got {:?}",
                case.name, case.expected, result
            );
            assert!(info.dictionary().contains_key("ModDate"));
        }
    }
}
