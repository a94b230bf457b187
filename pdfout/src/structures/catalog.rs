use crate::{
    types::{Dictionary, IndirectReference, Name, Object},
    writer::{DocumentObject, PDF_VERSION, TrailerKey},
};

/// The document catalog, root of the object tree.
///
/// Registering a catalog with the [`Writer`](crate::Writer) makes it the
/// trailer's `Root`.
///
/// # Example
/// << /Type /Catalog /Version /1#2E5 /MarkInfo << /Marked true >> /Pages 2 0 R >>
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    dictionary: Dictionary,
}

impl Catalog {
    pub fn new() -> Self {
        let dictionary = Dictionary::from([
            ("Type", Object::from(Name::from("Catalog"))),
            ("Version", Object::from(Name::from(PDF_VERSION))),
            (
                "MarkInfo",
                Object::from(Dictionary::from([("Marked", Object::Boolean(true))])),
            ),
        ]);

        Self { dictionary }
    }

    /// Points the catalog at the root of the page tree.
    pub fn set_pages(&mut self, pages: IndirectReference) {
        self.dictionary.insert("Pages", pages);
    }

    pub fn pages(&self) -> Option<IndirectReference> {
        match self.dictionary.get("Pages") {
            Some(Object::Reference(reference)) => Some(*reference),
            _ => None,
        }
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Catalog> for Object {
    fn from(value: Catalog) -> Self {
        Object::Dictionary(value.dictionary)
    }
}

impl DocumentObject for Catalog {
    const TRAILER_KEY: Option<TrailerKey> = Some(TrailerKey::Root);
}
