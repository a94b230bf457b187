use crate::{
    types::{Array, Dictionary, IndirectReference, Name, Object},
    writer::DocumentObject,
};

/// Root node of the page tree.
///
/// `Count` is taken from the number of kids when the node is converted for
/// writing, so kids can be added until then.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Pages {
    kids: Array,
}

impl Pages {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_kid(&mut self, page: IndirectReference) {
        self.kids.push(page);
    }

    pub fn kids(&self) -> &Array {
        &self.kids
    }

    pub fn count(&self) -> usize {
        self.kids.len()
    }
}

impl From<Pages> for Object {
    fn from(value: Pages) -> Self {
        let count = value.count();

        Object::Dictionary(Dictionary::from([
            ("Type", Object::from(Name::from("Pages"))),
            ("Kids", Object::from(value.kids)),
            ("Count", Object::from(count)),
        ]))
    }
}

impl DocumentObject for Pages {}

#[cfg(test)]
mod test {
    use super::*;

    fn written(pages: Pages) -> String {
        let mut sink = Vec::new();
        Object::from(pages).write(&mut sink).unwrap();
        String::from_utf8(sink).unwrap()
    }

    #[test]
    fn test_pages_write() {
        assert_eq!(
            written(Pages::new()),
            "<< /Type /Pages /Kids [ ] /Count 0 >>"
        );

        let mut pages = Pages::new();
        pages.add_kid(IndirectReference::new(3));
        pages.add_kid(IndirectReference::new(5));

        assert_eq!(pages.count(), 2);
        assert_eq!(
            written(pages),
            "<< /Type /Pages /Kids [ 3 0 R 5 0 R ] /Count 2 >>"
        );
    }
}
