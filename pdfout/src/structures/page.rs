mod resources;

pub use resources::Resources;

use crate::{
    types::{Dictionary, IndirectReference, Name, Object, Rectangle},
    writer::DocumentObject,
};

/// A single page of the document.
///
/// The page refers to its parent [`Pages`](crate::structures::Pages) node,
/// its content stream and the images it draws. Its `Resources` always carry
/// an `XObject` dictionary and the `[/PDF /Text /ImageC]` procedure sets.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    dictionary: Dictionary,
    resources: Resources,
}

impl Page {
    pub fn new() -> Self {
        Self {
            dictionary: Dictionary::from([("Type", Object::from(Name::from("Page")))]),
            resources: Resources::new(),
        }
    }

    /// Sets the page boundary, written as `[llx lly urx ury]`.
    pub fn set_media_box(&mut self, media_box: Rectangle) {
        self.dictionary.insert("MediaBox", media_box);
    }

    pub fn set_parent(&mut self, parent: IndirectReference) {
        self.dictionary.insert("Parent", parent);
    }

    pub fn set_contents(&mut self, contents: IndirectReference) {
        self.dictionary.insert("Contents", contents);
    }

    /// Makes an image available to the page's content stream.
    ///
    /// Returns the operand to use with the `Do` operator, e.g. `/Im1`.
    pub fn add_image(&mut self, image: IndirectReference) -> String {
        let name = self.resources.add_xobject(image);

        format!("/{name}")
    }

    pub fn resources(&self) -> &Resources {
        &self.resources
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Page> for Object {
    fn from(value: Page) -> Self {
        let mut dictionary = value.dictionary;
        dictionary.insert("Resources", Dictionary::from(value.resources));

        Object::Dictionary(dictionary)
    }
}

impl DocumentObject for Page {}
