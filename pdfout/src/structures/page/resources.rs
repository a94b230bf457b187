use crate::types::{Array, Dictionary, IndirectReference, Name, Object};

/// Procedure sets every page declares.
const PROC_SET: [&str; 3] = ["PDF", "Text", "ImageC"];

/// Resource dictionary of a page.
///
/// Only image XObjects are tracked; they receive sequential names
/// `Im1`, `Im2`, ... in the order they are added.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Resources {
    xobjects: Dictionary,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an XObject and returns its resource name.
    pub fn add_xobject(&mut self, xobject: IndirectReference) -> Name {
        let name = Name::from(format!("Im{}", self.xobjects.len() + 1));
        self.xobjects.insert(name.clone(), xobject);

        name
    }

    pub fn xobjects(&self) -> &Dictionary {
        &self.xobjects
    }
}

impl From<Resources> for Dictionary {
    fn from(value: Resources) -> Self {
        let proc_set: Array = PROC_SET
            .into_iter()
            .map(|name| Object::from(Name::from(name)))
            .collect();

        Dictionary::from([
            ("XObject", Object::from(value.xobjects)),
            ("ProcSet", Object::from(proc_set)),
        ])
    }
}
