use std::{
    fmt::Display,
    io::{self, Write},
};

/// A reference to a numbered object, written as `N 0 R`.
///
/// References are issued by the [`Writer`](crate::Writer) when an object is
/// registered, so every reference names a slot of that writer. The
/// generation number is always zero.
#[derive(Debug, Eq, Hash, PartialEq, PartialOrd, Ord, Clone, Copy)]
pub struct IndirectReference {
    id: usize,
}

impl IndirectReference {
    pub(crate) fn new(id: usize) -> Self {
        Self { id }
    }

    /// Object number of the referenced object.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl Display for IndirectReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} 0 R", self.id)
    }
}
