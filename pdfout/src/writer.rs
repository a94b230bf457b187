use std::io::Write;

use snafu::{OptionExt, ResultExt, Snafu, ensure};
use tracing::{debug, trace};

use crate::{
    sink::{PdfWrite, Sink},
    structures::TrailerId,
    types::{Dictionary, IndirectReference, Object},
};

#[derive(Debug, Snafu)]
pub struct Error(error::Error);
type Result<T> = std::result::Result<T, Error>;

/// Version written in the file header.
pub const PDF_VERSION: &str = "1.5";

/// Comment line with high-bit bytes so transfer tools treat the file as binary.
const BINARY_MARKER: [u8; 7] = [0x25, 0xE2, 0xE3, 0xCF, 0xD3, 0x0D, 0x0A];

/// Trailer entry a registered object is linked to.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TrailerKey {
    Root,
    Info,
}

impl TrailerKey {
    fn as_str(&self) -> &'static str {
        match self {
            TrailerKey::Root => "Root",
            TrailerKey::Info => "Info",
        }
    }
}

/// A value that can be registered with the [`Writer`] as a numbered object.
///
/// Document structures that the trailer points to override
/// [`DocumentObject::TRAILER_KEY`], so registering them links the trailer
/// without further calls.
pub trait DocumentObject: Into<Object> {
    const TRAILER_KEY: Option<TrailerKey> = None;
}

impl DocumentObject for Object {}
impl DocumentObject for crate::types::Array {}
impl DocumentObject for crate::types::Dictionary {}
impl DocumentObject for crate::types::Stream {}
impl DocumentObject for crate::types::PdfString {}
impl DocumentObject for crate::types::Numeric {}
impl DocumentObject for crate::types::Name {}

/// State of a numbered object slot.
#[derive(Debug)]
enum Slot {
    /// Number issued, no content attached yet.
    Reserved,
    /// Content attached, waiting to be written.
    Pending(Object),
    /// Written; holds the offset of the `N 0 obj` header.
    Written(u64),
}

/// Writer-side bookkeeping for one numbered object.
#[derive(Debug)]
struct DirectObject {
    id: usize,
    slot: Slot,
}

impl DirectObject {
    fn have_to_write(&self) -> bool {
        matches!(self.slot, Slot::Pending(_))
    }

    fn offset(&self) -> Option<u64> {
        match self.slot {
            Slot::Written(offset) => Some(offset),
            _ => None,
        }
    }
}

/// Single-pass PDF writer.
///
/// Objects are numbered from 1 in registration order. [`Writer::write`]
/// serializes a value immediately, [`Writer::prepare`] and
/// [`Writer::reserve`] hand out a reference first and write later. Offsets
/// are recorded at the moment each object is written, so the writer never
/// seeks backwards. [`Writer::finish`] writes what is still pending, then the
/// cross-reference table and the trailer, and gives the sink back.
///
/// A writer produces exactly one document.
#[derive(Debug)]
pub struct Writer<W: Write> {
    sink: Sink<W>,
    objects: Vec<DirectObject>,
    root: Option<IndirectReference>,
    info: Option<IndirectReference>,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Self {
        Self {
            sink: Sink::new(sink),
            objects: Vec::new(),
            root: None,
            info: None,
        }
    }

    /// Byte offset of the next byte to be written.
    pub fn position(&self) -> u64 {
        self.sink.position()
    }

    /// Number of objects registered so far.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Writes the file header and the binary marker line.
    pub fn begin(&mut self) -> Result<()> {
        self.sink
            .write_string_ln(&format!("%PDF-{PDF_VERSION}"))
            .and_then(|_| self.sink.write_bytes(&BINARY_MARKER))
            .context(error::Io { step: "header" })?;

        Ok(())
    }

    /// Registers `value` and writes it at the current position.
    pub fn write<T: DocumentObject>(&mut self, value: T) -> Result<IndirectReference> {
        let reference = self.allocate::<T>();
        self.write_direct(reference.id(), value.into())?;

        Ok(reference)
    }

    /// Registers `value` without writing it; it is written by
    /// [`Writer::flush`] or [`Writer::finish`].
    pub fn prepare<T: DocumentObject>(&mut self, value: T) -> Result<IndirectReference> {
        let reference = self.allocate::<T>();
        self.direct_mut(reference)?.slot = Slot::Pending(value.into());
        trace!(id = reference.id(), "object prepared");

        Ok(reference)
    }

    /// Issues a reference for an object whose content is attached later.
    pub fn reserve(&mut self) -> IndirectReference {
        let id = self.objects.len() + 1;
        self.objects.push(DirectObject {
            id,
            slot: Slot::Reserved,
        });
        trace!(id, "object reserved");

        IndirectReference::new(id)
    }

    /// Attaches `value` to a reserved or prepared object, replacing any
    /// content attached before.
    pub fn attach<T: DocumentObject>(
        &mut self,
        reference: IndirectReference,
        value: T,
    ) -> Result<()> {
        let direct = self.direct_mut(reference)?;
        ensure!(
            !matches!(direct.slot, Slot::Written(_)),
            error::AlreadyWritten { id: reference.id() }
        );
        direct.slot = Slot::Pending(value.into());

        self.link::<T>(reference);
        trace!(id = reference.id(), "content attached");

        Ok(())
    }

    /// Writes a prepared object at the current position.
    pub fn flush(&mut self, reference: IndirectReference) -> Result<()> {
        match self.direct_mut(reference)?.slot {
            Slot::Pending(_) => {}
            Slot::Reserved => {
                return Err(error::Error::NothingToFlush { id: reference.id() }.into());
            }
            Slot::Written(_) => {
                return Err(error::Error::AlreadyWritten { id: reference.id() }.into());
            }
        }

        self.flush_pending(reference.id() - 1)
    }

    /// Writes pending objects, the cross-reference table and the trailer.
    ///
    /// Fails without writing the table if an issued reference never received
    /// content, or if no catalog or document information was registered.
    pub fn finish(mut self) -> Result<W> {
        for index in 0..self.objects.len() {
            if self.objects[index].have_to_write() {
                self.flush_pending(index)?;
            }
        }

        let offsets = self
            .objects
            .iter()
            .map(|direct| {
                direct
                    .offset()
                    .context(error::IncompleteGraph { id: direct.id })
            })
            .collect::<std::result::Result<Vec<u64>, error::Error>>()?;
        let root = self.root.context(error::MissingRoot)?;
        let info = self.info.context(error::MissingInfo)?;

        let xref_offset = self.sink.position();
        self.write_xref(&offsets).context(error::Io { step: "xref" })?;

        let mut trailer = Dictionary::new();
        trailer.insert("Size", offsets.len() + 1);
        trailer.insert(TrailerKey::Root.as_str(), root);
        trailer.insert(TrailerKey::Info.as_str(), info);
        trailer.insert("ID", TrailerId::new());

        self.sink
            .write_string_ln("trailer")
            .and_then(|_| trailer.write(&mut self.sink))
            .and_then(|_| self.sink.write_ln())
            .and_then(|_| self.sink.write_string_ln("startxref"))
            .and_then(|_| self.sink.write_long_ln(xref_offset as i64))
            .and_then(|_| self.sink.write_string("%%EOF"))
            .context(error::Io { step: "trailer" })?;

        debug!(
            objects = offsets.len(),
            xref_offset,
            size = self.sink.position(),
            "document finished"
        );

        Ok(self.sink.into_inner())
    }

    fn allocate<T: DocumentObject>(&mut self) -> IndirectReference {
        let reference = self.reserve();
        self.link::<T>(reference);

        reference
    }

    fn link<T: DocumentObject>(&mut self, reference: IndirectReference) {
        match T::TRAILER_KEY {
            Some(TrailerKey::Root) => self.root = Some(reference),
            Some(TrailerKey::Info) => self.info = Some(reference),
            None => {}
        }
    }

    fn direct_mut(&mut self, reference: IndirectReference) -> Result<&mut DirectObject> {
        let id = reference.id();

        Ok(id
            .checked_sub(1)
            .and_then(|index| self.objects.get_mut(index))
            .context(error::UnknownReference { id })?)
    }

    fn flush_pending(&mut self, index: usize) -> Result<()> {
        match std::mem::replace(&mut self.objects[index].slot, Slot::Reserved) {
            Slot::Pending(object) => self.write_direct(index + 1, object),
            slot => {
                self.objects[index].slot = slot;
                Ok(())
            }
        }
    }

    fn write_direct(&mut self, id: usize, object: Object) -> Result<()> {
        let offset = self.sink.position();

        self.sink
            .write_string_ln(&format!("{id} 0 obj"))
            .and_then(|_| object.write(&mut self.sink))
            .and_then(|_| self.sink.write_ln())
            .and_then(|_| self.sink.write_string_ln("endobj"))
            .context(error::Io { step: "object" })?;

        self.objects[id - 1].slot = Slot::Written(offset);
        debug!(id, offset, "object written");

        Ok(())
    }

    fn write_xref(&mut self, offsets: &[u64]) -> std::io::Result<()> {
        self.sink.write_string_ln("xref")?;
        self.sink.write_string("0 ")?;
        self.sink.write_long_ln(offsets.len() as i64 + 1)?;
        self.sink.write_string_ln("0000000000 65535 f")?;

        for offset in offsets {
            self.sink.write_offset(*offset)?;
            self.sink.write_string_ln(" 00000 n")?;
        }

        Ok(())
    }
}

mod error {
    use snafu::Snafu;

    #[derive(Debug, Snafu)]
    #[snafu(visibility(pub(super)), context(suffix(false)))]
    pub(super) enum Error {
        #[snafu(display("Failed to write {step}"))]
        Io {
            step: &'static str,
            source: std::io::Error,
        },

        #[snafu(display("Object {id} was not issued by this writer"))]
        UnknownReference { id: usize },

        #[snafu(display("Object {id} is already written"))]
        AlreadyWritten { id: usize },

        #[snafu(display("Object {id} has no content to write"))]
        NothingToFlush { id: usize },

        #[snafu(display("Incomplete document graph: object {id} never received content"))]
        IncompleteGraph { id: usize },

        #[snafu(display("Incomplete document graph: no catalog registered"))]
        MissingRoot,

        #[snafu(display("Incomplete document graph: no document information registered"))]
        MissingInfo,
    }
}
