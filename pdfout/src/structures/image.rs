use crate::{
    types::{Dictionary, IndirectReference, Name, Object, Stream},
    writer::DocumentObject,
};

/// An image XObject holding JPEG data.
///
/// The payload is already DCT-encoded, so the stream is written without
/// further compression.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    stream: Stream,
}

impl Image {
    pub fn new(jpeg: Vec<u8>) -> Self {
        let dictionary = Dictionary::from([
            ("Type", Object::from(Name::from("XObject"))),
            ("Subtype", Object::from(Name::from("Image"))),
            ("ColorSpace", Object::from(Name::from("DeviceRGB"))),
            ("BitsPerComponent", Object::from(8)),
            ("Filter", Object::from(Name::from("DCTDecode"))),
            ("Interpolate", Object::Boolean(true)),
        ]);

        let mut stream = Stream::new(dictionary, jpeg);
        stream.set_compress(false);

        Self { stream }
    }

    /// Width in samples.
    pub fn set_width(&mut self, width: u32) {
        self.stream.dictionary.insert("Width", width);
    }

    /// Height in samples.
    pub fn set_height(&mut self, height: u32) {
        self.stream.dictionary.insert("Height", height);
    }

    /// Attaches a [`Mask`] as the image's alpha channel.
    pub fn set_soft_mask(&mut self, mask: IndirectReference) {
        self.stream.dictionary.insert("SMask", mask);
    }

    pub fn stream(&self) -> &Stream {
        &self.stream
    }
}

impl From<Image> for Object {
    fn from(value: Image) -> Self {
        Object::Stream(value.stream)
    }
}

impl DocumentObject for Image {}

/// A greyscale soft mask for an [`Image`].
///
/// Mask samples are raw 8-bit values, one per pixel, deflated when written.
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    image: Image,
}

impl Mask {
    pub fn new(samples: Vec<u8>) -> Self {
        let mut image = Image::new(samples);
        let stream = &mut image.stream;

        stream.dictionary.insert("ColorSpace", Name::from("DeviceGray"));
        stream.dictionary.insert("Interpolate", false);
        stream.dictionary.remove("Filter");
        stream.set_compress(true);

        Self { image }
    }

    pub fn set_width(&mut self, width: u32) {
        self.image.set_width(width);
    }

    pub fn set_height(&mut self, height: u32) {
        self.image.set_height(height);
    }

    pub fn stream(&self) -> &Stream {
        self.image.stream()
    }
}

impl From<Mask> for Object {
    fn from(value: Mask) -> Self {
        value.image.into()
    }
}

impl DocumentObject for Mask {}
