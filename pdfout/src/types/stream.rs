use std::io::{self, Write};

use flate2::{Compression, write::ZlibEncoder};

use crate::{
    sink::PdfWrite,
    types::{Dictionary, Name},
};

/// Represents a PDF stream object containing both a dictionary and binary data.
///
/// The `Length` entry is always computed when the stream is written. When
/// compression is enabled (the default) the payload is packed into a zlib
/// container and `Filter` is set to `FlateDecode`; otherwise the payload is
/// written as it is and any preset `Filter` is kept.
///
/// # Example
/// ```text
/// << /Filter /FlateDecode /Length 128 >>
/// stream
/// ...compressed binary data...
/// endstream
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct Stream {
    pub dictionary: Dictionary,
    pub data: Vec<u8>,
    compress: bool,
}

impl Stream {
    pub fn new(dictionary: Dictionary, data: Vec<u8>) -> Self {
        Self {
            dictionary,
            data,
            compress: true,
        }
    }

    pub fn compress(&self) -> bool {
        self.compress
    }

    pub fn set_compress(&mut self, compress: bool) {
        self.compress = compress;
    }

    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        let mut dictionary = self.dictionary.clone();

        let packed;
        let data = if self.compress {
            packed = deflate(&self.data)?;
            dictionary.insert("Filter", Name::from("FlateDecode"));
            &packed
        } else {
            &self.data
        };
        dictionary.insert("Length", data.len());

        dictionary.write(sink)?;
        sink.write_ln()?;
        sink.write_string_ln("stream")?;
        sink.write_bytes_ln(data)?;
        sink.write_string("endstream")
    }
}

/// Packs `data` into a zlib container: the `78 DA` header of the best
/// compression level, the raw Deflate body and the big-endian Adler-32 of the
/// uncompressed input.
pub fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::with_capacity(data.len() / 2 + 16), Compression::best());
    encoder.write_all(data)?;
    encoder.finish()
}
