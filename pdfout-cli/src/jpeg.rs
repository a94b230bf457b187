//! Reads the frame header of a JPEG file.

use snafu::{Snafu, ensure};

const START_OF_IMAGE: u8 = 0xD8;
const END_OF_IMAGE: u8 = 0xD9;
const START_OF_SCAN: u8 = 0xDA;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(super)), context(suffix(false)))]
pub enum Error {
    #[snafu(display("Missing start-of-image marker"))]
    NotJpeg,

    #[snafu(display("Expected a marker at offset {offset}, found 0x{found:02X}"))]
    NotAMarker { offset: usize, found: u8 },

    #[snafu(display("Data ends inside a marker at offset {offset}"))]
    Truncated { offset: usize },

    #[snafu(display("Marker 0x{kind:02X} at offset {offset} has invalid length {length}"))]
    BadLength { kind: u8, offset: usize, length: usize },

    #[snafu(display("Frame declares an empty image of {width}x{height} samples"))]
    ZeroSize { width: u16, height: u16 },

    #[snafu(display("No frame header before image data"))]
    NoFrame,

    #[snafu(display("{components} color components are not supported"))]
    UnsupportedComponents { components: u8 },
}

type Result<T> = std::result::Result<T, Error>;

/// Parameters of the first start-of-frame marker.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Frame {
    pub precision: u8,
    pub width: u16,
    pub height: u16,
    pub components: u8,
}

/// Start-of-frame markers; DHT (C4), JPG (C8) and DAC (CC) share the range.
fn is_start_of_frame(kind: u8) -> bool {
    matches!(kind, 0xC0..=0xCF) && !matches!(kind, 0xC4 | 0xC8 | 0xCC)
}

/// Markers carrying no length and no value.
fn is_standalone(kind: u8) -> bool {
    matches!(kind, 0x01 | 0xD0..=0xD9)
}

/// Walks the markers up to the first frame header.
pub fn read_frame(data: &[u8]) -> Result<Frame> {
    ensure!(data.starts_with(&[0xFF, START_OF_IMAGE]), NotJpeg);

    let mut offset = 2;
    loop {
        let found = *data.get(offset).ok_or(Error::NoFrame)?;
        ensure!(found == 0xFF, NotAMarker { offset, found });

        // any number of fill bytes may precede the marker type
        let mut position = offset + 1;
        while data.get(position) == Some(&0xFF) {
            position += 1;
        }
        let kind = *data.get(position).ok_or(Error::Truncated { offset })?;
        position += 1;

        if is_standalone(kind) {
            ensure!(kind != END_OF_IMAGE, NoFrame);
            offset = position;
            continue;
        }
        ensure!(kind != START_OF_SCAN, NoFrame);

        let length = data
            .get(position..position + 2)
            .map(|bytes| usize::from(u16::from_be_bytes([bytes[0], bytes[1]])))
            .ok_or(Error::Truncated { offset })?;
        ensure!(length >= 2, BadLength { kind, offset, length });

        let segment = data
            .get(position + 2..position + length)
            .ok_or(Error::Truncated { offset })?;

        if is_start_of_frame(kind) {
            ensure!(
                segment.len() >= 6,
                BadLength { kind, offset, length }
            );

            let frame = Frame {
                precision: segment[0],
                height: u16::from_be_bytes([segment[1], segment[2]]),
                width: u16::from_be_bytes([segment[3], segment[4]]),
                components: segment[5],
            };
            // a zero height is only resolved by a later DNL marker
            ensure!(
                frame.width > 0 && frame.height > 0,
                ZeroSize {
                    width: frame.width,
                    height: frame.height
                }
            );

            return Ok(frame);
        }

        offset = position + length;
    }
}
