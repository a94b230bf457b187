use uuid::Uuid;

use crate::{
    types::{Array, Object, PdfString, StringMode},
    writer::DocumentObject,
};

/// The trailer's `ID` array.
///
/// Both slots hold the same random identifier; the file is written once and
/// never updated, so the permanent and the changing identifier coincide.
#[derive(Debug, Clone, PartialEq)]
pub struct TrailerId {
    array: Array,
}

impl TrailerId {
    pub fn new() -> Self {
        Self::from_uuid(Uuid::new_v4())
    }

    fn from_uuid(id: Uuid) -> Self {
        let value = Object::from(PdfString::from_bytes(
            id.as_bytes().to_vec(),
            StringMode::Hexadecimal,
        ));

        Self {
            array: Array::from([value.clone(), value]),
        }
    }
}

impl Default for TrailerId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<TrailerId> for Object {
    fn from(value: TrailerId) -> Self {
        Object::Array(value.array)
    }
}

impl DocumentObject for TrailerId {}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_trailer_id_write() {
        let id = Uuid::from_u128(0x0123_4567_89AB_CDEF_0011_2233_4455_6677);

        let mut sink = Vec::new();
        Object::from(TrailerId::from_uuid(id))
            .write(&mut sink)
            .unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "[ <0123456789ABCDEF0011223344556677> <0123456789ABCDEF0011223344556677> ]"
        );
    }

    #[test]
    fn test_trailer_id_is_random() {
        assert_ne!(TrailerId::new(), TrailerId::new());

        let Object::Array(array) = Object::from(TrailerId::new()) else {
            panic!("trailer id is not an array");
        };
        assert_eq!(array.len(), 2);
        assert_eq!(array[0], array[1]);
    }
}
