pub mod array;
pub mod dictionary;
pub mod indirect_object;
pub mod name;
pub mod numeric;
pub mod object;
pub mod stream;
pub mod string;

pub use array::{Array, Rectangle};
pub use dictionary::Dictionary;
pub use indirect_object::IndirectReference;
pub use name::Name;
pub use numeric::Numeric;
pub use object::Object;
pub use stream::Stream;
pub use string::{LiteralEscape, PdfString, StringMode};
