mod catalog;
mod contents;
mod image;
mod info;
mod page;
mod pages;
mod trailer_id;

pub use catalog::Catalog;
pub use contents::Contents;
pub use image::{Image, Mask};
pub use info::Info;
pub use page::{Page, Resources};
pub use pages::Pages;
pub use trailer_id::TrailerId;
