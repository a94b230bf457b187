use std::{io::Write, path::Path};

use chrono::{DateTime, FixedOffset};
use pdfout::{
    Writer,
    structures::{Catalog, Contents, Image, Info, Page, Pages},
    types::Rectangle,
};
use snafu::{ResultExt, ensure};
use tracing::debug;

use crate::{error, jpeg};

/// Blank space kept around the drawing, in points.
const MARGIN: f64 = 36.0;

/// A JPEG file and its dimensions in samples.
#[derive(Debug)]
pub struct Picture {
    data: Vec<u8>,
    width: u16,
    height: u16,
}

impl Picture {
    pub fn load(path: &Path) -> error::Result<Self> {
        let data = std::fs::read(path).context(error::ReadImage { path })?;

        Self::from_jpeg(data).context(error::Jpeg { path }).map_err(Box::new)
    }

    fn from_jpeg(data: Vec<u8>) -> Result<Self, jpeg::Error> {
        let frame = jpeg::read_frame(&data)?;
        ensure!(
            frame.components == 3,
            jpeg::UnsupportedComponents {
                components: frame.components
            }
        );
        debug!(
            width = frame.width,
            height = frame.height,
            precision = frame.precision,
            "jpeg frame"
        );

        Ok(Self {
            data,
            width: frame.width,
            height: frame.height,
        })
    }
}

/// Page size shared by every page of the document.
#[derive(Debug, Clone, Copy)]
pub struct Layout {
    width: f64,
    height: f64,
}

impl Layout {
    pub fn new(width: f64, height: f64) -> error::Result<Self> {
        ensure!(
            width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0,
            error::PageSize { width, height }
        );

        Ok(Self { width, height })
    }

    fn media_box(&self) -> Rectangle {
        Rectangle::from_size(self.width, self.height)
    }

    /// Largest `[x y w h]` of the given aspect that fits inside the margins,
    /// centred on the page.
    fn fit(&self, width: f64, height: f64) -> [f64; 4] {
        let available_width = (self.width - 2.0 * MARGIN).max(1.0);
        let available_height = (self.height - 2.0 * MARGIN).max(1.0);
        let scale = (available_width / width).min(available_height / height);

        let (width, height) = (width * scale, height * scale);

        [
            (self.width - width) / 2.0,
            (self.height - height) / 2.0,
            width,
            height,
        ]
    }

    fn frame_contents(&self) -> Contents {
        let [x, y, width, height] =
            self.fit(self.width - 2.0 * MARGIN, self.height - 2.0 * MARGIN);

        let mut contents = Contents::new();
        contents
            .append_real(x)
            .append_str(" ")
            .append_real(y)
            .append_str(" ")
            .append_real(width)
            .append_str(" ")
            .append_real(height)
            .append_str(" re S")
            .append_line();

        contents
    }

    fn picture_contents(&self, width: u16, height: u16, name: &str) -> Contents {
        let [x, y, width, height] = self.fit(f64::from(width), f64::from(height));

        let mut contents = Contents::new();
        contents
            .append_str("q ")
            .append_real(width)
            .append_str(" 0 0 ")
            .append_real(height)
            .append_str(" ")
            .append_real(x)
            .append_str(" ")
            .append_real(y)
            .append_str(" cm ")
            .append_str(name)
            .append_str(" Do Q")
            .append_line();

        contents
    }
}

/// Document information taken from the command line.
#[derive(Debug)]
pub struct Metadata<'a> {
    pub title: &'a str,
    pub author: &'a str,
    pub subject: &'a str,
    pub keywords: &'a str,
    pub date: DateTime<FixedOffset>,
}

impl Metadata<'_> {
    fn info(&self) -> Info {
        let mut info = Info::new();
        info.set_title(self.title);
        info.set_author(self.author);
        info.set_subject(self.subject);
        info.set_keywords(self.keywords);
        info.set_creation_date(&self.date);
        info.set_mod_date(&self.date);

        info
    }
}

/// Writes a document with one page per picture, or a single framed page
/// when there are none.
pub fn build<W: Write>(
    sink: W,
    layout: &Layout,
    metadata: &Metadata,
    pictures: Vec<Picture>,
) -> error::Result<W> {
    write_document(sink, layout, metadata, pictures)
        .context(error::Pdf)
        .map_err(Box::new)
}

fn write_document<W: Write>(
    sink: W,
    layout: &Layout,
    metadata: &Metadata,
    pictures: Vec<Picture>,
) -> Result<W, pdfout::Error> {
    let mut writer = Writer::new(sink);
    writer.begin()?;

    let pages_ref = writer.reserve();
    let mut pages = Pages::new();

    let mut add_page = |writer: &mut Writer<W>,
                        mut page: Page,
                        contents: Contents|
     -> Result<(), pdfout::Error> {
        let contents_ref = writer.write(contents)?;

        page.set_parent(pages_ref);
        page.set_media_box(layout.media_box());
        page.set_contents(contents_ref);
        pages.add_kid(writer.write(page)?);

        Ok(())
    };

    if pictures.is_empty() {
        add_page(&mut writer, Page::new(), layout.frame_contents())?;
    }

    for picture in pictures {
        let Picture {
            data,
            width,
            height,
        } = picture;

        let mut image = Image::new(data);
        image.set_width(u32::from(width));
        image.set_height(u32::from(height));
        let image_ref = writer.write(image)?;

        let mut page = Page::new();
        let name = page.add_image(image_ref);
        let contents = layout.picture_contents(width, height, &name);

        add_page(&mut writer, page, contents)?;
    }

    writer.attach(pages_ref, pages)?;

    let mut catalog = Catalog::new();
    catalog.set_pages(pages_ref);
    writer.write(catalog)?;
    writer.write(metadata.info())?;

    writer.finish()
}

#[cfg(test)]
mod test {
    use super::*;

    use chrono::TimeZone;

    /// SOI, a baseline frame header for 640x480 RGB and EOI.
    fn jpeg() -> Vec<u8> {
        vec![
            0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08, 0x01, 0xE0, 0x02, 0x80, 0x03, 0x01, 0x22,
            0x00, 0x02, 0x11, 0x01, 0x03, 0x11, 0x01, 0xFF, 0xD9,
        ]
    }

    fn metadata() -> Metadata<'static> {
        Metadata {
            title: "Holiday",
            author: "",
            subject: "",
            keywords: "beach",
            date: FixedOffset::east_opt(3600)
                .unwrap()
                .with_ymd_and_hms(2024, 7, 1, 9, 0, 0)
                .unwrap(),
        }
    }

    fn render(pictures: Vec<Picture>) -> String {
        let layout = Layout::new(612.0, 792.0).unwrap();
        let output = build(Vec::new(), &layout, &metadata(), pictures).unwrap();

        String::from_utf8_lossy(&output).into_owned()
    }

    #[test]
    fn test_fit_picture() {
        let layout = Layout::new(612.0, 792.0).unwrap();

        assert_eq!(layout.fit(640.0, 480.0), [36.0, 193.5, 540.0, 405.0]);
        assert_eq!(
            layout.picture_contents(640, 480, "/Im1").as_str(),
            "q 540.00 0 0 405.00 36.00 193.50 cm /Im1 Do Q\n"
        );
        assert_eq!(
            layout.frame_contents().as_str(),
            "36.00 36.00 540.00 720.00 re S\n"
        );
    }

    #[test]
    fn test_layout_rejects_empty_page() {
        for (width, height) in [
            (0.0, 792.0),
            (612.0, -1.0),
            (f64::INFINITY, 792.0),
            (612.0, f64::NAN),
        ] {
            let err = Layout::new(width, height).unwrap_err();
            assert!(
                matches!(*err, error::Error::PageSize { .. }),
                "{width}x{height} accepted: {err}"
            );
        }
    }

    #[test]
    fn test_picture_from_jpeg() {
        let picture = Picture::from_jpeg(jpeg()).unwrap();
        assert_eq!((picture.width, picture.height), (640, 480));

        let mut grey = jpeg();
        grey[11] = 1;
        let err = Picture::from_jpeg(grey).unwrap_err();
        assert!(
            matches!(err, jpeg::Error::UnsupportedComponents { components: 1 }),
            "{err}"
        );
    }

    #[test]
    fn test_build_without_pictures() {
        let output = render(Vec::new());

        assert!(output.starts_with("%PDF-1.5\r\n"));
        assert!(output.contains("/Type /Pages /Kids [ 3 0 R ] /Count 1"));
        assert!(output.contains("/Title (\\376\\377\0H\0o\0l"));
        assert!(output.contains("/Keywords (\\376\\377\0b\0e"));
        assert!(!output.contains("/Author"));
        assert!(output.contains("/CreationDate (D:20240701090000+01'00')"));
        assert!(output.ends_with("%%EOF"));
    }

    #[test]
    fn test_build_with_pictures() {
        let pictures = vec![
            Picture::from_jpeg(jpeg()).unwrap(),
            Picture::from_jpeg(jpeg()).unwrap(),
        ];
        let output = render(pictures);

        assert_eq!(output.matches("/Subtype /Image").count(), 2);
        assert!(output.contains("/Width 640 /Height 480 /Length 23"));
        assert!(output.contains("/XObject << /Im1 2 0 R >>"));
        assert!(output.contains("/XObject << /Im1 5 0 R >>"));
        assert!(output.contains("/Count 2"));
    }
}
