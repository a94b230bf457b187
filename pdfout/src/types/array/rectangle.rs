use crate::types::{Array, Numeric, Object};

/// A PDF rectangle object defined by four coordinates.
///
/// In PDF, rectangles are represented as arrays of four numbers:
/// `[llx lly urx ury]`, the lower-left corner followed by the upper-right
/// corner in default user space (origin at the bottom-left of the page).
///
/// The coordinates are normalized on construction, so the corners may be
/// given in any order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    /// X-coordinate of the left edge
    left: f64,
    /// Y-coordinate of the bottom edge
    bottom: f64,
    /// X-coordinate of the right edge
    right: f64,
    /// Y-coordinate of the top edge
    top: f64,
}

impl Rectangle {
    /// Creates a new rectangle from two opposite corners.
    ///
    /// The coordinates are automatically normalized to ensure
    /// `left <= right` and `bottom <= top`.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        let left = x1.min(x2);
        let right = x1.max(x2);
        let bottom = y1.min(y2);
        let top = y1.max(y2);

        Self {
            left,
            bottom,
            right,
            top,
        }
    }

    /// Creates a rectangle anchored at the origin, e.g. a page of the given size.
    pub fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }
}

impl From<Rectangle> for Array {
    fn from(value: Rectangle) -> Self {
        [value.left, value.bottom, value.right, value.top]
            .into_iter()
            .map(|coordinate| Object::Numeric(Numeric::from_double(coordinate)))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_rectangle_normalization() {
        let rectangle = Rectangle::new(612.0, 792.0, 0.0, 0.0);

        assert_eq!(rectangle, Rectangle::from_size(612.0, 792.0));
        assert_eq!(rectangle.left(), 0.0);
        assert_eq!(rectangle.bottom(), 0.0);
        assert_eq!(rectangle.width(), 612.0);
        assert_eq!(rectangle.height(), 792.0);
    }

    #[test]
    fn test_rectangle_to_array() {
        let array = Array::from(Rectangle::new(10.0, 700.0, 200.5, 20.0));

        let mut sink = Vec::new();
        array.write(&mut sink).unwrap();

        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "[ 10.00 20.00 200.50 700.00 ]"
        );
    }
}
