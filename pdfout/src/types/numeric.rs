use std::io::{self, Write};

/// Default number of decimal digits for values built from floating point.
pub const DEFAULT_PRECISION: i32 = 2;

/// Represents numeric values in a PDF document.
///
/// A numeric is written either as an integer or as a fixed-point real with a
/// given number of decimal digits. Reals whose precision is zero or negative
/// are written in integer form, truncated toward zero (`3.9` becomes `3`).
/// Non-finite reals have no PDF token and are written in integer form too:
/// `NaN` as `0`, infinities saturated to the `i64` range.
///
/// # Examples
/// 42              // Integer
/// -17             // Negative integer
/// 3.14            // Real, precision 2
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Numeric {
    /// An integer value stored as a 64-bit signed integer.
    Integer(i64),
    /// A real value with the number of decimal digits used when writing.
    Real { value: f64, precision: i32 },
}

impl Numeric {
    pub fn from_int(value: i64) -> Self {
        Numeric::Integer(value)
    }

    /// Creates a real with the default precision of two decimal digits.
    pub fn from_double(value: f64) -> Self {
        Self::with_precision(value, DEFAULT_PRECISION)
    }

    pub fn with_precision(value: f64, precision: i32) -> Self {
        Numeric::Real { value, precision }
    }

    /// Returns `true` if the value is written without a fractional part.
    pub fn is_integer(&self) -> bool {
        match self {
            Numeric::Integer(_) => true,
            Numeric::Real { precision, .. } => *precision <= 0,
        }
    }

    pub fn write<W: Write + ?Sized>(&self, sink: &mut W) -> io::Result<()> {
        write!(sink, "{self}")
    }
}

impl std::fmt::Display for Numeric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match *self {
            Numeric::Integer(value) => write!(f, "{value}"),
            Numeric::Real { value, precision }
                if precision <= 0 || !value.is_finite() =>
            {
                // `as` truncates toward zero and saturates out-of-range values
                write!(f, "{}", value as i64)
            }
            Numeric::Real { value, precision } => {
                write!(f, "{value:.prec$}", prec = precision as usize)
            }
        }
    }
}

impl From<i64> for Numeric {
    fn from(value: i64) -> Self {
        Numeric::Integer(value)
    }
}

impl From<i32> for Numeric {
    fn from(value: i32) -> Self {
        Numeric::Integer(value.into())
    }
}

impl From<u32> for Numeric {
    fn from(value: u32) -> Self {
        Numeric::Integer(value.into())
    }
}

impl From<usize> for Numeric {
    fn from(value: usize) -> Self {
        Numeric::Integer(value as i64)
    }
}

impl From<f64> for Numeric {
    fn from(value: f64) -> Self {
        Self::from_double(value)
    }
}
