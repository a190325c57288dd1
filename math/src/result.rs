#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The quaternion has zero length and cannot be normalized or inverted.
    ZeroLength,
    /// A direction vector has zero length.
    ZeroLengthVector,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroLength => write!(f, "Zero-length quaternion has no direction or inverse"),
            Self::ZeroLengthVector => write!(f, "Zero-length vector has no direction"),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
