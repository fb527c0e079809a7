use thiserror::Error;

pub type Result<T> = std::result::Result<T, AcepError>;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AcepError {
    #[error("buffer of {len} indices does not match a {width}x{height} image")]
    BufferSize { len: usize, width: u32, height: u32 },
    #[error("palette index {0} out of range")]
    BadIndex(u8),
}
