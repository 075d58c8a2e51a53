use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum SortError {
    #[error("invalid range {start}..{end} for a sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },
    #[error("split point {mid} lies outside {start}..={end}")]
    InvalidSplit { mid: usize, start: usize, end: usize },
    #[error("invalid threshold {0}: must be at least 1")]
    InvalidThreshold(usize),
}

pub type Result<T> = std::result::Result<T, SortError>;
