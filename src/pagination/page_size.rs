use std::fmt;
use thiserror::Error;

/// Rows per table page. Only the sizes offered in the page-size selector exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub enum PageSize {
    #[default]
    Ten,
    Twenty,
    Fifty,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unsupported page size {0}, expected 10, 20 or 50")]
pub struct UnsupportedPageSize(pub usize);

impl PageSize {
    pub const ALL: [PageSize; 3] = [PageSize::Ten, PageSize::Twenty, PageSize::Fifty];

    pub fn get(self) -> usize {
        match self {
            PageSize::Ten => 10,
            PageSize::Twenty => 20,
            PageSize::Fifty => 50,
        }
    }
}

impl TryFrom<usize> for PageSize {
    type Error = UnsupportedPageSize;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        PageSize::ALL
            .into_iter()
            .find(|size| size.get() == value)
            .ok_or(UnsupportedPageSize(value))
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
