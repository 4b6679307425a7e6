use crate::server::error::AppError;

/// Index of the first page accepted by a list endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageBase {
    Zero,
    One,
}

impl PageBase {
    pub fn first(self) -> u64 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }
}

/// Validated pagination with a zero-based page index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageParam {
    pub index: u64,
    pub size: u64,
}

impl PageParam {
    pub const DEFAULT_SIZE: u64 = 10;
    pub const MAX_SIZE: u64 = 1000;

    /// Normalizes a requested page to a zero-based index.
    ///
    /// A missing page selects the first page for `base`, a missing size uses
    /// [`DEFAULT_SIZE`](Self::DEFAULT_SIZE).
    ///
    /// # Returns
    /// - `Ok(PageParam)` - Zero-based page index and size
    /// - `Err(AppError::BadRequest)` - Page below `base`, size outside `1..=MAX_SIZE`, or
    ///   a row offset that does not fit in a signed 64-bit integer
    pub fn new(base: PageBase, page: Option<i64>, size: Option<i64>) -> Result<Self, AppError> {
        let first = base.first();
        let page = page.unwrap_or(first as i64);
        let size = size.unwrap_or(Self::DEFAULT_SIZE as i64);

        if page < first as i64 {
            return Err(AppError::BadRequest(format!(
                "Page index must not be less than {}",
                first
            )));
        }
        if size < 1 || size as u64 > Self::MAX_SIZE {
            return Err(AppError::BadRequest(format!(
                "Page size must be between 1 and {}",
                Self::MAX_SIZE
            )));
        }

        let index = page as u64 - first;
        let size = size as u64;
        match index.checked_mul(size) {
            Some(offset) if offset <= i64::MAX as u64 => Ok(Self { index, size }),
            _ => Err(AppError::BadRequest(format!(
                "Page index {} is out of range",
                page
            ))),
        }
    }
}
