// Fallible buffer allocation. Every tensor buffer goes through here so an
// exhausted allocator surfaces as `AllocationFailure` instead of an abort.

use crate::error::{Result, TensorError};

/// Reserve exactly `len` elements without initializing them.
pub fn try_reserve<T>(len: usize) -> Result<Vec<T>> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| TensorError::AllocationFailure(len))?;
    Ok(buf)
}

/// A buffer of `len` default elements.
pub fn try_with_len<T: Copy + Default>(len: usize) -> Result<Vec<T>> {
    let mut buf = try_reserve(len)?;
    buf.resize(len, T::default());
    Ok(buf)
}

/// An owned copy of `src`.
pub fn try_copy<T: Copy>(src: &[T]) -> Result<Vec<T>> {
    let mut buf = try_reserve(src.len())?;
    buf.extend_from_slice(src);
    Ok(buf)
}
