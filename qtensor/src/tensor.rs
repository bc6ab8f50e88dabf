use crate::buffer::try_copy;
use crate::error::{Result, TensorError};
use crate::quant;

/// Which buffer a tensor currently owns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Representation {
    None,
    F32,
    F16,
    Int8,
}

impl Representation {
    /// Bytes per element; 0 for `None`.
    pub const fn element_size(self) -> usize {
        match self {
            Representation::None => 0,
            Representation::F32 => 4,
            Representation::F16 => 2,
            Representation::Int8 => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum TensorData {
    #[default]
    Empty,
    F32(Vec<f32>),
    F16(Vec<u16>), // raw half bit patterns
    Int8(Vec<i8>),
}

/// One-dimensional tensor owning a single buffer.
///
/// `scale` only carries meaning for `Int8` data, where
/// `int8_value ~= float_value * scale`. It is 1.0 otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Tensor {
    data: TensorData,
    scale: f32,
}

impl Default for Tensor {
    fn default() -> Self {
        Self::new()
    }
}

impl Tensor {
    /// An empty tensor. Does not allocate.
    pub const fn new() -> Self {
        Self {
            data: TensorData::Empty,
            scale: 1.0,
        }
    }

    pub fn from_f32(src: &[f32]) -> Result<Self> {
        let mut t = Self::new();
        t.create_f32(src)?;
        Ok(t)
    }

    pub fn from_f16(src: &[u16]) -> Result<Self> {
        let mut t = Self::new();
        t.create_f16(src)?;
        Ok(t)
    }

    /// Replace the contents with an owned copy of `src`.
    ///
    /// Any buffer already held is released first, so on allocation failure
    /// the tensor is left empty.
    pub fn create_f32(&mut self, src: &[f32]) -> Result<()> {
        if src.is_empty() {
            return Err(TensorError::InvalidArgument);
        }
        self.release();
        self.data = TensorData::F32(try_copy(src)?);
        log::trace!("tensor: created f32 buffer of {} elements", src.len());
        Ok(())
    }

    /// Same contract as [`Tensor::create_f32`], from encoded half values.
    pub fn create_f16(&mut self, src: &[u16]) -> Result<()> {
        if src.is_empty() {
            return Err(TensorError::InvalidArgument);
        }
        self.release();
        self.data = TensorData::F16(try_copy(src)?);
        log::trace!("tensor: created f16 buffer of {} elements", src.len());
        Ok(())
    }

    /// Drop whatever buffer is owned and return to the empty state.
    pub fn release(&mut self) {
        if !matches!(self.data, TensorData::Empty) {
            log::trace!("tensor: releasing {:?} buffer", self.representation());
        }
        self.data = TensorData::Empty;
        self.scale = 1.0;
    }

    /// Quantize the f32 buffer to int8 in place.
    ///
    /// The int8 buffer is fully built before the f32 buffer is dropped; on
    /// error the tensor is untouched.
    pub fn quantize_int8_in_place(&mut self) -> Result<()> {
        let src = match &self.data {
            TensorData::F32(buf) if !buf.is_empty() => buf,
            _ => return Err(TensorError::InvalidState),
        };

        let (q, scale) = quant::quantize_symmetric(src)?;
        self.data = TensorData::Int8(q);
        self.scale = scale;
        log::trace!("tensor: quantized to int8, scale {}", scale);
        Ok(())
    }

    pub fn representation(&self) -> Representation {
        match self.data {
            TensorData::Empty => Representation::None,
            TensorData::F32(_) => Representation::F32,
            TensorData::F16(_) => Representation::F16,
            TensorData::Int8(_) => Representation::Int8,
        }
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        match &self.data {
            TensorData::Empty => 0,
            TensorData::F32(buf) => buf.len(),
            TensorData::F16(buf) => buf.len(),
            TensorData::Int8(buf) => buf.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the owned buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.len() * self.representation().element_size()
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn data(&self) -> &TensorData {
        &self.data
    }

    pub fn as_f32(&self) -> Option<&[f32]> {
        match &self.data {
            TensorData::F32(buf) => Some(buf),
            _ => None,
        }
    }

    pub fn as_f16(&self) -> Option<&[u16]> {
        match &self.data {
            TensorData::F16(buf) => Some(buf),
            _ => None,
        }
    }

    pub fn as_i8(&self) -> Option<&[i8]> {
        match &self.data {
            TensorData::Int8(buf) => Some(buf),
            _ => None,
        }
    }
}
