//! Single-buffer tensors in f32, f16 or symmetric int8 form, with the bit
//! level codecs between them.

pub mod buffer;
pub mod error;
pub mod half;
pub mod quant;
pub mod tensor;

pub use error::{Result, TensorError};
pub use self::half::{f16_to_f32, f32_to_f16};
pub use quant::QMAX;
pub use tensor::{Representation, Tensor, TensorData};
