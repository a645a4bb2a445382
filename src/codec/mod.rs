//! Codec capability seam.
//!
//! The harness measures anything that implements [`Codec`]: an encoder from a
//! slice of fixed-width integers to an opaque byte buffer, and a decoder back
//! to a sequence of a requested length.  Two implementations ship with the
//! crate:
//!
//! - [`DeltaBinaryPacked`] — Parquet's DELTA_BINARY_PACKED encoding, backed by
//!   the `parquet` crate's encoder/decoder.
//! - [`RawCopy`] — a plain byte copy, used as the memcpy baseline.
//!
//! The integer width is a type parameter ([`DeltaValue`]), so one generic
//! roundtrip routine serves both `i32` and `i64` columns.

pub mod delta_binary_packed;
pub mod raw_copy;

use std::fmt;

use bytes::Bytes;
use parquet::data_type::{DataType, Int32Type, Int64Type};
use parquet::encodings::decoding::{Decoder, DeltaBitPackDecoder};
use parquet::encodings::encoding::{DeltaBitPackEncoder, Encoder};

use crate::error::Result;

pub use delta_binary_packed::DeltaBinaryPacked;
pub use raw_copy::RawCopy;

/// A fixed-width signed integer that can be generated, encoded and validated.
pub trait DeltaValue:
    bytemuck::Pod + Default + PartialEq + fmt::Debug + fmt::Display + Send + Sync + 'static
{
    /// Parquet physical type whose values are `Self`.
    type Physical: DataType<T = Self>;

    /// Width in bits, used for labels.
    const BITS: u32;
    const MIN: i128;
    const MAX: i128;

    fn to_i128(self) -> i128;

    /// Narrowing conversion.  Callers guarantee `v` lies in `MIN..=MAX`.
    fn from_i128(v: i128) -> Self;

    fn delta_encoder() -> Box<dyn Encoder<Self::Physical>>;
    fn delta_decoder() -> Box<dyn Decoder<Self::Physical>>;
}

macro_rules! impl_delta_value {
    ($int:ty, $physical:ty) => {
        impl DeltaValue for $int {
            type Physical = $physical;

            const BITS: u32 = <$int>::BITS;
            const MIN: i128 = <$int>::MIN as i128;
            const MAX: i128 = <$int>::MAX as i128;

            #[inline]
            fn to_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_i128(v: i128) -> Self {
                debug_assert!((<Self as DeltaValue>::MIN..=<Self as DeltaValue>::MAX).contains(&v));
                v as $int
            }

            fn delta_encoder() -> Box<dyn Encoder<Self::Physical>> {
                Box::new(DeltaBitPackEncoder::<$physical>::new())
            }

            fn delta_decoder() -> Box<dyn Decoder<Self::Physical>> {
                Box::new(DeltaBitPackDecoder::<$physical>::new())
            }
        }
    };
}

impl_delta_value!(i32, Int32Type);
impl_delta_value!(i64, Int64Type);

/// Encode/decode capability under test.
///
/// Implementations may keep internal state between calls (e.g. reusable
/// encoder buffers), hence `&mut self`.  `decode` must return exactly
/// `expected_len` values when `data` came from a matching `encode`; any other
/// length is treated as a validation failure by the caller.
pub trait Codec<V: DeltaValue> {
    /// Short label used in reports.
    fn name(&self) -> &'static str;

    fn encode(&mut self, values: &[V]) -> Result<Bytes>;

    fn decode(&mut self, data: Bytes, expected_len: usize) -> Result<Vec<V>>;
}
