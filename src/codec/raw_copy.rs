//! Plain byte-copy codec, the memcpy baseline.

use std::marker::PhantomData;
use std::mem::size_of;

use bytes::Bytes;

use super::{Codec, DeltaValue};
use crate::error::Result;

/// Copies the native little-endian value bytes verbatim in both directions.
///
/// Its throughput is the ceiling any real codec can reach on the machine.
#[derive(Debug, Default, Clone, Copy)]
pub struct RawCopy<V> {
    _width: PhantomData<V>,
}

impl<V> RawCopy<V> {
    pub fn new() -> Self {
        RawCopy { _width: PhantomData }
    }
}

impl<V: DeltaValue> Codec<V> for RawCopy<V> {
    fn name(&self) -> &'static str {
        "memcpy"
    }

    fn encode(&mut self, values: &[V]) -> Result<Bytes> {
        Ok(Bytes::copy_from_slice(bytemuck::cast_slice(values)))
    }

    fn decode(&mut self, data: Bytes, expected_len: usize) -> Result<Vec<V>> {
        // A short buffer yields fewer values; the caller reports the mismatch.
        let available = expected_len.min(data.len() / size_of::<V>());
        let mut out = vec![V::default(); available];
        bytemuck::cast_slice_mut::<V, u8>(&mut out)
            .copy_from_slice(&data[..available * size_of::<V>()]);
        Ok(out)
    }
}
