//! DELTA_BINARY_PACKED codec backed by the `parquet` crate.

use std::fmt;

use bytes::Bytes;
use parquet::encodings::decoding::Decoder;
use parquet::encodings::encoding::Encoder;

use super::{Codec, DeltaValue};
use crate::error::Result;

/// Parquet DELTA_BINARY_PACKED encoder/decoder pair for one integer width.
///
/// The encoder resets itself on every flush and the decoder on every
/// `set_data`, so one instance serves any number of roundtrips.
pub struct DeltaBinaryPacked<V: DeltaValue> {
    encoder: Box<dyn Encoder<V::Physical>>,
    decoder: Box<dyn Decoder<V::Physical>>,
}

impl<V: DeltaValue> DeltaBinaryPacked<V> {
    pub fn new() -> Self {
        DeltaBinaryPacked {
            encoder: V::delta_encoder(),
            decoder: V::delta_decoder(),
        }
    }
}

impl<V: DeltaValue> Default for DeltaBinaryPacked<V> {
    fn default() -> Self {
        DeltaBinaryPacked::new()
    }
}

impl<V: DeltaValue> fmt::Debug for DeltaBinaryPacked<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DeltaBinaryPacked<i{}>", V::BITS)
    }
}

impl<V: DeltaValue> Codec<V> for DeltaBinaryPacked<V> {
    fn name(&self) -> &'static str {
        "DELTA_BINARY_PACKED"
    }

    fn encode(&mut self, values: &[V]) -> Result<Bytes> {
        self.encoder.put(values)?;
        Ok(self.encoder.flush_buffer()?)
    }

    fn decode(&mut self, data: Bytes, expected_len: usize) -> Result<Vec<V>> {
        let mut out = vec![V::default(); expected_len];
        self.decoder.set_data(data, expected_len)?;
        let decoded = self.decoder.get(&mut out)?;
        out.truncate(decoded);
        Ok(out)
    }
}
