//! Throughput derivation, console report lines and CSV sweep records.

use std::fs::OpenOptions;
use std::mem::size_of;
use std::path::Path;

use super::roundtrip::TrialResult;
use crate::config::MIN_MEASURABLE_MICROS;
use crate::error::Result;
use crate::timefn::DurationUs;

/// Throughput in MB/s (decimal megabytes).
///
/// One byte per microsecond is 10^6 bytes per second, i.e. 1 MB/s, so no
/// scaling is needed. Durations below [`MIN_MEASURABLE_MICROS`] are raised to
/// it, which turns a too-fast-to-measure phase into an upper-bound figure.
pub fn throughput_mb_per_s(byte_size: usize, duration_us: DurationUs) -> f64 {
    byte_size as f64 / duration_us.max(MIN_MEASURABLE_MICROS) as f64
}

/// Uncompressed payload size of `value_count` values of type `V`.
pub fn payload_bytes<V>(value_count: usize) -> usize {
    value_count * size_of::<V>()
}

// ── Console report ────────────────────────────────────────────────────────────

/// Figures for one sweep step, ready for display.
#[derive(Debug, Clone, PartialEq)]
pub struct StepReport {
    pub value_count: usize,
    pub payload_bytes: usize,
    /// Human description of the input, e.g. "with a pseudorandom delta in [0;100]".
    pub label: String,
    pub trial: TrialResult,
    pub encode_mb_s: f64,
    pub decode_mb_s: f64,
}

impl StepReport {
    pub fn new(value_count: usize, payload_bytes: usize, label: String, trial: TrialResult) -> Self {
        StepReport {
            value_count,
            payload_bytes,
            label,
            trial,
            encode_mb_s: throughput_mb_per_s(payload_bytes, trial.encode_us),
            decode_mb_s: throughput_mb_per_s(payload_bytes, trial.decode_us),
        }
    }

    /// Payload size over encoded size; 0 when nothing was encoded.
    pub fn ratio(&self) -> f64 {
        if self.trial.encoded_bytes == 0 {
            0.0
        } else {
            self.payload_bytes as f64 / self.trial.encoded_bytes as f64
        }
    }

    /// Multi-line human-readable summary.
    pub fn render(&self) -> String {
        format!(
            "{} values ({}MB) {}\n\
             Encoding took\t{}µs → ~{:.3}MB/s\n\
             Decoding took\t{}µs → ~{:.3}MB/s\n\
             Encoded size\t{} bytes (ratio {:.3})",
            self.value_count,
            self.payload_bytes as f64 / 1_000_000.0,
            self.label,
            self.trial.encode_us,
            self.encode_mb_s,
            self.trial.decode_us,
            self.decode_mb_s,
            self.trial.encoded_bytes,
            self.ratio(),
        )
    }
}

// ── Sweep record ──────────────────────────────────────────────────────────────

/// One persisted CSV line: the value count followed by one figure per tested
/// delta bound, in sweep order.
#[derive(Debug, Clone, PartialEq)]
pub struct SweepRecord {
    pub value_count: usize,
    pub figures: Vec<f64>,
}

impl SweepRecord {
    pub fn new(value_count: usize) -> Self {
        SweepRecord {
            value_count,
            figures: Vec::new(),
        }
    }

    pub fn push(&mut self, figure: f64) {
        self.figures.push(figure);
    }

    /// Fields of the CSV line, value count first.
    pub fn fields(&self) -> Vec<String> {
        std::iter::once(self.value_count.to_string())
            .chain(self.figures.iter().map(|f| f.to_string()))
            .collect()
    }

    /// Appends this record as one line to `path`, creating the file if needed.
    ///
    /// Existing lines are never touched, so repeated runs accumulate history.
    pub fn append_to(&self, path: &Path) -> Result<()> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_writer(file);
        writer.write_record(self.fields())?;
        writer.flush()?;
        Ok(())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
