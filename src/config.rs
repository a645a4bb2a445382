// config.rs — Compile-time configuration constants.
//
// Runtime knobs live in `bench::config::BenchConfig`; the values here are the
// defaults it starts from and the fixed parameters of every sweep.

// Delta bounds tested by the synthetic sweeps, in sweep order.
// Chosen so that consecutive bounds need different bit widths once packed:
// 1 bit, a few bits, around 16 bits, just above 32 bits, up to 62 bits.
pub const DELTA_BOUNDS: [u64; 11] = [
    1,
    10,
    100,
    500,
    1_000,
    10_000,
    32_000,
    42_000,
    1_000_000_000,
    3_000_000_000,
    4_000_000_000_000_000_000,
];

// Number of roundtrip trials per sweep step.
// The fastest valid trial (by encode time) is reported.
pub const SAMPLE_REPEAT_DEFAULT: usize = 100;

// Seed for the pseudorandom generator.
// Fixed so throughput numbers stay comparable between runs.
pub const SEED_DEFAULT: u64 = 12_141_802;

// Maximum number of mismatching values printed for one failed trial.
pub const REPORT_LIMIT_DEFAULT: usize = 10;

// Default console verbosity (results + warnings).
pub const DISPLAY_LEVEL_DEFAULT: u32 = 2;

// Durations shorter than this are reported as this, so a too-fast-to-measure
// phase yields an upper-bound throughput instead of a division by zero.
pub const MIN_MEASURABLE_MICROS: u64 = 1;
