//! Variance -> color bucket classification.
//!
//! Sixteen buckets with boundaries at every integer from +7 down to -7. A
//! variance falls into the first bucket whose threshold it strictly exceeds;
//! anything at or below -7 (and NaN) lands in the coldest bucket.

use crate::Color;

/// Number of color buckets.
pub const BUCKET_COUNT: usize = 16;

/// Lower (exclusive) threshold of the warmest bucket.
pub const TOP_THRESHOLD: i32 = 7;

/// Bucket colors, warmest first.
pub const PALETTE: [Color; BUCKET_COUNT] = [
    Color::rgb(0xc9, 0x2a, 0x2a),
    Color::rgb(0xd9, 0x48, 0x0f),
    Color::rgb(0xe8, 0x59, 0x0c),
    Color::rgb(0xf7, 0x67, 0x07),
    Color::rgb(0xfd, 0x7e, 0x14),
    Color::rgb(0xff, 0x92, 0x2b),
    Color::rgb(0xff, 0xa9, 0x4d),
    Color::rgb(0xff, 0xc0, 0x78),
    Color::rgb(0x74, 0xc0, 0xfc),
    Color::rgb(0x4d, 0xab, 0xf7),
    Color::rgb(0x33, 0x9a, 0xf0),
    Color::rgb(0x22, 0x8b, 0xe6),
    Color::rgb(0x1c, 0x7e, 0xd6),
    Color::rgb(0x19, 0x71, 0xc2),
    Color::rgb(0x18, 0x64, 0xab),
    Color::rgb(0x36, 0x4f, 0xc7),
];

/// Bucket index for a variance; 0 is the warmest, 15 the coldest.
///
/// Non-decreasing as `variance` decreases.
#[must_use]
pub fn bucket_index(variance: f64) -> usize {
    (0..BUCKET_COUNT - 1)
        .find(|&i| variance > f64::from(TOP_THRESHOLD - i as i32))
        .unwrap_or(BUCKET_COUNT - 1)
}

/// Display color for a variance.
#[must_use]
pub fn classify(variance: f64) -> Color {
    PALETTE[bucket_index(variance)]
}
