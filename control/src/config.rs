//! Design-time configuration of the filter bank.

/// Parameters all four filters are designed from.
///
/// The designer does not validate: cutoffs must stay below the nyquist
/// frequency, band edges must be ordered, and the order must be positive.
/// Orders exceeding the cascade capacity get silently truncated.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    pub sample_rate: f32,
    pub order: usize,
    pub low_pass_cutoff: f32,
    pub high_pass_cutoff: f32,
    pub band_pass_cutoffs: (f32, f32),
    pub band_stop_cutoffs: (f32, f32),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sample_rate: 1000.0,
            order: 4,
            low_pass_cutoff: 15.0,
            high_pass_cutoff: 95.0,
            band_pass_cutoffs: (45.0, 55.0),
            band_stop_cutoffs: (40.0, 60.0),
        }
    }
}
