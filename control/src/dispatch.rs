//! Per-tick selection of the active filter and shaping of its output.

use filtr_dsp::butterworth::Filter;

use crate::config::Config;

/// Full scale of the 12-bit sample domain.
pub const FULL_SCALE: f32 = 4095.0;

// High-pass and band-pass remove the DC component, centering their output
// around zero. The bias moves it back to mid-scale of the display range.
const DC_BIAS: f32 = 2048.0;

/// Selector of the filter processing the sample stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    #[default]
    Raw,
    LowPass,
    HighPass,
    BandPass,
    BandStop,
}

/// Routes every sample through the currently selected filter.
///
/// Owns the filter bank and all of its state. Only the selected filter
/// advances its delay line, the remaining ones keep whatever history they
/// accumulated before the last mode change.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Dispatcher {
    mode: Mode,
    low_pass: Filter,
    high_pass: Filter,
    band_pass: Filter,
    band_stop: Filter,
}

impl Dispatcher {
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            mode: Mode::default(),
            low_pass: Filter::low_pass(config.order, config.sample_rate, config.low_pass_cutoff),
            high_pass: Filter::high_pass(config.order, config.sample_rate, config.high_pass_cutoff),
            band_pass: Filter::band_pass(
                config.order,
                config.sample_rate,
                config.band_pass_cutoffs.0,
                config.band_pass_cutoffs.1,
            ),
            band_stop: Filter::band_stop(
                config.order,
                config.sample_rate,
                config.band_stop_cutoffs.0,
                config.band_stop_cutoffs.1,
            ),
        }
    }

    /// Process one raw sample through the selected filter.
    ///
    /// Runs once per sampling tick. DC-removing filters get biased back to
    /// mid-scale, and the result is clamped into the valid output range.
    pub fn tick(&mut self, raw: u16) -> u16 {
        let input = raw as f32;

        let output = match self.mode {
            Mode::Raw => input,
            Mode::LowPass => self.low_pass.tick(input),
            Mode::HighPass => self.high_pass.tick(input) + DC_BIAS,
            Mode::BandPass => self.band_pass.tick(input) + DC_BIAS,
            Mode::BandStop => self.band_stop.tick(input),
        };

        output.clamp(0.0, FULL_SCALE) as u16
    }

    /// Replace the mode selector.
    ///
    /// The update must not preempt a running [`Self::tick`]; the caller
    /// sequences it on a tick boundary. The newly selected filter resumes
    /// from its old delay line.
    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Re-design the whole filter bank, zeroing all delay lines.
    ///
    /// The selected mode survives. This must never overlap an evaluation,
    /// the caller keeps the sampling interrupt stopped while reconfiguring.
    pub fn reconfigure(&mut self, config: &Config) {
        let mode = self.mode;
        *self = Self::new(config);
        self.mode = mode;
    }
}
