//! Butterworth filter realized as a cascade of second-order sections.
//!
//! Coefficients are derived through the bilinear transform with pre-warped
//! cutoff frequencies, poles spread evenly to get the maximally flat
//! response. Higher orders run as a cascade, section feeding section, since
//! a single high-order stage would not be numerically stable in f32.

use core::f32::consts::PI;

use crate::trig;

/// The deepest supported cascade.
///
/// Two sections realize order 4 for low/high-pass and order 8 for
/// band-pass/band-stop, each of their sections contributing four poles.
pub const MAX_SECTIONS: usize = 2;

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Biquad {
    a: f32,
    d1: f32,
    d2: f32,
}

#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Quad {
    a: f32,
    d1: f32,
    d2: f32,
    d3: f32,
    d4: f32,
}

/// Read-only transfer function description, tagged by the filter kind.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Coefficients {
    LowPass([Biquad; MAX_SECTIONS]),
    HighPass([Biquad; MAX_SECTIONS]),
    BandPass([Quad; MAX_SECTIONS]),
    // The output mix of every band-stop section shares the filter-wide
    // `r` and `s`, derived from the center frequency mapping alone.
    BandStop {
        quads: [Quad; MAX_SECTIONS],
        r: f32,
        s: f32,
    },
}

/// Direct-form II delay registers of a single section.
#[derive(Clone, Copy, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
struct Registers {
    w1: f32,
    w2: f32,
    w3: f32,
    w4: f32,
}

/// Yields filtered signal, one sample per tick.
///
/// Designing a filter is pure arithmetic over the requested parameters and
/// happens once, outside the sampling interrupt. Evaluation advances the
/// delay line in place and must see every sample exactly once, in order.
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Filter {
    sections: usize,
    coefficients: Coefficients,
    state: [Registers; MAX_SECTIONS],
}

impl Filter {
    /// Design a low-pass filter.
    ///
    /// The order is realized as `order / 2` sections, silently truncated to
    /// [`MAX_SECTIONS`]. The cutoff must lie below the nyquist frequency
    /// and the order must be at least 2, otherwise the design is undefined.
    pub fn low_pass(order: usize, sample_rate: f32, cutoff: f32) -> Self {
        let (sections, biquads) = design_two_pole(order, sample_rate, cutoff, false);
        Self::from_coefficients(sections, Coefficients::LowPass(biquads))
    }

    /// Design a high-pass filter.
    ///
    /// Identical pole placement as the low-pass design, with the numerator
    /// zero moved from the nyquist frequency to DC.
    pub fn high_pass(order: usize, sample_rate: f32, cutoff: f32) -> Self {
        let (sections, biquads) = design_two_pole(order, sample_rate, cutoff, true);
        Self::from_coefficients(sections, Coefficients::HighPass(biquads))
    }

    /// Design a band-pass filter.
    ///
    /// The order is realized as `order / 4` sections, silently truncated to
    /// [`MAX_SECTIONS`]. Band edges must satisfy `lower < upper`, both
    /// below the nyquist frequency, and the order must be at least 4,
    /// otherwise the design is undefined.
    pub fn band_pass(order: usize, sample_rate: f32, lower: f32, upper: f32) -> Self {
        let (sections, quads, _) = design_four_pole(order, sample_rate, lower, upper, false);
        Self::from_coefficients(sections, Coefficients::BandPass(quads))
    }

    /// Design a band-stop filter.
    ///
    /// Same contract as the band-pass design.
    pub fn band_stop(order: usize, sample_rate: f32, lower: f32, upper: f32) -> Self {
        let (sections, quads, a) = design_four_pole(order, sample_rate, lower, upper, true);
        Self::from_coefficients(
            sections,
            Coefficients::BandStop {
                quads,
                r: 4.0 * a,
                s: 4.0 * a * a + 2.0,
            },
        )
    }

    fn from_coefficients(sections: usize, coefficients: Coefficients) -> Self {
        Self {
            sections,
            coefficients,
            state: [Registers::default(); MAX_SECTIONS],
        }
    }

    /// Number of realized second-order sections.
    ///
    /// Callers that need to know whether the requested order got truncated
    /// can compare against their expectation here.
    pub fn sections(&self) -> usize {
        self.sections
    }

    /// Zero the delay line, forgetting all evaluation history.
    pub fn reset(&mut self) {
        self.state = [Registers::default(); MAX_SECTIONS];
    }

    /// Evaluate a single sample, advancing the delay line.
    ///
    /// Runs in bounded time, at most [`MAX_SECTIONS`] constant-time section
    /// updates, and never fails for finite input.
    pub fn tick(&mut self, x: f32) -> f32 {
        let Self {
            sections,
            coefficients,
            state,
        } = self;
        let mut x = x;

        match coefficients {
            Coefficients::LowPass(biquads) => {
                for (c, w) in biquads.iter().zip(state.iter_mut()).take(*sections) {
                    let w0 = c.d1 * w.w1 + c.d2 * w.w2 + x;
                    x = c.a * (w0 + 2.0 * w.w1 + w.w2);
                    w.w2 = w.w1;
                    w.w1 = w0;
                }
            }
            Coefficients::HighPass(biquads) => {
                for (c, w) in biquads.iter().zip(state.iter_mut()).take(*sections) {
                    let w0 = c.d1 * w.w1 + c.d2 * w.w2 + x;
                    x = c.a * (w0 - 2.0 * w.w1 + w.w2);
                    w.w2 = w.w1;
                    w.w1 = w0;
                }
            }
            Coefficients::BandPass(quads) => {
                for (c, w) in quads.iter().zip(state.iter_mut()).take(*sections) {
                    let w0 = c.d1 * w.w1 + c.d2 * w.w2 + c.d3 * w.w3 + c.d4 * w.w4 + x;
                    x = c.a * (w0 - 2.0 * w.w2 + w.w4);
                    w.w4 = w.w3;
                    w.w3 = w.w2;
                    w.w2 = w.w1;
                    w.w1 = w0;
                }
            }
            Coefficients::BandStop { quads, r, s } => {
                for (c, w) in quads.iter().zip(state.iter_mut()).take(*sections) {
                    let w0 = c.d1 * w.w1 + c.d2 * w.w2 + c.d3 * w.w3 + c.d4 * w.w4 + x;
                    x = c.a * (w0 - *r * w.w1 + *s * w.w2 - *r * w.w3 + w.w4);
                    w.w4 = w.w3;
                    w.w3 = w.w2;
                    w.w2 = w.w1;
                    w.w1 = w0;
                }
            }
        }

        x
    }

    /// Evaluate a whole buffer in place.
    pub fn process(&mut self, buffer: &mut [f32]) {
        for x in buffer.iter_mut() {
            *x = self.tick(*x);
        }
    }
}

// Butterworth pole angle, spreading poles of the cascade evenly over the
// left half-plane.
fn pole_angle(i: usize, sections: usize) -> f32 {
    trig::sin(PI * (2 * i + 1) as f32 / (4 * sections) as f32)
}

fn design_two_pole(
    order: usize,
    sample_rate: f32,
    cutoff: f32,
    inverted: bool,
) -> (usize, [Biquad; MAX_SECTIONS]) {
    let sections = (order / 2).min(MAX_SECTIONS);

    let a = trig::tan(PI * cutoff / sample_rate);
    let a2 = a * a;

    let mut biquads = [Biquad::default(); MAX_SECTIONS];
    for (i, biquad) in biquads.iter_mut().enumerate().take(sections) {
        let r = pole_angle(i, sections);
        let s = a2 + 2.0 * a * r + 1.0;
        *biquad = Biquad {
            a: if inverted { 1.0 / s } else { a2 / s },
            d1: 2.0 * (1.0 - a2) / s,
            d2: -(a2 - 2.0 * a * r + 1.0) / s,
        };
    }

    (sections, biquads)
}

fn design_four_pole(
    order: usize,
    sample_rate: f32,
    lower: f32,
    upper: f32,
    inverted: bool,
) -> (usize, [Quad; MAX_SECTIONS], f32) {
    let sections = (order / 4).min(MAX_SECTIONS);

    // Center frequency and bandwidth mapping, pre-warped through the
    // approximated tangent.
    let a = trig::cos(PI * (upper + lower) / sample_rate)
        / trig::cos(PI * (upper - lower) / sample_rate);
    let a2 = a * a;
    let b = trig::tan(PI * (upper - lower) / sample_rate);
    let b2 = b * b;

    let mut quads = [Quad::default(); MAX_SECTIONS];
    for (i, quad) in quads.iter_mut().enumerate().take(sections) {
        let r = pole_angle(i, sections);
        let s = b2 + 2.0 * b * r + 1.0;
        *quad = Quad {
            a: if inverted { 1.0 / s } else { b2 / s },
            d1: 4.0 * a * (1.0 + b * r) / s,
            d2: 2.0 * (b2 - 2.0 * a2 - 1.0) / s,
            d3: 4.0 * a * (1.0 - b * r) / s,
            d4: -(b2 - 2.0 * b * r + 1.0) / s,
        };
    }

    (sections, quads, a)
}
