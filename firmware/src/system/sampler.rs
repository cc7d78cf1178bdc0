//! Acquisition of raw samples from the analog input.

use stm32l0xx_hal::adc::{Adc, Ready};
use stm32l0xx_hal::gpio::gpioa::PA0;
use stm32l0xx_hal::gpio::Analog;
use stm32l0xx_hal::prelude::*;

pub struct Sampler {
    adc: Adc<Ready>,
    pin: PA0<Analog>,
}

impl Sampler {
    pub fn new(adc: Adc<Ready>, pin: PA0<Analog>) -> Self {
        Self { adc, pin }
    }

    /// Acquire one 12-bit sample.
    ///
    /// Blocks for the conversion, a negligible fraction of the sampling
    /// period.
    pub fn sample(&mut self) -> u16 {
        self.adc.read(&mut self.pin).unwrap_or(0)
    }
}
