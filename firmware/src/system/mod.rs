//! Bring-up of the NUCLEO-L053R8 peripherals.

pub mod sampler;
pub mod serial;

use stm32l0xx_hal::pac::{Peripherals as DevicePeripherals, TIM2};
use stm32l0xx_hal::prelude::*;
use stm32l0xx_hal::rcc::{Config as RccConfig, PLLDiv, PLLMul, PLLSource};
use stm32l0xx_hal::serial::{Config as SerialConfig, Event as SerialEvent};
use stm32l0xx_hal::timer::Timer;

use sampler::Sampler;
use serial::{CommandRx, LineTx};

/// Ticks of the sampling timer per second.
pub const SAMPLE_RATE: u32 = 1000;

pub struct System {
    pub sampler: Sampler,
    pub sample_timer: Timer<TIM2>,
    pub line_tx: LineTx,
    pub command_rx: CommandRx,
}

impl System {
    /// Initialize the system abstraction.
    #[must_use]
    pub fn init(dp: DevicePeripherals) -> Self {
        // 16 MHz HSI multiplied up to the 32 MHz system clock.
        let mut rcc = dp
            .RCC
            .freeze(RccConfig::pll(PLLSource::HSI16, PLLMul::Mul4, PLLDiv::Div2));

        let gpioa = dp.GPIOA.split(&mut rcc);

        let adc = dp.ADC.constrain(&mut rcc);
        let sampler = Sampler::new(adc, gpioa.pa0.into_analog());

        let mut sample_timer = dp.TIM2.timer(SAMPLE_RATE.Hz(), &mut rcc);
        sample_timer.listen();

        let mut serial = dp
            .USART2
            .usart(
                gpioa.pa2,
                gpioa.pa3,
                SerialConfig::default().baudrate(115_200.Bd()),
                &mut rcc,
            )
            .unwrap();
        serial.listen(SerialEvent::Rxne);
        let (tx, rx) = serial.split();

        Self {
            sampler,
            sample_timer,
            line_tx: LineTx::new(tx),
            command_rx: CommandRx::new(rx),
        }
    }
}
