#![no_std]
#![no_main]

use filtr_firmware as _; // memory layout + panic handler

#[defmt_test::tests]
mod tests {
    use filtr_control::config::Config;
    use filtr_control::dispatch::{Dispatcher, Mode};

    #[test]
    fn dispatcher_keeps_every_mode_within_the_output_range() {
        let mut dispatcher = Dispatcher::new(&Config::default());

        for mode in [
            Mode::Raw,
            Mode::LowPass,
            Mode::HighPass,
            Mode::BandPass,
            Mode::BandStop,
        ] {
            dispatcher.set_mode(mode);
            for i in 0..1000_u32 {
                let raw = if (i / 7) % 2 == 0 { 4095 } else { 0 };
                let processed = dispatcher.tick(raw);
                defmt::assert!(processed <= 4095);
            }
        }
    }
}
