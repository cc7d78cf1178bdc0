#![no_main]
#![no_std]

use filtr_firmware as _; // global logger + panicking-behavior

#[rtic::app(device = stm32l0xx_hal::pac, peripherals = true)]
mod app {
    use filtr_control::command::Command;
    use filtr_control::config::Config;
    use filtr_control::dispatch::{Dispatcher, Mode};
    use filtr_firmware::system::sampler::Sampler;
    use filtr_firmware::system::serial::{CommandRx, LineTx};
    use filtr_firmware::system::System;
    use stm32l0xx_hal::pac::TIM2;
    use stm32l0xx_hal::timer::Timer;

    #[shared]
    struct Shared {
        dispatcher: Dispatcher,
        streaming: bool,
        sample_timer: Timer<TIM2>,
        line_tx: LineTx,
    }

    #[local]
    struct Local {
        sampler: Sampler,
        command_rx: CommandRx,
    }

    #[init]
    fn init(cx: init::Context) -> (Shared, Local, init::Monotonics) {
        defmt::info!("INIT");

        let system = System::init(cx.device);

        // Designing the filter bank runs outside the sampling interrupt,
        // the tick only ever evaluates.
        let dispatcher = Dispatcher::new(&Config::default());

        (
            Shared {
                dispatcher,
                streaming: false,
                sample_timer: system.sample_timer,
                line_tx: system.line_tx,
            },
            Local {
                sampler: system.sampler,
                command_rx: system.command_rx,
            },
            init::Monotonics(),
        )
    }

    /// One sampling period: acquire, filter, stage for transmission.
    #[task(binds = TIM2, priority = 3, local = [sampler], shared = [dispatcher, streaming, sample_timer, line_tx])]
    fn tick(cx: tick::Context) {
        let tick::SharedResources {
            mut dispatcher,
            mut streaming,
            mut sample_timer,
            mut line_tx,
        } = cx.shared;

        sample_timer.lock(|sample_timer| sample_timer.clear_irq());

        let raw = cx.local.sampler.sample();
        let processed = dispatcher.lock(|dispatcher| dispatcher.tick(raw));

        if streaming.lock(|streaming| *streaming) {
            line_tx.lock(|line_tx| {
                if line_tx.is_idle() {
                    line_tx.start(processed);
                }
            });
        }
    }

    /// Serial interrupt, serving both the transmit drain and received
    /// commands. Mode changes take effect on the following tick.
    #[task(binds = USART2, priority = 2, local = [command_rx], shared = [dispatcher, streaming, sample_timer, line_tx])]
    fn serial(cx: serial::Context) {
        let serial::SharedResources {
            mut dispatcher,
            mut streaming,
            mut sample_timer,
            mut line_tx,
        } = cx.shared;

        line_tx.lock(|line_tx| line_tx.drain());

        if let Some(command) = cx.local.command_rx.read() {
            defmt::info!("COMMAND: {}", command);
            match command {
                Command::Start => {
                    dispatcher.lock(|dispatcher| dispatcher.set_mode(Mode::Raw));
                    streaming.lock(|streaming| *streaming = true);
                    sample_timer.lock(|sample_timer| sample_timer.listen());
                }
                Command::Stop => {
                    streaming.lock(|streaming| *streaming = false);
                    sample_timer.lock(|sample_timer| sample_timer.unlisten());
                }
                Command::Select(mode) => {
                    dispatcher.lock(|dispatcher| dispatcher.set_mode(mode));
                }
            }
        }
    }
}
