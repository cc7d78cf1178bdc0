//! Byte-level plumbing of the serial port.

use heapless::String;
use stm32l0xx_hal::pac::USART2;
use stm32l0xx_hal::prelude::*;
use stm32l0xx_hal::serial::{Rx, Tx};

use filtr_control::command::Command;
use filtr_control::output::{self, LINE_LENGTH};

/// Transmitter pushing encoded lines out, one byte per TXE interrupt.
pub struct LineTx {
    tx: Tx<USART2>,
    line: String<LINE_LENGTH>,
    cursor: usize,
}

impl LineTx {
    pub fn new(tx: Tx<USART2>) -> Self {
        Self {
            tx,
            line: String::new(),
            cursor: 0,
        }
    }

    /// A line stays in flight until its last byte got pushed out.
    pub fn is_idle(&self) -> bool {
        self.cursor >= self.line.len()
    }

    /// Stage a new line and start draining it.
    ///
    /// The caller only stages while idle; samples processed while a line
    /// is in flight are not transmitted.
    pub fn start(&mut self, value: u16) {
        self.line = output::line(value);
        self.cursor = 0;
        self.tx.listen();
    }

    /// Push staged bytes out while the transmitter accepts them.
    pub fn drain(&mut self) {
        while self.cursor < self.line.len() {
            match self.tx.write(self.line.as_bytes()[self.cursor]) {
                Ok(()) => self.cursor += 1,
                Err(nb::Error::WouldBlock) => return,
                Err(nb::Error::Other(_)) => break,
            }
        }
        self.tx.unlisten();
    }
}

/// Receiver decoding one-byte commands.
pub struct CommandRx {
    rx: Rx<USART2>,
}

impl CommandRx {
    pub fn new(rx: Rx<USART2>) -> Self {
        Self { rx }
    }

    /// Decode the freshly received byte, if any arrived.
    pub fn read(&mut self) -> Option<Command> {
        match self.rx.read() {
            Ok(byte) => Command::from_byte(byte),
            Err(_) => None,
        }
    }
}
