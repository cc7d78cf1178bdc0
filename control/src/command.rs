//! Decoding of one-byte commands arriving over the control channel.

use crate::dispatch::Mode;

/// Action requested by the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Begin streaming of processed samples, starting over in raw mode.
    Start,
    /// Stop streaming and the sampling timer.
    Stop,
    /// Select the filter processing the sample stream.
    Select(Mode),
}

impl Command {
    /// Decode a received byte. Unknown bytes carry no command.
    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b's' => Some(Command::Start),
            b'p' => Some(Command::Stop),
            b'a' => Some(Command::Select(Mode::LowPass)),
            b'b' => Some(Command::Select(Mode::HighPass)),
            b'c' => Some(Command::Select(Mode::BandPass)),
            b'd' => Some(Command::Select(Mode::BandStop)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_known_bytes_when_decoding_it_maps_them_to_commands() {
        assert_eq!(Command::from_byte(b's'), Some(Command::Start));
        assert_eq!(Command::from_byte(b'p'), Some(Command::Stop));
        assert_eq!(Command::from_byte(b'a'), Some(Command::Select(Mode::LowPass)));
        assert_eq!(Command::from_byte(b'b'), Some(Command::Select(Mode::HighPass)));
        assert_eq!(Command::from_byte(b'c'), Some(Command::Select(Mode::BandPass)));
        assert_eq!(Command::from_byte(b'd'), Some(Command::Select(Mode::BandStop)));
    }

    #[test]
    fn given_unknown_bytes_when_decoding_it_ignores_them() {
        for byte in [b'e', b'z', b'0', b'\r', b'\n', 0x00, 0xff] {
            assert_eq!(Command::from_byte(byte), None);
        }
    }
}
