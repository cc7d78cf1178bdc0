//! Encoding of processed samples for the serial plotter.
//!
//! The transport is plain text, one decimal value per CRLF-terminated
//! line, so any serial plotter can graph the stream directly.

use core::fmt::Write as _;

use heapless::String;

/// Longest encoded line, the widest u16 plus CRLF.
pub const LINE_LENGTH: usize = 7;

/// Encode a processed sample into its line representation.
pub fn line(value: u16) -> String<LINE_LENGTH> {
    let mut line = String::new();
    // Five digits and the terminator always fit the capacity.
    let _ = write!(&mut line, "{}\r\n", value);
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sample_when_encoding_it_renders_a_decimal_crlf_line() {
        assert_eq!(line(0).as_str(), "0\r\n");
        assert_eq!(line(7).as_str(), "7\r\n");
        assert_eq!(line(2048).as_str(), "2048\r\n");
        assert_eq!(line(4095).as_str(), "4095\r\n");
    }

    #[test]
    fn given_largest_sample_when_encoding_it_fits_the_capacity() {
        assert_eq!(line(u16::MAX).as_str(), "65535\r\n");
    }
}
