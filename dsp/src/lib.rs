//! Signal filtering components that must run in real-time.

#![cfg_attr(not(test), no_std)]

#[cfg(test)]
#[macro_use]
extern crate approx;

pub mod butterworth;
pub mod trig;
