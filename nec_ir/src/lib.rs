//! NEC-style infrared framing: a bit-addressable command word and the encoder
//! that turns any bit sequence into a timed pulse timeline.
#![no_std]

#[cfg(test)]
extern crate std;

mod bitword;
mod encoder;
mod timing;

pub use bitword::{BitWord, BitWordError, Field, MAX_FIELD_WIDTH};
pub use encoder::{encode, encode_into, CapacityError, Level, PulseItem, Pulses};
pub use timing::NecTiming;
