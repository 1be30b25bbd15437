//! Shift register driver
//!
//! Drives an 8-bit serial-in, parallel-out shift register (74HC595,
//! 74HC164 and friends) over one of three transports:
//!
//! - Bit-banged data/clock lines
//! - A hardware SPI peripheral (8 MHz, mode 0, MSB first)
//! - Virtual, with no hardware at all, for exercising logic in tests
//!
//! Shift registers cannot be read back, so the driver caches the last byte
//! it sent and answers every read from that cache. Single output bits are
//! updated with a read-modify-write of the cached byte followed by a full
//! retransmission.
//!
//! ```ignore
//! let mut sr = ShiftRegister::new_spi(spi, latch, delay, 0x00)?;
//! sr.digital_write(3, true)?;
//! sr.digital_toggle(5, None)?; // pulse output 5 for the default 10 µs
//! assert!(sr.digital_read(3)?);
//! ```
//!
//! # Features
//!
//! - `defmt`: log construction and writes through `defmt`
//! - `serde`: derive `Serialize`/`Deserialize` for [`ShiftRegisterConfig`].
//!   The TOML loading test only runs with it: `cargo test --features serde`
//!
//! A `ShiftRegister` performs read-modify-write on its cached byte and is
//! not meant to be shared between tasks without external locking.

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod register;

pub use config::ShiftRegisterConfig;
pub use error::Error;
pub use register::{ShiftRegister, Transport, TransportKind, SPI_SETTINGS};
pub use shiftreg_hal as hal;
