//! Shift register hardware abstraction
//!
//! This crate defines the capabilities the shift register driver consumes
//! from a board: output pins, an SPI peripheral and a microsecond delay.
//! Board support code implements them directly or goes through the
//! [`compat`] adapters for anything that already speaks `embedded-hal` 1.0.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  shiftreg-driver (ShiftRegister)        │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  shiftreg-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ board HAL     │       │ embedded-hal  │
//! │ (direct impl) │       │ via compat    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital output with cached state
//! - [`spi::SpiBus`] - Transaction-framed single byte SPI transfers
//! - [`delay::DelayUs`] - Busy-wait delay

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod delay;
pub mod gpio;
pub mod spi;

// Re-export key traits at crate root for convenience
pub use delay::{DelayUs, NoDelay};
pub use gpio::{NoPin, OutputPin};
pub use spi::{BitOrder, Mode, NoSpi, SpiBus, SpiConfig};
