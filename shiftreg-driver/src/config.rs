//! Driver configuration
//!
//! Everything about a register that is not a pin or a bus. With the `serde`
//! feature enabled this can be loaded from a board description, e.g. TOML:
//!
//! ```toml
//! width = 8
//! toggle_delay_us = 25
//! initial_value = 0
//! bit_order = "MsbFirst"
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use shiftreg_hal::BitOrder;

/// Widest register a single driver addresses
pub const MAX_WIDTH: u8 = 8;

/// Default pulse width for `digital_toggle` in microseconds
pub const DEFAULT_TOGGLE_DELAY_US: u32 = 10;

/// Shift register configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ShiftRegisterConfig {
    /// Number of addressable outputs (1-8)
    pub width: u8,
    /// Default pulse width used by `digital_toggle`
    pub toggle_delay_us: u32,
    /// Byte sent to the register on construction
    pub initial_value: u8,
    /// Bit order for bit-banged shift-out
    #[cfg_attr(feature = "serde", serde(with = "bit_order_serde"))]
    pub bit_order: BitOrder,
}

impl Default for ShiftRegisterConfig {
    fn default() -> Self {
        Self {
            width: MAX_WIDTH,
            toggle_delay_us: DEFAULT_TOGGLE_DELAY_US,
            initial_value: 0,
            bit_order: BitOrder::MsbFirst,
        }
    }
}

impl ShiftRegisterConfig {
    /// Default configuration with a different initial byte
    pub fn with_initial_value(initial_value: u8) -> Self {
        Self {
            initial_value,
            ..Self::default()
        }
    }

    /// Check that the width is one the driver can address
    pub fn is_valid(&self) -> bool {
        (1..=MAX_WIDTH).contains(&self.width)
    }

    /// Byte with every output inside `width` set
    ///
    /// 0xFF for a full 8-bit register.
    pub fn all_ones(&self) -> u8 {
        let width = self.width.min(MAX_WIDTH) as u16;
        ((1u16 << width) - 1) as u8
    }
}

// `BitOrder` lives in the HAL crate, which has no serde dependency.
#[cfg(feature = "serde")]
mod bit_order_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use shiftreg_hal::BitOrder;

    #[derive(Serialize, Deserialize)]
    enum Repr {
        MsbFirst,
        LsbFirst,
    }

    pub fn serialize<S: Serializer>(order: &BitOrder, s: S) -> Result<S::Ok, S::Error> {
        match order {
            BitOrder::MsbFirst => Repr::MsbFirst,
            BitOrder::LsbFirst => Repr::LsbFirst,
        }
        .serialize(s)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<BitOrder, D::Error> {
        Ok(match Repr::deserialize(d)? {
            Repr::MsbFirst => BitOrder::MsbFirst,
            Repr::LsbFirst => BitOrder::LsbFirst,
        })
    }
}
