//! SPI bus abstractions
//!
//! A transaction-framed view of an SPI master: the bus is initialized once,
//! then each byte goes out inside a `begin_transaction`/`end_transaction`
//! pair carrying the clock rate, bit order and mode for that device.

/// 4 MHz SPI clock
pub const SPI_4MHZ: u32 = 4_000_000;
/// 8 MHz SPI clock
pub const SPI_8MHZ: u32 = 8_000_000;
/// 12 MHz SPI clock
pub const SPI_12MHZ: u32 = 12_000_000;
/// 16 MHz SPI clock
pub const SPI_16MHZ: u32 = 16_000_000;
/// 20 MHz SPI clock
pub const SPI_20MHZ: u32 = 20_000_000;
/// 25 MHz SPI clock
pub const SPI_25MHZ: u32 = 25_000_000;
/// 30 MHz SPI clock
pub const SPI_30MHZ: u32 = 30_000_000;
/// 40 MHz SPI clock
pub const SPI_40MHZ: u32 = 40_000_000;

/// SPI bus master
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Initialize the peripheral
    ///
    /// Called once when a driver takes ownership of the bus.
    fn begin(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Claim the bus and apply `config` for the following transfers
    fn begin_transaction(&mut self, config: &SpiConfig) -> Result<(), Self::Error>;

    /// Shift one byte out while shifting one byte in
    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error>;

    /// Release the bus
    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<T: SpiBus + ?Sized> SpiBus for &mut T {
    type Error = T::Error;

    fn begin(&mut self) -> Result<(), Self::Error> {
        T::begin(self)
    }

    fn begin_transaction(&mut self, config: &SpiConfig) -> Result<(), Self::Error> {
        T::begin_transaction(self, config)
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        T::transfer(self, byte)
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        T::end_transaction(self)
    }
}

/// SPI transaction settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SpiConfig {
    /// Clock frequency in Hz
    pub frequency: u32,
    /// Order in which bits of a byte are shifted
    pub bit_order: BitOrder,
    /// Clock polarity and phase
    pub mode: Mode,
}

impl SpiConfig {
    /// Create a new configuration
    pub const fn new(frequency: u32, bit_order: BitOrder, mode: Mode) -> Self {
        Self {
            frequency,
            bit_order,
            mode,
        }
    }
}

impl Default for SpiConfig {
    fn default() -> Self {
        Self::new(SPI_8MHZ, BitOrder::MsbFirst, Mode::Mode0)
    }
}

/// Bit order of a serial byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Bit 7 goes out first
    #[default]
    MsbFirst,
    /// Bit 0 goes out first
    LsbFirst,
}

impl BitOrder {
    /// Value of the `index`-th bit to be shifted out of `byte` (0 = first)
    ///
    /// Only the low three bits of `index` are used, so index 8 is bit 0 again.
    pub fn bit(self, byte: u8, index: u8) -> bool {
        let index = index & 7;
        let shift = match self {
            BitOrder::MsbFirst => 7 - index,
            BitOrder::LsbFirst => index,
        };
        (byte >> shift) & 1 != 0
    }
}

/// SPI clock polarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Clock idles low (CPOL=0)
    IdleLow,
    /// Clock idles high (CPOL=1)
    IdleHigh,
}

/// SPI clock phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Phase {
    /// Data captured on first clock transition (CPHA=0)
    CaptureOnFirstTransition,
    /// Data captured on second clock transition (CPHA=1)
    CaptureOnSecondTransition,
}

/// SPI mode (combined polarity and phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Mode 0: CPOL=0, CPHA=0
    Mode0,
    /// Mode 1: CPOL=0, CPHA=1
    Mode1,
    /// Mode 2: CPOL=1, CPHA=0
    Mode2,
    /// Mode 3: CPOL=1, CPHA=1
    Mode3,
}

impl From<Mode> for (Polarity, Phase) {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Mode0 => (Polarity::IdleLow, Phase::CaptureOnFirstTransition),
            Mode::Mode1 => (Polarity::IdleLow, Phase::CaptureOnSecondTransition),
            Mode::Mode2 => (Polarity::IdleHigh, Phase::CaptureOnFirstTransition),
            Mode::Mode3 => (Polarity::IdleHigh, Phase::CaptureOnSecondTransition),
        }
    }
}

/// Placeholder bus for drivers that never use SPI
///
/// Its error type is uninhabited, so a `Result` from a driver using it can
/// only ever fail on invalid input.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoSpi;

impl SpiBus for NoSpi {
    type Error = core::convert::Infallible;

    fn begin_transaction(&mut self, _config: &SpiConfig) -> Result<(), Self::Error> {
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        Ok(byte)
    }
}
