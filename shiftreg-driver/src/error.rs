//! Driver errors

/// Shift register driver errors
///
/// `E` is the error type of the SPI bus in use. Drivers built on
/// [`NoSpi`](shiftreg_hal::NoSpi) get an uninhabited `E`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Bit index is not below the register width
    BitOutOfRange {
        /// Requested bit
        bit: u8,
        /// Register width in bits
        width: u8,
    },
    /// Register width outside 1..=8
    InvalidWidth(u8),
    /// SPI peripheral reported a failure
    Spi(E),
}

impl<E: core::fmt::Debug> core::fmt::Display for Error<E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::BitOutOfRange { bit, width } => {
                write!(f, "bit {} out of range for {}-bit register", bit, width)
            }
            Error::InvalidWidth(width) => write!(f, "invalid register width {}", width),
            Error::Spi(e) => write!(f, "SPI transfer failed: {:?}", e),
        }
    }
}
