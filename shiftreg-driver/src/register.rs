//! Shift register driver
//!
//! # Wire sequences
//!
//! Bit-bang, per bit in the configured order (MSB first by default):
//!
//! ```text
//! DATA  ──< bit >──────────
//! CLOCK ________┌──┐_______   rising edge shifts the bit in
//! ```
//!
//! SPI: `begin_transaction(8 MHz, MSB first, mode 0)`, one byte transfer,
//! latch pulse, `end_transaction`.
//!
//! In every mode a configured latch pin is pulsed low then high after the
//! byte has been shifted, moving it to the register's output stage.

use shiftreg_hal::spi::SPI_8MHZ;
use shiftreg_hal::{BitOrder, DelayUs, Mode, NoDelay, NoPin, NoSpi, OutputPin, SpiBus, SpiConfig};

use crate::config::ShiftRegisterConfig;
use crate::error::Error;

/// Transaction settings for SPI mode
pub const SPI_SETTINGS: SpiConfig = SpiConfig::new(SPI_8MHZ, BitOrder::MsbFirst, Mode::Mode0);

/// How bytes reach the register
///
/// The latch pin is held by the driver next to the transport since every
/// transport may use one.
pub enum Transport<P, S> {
    /// No hardware; only the cached byte changes
    Virtual,
    /// Software shift-out on two output pins
    BitBang {
        /// Serial data line
        data: P,
        /// Shift clock line
        clock: P,
    },
    /// Hardware SPI peripheral (MOSI/SCK owned by the peripheral)
    Spi {
        /// The bus
        bus: S,
    },
}

/// Transport without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportKind {
    /// No hardware
    Virtual,
    /// Software shift-out
    BitBang,
    /// Hardware SPI
    Spi,
}

impl<P, S> Transport<P, S> {
    /// Kind of this transport
    pub fn kind(&self) -> TransportKind {
        match self {
            Transport::Virtual => TransportKind::Virtual,
            Transport::BitBang { .. } => TransportKind::BitBang,
            Transport::Spi { .. } => TransportKind::Spi,
        }
    }
}

/// Serial-in, parallel-out shift register
///
/// The register is write-only, so the last byte sent is cached and every
/// read is served from the cache.
pub struct ShiftRegister<P, S, D> {
    transport: Transport<P, S>,
    latch: Option<P>,
    delay: D,
    config: ShiftRegisterConfig,
    /// Last byte sent (or, in virtual mode, that would have been sent)
    last_value: u8,
}

impl ShiftRegister<NoPin, NoSpi, NoDelay> {
    /// Create a register with no hardware behind it
    pub fn new_virtual() -> Self {
        Self {
            transport: Transport::Virtual,
            latch: None,
            delay: NoDelay,
            config: ShiftRegisterConfig::default(),
            last_value: 0,
        }
    }

    /// Create a virtual register with a custom configuration
    ///
    /// The initial value only seeds the cache.
    pub fn new_virtual_with(
        config: ShiftRegisterConfig,
    ) -> Result<Self, Error<core::convert::Infallible>> {
        Self::from_parts(Transport::Virtual, None, NoDelay, config)
    }
}

impl<P: OutputPin, D: DelayUs> ShiftRegister<P, NoSpi, D> {
    /// Bit-banged register without a latch line (e.g. 74HC164)
    ///
    /// Outputs follow the shifted bits directly. The register is cleared
    /// to 0 on construction.
    pub fn new_bitbang(
        data: P,
        clock: P,
        delay: D,
    ) -> Result<Self, Error<core::convert::Infallible>> {
        Self::from_parts(
            Transport::BitBang { data, clock },
            None,
            delay,
            ShiftRegisterConfig::default(),
        )
    }

    /// Bit-banged register with a latch line (e.g. 74HC595)
    ///
    /// `initial` is sent and latched during construction.
    pub fn new_bitbang_latched(
        data: P,
        clock: P,
        latch: P,
        delay: D,
        initial: u8,
    ) -> Result<Self, Error<core::convert::Infallible>> {
        Self::from_parts(
            Transport::BitBang { data, clock },
            Some(latch),
            delay,
            ShiftRegisterConfig::with_initial_value(initial),
        )
    }
}

impl<P: OutputPin, S: SpiBus, D: DelayUs> ShiftRegister<P, S, D> {
    /// Register on a hardware SPI bus, latched by `latch`
    ///
    /// Initializes the bus, then sends and latches `initial`.
    pub fn new_spi(bus: S, latch: P, delay: D, initial: u8) -> Result<Self, Error<S::Error>> {
        Self::from_parts(
            Transport::Spi { bus },
            Some(latch),
            delay,
            ShiftRegisterConfig::with_initial_value(initial),
        )
    }

    /// Create a register from its parts
    ///
    /// Drives every pin the transport uses as an output, initializes the
    /// SPI bus if there is one and, unless the transport is virtual, sends
    /// `config.initial_value` through the normal write path.
    pub fn from_parts(
        transport: Transport<P, S>,
        latch: Option<P>,
        delay: D,
        config: ShiftRegisterConfig,
    ) -> Result<Self, Error<S::Error>> {
        if !config.is_valid() {
            return Err(Error::InvalidWidth(config.width));
        }

        let mut register = Self {
            transport,
            latch,
            delay,
            config,
            last_value: config.initial_value,
        };

        match &mut register.transport {
            Transport::Virtual => {}
            Transport::BitBang { data, clock } => {
                data.set_as_output();
                clock.set_as_output();
            }
            Transport::Spi { bus } => bus.begin().map_err(Error::Spi)?,
        }
        if let Some(latch) = register.latch.as_mut() {
            latch.set_as_output();
        }

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "shift register: {} mode, width {}, latch {}, initial {=u8:#x}",
            register.kind(),
            config.width,
            register.latch.is_some(),
            config.initial_value
        );

        if register.kind() != TransportKind::Virtual {
            register.write(config.initial_value)?;
        }

        Ok(register)
    }

    /// Send a byte to the register
    ///
    /// The cache is updated before transmission, so it holds `value` even
    /// if the SPI transfer fails. A failed transfer is not latched.
    pub fn write(&mut self, value: u8) -> Result<(), Error<S::Error>> {
        self.last_value = value;

        #[cfg(feature = "defmt")]
        defmt::trace!("shift register write {=u8:#x}", value);

        match &mut self.transport {
            Transport::Virtual => pulse_latch(&mut self.latch),
            Transport::BitBang { data, clock } => {
                shift_out(data, clock, self.config.bit_order, value);
                pulse_latch(&mut self.latch);
            }
            Transport::Spi { bus } => {
                bus.begin_transaction(&SPI_SETTINGS).map_err(Error::Spi)?;
                let sent = bus.transfer(value).map(drop);
                if sent.is_ok() {
                    pulse_latch(&mut self.latch);
                }
                // Release the bus even when the transfer failed
                let ended = bus.end_transaction();
                if let Err(e) = sent.and(ended) {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("shift register SPI transfer failed");
                    return Err(Error::Spi(e));
                }
            }
        }

        Ok(())
    }

    /// Last byte sent to the register
    pub fn read(&self) -> u8 {
        self.last_value
    }

    /// Set or clear one output
    ///
    /// The whole byte is retransmitted; these registers have no way to
    /// update a single output.
    pub fn digital_write(&mut self, bit: u8, high: bool) -> Result<(), Error<S::Error>> {
        let mask = self.mask(bit)?;
        let value = if high {
            self.last_value | mask
        } else {
            self.last_value & !mask
        };
        self.write(value)
    }

    /// Cached state of one output
    pub fn digital_read(&self, bit: u8) -> Result<bool, Error<S::Error>> {
        Ok(self.last_value & self.mask(bit)? != 0)
    }

    /// Pulse one output to the opposite state and back
    ///
    /// `delay_us` is the pulse width, `None` for the configured default.
    /// With a width of zero the two writes go out back to back.
    pub fn digital_toggle(&mut self, bit: u8, delay_us: Option<u32>) -> Result<(), Error<S::Error>> {
        let state = self.digital_read(bit)?;
        let delay_us = delay_us.unwrap_or(self.config.toggle_delay_us);

        self.digital_write(bit, !state)?;
        if delay_us > 0 {
            self.delay.delay_us(delay_us);
        }
        self.digital_write(bit, state)
    }

    /// Drive every output low
    pub fn clear(&mut self) -> Result<(), Error<S::Error>> {
        self.write(0)
    }

    /// Drive every output high
    pub fn clear_high(&mut self) -> Result<(), Error<S::Error>> {
        self.write(self.config.all_ones())
    }

    /// Set the default pulse width for `digital_toggle`
    pub fn set_digital_toggle_delay(&mut self, delay_us: u32) {
        self.config.toggle_delay_us = delay_us;
    }

    /// Default pulse width for `digital_toggle`
    pub fn digital_toggle_delay(&self) -> u32 {
        self.config.toggle_delay_us
    }

    /// Number of addressable outputs
    pub fn width(&self) -> u8 {
        self.config.width
    }

    /// Transport this register was built with
    pub fn kind(&self) -> TransportKind {
        self.transport.kind()
    }

    /// Current configuration
    pub fn config(&self) -> &ShiftRegisterConfig {
        &self.config
    }

    /// Tear down the driver and hand back its hardware
    pub fn release(self) -> (Transport<P, S>, Option<P>, D) {
        (self.transport, self.latch, self.delay)
    }

    fn mask(&self, bit: u8) -> Result<u8, Error<S::Error>> {
        if bit >= self.config.width {
            return Err(Error::BitOutOfRange {
                bit,
                width: self.config.width,
            });
        }
        Ok(1 << bit)
    }
}

/// Clock one byte out on `data`/`clock`
fn shift_out<P: OutputPin>(data: &mut P, clock: &mut P, order: BitOrder, value: u8) {
    for i in 0..8 {
        data.set_state(order.bit(value, i));
        clock.set_high();
        clock.set_low();
    }
}

/// Commit shifted bits to the output stage
fn pulse_latch<P: OutputPin>(latch: &mut Option<P>) {
    if let Some(latch) = latch {
        latch.set_low();
        latch.set_high();
    }
}
