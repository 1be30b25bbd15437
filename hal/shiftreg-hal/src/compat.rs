//! `embedded-hal` 1.0 adapters
//!
//! Wrap a board's `embedded-hal` pins, SPI bus and delay so they can be
//! handed to the shift register driver.
//!
//! ```ignore
//! let data = EhOutputPin::new(Output::new(p.PIN_2, Level::Low));
//! let clock = EhOutputPin::new(Output::new(p.PIN_3, Level::Low));
//! let latch = EhOutputPin::new(Output::new(p.PIN_4, Level::Low));
//! let sr = ShiftRegister::new_bitbang_latched(data, clock, latch, EhDelay(Delay), 0)?;
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin as EhPin;
use embedded_hal::spi::SpiBus as EhBus;

use crate::delay::DelayUs;
use crate::gpio::OutputPin;
use crate::spi::{SpiBus, SpiConfig};

/// Output pin backed by an `embedded-hal` digital output
///
/// The logical level is cached on every write, so reading it back never
/// touches the hardware. Pin errors are dropped: the driver treats pin I/O
/// as infallible.
pub struct EhOutputPin<P> {
    pin: P,
    high: bool,
}

impl<P: EhPin> EhOutputPin<P> {
    /// Wrap a pin whose current level is low
    pub fn new(pin: P) -> Self {
        Self { pin, high: false }
    }

    /// Give the wrapped pin back
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: EhPin> OutputPin for EhOutputPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
        self.high = true;
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// SPI bus backed by an `embedded-hal` bus
///
/// Clock rate and mode of an `embedded-hal` bus are fixed when the board
/// HAL creates it, so `begin_transaction` only records the requested
/// settings for the caller to check against the bus configuration.
pub struct EhSpiBus<B> {
    bus: B,
    requested: Option<SpiConfig>,
}

impl<B: EhBus<u8>> EhSpiBus<B> {
    /// Wrap an already configured bus
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            requested: None,
        }
    }

    /// Settings passed to the most recent `begin_transaction`
    pub fn requested_config(&self) -> Option<SpiConfig> {
        self.requested
    }

    /// Give the wrapped bus back
    pub fn into_inner(self) -> B {
        self.bus
    }
}

impl<B: EhBus<u8>> SpiBus for EhSpiBus<B> {
    type Error = B::Error;

    fn begin_transaction(&mut self, config: &SpiConfig) -> Result<(), Self::Error> {
        self.requested = Some(*config);
        Ok(())
    }

    fn transfer(&mut self, byte: u8) -> Result<u8, Self::Error> {
        let mut buf = [byte];
        self.bus.transfer_in_place(&mut buf)?;
        Ok(buf[0])
    }

    fn end_transaction(&mut self) -> Result<(), Self::Error> {
        self.bus.flush()
    }
}

/// Delay backed by an `embedded-hal` delay provider
pub struct EhDelay<D>(pub D);

impl<D: DelayNs> DelayUs for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }
}
