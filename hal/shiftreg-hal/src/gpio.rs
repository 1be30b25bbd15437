//! GPIO pin abstractions
//!
//! Output pins used for the data, clock and latch lines of a shift register.

/// Digital output pin
///
/// Pin I/O is treated as reliable and synchronous, so none of these
/// operations report errors.
pub trait OutputPin {
    /// Configure the pin as a push-pull output
    ///
    /// Called once while the driver is being constructed. Pins that are
    /// already outputs by type can keep the default no-op.
    fn set_as_output(&mut self) {}

    /// Set the pin high (logic 1)
    fn set_high(&mut self);

    /// Set the pin low (logic 0)
    fn set_low(&mut self);

    /// Set the pin to a specific state
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Check if the pin is currently set high
    fn is_set_high(&self) -> bool;

    /// Check if the pin is currently set low
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

impl<T: OutputPin + ?Sized> OutputPin for &mut T {
    fn set_as_output(&mut self) {
        T::set_as_output(self)
    }

    fn set_high(&mut self) {
        T::set_high(self)
    }

    fn set_low(&mut self) {
        T::set_low(self)
    }

    fn is_set_high(&self) -> bool {
        T::is_set_high(self)
    }
}

/// An output pin with no physical line behind it
///
/// Stands in for the pin type of a driver that never touches hardware,
/// e.g. a virtual shift register. Only the logical state is kept.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoPin {
    high: bool,
}

impl NoPin {
    /// Create a new pin, initially low
    pub const fn new() -> Self {
        Self { high: false }
    }
}

impl OutputPin for NoPin {
    fn set_high(&mut self) {
        self.high = true;
    }

    fn set_low(&mut self) {
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}
