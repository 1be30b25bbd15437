//! Blocking delays

/// Busy-wait delay with microsecond resolution
pub trait DelayUs {
    /// Block for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

impl<T: DelayUs + ?Sized> DelayUs for &mut T {
    fn delay_us(&mut self, us: u32) {
        T::delay_us(self, us)
    }
}

/// Delay that returns immediately
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct NoDelay;

impl DelayUs for NoDelay {
    fn delay_us(&mut self, _us: u32) {}
}
