//! Monotonic time sources

/// Millisecond clock used for all control-loop timing gates
///
/// Must be monotonic: readings never decrease while the device runs.
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin (usually boot)
    fn now_ms(&self) -> u64;
}

/// Microsecond clock used for bounded busy-waits in sensor protocols
pub trait MicrosClock {
    /// Microseconds since an arbitrary fixed origin
    fn now_us(&self) -> u64;

    /// Microseconds elapsed since `start_us`
    fn elapsed_us(&self, start_us: u64) -> u64 {
        self.now_us().saturating_sub(start_us)
    }
}

impl<T: Clock + ?Sized> Clock for &T {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

impl<T: MicrosClock + ?Sized> MicrosClock for &T {
    fn now_us(&self) -> u64 {
        (**self).now_us()
    }
}
