use std::{thread, time::Duration};

/// Blocks the current run for a while, e.g. to respect the
/// rate limits of an external service.
pub trait Pause {
    fn pause(&self, duration: Duration);
}

impl<P> Pause for &P
where
    P: Pause + ?Sized,
{
    fn pause(&self, duration: Duration) {
        (**self).pause(duration);
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleep;

impl Pause for ThreadSleep {
    fn pause(&self, duration: Duration) {
        if !duration.is_zero() {
            thread::sleep(duration);
        }
    }
}
