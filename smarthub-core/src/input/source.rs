//! Navigation source composition

use smarthub_hal::{AnalogInput, InputPin};

use super::axis::{AxisInput, Joystick};
use super::button::DebouncedButton;
use super::edge::InterruptButton;
use super::events::{Events, NavigationEvent};

/// Anything the control loop can poll for navigation events
///
/// Tuples of sources are sources, so a unit with a potentiometer and a
/// select button passes `(axis, button)`.
pub trait NavigationSource {
    /// Poll once and append any events to `events`
    fn poll(&mut self, now_ms: u64, events: &mut Events);
}

fn push(events: &mut Events, event: NavigationEvent) {
    if event.is_none() {
        return;
    }
    if events.push(event).is_err() {
        warn!("Event queue full, dropping {:?}", event);
    }
}

/// No input fitted
impl NavigationSource for () {
    fn poll(&mut self, _now_ms: u64, _events: &mut Events) {}
}

impl<T: NavigationSource + ?Sized> NavigationSource for &mut T {
    fn poll(&mut self, now_ms: u64, events: &mut Events) {
        T::poll(self, now_ms, events)
    }
}

impl<P: InputPin> NavigationSource for DebouncedButton<P> {
    fn poll(&mut self, now_ms: u64, events: &mut Events) {
        push(events, self.poll_event(now_ms));
    }
}

impl<A: AnalogInput> NavigationSource for AxisInput<A> {
    fn poll(&mut self, now_ms: u64, events: &mut Events) {
        push(events, self.poll_event(now_ms));
    }
}

impl<X: AnalogInput, Y: AnalogInput> NavigationSource for Joystick<X, Y> {
    fn poll(&mut self, now_ms: u64, events: &mut Events) {
        push(events, self.poll_event(now_ms));
    }
}

impl<P: InputPin> NavigationSource for InterruptButton<'_, P> {
    fn poll(&mut self, now_ms: u64, events: &mut Events) {
        push(events, self.poll_event(now_ms));
    }
}

macro_rules! impl_tuple_source {
    ($($name:ident),+) => {
        impl<$($name: NavigationSource),+> NavigationSource for ($($name,)+) {
            #[allow(non_snake_case)]
            fn poll(&mut self, now_ms: u64, events: &mut Events) {
                let ($($name,)+) = self;
                $($name.poll(now_ms, events);)+
            }
        }
    };
}

impl_tuple_source!(A, B);
impl_tuple_source!(A, B, C);
impl_tuple_source!(A, B, C, D);
