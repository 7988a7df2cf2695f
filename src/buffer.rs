//! Shared backing store for strip views.
//!
//! The frame buffer and the transport live behind a single
//! `critical_section::Mutex`, so every view of the same store is serialized
//! on one boundary. Views only hold a reference plus their own offset and
//! length; a write through any view is visible through all others.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::frame::Frame;
use crate::transport::Transport;

pub(crate) struct Inner<T, const LEDS: usize> {
    pub(crate) frames: [Frame; LEDS],
    pub(crate) transport: T,
}

/// Backing store with room for `LEDS` frames.
///
/// Frames start zeroed; creating a [`Strip`](crate::Strip) stamps their
/// brightness bytes.
pub struct StripBuffer<T, const LEDS: usize> {
    inner: Mutex<RefCell<Inner<T, LEDS>>>,
}

impl<T: Transport, const LEDS: usize> StripBuffer<T, LEDS> {
    /// Create a new zeroed store driving `transport`.
    pub const fn new(transport: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Inner {
                frames: [[0; 4]; LEDS],
                transport,
            })),
        }
    }

    /// Capacity in LED frames
    pub const fn capacity(&self) -> usize {
        LEDS
    }

    /// Copy of the raw frames
    pub fn snapshot(&self) -> [Frame; LEDS] {
        self.with_frames(|frames| *frames)
    }

    /// Run `f` with exclusive access to the transport.
    pub fn with_transport<R>(&self, f: impl FnOnce(&mut T) -> R) -> R {
        self.with_inner(|inner| f(&mut inner.transport))
    }

    pub(crate) fn with_frames<R>(&self, f: impl FnOnce(&mut [Frame; LEDS]) -> R) -> R {
        self.with_inner(|inner| f(&mut inner.frames))
    }

    pub(crate) fn with_inner<R>(&self, f: impl FnOnce(&mut Inner<T, LEDS>) -> R) -> R {
        critical_section::with(|cs| {
            let mut inner = self.inner.borrow(cs).borrow_mut();
            f(&mut inner)
        })
    }
}
