// Copyright 2025 the Corkboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Escape-key guard.

/// Keys the guard distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// Any other key.
    Other,
}

/// Reports Escape presses while armed and not locked.
///
/// The host arms it while there is something to dismiss and locks it while
/// an animation must not be interrupted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EscapeGuard {
    active: bool,
    locked: bool,
}

impl EscapeGuard {
    /// Creates a disarmed, unlocked guard.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            active: false,
            locked: false,
        }
    }

    /// Arms or disarms the guard.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    /// Locks or unlocks the guard.
    pub fn set_locked(&mut self, locked: bool) {
        self.locked = locked;
    }

    /// Returns `true` while locked.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.locked
    }

    /// Handles a key-down. Returns `true` if it should dismiss.
    pub fn key_down(&self, key: Key) -> bool {
        key == Key::Escape && self.active && !self.locked
    }
}
