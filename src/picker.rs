// Copyright (c) 2024 Harry [Majored] [hello@majored.pw]
// MIT License (https://github.com/Majored/rs-async-zip/blob/main/LICENSE)

//! The interactive element picker's selection lifecycle.
//!
//! Each picker is an owned value, so independent pickers never observe each other's state. The lifecycle is
//! `Idle -> Armed -> Locked -> Idle`, with [`Picker::cancel`] returning to `Idle` from anywhere.

use crate::error::{Result, ZipError};

/// The state of a [`Picker`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PickerState {
    #[default]
    Idle,
    /// Hovered elements are highlighted and a click picks one.
    Armed,
    /// An element was picked; its selector is waiting to be taken.
    Locked(String),
}

impl PickerState {
    fn name(&self) -> &'static str {
        match self {
            PickerState::Idle => "idle",
            PickerState::Armed => "armed",
            PickerState::Locked(_) => "locked",
        }
    }
}

/// An element picker which hands over the selector of the element the user clicked.
#[derive(Debug, Clone, Default)]
pub struct Picker {
    state: PickerState,
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// Returns whether hover and click events should currently be handled.
    pub fn is_armed(&self) -> bool {
        matches!(self.state, PickerState::Armed)
    }

    /// Starts picking. Arming an already armed picker has no effect.
    pub fn arm(&mut self) -> Result<()> {
        match self.state {
            PickerState::Idle => self.transition(PickerState::Armed),
            PickerState::Armed => Ok(()),
            PickerState::Locked(_) => Err(self.invalid("arm")),
        }
    }

    /// Records the picked element's selector.
    pub fn lock<S: Into<String>>(&mut self, selector: S) -> Result<()> {
        if !self.is_armed() {
            return Err(self.invalid("lock"));
        }

        let selector = selector.into();
        if selector.trim().is_empty() {
            return Err(ZipError::EmptySelector);
        }

        self.transition(PickerState::Locked(selector))
    }

    /// Takes the picked selector, returning the picker to idle.
    pub fn take(&mut self) -> Result<String> {
        match std::mem::take(&mut self.state) {
            PickerState::Locked(selector) => {
                tracing::trace!(%selector, "picker: locked -> idle");
                Ok(selector)
            }
            state => {
                self.state = state;
                Err(self.invalid("take"))
            }
        }
    }

    /// Abandons picking (eg. on Escape), discarding any picked selector.
    pub fn cancel(&mut self) {
        tracing::trace!(from = self.state.name(), "picker cancelled");
        self.state = PickerState::Idle;
    }

    fn transition(&mut self, next: PickerState) -> Result<()> {
        tracing::trace!(from = self.state.name(), to = next.name(), "picker transition");
        self.state = next;
        Ok(())
    }

    fn invalid(&self, action: &'static str) -> ZipError {
        ZipError::InvalidPickerTransition { from: self.state.name(), action }
    }
}
