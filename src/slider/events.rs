// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Slider notifications.
//!
//! A minimal publish/subscribe table that lets optional features react to
//! position changes without the navigation code knowing about them.
//! Listeners receive the event payload and mutable access to the host they
//! decorate. Emission stops at the first listener that fails and the error is
//! returned to whoever triggered the change.

use std::{collections::HashMap, fmt, hash::Hash};

use crate::slider::error::SliderError;

/// Events published by a slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum SliderEvent {
    /// The slide container was translated to a new position.
    Translate,
}

/// Payload of [`SliderEvent::Translate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SlideChange {
    pub(crate) index: usize,
    pub(crate) padded_count: usize,
    /// Ordinal of the real slide at `index`, `None` on a clone.
    pub(crate) real_ordinal: Option<usize>,
    pub(crate) animated: bool,
}

pub(crate) type Listener<P, H> = Box<dyn FnMut(&P, &mut H) -> Result<(), SliderError>>;

pub(crate) struct EventBus<K, P, H> {
    table: HashMap<K, Vec<Listener<P, H>>>,
}

impl<K, P, H> EventBus<K, P, H>
where
    K: Eq + Hash,
{
    pub(crate) fn new() -> Self {
        Self {
            table: HashMap::new(),
        }
    }

    /// Appends `listener` to the listeners of `event`.
    pub(crate) fn subscribe<F>(&mut self, event: K, listener: F)
    where
        F: FnMut(&P, &mut H) -> Result<(), SliderError> + 'static,
    {
        self.table.entry(event).or_default().push(Box::new(listener));
    }

    /// Invokes every listener of `event` in subscription order.
    pub(crate) fn emit(&mut self, event: &K, payload: &P, host: &mut H) -> Result<(), SliderError> {
        if let Some(listeners) = self.table.get_mut(event) {
            for listener in listeners.iter_mut() {
                listener(payload, host)?;
            }
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn listener_count(&self, event: &K) -> usize {
        self.table.get(event).map_or(0, Vec::len)
    }
}

impl<K, P, H> fmt::Debug for EventBus<K, P, H>
where
    K: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (event, listeners) in &self.table {
            map.entry(event, &listeners.len());
        }
        map.finish()
    }
}
