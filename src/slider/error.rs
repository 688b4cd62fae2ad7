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

use thiserror::Error;

use crate::model::selector::SelectorError;

#[derive(Debug, Error)]
pub(crate) enum SliderError {
    #[error("host element #{0} was not found")]
    HostNotFound(String),

    #[error("slide container of slider #{0} was not found")]
    WrapperNotFound(String),

    #[error(transparent)]
    Selector(#[from] SelectorError),

    #[error("element `{0}` does not identify a slide")]
    UnresolvedTarget(String),

    #[error("slide {ordinal} is out of range, the slider has {count} slides")]
    SlideOutOfRange { ordinal: usize, count: usize },
}
