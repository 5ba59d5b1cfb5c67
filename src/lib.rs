//! Minimum-move search for the radioisotope shuffle puzzle: bring every generator and microchip
//! to the top floor of the facility, carrying at most two items per elevator trip, without ever
//! leaving a microchip on a floor with another element's generator unless its own generator
//! shields it.
//!
//! The data model is built from immutable value types ([`Item`], [`Floor`], [`Building`],
//! [`State`]); [`Search`] runs a level-ordered breadth-first traversal over the implicit state
//! graph and reports the minimum move count, or why none exists.

pub use self::{building::*, facility::*, floor::*, graph::*, item::*, search::*, state::*};

mod building;
mod facility;
mod floor;
mod graph;
mod item;
mod search;
mod state;
