//! backline-common - pure domain logic for the studio site
//!
//! Catalog store, tag filtering, lazy-load scheduling and embed sizing for
//! the portfolio carousel. No I/O and no DOM: everything in here runs the
//! same natively and in the browser, which is where the tests live.

pub mod catalog;
pub mod embed;
pub mod filter;
pub mod schedule;

pub use catalog::{ArtistLinks, Catalog, EntryRecord, Platform, ProjectEntry};
pub use embed::{player_scale, player_src, EmbedOptions, PLAYER_HEIGHT, PLAYER_WIDTH};
pub use filter::{visible_entries, FilterGroup, FilterSelection, GroupSelection};
pub use schedule::{loop_enabled, LoadScheduler, PriorityLoad, DESKTOP_MIN_WIDTH};
