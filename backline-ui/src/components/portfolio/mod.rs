//! Portfolio carousel components
//!
//! Pure views for the carousel section: slides, the two filter surfaces and
//! the empty state. All engine state (catalog, selections, scheduler) lives
//! with the caller; these components only project it and report clicks.

pub mod carousel;
pub mod filter_bar;
pub mod filter_panel;
pub mod no_results;
pub mod slide;

pub use carousel::PortfolioCarousel;
pub use filter_bar::{FilterBar, FilterOption, FilterOptionSet};
pub use filter_panel::{ActiveFilterPills, FilterPanel, FilterTrigger};
pub use no_results::NoResults;
pub use slide::{display_tag, PortfolioSlide};
