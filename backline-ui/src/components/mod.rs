//! Shared UI components

pub mod accordion;
pub mod icons;
pub mod modal;
pub mod portfolio;

pub use accordion::{Accordion, AccordionItem};
pub use icons::{
    ChevronDownIcon, ChevronLeftIcon, ChevronRightIcon, FacebookIcon, FilterIcon, GlobeIcon,
    InstagramIcon, LinkedinIcon, MenuIcon, PhoneIcon, PlayIcon, SpotifyIcon, VolumeIcon,
    VolumeMutedIcon, XIcon, YoutubeIcon,
};
pub use modal::Modal;
pub use portfolio::{
    display_tag, ActiveFilterPills, FilterBar, FilterOption, FilterOptionSet, FilterPanel,
    FilterTrigger, NoResults, PortfolioCarousel, PortfolioSlide,
};
