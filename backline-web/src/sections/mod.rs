//! Page sections of the studio site.
//!
//! Only the portfolio section carries real state; the rest are thin
//! open/close/toggle collaborators around shared components.

pub mod contact;
pub mod gear;
pub mod hero;
pub mod nav;
pub mod portfolio;
pub mod services;

pub use contact::ContactSection;
pub use gear::GearSection;
pub use hero::HeroSection;
pub use nav::SiteNav;
pub use portfolio::PortfolioSection;
pub use services::ServicesSection;
