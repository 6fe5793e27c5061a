//! Platform-neutral core of the Base Bharat site: datasets, visibility
//! detection, delayed reveals, the pledge form, routing and ambient
//! animation. Time is always passed in as a `Duration` since start-up so the
//! same code runs natively and in the browser.

pub mod animation;
pub mod data;
pub mod domain;
pub mod form;
pub mod pages;
pub mod reveal;
pub mod router;
pub mod site;
pub mod starfield;
pub mod text;
pub mod visibility;

pub use domain::{Category, ChartEntry, Obstacle, Pledge};
pub use form::{PledgeError, PledgeField, PledgeForm};
pub use reveal::{RevealPhase, RevealSequencer};
pub use router::Route;
pub use site::{Site, SiteOptions, TickReport};
pub use visibility::{Extent, VisibilityConfig, VisibilityDetector};
