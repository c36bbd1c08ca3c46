pub mod configured;
pub mod traits;

pub use configured::ConfiguredScraper;
pub use traits::{PageHandle, PriceScraper};
