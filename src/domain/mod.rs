pub mod property;
pub mod timestamp;

pub use property::{ApiStatus, NewProperty, PricePoint, PriceUpdate, Property, TrackedProperty};
