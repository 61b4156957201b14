mod price_option;
mod service;

pub use price_option::{PriceOptionType, ServicePriceOption};
pub use service::{Service, ServiceType};
