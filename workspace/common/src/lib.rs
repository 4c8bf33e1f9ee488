//! Common transport-layer types shared between the dashboard crates.
//! These structs mirror the price backend's request/response payloads
//! so the client can deserialize API responses without duplicating shapes.

mod display;
mod filter;
mod prices;

pub mod converters;

pub use display::{DisplayRow, PriceSummary};
pub use filter::{
    COMMODITIES, ChartType, DateRange, FilterSelection, FilterUpdate, LOCATIONS, WILDCARD,
};
pub use prices::{ErrorResponse, PredictionPoint, PredictionRequest, PricePoint};
