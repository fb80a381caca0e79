//! Return projection - ownership, rental income and multi-horizon forecasts
//! for fractional equity positions.

mod investment_quote;
mod projection_model;
mod return_projector;

pub use investment_quote::InvestmentQuote;
pub use projection_model::{HorizonProjection, ProjectionInput, ProjectionResult};
pub use return_projector::project;

#[cfg(test)]
mod return_projector_tests;
