//! Properties module - listings, equity terms and the filter/sort pipeline.

mod properties_filter;
mod properties_model;
mod properties_service;
mod properties_traits;

pub use properties_filter::apply_filter;
pub use properties_model::{
    EquityTerms, NewProperty, Property, PropertyFilter, PropertyKind, PropertySort,
    PropertyStatus, PropertyUpdate,
};
pub use properties_service::PropertyService;
pub use properties_traits::{PropertyRepositoryTrait, PropertyServiceTrait};
