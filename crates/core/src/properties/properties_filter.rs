//! Listing filter/sort pipeline.
//!
//! Pure functions over already-loaded listings, so the same pipeline serves
//! any repository implementation.

use std::cmp::Ordering;

use rust_decimal::Decimal;

use super::properties_model::{Property, PropertyFilter, PropertySort, PropertyStatus};
use crate::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Filters, sorts and paginates `properties` according to `filter`.
pub fn apply_filter(properties: Vec<Property>, filter: &PropertyFilter) -> Vec<Property> {
    let needle = filter
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    let mut matched: Vec<Property> = properties
        .into_iter()
        .filter(|p| matches(p, filter, needle.as_deref()))
        .collect();

    sort_properties(&mut matched, filter.sort);

    let offset = filter.offset.unwrap_or(0);
    let limit = filter
        .limit
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .min(MAX_PAGE_SIZE);
    matched.into_iter().skip(offset).take(limit).collect()
}

fn matches(property: &Property, filter: &PropertyFilter, needle: Option<&str>) -> bool {
    if let Some(needle) = needle {
        let hit = [&property.title, &property.city, &property.location]
            .iter()
            .any(|field| field.to_lowercase().contains(needle));
        if !hit {
            return false;
        }
    }
    if filter.kind.is_some_and(|kind| kind != property.kind) {
        return false;
    }
    match filter.status {
        Some(status) if status != property.status => return false,
        // Unlisted rows only show up when asked for by status.
        None if property.status == PropertyStatus::Unlisted => return false,
        _ => {}
    }
    if let Some(city) = filter.city.as_deref().map(str::trim).filter(|c| !c.is_empty()) {
        if !property.city.trim().eq_ignore_ascii_case(city) {
            return false;
        }
    }
    if filter.min_price.is_some_and(|min| property.price < min) {
        return false;
    }
    if filter.max_price.is_some_and(|max| property.price > max) {
        return false;
    }
    if let Some(min_yield) = filter.min_yield {
        match property.rental_yield_percent() {
            Some(y) if y >= min_yield => {}
            _ => return false,
        }
    }
    if filter.equity_only && property.equity.is_none() {
        return false;
    }
    if !same_ref(filter.builder_id.as_deref(), property.builder_id.as_deref()) {
        return false;
    }
    if !same_ref(filter.agent_id.as_deref(), property.agent_id.as_deref()) {
        return false;
    }
    true
}

fn same_ref(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(id) => actual == Some(id),
    }
}

/// Stable sort; listings without the sort metric go last.
fn sort_properties(properties: &mut [Property], sort: PropertySort) {
    match sort {
        PropertySort::Newest => properties.sort_by(|a, b| b.created_at.cmp(&a.created_at)),
        PropertySort::PriceAsc => properties.sort_by(|a, b| a.price.cmp(&b.price)),
        PropertySort::PriceDesc => properties.sort_by(|a, b| b.price.cmp(&a.price)),
        PropertySort::YieldDesc => {
            properties.sort_by(|a, b| desc_missing_last(a.rental_yield_percent(), b.rental_yield_percent()))
        }
        PropertySort::AppreciationDesc => {
            properties.sort_by(|a, b| desc_missing_last(a.appreciation_rate(), b.appreciation_rate()))
        }
        PropertySort::TitleAsc => {
            properties.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()))
        }
    }
}

fn desc_missing_last(a: Option<Decimal>, b: Option<Decimal>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
