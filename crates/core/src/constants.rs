/// Projection horizons, in years.
pub const PROJECTION_HORIZONS: [u32; 3] = [1, 3, 5];

/// Months per year used to annualise rental income.
pub const MONTHS_PER_YEAR: u32 = 12;

/// Decimal precision for display payloads
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Minimum accepted password length at registration.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Default page size for property listings when the caller sets no limit.
pub const DEFAULT_PAGE_SIZE: usize = 50;

/// Upper bound on the page size a caller can request.
pub const MAX_PAGE_SIZE: usize = 200;
