use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lower bound of the projection-horizon slider (years)
pub const MIN_PROJECTION_YEARS: u32 = 1;

/// Upper bound of the projection-horizon slider (years)
pub const MAX_PROJECTION_YEARS: u32 = 10;

/// Projection horizon preselected when the dashboard opens
pub const DEFAULT_PROJECTION_YEARS: u32 = 5;

/// Lower bound of the growth-rate slider (percent per year)
pub const MIN_GROWTH_RATE_PERCENT: Decimal = dec!(1);

/// Upper bound of the growth-rate slider (percent per year)
pub const MAX_GROWTH_RATE_PERCENT: Decimal = dec!(15);

/// Growth-rate slider increment (percent per year)
pub const GROWTH_RATE_STEP_PERCENT: Decimal = dec!(0.5);

/// Growth rate preselected when the dashboard opens
pub const DEFAULT_GROWTH_RATE_PERCENT: Decimal = dec!(8);

/// Number of entries shown in the recent-transactions card
pub const RECENT_TRANSACTIONS_LIMIT: usize = 5;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;
