//! Pure compound-growth math behind the future-earnings card.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::ProjectionPoint;

/// Projects `principal` forward at `annual_rate_percent`, compounded once
/// per year.
///
/// Returns `years + 1` points: point 0 carries the principal itself and
/// every later point applies `value * (1 + rate / 100)` to its
/// predecessor. Values keep full precision; rounding is a display
/// concern. Deterministic and total for any finite rate, including the
/// negative rates the sliders never reach. A negative principal is a
/// caller bug, not something this function recovers from.
pub fn project_growth(
    principal: Decimal,
    annual_rate_percent: Decimal,
    years: u32,
) -> Vec<ProjectionPoint> {
    let growth = Decimal::ONE + annual_rate_percent / dec!(100);

    let mut points = Vec::with_capacity(years as usize + 1);
    let mut value = principal;
    points.push(ProjectionPoint { year: 0, value });

    for year in 1..=years {
        value *= growth;
        points.push(ProjectionPoint { year, value });
    }

    points
}

/// Return on investment as a percentage of principal.
///
/// An empty portfolio has no meaningful ROI; reporting 0 keeps division
/// artifacts out of the presentation layer. This is a contract of the
/// overview and projection cards, not a convenience.
pub fn roi_percent(total_return: Decimal, principal: Decimal) -> Decimal {
    if principal.is_zero() {
        Decimal::ZERO
    } else {
        total_return / principal * dec!(100)
    }
}
