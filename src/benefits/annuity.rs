//! Pension payout with dearness relief growing after retirement

/// Total paid over `years` on a pension whose DR rises each year.
///
/// Each year pays `12 * (monthly + monthly * rate)`; the DR rate then rises
/// by `(1 + rate) * annual_growth_rate` points. This is a points-style
/// approximation of DR revisions, not compounding of the rate itself.
pub fn growing_payout(initial_monthly: f64, initial_dr_rate: f64, annual_growth_rate: f64, years: u32) -> f64 {
    if initial_monthly <= 0.0 {
        return 0.0;
    }

    let mut total = 0.0;
    let mut dr_rate = initial_dr_rate;

    for _year in 0..years {
        total += (initial_monthly + initial_monthly * dr_rate) * 12.0;
        dr_rate += (1.0 + dr_rate) * annual_growth_rate;
    }

    total
}
