use super::projection_model::{ProjectionInput, ProjectionResult};
use crate::constants::ANNUAL_RETURN_RATE;

/// Projects retirement savings under a constant annual return.
///
/// Existing savings compound as a lump sum and the yearly contribution grows
/// as an ordinary annuity, `P * ((1 + r)^n - 1) / r`. A horizon of zero or
/// less is computed as-is: a negative `n` discounts backward.
///
/// The annuity term divides by the return rate, which must stay non-zero.
pub fn calculate_projection(input: &ProjectionInput) -> ProjectionResult {
    let rate = ANNUAL_RETURN_RATE;
    let years_to_retirement = input.years_to_retirement();
    let growth_factor = (1.0 + rate).powi(years_to_retirement);

    let future_value_of_current = input.current_savings * growth_factor;
    let annual_contribution = input.annual_contribution();
    let future_value_of_contributions = annual_contribution * ((growth_factor - 1.0) / rate);

    let total_future_value = future_value_of_current + future_value_of_contributions;
    let total_contributions = annual_contribution * f64::from(years_to_retirement);
    let investment_growth = total_future_value - (input.current_savings + total_contributions);

    ProjectionResult {
        current_age: input.current_age,
        retirement_age: input.retirement_age,
        years_to_retirement,
        annual_contribution,
        future_value_of_current,
        future_value_of_contributions,
        total_future_value,
        total_contributions,
        investment_growth,
        annual_return_rate: rate,
    }
}
