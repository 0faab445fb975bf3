//! Closed-form results of the perfect-foresight CRRA model
//!
//! Every function here is a direct algebraic evaluation. Nothing is validated:
//! a zero discount factor or an interest factor equal to the income growth
//! factor yields `inf` or `NaN`, which callers see unchanged.

use serde::{Deserialize, Serialize};

use crate::model::ModelParams;

/// Absolute patience factor thorn = (R * beta)^(1/rho)
#[must_use]
pub fn thorn(interest_factor: f64, discount_factor: f64, risk_aversion: f64) -> f64 {
    (interest_factor * discount_factor).powf(1.0 / risk_aversion)
}

/// Return patience factor thorn / R
#[must_use]
pub fn thorn_ratio(thorn: f64, interest_factor: f64) -> f64 {
    thorn / interest_factor
}

/// Human wealth o = p / (1 - G/R), the present value of the income stream
#[must_use]
pub fn human_wealth(permanent_income: f64, income_growth: f64, interest_factor: f64) -> f64 {
    permanent_income / (1.0 - income_growth / interest_factor)
}

/// Exact consumption c = o * (R - thorn) / R
#[must_use]
pub fn consumption(human_wealth: f64, interest_factor: f64, thorn: f64) -> f64 {
    human_wealth * (interest_factor - thorn) / interest_factor
}

/// First-order approximate consumption c = (r - rho^-1 (r - v)) * o
#[must_use]
pub fn consumption_approx(
    human_wealth: f64,
    net_interest_rate: f64,
    time_preference: f64,
    risk_aversion: f64,
) -> f64 {
    let mpc = net_interest_rate - (net_interest_rate - time_preference) / risk_aversion;
    mpc * human_wealth
}

/// Savings s = r * a + p - c
#[must_use]
pub fn savings(
    net_interest_rate: f64,
    prior_assets: f64,
    permanent_income: f64,
    consumption: f64,
) -> f64 {
    net_interest_rate * prior_assets + permanent_income - consumption
}

/// Growth-adjusted impatience thorn_g = rho^-1 (r - v) - g
#[must_use]
pub fn growth_impatience(
    net_interest_rate: f64,
    time_preference: f64,
    net_income_growth: f64,
    risk_aversion: f64,
) -> f64 {
    (net_interest_rate - time_preference) / risk_aversion - net_income_growth
}

/// Consumption out of human wealth c = p * (1 - thorn_g / (r - g))
#[must_use]
pub fn human_wealth_consumption(
    permanent_income: f64,
    growth_impatience: f64,
    net_interest_rate: f64,
    net_income_growth: f64,
) -> f64 {
    permanent_income * (1.0 - growth_impatience / (net_interest_rate - net_income_growth))
}

/// Saving rate zeta = (thorn_g/(r - g) + rho^-1 (r - v) a) / (1 + r a)
#[must_use]
pub fn saving_rate(
    growth_impatience: f64,
    net_interest_rate: f64,
    time_preference: f64,
    net_income_growth: f64,
    risk_aversion: f64,
    prior_assets: f64,
) -> f64 {
    let human = growth_impatience / (net_interest_rate - net_income_growth);
    let financial = (net_interest_rate - time_preference) / risk_aversion * prior_assets;
    (human + financial) / (1.0 + net_interest_rate * prior_assets)
}

/// Response of the saving rate to the interest rate, rho^-1 v r^-2
#[must_use]
pub fn saving_rate_response(
    time_preference: f64,
    net_interest_rate: f64,
    risk_aversion: f64,
) -> f64 {
    time_preference / (risk_aversion * net_interest_rate.powi(2))
}

/// Every derived quantity at a single parameter point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointOutcome {
    /// Value of the plotted (primary) sweep parameter
    pub x: f64,
    /// Parameters in effect at this point
    pub params: ModelParams,
    pub thorn: f64,
    pub thorn_ratio: f64,
    pub human_wealth: f64,
    pub consumption: f64,
    pub consumption_approx: f64,
    pub savings: f64,
    pub savings_approx: f64,
    pub growth_impatience: f64,
    pub human_wealth_consumption: f64,
    pub saving_rate: f64,
    pub saving_rate_response: f64,
}

impl PointOutcome {
    /// Evaluate all formulas at `params`, tagging the result with sweep value `x`.
    #[must_use]
    pub fn evaluate(x: f64, params: &ModelParams) -> Self {
        let big_r = params.interest_factor;
        let rho = params.risk_aversion;
        let r = params.net_interest_rate();
        let v = params.time_preference();
        let g = params.net_income_growth();
        let p = params.permanent_income;
        let a = params.prior_assets;

        let thorn_value = thorn(big_r, params.discount_factor, rho);
        let o = human_wealth(p, params.income_growth, big_r);
        let c = consumption(o, big_r, thorn_value);
        let c_app = consumption_approx(o, r, v, rho);
        let thorn_g = growth_impatience(r, v, g, rho);

        Self {
            x,
            params: *params,
            thorn: thorn_value,
            thorn_ratio: thorn_ratio(thorn_value, big_r),
            human_wealth: o,
            consumption: c,
            consumption_approx: c_app,
            savings: savings(r, a, p, c),
            savings_approx: savings(r, a, p, c_app),
            growth_impatience: thorn_g,
            human_wealth_consumption: human_wealth_consumption(p, thorn_g, r, g),
            saving_rate: saving_rate(thorn_g, r, v, g, rho, a),
            saving_rate_response: saving_rate_response(v, r, rho),
        }
    }

    /// Exact minus approximate consumption
    #[must_use]
    pub fn consumption_gap(&self) -> f64 {
        self.consumption - self.consumption_approx
    }
}
