use serde::{Deserialize, Serialize};

use super::{
    paycheck::{DeductionLine, GrossInput, PayFrequency, PaycheckConfig, PaycheckInput},
    PayError,
};

const WEEKS_PER_YEAR: f64 = 52.0;
const SEMIMONTHLY_PERIODS: f64 = 24.0;
const MONTHLY_PERIODS: f64 = 12.0;

/// Per-paycheck amounts derived from a [`PaycheckConfig`].
///
/// Fields hold `NaN` when the value could not be derived; use
/// [`NetPayBreakdown::net`] to get a checked take-home amount.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetPayBreakdown {
    pub gross_pay: f64,
    pub pretax_total: f64,
    pub taxes_total: f64,
    pub posttax_total: f64,
    pub loan_repayment_amount: f64,
    pub total_withheld_deducted: f64,
    pub net_pay: f64,
}

impl NetPayBreakdown {
    fn literal_net(net_pay: f64) -> Self {
        Self {
            gross_pay: 0.0,
            pretax_total: 0.0,
            taxes_total: 0.0,
            posttax_total: 0.0,
            loan_repayment_amount: 0.0,
            total_withheld_deducted: 0.0,
            net_pay,
        }
    }

    fn unavailable(gross_pay: f64) -> Self {
        Self {
            gross_pay,
            pretax_total: f64::NAN,
            taxes_total: f64::NAN,
            posttax_total: f64::NAN,
            loan_repayment_amount: f64::NAN,
            total_withheld_deducted: f64::NAN,
            net_pay: f64::NAN,
        }
    }

    /// Take-home pay, or [`PayError::Unavailable`] when it is not a finite number.
    pub fn net(&self) -> Result<f64, PayError> {
        if self.net_pay.is_finite() {
            Ok(self.net_pay)
        } else {
            Err(PayError::Unavailable)
        }
    }
}

/// Rounds to the nearest cent, halves rounding up.
pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0 + 0.5).floor() / 100.0
}

fn usable(value: Option<f64>, field: &'static str) -> Result<f64, PayError> {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => Ok(v),
        _ => Err(PayError::MissingInput(field)),
    }
}

/// Gross pay per period from an hourly rate and a weekly hour count.
pub fn compute_gross_pay_from_hourly(
    frequency: PayFrequency,
    hourly_rate: Option<f64>,
    hours_per_week: Option<f64>,
) -> Result<f64, PayError> {
    let rate = usable(hourly_rate, "hourly rate")?;
    let hours = usable(hours_per_week, "hours per week")?;
    let weekly = rate * hours;
    let per_period = match frequency {
        PayFrequency::Weekly => weekly,
        PayFrequency::Biweekly => weekly * 2.0,
        PayFrequency::Semimonthly => weekly * WEEKS_PER_YEAR / SEMIMONTHLY_PERIODS,
        PayFrequency::Monthly => weekly * WEEKS_PER_YEAR / MONTHLY_PERIODS,
    };
    Ok(round_to_cents(per_period))
}

fn gross_for(frequency: PayFrequency, gross: &GrossInput) -> f64 {
    match gross {
        GrossInput::Direct { gross_amount } => gross_amount
            .filter(|v| v.is_finite())
            .map(round_to_cents)
            .unwrap_or(f64::NAN),
        GrossInput::Hourly {
            hourly_rate,
            hours_per_week,
        } => compute_gross_pay_from_hourly(frequency, *hourly_rate, *hours_per_week)
            .unwrap_or(f64::NAN),
    }
}

fn sum_lines(lines: &[DeductionLine], gross: f64) -> f64 {
    lines
        .iter()
        .filter_map(|line| line.contribution(gross))
        .sum()
}

/// Derives the full per-paycheck breakdown.
///
/// In net mode only `net_pay` is populated. In calculate mode a missing or
/// non-positive gross turns every derived field into `NaN`.
pub fn compute_net_pay_breakdown(config: &PaycheckConfig) -> NetPayBreakdown {
    match &config.input {
        PaycheckInput::Net { net_amount } => {
            let net = net_amount
                .filter(|v| v.is_finite())
                .map(round_to_cents)
                .unwrap_or(f64::NAN);
            NetPayBreakdown::literal_net(net)
        }
        PaycheckInput::Calculate {
            gross,
            pretax_deductions,
            taxes_withheld,
            posttax_deductions,
            loan_repayment,
        } => {
            let gross = gross_for(config.pay_frequency, gross);
            if gross.is_nan() || gross <= 0.0 {
                tracing::debug!(gross, "gross pay unavailable, breakdown not computed");
                return NetPayBreakdown::unavailable(gross);
            }
            let pretax = sum_lines(pretax_deductions, gross);
            let taxes = sum_lines(taxes_withheld, gross);
            let posttax = sum_lines(posttax_deductions, gross);
            let loan = if loan_repayment.is_finite() {
                loan_repayment.max(0.0)
            } else {
                f64::NAN
            };
            let withheld = pretax + taxes + posttax + loan;
            NetPayBreakdown {
                gross_pay: gross,
                pretax_total: round_to_cents(pretax),
                taxes_total: round_to_cents(taxes),
                posttax_total: round_to_cents(posttax),
                loan_repayment_amount: round_to_cents(loan),
                total_withheld_deducted: round_to_cents(withheld),
                net_pay: round_to_cents(gross - withheld),
            }
        }
    }
}

/// Checked take-home pay for one paycheck.
pub fn compute_net_pay(config: &PaycheckConfig) -> Result<f64, PayError> {
    compute_net_pay_breakdown(config).net()
}
