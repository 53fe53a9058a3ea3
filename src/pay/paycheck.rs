use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// How often paychecks arrive.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub enum PayFrequency {
    Weekly,
    #[default]
    Biweekly,
    Semimonthly,
    Monthly,
}

impl PayFrequency {
    pub fn label(&self) -> &'static str {
        match self {
            PayFrequency::Weekly => "Weekly",
            PayFrequency::Biweekly => "Every two weeks",
            PayFrequency::Semimonthly => "Twice a month",
            PayFrequency::Monthly => "Monthly",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DeductionKind {
    Fixed,
    PercentOfGross,
}

/// A named pretax, tax or posttax line on the paystub.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeductionLine {
    pub name: String,
    pub kind: DeductionKind,
    pub value: f64,
}

impl DeductionLine {
    pub fn fixed(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            kind: DeductionKind::Fixed,
            value,
        }
    }

    pub fn percent(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            kind: DeductionKind::PercentOfGross,
            value,
        }
    }

    /// Dollar contribution of this line against `gross`.
    ///
    /// Negative or non-finite values contribute nothing.
    pub fn contribution(&self, gross: f64) -> Option<f64> {
        if !self.value.is_finite() || self.value < 0.0 {
            return None;
        }
        match self.kind {
            DeductionKind::Fixed => Some(self.value),
            DeductionKind::PercentOfGross => Some(self.value / 100.0 * gross),
        }
    }
}

/// Where gross pay comes from when net pay is calculated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "source", rename_all = "camelCase")]
pub enum GrossInput {
    #[serde(rename_all = "camelCase")]
    Direct {
        #[serde(default)]
        gross_amount: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Hourly {
        #[serde(default)]
        hourly_rate: Option<f64>,
        #[serde(default)]
        hours_per_week: Option<f64>,
    },
}

impl Default for GrossInput {
    fn default() -> Self {
        GrossInput::Direct { gross_amount: None }
    }
}

/// Either a literal take-home amount or a paystub to derive it from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "mode", rename_all = "camelCase")]
pub enum PaycheckInput {
    #[serde(rename_all = "camelCase")]
    Net {
        #[serde(default)]
        net_amount: Option<f64>,
    },
    #[serde(rename_all = "camelCase")]
    Calculate {
        #[serde(default)]
        gross: GrossInput,
        #[serde(default)]
        pretax_deductions: Vec<DeductionLine>,
        #[serde(default)]
        taxes_withheld: Vec<DeductionLine>,
        #[serde(default)]
        posttax_deductions: Vec<DeductionLine>,
        #[serde(default)]
        loan_repayment: f64,
    },
}

impl Default for PaycheckInput {
    fn default() -> Self {
        PaycheckInput::Net { net_amount: None }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PaycheckConfig {
    #[serde(default)]
    pub input: PaycheckInput,
    #[serde(default)]
    pub pay_frequency: PayFrequency,
    #[serde(default)]
    pub next_pay_date: Option<NaiveDate>,
    #[serde(default)]
    pub monthly_bonus: Option<f64>,
}

impl PaycheckConfig {
    /// Convenience constructor for the literal take-home mode.
    pub fn net(amount: f64, frequency: PayFrequency, next_pay_date: NaiveDate) -> Self {
        Self {
            input: PaycheckInput::Net {
                net_amount: Some(amount),
            },
            pay_frequency: frequency,
            next_pay_date: Some(next_pay_date),
            monthly_bonus: None,
        }
    }

    pub fn with_bonus(mut self, bonus: f64) -> Self {
        self.monthly_bonus = Some(bonus);
        self
    }

    /// Bonus amount when it is a usable positive number.
    pub fn bonus_amount(&self) -> Option<f64> {
        self.monthly_bonus.filter(|value| value.is_finite() && *value > 0.0)
    }
}
