use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::recurrence::{Cadence, Recurrence};
use crate::{
    date::{month_key, to_iso_date},
    domain::{ForecastEvent, Horizon},
    pay::{compute_net_pay, PaycheckConfig},
};

pub const PAYCHECK_NAME: &str = "Paycheck";
pub const BONUS_NAME: &str = "Monthly bonus";

/// Paycheck recurrence anchored at the next pay date, if one is set.
pub fn paycheck_recurrence(config: &PaycheckConfig) -> Option<Recurrence> {
    let anchor = config.next_pay_date?;
    Some(Recurrence::new(
        anchor,
        Cadence::for_pay_frequency(config.pay_frequency),
    ))
}

/// Expands the paycheck schedule into income events inside the horizon.
///
/// Every occurrence carries the same net amount. Nothing is produced when
/// the pay date is unset or net pay cannot be derived.
pub fn generate_income_events(config: &PaycheckConfig, horizon: &Horizon) -> Vec<ForecastEvent> {
    let Some(recurrence) = paycheck_recurrence(config) else {
        tracing::debug!("no next pay date, skipping income events");
        return Vec::new();
    };
    let net = match compute_net_pay(config) {
        Ok(net) => net,
        Err(err) => {
            tracing::debug!(%err, "skipping income events");
            return Vec::new();
        }
    };

    let events: Vec<ForecastEvent> = recurrence
        .between(horizon.start, horizon.end)
        .map(|occurrence| {
            ForecastEvent::income(
                format!("income-{}-{}", to_iso_date(occurrence.date), occurrence.index),
                occurrence.date,
                PAYCHECK_NAME,
                net,
            )
        })
        .collect();
    tracing::debug!(count = events.len(), net, "generated income events");
    events
}

/// One bonus per month that has a paycheck, dated on that month's last paycheck.
pub fn generate_bonus_events(income: &[ForecastEvent], bonus: Option<f64>) -> Vec<ForecastEvent> {
    let Some(amount) = bonus.filter(|value| value.is_finite() && *value > 0.0) else {
        return Vec::new();
    };

    let mut latest_by_month: BTreeMap<String, NaiveDate> = BTreeMap::new();
    for event in income.iter().filter(|event| event.is_income()) {
        latest_by_month
            .entry(month_key(event.date))
            .and_modify(|latest| *latest = (*latest).max(event.date))
            .or_insert(event.date);
    }

    latest_by_month
        .into_iter()
        .map(|(month, date)| {
            ForecastEvent::income(format!("bonus-{month}"), date, BONUS_NAME, amount)
        })
        .collect()
}
