//! Display model of a successful forecast.

use std::fmt;

use chrono::NaiveDate;
use common::{PredictionResponse, TrendDirection};

use crate::error::ViewError;
use crate::format::{format_idr, format_long_date};

/// An amount together with its rupiah rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct Rupiah {
    pub amount: f64,
    pub formatted: String,
}

impl Rupiah {
    pub fn new(amount: f64) -> Self {
        Self {
            amount,
            formatted: format_idr(amount),
        }
    }
}

impl fmt::Display for Rupiah {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// A date together with its long-form rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayDate {
    pub date: NaiveDate,
    pub formatted: String,
}

impl DisplayDate {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            formatted: format_long_date(date),
        }
    }
}

impl fmt::Display for DisplayDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}

/// Everything the result panel shows, derived from one response.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultView {
    pub last_price: Rupiah,
    pub predicted_price: Rupiah,
    pub confidence_lower: Rupiah,
    pub confidence_upper: Rupiah,
    pub trend_direction: TrendDirection,
    pub is_up_trend: bool,
    /// Signed percentage as sent by the service
    pub trend_percentage: f64,
    /// Absolute percentage with two decimals, e.g. `4.44`
    pub trend_magnitude: String,
    pub target_date: DisplayDate,
    pub last_data_date: DisplayDate,
    pub prediction_horizon: u32,
    pub has_chart: bool,
}

impl ResultView {
    pub fn trend_arrow(&self) -> &'static str {
        if self.is_up_trend { "↑" } else { "↓" }
    }

    pub fn trend_label(&self) -> &'static str {
        if self.is_up_trend { "Tren Naik" } else { "Tren Turun" }
    }

    /// Signed change for the statistics card, e.g. `↑ 4.44%`.
    pub fn change_label(&self) -> String {
        format!("{} {}%", self.trend_arrow(), self.trend_magnitude)
    }

    /// The narrative sentence describing the predicted move.
    pub fn headline(&self) -> String {
        format!(
            "Berdasarkan model Temporal Fusion Transformer, harga saham BBRI diprediksi akan {} sebesar {}% dalam {} hari ke depan (dari {} menjadi {}).",
            self.trend_direction.label(),
            self.trend_magnitude,
            self.prediction_horizon,
            self.last_price,
            self.predicted_price,
        )
    }

    /// The narrative sentence describing the confidence band.
    pub fn band_summary(&self) -> String {
        format!(
            "Harga aktual kemungkinan besar akan berada di antara {} dan {}.",
            self.confidence_lower, self.confidence_upper,
        )
    }
}

/// Derives the display model of a response.
///
/// Fails instead of producing a partial view when any required field is
/// absent or not a finite number. The confidence band is taken as sent; it is
/// not checked against the predicted price.
pub fn derive_view(response: &PredictionResponse) -> Result<ResultView, ViewError> {
    if !response.success {
        return Err(ViewError::MalformedResponse("success"));
    }

    let analysis = response
        .analysis
        .as_ref()
        .ok_or(ViewError::MalformedResponse("analysis"))?;
    let last_price = finite(analysis.last_price, "analysis.last_price")?;
    let predicted_price = finite(analysis.predicted_price, "analysis.predicted_price")?;
    let trend_percentage = finite(analysis.trend_percentage, "analysis.trend_percentage")?;
    let trend_direction = analysis
        .trend_direction
        .ok_or(ViewError::MalformedResponse("analysis.trend_direction"))?;

    let range = analysis
        .confidence_range
        .as_ref()
        .ok_or(ViewError::MalformedResponse("analysis.confidence_range"))?;
    let lower = finite(range.lower, "analysis.confidence_range.lower")?;
    let upper = finite(range.upper, "analysis.confidence_range.upper")?;

    let target_date = response
        .target_date
        .ok_or(ViewError::MalformedResponse("target_date"))?;
    let last_data_date = response
        .last_data_date
        .ok_or(ViewError::MalformedResponse("last_data_date"))?;
    let prediction_horizon = response
        .prediction_horizon
        .ok_or(ViewError::MalformedResponse("prediction_horizon"))?;

    Ok(ResultView {
        last_price: Rupiah::new(last_price),
        predicted_price: Rupiah::new(predicted_price),
        confidence_lower: Rupiah::new(lower),
        confidence_upper: Rupiah::new(upper),
        trend_direction,
        is_up_trend: trend_direction == TrendDirection::Up,
        trend_percentage,
        trend_magnitude: two_decimals(trend_percentage.abs()),
        target_date: DisplayDate::new(target_date),
        last_data_date: DisplayDate::new(last_data_date),
        prediction_horizon,
        has_chart: response.chart_payload.is_some(),
    })
}

/// Two-decimal text with ties rounded away from zero (`0.625` -> `0.63`).
fn two_decimals(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}

fn finite(value: Option<f64>, field: &'static str) -> Result<f64, ViewError> {
    match value {
        Some(value) if value.is_finite() => Ok(value),
        _ => Err(ViewError::MalformedResponse(field)),
    }
}
