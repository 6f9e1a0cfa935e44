//! Body mass index calculation and WHO classification.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::error::{Error, Result};

/// WHO body mass index categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to 25.
    #[serde(rename = "Normal weight")]
    NormalWeight,
    /// BMI from 25 up to 30.
    Overweight,
    /// BMI of 30 or more.
    Obesity,
}

impl BmiCategory {
    /// Human-readable category name.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A computed BMI, rounded to one decimal place, and its category.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    /// Body mass index in kg/m².
    pub bmi: f64,
    /// WHO category of the unrounded value.
    pub category: BmiCategory,
}

/// Calculate the BMI for a weight in kilograms and a height in metres.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the height or weight is not a positive
/// finite number. Height is checked first.
pub fn calculate_bmi(weight_kg: f64, height_m: f64) -> Result<BmiResult> {
    ensure_positive("height", height_m)?;
    ensure_positive("weight", weight_kg)?;

    let bmi = weight_kg / (height_m * height_m);
    let category = classify_bmi(bmi);
    debug!(bmi, %category, "calculated BMI");

    Ok(BmiResult {
        bmi: (bmi * 10.0).round() / 10.0,
        category,
    })
}

/// Classify a BMI value into its WHO category.
#[must_use]
pub fn classify_bmi(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::NormalWeight
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obesity
    }
}

fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::invalid_input(field, "must be greater than zero"))
    }
}
