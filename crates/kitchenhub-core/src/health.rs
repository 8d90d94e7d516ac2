//! # BMI Calculation and Category Bands
//!
//! Pure functions, no state. BMI = weight(kg) / height(m)², rounded to one
//! decimal place. Bands follow the WHO adult classification.

use serde::{Deserialize, Serialize};

/// Compute Body Mass Index, rounded to one decimal place.
///
/// Returns `None` when either measurement is missing in spirit - zero,
/// negative, or non-finite - so a half-filled profile never shows a
/// nonsense figure.
pub fn calc_bmi(weight_kg: f64, height_cm: f64) -> Option<f64> {
    if !weight_kg.is_finite() || !height_cm.is_finite() || weight_kg <= 0.0 || height_cm <= 0.0 {
        return None;
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Some((bmi * 10.0).round() / 10.0)
}

/// WHO adult BMI bands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI in [18.5, 25).
    Normal,
    /// BMI in [25, 30).
    Overweight,
    /// BMI of 30 or above.
    Obesity,
}

impl BmiCategory {
    /// Classify a BMI value into its band.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::Normal
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obesity
        }
    }

    /// Human-readable band label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal",
            Self::Overweight => "Overweight",
            Self::Obesity => "Obesity",
        }
    }

    /// Display hint for renderers; carries no logic.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Underweight => "blue",
            Self::Normal => "green",
            Self::Overweight => "orange",
            Self::Obesity => "red",
        }
    }
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Classify an optional BMI value; `None` passes through.
pub fn bmi_category(bmi: Option<f64>) -> Option<BmiCategory> {
    bmi.map(BmiCategory::from_bmi)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calc_bmi_reference_value() {
        assert_eq!(calc_bmi(70.0, 175.0), Some(22.9));
    }

    #[test]
    fn calc_bmi_zero_weight_is_none() {
        assert_eq!(calc_bmi(0.0, 175.0), None);
    }

    #[test]
    fn calc_bmi_zero_height_is_none() {
        assert_eq!(calc_bmi(70.0, 0.0), None);
    }

    #[test]
    fn calc_bmi_rejects_non_finite() {
        assert_eq!(calc_bmi(f64::NAN, 175.0), None);
        assert_eq!(calc_bmi(70.0, f64::INFINITY), None);
    }

    #[test]
    fn calc_bmi_rounds_to_one_decimal() {
        // 80 / 1.8^2 = 24.691... -> 24.7
        assert_eq!(calc_bmi(80.0, 180.0), Some(24.7));
    }

    #[test]
    fn category_band_boundaries() {
        assert_eq!(BmiCategory::from_bmi(18.4), BmiCategory::Underweight);
        assert_eq!(BmiCategory::from_bmi(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(22.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(24.9), BmiCategory::Normal);
        assert_eq!(BmiCategory::from_bmi(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(29.9), BmiCategory::Overweight);
        assert_eq!(BmiCategory::from_bmi(30.0), BmiCategory::Obesity);
        assert_eq!(BmiCategory::from_bmi(31.0), BmiCategory::Obesity);
    }

    #[test]
    fn bmi_category_passes_none_through() {
        assert_eq!(bmi_category(None), None);
        assert_eq!(bmi_category(Some(22.9)), Some(BmiCategory::Normal));
    }

    #[test]
    fn labels_and_colors() {
        assert_eq!(BmiCategory::Normal.label(), "Normal");
        assert_eq!(BmiCategory::Obesity.label(), "Obesity");
        assert_eq!(BmiCategory::Underweight.color(), "blue");
        assert_eq!(BmiCategory::Overweight.color(), "orange");
    }
}
