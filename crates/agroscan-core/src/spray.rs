//! Spray mission planning from field area.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Carrier water applied per hectare, in liters.
const WATER_L_PER_HA: f64 = 30.0;

#[derive(Debug, Error, PartialEq)]
pub enum SprayError {
    #[error("field area must be a positive number of hectares (got {0})")]
    InvalidArea(f64),
    #[error("application rate must be positive (got {0} l/ha)")]
    InvalidRate(f64),
    #[error("tank volume must be positive (got {0} l)")]
    InvalidTankVolume(f64),
}

/// Product, water, and tank logistics for spraying one field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SprayPlan {
    pub area_ha: f64,
    pub rate_l_per_ha: f64,
    pub tank_volume_l: f64,
    pub total_product_l: f64,
    pub water_l: f64,
    pub tank_fills: u32,
}

/// Compute spray logistics for a field.
///
/// `tank_fills` is rounded up; a partial last tank still requires a fill.
pub fn plan_spray(
    area_ha: f64,
    rate_l_per_ha: f64,
    tank_volume_l: f64,
) -> Result<SprayPlan, SprayError> {
    if !area_ha.is_finite() || area_ha <= 0.0 {
        return Err(SprayError::InvalidArea(area_ha));
    }
    if !rate_l_per_ha.is_finite() || rate_l_per_ha <= 0.0 {
        return Err(SprayError::InvalidRate(rate_l_per_ha));
    }
    if !tank_volume_l.is_finite() || tank_volume_l <= 0.0 {
        return Err(SprayError::InvalidTankVolume(tank_volume_l));
    }

    let total_product_l = area_ha * rate_l_per_ha;
    let tank_fills = (total_product_l / tank_volume_l).ceil() as u32;

    Ok(SprayPlan {
        area_ha,
        rate_l_per_ha,
        tank_volume_l,
        total_product_l,
        water_l: area_ha * WATER_L_PER_HA,
        tank_fills,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_for_fifty_hectares() {
        let plan = plan_spray(50.0, 2.0, 40.0).unwrap();
        assert!((plan.total_product_l - 100.0).abs() < 1e-9);
        assert!((plan.water_l - 1500.0).abs() < 1e-9);
        assert_eq!(plan.tank_fills, 3);
    }

    #[test]
    fn partial_tank_rounds_up() {
        let plan = plan_spray(10.0, 2.0, 40.0).unwrap();
        assert_eq!(plan.tank_fills, 1);

        let exact = plan_spray(20.0, 2.0, 40.0).unwrap();
        assert_eq!(exact.tank_fills, 1);

        let just_over = plan_spray(20.5, 2.0, 40.0).unwrap();
        assert_eq!(just_over.tank_fills, 2);
    }

    #[test]
    fn rejects_non_positive_inputs() {
        assert_eq!(plan_spray(0.0, 2.0, 40.0), Err(SprayError::InvalidArea(0.0)));
        assert_eq!(plan_spray(10.0, -1.0, 40.0), Err(SprayError::InvalidRate(-1.0)));
        assert_eq!(
            plan_spray(10.0, 2.0, 0.0),
            Err(SprayError::InvalidTankVolume(0.0))
        );
        assert!(plan_spray(f64::NAN, 2.0, 40.0).is_err());
    }
}
