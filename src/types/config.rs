use crate::error::GolfError;
use crate::scoring::skins::SkinsSettings;
use crate::scoring::wolf::{WolfPoints, WolfTeeOrder};
use crate::scoring::ScoreBasis;
use serde::{Deserialize, Serialize};

/// Game settings shared by every round scored with this configuration.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameSettings {
    pub wolf: WolfConfig,
    pub skins: SkinsConfig,
    pub handicap: HandicapConfig,
    pub umbriago: UmbriagoConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct WolfConfig {
    pub lone_wolf_win: u32,
    pub lone_wolf_loss: u32,
    pub team_win: u32,
    pub tee_order: WolfTeeOrder,
}

impl Default for WolfConfig {
    fn default() -> Self {
        let points = WolfPoints::default();
        Self {
            lone_wolf_win: points.lone_wolf_win,
            lone_wolf_loss: points.lone_wolf_loss,
            team_win: points.team_win,
            tee_order: WolfTeeOrder::default(),
        }
    }
}

impl WolfConfig {
    pub fn points(&self) -> WolfPoints {
        WolfPoints {
            lone_wolf_win: self.lone_wolf_win,
            lone_wolf_loss: self.lone_wolf_loss,
            team_win: self.team_win,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct SkinsConfig {
    pub carryover: bool,
    pub value_per_skin: f64,
}

impl Default for SkinsConfig {
    fn default() -> Self {
        Self {
            carryover: true,
            value_per_skin: 1.0,
        }
    }
}

impl SkinsConfig {
    pub fn engine_settings(&self, basis: ScoreBasis) -> SkinsSettings {
        SkinsSettings {
            basis,
            carryover: self.carryover,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct HandicapConfig {
    /// Fraction of each handicap index that is played, 1.0 = full.
    pub allowance: f64,
}

impl Default for HandicapConfig {
    fn default() -> Self {
        Self { allowance: 1.0 }
    }
}

/// Upper bound on umbriago stakes so a doubled-back sweep on every hole still
/// fits the running totals.
pub const MAX_UMBRIAGO_POINT_VALUE: u32 = 10_000;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct UmbriagoConfig {
    pub point_value: u32,
}

impl Default for UmbriagoConfig {
    fn default() -> Self {
        Self { point_value: 1 }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), GolfError> {
        let allowance = self.handicap.allowance;
        if !(0.0..=1.0).contains(&allowance) {
            return Err(GolfError::ConfigParse(format!(
                "handicap.allowance must be between 0.0 and 1.0 (found {allowance})"
            )));
        }

        let value = self.skins.value_per_skin;
        if !value.is_finite() || value < 0.0 {
            return Err(GolfError::ConfigParse(
                "skins.value_per_skin must be a non-negative number".to_string(),
            ));
        }

        if !(1..=MAX_UMBRIAGO_POINT_VALUE).contains(&self.umbriago.point_value) {
            return Err(GolfError::ConfigParse(format!(
                "umbriago.point_value must be between 1 and {MAX_UMBRIAGO_POINT_VALUE}"
            )));
        }

        if self.wolf.lone_wolf_win == 0 && self.wolf.lone_wolf_loss == 0 && self.wolf.team_win == 0
        {
            return Err(GolfError::ConfigParse(
                "wolf points cannot all be 0".to_string(),
            ));
        }

        Ok(())
    }
}
