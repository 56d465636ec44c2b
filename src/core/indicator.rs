//! Indicator light state

use raven_view_types::{IndicatorLevel, IndicatorRule};

/// Current level of one indicator.
///
/// The level is a pure function of the latest flag; nothing about earlier
/// flags is remembered.
#[derive(Debug, Clone)]
pub struct IndicatorState {
    rule: IndicatorRule,
    level: IndicatorLevel,
    raw: f64,
}

impl IndicatorState {
    pub fn new(rule: IndicatorRule) -> Self {
        Self {
            rule,
            level: IndicatorLevel::Off,
            raw: 0.0,
        }
    }

    pub fn update(&mut self, raw_flag: f64) {
        self.raw = raw_flag;
        self.level = level_for(self.rule, raw_flag);
    }

    pub fn level(&self) -> IndicatorLevel {
        self.level
    }

    pub fn raw(&self) -> f64 {
        self.raw
    }
}

/// Quantize a flag value according to `rule`
pub fn level_for(rule: IndicatorRule, flag: f64) -> IndicatorLevel {
    match rule {
        IndicatorRule::NonZero => {
            if flag == 0.0 {
                IndicatorLevel::Off
            } else {
                IndicatorLevel::On
            }
        }
        IndicatorRule::Tristate => {
            let code = flag.round();
            if code <= 0.0 {
                IndicatorLevel::Off
            } else if code < 2.0 {
                IndicatorLevel::On
            } else {
                IndicatorLevel::Warning
            }
        }
    }
}
