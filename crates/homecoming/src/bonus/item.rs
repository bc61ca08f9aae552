use serde::Serialize;

use crate::scoring::round_to_step;

/// How a line item accepts input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LineItemKind {
    /// Continuous value on a step grid.
    Slider,
    /// Yes/no button: either 0 or the fixed value.
    Toggle { value: i32 },
}

/// Independently valued input contributing to the bonus total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BonusLineItem {
    pub key: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub min: i32,
    pub max: i32,
    pub step: i32,
    pub default: i32,
    pub kind: LineItemKind,
    pub value: i32,
}

impl BonusLineItem {
    pub fn slider(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        min: i32,
        max: i32,
        step: i32,
    ) -> Self {
        let default = if min > 0 {
            min
        } else if max < 0 {
            max
        } else {
            0
        };
        Self {
            key,
            name,
            description,
            min,
            max,
            step,
            default,
            kind: LineItemKind::Slider,
            value: default,
        }
    }

    pub fn toggle(
        key: &'static str,
        name: &'static str,
        description: &'static str,
        value: i32,
    ) -> Self {
        Self {
            key,
            name,
            description,
            min: value.min(0),
            max: value.max(0),
            step: value.abs().max(1),
            default: 0,
            kind: LineItemKind::Toggle { value },
            value: 0,
        }
    }

    pub fn with_default(mut self, default: i32) -> Self {
        self.default = default;
        self.value = default;
        self
    }

    /// Corrects a raw input to the value this item would store.
    ///
    /// Sliders round to the nearest step (ties up) and clamp into range. Toggles accept
    /// only `0` or their fixed value.
    pub fn normalize(&self, raw: i64) -> Result<i32, LineItemError> {
        match self.kind {
            LineItemKind::Slider => {
                let rounded = round_to_step(raw, i64::from(self.step));
                Ok(rounded.clamp(i64::from(self.min), i64::from(self.max)) as i32)
            }
            LineItemKind::Toggle { value } => {
                if raw == 0 || raw == i64::from(value) {
                    Ok(raw as i32)
                } else {
                    Err(LineItemError::InvalidToggle {
                        item: self.key.to_string(),
                        value: raw,
                        allowed: value,
                    })
                }
            }
        }
    }

    pub(crate) fn validate(&self) -> Result<(), CatalogError> {
        let item = self.key.to_string();
        if self.step <= 0 {
            return Err(CatalogError::InvalidStep { item });
        }
        if self.min > self.max {
            return Err(CatalogError::InvalidRange { item });
        }
        if self.min % self.step != 0 || self.max % self.step != 0 {
            return Err(CatalogError::OffGrid { item });
        }
        if let LineItemKind::Toggle { value: 0 } = self.kind {
            return Err(CatalogError::ZeroToggle { item });
        }
        if self.normalize(i64::from(self.default)) != Ok(self.default) {
            return Err(CatalogError::InvalidDefault { item });
        }
        Ok(())
    }
}

/// Rejected line item updates. The stored value is unchanged on every variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LineItemError {
    #[error("unknown bonus category '{0}'")]
    UnknownCategory(String),
    #[error("unknown line item '{item}' in category '{category}'")]
    UnknownItem { category: String, item: String },
    #[error("'{item}' is a toggle and only accepts 0 or {allowed}, got {value}")]
    InvalidToggle { item: String, value: i64, allowed: i32 },
}

/// Problems found while assembling a catalog.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("line item '{item}' needs a positive step")]
    InvalidStep { item: String },
    #[error("line item '{item}' has min above max")]
    InvalidRange { item: String },
    #[error("line item '{item}' bounds are not multiples of its step")]
    OffGrid { item: String },
    #[error("toggle '{item}' must carry a non-zero value")]
    ZeroToggle { item: String },
    #[error("line item '{item}' default is not a storable value")]
    InvalidDefault { item: String },
    #[error("duplicate key '{0}'")]
    DuplicateKey(String),
}
