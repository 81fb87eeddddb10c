//! # HAPTIC FEEDBACK
//!
//! Wire shapes of the haptic events a mini app asks the host to play. Every
//! event carries a `type` discriminator plus kind-specific parameters and is
//! sent as the params of the `web_app_trigger_haptic_feedback` method.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::errors::SdkError;
use crate::validation::error_codes;

/// Host method name the haptic params are posted with.
pub const HAPTIC_FEEDBACK_METHOD: &str = "web_app_trigger_haptic_feedback";

/// Style of an `impact` event.
/// - `light`, collision between small or lightweight UI objects,
/// - `medium`, collision between medium-sized UI objects,
/// - `heavy`, collision between large or heavyweight UI objects,
/// - `rigid`, collision between hard or inflexible UI objects,
/// - `soft`, collision between soft or flexible UI objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
    Rigid,
    Soft,
}

/// Outcome signalled by a `notification` event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Error,
    Success,
    Warning,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HapticFeedback {
    Impact { impact_style: ImpactStyle },
    Notification { notification_type: NotificationType },
    SelectionChange,
}

impl HapticFeedback {
    pub fn impact(style: ImpactStyle) -> Self {
        HapticFeedback::Impact {
            impact_style: style,
        }
    }

    pub fn notification(kind: NotificationType) -> Self {
        HapticFeedback::Notification {
            notification_type: kind,
        }
    }

    pub fn selection_changed() -> Self {
        HapticFeedback::SelectionChange
    }

    /// Params object for `HAPTIC_FEEDBACK_METHOD`.
    pub fn event_params(&self) -> JsonValue {
        let (kind, param) = match self {
            HapticFeedback::Impact { impact_style } => {
                ("impact", Some(("impact_style", impact_style.as_str())))
            }
            HapticFeedback::Notification { notification_type } => (
                "notification",
                Some(("notification_type", notification_type.as_str())),
            ),
            HapticFeedback::SelectionChange => ("selection_change", None),
        };

        let mut params = serde_json::Map::new();
        params.insert("type".to_string(), JsonValue::from(kind));
        if let Some((key, value)) = param {
            params.insert(key.to_string(), JsonValue::from(value));
        }
        JsonValue::Object(params)
    }

    /// Build an event from its kind name and optional parameter, e.g.
    /// `("impact", Some("soft"))` or `("selection_change", None)`.
    pub fn from_parts(kind: &str, value: Option<&str>) -> Result<Self, SdkError> {
        let require = |name: &str| {
            value.ok_or_else(|| {
                SdkError::validation(
                    error_codes::INVALID_INPUT,
                    format!("Haptic feedback '{}' requires a {}", kind, name),
                )
            })
        };

        match kind {
            "impact" => Ok(Self::impact(require("impact_style")?.parse()?)),
            "notification" => Ok(Self::notification(require("notification_type")?.parse()?)),
            "selection_change" => Ok(Self::selection_changed()),
            other => Err(unknown_name("haptic feedback type", other)),
        }
    }
}

impl ImpactStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
            ImpactStyle::Rigid => "rigid",
            ImpactStyle::Soft => "soft",
        }
    }
}

impl NotificationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationType::Error => "error",
            NotificationType::Success => "success",
            NotificationType::Warning => "warning",
        }
    }
}

impl FromStr for ImpactStyle {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ImpactStyle::Light),
            "medium" => Ok(ImpactStyle::Medium),
            "heavy" => Ok(ImpactStyle::Heavy),
            "rigid" => Ok(ImpactStyle::Rigid),
            "soft" => Ok(ImpactStyle::Soft),
            other => Err(unknown_name("impact style", other)),
        }
    }
}

impl FromStr for NotificationType {
    type Err = SdkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "error" => Ok(NotificationType::Error),
            "success" => Ok(NotificationType::Success),
            "warning" => Ok(NotificationType::Warning),
            other => Err(unknown_name("notification type", other)),
        }
    }
}

impl fmt::Display for ImpactStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn unknown_name(what: &str, name: &str) -> SdkError {
    SdkError::validation(
        error_codes::INVALID_INPUT,
        format!("Unknown {} '{}'", what, name),
    )
}
