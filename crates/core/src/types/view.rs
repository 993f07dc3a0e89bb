//! Navigation and fulfillment enums for the ordering screen.

use serde::{Deserialize, Serialize};

use super::parse::ParseError;

/// The panel currently shown in the main area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Products,
    History,
    Calendar,
    Messages,
    Settings,
}

impl View {
    pub const ALL: [Self; 5] = [
        Self::Products,
        Self::History,
        Self::Calendar,
        Self::Messages,
        Self::Settings,
    ];
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Products => write!(f, "products"),
            Self::History => write!(f, "history"),
            Self::Calendar => write!(f, "calendar"),
            Self::Messages => write!(f, "messages"),
            Self::Settings => write!(f, "settings"),
        }
    }
}

impl std::str::FromStr for View {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "products" => Ok(Self::Products),
            "history" | "orders" => Ok(Self::History),
            "calendar" | "events" => Ok(Self::Calendar),
            "messages" | "inbox" => Ok(Self::Messages),
            "settings" => Ok(Self::Settings),
            _ => Err(ParseError::new("view", s)),
        }
    }
}

/// How a finished order reaches the customer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FulfillmentMethod {
    #[default]
    TakeAway,
    HomeDelivery,
}

impl FulfillmentMethod {
    /// The other method.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::TakeAway => Self::HomeDelivery,
            Self::HomeDelivery => Self::TakeAway,
        }
    }
}

impl std::fmt::Display for FulfillmentMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TakeAway => write!(f, "Take away"),
            Self::HomeDelivery => write!(f, "Home delivery"),
        }
    }
}

impl std::str::FromStr for FulfillmentMethod {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace([' ', '-'], "_").as_str() {
            "takeaway" | "take_away" | "pickup" => Ok(Self::TakeAway),
            "home" | "delivery" | "home_delivery" => Ok(Self::HomeDelivery),
            _ => Err(ParseError::new("fulfillment method", s)),
        }
    }
}
