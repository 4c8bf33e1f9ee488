use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Filter value meaning "no restriction on this axis".
pub const WILDCARD: &str = "All";

/// Commodities offered by the commodity selector.
pub const COMMODITIES: [&str; 4] = [WILDCARD, "Wheat", "Corn", "Soybeans"];

/// Locations offered by the location selector.
pub const LOCATIONS: [&str; 4] = [WILDCARD, "North Farm", "South Farm", "East Farm"];

/// Date range selector values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateRange {
    #[default]
    #[serde(rename = "All")]
    All,
    #[serde(rename = "Last 7 Days")]
    Last7,
    #[serde(rename = "Last 30 Days")]
    Last30,
    #[serde(rename = "Last 90 Days")]
    Last90,
    #[serde(rename = "Custom")]
    Custom,
}

impl DateRange {
    pub const ALL: [DateRange; 5] = [
        DateRange::All,
        DateRange::Last7,
        DateRange::Last30,
        DateRange::Last90,
        DateRange::Custom,
    ];

    /// Label shown in the date range selector.
    pub fn label(&self) -> &'static str {
        match self {
            DateRange::All => "All",
            DateRange::Last7 => "Last 7 Days",
            DateRange::Last30 => "Last 30 Days",
            DateRange::Last90 => "Last 90 Days",
            DateRange::Custom => "Custom",
        }
    }

    /// Number of days looked back by the relative ranges.
    pub fn lookback_days(&self) -> Option<u64> {
        match self {
            DateRange::Last7 => Some(7),
            DateRange::Last30 => Some(30),
            DateRange::Last90 => Some(90),
            DateRange::All | DateRange::Custom => None,
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DateRange {
    type Err = String;

    /// Accepts selector labels ("Last 30 Days") as well as short forms ("last30", "30d").
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-' && *c != '_')
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "all" => Ok(DateRange::All),
            "last7" | "last7days" | "7d" => Ok(DateRange::Last7),
            "last30" | "last30days" | "30d" => Ok(DateRange::Last30),
            "last90" | "last90days" | "90d" => Ok(DateRange::Last90),
            "custom" => Ok(DateRange::Custom),
            _ => Err(format!(
                "Unknown date range '{}', expected one of: all, last7, last30, last90, custom",
                s
            )),
        }
    }
}

/// Chart flavour used to render the display rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    #[default]
    Line,
    Bar,
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChartType::Line => f.write_str("line"),
            ChartType::Bar => f.write_str("bar"),
        }
    }
}

impl FromStr for ChartType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line" => Ok(ChartType::Line),
            "bar" => Ok(ChartType::Bar),
            _ => Err(format!("Unknown chart type '{}', expected 'line' or 'bar'", s)),
        }
    }
}

/// The user's current display filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSelection {
    pub commodity: String,
    pub location: String,
    pub date_range: DateRange,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,
    pub search_text: String,
}

impl Default for FilterSelection {
    fn default() -> Self {
        Self {
            commodity: WILDCARD.to_string(),
            location: WILDCARD.to_string(),
            date_range: DateRange::All,
            custom_start: None,
            custom_end: None,
            search_text: String::new(),
        }
    }
}

impl FilterSelection {
    pub fn is_any_commodity(&self) -> bool {
        self.commodity == WILDCARD
    }

    pub fn is_any_location(&self) -> bool {
        self.location == WILDCARD
    }
}

/// Partial update of a [`FilterSelection`]; `None` fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterUpdate {
    pub commodity: Option<String>,
    pub location: Option<String>,
    pub date_range: Option<DateRange>,
    pub custom_start: Option<NaiveDate>,
    pub custom_end: Option<NaiveDate>,
    pub search_text: Option<String>,
}

impl FilterUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commodity(mut self, commodity: impl Into<String>) -> Self {
        self.commodity = Some(commodity.into());
        self
    }

    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn date_range(mut self, date_range: DateRange) -> Self {
        self.date_range = Some(date_range);
        self
    }

    /// Selects the custom range with the given bounds.
    pub fn custom_range(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.date_range = Some(DateRange::Custom);
        self.custom_start = Some(start);
        self.custom_end = Some(end);
        self
    }

    pub fn search_text(mut self, text: impl Into<String>) -> Self {
        self.search_text = Some(text.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
