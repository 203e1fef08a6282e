//! `GetDimensionValues` request and response fragments.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldWriter;
use super::enums::{Context, Dimension};

/// Inclusive start / exclusive end of a report window, as `YYYY-MM-DD`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DateInterval {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<String>,
}

impl DateInterval {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
        }
    }

    pub fn with_start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn with_end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }
}

impl fmt::Display for DateInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Start", &self.start)?;
        w.field("End", &self.end)?;
        w.finish()
    }
}

/// One dimension value together with its attribute map.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DimensionValuesWithAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attributes: Option<HashMap<String, String>>,
}

impl fmt::Display for DimensionValuesWithAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Value", &self.value)?;
        w.map("Attributes", &self.attributes)?;
        w.finish()
    }
}

/// Parameters for enumerating the available values of one dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDimensionValuesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_string: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_period: Option<DateInterval>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension: Option<Dimension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<Context>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl GetDimensionValuesRequest {
    pub fn with_search_string(mut self, search_string: impl Into<String>) -> Self {
        self.search_string = Some(search_string.into());
        self
    }

    pub fn with_time_period(mut self, time_period: DateInterval) -> Self {
        self.time_period = Some(time_period);
        self
    }

    pub fn with_dimension(mut self, dimension: Dimension) -> Self {
        self.dimension = Some(dimension);
        self
    }

    pub fn with_context(mut self, context: Context) -> Self {
        self.context = Some(context);
        self
    }

    pub fn with_next_page_token(mut self, next_page_token: impl Into<String>) -> Self {
        self.next_page_token = Some(next_page_token.into());
        self
    }
}

impl fmt::Display for GetDimensionValuesRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("SearchString", &self.search_string)?;
        w.field("TimePeriod", &self.time_period)?;
        w.field("Dimension", &self.dimension)?;
        w.field("Context", &self.context)?;
        w.field("NextPageToken", &self.next_page_token)?;
        w.finish()
    }
}

/// One page of dimension values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GetDimensionValuesResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimension_values: Option<Vec<DimensionValuesWithAttributes>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_size: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_page_token: Option<String>,
}

impl fmt::Display for GetDimensionValuesResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.list("DimensionValues", &self.dimension_values)?;
        w.field("ReturnSize", &self.return_size)?;
        w.field("TotalSize", &self.total_size)?;
        w.field("NextPageToken", &self.next_page_token)?;
        w.finish()
    }
}
