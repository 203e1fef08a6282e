use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldWriter;

/// How much it costs to run an instance on demand, within a coverage report.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CoverageCost {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_demand_cost: Option<String>,
}

impl CoverageCost {
    pub fn with_on_demand_cost(mut self, cost: impl Into<String>) -> Self {
        self.on_demand_cost = Some(cost.into());
        self
    }
}

impl fmt::Display for CoverageCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("OnDemandCost", &self.on_demand_cost)?;
        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_structural() {
        let a = CoverageCost::default().with_on_demand_cost("12.34");
        let b = CoverageCost::default().with_on_demand_cost("12.34");
        let unset = CoverageCost::default();

        assert_eq!(a, b);
        assert_ne!(a, unset);
        assert_eq!(unset, CoverageCost::default());
    }

    #[test]
    fn test_display_present_field() {
        let cost = CoverageCost::default().with_on_demand_cost("12.34");
        assert_eq!(cost.to_string(), "{OnDemandCost: 12.34}");
    }

    #[test]
    fn test_display_empty() {
        assert_eq!(CoverageCost::default().to_string(), "{}");
    }

    #[test]
    fn test_chaining_sets_the_field() {
        let cost = CoverageCost::default().with_on_demand_cost("0.0456");
        assert_eq!(cost.on_demand_cost.as_deref(), Some("0.0456"));
    }

    #[test]
    fn test_serde_omits_absent_fields() {
        assert_eq!(
            serde_json::to_string(&CoverageCost::default()).unwrap(),
            "{}"
        );
        assert_eq!(
            serde_json::to_string(&CoverageCost::default().with_on_demand_cost("12.34")).unwrap(),
            "{\"OnDemandCost\":\"12.34\"}"
        );
    }

    #[test]
    fn test_deserialize_from_response_body() {
        let cost: CoverageCost = serde_json::from_str("{\"OnDemandCost\":\"7.50\"}").unwrap();
        assert_eq!(cost.on_demand_cost.as_deref(), Some("7.50"));

        let empty: CoverageCost = serde_json::from_str("{}").unwrap();
        assert!(empty.on_demand_cost.is_none());
    }
}
