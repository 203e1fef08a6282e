//! Reservation purchase recommendation fragments.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldWriter;
use super::enums::OfferingClass;

/// Hardware specification for the service a reservation covers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ServiceSpecification {
    #[serde(rename = "EC2Specification", skip_serializing_if = "Option::is_none")]
    pub ec2_specification: Option<Ec2Specification>,
}

impl ServiceSpecification {
    pub fn with_ec2_specification(mut self, specification: Ec2Specification) -> Self {
        self.ec2_specification = Some(specification);
        self
    }
}

impl fmt::Display for ServiceSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("EC2Specification", &self.ec2_specification)?;
        w.finish()
    }
}

/// The Amazon EC2 specification to purchase reservations for.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2Specification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offering_class: Option<OfferingClass>,
}

impl Ec2Specification {
    pub fn with_offering_class(mut self, offering_class: OfferingClass) -> Self {
        self.offering_class = Some(offering_class);
        self
    }
}

impl fmt::Display for Ec2Specification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("OfferingClass", &self.offering_class)?;
        w.finish()
    }
}

/// Details about the instance family a recommendation applies to.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct InstanceDetails {
    #[serde(rename = "EC2InstanceDetails", skip_serializing_if = "Option::is_none")]
    pub ec2_instance_details: Option<Ec2InstanceDetails>,
}

impl fmt::Display for InstanceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("EC2InstanceDetails", &self.ec2_instance_details)?;
        w.finish()
    }
}

/// Details about the Amazon EC2 instances the service recommends purchasing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2InstanceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub availability_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tenancy: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_generation: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_flex_eligible: Option<bool>,
}

impl fmt::Display for Ec2InstanceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("Family", &self.family)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("Region", &self.region)?;
        w.field("AvailabilityZone", &self.availability_zone)?;
        w.field("Platform", &self.platform)?;
        w.field("Tenancy", &self.tenancy)?;
        w.field("CurrentGeneration", &self.current_generation)?;
        w.field("SizeFlexEligible", &self.size_flex_eligible)?;
        w.finish()
    }
}

/// One recommended reservation purchase, as returned in a recommendation
/// response. Monetary and count fields arrive as decimal strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ReservationPurchaseRecommendationDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_details: Option<InstanceDetails>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_number_of_instances_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_normalized_units_to_purchase: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_number_of_instances_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_normalized_units_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_number_of_instances_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_normalized_units_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_number_of_instances_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_normalized_units_used_per_hour: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_utilization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_break_even_in_months: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub currency_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings_amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_savings_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_monthly_on_demand_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estimated_reservation_cost_for_lookback_period: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upfront_cost: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_standard_monthly_cost: Option<String>,
}

impl fmt::Display for ReservationPurchaseRecommendationDetail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("AccountId", &self.account_id)?;
        w.field("InstanceDetails", &self.instance_details)?;
        w.field(
            "RecommendedNumberOfInstancesToPurchase",
            &self.recommended_number_of_instances_to_purchase,
        )?;
        w.field(
            "RecommendedNormalizedUnitsToPurchase",
            &self.recommended_normalized_units_to_purchase,
        )?;
        w.field(
            "MinimumNumberOfInstancesUsedPerHour",
            &self.minimum_number_of_instances_used_per_hour,
        )?;
        w.field(
            "MinimumNormalizedUnitsUsedPerHour",
            &self.minimum_normalized_units_used_per_hour,
        )?;
        w.field(
            "MaximumNumberOfInstancesUsedPerHour",
            &self.maximum_number_of_instances_used_per_hour,
        )?;
        w.field(
            "MaximumNormalizedUnitsUsedPerHour",
            &self.maximum_normalized_units_used_per_hour,
        )?;
        w.field(
            "AverageNumberOfInstancesUsedPerHour",
            &self.average_number_of_instances_used_per_hour,
        )?;
        w.field(
            "AverageNormalizedUnitsUsedPerHour",
            &self.average_normalized_units_used_per_hour,
        )?;
        w.field("AverageUtilization", &self.average_utilization)?;
        w.field("EstimatedBreakEvenInMonths", &self.estimated_break_even_in_months)?;
        w.field("CurrencyCode", &self.currency_code)?;
        w.field(
            "EstimatedMonthlySavingsAmount",
            &self.estimated_monthly_savings_amount,
        )?;
        w.field(
            "EstimatedMonthlySavingsPercentage",
            &self.estimated_monthly_savings_percentage,
        )?;
        w.field(
            "EstimatedMonthlyOnDemandCost",
            &self.estimated_monthly_on_demand_cost,
        )?;
        w.field(
            "EstimatedReservationCostForLookbackPeriod",
            &self.estimated_reservation_cost_for_lookback_period,
        )?;
        w.field("UpfrontCost", &self.upfront_cost)?;
        w.field(
            "RecurringStandardMonthlyCost",
            &self.recurring_standard_monthly_cost,
        )?;
        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specification_display_and_equality() {
        let spec = ServiceSpecification::default()
            .with_ec2_specification(
                Ec2Specification::default().with_offering_class(OfferingClass::Convertible),
            );
        assert_eq!(
            spec.to_string(),
            "{EC2Specification: {OfferingClass: CONVERTIBLE}}"
        );
        assert_eq!(
            spec,
            ServiceSpecification::default().with_ec2_specification(
                Ec2Specification::default().with_offering_class(OfferingClass::Convertible)
            )
        );
        assert_ne!(spec, ServiceSpecification::default());
        assert_eq!(ServiceSpecification::default().to_string(), "{}");
    }

    #[test]
    fn test_specification_serde_wire_shape() {
        let spec = ServiceSpecification::default().with_ec2_specification(
            Ec2Specification::default().with_offering_class(OfferingClass::Standard),
        );
        assert_eq!(
            serde_json::to_string(&spec).unwrap(),
            "{\"EC2Specification\":{\"OfferingClass\":\"STANDARD\"}}"
        );
    }

    #[test]
    fn test_recommendation_detail_deserialize() {
        let json = r#"{
            "AccountId": "123456789012",
            "InstanceDetails": {
                "EC2InstanceDetails": {
                    "Family": "m5",
                    "InstanceType": "m5.large",
                    "Region": "eu-west-1",
                    "CurrentGeneration": true,
                    "SizeFlexEligible": false
                }
            },
            "RecommendedNumberOfInstancesToPurchase": "3",
            "AverageUtilization": "87.5",
            "CurrencyCode": "USD",
            "UpfrontCost": "0"
        }"#;
        let detail: ReservationPurchaseRecommendationDetail =
            serde_json::from_str(json).unwrap();

        assert_eq!(detail.account_id.as_deref(), Some("123456789012"));
        let ec2 = detail
            .instance_details
            .as_ref()
            .and_then(|d| d.ec2_instance_details.as_ref())
            .unwrap();
        assert_eq!(ec2.family.as_deref(), Some("m5"));
        assert_eq!(ec2.current_generation, Some(true));
        assert_eq!(ec2.size_flex_eligible, Some(false));
        assert_eq!(
            detail.recommended_number_of_instances_to_purchase.as_deref(),
            Some("3")
        );
    }

    #[test]
    fn test_recommendation_detail_display_order() {
        let detail = ReservationPurchaseRecommendationDetail {
            account_id: Some("123456789012".to_string()),
            currency_code: Some("USD".to_string()),
            upfront_cost: Some("0".to_string()),
            ..Default::default()
        };
        assert_eq!(
            detail.to_string(),
            "{AccountId: 123456789012,CurrencyCode: USD,UpfrontCost: 0}"
        );
        assert_eq!(
            ReservationPurchaseRecommendationDetail::default().to_string(),
            "{}"
        );
    }
}
