//! Per-resource detail and utilization fragments of rightsizing responses.
//! The wrappers hold one optional EC2-specific member each; the service
//! reserves room for other resource kinds.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::FieldWriter;

/// Details on the resource the recommendation is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceDetails {
    #[serde(rename = "EC2ResourceDetails", skip_serializing_if = "Option::is_none")]
    pub ec2_resource_details: Option<Ec2ResourceDetails>,
}

impl ResourceDetails {
    pub fn with_ec2_resource_details(mut self, details: Ec2ResourceDetails) -> Self {
        self.ec2_resource_details = Some(details);
        self
    }
}

impl fmt::Display for ResourceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("EC2ResourceDetails", &self.ec2_resource_details)?;
        w.finish()
    }
}

/// Utilization of the resource the recommendation is about.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResourceUtilization {
    #[serde(
        rename = "EC2ResourceUtilization",
        skip_serializing_if = "Option::is_none"
    )]
    pub ec2_resource_utilization: Option<Ec2ResourceUtilization>,
}

impl ResourceUtilization {
    pub fn with_ec2_resource_utilization(mut self, utilization: Ec2ResourceUtilization) -> Self {
        self.ec2_resource_utilization = Some(utilization);
        self
    }
}

impl fmt::Display for ResourceUtilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("EC2ResourceUtilization", &self.ec2_resource_utilization)?;
        w.finish()
    }
}

/// Details of an Amazon EC2 instance, as reported for rightsizing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2ResourceDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_on_demand_rate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub network_performance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vcpu: Option<String>,
}

impl fmt::Display for Ec2ResourceDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("HourlyOnDemandRate", &self.hourly_on_demand_rate)?;
        w.field("InstanceType", &self.instance_type)?;
        w.field("Platform", &self.platform)?;
        w.field("Region", &self.region)?;
        w.field("Sku", &self.sku)?;
        w.field("Memory", &self.memory)?;
        w.field("NetworkPerformance", &self.network_performance)?;
        w.field("Storage", &self.storage)?;
        w.field("Vcpu", &self.vcpu)?;
        w.finish()
    }
}

/// Observed utilization maxima of an Amazon EC2 instance.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ec2ResourceUtilization {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu_utilization_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory_utilization_percentage: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_storage_utilization_percentage: Option<String>,
}

impl fmt::Display for Ec2ResourceUtilization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut w = FieldWriter::new(f)?;
        w.field("MaxCpuUtilizationPercentage", &self.max_cpu_utilization_percentage)?;
        w.field(
            "MaxMemoryUtilizationPercentage",
            &self.max_memory_utilization_percentage,
        )?;
        w.field(
            "MaxStorageUtilizationPercentage",
            &self.max_storage_utilization_percentage,
        )?;
        w.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrapper_equality() {
        let details = Ec2ResourceDetails {
            instance_type: Some("m4.xlarge".to_string()),
            ..Default::default()
        };
        let a = ResourceDetails::default().with_ec2_resource_details(details.clone());
        let b = ResourceDetails::default().with_ec2_resource_details(details);

        assert_eq!(a, b);
        assert_ne!(a, ResourceDetails::default());
    }

    #[test]
    fn test_nested_display() {
        let wrapped = ResourceDetails::default().with_ec2_resource_details(Ec2ResourceDetails {
            instance_type: Some("m4.xlarge".to_string()),
            region: Some("us-east-1".to_string()),
            ..Default::default()
        });
        assert_eq!(
            wrapped.to_string(),
            "{EC2ResourceDetails: {InstanceType: m4.xlarge,Region: us-east-1}}"
        );
        assert_eq!(ResourceDetails::default().to_string(), "{}");
        assert_eq!(ResourceUtilization::default().to_string(), "{}");
    }

    #[test]
    fn test_serde_wire_names() {
        let wrapped = ResourceUtilization::default().with_ec2_resource_utilization(
            Ec2ResourceUtilization {
                max_cpu_utilization_percentage: Some("80".to_string()),
                ..Default::default()
            },
        );
        assert_eq!(
            serde_json::to_string(&wrapped).unwrap(),
            "{\"EC2ResourceUtilization\":{\"MaxCpuUtilizationPercentage\":\"80\"}}"
        );
    }

    #[test]
    fn test_deserialize_ignores_unknown_members() {
        let json = r#"{
            "EC2ResourceDetails": {
                "InstanceType": "t3.micro",
                "Vcpu": "2",
                "SomethingNew": "ignored"
            }
        }"#;
        let details: ResourceDetails = serde_json::from_str(json).unwrap();
        let ec2 = details.ec2_resource_details.unwrap();
        assert_eq!(ec2.instance_type.as_deref(), Some("t3.micro"));
        assert_eq!(ec2.vcpu.as_deref(), Some("2"));
    }
}
