//! Closed enumerations of allowed wire strings.
//!
//! Each member's wire representation equals its symbolic name. `FromStr` is
//! the reverse lookup: case-exact, and rejecting anything outside the set
//! with [`InvalidEnumValue`] — the service contract admits no other values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::InvalidEnumValue;

/// How far back the service looks when computing recommendations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LookbackPeriodInDays {
    SevenDays,
    ThirtyDays,
    SixtyDays,
}

impl LookbackPeriodInDays {
    pub fn as_str(&self) -> &'static str {
        match self {
            LookbackPeriodInDays::SevenDays => "SEVEN_DAYS",
            LookbackPeriodInDays::ThirtyDays => "THIRTY_DAYS",
            LookbackPeriodInDays::SixtyDays => "SIXTY_DAYS",
        }
    }

    pub const fn values() -> &'static [LookbackPeriodInDays] {
        &[
            LookbackPeriodInDays::SevenDays,
            LookbackPeriodInDays::ThirtyDays,
            LookbackPeriodInDays::SixtyDays,
        ]
    }
}

impl FromStr for LookbackPeriodInDays {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SEVEN_DAYS" => Ok(LookbackPeriodInDays::SevenDays),
            "THIRTY_DAYS" => Ok(LookbackPeriodInDays::ThirtyDays),
            "SIXTY_DAYS" => Ok(LookbackPeriodInDays::SixtyDays),
            _ => Err(InvalidEnumValue::new("LookbackPeriodInDays", s)),
        }
    }
}

impl fmt::Display for LookbackPeriodInDays {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How filter values are matched against dimension values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchOption {
    Equals,
    StartsWith,
    EndsWith,
    Contains,
    CaseSensitive,
    CaseInsensitive,
}

impl MatchOption {
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchOption::Equals => "EQUALS",
            MatchOption::StartsWith => "STARTS_WITH",
            MatchOption::EndsWith => "ENDS_WITH",
            MatchOption::Contains => "CONTAINS",
            MatchOption::CaseSensitive => "CASE_SENSITIVE",
            MatchOption::CaseInsensitive => "CASE_INSENSITIVE",
        }
    }

    pub const fn values() -> &'static [MatchOption] {
        &[
            MatchOption::Equals,
            MatchOption::StartsWith,
            MatchOption::EndsWith,
            MatchOption::Contains,
            MatchOption::CaseSensitive,
            MatchOption::CaseInsensitive,
        ]
    }
}

impl FromStr for MatchOption {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "EQUALS" => Ok(MatchOption::Equals),
            "STARTS_WITH" => Ok(MatchOption::StartsWith),
            "ENDS_WITH" => Ok(MatchOption::EndsWith),
            "CONTAINS" => Ok(MatchOption::Contains),
            "CASE_SENSITIVE" => Ok(MatchOption::CaseSensitive),
            "CASE_INSENSITIVE" => Ok(MatchOption::CaseInsensitive),
            _ => Err(InvalidEnumValue::new("MatchOption", s)),
        }
    }
}

impl fmt::Display for MatchOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which cost metric a report aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Metric {
    BlendedCost,
    UnblendedCost,
    AmortizedCost,
    NetUnblendedCost,
    NetAmortizedCost,
    UsageQuantity,
    NormalizedUsageAmount,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::BlendedCost => "BLENDED_COST",
            Metric::UnblendedCost => "UNBLENDED_COST",
            Metric::AmortizedCost => "AMORTIZED_COST",
            Metric::NetUnblendedCost => "NET_UNBLENDED_COST",
            Metric::NetAmortizedCost => "NET_AMORTIZED_COST",
            Metric::UsageQuantity => "USAGE_QUANTITY",
            Metric::NormalizedUsageAmount => "NORMALIZED_USAGE_AMOUNT",
        }
    }

    pub const fn values() -> &'static [Metric] {
        &[
            Metric::BlendedCost,
            Metric::UnblendedCost,
            Metric::AmortizedCost,
            Metric::NetUnblendedCost,
            Metric::NetAmortizedCost,
            Metric::UsageQuantity,
            Metric::NormalizedUsageAmount,
        ]
    }
}

impl FromStr for Metric {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "BLENDED_COST" => Ok(Metric::BlendedCost),
            "UNBLENDED_COST" => Ok(Metric::UnblendedCost),
            "AMORTIZED_COST" => Ok(Metric::AmortizedCost),
            "NET_UNBLENDED_COST" => Ok(Metric::NetUnblendedCost),
            "NET_AMORTIZED_COST" => Ok(Metric::NetAmortizedCost),
            "USAGE_QUANTITY" => Ok(Metric::UsageQuantity),
            "NORMALIZED_USAGE_AMOUNT" => Ok(Metric::NormalizedUsageAmount),
            _ => Err(InvalidEnumValue::new("Metric", s)),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which dimension a `GetDimensionValues` query enumerates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Az,
    InstanceType,
    LinkedAccount,
    LinkedAccountName,
    Operation,
    PurchaseType,
    Region,
    Service,
    ServiceCode,
    UsageType,
    UsageTypeGroup,
    RecordType,
    OperatingSystem,
    Tenancy,
    Scope,
    Platform,
    SubscriptionId,
    LegalEntityName,
    DeploymentOption,
    DatabaseEngine,
    CacheEngine,
    InstanceTypeFamily,
    BillingEntity,
    ReservationId,
    ResourceId,
    RightsizingType,
    SavingsPlansType,
    SavingsPlanArn,
    PaymentOption,
}

impl Dimension {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dimension::Az => "AZ",
            Dimension::InstanceType => "INSTANCE_TYPE",
            Dimension::LinkedAccount => "LINKED_ACCOUNT",
            Dimension::LinkedAccountName => "LINKED_ACCOUNT_NAME",
            Dimension::Operation => "OPERATION",
            Dimension::PurchaseType => "PURCHASE_TYPE",
            Dimension::Region => "REGION",
            Dimension::Service => "SERVICE",
            Dimension::ServiceCode => "SERVICE_CODE",
            Dimension::UsageType => "USAGE_TYPE",
            Dimension::UsageTypeGroup => "USAGE_TYPE_GROUP",
            Dimension::RecordType => "RECORD_TYPE",
            Dimension::OperatingSystem => "OPERATING_SYSTEM",
            Dimension::Tenancy => "TENANCY",
            Dimension::Scope => "SCOPE",
            Dimension::Platform => "PLATFORM",
            Dimension::SubscriptionId => "SUBSCRIPTION_ID",
            Dimension::LegalEntityName => "LEGAL_ENTITY_NAME",
            Dimension::DeploymentOption => "DEPLOYMENT_OPTION",
            Dimension::DatabaseEngine => "DATABASE_ENGINE",
            Dimension::CacheEngine => "CACHE_ENGINE",
            Dimension::InstanceTypeFamily => "INSTANCE_TYPE_FAMILY",
            Dimension::BillingEntity => "BILLING_ENTITY",
            Dimension::ReservationId => "RESERVATION_ID",
            Dimension::ResourceId => "RESOURCE_ID",
            Dimension::RightsizingType => "RIGHTSIZING_TYPE",
            Dimension::SavingsPlansType => "SAVINGS_PLANS_TYPE",
            Dimension::SavingsPlanArn => "SAVINGS_PLAN_ARN",
            Dimension::PaymentOption => "PAYMENT_OPTION",
        }
    }

    pub const fn values() -> &'static [Dimension] {
        &[
            Dimension::Az,
            Dimension::InstanceType,
            Dimension::LinkedAccount,
            Dimension::LinkedAccountName,
            Dimension::Operation,
            Dimension::PurchaseType,
            Dimension::Region,
            Dimension::Service,
            Dimension::ServiceCode,
            Dimension::UsageType,
            Dimension::UsageTypeGroup,
            Dimension::RecordType,
            Dimension::OperatingSystem,
            Dimension::Tenancy,
            Dimension::Scope,
            Dimension::Platform,
            Dimension::SubscriptionId,
            Dimension::LegalEntityName,
            Dimension::DeploymentOption,
            Dimension::DatabaseEngine,
            Dimension::CacheEngine,
            Dimension::InstanceTypeFamily,
            Dimension::BillingEntity,
            Dimension::ReservationId,
            Dimension::ResourceId,
            Dimension::RightsizingType,
            Dimension::SavingsPlansType,
            Dimension::SavingsPlanArn,
            Dimension::PaymentOption,
        ]
    }
}

impl FromStr for Dimension {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Dimension::values()
            .iter()
            .find(|d| d.as_str() == s)
            .copied()
            .ok_or_else(|| InvalidEnumValue::new("Dimension", s))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which operation family a `GetDimensionValues` query targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Context {
    CostAndUsage,
    Reservations,
    SavingsPlans,
}

impl Context {
    pub fn as_str(&self) -> &'static str {
        match self {
            Context::CostAndUsage => "COST_AND_USAGE",
            Context::Reservations => "RESERVATIONS",
            Context::SavingsPlans => "SAVINGS_PLANS",
        }
    }

    pub const fn values() -> &'static [Context] {
        &[
            Context::CostAndUsage,
            Context::Reservations,
            Context::SavingsPlans,
        ]
    }
}

impl FromStr for Context {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "COST_AND_USAGE" => Ok(Context::CostAndUsage),
            "RESERVATIONS" => Ok(Context::Reservations),
            "SAVINGS_PLANS" => Ok(Context::SavingsPlans),
            _ => Err(InvalidEnumValue::new("Context", s)),
        }
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation offering class of a recommended purchase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OfferingClass {
    Standard,
    Convertible,
}

impl OfferingClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            OfferingClass::Standard => "STANDARD",
            OfferingClass::Convertible => "CONVERTIBLE",
        }
    }

    pub const fn values() -> &'static [OfferingClass] {
        &[OfferingClass::Standard, OfferingClass::Convertible]
    }
}

impl FromStr for OfferingClass {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "STANDARD" => Ok(OfferingClass::Standard),
            "CONVERTIBLE" => Ok(OfferingClass::Convertible),
            _ => Err(InvalidEnumValue::new("OfferingClass", s)),
        }
    }
}

impl fmt::Display for OfferingClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
