//! Wire data model for the cost-analysis API.
//!
//! Every record here mirrors one fragment of a JSON request or response
//! body: all fields optional, absent fields omitted on the wire, structural
//! equality, and a `{Key: value}` diagnostic rendering of the present
//! fields. Enumerations are closed sets of exact wire strings.

pub mod coverage;
pub mod dimension;
pub mod enums;
pub mod reservation;
pub mod resource;

pub use coverage::CoverageCost;
pub use dimension::{
    DateInterval, DimensionValuesWithAttributes, GetDimensionValuesRequest,
    GetDimensionValuesResult,
};
pub use enums::{Context, Dimension, LookbackPeriodInDays, MatchOption, Metric, OfferingClass};
pub use reservation::{
    Ec2InstanceDetails, Ec2Specification, InstanceDetails,
    ReservationPurchaseRecommendationDetail, ServiceSpecification,
};
pub use resource::{Ec2ResourceDetails, Ec2ResourceUtilization, ResourceDetails, ResourceUtilization};

use std::collections::HashMap;
use std::fmt;

/// Builds the `{Key: value}` diagnostic form shared by every model record:
/// absent fields are skipped, present fields print in declaration order.
pub(crate) struct FieldWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    first: bool,
}

impl<'a, 'b> FieldWriter<'a, 'b> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'b>) -> Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, first: true })
    }

    fn sep(&mut self) -> fmt::Result {
        if self.first {
            self.first = false;
            Ok(())
        } else {
            self.f.write_str(",")
        }
    }

    pub(crate) fn field<T: fmt::Display>(
        &mut self,
        name: &str,
        value: &Option<T>,
    ) -> fmt::Result {
        if let Some(v) = value {
            self.sep()?;
            write!(self.f, "{name}: {v}")?;
        }
        Ok(())
    }

    pub(crate) fn list<T: fmt::Display>(
        &mut self,
        name: &str,
        value: &Option<Vec<T>>,
    ) -> fmt::Result {
        if let Some(items) = value {
            self.sep()?;
            write!(self.f, "{name}: [")?;
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    self.f.write_str(", ")?;
                }
                write!(self.f, "{item}")?;
            }
            self.f.write_str("]")?;
        }
        Ok(())
    }

    /// Map entries print sorted by key so the rendering stays deterministic.
    pub(crate) fn map(
        &mut self,
        name: &str,
        value: &Option<HashMap<String, String>>,
    ) -> fmt::Result {
        if let Some(entries) = value {
            self.sep()?;
            write!(self.f, "{name}: {{")?;
            let mut keys: Vec<&String> = entries.keys().collect();
            keys.sort();
            for (i, key) in keys.iter().enumerate() {
                if i > 0 {
                    self.f.write_str(", ")?;
                }
                write!(self.f, "{key}: {}", entries[key.as_str()])?;
            }
            self.f.write_str("}")?;
        }
        Ok(())
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}
