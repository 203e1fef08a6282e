//! Async client for an AWS Cost Explorer-style cost-analysis API.
//!
//! The crate is split the way the wire protocol is: [`model`] holds the
//! request/response records and closed enumerations, [`error`] the service
//! error taxonomy, and [`client`] the signed transport with retry and
//! pagination on top.
//!
//! ```no_run
//! use costex::model::{DateInterval, Dimension, GetDimensionValuesRequest};
//! use costex::{Config, CostExplorerClient, CredentialsProvider};
//!
//! # async fn run() -> costex::Result<()> {
//! let config = Config::load().unwrap_or_default();
//! let client = CostExplorerClient::new(&config, CredentialsProvider::from_env());
//!
//! let request = GetDimensionValuesRequest::default()
//!     .with_time_period(DateInterval::new("2026-07-01", "2026-08-01"))
//!     .with_dimension(Dimension::Service);
//! let result = client.get_dimension_values(&request).await?;
//!
//! for value in result.dimension_values.unwrap_or_default() {
//!     println!("{value}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod model;

mod sign;

pub use client::CostExplorerClient;
pub use config::{Config, ConfigError};
pub use credentials::{Credentials, CredentialsProvider};
pub use error::{ApiError, CredentialsError, Error, InvalidEnumValue, Result};
