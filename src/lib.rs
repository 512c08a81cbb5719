//! Client for the Swish payment API.
//!
//! ```rust,no_run
//! # use swish_client::{SwishClient, models::PaymentRequestParams};
//! # use rust_decimal::Decimal;
//! # async fn run() -> swish_client::error::SwishResult<()> {
//! let client = SwishClient::new("1231181189", None, None)?;
//!
//! let params = PaymentRequestParams::new("order-17", "46701234567", Decimal::new(10050, 2))
//!     .callback_url("https://shop.example/swish/callback");
//! let created = client.create_payment_request(&params).await?;
//!
//! if let Some(location) = &created.location {
//!     let status = client.get_status(location).await?;
//!     println!("{}", status["status"]);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;

pub use config::SwishConfig;
pub use error::{ErrorKind, SwishError, SwishResult};
pub use services::{ClientCertificate, SwishClient, SwishClientBuilder};
