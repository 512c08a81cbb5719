mod certificate;
mod client;
mod payment_requests;
mod refunds;
mod status;

pub use certificate::ClientCertificate;
pub use client::{SwishClient, SwishClientBuilder};
