pub mod swish;

pub use swish::{ClientCertificate, SwishClient, SwishClientBuilder};
