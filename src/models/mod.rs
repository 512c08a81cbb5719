pub mod error_code;
pub mod payment_request;
pub mod refund;
pub mod response;
pub mod status;

pub use error_code::*;
pub use payment_request::*;
pub use refund::*;
pub use response::*;
pub use status::*;
