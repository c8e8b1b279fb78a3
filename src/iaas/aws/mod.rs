mod credentials;
mod environment;
mod load_balancers;

pub use credentials::AwsCredentials;
pub use environment::{AwsDestroy, AwsUp};
pub use load_balancers::{AwsCreateLbs, AwsDeleteLbs, AwsUpdateLbs};

/// Internal address the director is given inside the environment's VPC.
pub const DIRECTOR_INTERNAL_IP: &str = "10.0.0.6";
