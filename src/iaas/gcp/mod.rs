mod credentials;
mod environment;
mod load_balancers;

pub use credentials::GcpCredentials;
pub use environment::{GcpDestroy, GcpUp};
pub use load_balancers::{GcpCreateLbs, GcpDeleteLbs, GcpUpdateLbs};

pub const DIRECTOR_INTERNAL_IP: &str = "10.0.0.6";
