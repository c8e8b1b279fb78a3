use super::aws::AwsCredentials;
use super::certs::Certificate;
use super::gcp::GcpCredentials;
use crate::state::LbType;

#[derive(Debug, Clone, Default)]
pub struct UpRequest {
    pub env_id: String,
    pub aws: AwsCredentials,
    pub gcp: GcpCredentials,
}

#[derive(Debug, Clone)]
pub struct LbRequest {
    pub lb_type: LbType,
    pub certificate: Option<Certificate>,
    pub domain: Option<String>,
}
