use crate::iaas::{IaasError, IaasResult};
use crate::state::GcpState;
use anyhow::Context;
use serde::Deserialize;
use tokio::fs;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GcpCredentials {
    /// Path to a service account key file, or the key JSON itself.
    pub service_account_key: String,
    pub project_id: String,
    pub region: String,
    pub zone: String,
}

#[derive(Debug, Deserialize)]
struct ServiceAccountKey {
    #[serde(rename = "type")]
    key_type: String,
    #[serde(default)]
    project_id: String,
}

impl GcpCredentials {
    /// Validates the credentials and returns the service account key JSON.
    pub async fn resolve(&self) -> IaasResult<String> {
        if self.service_account_key.is_empty()
            || self.project_id.is_empty()
            || self.region.is_empty()
            || self.zone.is_empty()
        {
            return Err(IaasError::InvalidGcpCredentials(
                "--gcp-service-account-key, --gcp-project-id, --gcp-region and --gcp-zone must be provided"
                    .to_string(),
            ));
        }

        let contents = if self.service_account_key.trim_start().starts_with('{') {
            self.service_account_key.clone()
        } else {
            fs::read_to_string(&self.service_account_key)
                .await
                .with_context(|| {
                    format!(
                        "failed to read service account key {}",
                        self.service_account_key
                    )
                })?
        };

        let key: ServiceAccountKey = serde_json::from_str(&contents).map_err(|e| {
            IaasError::InvalidGcpCredentials(format!("service account key is not valid JSON: {}", e))
        })?;
        if key.key_type != "service_account" {
            return Err(IaasError::InvalidGcpCredentials(format!(
                "key type {:?} is not a service account key",
                key.key_type
            )));
        }
        if !key.project_id.is_empty() && key.project_id != self.project_id {
            tracing::warn!(
                key_project = %key.project_id,
                project = %self.project_id,
                "Service account key belongs to a different project"
            );
        }
        if !self.zone.starts_with(&self.region) {
            return Err(IaasError::InvalidGcpCredentials(format!(
                "zone {:?} is not in region {:?}",
                self.zone, self.region
            )));
        }

        Ok(contents)
    }

    pub fn from_state(state: &GcpState) -> Self {
        Self {
            service_account_key: state.service_account_key.clone(),
            project_id: state.project_id.clone(),
            region: state.region.clone(),
            zone: state.zone.clone(),
        }
    }

    pub fn to_state(&self, key_json: String) -> GcpState {
        GcpState {
            service_account_key: key_json,
            project_id: self.project_id.clone(),
            region: self.region.clone(),
            zone: self.zone.clone(),
        }
    }
}
