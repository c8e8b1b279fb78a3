use crate::iaas::{ledger, IaasError, IaasResult, LbCreate, LbDelete, LbRequest, LbUpdate};
use crate::logger::Logger;
use crate::state::{State, StateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// AWS load balancers always terminate TLS, so every request needs a
/// certificate and key.
fn require_certificate(request: &LbRequest) -> IaasResult<&crate::iaas::certs::Certificate> {
    request
        .certificate
        .as_ref()
        .ok_or_else(|| IaasError::CertificateRequired {
            iaas: "aws",
            lb_type: request.lb_type.to_string(),
        })
}

pub struct AwsCreateLbs {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl AwsCreateLbs {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl LbCreate for AwsCreateLbs {
    #[instrument(name = "aws-create-lbs", skip_all, fields(lb_type = %request.lb_type))]
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()> {
        let certificate = require_certificate(request)?;
        let name = certificate.name_for(&state.env_id);

        self.logger.step(&format!("uploading certificate {}", name));
        self.logger.step(&format!(
            "attaching {} load balancer to stack {}",
            request.lb_type, state.stack.name
        ));

        let next = ledger::attach_lb(state, request, Some(name));
        self.store.save(&next).await?;
        Ok(())
    }
}

pub struct AwsUpdateLbs {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl AwsUpdateLbs {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl LbUpdate for AwsUpdateLbs {
    #[instrument(name = "aws-update-lbs", skip_all, fields(lb_type = %request.lb_type))]
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()> {
        let certificate = require_certificate(request)?;
        let name = certificate.name_for(&state.env_id);

        self.logger.step(&format!("uploading certificate {}", name));
        self.logger
            .step(&format!("updating {} load balancer listeners", request.lb_type));
        if !state.stack.certificate_name.is_empty() {
            self.logger.step(&format!(
                "deleting certificate {}",
                state.stack.certificate_name
            ));
        }

        let next = ledger::attach_lb(state, request, Some(name));
        self.store.save(&next).await?;
        Ok(())
    }
}

pub struct AwsDeleteLbs {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl AwsDeleteLbs {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl LbDelete for AwsDeleteLbs {
    #[instrument(name = "aws-delete-lbs", skip_all, fields(lb_type = %state.stack.lb_type))]
    async fn execute(&self, state: &State) -> IaasResult<()> {
        self.logger.step(&format!(
            "detaching load balancers from stack {}",
            state.stack.name
        ));
        if !state.stack.certificate_name.is_empty() {
            self.logger.step(&format!(
                "deleting certificate {}",
                state.stack.certificate_name
            ));
        }

        let next = ledger::detach_lb(state);
        self.store.save(&next).await?;
        Ok(())
    }
}
