use crate::iaas::{ledger, IaasError, IaasResult, LbCreate, LbDelete, LbRequest, LbUpdate};
use crate::logger::Logger;
use crate::state::{LbType, State, StateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

/// Concourse load balancers on GCP pass TCP straight through; only cf
/// terminates TLS and needs a certificate.
fn check_certificate(request: &LbRequest) -> IaasResult<()> {
    if request.lb_type == LbType::Cf && request.certificate.is_none() {
        return Err(IaasError::CertificateRequired {
            iaas: "gcp",
            lb_type: request.lb_type.to_string(),
        });
    }
    Ok(())
}

pub struct GcpCreateLbs {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl GcpCreateLbs {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl LbCreate for GcpCreateLbs {
    #[instrument(name = "gcp-create-lbs", skip_all, fields(lb_type = %request.lb_type))]
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()> {
        check_certificate(request)?;

        let name = request
            .certificate
            .as_ref()
            .map(|certificate| certificate.name_for(&state.env_id));
        if let Some(name) = &name {
            self.logger.step(&format!("creating ssl certificate {}", name));
        }
        self.logger.step(&format!(
            "creating {} target pools and forwarding rules in {}",
            request.lb_type, state.gcp.region
        ));

        let next = ledger::attach_lb(state, request, name);
        self.store.save(&next).await?;
        Ok(())
    }
}

pub struct GcpUpdateLbs {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl GcpUpdateLbs {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl LbUpdate for GcpUpdateLbs {
    #[instrument(name = "gcp-update-lbs", skip_all, fields(lb_type = %request.lb_type))]
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()> {
        check_certificate(request)?;

        let name = request
            .certificate
            .as_ref()
            .map(|certificate| certificate.name_for(&state.env_id));
        if let Some(name) = &name {
            self.logger.step(&format!("creating ssl certificate {}", name));
        }
        self.logger
            .step(&format!("updating {} https proxy", request.lb_type));

        let next = ledger::attach_lb(state, request, name);
        self.store.save(&next).await?;
        Ok(())
    }
}

pub struct GcpDeleteLbs {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl GcpDeleteLbs {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl LbDelete for GcpDeleteLbs {
    #[instrument(name = "gcp-delete-lbs", skip_all, fields(lb_type = %state.stack.lb_type))]
    async fn execute(&self, state: &State) -> IaasResult<()> {
        self.logger.step(&format!(
            "deleting {} forwarding rules and target pools",
            state.stack.lb_type
        ));
        if !state.stack.certificate_name.is_empty() {
            self.logger.step(&format!(
                "deleting ssl certificate {}",
                state.stack.certificate_name
            ));
        }

        let next = ledger::detach_lb(state);
        self.store.save(&next).await?;
        Ok(())
    }
}
