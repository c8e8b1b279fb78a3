use super::DIRECTOR_INTERNAL_IP;
use crate::iaas::{director, EnvironmentDestroy, EnvironmentUp, Iaas, IaasResult, UpRequest};
use crate::logger::Logger;
use crate::state::{State, StateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub struct GcpUp {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl GcpUp {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl EnvironmentUp for GcpUp {
    #[instrument(name = "gcp-up", skip_all, fields(env_id = %request.env_id))]
    async fn execute(&self, request: &UpRequest, state: &State) -> IaasResult<()> {
        self.logger.step("verifying gcp credentials");
        let key = request.gcp.resolve().await?;

        let mut next = state.clone();
        next.iaas = Iaas::Gcp.to_string();
        next.env_id = request.env_id.clone();
        next.gcp = request.gcp.to_state(key);

        self.logger.step(&format!(
            "creating network {}-network in {}",
            request.env_id, request.gcp.region
        ));

        if next.bosh.director_address.is_empty() {
            self.logger
                .step(&format!("deploying bosh director in {}", request.gcp.zone));
            next.bosh = director::provision(&request.env_id, DIRECTOR_INTERNAL_IP);
        }

        self.store.save(&next).await?;
        Ok(())
    }
}

pub struct GcpDestroy {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl GcpDestroy {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl EnvironmentDestroy for GcpDestroy {
    #[instrument(name = "gcp-destroy", skip_all, fields(env_id = %state.env_id))]
    async fn execute(&self, state: &State) -> IaasResult<()> {
        if !state.bosh.director_name.is_empty() {
            self.logger
                .step(&format!("destroying bosh director {}", state.bosh.director_name));
        }
        if state.has_lb() {
            self.logger
                .step(&format!("deleting {} load balancer", state.stack.lb_type));
        }
        self.logger
            .step(&format!("deleting network {}-network", state.env_id));

        self.store.remove().await?;
        Ok(())
    }
}
