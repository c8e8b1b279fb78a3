use super::DIRECTOR_INTERNAL_IP;
use crate::iaas::{director, EnvironmentDestroy, EnvironmentUp, Iaas, IaasResult, UpRequest};
use crate::logger::Logger;
use crate::state::{State, StateStore};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::instrument;

pub struct AwsUp {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl AwsUp {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl EnvironmentUp for AwsUp {
    #[instrument(name = "aws-up", skip_all, fields(env_id = %request.env_id))]
    async fn execute(&self, request: &UpRequest, state: &State) -> IaasResult<()> {
        self.logger.step("verifying aws credentials");
        request.aws.validate()?;

        let mut next = state.clone();
        next.iaas = Iaas::Aws.to_string();
        next.env_id = request.env_id.clone();
        next.aws = request.aws.to_state();

        if next.stack.name.is_empty() {
            next.stack.name = format!("stack-{}", request.env_id);
        }
        self.logger.step(&format!(
            "applying cloudformation stack {} in {}",
            next.stack.name, request.aws.region
        ));

        if next.bosh.director_address.is_empty() {
            self.logger.step("deploying bosh director");
            next.bosh = director::provision(&request.env_id, DIRECTOR_INTERNAL_IP);
        } else {
            self.logger
                .step(&format!("bosh director {} already deployed", next.bosh.director_name));
        }

        self.store.save(&next).await?;
        Ok(())
    }
}

pub struct AwsDestroy {
    store: StateStore,
    logger: Arc<dyn Logger>,
}

impl AwsDestroy {
    pub fn new(store: StateStore, logger: Arc<dyn Logger>) -> Self {
        Self { store, logger }
    }
}

#[async_trait]
impl EnvironmentDestroy for AwsDestroy {
    #[instrument(name = "aws-destroy", skip_all, fields(env_id = %state.env_id))]
    async fn execute(&self, state: &State) -> IaasResult<()> {
        if !state.bosh.director_name.is_empty() {
            self.logger
                .step(&format!("destroying bosh director {}", state.bosh.director_name));
        }
        if !state.stack.certificate_name.is_empty() {
            self.logger.step(&format!(
                "deleting certificate {}",
                state.stack.certificate_name
            ));
        }
        if !state.stack.name.is_empty() {
            self.logger
                .step(&format!("deleting cloudformation stack {}", state.stack.name));
        }

        self.store.remove().await?;
        Ok(())
    }
}
