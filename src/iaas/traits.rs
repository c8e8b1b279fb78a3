use async_trait::async_trait;

use super::{IaasResult, LbRequest, UpRequest};
use crate::state::State;

/// Creates (or re-applies) an environment for one backend.
#[async_trait]
pub trait EnvironmentUp: Send + Sync {
    async fn execute(&self, request: &UpRequest, state: &State) -> IaasResult<()>;
}

/// Tears an environment down and forgets it.
#[async_trait]
pub trait EnvironmentDestroy: Send + Sync {
    async fn execute(&self, state: &State) -> IaasResult<()>;
}

#[async_trait]
pub trait LbCreate: Send + Sync {
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()>;
}

#[async_trait]
pub trait LbUpdate: Send + Sync {
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()>;
}

/// Removes whatever load balancer the state says is attached.
#[async_trait]
pub trait LbDelete: Send + Sync {
    async fn execute(&self, state: &State) -> IaasResult<()>;
}
