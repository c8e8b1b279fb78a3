//! Fakes shared by unit tests.

use crate::iaas::{
    EnvironmentDestroy, EnvironmentUp, IaasError, IaasResult, LbCreate, LbDelete, LbRequest,
    LbUpdate, UpRequest,
};
use crate::logger::Logger;
use crate::state::{State, StateValidator, ValidationError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct FakeLogger {
    steps: Mutex<Vec<String>>,
    notices: Mutex<Vec<String>>,
    outputs: Mutex<Vec<String>>,
    prompts: Mutex<Vec<String>>,
    answer: bool,
    broken_stdout: bool,
}

impl FakeLogger {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }

    /// A logger whose stdout writes fail, like a closed pipe.
    pub fn broken_stdout() -> Self {
        Self {
            broken_stdout: true,
            ..Self::default()
        }
    }

    pub fn steps(&self) -> Vec<String> {
        self.steps.lock().unwrap().clone()
    }

    pub fn notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    pub fn outputs(&self) -> Vec<String> {
        self.outputs.lock().unwrap().clone()
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

impl Logger for FakeLogger {
    fn step(&self, message: &str) {
        self.steps.lock().unwrap().push(message.to_string());
    }

    fn println(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }

    fn output(&self, text: &str) -> io::Result<()> {
        if self.broken_stdout {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "stdout closed"));
        }
        self.outputs.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn prompt(&self, question: &str) -> bool {
        self.prompts.lock().unwrap().push(question.to_string());
        self.answer
    }
}

#[derive(Debug, Default)]
pub struct FakeValidator {
    error: Option<ValidationError>,
    calls: AtomicUsize,
}

impl FakeValidator {
    pub fn failing(error: ValidationError) -> Self {
        Self {
            error: Some(error),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl StateValidator for FakeValidator {
    fn validate(&self, _state: &State) -> Result<(), ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.error {
            Some(error) => Err(error.clone()),
            None => Ok(()),
        }
    }
}

#[derive(Debug, Default)]
struct Recorded {
    states: Vec<State>,
    lb_requests: Vec<LbRequest>,
    up_requests: Vec<UpRequest>,
    error: Option<String>,
}

/// Records every call and optionally fails with a fixed message. Clones
/// share the same record, so a test keeps one handle while the command
/// owns the boxed other.
#[derive(Debug, Clone, Default)]
pub struct FakeExecutor {
    inner: Arc<Mutex<Recorded>>,
}

impl FakeExecutor {
    pub fn failing(message: &str) -> Self {
        let fake = Self::default();
        fake.inner.lock().unwrap().error = Some(message.to_string());
        fake
    }

    pub fn calls(&self) -> usize {
        self.inner.lock().unwrap().states.len()
    }

    pub fn states(&self) -> Vec<State> {
        self.inner.lock().unwrap().states.clone()
    }

    pub fn lb_requests(&self) -> Vec<LbRequest> {
        self.inner.lock().unwrap().lb_requests.clone()
    }

    pub fn up_requests(&self) -> Vec<UpRequest> {
        self.inner.lock().unwrap().up_requests.clone()
    }

    fn record(&self, state: &State) -> IaasResult<()> {
        let mut inner = self.inner.lock().unwrap();
        inner.states.push(state.clone());
        match &inner.error {
            Some(message) => Err(IaasError::Other(anyhow!(message.clone()))),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl LbDelete for FakeExecutor {
    async fn execute(&self, state: &State) -> IaasResult<()> {
        self.record(state)
    }
}

#[async_trait]
impl LbCreate for FakeExecutor {
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()> {
        self.inner.lock().unwrap().lb_requests.push(request.clone());
        self.record(state)
    }
}

#[async_trait]
impl LbUpdate for FakeExecutor {
    async fn execute(&self, request: &LbRequest, state: &State) -> IaasResult<()> {
        self.inner.lock().unwrap().lb_requests.push(request.clone());
        self.record(state)
    }
}

#[async_trait]
impl EnvironmentUp for FakeExecutor {
    async fn execute(&self, request: &UpRequest, state: &State) -> IaasResult<()> {
        self.inner.lock().unwrap().up_requests.push(request.clone());
        self.record(state)
    }
}

#[async_trait]
impl EnvironmentDestroy for FakeExecutor {
    async fn execute(&self, state: &State) -> IaasResult<()> {
        self.record(state)
    }
}

/// An environment that has been brought up, without a load balancer.
pub fn environment(iaas: &str) -> State {
    let mut state = State {
        version: 1,
        iaas: iaas.to_string(),
        env_id: format!("bbl-env-{}", iaas),
        ..State::default()
    };
    state.stack.name = format!("stack-bbl-env-{}", iaas);
    state.bosh.director_name = format!("bosh-bbl-env-{}", iaas);
    state.bosh.director_address = "https://10.0.0.6:25555".to_string();
    state.bosh.director_username = "admin".to_string();
    state.bosh.director_password = "p-secret".to_string();
    state
}

/// Same environment with a load balancer of `lb_type` attached.
pub fn environment_with_lb(iaas: &str, lb_type: &str) -> State {
    let mut state = environment(iaas);
    state.stack.lb_type = lb_type.to_string();
    state.stack.certificate_name = format!("bbl-env-{}-lb-cert-0123456789ab", iaas);
    state
}
