//! State transitions shared by every backend's load balancer executors.

use super::LbRequest;
use crate::state::{LbState, State};

/// State after attaching the requested load balancer.
pub fn attach_lb(state: &State, request: &LbRequest, certificate_name: Option<String>) -> State {
    let mut next = state.clone();
    next.stack.lb_type = request.lb_type.to_string();
    next.stack.certificate_name = certificate_name.unwrap_or_default();
    next.lb = match &request.certificate {
        Some(certificate) => LbState {
            cert: certificate.cert.clone(),
            key: certificate.key.clone(),
            chain: certificate.chain.clone().unwrap_or_default(),
            domain: request.domain.clone().unwrap_or_default(),
        },
        None => LbState {
            domain: request.domain.clone().unwrap_or_default(),
            ..LbState::default()
        },
    };
    next
}

/// State with no load balancer attached.
pub fn detach_lb(state: &State) -> State {
    let mut next = state.clone();
    next.stack.lb_type = String::new();
    next.stack.certificate_name = String::new();
    next.lb = LbState::default();
    next
}
