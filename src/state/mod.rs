pub mod error;
pub mod store;
pub mod types;
pub mod validator;

pub use error::{StateError, StateResult};
pub use store::{StateStore, STATE_FILE};
pub use types::{
    lb_exists, AwsState, BoshState, GcpState, InvalidLbType, LbState, LbType, Stack, State,
};
pub use validator::{StateFileValidator, StateValidator, ValidationError};
