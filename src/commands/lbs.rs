use super::error::CommandResult;
use super::Command;
use crate::flags::FlagSet;
use crate::logger::Logger;
use crate::state::{State, StateValidator};
use async_trait::async_trait;
use std::sync::Arc;
use tabled::{
    settings::{object::Rows, Modify, Style},
    Table, Tabled,
};

pub const NAME: &str = "lbs";

#[derive(Tabled)]
struct LbRow<'a> {
    #[tabled(rename = "Type")]
    lb_type: &'a str,
    #[tabled(rename = "Certificate")]
    certificate: &'a str,
    #[tabled(rename = "Domain")]
    domain: &'a str,
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

/// Prints the attached load balancer. Prints nothing when there is none.
pub struct Lbs {
    logger: Arc<dyn Logger>,
    validator: Arc<dyn StateValidator>,
}

impl Lbs {
    pub fn new(logger: Arc<dyn Logger>, validator: Arc<dyn StateValidator>) -> Self {
        Self { logger, validator }
    }

    fn render(state: &State) -> String {
        let rows = vec![LbRow {
            lb_type: &state.stack.lb_type,
            certificate: or_dash(&state.stack.certificate_name),
            domain: or_dash(&state.lb.domain),
        }];

        let mut table = Table::new(rows);
        table.with(Style::blank()).with(
            Modify::new(Rows::first())
                .with(tabled::settings::Format::content(|s| s.to_uppercase())),
        );
        table.to_string()
    }
}

#[async_trait]
impl Command for Lbs {
    fn name(&self) -> &'static str {
        NAME
    }

    fn usage(&self) -> &'static str {
        "Prints the attached load balancer"
    }

    async fn execute(&self, args: &[String], state: &State) -> CommandResult<()> {
        FlagSet::new(NAME).parse(args.iter().cloned())?;
        self.validator.validate(state)?;

        if state.has_lb() {
            self.logger.output(&Self::render(state))?;
        } else {
            tracing::debug!("No load balancer attached");
        }
        Ok(())
    }
}
