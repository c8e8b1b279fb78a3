pub mod cli;
pub mod commands;
pub mod flags;
pub mod iaas;
pub mod logger;
pub mod state;

#[cfg(test)]
mod testing;
