//! Adaptive paddle controller
//!
//! A small burn MLP trained online with Adam. No exploration: given the same
//! weights and inputs the controller always makes the same move.

pub mod adam;
pub mod controller;
pub mod mlp;

pub use adam::{Optim, adam_config, optimizer};
pub use controller::{Action, PaddleController, TrainingStats, observe, reward};
pub use mlp::{Cpu, Features, INPUTS, Mlp, Train, param_count};
