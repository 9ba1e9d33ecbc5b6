//! Adam optimizer for the controller network
//!
//! burn's Adam keeps first and second moment estimates per parameter and
//! applies bias correction on every step.

use burn::optim::adaptor::OptimizerAdaptor;
use burn::optim::{Adam, AdamConfig};

use super::mlp::{Mlp, Train};
use crate::settings::ControllerSettings;

/// Optimizer bound to the training network
pub type Optim = OptimizerAdaptor<Adam, Mlp<Train>, Train>;

/// Adam configured with the controller's betas and epsilon.
/// The learning rate is passed per step.
pub fn adam_config(settings: &ControllerSettings) -> AdamConfig {
    AdamConfig::new()
        .with_beta_1(settings.beta1)
        .with_beta_2(settings.beta2)
        .with_epsilon(settings.epsilon)
}

pub fn optimizer(settings: &ControllerSettings) -> Optim {
    adam_config(settings).init()
}
