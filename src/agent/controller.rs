//! Online-learning paddle controller
//!
//! Every active tick the controller reads `[ball.y, paddle.y]`, picks a
//! direction from the sign of its prediction, and then regresses that same
//! prediction toward the instantaneous reward with one Adam step.

use std::fmt;

use burn::module::AutodiffModule;
use burn::nn::loss::{MseLoss, Reduction};
use burn::optim::{GradientsParams, Optimizer};
use burn::tensor::{ElementConversion, Tensor, TensorData};
use rand::Rng;
use serde::{Deserialize, Serialize};

use super::adam::{Optim, optimizer};
use super::mlp::{Features, Mlp, Train};
use crate::settings::ControllerSettings;
use crate::sim::{Ball, Paddle};

/// Direction the agent paddle moves this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Up,
    Down,
}

impl Action {
    /// Positive prediction moves down, anything else (including NaN) moves up
    pub fn from_prediction(predicted: f32) -> Self {
        if predicted > 0.0 { Action::Down } else { Action::Up }
    }
}

/// Controller input for the current positions
#[inline]
pub fn observe(ball: &Ball, paddle: &Paddle) -> Features {
    [ball.pos.y, paddle.pos.y]
}

/// Immediate reward: only scored while the ball is heading at the agent
pub fn reward(ball: &Ball, paddle: &Paddle) -> f32 {
    if !ball.heading_left() {
        0.0
    } else if paddle.spans_y(ball.pos.y) {
        1.0
    } else {
        -1.0
    }
}

/// Running training counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    pub updates: u64,
    pub last_loss: f32,
    /// Ticks rewarded +1
    pub aligned: u64,
    /// Ticks rewarded -1
    pub misaligned: u64,
    /// Ticks rewarded 0
    pub neutral: u64,
}

impl TrainingStats {
    fn record(&mut self, target: f32, loss: f32) {
        self.updates += 1;
        self.last_loss = loss;
        if target > 0.0 {
            self.aligned += 1;
        } else if target < 0.0 {
            self.misaligned += 1;
        } else {
            self.neutral += 1;
        }
    }

    /// Fraction of rewarded ticks where the paddle covered the ball
    pub fn alignment_rate(&self) -> f32 {
        let scored = self.aligned + self.misaligned;
        if scored == 0 {
            0.0
        } else {
            self.aligned as f32 / scored as f32
        }
    }
}

/// Approximator and its optimizer, updated in lockstep
pub struct PaddleController {
    net: Mlp<Train>,
    optim: Optim,
    learning_rate: f64,
    stats: TrainingStats,
    diverged: bool,
}

impl fmt::Debug for PaddleController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaddleController")
            .field("hidden", &self.net.hidden())
            .field("learning_rate", &self.learning_rate)
            .field("stats", &self.stats)
            .field("diverged", &self.diverged)
            .finish()
    }
}

impl PaddleController {
    /// Freshly initialised controller
    pub fn new<R: Rng>(settings: &ControllerSettings, rng: &mut R) -> Self {
        let net = Mlp::new(settings.hidden_units, rng, &Default::default());
        Self::from_network(net, settings)
    }

    /// Wrap an existing network with a fresh optimizer
    pub fn from_network(net: Mlp<Train>, settings: &ControllerSettings) -> Self {
        Self {
            net,
            optim: optimizer(settings),
            learning_rate: f64::from(settings.learning_rate),
            stats: TrainingStats::default(),
            diverged: false,
        }
    }

    /// Controller rebuilt from a flat weight snapshot
    pub fn from_params(
        hidden: usize,
        params: &[f32],
        settings: &ControllerSettings,
    ) -> Option<Self> {
        let net = Mlp::from_params(hidden, params, &Default::default())?;
        Some(Self::from_network(net, settings))
    }

    /// Movement estimate for the given features
    pub fn predict(&self, features: &Features) -> f32 {
        self.net.valid().predict(features)
    }

    /// One squared-error Adam step toward `target`; returns the loss
    pub fn update(&mut self, features: &Features, target: f32) -> f32 {
        let input = self.net.features(features);
        let goal = Tensor::<Train, 2>::from_data(
            TensorData::new(vec![target], [1, 1]),
            &input.device(),
        );

        let prediction = self.net.forward(input);
        let loss = MseLoss::new().forward(prediction.clone(), goal, Reduction::Mean);
        let prediction: f32 = prediction.into_scalar().elem();

        let grads = GradientsParams::from_grads(loss.backward(), &self.net);
        self.net = self.optim.step(self.learning_rate, self.net.clone(), grads);

        let loss: f32 = loss.into_scalar().elem();
        self.stats.record(target, loss);

        if !prediction.is_finite() && !self.diverged {
            self.diverged = true;
            log::warn!(
                "Controller output went non-finite after {} updates",
                self.stats.updates
            );
        }
        loss
    }

    /// Flat weight snapshot
    pub fn params(&self) -> Vec<f32> {
        self.net.params()
    }

    pub fn stats(&self) -> &TrainingStats {
        &self.stats
    }
}
