//! Two-layer perceptron: `INPUTS -> hidden (ReLU) -> 1`
//!
//! Built from burn `Linear` layers. Weights can be exported to and rebuilt
//! from a flat snapshot with layout
//! `[w1 (hidden x INPUTS, row-major) | b1 (hidden) | w2 (hidden) | b2]`.

use burn::backend::{Autodiff, NdArray};
use burn::module::{Module, Param};
use burn::nn::{Initializer, Linear, LinearConfig, Relu};
use burn::tensor::backend::Backend;
use burn::tensor::{ElementConversion, Tensor, TensorData};
use rand::Rng;

/// Number of input features
pub const INPUTS: usize = 2;

/// Input vector
pub type Features = [f32; INPUTS];

/// Inference backend
pub type Cpu = NdArray<f32>;

/// Training backend: CPU tensors with reverse-mode autodiff
pub type Train = Autodiff<Cpu>;

/// Feed-forward network with a single scalar output
#[derive(Module, Debug)]
pub struct Mlp<B: Backend> {
    hidden_layer: Linear<B>,
    activation: Relu,
    output_layer: Linear<B>,
}

/// Parameter count for a given hidden width
pub const fn param_count(hidden: usize) -> usize {
    hidden * INPUTS + hidden + hidden + 1
}

impl<B: Backend> Mlp<B> {
    /// Random init, each layer uniform in `±1/sqrt(fan_in)`
    pub fn new<R: Rng>(hidden: usize, rng: &mut R, device: &B::Device) -> Self {
        let mut params = Vec::with_capacity(param_count(hidden));

        let bound1 = 1.0 / (INPUTS as f32).sqrt();
        for _ in 0..hidden * INPUTS + hidden {
            params.push(rng.random_range(-bound1..=bound1));
        }

        let bound2 = 1.0 / (hidden as f32).sqrt();
        for _ in 0..hidden + 1 {
            params.push(rng.random_range(-bound2..=bound2));
        }

        Self::build(hidden, &params, device)
    }

    /// Build from an explicit parameter snapshot (None on a length mismatch)
    pub fn from_params(hidden: usize, params: &[f32], device: &B::Device) -> Option<Self> {
        if hidden == 0 || params.len() != param_count(hidden) {
            return None;
        }
        Some(Self::build(hidden, params, device))
    }

    fn build(hidden: usize, params: &[f32], device: &B::Device) -> Self {
        let (w1, rest) = params.split_at(hidden * INPUTS);
        let (b1, rest) = rest.split_at(hidden);
        let (w2, b2) = rest.split_at(hidden);

        let mut hidden_layer = LinearConfig::new(INPUTS, hidden)
            .with_initializer(Initializer::Zeros)
            .init(device);
        // Snapshot rows are hidden units; burn stores `[d_input, d_output]`
        hidden_layer.weight = Param::from_tensor(
            Tensor::<B, 2>::from_data(TensorData::new(w1.to_vec(), [hidden, INPUTS]), device)
                .transpose(),
        );
        hidden_layer.bias = Some(Param::from_tensor(Tensor::from_data(
            TensorData::new(b1.to_vec(), [hidden]),
            device,
        )));

        let mut output_layer = LinearConfig::new(hidden, 1)
            .with_initializer(Initializer::Zeros)
            .init(device);
        output_layer.weight = Param::from_tensor(Tensor::from_data(
            TensorData::new(w2.to_vec(), [hidden, 1]),
            device,
        ));
        output_layer.bias = Some(Param::from_tensor(Tensor::from_data(
            TensorData::new(b2.to_vec(), [1]),
            device,
        )));

        Self {
            hidden_layer,
            activation: Relu::new(),
            output_layer,
        }
    }

    pub fn hidden(&self) -> usize {
        self.hidden_layer.weight.val().dims()[1]
    }

    /// Flat copy of every weight, in snapshot layout
    pub fn params(&self) -> Vec<f32> {
        let mut out = Vec::with_capacity(param_count(self.hidden()));
        out.extend(values(self.hidden_layer.weight.val().transpose()));
        if let Some(bias) = &self.hidden_layer.bias {
            out.extend(values(bias.val()));
        }
        out.extend(values(self.output_layer.weight.val()));
        if let Some(bias) = &self.output_layer.bias {
            out.extend(values(bias.val()));
        }
        out
    }

    /// Batch forward pass: `[n, INPUTS] -> [n, 1]`
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let x = self.hidden_layer.forward(input);
        let x = self.activation.forward(x);
        self.output_layer.forward(x)
    }

    /// Single-sample input tensor
    pub fn features(&self, features: &Features) -> Tensor<B, 2> {
        let device = self.hidden_layer.weight.val().device();
        Tensor::from_data(TensorData::new(features.to_vec(), [1, INPUTS]), &device)
    }

    /// Forward pass for one sample
    pub fn predict(&self, features: &Features) -> f32 {
        self.forward(self.features(features)).into_scalar().elem()
    }
}

fn values<B: Backend, const D: usize>(tensor: Tensor<B, D>) -> Vec<f32> {
    tensor.into_data().iter::<f32>().collect()
}
