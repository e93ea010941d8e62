// ============================================================
// Layer 5 — Batch Normalization (1d)
// ============================================================
// Per-feature standardization of a [batch, features] tensor
// followed by a learned scale (gamma) and shift (beta).
//
//   Train: normalize with the batch mean / biased variance and
//          fold the batch statistics into the running buffers
//   Eval:  normalize with the running buffers
//
// A Train batch of a single row has zero variance, which would
// collapse every feature to beta. Such a batch is normalized with
// the running buffers instead and does not update them.
//
//   y = (x - mean) / sqrt(var + eps) * gamma + beta
//
// Reference: Ioffe & Szegedy (2015) Batch Normalization

use burn::{
    module::{Param, RunningState},
    prelude::*,
};

use crate::domain::mode::Mode;

#[derive(Config, Debug)]
pub struct BatchNormConfig {
    pub num_features: usize,
    #[config(default = 1e-5)]
    pub epsilon: f64,
    #[config(default = 0.1)]
    pub momentum: f64,
}

impl BatchNormConfig {
    pub fn init<B: Backend>(&self, device: &B::Device) -> BatchNorm1d<B> {
        BatchNorm1d {
            gamma:        Param::from_tensor(Tensor::ones([self.num_features], device)),
            beta:         Param::from_tensor(Tensor::zeros([self.num_features], device)),
            running_mean: RunningState::new(Tensor::zeros([self.num_features], device)),
            running_var:  RunningState::new(Tensor::ones([self.num_features], device)),
            momentum:     self.momentum,
            epsilon:      self.epsilon,
        }
    }
}

#[derive(Module, Debug)]
pub struct BatchNorm1d<B: Backend> {
    pub gamma:        Param<Tensor<B, 1>>,
    pub beta:         Param<Tensor<B, 1>>,
    pub running_mean: RunningState<Tensor<B, 1>>,
    pub running_var:  RunningState<Tensor<B, 1>>,
    pub momentum:     f64,
    pub epsilon:      f64,
}

impl<B: Backend> BatchNorm1d<B> {
    /// input: [batch, features] → [batch, features]
    pub fn forward(&self, input: Tensor<B, 2>, mode: Mode) -> Tensor<B, 2> {
        let [batch_size, _] = input.dims();
        match mode {
            Mode::Train if batch_size > 1 => self.forward_train(input),
            Mode::Train => {
                tracing::debug!("BatchNorm1d: single-row train batch, using running statistics");
                self.forward_eval(input)
            }
            Mode::Eval => self.forward_eval(input),
        }
    }

    fn forward_train(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let [batch_size, num_features] = input.dims();

        let mean = input.clone().mean_dim(0); // [1, features]
        let var  = input.clone().sub(mean.clone()).powf_scalar(2.0).mean_dim(0);

        // Running variance is kept unbiased, the normalization itself is not.
        let unbiased = var.clone().mul_scalar(batch_size as f64 / (batch_size - 1) as f64);

        let running_mean = self.running_mean.value_sync()
            .mul_scalar(1.0 - self.momentum)
            .add(mean.clone().detach().reshape([num_features]).mul_scalar(self.momentum));
        let running_var = self.running_var.value_sync()
            .mul_scalar(1.0 - self.momentum)
            .add(unbiased.detach().reshape([num_features]).mul_scalar(self.momentum));

        self.running_mean.update(running_mean.detach());
        self.running_var.update(running_var.detach());

        self.normalize(input, mean, var)
    }

    fn forward_eval(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let mean = self.running_mean.value_sync().unsqueeze::<2>();
        let var  = self.running_var.value_sync().unsqueeze::<2>();
        self.normalize(input, mean, var)
    }

    fn normalize(&self, input: Tensor<B, 2>, mean: Tensor<B, 2>, var: Tensor<B, 2>) -> Tensor<B, 2> {
        let std   = var.add_scalar(self.epsilon).sqrt();
        let gamma = self.gamma.val().unsqueeze::<2>();
        let beta  = self.beta.val().unsqueeze::<2>();

        input.sub(mean).div(std).mul(gamma).add(beta)
    }

    pub fn num_features(&self) -> usize {
        self.gamma.val().dims()[0]
    }
}
