// ============================================================
// Layer 5 — Framework Capabilities
// ============================================================
// The blocks never implement differentiation or parameter updates
// themselves. Callers reach burn's machinery through two traits:
//
//   Block      — forward-evaluate with an explicit Mode
//   Trainable  — accumulate gradients from a loss, apply an
//                optimizer update (blanket impl for every
//                AutodiffModule)
//
// The loss function and the optimizer belong to the caller.

use burn::{
    module::AutodiffModule,
    optim::{GradientsParams, Optimizer},
    prelude::*,
    tensor::backend::AutodiffBackend,
};

use crate::domain::mode::Mode;
use crate::ml::{classifier::OutputClassifier, feature_mlp::FeatureMlp};

// ─── Block ────────────────────────────────────────────────────────────────────
/// A submodule an outer graph pipeline can chain.
pub trait Block<B: Backend> {
    type Input;

    fn forward_block(&self, input: Self::Input, mode: Mode) -> Tensor<B, 2>;
}

impl<B: Backend> Block<B> for FeatureMlp<B> {
    type Input = Tensor<B, 2>;

    fn forward_block(&self, input: Self::Input, mode: Mode) -> Tensor<B, 2> {
        self.forward(input, mode)
    }
}

impl<B: Backend> Block<B> for OutputClassifier<B> {
    type Input = Tensor<B, 3>;

    fn forward_block(&self, input: Self::Input, mode: Mode) -> Tensor<B, 2> {
        self.forward(input, mode)
    }
}

// ─── Trainable ────────────────────────────────────────────────────────────────
pub trait Trainable<B: AutodiffBackend>: AutodiffModule<B> + Sized {
    /// Backpropagate `loss` and collect the gradients of this module's parameters.
    fn accumulate_gradients(&self, loss: Tensor<B, 1>) -> GradientsParams {
        let grads = loss.backward();
        GradientsParams::from_grads(grads, self)
    }

    /// Hand the gradients to an optimizer and return the updated module.
    fn apply_update<O>(self, optim: &mut O, lr: f64, grads: GradientsParams) -> Self
    where
        O: Optimizer<Self, B>,
    {
        optim.step(lr, self, grads)
    }
}

impl<B: AutodiffBackend, M: AutodiffModule<B>> Trainable<B> for M {}
