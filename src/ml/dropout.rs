// ============================================================
// Layer 5 — Mode-aware Dropout
// ============================================================
// Training-time regularization: each activation is zeroed with
// probability `prob` and the survivors are scaled by 1/(1-prob)
// so the expected activation is unchanged.
//
// In Eval mode the input passes through untouched, and so does
// any rate that is not a positive number (0, negatives, NaN).

use burn::{prelude::*, tensor::Distribution};

use crate::domain::mode::Mode;

pub fn dropout<B: Backend, const D: usize>(input: Tensor<B, D>, prob: f64, mode: Mode) -> Tensor<B, D> {
    // `!(prob > 0.0)` also catches NaN, which Bernoulli rejects.
    if !mode.is_train() || !(prob > 0.0) {
        return input;
    }
    if prob >= 1.0 {
        return input.zeros_like();
    }

    let keep = 1.0 - prob;
    let mask = input.random_like(Distribution::Bernoulli(keep));
    input.mul(mask).div_scalar(keep)
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn ones(device: &<TestBackend as Backend>::Device) -> Tensor<TestBackend, 2> {
        Tensor::ones([16, 32], device)
    }

    #[test]
    fn test_eval_is_identity() {
        let device = Default::default();
        let out: Vec<f32> = dropout(ones(&device), 0.7, Mode::Eval).into_data().to_vec().unwrap();
        assert!(out.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_zero_rate_is_identity_in_train() {
        let device = Default::default();
        let out: Vec<f32> = dropout(ones(&device), 0.0, Mode::Train).into_data().to_vec().unwrap();
        assert!(out.iter().all(|&v| v == 1.0));
    }

    #[test]
    fn test_full_rate_zeroes_everything() {
        let device = Default::default();
        let out: Vec<f32> = dropout(ones(&device), 1.0, Mode::Train).into_data().to_vec().unwrap();
        assert!(out.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_nan_rate_passes_through_and_rng_stays_usable() {
        let device = Default::default();
        let out: Vec<f32> = dropout(ones(&device), f64::NAN, Mode::Train).into_data().to_vec().unwrap();
        assert!(out.iter().all(|&v| v == 1.0));

        // a real draw afterwards still works
        let out: Vec<f32> = dropout(ones(&device), 0.5, Mode::Train).into_data().to_vec().unwrap();
        assert_eq!(out.len(), 16 * 32);
    }

    #[test]
    fn test_survivors_are_rescaled() {
        let device = Default::default();
        let out: Vec<f32> = dropout(ones(&device), 0.5, Mode::Train).into_data().to_vec().unwrap();
        assert!(out.iter().all(|&v| v == 0.0 || (v - 2.0).abs() < 1e-6));
        // 512 draws at p=0.5 — both outcomes show up
        assert!(out.iter().any(|&v| v == 0.0));
        assert!(out.iter().any(|&v| v > 0.0));
    }
}
