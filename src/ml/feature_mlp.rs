// ============================================================
// Layer 5 — Feature MLP
// ============================================================
// Extracts and transforms node features inside a GIN block.
//
//   num_layers == 1:  x → Linear(in, out)
//   num_layers == L:  x → [Linear → BatchNorm → ReLU] × (L-1) → Linear
//
//   layer widths: in → hidden → … → hidden → out
//
// `linears` always holds `num_layers` entries and `norms` one fewer,
// so the single-layer case is just the same loop with no hidden stage.
//
// Reference: Xu et al. (2019) How Powerful are Graph Neural Networks?

use burn::{
    nn::{Linear, LinearConfig},
    prelude::*,
};

use crate::domain::error::{ModelError, ModelResult};
use crate::domain::mode::Mode;
use crate::ml::norm::{BatchNorm1d, BatchNormConfig};

#[derive(Config, Debug)]
pub struct FeatureMlpConfig {
    /// Number of affine layers, input layer excluded. 1 = plain linear model.
    pub num_layers: usize,
    pub input_dim:  usize,
    pub hidden_dim: usize,
    pub output_dim: usize,
}

impl FeatureMlpConfig {
    pub fn validate(&self) -> ModelResult<()> {
        if self.num_layers < 1 {
            return Err(ModelError::InvalidConfig(
                "number of layers should be positive".to_string(),
            ));
        }
        Ok(())
    }

    pub fn init<B: Backend>(&self, device: &B::Device) -> ModelResult<FeatureMlp<B>> {
        self.validate()?;

        let linears: Vec<Linear<B>> = self
            .layer_dims()
            .into_iter()
            .map(|(d_in, d_out)| LinearConfig::new(d_in, d_out).init(device))
            .collect();
        let norms: Vec<BatchNorm1d<B>> = (1..self.num_layers)
            .map(|_| BatchNormConfig::new(self.hidden_dim).init(device))
            .collect();

        tracing::debug!(
            "FeatureMlp: {} linear / {} norm layers ({} → {} → {})",
            linears.len(), norms.len(), self.input_dim, self.hidden_dim, self.output_dim,
        );

        Ok(FeatureMlp { linears, norms })
    }

    /// (fan_in, fan_out) of every affine layer in order.
    pub fn layer_dims(&self) -> Vec<(usize, usize)> {
        match self.num_layers {
            0 => Vec::new(),
            1 => vec![(self.input_dim, self.output_dim)],
            n => {
                let mut dims = Vec::with_capacity(n);
                dims.push((self.input_dim, self.hidden_dim));
                dims.extend((0..n - 2).map(|_| (self.hidden_dim, self.hidden_dim)));
                dims.push((self.hidden_dim, self.output_dim));
                dims
            }
        }
    }
}

#[derive(Module, Debug)]
pub struct FeatureMlp<B: Backend> {
    pub linears: Vec<Linear<B>>,
    pub norms:   Vec<BatchNorm1d<B>>,
}

impl<B: Backend> FeatureMlp<B> {
    /// input: [batch, input_dim] → [batch, output_dim]
    pub fn forward(&self, input: Tensor<B, 2>, mode: Mode) -> Tensor<B, 2> {
        let mut x = input;
        for (linear, norm) in self.linears.iter().zip(&self.norms) {
            x = burn::tensor::activation::relu(norm.forward(linear.forward(x), mode));
        }
        // Output layer: no normalization, no activation.
        match self.linears.last() {
            Some(output) => output.forward(x),
            None         => x,
        }
    }

    pub fn num_layers(&self) -> usize { self.linears.len() }

    pub fn num_norms(&self) -> usize { self.norms.len() }

    pub fn is_linear(&self) -> bool { self.norms.is_empty() }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;
    use burn::tensor::TensorData;

    type TestBackend = NdArray;

    fn batch(device: &<TestBackend as Backend>::Device, rows: usize, cols: usize) -> Tensor<TestBackend, 2> {
        let values: Vec<f32> = (0..rows * cols).map(|i| (i as f32 * 0.37).sin()).collect();
        Tensor::from_data(TensorData::new(values, [rows, cols]), device)
    }

    #[test]
    fn test_zero_layers_is_invalid_config() {
        let device = Default::default();
        let err = FeatureMlpConfig::new(0, 4, 8, 2).init::<TestBackend>(&device).unwrap_err();
        assert!(matches!(err, ModelError::InvalidConfig(_)));
    }

    #[test]
    fn test_single_layer_is_one_affine_map() {
        let device = Default::default();
        let mlp = FeatureMlpConfig::new(1, 4, 8, 3).init::<TestBackend>(&device).unwrap();
        assert!(mlp.is_linear());
        assert_eq!(mlp.num_layers(), 1);
        assert_eq!(mlp.num_norms(), 0);

        let x = batch(&device, 5, 4);
        let linear = &mlp.linears[0];
        let mut expected = x.clone().matmul(linear.weight.val());
        if let Some(bias) = &linear.bias {
            expected = expected.add(bias.val().unsqueeze::<2>());
        }

        // Same result in both modes: nothing mode-dependent runs.
        for mode in [Mode::Train, Mode::Eval] {
            let out: Vec<f32> = mlp.forward(x.clone(), mode).into_data().to_vec().unwrap();
            let exp: Vec<f32> = expected.clone().into_data().to_vec().unwrap();
            for (a, b) in out.iter().zip(&exp) {
                assert!((a - b).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn test_layer_and_norm_counts() {
        let device = Default::default();
        for layers in 2..=5 {
            let mlp = FeatureMlpConfig::new(layers, 4, 8, 3).init::<TestBackend>(&device).unwrap();
            assert_eq!(mlp.num_layers(), layers);
            assert_eq!(mlp.num_norms(), layers - 1);
            assert!(!mlp.is_linear());
            assert!(mlp.norms.iter().all(|n| n.num_features() == 8));
        }
    }

    #[test]
    fn test_layer_dims() {
        let cfg = FeatureMlpConfig::new(4, 5, 16, 2);
        assert_eq!(cfg.layer_dims(), vec![(5, 16), (16, 16), (16, 16), (16, 2)]);
        assert_eq!(FeatureMlpConfig::new(2, 5, 16, 2).layer_dims(), vec![(5, 16), (16, 2)]);
        assert_eq!(FeatureMlpConfig::new(1, 5, 16, 2).layer_dims(), vec![(5, 2)]);
    }

    #[test]
    fn test_output_shape() {
        let device = Default::default();
        let mlp = FeatureMlpConfig::new(3, 6, 10, 4).init::<TestBackend>(&device).unwrap();
        for mode in [Mode::Train, Mode::Eval] {
            assert_eq!(mlp.forward(batch(&device, 7, 6), mode).dims(), [7, 4]);
        }
    }

    fn affine(linear: &Linear<TestBackend>, x: Tensor<TestBackend, 2>) -> Tensor<TestBackend, 2> {
        let y = x.matmul(linear.weight.val());
        match &linear.bias {
            Some(bias) => y.add(bias.val().unsqueeze::<2>()),
            None       => y,
        }
    }

    /// Batch statistics per feature, biased variance, fresh gamma = 1 / beta = 0.
    fn standardize(x: Tensor<TestBackend, 2>) -> Tensor<TestBackend, 2> {
        let mean = x.clone().mean_dim(0);
        let var  = x.clone().sub(mean.clone()).powf_scalar(2.0).mean_dim(0);
        x.sub(mean).div(var.add_scalar(1e-5).sqrt())
    }

    #[test]
    fn test_multilayer_forward_matches_hand_composition() {
        let device = Default::default();
        let mlp = FeatureMlpConfig::new(3, 6, 10, 4).init::<TestBackend>(&device).unwrap();
        let x = batch(&device, 5, 6);

        // Train: linear → batch-stat norm → relu, twice, then linear only
        let mut h = x.clone();
        for linear in &mlp.linears[..2] {
            h = burn::tensor::activation::relu(standardize(affine(linear, h)));
        }
        let expected: Vec<f32> = affine(&mlp.linears[2], h).into_data().to_vec().unwrap();
        let out: Vec<f32> = mlp.forward(x.clone(), Mode::Train).into_data().to_vec().unwrap();
        for (a, b) in out.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-4, "{a} vs {b}");
        }

        // Eval on a fresh MLP: running mean 0 / var 1, so norm ≈ identity
        let fresh = FeatureMlpConfig::new(3, 6, 10, 4).init::<TestBackend>(&device).unwrap();
        let mut h = x.clone();
        for linear in &fresh.linears[..2] {
            h = burn::tensor::activation::relu(affine(linear, h).div_scalar((1.0f64 + 1e-5).sqrt()));
        }
        let expected: Vec<f32> = affine(&fresh.linears[2], h).into_data().to_vec().unwrap();
        let out: Vec<f32> = fresh.forward(x, Mode::Eval).into_data().to_vec().unwrap();
        for (a, b) in out.iter().zip(&expected) {
            assert!((a - b).abs() < 1e-4, "{a} vs {b}");
        }
    }

    #[test]
    fn test_single_row_train_batch_depends_on_input() {
        let device = Default::default();
        let mlp = FeatureMlpConfig::new(2, 6, 10, 4).init::<TestBackend>(&device).unwrap();

        let a = batch(&device, 1, 6);
        let b = a.clone().mul_scalar(3.0).sub_scalar(1.0);

        let out_a = mlp.forward(a, Mode::Train);
        assert_eq!(out_a.dims(), [1, 4]);
        let out_a: Vec<f32> = out_a.into_data().to_vec().unwrap();
        let out_b: Vec<f32> = mlp.forward(b, Mode::Train).into_data().to_vec().unwrap();
        assert_ne!(out_a, out_b);
    }

    #[test]
    fn test_eval_forward_is_deterministic() {
        let device = Default::default();
        let mlp = FeatureMlpConfig::new(3, 6, 10, 4).init::<TestBackend>(&device).unwrap();
        let x = batch(&device, 3, 6);
        let a: Vec<f32> = mlp.forward(x.clone(), Mode::Eval).into_data().to_vec().unwrap();
        let b: Vec<f32> = mlp.forward(x, Mode::Eval).into_data().to_vec().unwrap();
        assert_eq!(a, b);
    }
}
