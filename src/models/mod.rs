use smartcore::linalg::basic::matrix::DenseMatrix;

use crate::error::Result;

/// Spoločné rozhranie pre natrénované klasifikačné modely.
/// Vyhodnocovacie funkcie pracujú iba cez tento trait.
pub trait ClassifierModel {
    fn name(&self) -> &str;

    fn fit(&mut self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<()>;

    /// Tvrdé predikované labely, jedna hodnota na riadok vstupu.
    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>>;

    /// Pravdepodobnosti tried `[p_0, p_1]`, pozitívna trieda v druhom stĺpci.
    fn predict_proba(&self, x: &DenseMatrix<f64>) -> Result<Vec<[f64; 2]>>;

    /// Accuracy modelu na daných dátach.
    fn score(&self, x: &DenseMatrix<f64>, y: &[f64]) -> Result<f64> {
        let y_pred = self.predict(x)?;
        crate::evaluation::metrics::accuracy(y, &y_pred)
    }

    fn supported_params(&self) -> Vec<&str> {
        Vec::new()
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()>;
}

pub mod baseline;
pub mod factory;
pub mod logreg;
pub mod random_forest;
pub mod tree;

pub use baseline::{BaselineStrategy, BaselineWrapper};
pub use factory::ModelFactory;
pub use logreg::LogRegWrapper;
pub use random_forest::RandomForestWrapper;
pub use tree::TreeWrapper;
