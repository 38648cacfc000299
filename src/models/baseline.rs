use std::collections::BTreeMap;

use smartcore::linalg::basic::arrays::Array;
use smartcore::linalg::basic::matrix::DenseMatrix;

use super::ClassifierModel;
use crate::error::{EvalError, Result};

/// Stratégia dummy klasifikátora.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BaselineStrategy {
    /// Vždy predikuje najčastejšiu triedu z trénovacích dát.
    MostFrequent,
    /// Vždy predikuje zadanú triedu.
    Constant(f64),
}

/// Dummy klasifikátor, referenčná hladina pre porovnávanie modelov.
pub struct BaselineWrapper {
    strategy: BaselineStrategy,
    class: Option<f64>,
}

impl BaselineWrapper {
    pub fn new() -> Self {
        Self {
            strategy: BaselineStrategy::MostFrequent,
            class: None,
        }
    }

    /// Konštantný klasifikátor, použiteľný bez trénovania.
    pub fn constant(class: f64) -> Self {
        Self {
            strategy: BaselineStrategy::Constant(class),
            class: Some(class),
        }
    }

    fn class(&self) -> Result<f64> {
        self.class.ok_or_else(|| EvalError::NotFitted {
            model: self.name().to_string(),
        })
    }
}

impl Default for BaselineWrapper {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierModel for BaselineWrapper {
    fn name(&self) -> &str {
        "Dummy Classifier"
    }

    fn supported_params(&self) -> Vec<&str> {
        vec!["constant"]
    }

    fn set_param(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "constant" => {
                let class = value.parse().map_err(|_| EvalError::InvalidParameter {
                    model: "baseline".to_string(),
                    message: format!("constant must be a number, got '{}'", value),
                })?;
                self.strategy = BaselineStrategy::Constant(class);
                self.class = Some(class);
                Ok(())
            }
            _ => Err(EvalError::InvalidParameter {
                model: "baseline".to_string(),
                message: format!("unknown parameter '{}'", key),
            }),
        }
    }

    fn fit(&mut self, _x: &DenseMatrix<f64>, y: &[f64]) -> Result<()> {
        match self.strategy {
            BaselineStrategy::Constant(class) => {
                self.class = Some(class);
            }
            BaselineStrategy::MostFrequent => {
                if y.is_empty() {
                    return Err(EvalError::EmptyInput);
                }
                let mut counts: BTreeMap<i64, usize> = BTreeMap::new();
                for v in y {
                    *counts.entry(v.round() as i64).or_insert(0) += 1;
                }
                let majority = counts
                    .into_iter()
                    .max_by_key(|(_, count)| *count)
                    .map(|(class, _)| class as f64)
                    .ok_or(EvalError::EmptyInput)?;
                self.class = Some(majority);
            }
        }
        Ok(())
    }

    fn predict(&self, x: &DenseMatrix<f64>) -> Result<Vec<f64>> {
        let class = self.class()?;
        Ok(vec![class; x.shape().0])
    }

    fn predict_proba(&self, x: &DenseMatrix<f64>) -> Result<Vec<[f64; 2]>> {
        let class = self.class()?;
        let row = if class == 1.0 { [0.0, 1.0] } else { [1.0, 0.0] };
        Ok(vec![row; x.shape().0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_predicts_without_fit() {
        let model = BaselineWrapper::constant(0.0);
        let x = DenseMatrix::from_2d_vec(&vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();

        assert_eq!(model.predict(&x).unwrap(), vec![0.0, 0.0, 0.0]);
        assert_eq!(model.predict_proba(&x).unwrap()[0], [1.0, 0.0]);
    }

    #[test]
    fn most_frequent_learns_majority() {
        let x = DenseMatrix::from_2d_vec(&vec![vec![1.0], vec![2.0], vec![3.0]]).unwrap();
        let mut model = BaselineWrapper::new();
        model.fit(&x, &[1.0, 1.0, 0.0]).unwrap();

        assert_eq!(model.predict(&x).unwrap(), vec![1.0, 1.0, 1.0]);
        assert_eq!(model.predict_proba(&x).unwrap()[0], [0.0, 1.0]);
    }

    #[test]
    fn most_frequent_needs_fit() {
        let model = BaselineWrapper::new();
        let x = DenseMatrix::from_2d_vec(&vec![vec![1.0]]).unwrap();
        assert!(matches!(model.predict(&x), Err(EvalError::NotFitted { .. })));
    }
}
