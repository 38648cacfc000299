use thiserror::Error;

pub type Result<T> = std::result::Result<T, EvalError>;

/// Chyby pri vyhodnocovaní modelov. Nič sa nechytá lokálne,
/// všetko propaguje volajúcemu.
#[derive(Error, Debug)]
pub enum EvalError {
    #[error("model '{model}' is not fitted, call fit() first")]
    NotFitted { model: String },

    #[error("model '{model}' does not expose class probabilities")]
    ProbabilitiesUnsupported { model: String },

    #[error("label {value} is outside {{0, 1}}, AUC requires binary labels")]
    NonBinaryLabel { value: f64 },

    #[error("labels contain a single class, ROC curve is undefined")]
    SingleClassLabels,

    #[error("length mismatch: y_true has {expected} samples, y_pred has {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    #[error("empty input, at least one sample is required")]
    EmptyInput,

    #[error("invalid parameter for model '{model}': {message}")]
    InvalidParameter { model: String, message: String },

    #[error("unknown model type '{name}'")]
    UnknownModel { name: String },

    #[error("model error: {message}")]
    Model { message: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<smartcore::error::Failed> for EvalError {
    fn from(e: smartcore::error::Failed) -> Self {
        EvalError::Model { message: e.to_string() }
    }
}
