use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcError {
    #[error("Unrecognized species: '{0}'")]
    InvalidSpecies(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "python")]
impl From<CalcError> for pyo3::PyErr {
    fn from(err: CalcError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};
        match err {
            CalcError::InvalidSpecies(_) | CalcError::InvalidConfig(_) => {
                PyValueError::new_err(err.to_string())
            }
            _ => PyRuntimeError::new_err(err.to_string()),
        }
    }
}
