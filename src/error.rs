// src/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("no {kind} entry aggregated for label {label:?}")]
    MissingReferent { kind: &'static str, label: String },

    #[error("identifier space exhausted after {attempts} rederivations")]
    IdentifierExhaustion { attempts: usize },
}

pub type Result<T> = std::result::Result<T, GraphError>;
