use crate::models::Column;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TzMapError {
    #[error("Cell[{row}][{column}] has invalid value of '{value}'")]
    Validation {
        row: usize,
        column: Column,
        value: String,
    },

    #[error("Could not load timezone mappings: {0}")]
    Load(String),

    #[error("Could not save timezone mappings: {0}")]
    Save(String),

    #[error("Mapping table invariant violated: {0}")]
    Structural(String),
}

impl TzMapError {
    pub fn validation<S: Into<String>>(row: usize, column: Column, value: S) -> Self {
        Self::Validation {
            row,
            column,
            value: value.into(),
        }
    }

    pub fn load<S: Into<String>>(msg: S) -> Self {
        Self::Load(msg.into())
    }

    pub fn save<S: Into<String>>(msg: S) -> Self {
        Self::Save(msg.into())
    }

    pub fn structural<S: Into<String>>(msg: S) -> Self {
        Self::Structural(msg.into())
    }

    /// Every variant is reported and recovered from; a structural error is a
    /// bug, but the policy is log-not-crash.
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Validation { .. } | Self::Load(_) | Self::Save(_) | Self::Structural(_) => true,
        }
    }
}

pub type TzMapResult<T> = Result<T, TzMapError>;
