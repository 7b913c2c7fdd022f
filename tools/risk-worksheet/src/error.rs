//! Structured error types for the risk worksheet.

use std::fmt;

use thiserror::Error;

/// Which collection a failed lookup was made against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
  RiskEvent,
  MitigationAction,
}

impl fmt::Display for ReferenceKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Self::RiskEvent => f.write_str("risk event"),
      Self::MitigationAction => f.write_str("mitigation action"),
    }
  }
}

#[derive(Debug, Error)]
pub enum WorksheetError {
  #[error("reference not found: {kind} `{code}`")]
  ReferenceNotFound { kind: ReferenceKind, code: String },

  #[error("validation: {field}: {reason}")]
  Validation { field: String, reason: String },

  #[error("no risk events to prioritize")]
  NoRiskEvents,

  #[error("catalog: {0}")]
  Catalog(#[from] serde_json::Error),

  #[error("io: {0}")]
  Io(#[from] std::io::Error),
}

impl WorksheetError {
  pub fn risk_not_found(code: &str) -> Self {
    Self::ReferenceNotFound {
      kind: ReferenceKind::RiskEvent,
      code: code.to_string(),
    }
  }

  pub fn action_not_found(code: &str) -> Self {
    Self::ReferenceNotFound {
      kind: ReferenceKind::MitigationAction,
      code: code.to_string(),
    }
  }

  pub fn validation(field: &str, reason: &str) -> Self {
    Self::Validation {
      field: field.to_string(),
      reason: reason.to_string(),
    }
  }

  /// True when the failure points at inconsistent catalog data rather than the environment.
  pub fn is_data_error(&self) -> bool {
    !matches!(self, Self::Io(_))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn reference_not_found_names_the_code() {
    let err = WorksheetError::action_not_found("ev99");
    assert_eq!(err.to_string(), "reference not found: mitigation action `ev99`");
    assert!(err.is_data_error());
  }

  #[test]
  fn io_is_not_a_data_error() {
    let err = WorksheetError::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
    assert!(!err.is_data_error());
  }
}
