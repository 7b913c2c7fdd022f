//! Catalog loader: mitigation actions, risk events and the fixed planning tables.

use std::collections::HashSet;

use serde::Deserialize;
use tracing::debug;

use crate::error::WorksheetError;
use crate::types::*;

const EMBEDDED: &str = include_str!("../data/catalog.json");

/// The whole static data set the worksheet runs on.
#[derive(Debug, Clone, Deserialize)]
pub struct Catalog {
  pub actions: Vec<ActionEntry>,
  pub risks: Vec<RiskEntry>,
  #[serde(default)]
  pub assignments: Vec<Assignment>,
  #[serde(default)]
  pub reassessments: Vec<Reassessment>,
}

impl Catalog {
  /// The catalog compiled into the binary.
  pub fn embedded() -> Result<Self, WorksheetError> {
    Self::from_json(EMBEDDED)
  }

  pub fn from_json(raw: &str) -> Result<Self, WorksheetError> {
    let catalog: Catalog = serde_json::from_str(raw)?;
    debug!(
      actions = catalog.actions.len(),
      risks = catalog.risks.len(),
      "catalog parsed"
    );
    Ok(catalog)
  }

  /// Reject empty codes, out-of-range estimates and duplicate codes.
  ///
  /// Cross-references (assignment and reassessment codes) are not checked here;
  /// the planner and evaluator fail on them when they resolve the lookup.
  pub fn validate(&self) -> Result<(), WorksheetError> {
    let mut seen = HashSet::new();
    for a in &self.actions {
      if a.code.is_empty() {
        return Err(WorksheetError::validation("actions[].code", "must not be empty"));
      }
      if !seen.insert(a.code.as_str()) {
        return Err(WorksheetError::validation(
          "actions[].code",
          &format!("duplicate code {}", a.code),
        ));
      }
    }

    let mut seen = HashSet::new();
    for r in &self.risks {
      if r.code.is_empty() {
        return Err(WorksheetError::validation("risks[].code", "must not be empty"));
      }
      if !seen.insert(r.code.as_str()) {
        return Err(WorksheetError::validation(
          "risks[].code",
          &format!("duplicate code {}", r.code),
        ));
      }
      check_unit("risks[].probability", r.probability)?;
      check_unit("risks[].loss", r.loss)?;
    }

    // One action and one re-assessment per risk; a repeat would silently win.
    let mut seen = HashSet::new();
    for a in &self.assignments {
      if !seen.insert(a.risk.as_str()) {
        return Err(WorksheetError::validation(
          "assignments[].risk",
          &format!("duplicate code {}", a.risk),
        ));
      }
    }

    let mut seen = HashSet::new();
    for r in &self.reassessments {
      if !seen.insert(r.risk.as_str()) {
        return Err(WorksheetError::validation(
          "reassessments[].risk",
          &format!("duplicate code {}", r.risk),
        ));
      }
      check_unit("reassessments[].probability", r.probability)?;
      check_unit("reassessments[].loss", r.loss)?;
    }
    Ok(())
  }

  /// Build the mutable working collections in catalog order.
  pub fn to_collections(&self) -> (Vec<MitigationAction>, Vec<RiskEvent>) {
    let actions = self.actions.iter().cloned().map(MitigationAction::from).collect();
    let events = self.risks.iter().cloned().map(RiskEvent::from).collect();
    (actions, events)
  }
}

fn check_unit(field: &str, value: f64) -> Result<(), WorksheetError> {
  if !(0.0..=1.0).contains(&value) {
    return Err(WorksheetError::validation(
      field,
      &format!("{} is outside [0, 1]", value),
    ));
  }
  Ok(())
}

pub fn find_action<'a>(actions: &'a [MitigationAction], code: &str) -> Result<&'a MitigationAction, WorksheetError> {
  actions
    .iter()
    .find(|a| a.code == code)
    .ok_or_else(|| WorksheetError::action_not_found(code))
}

pub fn find_event_mut<'a>(events: &'a mut [RiskEvent], code: &str) -> Result<&'a mut RiskEvent, WorksheetError> {
  events
    .iter_mut()
    .find(|e| e.code == code)
    .ok_or_else(|| WorksheetError::risk_not_found(code))
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ReferenceKind;

  #[test]
  fn embedded_catalog_is_valid() {
    let catalog = Catalog::embedded().unwrap();
    catalog.validate().unwrap();
    assert_eq!(catalog.actions.len(), 6);
    assert_eq!(catalog.risks.len(), 7);
    assert_eq!(catalog.assignments.len(), 7);
    assert_eq!(catalog.reassessments.len(), 7);
  }

  #[test]
  fn embedded_magnitudes_in_input_order() {
    let (_, events) = Catalog::embedded().unwrap().to_collections();
    let expected = [0.72, 0.56, 0.63, 0.54, 0.48, 0.49, 0.56];
    assert_eq!(events.len(), expected.len());
    for (e, want) in events.iter().zip(expected) {
      assert!((e.magnitude() - want).abs() < 1e-9, "{}: {}", e.code, e.magnitude());
    }
  }

  #[test]
  fn duplicate_risk_code_rejected() {
    let raw = r#"{
      "actions": [{"code": "ev1", "description": "a"}],
      "risks": [
        {"code": "r1", "description": "x", "probability": 0.5, "loss": 0.5},
        {"code": "r1", "description": "y", "probability": 0.2, "loss": 0.5}
      ]
    }"#;
    let err = Catalog::from_json(raw).unwrap().validate().unwrap_err();
    assert!(err.to_string().contains("duplicate code r1"));
  }

  #[test]
  fn repeated_assignment_for_one_risk_rejected() {
    let raw = r#"{
      "actions": [
        {"code": "ev1", "description": "a"},
        {"code": "ev2", "description": "b"}
      ],
      "risks": [{"code": "a_R", "description": "x", "probability": 0.5, "loss": 0.5}],
      "assignments": [
        {"risk": "a_R", "action": "ev1"},
        {"risk": "a_R", "action": "ev2"}
      ]
    }"#;
    let err = Catalog::from_json(raw).unwrap().validate().unwrap_err();
    match err {
      WorksheetError::Validation { field, reason } => {
        assert_eq!(field, "assignments[].risk");
        assert!(reason.contains("duplicate code a_R"));
      }
      other => panic!("unexpected error: {}", other),
    }
  }

  #[test]
  fn repeated_reassessment_for_one_risk_rejected() {
    let raw = r#"{
      "actions": [{"code": "ev1", "description": "a"}],
      "risks": [{"code": "a_R", "description": "x", "probability": 0.5, "loss": 0.5}],
      "assignments": [{"risk": "a_R", "action": "ev1"}],
      "reassessments": [
        {"risk": "a_R", "probability": 0.3, "loss": 0.5},
        {"risk": "a_R", "probability": 0.4, "loss": 0.5}
      ]
    }"#;
    let err = Catalog::from_json(raw).unwrap().validate().unwrap_err();
    assert!(err.to_string().contains("reassessments[].risk"));
    assert!(err.to_string().contains("duplicate code a_R"));
  }

  #[test]
  fn out_of_range_probability_rejected() {
    let raw = r#"{
      "actions": [],
      "risks": [{"code": "r1", "description": "x", "probability": 1.5, "loss": 0.5}]
    }"#;
    let err = Catalog::from_json(raw).unwrap().validate().unwrap_err();
    assert!(err.to_string().contains("risks[].probability"));
  }

  #[test]
  fn malformed_json_is_catalog_error() {
    let err = Catalog::from_json("{not json").unwrap_err();
    assert!(matches!(err, WorksheetError::Catalog(_)));
    assert!(err.is_data_error());
  }

  #[test]
  fn lookups_name_missing_code() {
    let (actions, mut events) = Catalog::embedded().unwrap().to_collections();
    assert_eq!(find_action(&actions, "ev16").unwrap().code, "ev16");
    assert_eq!(find_event_mut(&mut events, "m9_R").unwrap().code, "m9_R");

    match find_action(&actions, "ev99").unwrap_err() {
      WorksheetError::ReferenceNotFound { kind, code } => {
        assert_eq!(kind, ReferenceKind::MitigationAction);
        assert_eq!(code, "ev99");
      }
      other => panic!("unexpected error: {}", other),
    }
    let err = find_event_mut(&mut events, "x1_R").unwrap_err();
    assert!(err.to_string().contains("risk event `x1_R`"));
  }
}
