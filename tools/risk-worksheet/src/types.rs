//! Core types for the risk worksheet (catalog contract + domain models + report rows).

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Catalog entries (JSON contract: embedded data file)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct ActionEntry {
  pub code: String,
  pub description: String,
}

/// Initial expert estimate for one risk event.
#[derive(Debug, Clone, Deserialize)]
pub struct RiskEntry {
  pub code: String,
  pub description: String,
  pub probability: f64,
  pub loss: f64,
}

/// Risk code -> mitigation action code.
#[derive(Debug, Clone, Deserialize)]
pub struct Assignment {
  pub risk: String,
  pub action: String,
}

/// Simulated post-mitigation expert re-assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct Reassessment {
  pub risk: String,
  pub probability: f64,
  pub loss: f64,
}

// ---------------------------------------------------------------------------
// Priority tier
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Priority {
  Low,
  Medium,
  High,
}

impl Priority {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Low => "Low",
      Self::Medium => "Medium",
      Self::High => "High",
    }
  }

  /// Short tag used next to the label: low/medium/high-risk event.
  pub fn abbreviation(self) -> &'static str {
    match self {
      Self::Low => "LER",
      Self::Medium => "MER",
      Self::High => "HER",
    }
  }
}

// ---------------------------------------------------------------------------
// Effectiveness
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Effectiveness {
  Effective,
  Neutral,
  NoEffect,
}

impl Effectiveness {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Effective => "Effective",
      Self::Neutral => "Neutral",
      Self::NoEffect => "No effect",
    }
  }
}

// ---------------------------------------------------------------------------
// Domain models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MitigationAction {
  pub code: String,
  pub description: String,
}

impl From<ActionEntry> for MitigationAction {
  fn from(entry: ActionEntry) -> Self {
    Self {
      code: entry.code,
      description: entry.description,
    }
  }
}

/// One risk event moving through prioritize -> plan -> evaluate.
///
/// `magnitude` is the frozen baseline (VRER) and has no setter. The
/// post-mitigation figures only change through [`RiskEvent::evaluate_after_mitigation`].
#[derive(Debug, Clone)]
pub struct RiskEvent {
  pub code: String,
  pub description: String,
  pub probability: f64,
  pub loss: f64,
  magnitude: f64,
  pub assigned_action: Option<MitigationAction>,
  pub post_probability: f64,
  pub post_loss: f64,
  post_magnitude: f64,
  reduction: f64,
  pub priority: Option<Priority>,
}

impl RiskEvent {
  pub fn new(code: impl Into<String>, description: impl Into<String>, probability: f64, loss: f64) -> Self {
    let magnitude = probability * loss;
    Self {
      code: code.into(),
      description: description.into(),
      probability,
      loss,
      magnitude,
      assigned_action: None,
      post_probability: probability,
      post_loss: loss,
      post_magnitude: magnitude,
      reduction: 0.0,
      priority: None,
    }
  }

  pub fn magnitude(&self) -> f64 {
    self.magnitude
  }

  pub fn post_magnitude(&self) -> f64 {
    self.post_magnitude
  }

  pub fn reduction(&self) -> f64 {
    self.reduction
  }

  /// Recompute EVRER and the reduction.
  ///
  /// Only recomputed when an action is assigned and the post estimates moved;
  /// the comparison is exact because the re-assessed values are hand-picked decimals.
  pub fn evaluate_after_mitigation(&mut self) {
    let changed = self.post_probability != self.probability || self.post_loss != self.loss;
    if self.assigned_action.is_some() && changed {
      self.post_magnitude = self.post_probability * self.post_loss;
      self.reduction = self.magnitude - self.post_magnitude;
    } else {
      self.post_magnitude = self.magnitude;
      self.reduction = 0.0;
    }
  }

  pub fn effectiveness(&self) -> Effectiveness {
    if self.reduction > 0.0 {
      Effectiveness::Effective
    } else if self.reduction == 0.0 && self.assigned_action.is_some() {
      Effectiveness::Neutral
    } else {
      Effectiveness::NoEffect
    }
  }
}

impl From<RiskEntry> for RiskEvent {
  fn from(entry: RiskEntry) -> Self {
    Self::new(entry.code, entry.description, entry.probability, entry.loss)
  }
}

// ---------------------------------------------------------------------------
// Stage reports (what gets rendered)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize)]
pub struct PriorityRow {
  pub code: String,
  pub description: String,
  pub magnitude: f64,
  pub priority: Priority,
}

/// Tier boundaries plus every event ranked by descending magnitude.
#[derive(Debug, Clone, Serialize)]
pub struct PriorityReport {
  pub min: f64,
  pub max: f64,
  pub step: f64,
  pub low_boundary: f64,
  pub mid_boundary: f64,
  pub rows: Vec<PriorityRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanRow {
  pub code: String,
  pub priority: Option<Priority>,
  pub action: Option<MitigationAction>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
  pub rows: Vec<PlanRow>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationRow {
  pub code: String,
  pub magnitude: f64,
  pub priority: Option<Priority>,
  pub action_code: Option<String>,
  pub post_probability: f64,
  pub post_loss: f64,
  pub post_magnitude: f64,
  pub reduction: f64,
  pub effectiveness: Effectiveness,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
  pub rows: Vec<EvaluationRow>,
}

/// Everything a full pipeline run produced, in stage order.
#[derive(Debug, Clone, Serialize)]
pub struct WorksheetReport {
  pub priorities: PriorityReport,
  pub plan: PlanReport,
  pub evaluation: EvaluationReport,
}
