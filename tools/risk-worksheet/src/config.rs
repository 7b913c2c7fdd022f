//! Report configuration with sane defaults.

/// Presentation settings for the rendered worksheet.
#[derive(Debug, Clone)]
pub struct Config {
  /// Decimal places for every numeric column.
  pub precision: usize,
  /// Shown in the action column when no mitigation was assigned.
  pub unassigned_placeholder: String,
  /// First banner line.
  pub title: String,
  /// Second banner line.
  pub subtitle: String,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      precision: 2,
      unassigned_placeholder: "N/A".to_string(),
      title: "SOFTWARE DEVELOPMENT RISK MANAGEMENT".to_string(),
      subtitle: "(3D rogue-like game on Unity/C#)".to_string(),
    }
  }
}
