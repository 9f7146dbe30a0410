//! Audit steps explaining how deduction figures were reached.

use serde::{Deserialize, Serialize};

/// A single step in a deduction audit, recording one rule application.
///
/// # Example
///
/// ```
/// use payroll_engine::models::AuditStep;
///
/// let step = AuditStep {
///     step_number: 1,
///     rule_id: "sss".to_string(),
///     rule_name: "SSS Contribution".to_string(),
///     input: serde_json::json!({ "base_salary": "12000" }),
///     output: serde_json::json!({ "amount": "1125.00" }),
///     reasoning: "Base salary 12000 is above 4250: maximum contribution".to_string(),
/// };
/// assert_eq!(step.rule_id, "sss");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}
