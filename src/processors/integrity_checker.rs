use std::collections::HashSet;

use validator::Validate;

use crate::error::Result;
use crate::models::{CleanedOrder, Table};
use crate::utils::constants::{
    LOCATION_COLUMNS, MAX_VALID_LATITUDE, MAX_VALID_LONGITUDE, MIN_VALID_LATITUDE,
    MIN_VALID_LONGITUDE,
};

#[derive(Debug, Clone)]
pub struct IntegrityReport {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub violations: Vec<InvariantViolation>,
}

#[derive(Debug, Clone)]
pub struct InvariantViolation {
    pub row: usize,
    pub field: String,
    pub details: String,
}

/// Checks a cleaned table against the post-cleaning invariants: age and
/// rating bounds, non-negative pickup deltas and distances, positive stated
/// durations, lowercase categoricals, and coordinate plausibility when the
/// coordinate columns are still present.
pub struct IntegrityChecker;

impl IntegrityChecker {
    pub fn new() -> Self {
        Self
    }

    pub fn check(&self, table: &Table) -> Result<IntegrityReport> {
        let mut violations = Vec::new();

        for row in 0..table.height() {
            let order = CleanedOrder::from_row(table, row)?;
            if let Err(errors) = order.validate() {
                for (field, _) in errors.field_errors() {
                    violations.push(InvariantViolation {
                        row,
                        field: field.to_string(),
                        details: format!("value out of range in '{}'", field),
                    });
                }
            }

            for (field, value) in order.categoricals() {
                if let Some(value) = value {
                    if *value != value.trim().to_lowercase() {
                        violations.push(InvariantViolation {
                            row,
                            field: field.to_string(),
                            details: format!("'{}' is not trimmed lowercase", value),
                        });
                    }
                }
            }

            self.check_coordinates(table, row, &mut violations)?;
        }

        let violating_rows: HashSet<usize> = violations.iter().map(|v| v.row).collect();

        Ok(IntegrityReport {
            total_rows: table.height(),
            valid_rows: table.height() - violating_rows.len(),
            violations,
        })
    }

    fn check_coordinates(
        &self,
        table: &Table,
        row: usize,
        violations: &mut Vec<InvariantViolation>,
    ) -> Result<()> {
        for column in LOCATION_COLUMNS {
            if !table.has_column(column) {
                continue;
            }
            let (min, max) = if column.contains("latitude") {
                (MIN_VALID_LATITUDE, MAX_VALID_LATITUDE)
            } else {
                (MIN_VALID_LONGITUDE, MAX_VALID_LONGITUDE)
            };
            if let Some(value) = table.cell(row, column)?.as_float() {
                if value < min || value > max {
                    violations.push(InvariantViolation {
                        row,
                        field: column.to_string(),
                        details: format!("coordinate {} outside [{}, {}]", value, min, max),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn generate_summary(&self, report: &IntegrityReport) -> String {
        let mut summary = String::new();
        summary.push_str("Integrity Report\n");
        summary.push_str("================\n");
        summary.push_str(&format!("Total rows:   {}\n", report.total_rows));
        summary.push_str(&format!("Valid rows:   {}\n", report.valid_rows));
        summary.push_str(&format!("Violations:   {}\n", report.violations.len()));

        for violation in report.violations.iter().take(20) {
            summary.push_str(&format!(
                "  row {}: {} - {}\n",
                violation.row, violation.field, violation.details
            ));
        }
        if report.violations.len() > 20 {
            summary.push_str(&format!(
                "  ... and {} more\n",
                report.violations.len() - 20
            ));
        }

        summary
    }
}

impl Default for IntegrityChecker {
    fn default() -> Self {
        Self::new()
    }
}
