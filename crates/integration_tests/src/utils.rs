use colored::Colorize;
use serde_json::Value;

/// Structurally compare two JSON documents.
///
/// Object key order is ignored; array order is not.
pub fn compare_json(actual: &Value, expected: &Value) -> ComparisonResult {
    let mut differences = Vec::new();

    compare_json_recursive(actual, expected, "", &mut differences);

    if differences.is_empty() {
        ComparisonResult::Match
    } else {
        ComparisonResult::Mismatch { differences }
    }
}

#[derive(Debug, Clone)]
pub enum Difference {
    ValueMismatch {
        path: String,
        expected: Value,
        actual: Value,
    },
    MissingField {
        path: String,
    },
    ExtraField {
        path: String,
    },
    ArrayLengthMismatch {
        path: String,
        expected_len: usize,
        actual_len: usize,
    },
}

fn child_path(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", path, key)
    }
}

fn compare_json_recursive(
    actual: &Value,
    expected: &Value,
    path: &str,
    differences: &mut Vec<Difference>,
) {
    match (actual, expected) {
        (Value::Object(actual_obj), Value::Object(expected_obj)) => {
            for (key, expected_val) in expected_obj.iter() {
                let current_path = child_path(path, key);

                if let Some(actual_val) = actual_obj.get(key) {
                    compare_json_recursive(actual_val, expected_val, &current_path, differences);
                } else {
                    differences.push(Difference::MissingField { path: current_path });
                }
            }

            for key in actual_obj.keys() {
                if !expected_obj.contains_key(key) {
                    differences.push(Difference::ExtraField {
                        path: child_path(path, key),
                    });
                }
            }
        }
        (Value::Array(actual_arr), Value::Array(expected_arr)) => {
            if actual_arr.len() != expected_arr.len() {
                differences.push(Difference::ArrayLengthMismatch {
                    path: path.to_string(),
                    expected_len: expected_arr.len(),
                    actual_len: actual_arr.len(),
                });
            }

            // Compare overlapping elements even if lengths differ
            for (i, (actual_val, expected_val)) in
                actual_arr.iter().zip(expected_arr.iter()).enumerate()
            {
                let current_path = format!("{}[{}]", path, i);
                compare_json_recursive(actual_val, expected_val, &current_path, differences);
            }
        }
        (actual_val, expected_val) => {
            if actual_val != expected_val {
                differences.push(Difference::ValueMismatch {
                    path: path.to_string(),
                    expected: expected_val.clone(),
                    actual: actual_val.clone(),
                });
            }
        }
    }
}

#[derive(Debug)]
pub enum ComparisonResult {
    Match,
    Mismatch { differences: Vec<Difference> },
}

impl ComparisonResult {
    pub fn is_match(&self) -> bool {
        matches!(self, ComparisonResult::Match)
    }

    pub fn differences(&self) -> &[Difference] {
        match self {
            ComparisonResult::Match => &[],
            ComparisonResult::Mismatch { differences } => differences,
        }
    }

    /// One line per difference, colored for terminal output
    pub fn format_diff(&self) -> String {
        self.differences()
            .iter()
            .map(|difference| match difference {
                Difference::ValueMismatch {
                    path,
                    expected,
                    actual,
                } => format!(
                    "{} {}: expected {}, got {}",
                    "~".yellow(),
                    path,
                    expected.to_string().green(),
                    actual.to_string().red()
                ),
                Difference::MissingField { path } => format!("{} {}", "-".red(), path),
                Difference::ExtraField { path } => format!("{} {}", "+".green(), path),
                Difference::ArrayLengthMismatch {
                    path,
                    expected_len,
                    actual_len,
                } => format!(
                    "{} {}: expected {} elements, got {}",
                    "#".yellow(),
                    path,
                    expected_len,
                    actual_len
                ),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
