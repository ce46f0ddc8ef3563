use serde_json::{Map, Value};

/// One row of data: field name → scalar value, in source column order.
pub type Record = Map<String, Value>;

/// Ordered sequence of records. Order is display order.
pub type Dataset = Vec<Record>;

/// Placeholder shown for null or missing values.
pub const EMPTY_CELL: &str = "—";

/// Textual form of a cell value.
///
/// Strings are shown verbatim, integral numbers without a fractional part,
/// null and missing values as [`EMPTY_CELL`]. Arrays and objects are not
/// expected in a record but still get a textual form (compact JSON).
pub fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => EMPTY_CELL.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                i.to_string()
            } else if let Some(u) = n.as_u64() {
                u.to_string()
            } else {
                float_text(n.as_f64().unwrap_or_default())
            }
        }
        Some(other) => other.to_string(),
    }
}

/// Shortest text of a float. Magnitudes from 1e21 up and below 1e-6 switch to
/// exponent form with an explicit sign (`1e+21`, `1.5e-7`), the way browsers
/// print numbers; everything else is positional.
fn float_text(f: f64) -> String {
    if !f.is_finite() {
        return f.to_string();
    }
    let magnitude = f.abs();
    if magnitude >= 1e21 || (magnitude != 0.0 && magnitude < 1e-6) {
        let text = format!("{:e}", f);
        return match text.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => text,
        };
    }
    if f.fract() == 0.0 && magnitude < 1e15 {
        format!("{}", f as i64)
    } else {
        format!("{}", f)
    }
}

/// Builds a record from `(field, value)` pairs, keeping their order.
pub fn record_from_pairs<K, I>(pairs: I) -> Record
where
    K: Into<String>,
    I: IntoIterator<Item = (K, Value)>,
{
    pairs.into_iter().map(|(k, v)| (k.into(), v)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_display_text_scalars() {
        assert_eq!(display_text(Some(&json!("Microscope"))), "Microscope");
        assert_eq!(display_text(Some(&json!(12))), "12");
        assert_eq!(display_text(Some(&json!(-3))), "-3");
        assert_eq!(display_text(Some(&json!(2.5))), "2.5");
        assert_eq!(display_text(Some(&json!(4.0))), "4");
        assert_eq!(display_text(Some(&json!(true))), "true");
    }

    #[test]
    fn test_display_text_extreme_floats_use_exponent_form() {
        assert_eq!(display_text(Some(&json!(1e21))), "1e+21");
        assert_eq!(display_text(Some(&json!(-2.5e22))), "-2.5e+22");
        assert_eq!(display_text(Some(&json!(1.5e-7))), "1.5e-7");
        assert_eq!(display_text(Some(&json!(1e20))), "100000000000000000000");
        assert_eq!(display_text(Some(&json!(0.000001))), "0.000001");
        assert_eq!(display_text(Some(&json!(0.0))), "0");
    }

    #[test]
    fn test_display_text_missing_values() {
        assert_eq!(display_text(None), EMPTY_CELL);
        assert_eq!(display_text(Some(&Value::Null)), EMPTY_CELL);
        // empty string is a defined value
        assert_eq!(display_text(Some(&json!(""))), "");
    }

    #[test]
    fn test_display_text_non_scalar_is_coerced() {
        assert_eq!(display_text(Some(&json!([1, 2]))), "[1,2]");
    }

    #[test]
    fn test_record_from_pairs_keeps_order() {
        let record = record_from_pairs([
            ("zeta", json!(1)),
            ("alpha", json!(2)),
            ("mid", json!(3)),
        ]);
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
    }
}
