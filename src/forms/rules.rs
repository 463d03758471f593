//! Field validation rules
//!
//! Each rule is a pure check from a raw input string to either valid
//! or a human-readable message. A field's schema is an ordered rule
//! list; the first violated rule wins. Apart from `Required`, every
//! rule passes on empty input, so optional checks never double-report
//! a missing value.

/// A single declarative validation rule
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    /// Non-empty after trimming
    Required,
    /// Minimal shape check: local part, `@`, domain part
    Email,
    /// Parses as a number
    Number,
    /// Parses as a whole number
    Integer,
    /// Numeric lower bound (checked after `Number`/`Integer` parse)
    Min(f64),
    /// Exact membership in a fixed label set
    OneOf(&'static [&'static str]),
}

/// One form field: bag key, display label, ordered rules
#[derive(Debug, Clone, Copy)]
pub struct FieldSchema {
    pub name: &'static str,
    pub label: &'static str,
    pub rules: &'static [Rule],
}

/// Check one rule against a raw value. `Ok(())` means the rule holds.
pub fn check(rule: &Rule, label: &str, value: &str) -> Result<(), String> {
    let trimmed = value.trim();
    match rule {
        Rule::Required => {
            if trimmed.is_empty() {
                return Err(format!("{} is required", label));
            }
        }
        Rule::Email => {
            if trimmed.is_empty() {
                return Ok(());
            }
            let mut parts = trimmed.splitn(2, '@');
            let local = parts.next().unwrap_or_default();
            let domain = parts.next().unwrap_or_default();
            if local.is_empty() || domain.is_empty() || domain.contains('@') {
                return Err(format!("{} must be a valid email", label));
            }
        }
        Rule::Number => {
            if !trimmed.is_empty() && trimmed.parse::<f64>().is_err() {
                return Err(format!("{} must be a number", label));
            }
        }
        Rule::Integer => {
            if !trimmed.is_empty() && trimmed.parse::<i64>().is_err() {
                return Err(format!("{} must be a whole number", label));
            }
        }
        Rule::Min(min) => {
            if let Ok(number) = trimmed.parse::<f64>() {
                if number < *min {
                    return Err(format!("{} must be at least {}", label, min));
                }
            }
        }
        Rule::OneOf(options) => {
            if !trimmed.is_empty() && !options.contains(&trimmed) {
                return Err(format!("{} is not an allowed value", label));
            }
        }
    }
    Ok(())
}

/// Validate one field against its schema; first violated rule wins
pub fn validate_field(field: &FieldSchema, value: &str) -> Option<String> {
    field
        .rules
        .iter()
        .find_map(|rule| check(rule, field.label, value).err())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: FieldSchema = FieldSchema {
        name: "name",
        label: "Product name",
        rules: &[Rule::Required],
    };

    const PRICE: FieldSchema = FieldSchema {
        name: "price",
        label: "Price",
        rules: &[Rule::Required, Rule::Number, Rule::Min(0.0)],
    };

    const SIZE: FieldSchema = FieldSchema {
        name: "size",
        label: "Size",
        rules: &[Rule::Required, Rule::OneOf(&["XXS", "XS", "S"])],
    };

    #[test]
    fn required_rejects_blank_and_whitespace() {
        assert_eq!(
            validate_field(&NAME, ""),
            Some("Product name is required".to_string())
        );
        assert_eq!(
            validate_field(&NAME, "   "),
            Some("Product name is required".to_string())
        );
        assert_eq!(validate_field(&NAME, "Scarf"), None);
    }

    #[test]
    fn first_violated_rule_wins() {
        // Empty hits Required before Number gets a say
        assert_eq!(
            validate_field(&PRICE, ""),
            Some("Price is required".to_string())
        );
        assert_eq!(
            validate_field(&PRICE, "abc"),
            Some("Price must be a number".to_string())
        );
        assert_eq!(
            validate_field(&PRICE, "-1"),
            Some("Price must be at least 0".to_string())
        );
        assert_eq!(validate_field(&PRICE, "19.99"), None);
    }

    #[test]
    fn email_shape_check() {
        let email = FieldSchema {
            name: "email",
            label: "Email",
            rules: &[Rule::Required, Rule::Email],
        };
        assert!(validate_field(&email, "ops@example.com").is_none());
        assert_eq!(
            validate_field(&email, "nope"),
            Some("Email must be a valid email".to_string())
        );
        assert_eq!(
            validate_field(&email, "@example.com"),
            Some("Email must be a valid email".to_string())
        );
        assert_eq!(
            validate_field(&email, "ops@"),
            Some("Email must be a valid email".to_string())
        );
    }

    #[test]
    fn integer_rejects_fractions() {
        let quantity = FieldSchema {
            name: "quantity",
            label: "Quantity",
            rules: &[Rule::Required, Rule::Integer, Rule::Min(0.0)],
        };
        assert_eq!(
            validate_field(&quantity, "2.5"),
            Some("Quantity must be a whole number".to_string())
        );
        assert!(validate_field(&quantity, "3").is_none());
    }

    #[test]
    fn membership_is_exact() {
        assert!(validate_field(&SIZE, "XS").is_none());
        assert_eq!(
            validate_field(&SIZE, "xs"),
            Some("Size is not an allowed value".to_string())
        );
    }

    #[test]
    fn non_required_rules_pass_on_empty_input() {
        let optional = FieldSchema {
            name: "note",
            label: "Note",
            rules: &[Rule::Number],
        };
        assert!(validate_field(&optional, "").is_none());
    }
}
