//! Form validation.
//!
//! Two layers: a per-field validator used by individual inputs, and a
//! whole-form validator run at submission. Their rules overlap but are not
//! identical. The whole-form telephone rule additionally requires at least
//! ten digits; both behaviors are kept and tested separately.

pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    let clean = |s: &str| !s.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == '@');
    if !clean(local) || !clean(domain) {
        return false;
    }
    // the domain needs an interior dot: "a@b.c" yes, "a@.c" / "a@b." no
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i < domain.len() - 1)
}

/// Per-field telephone rule: charset only.
pub fn is_valid_phone(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '+' | '(' | ')'))
}

/// Whole-form telephone rule: charset plus at least ten digit characters
/// once everything else is stripped.
pub fn is_valid_phone_strict(value: &str) -> bool {
    is_valid_phone(value) && value.chars().filter(char::is_ascii_digit).count() >= 10
}

pub const MIN_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    Password,
    /// Must equal the sibling `password` field.
    ConfirmPassword,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldSpec {
    /// Control name, e.g. `confirm_password`.
    pub name: &'static str,
    /// Human label used in per-field messages.
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldSpec {
    pub fn required(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: true,
        }
    }

    pub fn optional(name: &'static str, label: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            label,
            kind,
            required: false,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct FieldError {
    pub name: &'static str,
    pub message: String,
}

fn type_error(kind: FieldKind, value: &str, password: &str, strict_phone: bool) -> Option<String> {
    let message = match kind {
        FieldKind::Text => return None,
        FieldKind::Email => {
            if is_valid_email(value) {
                return None;
            }
            "Please enter a valid email address"
        }
        FieldKind::Tel => {
            let ok = if strict_phone {
                is_valid_phone_strict(value)
            } else {
                is_valid_phone(value)
            };
            if ok {
                return None;
            }
            "Please enter a valid phone number"
        }
        FieldKind::Password => {
            if value.chars().count() >= MIN_PASSWORD_LEN {
                return None;
            }
            "Password must be at least 8 characters long"
        }
        FieldKind::ConfirmPassword => {
            if value == password {
                return None;
            }
            "Passwords do not match"
        }
    };
    Some(message.to_string())
}

/// Per-field validation (component level, simple telephone rule). Returns
/// the error message for this field, or `None` when it passes. Empty
/// non-required fields always pass.
pub fn validate_field(spec: &FieldSpec, value: &str, password: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return spec
            .required
            .then(|| format!("{} is required", spec.label));
    }
    type_error(spec.kind, value, password, false)
}

/// Whole-form validation (controller level, strict telephone rule). Every
/// failing field is reported; the caller cancels submission when the list
/// is non-empty.
pub fn validate_form(fields: &[(FieldSpec, String)]) -> Vec<FieldError> {
    let password = fields
        .iter()
        .find(|(spec, _)| spec.kind == FieldKind::Password)
        .map(|(_, value)| value.clone())
        .unwrap_or_default();

    fields
        .iter()
        .filter_map(|(spec, value)| {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return spec.required.then(|| FieldError {
                    name: spec.name,
                    message: "This field is required".to_string(),
                });
            }
            type_error(spec.kind, trimmed, &password, true).map(|message| FieldError {
                name: spec.name,
                message,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_shapes() {
        assert!(is_valid_email("user@example.com"));
        assert!(is_valid_email("a@b.c.d"));
        assert!(!is_valid_email("user"));
        assert!(!is_valid_email("user@"));
        assert!(!is_valid_email("user@domain"));
        assert!(!is_valid_email("user@.com"));
        assert!(!is_valid_email("user@domain."));
        assert!(!is_valid_email("us er@domain.com"));
        assert!(!is_valid_email("user@@domain.com"));
    }

    #[test]
    fn phone_rules_diverge_on_digit_count() {
        // nine digits: component rule accepts, whole-form rule rejects
        let nine_digits = "(02) 123-4567";
        assert!(is_valid_phone(nine_digits));
        assert!(!is_valid_phone_strict(nine_digits));

        let full = "+20 100 123 4567";
        assert!(is_valid_phone(full));
        assert!(is_valid_phone_strict(full));

        assert!(!is_valid_phone("call me"));
        assert!(!is_valid_phone(""));
    }

    #[test]
    fn short_password_yields_exactly_one_error() {
        let spec = FieldSpec::required("password", "Password", FieldKind::Password);
        let error = validate_field(&spec, "short", "");
        assert_eq!(
            error,
            Some("Password must be at least 8 characters long".to_string())
        );

        let errors = validate_form(&[(spec, "short".to_string())]);
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].message,
            "Password must be at least 8 characters long"
        );
    }

    #[test]
    fn confirm_password_mismatch_regardless_of_field_validity() {
        let fields = vec![
            (
                FieldSpec::required("password", "Password", FieldKind::Password),
                "hunter2hunter2".to_string(),
            ),
            (
                FieldSpec::required(
                    "confirm_password",
                    "Confirm Password",
                    FieldKind::ConfirmPassword,
                ),
                "hunter2hunter3".to_string(),
            ),
        ];
        let errors = validate_form(&fields);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].name, "confirm_password");
        assert_eq!(errors[0].message, "Passwords do not match");
    }

    #[test]
    fn required_fields_reported_with_form_message() {
        let fields = vec![(
            FieldSpec::required("name", "Full Name", FieldKind::Text),
            "   ".to_string(),
        )];
        let errors = validate_form(&fields);
        assert_eq!(errors[0].message, "This field is required");
    }

    #[test]
    fn per_field_required_message_uses_the_label() {
        let spec = FieldSpec::required("name", "Full Name", FieldKind::Text);
        assert_eq!(
            validate_field(&spec, "", ""),
            Some("Full Name is required".to_string())
        );
    }

    #[test]
    fn optional_empty_fields_pass() {
        let spec = FieldSpec::optional("phone", "Phone", FieldKind::Tel);
        assert_eq!(validate_field(&spec, "", ""), None);
        assert!(validate_form(&[(spec, String::new())]).is_empty());
    }

    #[test]
    fn valid_form_has_no_errors() {
        let fields = vec![
            (
                FieldSpec::required("name", "Full Name", FieldKind::Text),
                "Ahmed Hassan".to_string(),
            ),
            (
                FieldSpec::required("email", "Email", FieldKind::Email),
                "ahmed@example.com".to_string(),
            ),
            (
                FieldSpec::required("phone", "Phone", FieldKind::Tel),
                "+20 100 123 4567".to_string(),
            ),
        ];
        assert!(validate_form(&fields).is_empty());
    }
}
