//! EGP amount formatting, localized for the active language.

use api::prefs::language::Language;

/// Formats an EGP amount for display: `EGP 1,250.00` in English, Arabic-Indic
/// digits with the `ج.م.` suffix in Arabic.
pub fn format_egp(amount: f64, lang: Language) -> String {
    let formatted = group_thousands(amount);
    match lang {
        Language::En => format!("EGP {formatted}"),
        Language::Ar => format!("{} ج.م.", to_arabic_indic(&formatted)),
    }
}

/// Two decimal places with `,` thousands grouping on the integer part.
fn group_thousands(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}{grouped}.{frac:02}")
}

/// Maps ASCII digits and separators to their Arabic-Indic forms.
fn to_arabic_indic(s: &str) -> String {
    s.chars()
        .map(|ch| match ch {
            '0' => '٠',
            '1' => '١',
            '2' => '٢',
            '3' => '٣',
            '4' => '٤',
            '5' => '٥',
            '6' => '٦',
            '7' => '٧',
            '8' => '٨',
            '9' => '٩',
            ',' => '٬',
            '.' => '٫',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_formatting() {
        assert_eq!(format_egp(250.0, Language::En), "EGP 250.00");
        assert_eq!(format_egp(1250.5, Language::En), "EGP 1,250.50");
        assert_eq!(format_egp(1_000_000.0, Language::En), "EGP 1,000,000.00");
    }

    #[test]
    fn arabic_formatting_uses_arabic_indic_digits() {
        assert_eq!(format_egp(250.0, Language::Ar), "٢٥٠٫٠٠ ج.م.");
        assert_eq!(format_egp(1250.0, Language::Ar), "١٬٢٥٠٫٠٠ ج.م.");
    }

    #[test]
    fn rounds_to_two_decimals() {
        assert_eq!(group_thousands(0.005), "0.01");
        assert_eq!(group_thousands(99.999), "100.00");
    }
}
