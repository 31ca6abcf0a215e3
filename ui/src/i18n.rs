//! The two static translation tables. A real i18n pipeline would load these
//! from files; for now the strings live here.

use api::prefs::language::Language;

/// Looks up `key` in the table for `lang`. Unknown keys fall back to the key
/// itself rather than failing.
pub fn tr(lang: Language, key: &'static str) -> &'static str {
    let translated = match lang {
        Language::En => english(key),
        Language::Ar => arabic(key),
    };
    translated.unwrap_or(key)
}

fn english(key: &str) -> Option<&'static str> {
    Some(match key {
        "welcome" => "Welcome to PrintHub Egypt",
        "search" => "Search for printing services...",
        "get_quote" => "Get Quote",
        "compare_quotes" => "Compare Quotes",
        "sign_in" => "Sign In",
        "sign_up" => "Sign Up",
        "dashboard" => "Dashboard",
        "services" => "Services",
        "vendors" => "Vendors",
        "about" => "About Us",
        "contact" => "Contact",
        "cart" => "Cart",
        "logout" => "Logout",
        _ => return None,
    })
}

fn arabic(key: &str) -> Option<&'static str> {
    Some(match key {
        "welcome" => "مرحباً بك في مركز الطباعة مصر",
        "search" => "ابحث عن خدمات الطباعة...",
        "get_quote" => "احصل على عرض سعر",
        "compare_quotes" => "قارن العروض",
        "sign_in" => "تسجيل الدخول",
        "sign_up" => "إنشاء حساب",
        "dashboard" => "لوحة التحكم",
        "services" => "الخدمات",
        "vendors" => "الموردون",
        "about" => "من نحن",
        "contact" => "اتصل بنا",
        "cart" => "السلة",
        "logout" => "تسجيل الخروج",
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translates_known_keys() {
        assert_eq!(tr(Language::En, "cart"), "Cart");
        assert_eq!(tr(Language::Ar, "cart"), "السلة");
    }

    #[test]
    fn unknown_key_falls_back_to_itself() {
        assert_eq!(tr(Language::En, "no_such_key"), "no_such_key");
        assert_eq!(tr(Language::Ar, "no_such_key"), "no_such_key");
    }

    #[test]
    fn both_tables_cover_the_same_keys() {
        for key in [
            "welcome", "search", "get_quote", "compare_quotes", "sign_in", "sign_up",
            "dashboard", "services", "vendors", "about", "contact", "cart", "logout",
        ] {
            assert!(english(key).is_some(), "en missing {key}");
            assert!(arabic(key).is_some(), "ar missing {key}");
        }
    }
}
