/// Plural category of a count under a locale's rules.
///
/// Only the categories the supported locales distinguish; `Few` covers the
/// Slavic 2–4 form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluralForm {
    One,
    Few,
    Other,
}

/// Select the plural form for a cardinal count.
///
/// Slovak (and Czech): 1 → one, 2–4 → few, 0 or ≥5 → other.
/// Anything else falls back to English rules: 1 → one, else other.
pub fn plural_form(locale: &str, count: usize) -> PluralForm {
    match locale {
        "sk" | "cs" => match count {
            1 => PluralForm::One,
            2..=4 => PluralForm::Few,
            _ => PluralForm::Other,
        },
        _ => {
            if count == 1 {
                PluralForm::One
            } else {
                PluralForm::Other
            }
        }
    }
}

/// The "items left" label for the given pending count.
pub fn items_left_label(locale: &str, pending: usize) -> String {
    match locale {
        "sk" | "cs" => match plural_form(locale, pending) {
            PluralForm::One => "Zostáva 1 úloha".to_string(),
            PluralForm::Few => format!("Zostávajú {} úlohy", pending),
            PluralForm::Other => format!("Zostáva {} úloh", pending),
        },
        _ => match plural_form(locale, pending) {
            PluralForm::One => "1 item left".to_string(),
            _ => format!("{} items left", pending),
        },
    }
}
