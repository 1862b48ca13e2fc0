use std::sync::OnceLock;

use regex::Regex;

static PHONE_RE: OnceLock<Regex> = OnceLock::new();
static VISIT_TIME_RE: OnceLock<Regex> = OnceLock::new();

fn phone_re() -> &'static Regex {
    PHONE_RE.get_or_init(|| Regex::new(r"^\+?[0-9]{7,15}$").expect("valid phone regex"))
}

fn visit_time_re() -> &'static Regex {
    VISIT_TIME_RE.get_or_init(|| {
        Regex::new(r"(?i)^(0?[1-9]|1[0-2]):[0-5][0-9]\s?(AM|PM)$").expect("valid visit time regex")
    })
}

/// Optional leading `+` and 7 to 15 digits once all whitespace is removed.
pub fn is_valid_phone(phone: &str) -> bool {
    let plain: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    phone_re().is_match(&plain)
}

/// 12-hour clock, `H:MM` or `HH:MM`, then an optional space and AM/PM in any case.
pub fn is_valid_visit_time(time: &str) -> bool {
    visit_time_re().is_match(time.trim())
}
