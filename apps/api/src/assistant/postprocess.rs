//! Post-processing of raw backend text: match-score extraction and placeholder filling.
//!
//! Both functions are pure so that drift in a backend's output format shows up in these
//! tests instead of silently degrading every request.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// "Match Score" label (English, Hindi or Telugu), optional "(%)", markdown emphasis and
/// colon, then an ASCII integer percentage.
static RE_MATCH_SCORE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?i)(?:match[ \t]*score|मैच[ \t]*स्कोर|మ్యాచ్[ \t]*స్కోర్)",
        r"[^\S\n]*(?:\(%\))?[\s*_]*:?[\s*_]*([0-9]{1,3})[^\S\n]*%"
    ))
    .unwrap()
});

/// Finds the first labeled match score in `text`.
///
/// Returns `None` when no score line exists or the first one is above 100.
pub fn extract_match_score(text: &str) -> Option<f64> {
    let caps = RE_MATCH_SCORE.captures(text)?;
    let value: f64 = caps[1].parse().ok()?;
    (0.0..=100.0).contains(&value).then_some(value)
}

/// Optional personal details substituted into generated emails.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub university: Option<String>,
    pub linkedin: Option<String>,
    pub degree: Option<String>,
}

const NAME_TOKENS: &[&str] = &["[Your Name]", "[Your Full Name]"];
const EMAIL_TOKENS: &[&str] = &["[Your Email Address]"];
const PHONE_TOKENS: &[&str] = &["[Your Phone Number]"];
const UNIVERSITY_TOKENS: &[&str] = &["[Your College/University Name]"];
const LINKEDIN_TOKENS: &[&str] = &[
    "[LinkedIn Profile or Portfolio link]",
    "[LinkedIn Profile link or Portfolio]",
    "[LinkedIn Profile Link or Portfolio]",
];
const DEGREE_TOKENS: &[&str] = &["[Your Degree]"];

impl PersonalInfo {
    fn substitutions(&self) -> [(&'static [&'static str], Option<&str>); 6] {
        [
            (NAME_TOKENS, self.name.as_deref()),
            (EMAIL_TOKENS, self.email.as_deref()),
            (PHONE_TOKENS, self.phone.as_deref()),
            (UNIVERSITY_TOKENS, self.university.as_deref()),
            (LINKEDIN_TOKENS, self.linkedin.as_deref()),
            (DEGREE_TOKENS, self.degree.as_deref()),
        ]
    }
}

/// Replaces the bracketed personal-info tokens with the supplied values.
///
/// Blank or missing values leave their token untouched; no other text changes.
pub fn apply_personal_info(text: &str, info: &PersonalInfo) -> String {
    let mut filled = text.to_string();
    for (tokens, value) in info.substitutions() {
        let Some(value) = value.map(str::trim).filter(|v| !v.is_empty()) else {
            continue;
        };
        for token in tokens {
            filled = filled.replace(token, value);
        }
    }
    filled
}
