//! Localization table: per-language UI labels, prompt text and user-facing error messages.
//!
//! Every lookup resolves through the table's default entry when a language has no entry
//! of its own, so callers never see a missing-language error.

mod locales;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Languages the assistant can analyze and answer in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    #[default]
    English,
    Hindi,
    Telugu,
}

impl Language {
    pub const ALL: [Language; 3] = [Language::English, Language::Hindi, Language::Telugu];

    /// Native display name. Also the name spelled out to the model ("Analyze in हिंदी").
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Telugu => "తెలుగు",
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Telugu => "te",
        }
    }

    /// Accepts the display name, the ISO code or the serde name, case-insensitively.
    pub fn from_key(key: &str) -> Option<Language> {
        let key = key.trim();
        Language::ALL.into_iter().find(|lang| {
            key == lang.display_name()
                || key.eq_ignore_ascii_case(lang.code())
                || key.eq_ignore_ascii_case(&format!("{lang:?}"))
        })
    }

    /// Like `from_key`, but unknown or empty keys resolve to the default language.
    pub fn resolve(key: Option<&str>) -> Language {
        key.and_then(Language::from_key).unwrap_or_default()
    }
}

/// UI labels shown around the analyzer form.
#[derive(Debug, Clone, Serialize)]
pub struct LabelSet {
    pub upload: &'static str,
    pub job_desc: &'static str,
    pub analyze: &'static str,
    pub results: &'static str,
}

/// Prompt text sent to the backends for one language.
#[derive(Debug, Clone)]
pub struct PromptVariant {
    pub system_msg: &'static str,
    pub user_msg: &'static str,
    pub result_prefix: &'static str,
    pub mail_system_msg: &'static str,
    pub mail_user_msg: &'static str,
}

/// User-safe failure messages. Raw provider errors never reach these.
#[derive(Debug, Clone)]
pub struct ErrorMessages {
    pub analysis: &'static str,
    pub unsupported_format: &'static str,
    pub extraction_failed: &'static str,
    pub backend_unavailable: &'static str,
}

#[derive(Debug, Clone)]
pub struct LocaleEntry {
    pub labels: LabelSet,
    pub prompts: PromptVariant,
    pub errors: ErrorMessages,
}

/// Immutable language → locale mapping with a guaranteed default entry.
#[derive(Debug, Clone)]
pub struct LocalizationTable {
    default_language: Language,
    default_entry: LocaleEntry,
    entries: HashMap<Language, LocaleEntry>,
}

impl LocalizationTable {
    /// Creates a table holding only the default entry.
    pub fn new(default_language: Language, default_entry: LocaleEntry) -> Self {
        Self {
            default_language,
            default_entry,
            entries: HashMap::new(),
        }
    }

    pub fn with_entry(mut self, language: Language, entry: LocaleEntry) -> Self {
        if language == self.default_language {
            self.default_entry = entry;
        } else {
            self.entries.insert(language, entry);
        }
        self
    }

    /// English, Hindi and Telugu, with English as the default.
    pub fn builtin() -> Self {
        Self::new(Language::English, locales::english())
            .with_entry(Language::Hindi, locales::hindi())
            .with_entry(Language::Telugu, locales::telugu())
    }

    pub fn has_entry(&self, language: Language) -> bool {
        language == self.default_language || self.entries.contains_key(&language)
    }

    /// The language lookups for `language` actually resolve to.
    pub fn effective_language(&self, language: Language) -> Language {
        if self.has_entry(language) {
            language
        } else {
            self.default_language
        }
    }

    fn entry(&self, language: Language) -> &LocaleEntry {
        self.entries.get(&language).unwrap_or(&self.default_entry)
    }

    pub fn labels_for(&self, language: Language) -> &LabelSet {
        &self.entry(language).labels
    }

    pub fn prompts_for(&self, language: Language) -> &PromptVariant {
        &self.entry(language).prompts
    }

    /// Generic analysis failure message.
    pub fn error_message_for(&self, language: Language) -> &'static str {
        self.entry(language).errors.analysis
    }

    pub fn error_messages_for(&self, language: Language) -> &ErrorMessages {
        &self.entry(language).errors
    }
}

impl Default for LocalizationTable {
    fn default() -> Self {
        Self::builtin()
    }
}
