//! Prompt catalog: analysis-type and cold-mail-style instruction templates.

pub mod prompts;

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Kinds of résumé analysis a user can request. Several may be selected in one action.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisType {
    #[default]
    CompleteAnalysis,
    AtsOptimization,
    SkillsGapAnalysis,
    QuickSummary,
}

impl AnalysisType {
    pub const ALL: [AnalysisType; 4] = [
        AnalysisType::CompleteAnalysis,
        AnalysisType::AtsOptimization,
        AnalysisType::SkillsGapAnalysis,
        AnalysisType::QuickSummary,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            AnalysisType::CompleteAnalysis => "Complete Analysis",
            AnalysisType::AtsOptimization => "ATS Optimization",
            AnalysisType::SkillsGapAnalysis => "Skills Gap Analysis",
            AnalysisType::QuickSummary => "Quick Summary",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            AnalysisType::CompleteAnalysis => "complete_analysis",
            AnalysisType::AtsOptimization => "ats_optimization",
            AnalysisType::SkillsGapAnalysis => "skills_gap_analysis",
            AnalysisType::QuickSummary => "quick_summary",
        }
    }

    /// Matches the display name or the snake_case slug, ignoring case and leading decoration.
    pub fn from_key(key: &str) -> Option<AnalysisType> {
        let key = strip_decoration(key);
        AnalysisType::ALL.into_iter().find(|t| {
            key.eq_ignore_ascii_case(t.display_name()) || key.eq_ignore_ascii_case(t.slug())
        })
    }

    /// Unknown keys resolve to the default type rather than failing.
    pub fn resolve(key: &str) -> AnalysisType {
        AnalysisType::from_key(key).unwrap_or_default()
    }
}

/// Tone of a generated outreach email.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColdMailStyle {
    #[default]
    Professional,
    Friendly,
    Enthusiastic,
}

impl ColdMailStyle {
    pub const ALL: [ColdMailStyle; 3] = [
        ColdMailStyle::Professional,
        ColdMailStyle::Friendly,
        ColdMailStyle::Enthusiastic,
    ];

    pub fn display_name(self) -> &'static str {
        match self {
            ColdMailStyle::Professional => "Professional and Straightforward",
            ColdMailStyle::Friendly => "Friendly Yet Professional",
            ColdMailStyle::Enthusiastic => "Enthusiastic and Curious",
        }
    }

    fn slug(self) -> &'static str {
        match self {
            ColdMailStyle::Professional => "professional",
            ColdMailStyle::Friendly => "friendly",
            ColdMailStyle::Enthusiastic => "enthusiastic",
        }
    }

    pub fn from_key(key: &str) -> Option<ColdMailStyle> {
        let key = strip_decoration(key);
        ColdMailStyle::ALL.into_iter().find(|s| {
            key.eq_ignore_ascii_case(s.display_name()) || key.eq_ignore_ascii_case(s.slug())
        })
    }

    pub fn resolve(key: &str) -> ColdMailStyle {
        ColdMailStyle::from_key(key).unwrap_or_default()
    }
}

/// UI selectors historically prefixed options with an emoji ("📑 Professional ...").
fn strip_decoration(key: &str) -> &str {
    key.trim_start_matches(|c: char| !c.is_alphanumeric()).trim()
}

#[derive(Debug, Clone, Serialize)]
pub struct MailTemplate {
    pub description: &'static str,
    pub email_template: &'static str,
}

/// Immutable lookup of instruction templates, with default entries for unknown selectors.
#[derive(Debug, Clone)]
pub struct PromptCatalog {
    analysis: HashMap<AnalysisType, &'static str>,
    mail: HashMap<ColdMailStyle, MailTemplate>,
    default_analysis: &'static str,
    default_mail: MailTemplate,
}

impl PromptCatalog {
    pub fn new(default_analysis: &'static str, default_mail: MailTemplate) -> Self {
        Self {
            analysis: HashMap::new(),
            mail: HashMap::new(),
            default_analysis,
            default_mail,
        }
    }

    pub fn with_analysis(mut self, analysis_type: AnalysisType, template: &'static str) -> Self {
        self.analysis.insert(analysis_type, template);
        self
    }

    pub fn with_mail(mut self, style: ColdMailStyle, template: MailTemplate) -> Self {
        self.mail.insert(style, template);
        self
    }

    pub fn builtin() -> Self {
        Self::new(
            prompts::COMPLETE_ANALYSIS,
            MailTemplate {
                description: prompts::PROFESSIONAL_DESCRIPTION,
                email_template: prompts::PROFESSIONAL_TEMPLATE,
            },
        )
        .with_analysis(AnalysisType::CompleteAnalysis, prompts::COMPLETE_ANALYSIS)
        .with_analysis(AnalysisType::AtsOptimization, prompts::ATS_OPTIMIZATION)
        .with_analysis(AnalysisType::SkillsGapAnalysis, prompts::SKILLS_GAP_ANALYSIS)
        .with_analysis(AnalysisType::QuickSummary, prompts::QUICK_SUMMARY)
        .with_mail(
            ColdMailStyle::Professional,
            MailTemplate {
                description: prompts::PROFESSIONAL_DESCRIPTION,
                email_template: prompts::PROFESSIONAL_TEMPLATE,
            },
        )
        .with_mail(
            ColdMailStyle::Friendly,
            MailTemplate {
                description: prompts::FRIENDLY_DESCRIPTION,
                email_template: prompts::FRIENDLY_TEMPLATE,
            },
        )
        .with_mail(
            ColdMailStyle::Enthusiastic,
            MailTemplate {
                description: prompts::ENTHUSIASTIC_DESCRIPTION,
                email_template: prompts::ENTHUSIASTIC_TEMPLATE,
            },
        )
    }

    pub fn template_for(&self, analysis_type: AnalysisType) -> &'static str {
        self.analysis
            .get(&analysis_type)
            .copied()
            .unwrap_or(self.default_analysis)
    }

    pub fn mail_template_for(&self, style: ColdMailStyle) -> &MailTemplate {
        self.mail.get(&style).unwrap_or(&self.default_mail)
    }
}

impl Default for PromptCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_analysis_type_from_display_name_and_slug() {
        assert_eq!(
            AnalysisType::from_key("Quick Summary"),
            Some(AnalysisType::QuickSummary)
        );
        assert_eq!(
            AnalysisType::from_key("ats_optimization"),
            Some(AnalysisType::AtsOptimization)
        );
        assert_eq!(
            AnalysisType::from_key("🎯 Skills Gap Analysis"),
            Some(AnalysisType::SkillsGapAnalysis)
        );
        assert_eq!(AnalysisType::from_key("Horoscope"), None);
    }

    #[test]
    fn test_unknown_selectors_resolve_to_defaults() {
        assert_eq!(AnalysisType::resolve("Horoscope"), AnalysisType::CompleteAnalysis);
        assert_eq!(ColdMailStyle::resolve("Sarcastic"), ColdMailStyle::Professional);
    }

    #[test]
    fn test_cold_mail_style_accepts_decorated_keys() {
        assert_eq!(
            ColdMailStyle::from_key("🤝 Friendly Yet Professional"),
            Some(ColdMailStyle::Friendly)
        );
        assert_eq!(
            ColdMailStyle::from_key("ENTHUSIASTIC"),
            Some(ColdMailStyle::Enthusiastic)
        );
    }

    #[test]
    fn test_builtin_catalog_has_every_template() {
        let catalog = PromptCatalog::builtin();
        for t in AnalysisType::ALL {
            assert!(!catalog.template_for(t).trim().is_empty(), "{t:?}");
        }
        for s in ColdMailStyle::ALL {
            let mail = catalog.mail_template_for(s);
            assert!(!mail.description.is_empty());
            assert!(mail.email_template.starts_with("Subject:"));
            assert!(mail.email_template.contains("[Your Name]"));
        }
    }

    #[test]
    fn test_scoring_templates_lead_with_match_score() {
        let catalog = PromptCatalog::builtin();
        for t in [AnalysisType::CompleteAnalysis, AnalysisType::QuickSummary] {
            let template = catalog.template_for(t);
            let first_section = template
                .lines()
                .find(|l| l.starts_with("1."))
                .unwrap_or_default();
            assert!(
                first_section.contains("Match Score (%)"),
                "{t:?} section 1 must be the match score: {first_section}"
            );
        }
    }

    #[test]
    fn test_missing_entries_fall_back_to_defaults() {
        let catalog = PromptCatalog::new(
            "score it",
            MailTemplate {
                description: "plain",
                email_template: "Subject: hi [Your Name]",
            },
        );
        assert_eq!(catalog.template_for(AnalysisType::QuickSummary), "score it");
        assert_eq!(
            catalog.mail_template_for(ColdMailStyle::Friendly).description,
            "plain"
        );
    }
}
