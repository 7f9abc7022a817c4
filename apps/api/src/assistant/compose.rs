//! Prompt composition. Bundles are rebuilt per request and never cached.

use crate::catalog::{prompts, AnalysisType, ColdMailStyle, PromptCatalog};
use crate::llm_client::PromptBundle;
use crate::localization::{Language, LocalizationTable};

const ANALYSIS_HEADING: &str = "Analysis Requirements";
const MAIL_HEADING: &str = "Email Template";

/// Prompt bundle for one analysis type in `language`.
///
/// Languages without a locale entry are composed entirely in the default language, so
/// the directive and the persona never disagree.
pub fn analysis_bundle(
    locales: &LocalizationTable,
    catalog: &PromptCatalog,
    language: Language,
    analysis_type: AnalysisType,
) -> PromptBundle {
    let language = locales.effective_language(language);
    let variant = locales.prompts_for(language);
    let name = language.display_name();

    PromptBundle {
        system_text: variant.system_msg.to_string(),
        user_instruction_text: variant.user_msg.to_string(),
        task_heading: ANALYSIS_HEADING.to_string(),
        task_template: catalog.template_for(analysis_type).to_string(),
        result_prefix: variant.result_prefix.to_string(),
        inline_directive: format!("Analyze in {name}."),
        format_reminder: prompts::ANALYSIS_FORMAT_REMINDER.replace("{language}", name),
    }
}

/// Prompt bundle for a cold email in `style`. Mail output carries no result prefix.
pub fn mail_bundle(
    locales: &LocalizationTable,
    catalog: &PromptCatalog,
    language: Language,
    style: ColdMailStyle,
) -> PromptBundle {
    let language = locales.effective_language(language);
    let variant = locales.prompts_for(language);
    let name = language.display_name();

    PromptBundle {
        system_text: variant.mail_system_msg.to_string(),
        user_instruction_text: variant.mail_user_msg.to_string(),
        task_heading: MAIL_HEADING.to_string(),
        task_template: catalog.mail_template_for(style).email_template.to_string(),
        result_prefix: String::new(),
        inline_directive: format!("{} Write the email in {name}.", variant.mail_user_msg),
        format_reminder: prompts::MAIL_FORMAT_REMINDER.replace("{language}", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::localization::LocaleEntry;

    fn fields(bundle: &PromptBundle) -> [(&'static str, &str); 7] {
        [
            ("system_text", bundle.system_text.as_str()),
            ("user_instruction_text", bundle.user_instruction_text.as_str()),
            ("task_heading", bundle.task_heading.as_str()),
            ("task_template", bundle.task_template.as_str()),
            ("result_prefix", bundle.result_prefix.as_str()),
            ("inline_directive", bundle.inline_directive.as_str()),
            ("format_reminder", bundle.format_reminder.as_str()),
        ]
    }

    #[test]
    fn test_every_language_and_analysis_type_composes_complete_bundle() {
        let locales = LocalizationTable::builtin();
        let catalog = PromptCatalog::builtin();
        for language in Language::ALL {
            for analysis_type in AnalysisType::ALL {
                let bundle = analysis_bundle(&locales, &catalog, language, analysis_type);
                for (field, value) in fields(&bundle) {
                    assert!(
                        !value.trim().is_empty(),
                        "{field} empty for {language:?}/{analysis_type:?}"
                    );
                    assert!(
                        !value.contains("{language}"),
                        "{field} has unreplaced placeholder for {language:?}/{analysis_type:?}"
                    );
                }
                assert!(bundle.inline_directive.contains(language.display_name()));
            }
        }
    }

    #[test]
    fn test_every_language_and_mail_style_composes_complete_bundle() {
        let locales = LocalizationTable::builtin();
        let catalog = PromptCatalog::builtin();
        for language in Language::ALL {
            for style in ColdMailStyle::ALL {
                let bundle = mail_bundle(&locales, &catalog, language, style);
                for (field, value) in fields(&bundle) {
                    assert!(
                        !value.contains("{language}"),
                        "{field} has unreplaced placeholder for {language:?}/{style:?}"
                    );
                    if field == "result_prefix" {
                        assert!(value.is_empty(), "mail prefix set for {language:?}/{style:?}");
                    } else {
                        assert!(!value.trim().is_empty(), "{field} empty for {language:?}/{style:?}");
                    }
                }
                assert!(bundle.format_reminder.contains(language.display_name()));
            }
        }
    }

    #[test]
    fn test_analysis_bundle_is_localized() {
        let locales = LocalizationTable::builtin();
        let catalog = PromptCatalog::builtin();
        let bundle = analysis_bundle(&locales, &catalog, Language::Telugu, AnalysisType::QuickSummary);

        assert_eq!(bundle.system_text, locales.prompts_for(Language::Telugu).system_msg);
        assert_eq!(bundle.result_prefix, locales.prompts_for(Language::Telugu).result_prefix);
        assert_eq!(bundle.task_template, prompts::QUICK_SUMMARY);
        assert_eq!(bundle.inline_directive, "Analyze in తెలుగు.");
        assert!(bundle.format_reminder.contains("Keep the analysis in తెలుగు"));
        assert!(!bundle.format_reminder.contains("{language}"));
    }

    #[test]
    fn test_language_without_entry_uses_default_throughout() {
        let locales = LocalizationTable::builtin();
        let english_only = LocalizationTable::new(
            Language::English,
            LocaleEntry {
                labels: locales.labels_for(Language::English).clone(),
                prompts: locales.prompts_for(Language::English).clone(),
                errors: locales.error_messages_for(Language::English).clone(),
            },
        );
        let catalog = PromptCatalog::builtin();
        let bundle = analysis_bundle(&english_only, &catalog, Language::Hindi, AnalysisType::CompleteAnalysis);

        assert_eq!(bundle.inline_directive, "Analyze in English.");
        assert_eq!(bundle.result_prefix, "Analysis Results:\n\n");
    }

    #[test]
    fn test_mail_bundle_uses_style_template_and_no_prefix() {
        let locales = LocalizationTable::builtin();
        let catalog = PromptCatalog::builtin();
        let bundle = mail_bundle(&locales, &catalog, Language::English, ColdMailStyle::Friendly);

        assert_eq!(bundle.task_template, prompts::FRIENDLY_TEMPLATE);
        assert_eq!(bundle.task_heading, MAIL_HEADING);
        assert!(bundle.result_prefix.is_empty());
        assert!(bundle.inline_directive.ends_with("Write the email in English."));
        assert_eq!(bundle.system_text, locales.prompts_for(Language::English).mail_system_msg);
    }
}
