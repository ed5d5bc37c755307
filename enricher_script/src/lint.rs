//! Document linting.
//!
//! Every command in a document is parsed and written back out. Commands whose
//! text differs from the canonical rendering are reported, as are ability,
//! skill, and tool names that neither the built-in tables nor the configured
//! house lists know about.

use enricher_data::{Ability, CommandOptions, OneOrMany, Skill};
use log::debug;
use serde::Serialize;
use variantly::Variantly;

use crate::config::EnricherConfig;
use crate::parser::{ParsedCommand, scan_commands};

/// What a lint finding is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Variantly)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum LintKind {
    /// The command does not match what its options serialize to.
    NonCanonical { found: String, canonical: String },
    /// A vocabulary value nobody recognizes.
    UnknownVocabulary { field: &'static str, value: String },
}

/// One problem found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LintFinding {
    pub start: usize,
    pub end: usize,
    pub text: String,
    #[serde(flatten)]
    pub kind: LintKind,
}

impl LintFinding {
    /// True when the finding should fail a lint run under `config`.
    pub fn is_failure(&self, config: &EnricherConfig) -> bool {
        match &self.kind {
            LintKind::NonCanonical { .. } => config.deny_noncanonical,
            LintKind::UnknownVocabulary { .. } => true,
        }
    }
}

/// Lint every command in `text`.
///
/// ```
/// use enricher_script::{EnricherConfig, lint_document};
///
/// let findings = lint_document("[[/check dex]] and [[/save dexterity]]", &EnricherConfig::default());
/// assert_eq!(findings.len(), 1);
/// assert!(findings[0].kind.is_non_canonical());
/// ```
pub fn lint_document(text: &str, config: &EnricherConfig) -> Vec<LintFinding> {
    let mut findings = Vec::new();
    for command in scan_commands(text) {
        let canonical = command.to_command_text();
        if canonical != command.original_text {
            findings.push(finding(
                &command,
                LintKind::NonCanonical {
                    found: command.original_text.clone(),
                    canonical,
                },
            ));
        }
        for (field, value) in unknown_vocabulary(&command.options, config) {
            findings.push(finding(&command, LintKind::UnknownVocabulary { field, value }));
        }
    }
    debug!("lint produced {} finding(s)", findings.len());
    findings
}

fn finding(command: &ParsedCommand, kind: LintKind) -> LintFinding {
    LintFinding {
        start: command.start,
        end: command.end,
        text: command.original_text.clone(),
        kind,
    }
}

fn values(field: Option<&OneOrMany>) -> Vec<&str> {
    field.map(OneOrMany::values).unwrap_or_default()
}

fn unknown_vocabulary(options: &CommandOptions, config: &EnricherConfig) -> Vec<(&'static str, String)> {
    let known_ability = |a: &str| Ability::lookup(a).is_some() || config.accepts_ability(a);
    let known_skill = |s: &str| Skill::lookup(s).is_some() || config.accepts_skill(s);

    let mut unknown = Vec::new();
    match options {
        CommandOptions::Check(check) => {
            if let Some(ability) = check.ability.as_deref() {
                if !known_ability(ability) {
                    unknown.push(("ability", ability.to_string()));
                }
            }
            for skill in values(check.skill.as_ref()) {
                if !known_skill(skill) {
                    unknown.push(("skill", skill.to_string()));
                }
            }
            for tool in values(check.tool.as_ref()) {
                if config.accepts_tool(tool) == Some(false) {
                    unknown.push(("tool", tool.to_string()));
                }
            }
        },
        CommandOptions::Save(save) => {
            for ability in values(save.ability.as_ref()) {
                if !known_ability(ability) {
                    unknown.push(("ability", ability.to_string()));
                }
            }
        },
        _ => {},
    }
    unknown
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_document_is_clean() {
        let text = "<p>[[/check dexterity]] &Reference[prone] [[/damage 2d6 fire]]</p>";
        assert!(lint_document(text, &EnricherConfig::default()).is_empty());
    }

    #[test]
    fn house_skills_silence_unknown_vocabulary() {
        let text = "[[/skill sanity]]";
        let findings = lint_document(text, &EnricherConfig::default());
        assert_eq!(findings.len(), 1);
        assert_eq!(
            findings[0].kind,
            LintKind::UnknownVocabulary {
                field: "skill",
                value: "sanity".into()
            }
        );
        let config = EnricherConfig {
            house_skills: vec!["sanity".into()],
            ..EnricherConfig::default()
        };
        assert!(lint_document(text, &config).is_empty());
    }

    #[test]
    fn second_ability_surfaces_as_unknown_skill() {
        let findings = lint_document("[[/check dexterity strength]]", &EnricherConfig::default());
        assert!(findings.contains(&LintFinding {
            start: 0,
            end: 29,
            text: "[[/check dexterity strength]]".into(),
            kind: LintKind::UnknownVocabulary {
                field: "skill",
                value: "strength".into()
            },
        }));
    }

    #[test]
    fn tools_only_checked_when_configured() {
        let text = "[[/tool tool=lute]]";
        assert!(lint_document(text, &EnricherConfig::default()).is_empty());
        let config = EnricherConfig {
            house_tools: vec!["thieves-tools".into()],
            ..EnricherConfig::default()
        };
        let findings = lint_document(text, &config);
        assert_eq!(findings.len(), 1);
        assert!(findings[0].kind.is_unknown_vocabulary());
        assert!(findings[0].is_failure(&config));
    }

    #[test]
    fn noncanonical_fails_only_when_denied() {
        let findings = lint_document("[[/check str]]", &EnricherConfig::default());
        assert_eq!(
            findings[0].kind,
            LintKind::NonCanonical {
                found: "[[/check str]]".into(),
                canonical: "[[/check strength]]".into()
            }
        );
        assert!(!findings[0].is_failure(&EnricherConfig::default()));
        let strict = EnricherConfig {
            deny_noncanonical: true,
            ..EnricherConfig::default()
        };
        assert!(findings[0].is_failure(&strict));
    }
}
