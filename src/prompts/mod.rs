//! Static prompt catalog.
//!
//! Templates are fixed at compile time and keyed by (document kind, domain).
//! Each template contains exactly one `[USER_IDEA]` substitution marker for
//! the submission's idea text. A `(kind, domain)` pair without a registered
//! entry is a lookup failure, never a default.

use anyhow::{bail, Result};

use crate::models::{DocumentKind, Domain};

/// Substitution marker for the idea text.
pub const IDEA_MARKER: &str = "[USER_IDEA]";

struct TemplateEntry {
    kind: DocumentKind,
    domain: Option<Domain>,
    text: &'static str,
}

macro_rules! entry {
    ($kind:ident, $domain:ident, $file:literal) => {
        TemplateEntry {
            kind: DocumentKind::$kind,
            domain: Some(Domain::$domain),
            text: include_str!(concat!("templates/", $file)),
        }
    };
    ($kind:ident, $file:literal) => {
        TemplateEntry {
            kind: DocumentKind::$kind,
            domain: None,
            text: include_str!(concat!("templates/", $file)),
        }
    };
}

const TEMPLATES: &[TemplateEntry] = &[
    // Domain-agnostic templates, used when the submission carries no domain.
    entry!(Requirements, "requirements_generic.txt"),
    entry!(Technical, "technical_generic.txt"),
    entry!(Lifecycle, "lifecycle_generic.txt"),
    // Requirements documents per vertical.
    entry!(Requirements, SoftwareTechnology, "requirements_software_technology.txt"),
    entry!(Requirements, HealthcareBiotech, "requirements_healthcare_biotech.txt"),
    entry!(Requirements, RenewableEnergy, "requirements_renewable_energy.txt"),
    entry!(Requirements, FinancialServices, "requirements_financial_services.txt"),
    entry!(Requirements, AdvancedManufacturing, "requirements_advanced_manufacturing.txt"),
    entry!(Requirements, AiRobotics, "requirements_ai_robotics.txt"),
    // Technical design documents per vertical.
    entry!(Technical, SoftwareTechnology, "technical_software_technology.txt"),
    entry!(Technical, HealthcareBiotech, "technical_healthcare_biotech.txt"),
    entry!(Technical, RenewableEnergy, "technical_renewable_energy.txt"),
    entry!(Technical, FinancialServices, "technical_financial_services.txt"),
    entry!(Technical, AdvancedManufacturing, "technical_advanced_manufacturing.txt"),
    entry!(Technical, AiRobotics, "technical_ai_robotics.txt"),
    // Product lifecycle documents per vertical.
    entry!(Lifecycle, SoftwareTechnology, "lifecycle_software_technology.txt"),
    entry!(Lifecycle, HealthcareBiotech, "lifecycle_healthcare_biotech.txt"),
    entry!(Lifecycle, RenewableEnergy, "lifecycle_renewable_energy.txt"),
    entry!(Lifecycle, FinancialServices, "lifecycle_financial_services.txt"),
    entry!(Lifecycle, AdvancedManufacturing, "lifecycle_advanced_manufacturing.txt"),
    entry!(Lifecycle, AiRobotics, "lifecycle_ai_robotics.txt"),
];

/// Look up the template for a (kind, domain) pair.
///
/// `None` for `domain` selects the generic template for the kind. Returns
/// `None` when no entry is registered for the pair.
pub fn resolve(kind: DocumentKind, domain: Option<Domain>) -> Option<&'static str> {
    TEMPLATES
        .iter()
        .find(|t| t.kind == kind && t.domain == domain)
        .map(|t| t.text)
}

/// Interpolate the idea text at the template's substitution marker.
///
/// The marker is replaced verbatim; the rest of the template is untouched.
pub fn render(template: &str, idea: &str) -> String {
    template.replacen(IDEA_MARKER, idea, 1)
}

/// Verify every registered template carries the marker exactly once.
///
/// Called at startup so a malformed template fails the process immediately
/// instead of surfacing at request time.
pub fn validate_catalog() -> Result<()> {
    for t in TEMPLATES {
        let count = t.text.matches(IDEA_MARKER).count();
        if count != 1 {
            bail!(
                "template ({}, {:?}) contains {} '{}' markers, expected exactly 1",
                t.kind.as_str(),
                t.domain.map(|d| d.as_str()),
                count,
                IDEA_MARKER
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_validates() {
        validate_catalog().unwrap();
    }

    #[test]
    fn every_kind_domain_pair_is_registered() {
        for kind in DocumentKind::ALL {
            assert!(resolve(kind, None).is_some(), "missing generic {kind:?}");
            for domain in Domain::ALL {
                assert!(
                    resolve(kind, Some(domain)).is_some(),
                    "missing ({kind:?}, {domain:?})"
                );
            }
        }
    }

    #[test]
    fn resolve_selects_the_vertical_template() {
        let template =
            resolve(DocumentKind::Requirements, Some(Domain::HealthcareBiotech)).unwrap();
        assert!(template.contains("Healthcare and Biotech"));

        let generic = resolve(DocumentKind::Requirements, None).unwrap();
        assert!(!generic.contains("Healthcare and Biotech"));
    }

    #[test]
    fn render_substitutes_idea_at_marker() {
        let rendered = render("Plan this: [USER_IDEA]\nEnd.", "a meal-planning app");
        assert_eq!(rendered, "Plan this: a meal-planning app\nEnd.");
    }

    #[test]
    fn render_leaves_rest_of_template_untouched() {
        let template = resolve(DocumentKind::Technical, Some(Domain::SoftwareTechnology)).unwrap();
        let rendered = render(template, "an inventory tracker");
        assert!(rendered.contains("an inventory tracker"));
        assert!(!rendered.contains(IDEA_MARKER));
        // Everything outside the marker is byte-identical.
        let (before, after) = template.split_once(IDEA_MARKER).unwrap();
        assert!(rendered.starts_with(before));
        assert!(rendered.ends_with(after));
    }
}
