use std::collections::BTreeMap;

use super::super::catalog::{CatalogError, QuestionCatalog};
use super::super::domain::Rating;

/// One authored paragraph for a (dimension, rating) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateEntry {
    pub dimension: &'static str,
    pub rating: Rating,
    pub paragraph: &'static str,
}

/// Two-level lookup: dimension identifier, then rating, then paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackTemplates {
    paragraphs: BTreeMap<&'static str, BTreeMap<Rating, &'static str>>,
}

impl FeedbackTemplates {
    pub fn new<I>(entries: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = TemplateEntry>,
    {
        let mut paragraphs: BTreeMap<&'static str, BTreeMap<Rating, &'static str>> =
            BTreeMap::new();

        for entry in entries {
            let by_rating = paragraphs.entry(entry.dimension).or_default();
            if by_rating.insert(entry.rating, entry.paragraph).is_some() {
                return Err(CatalogError::DuplicateTemplate {
                    dimension: entry.dimension.to_string(),
                    rating: entry.rating,
                });
            }
        }

        Ok(Self { paragraphs })
    }

    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard_entries())
    }

    pub fn paragraph(&self, dimension: &str, rating: Rating) -> Option<&'static str> {
        self.paragraphs
            .get(dimension)
            .and_then(|by_rating| by_rating.get(&rating))
            .copied()
    }

    /// Requires one paragraph for every catalog dimension and rating, and nothing else.
    pub fn ensure_complete(&self, catalog: &QuestionCatalog) -> Result<(), CatalogError> {
        for dimension in catalog.dimensions() {
            for rating in Rating::ordered() {
                if self.paragraph(dimension.id, rating).is_none() {
                    return Err(CatalogError::MissingTemplate {
                        dimension: dimension.id.to_string(),
                        rating,
                    });
                }
            }
        }

        if let Some(stray) = self
            .paragraphs
            .keys()
            .find(|id| catalog.dimension(id).is_none())
        {
            return Err(CatalogError::UnknownTemplateDimension(stray.to_string()));
        }

        Ok(())
    }
}

/// Opening phrase for the overall assessment sentence.
pub const fn overall_phrase(rating: Rating) -> &'static str {
    match rating {
        Rating::Green => "broadly positive",
        Rating::Amber => "mixed, with areas needing attention",
        Rating::Red => "concerning, with significant issues to address",
    }
}

/// Closing paragraph: accept, conditional, or decline framing.
pub const fn closing_paragraph(rating: Rating) -> &'static str {
    match rating {
        Rating::Green => "Overall, this proposal demonstrates a strong foundation for an equitable partnership. We look forward to discussing next steps.",
        Rating::Amber => "We believe there is potential for a productive partnership, but the concerns raised above would need to be addressed before we can commit. We are open to further conversation about how the proposal could be strengthened.",
        Rating::Red => "At this stage, we are unable to support this research partnership. The concerns raised above are significant and would need to be fundamentally addressed. We encourage you to revisit the proposal with genuine community partnership at its centre, and we are happy to point you towards resources on equitable research practices.",
    }
}

pub(crate) const SALUTATION: &str = "Dear Researcher,";

pub(crate) const INTRODUCTION: &str = "Thank you for reaching out to partner with us on your research. We have reviewed your proposal using the Assess & Align framework, which evaluates research partnerships across five key dimensions of equity and community benefit.";

pub(crate) const SECTION_BREAK: &str = "---";

pub(crate) const ATTRIBUTION: &str = "This feedback was generated using Assess & Align, a tool developed by the Black Men's Health & Wellbeing Alliance to support equitable research partnerships.";

pub(crate) const SIGN_OFF: &str = "Kind regards";

pub fn standard_entries() -> Vec<TemplateEntry> {
    vec![
        TemplateEntry {
            dimension: "community-voice",
            rating: Rating::Green,
            paragraph: "The proposal demonstrates a strong commitment to community voice. There is clear evidence that the research question was shaped in partnership with the community, and that community members will play a meaningful role in design, delivery, or analysis. This is encouraging.",
        },
        TemplateEntry {
            dimension: "community-voice",
            rating: Rating::Amber,
            paragraph: "There are some positive signs around community involvement, but aspects remain unclear. We would recommend clarifying how the research question was developed, and what specific roles community members will hold beyond participation. Co-design should mean shared decision-making, not consultation after the fact.",
        },
        TemplateEntry {
            dimension: "community-voice",
            rating: Rating::Red,
            paragraph: "The proposal raises significant concerns about community voice. There is little evidence that the community was involved in shaping the research question, and the role of community members appears limited to being study subjects. Before proceeding, we would need to see genuine co-design processes built into the project from the outset.",
        },
        TemplateEntry {
            dimension: "power-ownership",
            rating: Rating::Green,
            paragraph: "The proposal handles power and ownership well. Data ownership, intellectual property, and the right to shape how findings are used appear to be shared equitably. Funding arrangements seem fair and transparent.",
        },
        TemplateEntry {
            dimension: "power-ownership",
            rating: Rating::Amber,
            paragraph: "There are some concerns about power dynamics in this proposal. While some equity measures are in place, it is not fully clear who retains ownership of the data or how findings will be controlled. We would recommend a clearer data governance agreement and a transparent budget breakdown showing how resources are distributed.",
        },
        TemplateEntry {
            dimension: "power-ownership",
            rating: Rating::Red,
            paragraph: "The proposal raises serious concerns about power and ownership. The community appears to be positioned primarily as a source of data and access, without equitable control over findings, intellectual property, or funding. This extractive dynamic must be addressed before any partnership can proceed.",
        },
        TemplateEntry {
            dimension: "cultural-sensitivity",
            rating: Rating::Green,
            paragraph: "The methodology demonstrates strong cultural sensitivity. The research approach appears to be grounded in an understanding of the community's context, and the research team includes people with meaningful connection to the community.",
        },
        TemplateEntry {
            dimension: "cultural-sensitivity",
            rating: Rating::Amber,
            paragraph: "There are some cultural sensitivity considerations that need attention. While the proposal shows awareness of cultural context, the methodology may benefit from further adaptation to ensure it does not inadvertently centre frameworks developed for other communities. We would also recommend reviewing the diversity and community connection of the research team.",
        },
        TemplateEntry {
            dimension: "cultural-sensitivity",
            rating: Rating::Red,
            paragraph: "The proposal raises significant concerns about cultural sensitivity. The methodology appears to transplant frameworks from other contexts without adequate adaptation, and the research team lacks meaningful connection to the community. Research on Black communities must be designed with, not just about, those communities.",
        },
        TemplateEntry {
            dimension: "benefit-access",
            rating: Rating::Green,
            paragraph: "The proposal demonstrates a clear commitment to making findings accessible and beneficial to the community. Plans are in place for plain-language dissemination, and the research addresses priorities the community itself has identified.",
        },
        TemplateEntry {
            dimension: "benefit-access",
            rating: Rating::Amber,
            paragraph: "While there are some plans for sharing findings, it is unclear whether the community will have full access to results in an accessible format. We would recommend ensuring that findings are not locked behind academic paywalls, and that the research topic directly addresses a community-identified priority rather than a funder-driven agenda.",
        },
        TemplateEntry {
            dimension: "benefit-access",
            rating: Rating::Red,
            paragraph: "The proposal does not adequately address how the community will benefit from this research. Findings appear likely to remain in academic publications inaccessible to participants, and the research topic does not appear to have been identified by the community. We would need to see concrete plans for community benefit before proceeding.",
        },
        TemplateEntry {
            dimension: "track-record",
            rating: Rating::Green,
            paragraph: "The researchers have a positive track record of working with Black communities, and the proposal includes clear accountability mechanisms such as regular check-ins and a defined process for addressing concerns. This provides confidence in the partnership.",
        },
        TemplateEntry {
            dimension: "track-record",
            rating: Rating::Amber,
            paragraph: "The researchers' track record with Black communities is unclear or limited. While some accountability measures are mentioned, we would recommend asking for references from previous community partners, and strengthening the feedback and exit mechanisms to ensure the community retains agency throughout.",
        },
        TemplateEntry {
            dimension: "track-record",
            rating: Rating::Red,
            paragraph: "There is no evidence of a positive track record with Black communities, and the proposal lacks meaningful accountability mechanisms. Before any partnership can proceed, we would need references from previous community collaborators and a clear, agreed process for raising concerns or ending the partnership if it is not working.",
        },
    ]
}
