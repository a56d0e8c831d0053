use super::common::*;
use crate::assessment::catalog::{standard_dimensions, CatalogError, QuestionCatalog};
use crate::assessment::domain::{Dimension, Rating};
use crate::assessment::feedback::{
    standard_entries, FeedbackComposer, FeedbackTemplates, TemplateEntry,
};
use crate::assessment::validate_standard;

#[test]
fn standard_catalog_has_five_dimensions_of_two_questions() {
    let catalog = QuestionCatalog::standard();

    let titles: Vec<&str> = catalog.dimensions().iter().map(|d| d.title).collect();
    assert_eq!(titles, DIMENSION_TITLES);
    assert!(catalog
        .dimensions()
        .iter()
        .all(|dimension| dimension.questions.len() == 2));
    assert_eq!(catalog.total_questions(), 10);
    assert_eq!(catalog.answer_options().len(), 3);
}

#[test]
fn standard_question_text_is_carried_verbatim() {
    let catalog = QuestionCatalog::standard();
    let question = |id: &str| {
        catalog
            .questions()
            .map(|(_, question)| question)
            .find(|question| question.id == id)
            .unwrap_or_else(|| panic!("question {id} present"))
    };

    assert_eq!(
        question("cv-1").hint,
        Some("Look for evidence of community consultation in the proposal design stage \u{2014} not just recruitment.")
    );
    assert_eq!(
        question("ba-1").text,
        "Will findings be accessible to participants \u{2014} not just locked behind journal paywalls?"
    );
    assert_eq!(
        question("po-2").text,
        "Is funding shared equitably, or does the community just provide access?"
    );
    assert_eq!(
        question("tr-2").text,
        "Is there a feedback mechanism if the partnership isn't working?"
    );
}

#[test]
fn standard_catalog_passes_validation() {
    let validated = QuestionCatalog::new(standard_dimensions()).expect("standard catalog valid");
    assert_eq!(&validated, QuestionCatalog::standard());
    validate_standard().expect("standard rubric validates");
}

#[test]
fn catalog_rejects_dimension_without_questions() {
    let mut dimensions = standard_dimensions();
    dimensions[2].questions.clear();

    let error = QuestionCatalog::new(dimensions).expect_err("empty dimension rejected");
    assert_eq!(
        error,
        CatalogError::EmptyDimension("cultural-sensitivity".to_string())
    );
}

#[test]
fn catalog_rejects_duplicate_identifiers() {
    let mut dimensions = standard_dimensions();
    let copy = dimensions[0].clone();
    dimensions.push(copy);
    assert_eq!(
        QuestionCatalog::new(dimensions),
        Err(CatalogError::DuplicateDimension("community-voice".to_string()))
    );

    let mut dimensions = standard_dimensions();
    dimensions[1].questions[1].id = "cv-1";
    assert_eq!(
        QuestionCatalog::new(dimensions),
        Err(CatalogError::DuplicateQuestion("cv-1".to_string()))
    );

    assert_eq!(
        QuestionCatalog::new(Vec::<Dimension>::new()),
        Err(CatalogError::EmptyCatalog)
    );
}

#[test]
fn standard_templates_cover_every_dimension_and_rating() {
    let entries = standard_entries();
    assert_eq!(entries.len(), 15);

    let templates = FeedbackTemplates::new(entries).expect("no duplicate entries");
    templates
        .ensure_complete(QuestionCatalog::standard())
        .expect("cross product complete");
}

#[test]
fn removing_any_template_entry_fails_the_completeness_check() {
    let catalog = QuestionCatalog::standard();

    for removed in 0..standard_entries().len() {
        let mut entries = standard_entries();
        let missing = entries.remove(removed);
        let templates = FeedbackTemplates::new(entries).expect("remaining entries are unique");

        let error = FeedbackComposer::new(catalog, templates)
            .expect_err("incomplete templates must be rejected");
        assert_eq!(
            error,
            CatalogError::MissingTemplate {
                dimension: missing.dimension.to_string(),
                rating: missing.rating,
            }
        );
    }
}

#[test]
fn duplicate_template_entries_are_rejected() {
    let mut entries = standard_entries();
    entries.push(TemplateEntry {
        dimension: "track-record",
        rating: Rating::Amber,
        paragraph: "Second opinion.",
    });

    assert_eq!(
        FeedbackTemplates::new(entries),
        Err(CatalogError::DuplicateTemplate {
            dimension: "track-record".to_string(),
            rating: Rating::Amber,
        })
    );
}

#[test]
fn templates_for_unknown_dimensions_are_rejected() {
    let mut entries = standard_entries();
    entries.extend(Rating::ordered().into_iter().map(|rating| TemplateEntry {
        dimension: "governance",
        rating,
        paragraph: "Governance feedback.",
    }));
    let templates = FeedbackTemplates::new(entries).expect("entries unique");

    assert_eq!(
        templates.ensure_complete(QuestionCatalog::standard()),
        Err(CatalogError::UnknownTemplateDimension("governance".to_string()))
    );
}

#[test]
fn extending_the_catalog_requires_matching_templates() {
    let mut dimensions = standard_dimensions();
    dimensions.push(three_question_dimension());
    let catalog = QuestionCatalog::new(dimensions).expect("extended catalog valid");

    let error = FeedbackComposer::new(&catalog, FeedbackTemplates::standard().expect("standard"))
        .expect_err("new dimension has no templates");
    assert_eq!(
        error,
        CatalogError::MissingTemplate {
            dimension: "governance".to_string(),
            rating: Rating::Green,
        }
    );
}
