//! Paper metadata validation

use researchd_common::validation::{
    RangeValidator, StringValidator, UrlValidator, ValidationResult, Validator,
};
use researchd_domain::constants::{
    MAX_ABSTRACT_LENGTH, MAX_AUTHORS_LENGTH, MAX_DOI_LENGTH, MAX_JOURNAL_LENGTH,
    MAX_KEYWORDS_LENGTH, MAX_PAPER_TITLE_LENGTH, MAX_PUBLICATION_YEAR, MIN_PUBLICATION_YEAR,
};
use researchd_domain::PaperMetadata;

use crate::utils::forms::clean_optional;

pub(crate) fn validate_metadata(metadata: &PaperMetadata) -> ValidationResult<()> {
    let optional = |max| StringValidator::new().max_length(max);

    let mut v = Validator::new();
    v.validate_field(
        "title",
        &metadata.title.as_str(),
        &StringValidator::new().not_empty().max_length(MAX_PAPER_TITLE_LENGTH),
    )
    .validate_field(
        "authors",
        &metadata.authors.as_str(),
        &StringValidator::new().not_empty().max_length(MAX_AUTHORS_LENGTH),
    )
    .validate_optional("journal", metadata.journal.as_deref(), &optional(MAX_JOURNAL_LENGTH))
    .validate_optional("doi", metadata.doi.as_deref(), &optional(MAX_DOI_LENGTH))
    .validate_optional("url", metadata.url.as_deref(), &UrlValidator::new())
    .validate_optional("abstract", metadata.abstract_text.as_deref(), &optional(MAX_ABSTRACT_LENGTH))
    .validate_optional("keywords", metadata.keywords.as_deref(), &optional(MAX_KEYWORDS_LENGTH));

    if let Some(year) = metadata.year {
        v.validate_field(
            "year",
            &year,
            &RangeValidator::new(MIN_PUBLICATION_YEAR, MAX_PUBLICATION_YEAR),
        );
    }

    v.finalize()
}

/// Trim text fields; blank optionals become `None`.
pub(crate) fn normalize_metadata(metadata: PaperMetadata) -> PaperMetadata {
    PaperMetadata {
        title: metadata.title.trim().to_string(),
        authors: metadata.authors.trim().to_string(),
        journal: clean_optional(metadata.journal),
        doi: clean_optional(metadata.doi),
        url: clean_optional(metadata.url),
        abstract_text: clean_optional(metadata.abstract_text),
        keywords: clean_optional(metadata.keywords),
        ..metadata
    }
}
