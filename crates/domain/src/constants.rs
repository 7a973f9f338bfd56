//! Application constants
//!
//! Centralized location for all domain-level constants: field limits, form
//! choices, upload rules and display defaults.

// Field length limits (characters)
pub const MAX_EMAIL_LENGTH: usize = 150;
pub const MIN_PASSWORD_LENGTH: usize = 4;
pub const MAX_NAME_LENGTH: usize = 100;
pub const MAX_BIO_LENGTH: usize = 1000;
pub const MAX_LOCATION_LENGTH: usize = 150;
pub const MAX_DEPARTMENT_LENGTH: usize = 150;
pub const MAX_OTHER_INSTITUTION_LENGTH: usize = 150;
pub const MAX_OTHER_POSITION_LENGTH: usize = 100;
pub const MAX_SOCIAL_URL_LENGTH: usize = 500;

pub const MAX_ENTRY_TEXT_LENGTH: usize = 150;
pub const MAX_ACHIEVEMENT_TITLE_LENGTH: usize = 200;
pub const MAX_CAPTION_LENGTH: usize = 255;

// Paper metadata limits
pub const MAX_PAPER_TITLE_LENGTH: usize = 300;
pub const MAX_AUTHORS_LENGTH: usize = 1000;
pub const MAX_JOURNAL_LENGTH: usize = 200;
pub const MAX_DOI_LENGTH: usize = 120;
pub const MAX_ABSTRACT_LENGTH: usize = 2000;
pub const MAX_KEYWORDS_LENGTH: usize = 500;
pub const MIN_PUBLICATION_YEAR: i32 = 1900;
pub const MAX_PUBLICATION_YEAR: i32 = 2030;

// Uploads
pub const PAPER_EXTENSIONS: &[&str] = &["pdf"];
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];
pub const PDF_MAGIC: &[u8] = b"%PDF-";
pub const MAX_STORED_FILENAME_LENGTH: usize = 255;

// Profile display
pub const RECENT_PUBLICATION_LIMIT: usize = 3;
pub const DEFAULT_SECTION_ORDER: &[&str] = &[
    "about-section",
    "education-section",
    "experience-section",
    "papers-section",
    "interests-section",
    "external-roles-section",
    "achievements-section",
];

// Directory search
pub const DEFAULT_PAGE_SIZE: i64 = 10;
pub const MAX_PAGE_SIZE: i64 = 100;

/// Form value that switches a select field to its free-text `other_*` input
pub const OTHER_CHOICE: &str = "Other";

pub const TITLE_CHOICES: &[&str] = &[
    "Mr",
    "Ms",
    "Mrs",
    "Miss",
    "Dr",
    "Prof",
    "Assoc Prof",
    "Asst Prof",
    "Prof Dr",
    "Rev",
    "Other",
];

pub const POSITION_CHOICES: &[&str] = &[
    "Undergraduate Student",
    "Postgraduate Student",
    "PhD Candidate",
    "Research Assistant",
    "Research Associate",
    "Postdoctoral Researcher",
    "Lecturer",
    "Senior Lecturer",
    "Associate Professor",
    "Professor",
    "Emeritus Professor",
    "Adjunct Professor",
    "Visiting Professor",
    "Research Fellow",
    "Senior Research Fellow",
    "Principal Research Fellow",
    "Research Scientist",
    "Senior Research Scientist",
    "Lab Manager",
    "Department Head",
    "Dean",
    "Other",
];

pub const INSTITUTION_CHOICES: &[&str] = &[
    "Australian Catholic University",
    "Australian National University",
    "Avondale University",
    "Bond University",
    "Central Queensland University",
    "Charles Darwin University",
    "Charles Sturt University",
    "Curtin University",
    "Deakin University",
    "Edith Cowan University",
    "Federation University Australia",
    "Flinders University",
    "Griffith University",
    "James Cook University",
    "La Trobe University",
    "Macquarie University",
    "Monash University",
    "Murdoch University",
    "Queensland University of Technology",
    "RMIT University",
    "Southern Cross University",
    "Swinburne University of Technology",
    "Torrens University Australia",
    "University of Adelaide",
    "University of Canberra",
    "University of Divinity",
    "University of Melbourne",
    "University of New England",
    "University of New South Wales",
    "University of Newcastle",
    "University of Notre Dame Australia",
    "University of Queensland",
    "University of South Australia",
    "University of Southern Queensland",
    "University of Sydney",
    "University of Tasmania",
    "University of Technology Sydney",
    "University of the Sunshine Coast",
    "University of Western Australia",
    "University of Wollongong",
    "Victoria University",
    "Western Sydney University",
    "Other",
];
