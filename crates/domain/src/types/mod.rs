//! Domain types and models

pub mod entries;
pub mod profile;
pub mod publication;
pub mod search;
pub mod section;
pub mod social;
pub mod user;
pub mod view;

pub use entries::{
    Achievement, AchievementType, ChildKind, ChildRecord, Education, Experience, ExternalRole,
    NewAchievement, NewChild, NewEducation, NewExperience, NewExternalRole,
};
pub use profile::{Profile, ProfileFields, ProfileUpdate};
pub use publication::{FileRecord, FileUpload, NewFile, PaperDetail, PaperMetadata, Photo, Publication};
pub use search::{
    DirectoryEntry, FacetValues, Pagination, SearchFilters, SearchPage, SearchQuery, SearchSort,
};
pub use section::{SectionEntry, SectionId, SectionOrder};
pub use social::{Social, SocialLinks, SocialPlatform};
pub use user::{NewUser, Registration, User};
pub use view::{ProfileView, PublicationScope};
