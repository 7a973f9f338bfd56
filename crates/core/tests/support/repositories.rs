//! In-memory implementations of every core repository port
//!
//! One `MemoryStore` backs all traits so cross-entity behaviour (cascade on
//! profile delete, file nullification) matches the SQLite adapters.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use researchd_core::{
    DirectoryRepository, EntryRepository, PaperUpdate, PasswordHasher, ProfileChanges,
    ProfileRepository, PublicationRepository, RawFacets, StoredPaper, UserRepository,
};
use researchd_domain::{
    Achievement, ChildKind, ChildRecord, DirectoryEntry, Education, Experience, ExternalRole,
    FileRecord, NewChild, NewEducation, NewExperience, NewFile, NewUser, PaperDetail,
    PaperMetadata, Photo, Profile, ProfileFields, Publication, ResearchdError, Result,
    SearchQuery, Social, User,
};

/// Reversible "hash" so tests stay fast
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    fn hash(&self, password: &str) -> Result<String> {
        Ok(format!("plain${password}"))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        Ok(hash == format!("plain${password}"))
    }
}

#[derive(Default)]
struct State {
    next_id: i64,
    clock: i64,
    users: Vec<User>,
    profiles: Vec<Profile>,
    socials: Vec<Social>,
    photos: Vec<Photo>,
    educations: Vec<Education>,
    experiences: Vec<Experience>,
    achievements: Vec<Achievement>,
    roles: Vec<ExternalRole>,
    files: Vec<FileRecord>,
    publications: Vec<Publication>,
}

impl State {
    fn id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }

    /// Strictly increasing timestamps keep recency ordering deterministic
    fn now(&mut self) -> chrono::DateTime<Utc> {
        self.clock += 1;
        Utc.timestamp_opt(1_700_000_000, 0).single().unwrap_or_default() + Duration::seconds(self.clock)
    }

    fn insert_profile(&mut self, user_id: i64, fields: ProfileFields) -> Profile {
        let profile = Profile {
            id: self.id(),
            user_id,
            title: fields.title,
            institution: fields.institution,
            department: fields.department,
            position: fields.position,
            bio: fields.bio,
            location: fields.location,
            profile_picture: None,
            research_interests: None,
            section_order: None,
        };
        self.profiles.push(profile.clone());
        profile
    }

    fn profile_mut(&mut self, profile_id: i64) -> Result<&mut Profile> {
        self.profiles
            .iter_mut()
            .find(|p| p.id == profile_id)
            .ok_or_else(|| ResearchdError::not_found("profile", profile_id))
    }

    fn insert_file(&mut self, profile_id: i64, file: NewFile) -> FileRecord {
        let record = FileRecord {
            id: self.id(),
            profile_id,
            file_name: file.file_name,
            file_type: file.file_type,
            file_size: file.file_size,
            storage_ref: file.storage_ref,
            uploaded_at: self.now(),
        };
        self.files.push(record.clone());
        record
    }

    fn remove_file(&mut self, file_id: i64) -> Option<FileRecord> {
        let pos = self.files.iter().position(|f| f.id == file_id)?;
        for publication in self.publications.iter_mut().filter(|p| p.file_id == Some(file_id)) {
            publication.file_id = None;
        }
        Some(self.files.remove(pos))
    }

    fn stored(&self, publication: &Publication) -> StoredPaper {
        StoredPaper {
            publication: publication.clone(),
            file: publication
                .file_id
                .and_then(|id| self.files.iter().find(|f| f.id == id).cloned()),
        }
    }

    fn newest_publications(&self, profile_id: i64) -> Vec<Publication> {
        let mut list: Vec<Publication> =
            self.publications.iter().filter(|p| p.profile_id == profile_id).cloned().collect();
        list.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        list
    }
}

fn apply_metadata(publication: &mut Publication, metadata: PaperMetadata) {
    publication.title = metadata.title;
    publication.authors = Some(metadata.authors);
    publication.journal = metadata.journal;
    publication.year = metadata.year;
    publication.publication_date = metadata.publication_date;
    publication.doi = metadata.doi;
    publication.url = metadata.url;
    publication.abstract_text = metadata.abstract_text;
    publication.keywords = metadata.keywords;
}

fn contains(value: Option<&str>, needle: &str) -> bool {
    value.is_some_and(|v| v.to_lowercase().contains(needle))
}

fn by_sort_order(a: Option<i64>, a_id: i64, b: Option<i64>, b_id: i64) -> std::cmp::Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
    .then(a_id.cmp(&b_id))
}

fn by_start_year_desc(a: Option<i32>, a_id: i64, b: Option<i32>, b_id: i64) -> std::cmp::Ordering {
    match (a, b) {
        (Some(x), Some(y)) => y.cmp(&x),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    }
    .then(a_id.cmp(&b_id))
}

/// Shared in-memory state behind every port.
///
/// `fail_writes` makes publication writes fail, simulating a database
/// error after a blob was stored.
#[derive(Default)]
pub struct MemoryStore {
    state: Mutex<State>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    fn lock(&self) -> std::sync::MutexGuard<'_, State> {
        self.state.lock().expect("memory store poisoned")
    }

    pub fn fail_publication_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn check_writes(&self) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(ResearchdError::Database("simulated write failure".into()));
        }
        Ok(())
    }

    pub fn achievement_count(&self) -> usize {
        self.lock().achievements.len()
    }

    pub fn file_count(&self) -> usize {
        self.lock().files.len()
    }

    pub fn publication_count(&self) -> usize {
        self.lock().publications.len()
    }

    pub fn photo_count(&self) -> usize {
        self.lock().photos.len()
    }

    /// Seed a raw user row without a profile
    pub fn insert_user_without_profile(&self, first: &str, last: &str) -> User {
        let mut state = self.lock();
        let user = User {
            id: state.id(),
            email: format!("{}@example.com", first.to_lowercase()),
            password_hash: String::new(),
            first_name: first.into(),
            last_name: last.into(),
            is_active: true,
            created_at: state.now(),
        };
        state.users.push(user.clone());
        user
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn create_with_profile(&self, user: NewUser, profile: ProfileFields) -> Result<User> {
        let mut state = self.lock();
        if state.users.iter().any(|u| u.email.eq_ignore_ascii_case(&user.email)) {
            return Err(ResearchdError::Conflict("Email already registered. Please login.".into()));
        }
        let record = User {
            id: state.id(),
            email: user.email,
            password_hash: user.password_hash,
            first_name: user.first_name,
            last_name: user.last_name,
            is_active: true,
            created_at: state.now(),
        };
        state.users.push(record.clone());
        state.insert_profile(record.id, profile);
        Ok(record)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.id == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.lock().users.iter().find(|u| u.email.eq_ignore_ascii_case(email)).cloned())
    }
}

#[async_trait]
impl ProfileRepository for MemoryStore {
    async fn get_or_create(&self, user_id: i64) -> Result<Profile> {
        let mut state = self.lock();
        if let Some(profile) = state.profiles.iter().find(|p| p.user_id == user_id) {
            return Ok(profile.clone());
        }
        if !state.users.iter().any(|u| u.id == user_id) {
            return Err(ResearchdError::not_found("user", user_id));
        }
        Ok(state.insert_profile(user_id, ProfileFields::default()))
    }

    async fn find_by_user(&self, user_id: i64) -> Result<Option<Profile>> {
        Ok(self.lock().profiles.iter().find(|p| p.user_id == user_id).cloned())
    }

    async fn apply_changes(&self, user_id: i64, changes: ProfileChanges) -> Result<Profile> {
        let mut state = self.lock();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == user_id)
            .ok_or_else(|| ResearchdError::not_found("user", user_id))?;
        user.first_name = changes.first_name;
        user.last_name = changes.last_name;

        let profile_id = match state.profiles.iter().find(|p| p.user_id == user_id) {
            Some(p) => p.id,
            None => state.insert_profile(user_id, ProfileFields::default()).id,
        };
        let fields = changes.fields;
        let profile = state.profile_mut(profile_id)?;
        profile.title = fields.title;
        profile.institution = fields.institution;
        profile.department = fields.department;
        profile.position = fields.position;
        profile.bio = fields.bio;
        profile.location = fields.location;
        let updated = profile.clone();

        for (platform, url) in changes.socials {
            let name = platform.as_str();
            state.socials.retain(|s| !(s.profile_id == profile_id && s.platform == name));
            if let Some(url) = url {
                let id = state.id();
                state.socials.push(Social { id, profile_id, platform: name.to_string(), url });
            }
        }
        Ok(updated)
    }

    async fn set_research_interests(&self, profile_id: i64, raw: &str) -> Result<()> {
        self.lock().profile_mut(profile_id)?.research_interests = Some(raw.to_string());
        Ok(())
    }

    async fn set_section_order(&self, profile_id: i64, json: &str) -> Result<()> {
        self.lock().profile_mut(profile_id)?.section_order = Some(json.to_string());
        Ok(())
    }

    async fn set_profile_picture(&self, profile_id: i64, reference: Option<String>) -> Result<Option<String>> {
        let mut state = self.lock();
        let profile = state.profile_mut(profile_id)?;
        Ok(std::mem::replace(&mut profile.profile_picture, reference))
    }

    async fn delete_profile(&self, profile_id: i64) -> Result<Vec<String>> {
        let mut state = self.lock();
        let Some(pos) = state.profiles.iter().position(|p| p.id == profile_id) else {
            return Ok(Vec::new());
        };
        let profile = state.profiles.remove(pos);

        let mut refs: Vec<String> = profile.profile_picture.into_iter().collect();
        refs.extend(state.files.iter().filter(|f| f.profile_id == profile_id).map(|f| f.storage_ref.clone()));
        refs.extend(state.photos.iter().filter(|p| p.profile_id == profile_id).map(|p| p.storage_ref.clone()));

        state.files.retain(|f| f.profile_id != profile_id);
        state.photos.retain(|p| p.profile_id != profile_id);
        state.publications.retain(|p| p.profile_id != profile_id);
        state.socials.retain(|s| s.profile_id != profile_id);
        state.educations.retain(|e| e.profile_id != profile_id);
        state.experiences.retain(|e| e.profile_id != profile_id);
        state.achievements.retain(|a| a.profile_id != profile_id);
        state.roles.retain(|r| r.profile_id != profile_id);
        Ok(refs)
    }

    async fn list_socials(&self, profile_id: i64) -> Result<Vec<Social>> {
        let mut list: Vec<Social> =
            self.lock().socials.iter().filter(|s| s.profile_id == profile_id).cloned().collect();
        list.sort_by(|a, b| a.platform.cmp(&b.platform));
        Ok(list)
    }

    async fn list_photos(&self, profile_id: i64) -> Result<Vec<Photo>> {
        let mut list: Vec<Photo> =
            self.lock().photos.iter().filter(|p| p.profile_id == profile_id).cloned().collect();
        list.sort_by(|a, b| b.uploaded_at.cmp(&a.uploaded_at).then(b.id.cmp(&a.id)));
        Ok(list)
    }

    async fn add_photo(&self, profile_id: i64, reference: String, caption: Option<String>) -> Result<Photo> {
        let mut state = self.lock();
        let photo = Photo {
            id: state.id(),
            profile_id,
            storage_ref: reference,
            caption,
            uploaded_at: state.now(),
        };
        state.photos.push(photo.clone());
        Ok(photo)
    }

    async fn delete_photo(&self, profile_id: i64, photo_id: i64) -> Result<Option<Photo>> {
        let mut state = self.lock();
        let pos = state.photos.iter().position(|p| p.id == photo_id && p.profile_id == profile_id);
        Ok(pos.map(|pos| state.photos.remove(pos)))
    }
}

#[async_trait]
impl EntryRepository for MemoryStore {
    async fn list_educations(&self, profile_id: i64) -> Result<Vec<Education>> {
        let mut list: Vec<Education> =
            self.lock().educations.iter().filter(|e| e.profile_id == profile_id).cloned().collect();
        list.sort_by(|a, b| by_start_year_desc(a.start_year, a.id, b.start_year, b.id));
        Ok(list)
    }

    async fn list_experiences(&self, profile_id: i64) -> Result<Vec<Experience>> {
        let mut list: Vec<Experience> =
            self.lock().experiences.iter().filter(|e| e.profile_id == profile_id).cloned().collect();
        list.sort_by(|a, b| by_start_year_desc(a.start_year, a.id, b.start_year, b.id));
        Ok(list)
    }

    async fn add_education(&self, profile_id: i64, entry: NewEducation) -> Result<Education> {
        let mut state = self.lock();
        let record = Education {
            id: state.id(),
            profile_id,
            degree: entry.degree,
            institution: entry.institution,
            start_year: entry.start_year,
            end_year: entry.end_year,
        };
        state.educations.push(record.clone());
        Ok(record)
    }

    async fn add_experience(&self, profile_id: i64, entry: NewExperience) -> Result<Experience> {
        let mut state = self.lock();
        let record = Experience {
            id: state.id(),
            profile_id,
            role: entry.role,
            institution: entry.institution,
            start_year: entry.start_year,
            end_year: entry.end_year,
        };
        state.experiences.push(record.clone());
        Ok(record)
    }

    async fn delete_education(&self, profile_id: i64, id: i64) -> Result<bool> {
        let mut state = self.lock();
        let before = state.educations.len();
        state.educations.retain(|e| !(e.id == id && e.profile_id == profile_id));
        Ok(state.educations.len() < before)
    }

    async fn delete_experience(&self, profile_id: i64, id: i64) -> Result<bool> {
        let mut state = self.lock();
        let before = state.experiences.len();
        state.experiences.retain(|e| !(e.id == id && e.profile_id == profile_id));
        Ok(state.experiences.len() < before)
    }

    async fn list_children(&self, profile_id: i64, kind: ChildKind) -> Result<Vec<ChildRecord>> {
        let state = self.lock();
        let mut list: Vec<ChildRecord> = match kind {
            ChildKind::Achievement => state
                .achievements
                .iter()
                .filter(|a| a.profile_id == profile_id)
                .cloned()
                .map(ChildRecord::Achievement)
                .collect(),
            ChildKind::ExternalRole => state
                .roles
                .iter()
                .filter(|r| r.profile_id == profile_id)
                .cloned()
                .map(ChildRecord::ExternalRole)
                .collect(),
        };
        list.sort_by(|a, b| by_sort_order(a.sort_order(), a.id(), b.sort_order(), b.id()));
        Ok(list)
    }

    async fn add_child(&self, profile_id: i64, child: NewChild) -> Result<ChildRecord> {
        let mut state = self.lock();
        let id = state.id();
        let record = match child {
            NewChild::Achievement(a) => {
                let next = state
                    .achievements
                    .iter()
                    .filter(|x| x.profile_id == profile_id)
                    .filter_map(|x| x.sort_order)
                    .max()
                    .unwrap_or(0)
                    + 1;
                let record = Achievement {
                    id,
                    profile_id,
                    title: a.title,
                    description: a.description,
                    year: a.year,
                    kind: a.kind,
                    sort_order: Some(next),
                };
                state.achievements.push(record.clone());
                ChildRecord::Achievement(record)
            }
            NewChild::ExternalRole(r) => {
                let next = state
                    .roles
                    .iter()
                    .filter(|x| x.profile_id == profile_id)
                    .filter_map(|x| x.sort_order)
                    .max()
                    .unwrap_or(0)
                    + 1;
                let record = ExternalRole {
                    id,
                    profile_id,
                    role_title: r.role_title,
                    organization: r.organization,
                    start_year: r.start_year,
                    end_year: r.end_year,
                    description: r.description,
                    sort_order: Some(next),
                };
                state.roles.push(record.clone());
                ChildRecord::ExternalRole(record)
            }
        };
        Ok(record)
    }

    async fn delete_child(&self, profile_id: i64, kind: ChildKind, id: i64) -> Result<bool> {
        let mut state = self.lock();
        let removed = match kind {
            ChildKind::Achievement => {
                let before = state.achievements.len();
                state.achievements.retain(|a| !(a.id == id && a.profile_id == profile_id));
                state.achievements.len() < before
            }
            ChildKind::ExternalRole => {
                let before = state.roles.len();
                state.roles.retain(|r| !(r.id == id && r.profile_id == profile_id));
                state.roles.len() < before
            }
        };
        Ok(removed)
    }

    async fn reorder_children(&self, profile_id: i64, kind: ChildKind, ordered_ids: &[i64]) -> Result<usize> {
        let mut state = self.lock();
        let mut updated = 0;
        for (index, id) in ordered_ids.iter().enumerate() {
            let position = Some(index as i64 + 1);
            let slot = match kind {
                ChildKind::Achievement => state
                    .achievements
                    .iter_mut()
                    .find(|a| a.id == *id && a.profile_id == profile_id)
                    .map(|a| &mut a.sort_order),
                ChildKind::ExternalRole => state
                    .roles
                    .iter_mut()
                    .find(|r| r.id == *id && r.profile_id == profile_id)
                    .map(|r| &mut r.sort_order),
            };
            if let Some(slot) = slot {
                *slot = position;
                updated += 1;
            }
        }
        Ok(updated)
    }
}

#[async_trait]
impl PublicationRepository for MemoryStore {
    async fn create_with_file(&self, profile_id: i64, metadata: PaperMetadata, file: NewFile) -> Result<StoredPaper> {
        self.check_writes()?;
        let mut state = self.lock();
        let file = state.insert_file(profile_id, file);
        let mut publication = Publication {
            id: state.id(),
            profile_id,
            title: String::new(),
            authors: None,
            journal: None,
            year: None,
            publication_date: None,
            doi: None,
            url: None,
            abstract_text: None,
            keywords: None,
            file_id: Some(file.id),
            created_at: state.now(),
        };
        apply_metadata(&mut publication, metadata);
        state.publications.push(publication.clone());
        Ok(StoredPaper { publication, file: Some(file) })
    }

    async fn find_owned(&self, profile_id: i64, publication_id: i64) -> Result<Option<StoredPaper>> {
        let state = self.lock();
        Ok(state
            .publications
            .iter()
            .find(|p| p.id == publication_id && p.profile_id == profile_id)
            .map(|p| state.stored(p)))
    }

    async fn find_detail(&self, publication_id: i64) -> Result<Option<PaperDetail>> {
        let state = self.lock();
        let Some(publication) = state.publications.iter().find(|p| p.id == publication_id) else {
            return Ok(None);
        };
        let owner = state
            .profiles
            .iter()
            .find(|p| p.id == publication.profile_id)
            .and_then(|profile| state.users.iter().find(|u| u.id == profile.user_id));
        let stored = state.stored(publication);
        Ok(owner.map(|owner| PaperDetail {
            publication: stored.publication,
            file: stored.file,
            owner_user_id: owner.id,
            owner_name: owner.full_name(),
        }))
    }

    async fn update(
        &self,
        profile_id: i64,
        publication_id: i64,
        metadata: PaperMetadata,
        new_file: Option<NewFile>,
    ) -> Result<Option<PaperUpdate>> {
        self.check_writes()?;
        let mut state = self.lock();
        let Some(pos) = state
            .publications
            .iter()
            .position(|p| p.id == publication_id && p.profile_id == profile_id)
        else {
            return Ok(None);
        };

        let mut replaced = None;
        if let Some(file) = new_file {
            let old = state.publications[pos].file_id;
            let inserted = state.insert_file(profile_id, file);
            state.publications[pos].file_id = Some(inserted.id);
            replaced = old.and_then(|id| state.remove_file(id));
        }
        apply_metadata(&mut state.publications[pos], metadata);

        let paper = state.stored(&state.publications[pos]);
        Ok(Some(PaperUpdate { paper, replaced }))
    }

    async fn list_by_profile(&self, profile_id: i64, limit: Option<usize>) -> Result<Vec<Publication>> {
        let mut list = self.lock().newest_publications(profile_id);
        if let Some(limit) = limit {
            list.truncate(limit);
        }
        Ok(list)
    }

    async fn list_with_files(&self, profile_id: i64) -> Result<Vec<StoredPaper>> {
        let state = self.lock();
        Ok(state.newest_publications(profile_id).iter().map(|p| state.stored(p)).collect())
    }

    async fn delete_owned(&self, profile_id: i64, publication_id: i64) -> Result<Option<StoredPaper>> {
        let mut state = self.lock();
        let Some(pos) = state
            .publications
            .iter()
            .position(|p| p.id == publication_id && p.profile_id == profile_id)
        else {
            return Ok(None);
        };
        let publication = state.publications.remove(pos);
        let file = publication.file_id.and_then(|id| state.remove_file(id));
        Ok(Some(StoredPaper { publication, file }))
    }

    async fn find_file(&self, file_id: i64) -> Result<Option<FileRecord>> {
        Ok(self.lock().files.iter().find(|f| f.id == file_id).cloned())
    }

    async fn delete_file(&self, profile_id: i64, file_id: i64) -> Result<Option<FileRecord>> {
        let mut state = self.lock();
        if !state.files.iter().any(|f| f.id == file_id && f.profile_id == profile_id) {
            return Ok(None);
        }
        Ok(state.remove_file(file_id))
    }
}

#[async_trait]
impl DirectoryRepository for MemoryStore {
    async fn search(&self, query: &SearchQuery) -> Result<(Vec<DirectoryEntry>, i64)> {
        let state = self.lock();
        let needle = query.query.to_lowercase();

        let mut entries: Vec<DirectoryEntry> = state
            .users
            .iter()
            .map(|user| {
                let profile = state.profiles.iter().find(|p| p.user_id == user.id);
                DirectoryEntry {
                    user_id: user.id,
                    first_name: user.first_name.clone(),
                    last_name: user.last_name.clone(),
                    profile_id: profile.map(|p| p.id),
                    title: profile.and_then(|p| p.title.clone()),
                    institution: profile.and_then(|p| p.institution.clone()),
                    department: profile.and_then(|p| p.department.clone()),
                    position: profile.and_then(|p| p.position.clone()),
                    profile_picture: profile.and_then(|p| p.profile_picture.clone()),
                    research_interests: profile.map(Profile::interests).unwrap_or_default(),
                }
            })
            .filter(|e| {
                let interests = e.research_interests.join(",");
                needle.is_empty()
                    || contains(Some(e.first_name.as_str()), &needle)
                    || contains(Some(e.last_name.as_str()), &needle)
                    || contains(e.institution.as_deref(), &needle)
                    || contains(e.position.as_deref(), &needle)
                    || contains(Some(interests.as_str()), &needle)
            })
            .filter(|e| query.filters.institution.as_ref().map_or(true, |i| e.institution.as_ref() == Some(i)))
            .filter(|e| query.filters.position.as_ref().map_or(true, |p| e.position.as_ref() == Some(p)))
            .filter(|e| {
                query.filters.interests.as_ref().map_or(true, |i| {
                    contains(Some(e.research_interests.join(",").as_str()), &i.to_lowercase())
                })
            })
            .collect();

        entries.sort_by(|a, b| {
            (a.last_name.to_lowercase(), a.first_name.to_lowercase(), a.user_id)
                .cmp(&(b.last_name.to_lowercase(), b.first_name.to_lowercase(), b.user_id))
        });

        let total = entries.len() as i64;
        let page = entries
            .into_iter()
            .skip(query.offset() as usize)
            .take(query.page_size as usize)
            .collect();
        Ok((page, total))
    }

    async fn facets(&self) -> Result<RawFacets> {
        let state = self.lock();
        Ok(RawFacets {
            institutions: state.profiles.iter().filter_map(|p| p.institution.clone()).collect(),
            positions: state.profiles.iter().filter_map(|p| p.position.clone()).collect(),
            interest_strings: state.profiles.iter().filter_map(|p| p.research_interests.clone()).collect(),
        })
    }
}
