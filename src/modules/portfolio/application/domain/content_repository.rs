use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::entities::{
    Activity, ActivityType, Award, Competition, CompetitionStatus, Course, CourseStatus, Dated,
    Experience, FileAttachment, PortfolioDocument, Project, ProjectStatus, Record, Skill,
    SkillCategory, Testimonial, TimelineEvent, TimelineEventType, Volunteering,
};
use super::id_generator::{next_item_id, next_timestamp_after};
use super::item::{Item, ItemKind, UnknownItemKind};
use super::validation::{validate_item, ValidationError};

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ContentError {
    #[error(transparent)]
    UnknownItemKind(#[from] UnknownItemKind),

    /// A skill pointed at a category that does not exist.
    #[error("Skill category not found: {0}")]
    OrphanSkillReference(String),

    #[error("{kind} not found: {id}")]
    NotFound { kind: ItemKind, id: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{kind} has no list field named {field}")]
    UnknownListField { kind: ItemKind, field: String },

    #[error("{0} records have no file attachments")]
    AttachmentsNotSupported(ItemKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
}

//
// ──────────────────────────────────────────────────────────
// Collection helpers
// ──────────────────────────────────────────────────────────
//

fn position<T: Record>(records: &[T], id: &str) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

/// Replace in place when the id exists, append otherwise.
fn upsert<T: Record>(records: &mut Vec<T>, record: T) {
    match position(records, record.id()) {
        Some(index) => records[index] = record,
        None => records.push(record),
    }
}

/// `upsert` plus timestamp discipline: `createdAt` is inherited from the
/// stored record, `updatedAt` always moves forward.
fn upsert_dated<T: Dated>(records: &mut Vec<T>, mut record: T) {
    match position(records, record.id()) {
        Some(index) => {
            let existing = &records[index];
            record.set_created_at(existing.created_at());
            record.set_updated_at(next_timestamp_after(Some(existing.updated_at())));
            records[index] = record;
        }
        None => {
            let created_at = record.created_at();
            record.set_updated_at(next_timestamp_after(Some(created_at)).max(record.updated_at()));
            records.push(record);
        }
    }
}

fn remove_by_id<T: Record>(records: &mut Vec<T>, id: &str) {
    records.retain(|r| r.id() != id);
}

fn swap_adjacent<T: Record>(records: &mut [T], id: &str, direction: Direction) {
    let Some(index) = position(records, id) else {
        return;
    };
    let neighbour = match direction {
        Direction::Up if index > 0 => index - 1,
        Direction::Down if index + 1 < records.len() => index + 1,
        _ => return,
    };
    records.swap(index, neighbour);
}

fn find_cloned<T: Record + Clone>(
    records: &[T],
    kind: ItemKind,
    id: &str,
) -> Result<T, ContentError> {
    records
        .iter()
        .find(|r| r.id() == id)
        .cloned()
        .ok_or_else(|| ContentError::NotFound {
            kind,
            id: id.to_string(),
        })
}

//
// ──────────────────────────────────────────────────────────
// ContentRepository
// ──────────────────────────────────────────────────────────
//

/// Typed edit operations over a [`PortfolioDocument`].
///
/// Every operation is a pure transformation: the input document is never
/// mutated and the caller threads the returned document into the next call.
#[derive(Debug, Clone, Default)]
pub struct ContentRepository;

impl ContentRepository {
    pub fn new() -> Self {
        Self
    }

    /// A new, uncommitted record with a fresh id and kind defaults.
    pub fn create_draft(&self, kind: ItemKind, parent_id: Option<&str>) -> Item {
        let id = next_item_id(kind);
        let now = Utc::now();
        let year = now.year().to_string();

        match kind {
            ItemKind::Project => Item::Project(Project {
                id,
                title: String::new(),
                description: String::new(),
                long_description: Some(String::new()),
                technologies: vec![],
                objectives: vec![],
                challenges: vec![],
                achievements: vec![],
                image: String::new(),
                images: vec![],
                period: Some(String::new()),
                category: Some(String::new()),
                link: None,
                github: None,
                status: ProjectStatus::InProgress,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Experience => Item::Experience(Experience {
                id,
                company: String::new(),
                position: String::new(),
                title: Some(String::new()),
                location: Some(String::new()),
                employment_type: Some("Internship".to_string()),
                category: Some(String::new()),
                period: String::new(),
                description: String::new(),
                technologies: vec![],
                achievements: vec![],
                responsibilities: vec![],
                start_date: Some(String::new()),
                end_date: Some(String::new()),
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Timeline => Item::Timeline(TimelineEvent {
                id,
                year,
                title: String::new(),
                description: String::new(),
                highlights: vec![],
                icon: Some("Briefcase".to_string()),
                color: Some("bg-blue-500".to_string()),
                date: Some(now.to_rfc3339()),
                event_type: TimelineEventType::Work,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::SkillCategory => Item::SkillCategory(SkillCategory {
                id,
                title: String::new(),
                icon: "Code".to_string(),
                color: "text-blue-600".to_string(),
                skills: vec![],
            }),
            ItemKind::Skill => Item::Skill(Skill {
                id,
                name: String::new(),
                level: 50,
                projects: 0,
                category: parent_id.unwrap_or_default().to_string(),
            }),
            ItemKind::Course => Item::Course(Course {
                id,
                institution: String::new(),
                period: String::new(),
                course: String::new(),
                courses: vec![],
                status: CourseStatus::InProgress,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Volunteering => Item::Volunteering(Volunteering {
                id,
                organization: String::new(),
                period: String::new(),
                description: String::new(),
                location: None,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Activity => Item::Activity(Activity {
                id,
                title: String::new(),
                organization: String::new(),
                period: String::new(),
                activity_type: ActivityType::Technical,
                description: None,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Competition => Item::Competition(Competition {
                id,
                name: String::new(),
                year,
                status: CompetitionStatus::Upcoming,
                description: None,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Award => Item::Award(Award {
                id,
                title: String::new(),
                date: String::new(),
                description: String::new(),
                organization: None,
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
            ItemKind::Testimonial => Item::Testimonial(Testimonial {
                id,
                name: String::new(),
                title: String::new(),
                company: String::new(),
                image: String::new(),
                rating: 5,
                text: String::new(),
                relationship: String::new(),
                created_at: now,
                updated_at: now,
                files: vec![],
            }),
        }
    }

    /// Copy of a stored record, ready to be edited as a draft.
    pub fn open_for_edit(
        &self,
        document: &PortfolioDocument,
        kind: ItemKind,
        id: &str,
        parent_id: Option<&str>,
    ) -> Result<Item, ContentError> {
        let doc = document;
        Ok(match kind {
            ItemKind::Project => Item::Project(find_cloned(&doc.projects, kind, id)?),
            ItemKind::Experience => Item::Experience(find_cloned(&doc.experiences, kind, id)?),
            ItemKind::Timeline => Item::Timeline(find_cloned(&doc.timeline, kind, id)?),
            ItemKind::SkillCategory => {
                Item::SkillCategory(find_cloned(&doc.skill_categories, kind, id)?)
            }
            ItemKind::Skill => {
                let skill = match parent_id {
                    Some(parent) => {
                        let category = doc
                            .skill_categories
                            .iter()
                            .find(|c| c.id == parent)
                            .ok_or_else(|| {
                                ContentError::OrphanSkillReference(parent.to_string())
                            })?;
                        find_cloned(&category.skills, kind, id)?
                    }
                    None => doc
                        .all_skills()
                        .find(|s| s.id == id)
                        .cloned()
                        .ok_or_else(|| ContentError::NotFound {
                            kind,
                            id: id.to_string(),
                        })?,
                };
                Item::Skill(skill)
            }
            ItemKind::Course => Item::Course(find_cloned(&doc.courses, kind, id)?),
            ItemKind::Volunteering => Item::Volunteering(find_cloned(&doc.volunteering, kind, id)?),
            ItemKind::Activity => Item::Activity(find_cloned(&doc.activities, kind, id)?),
            ItemKind::Competition => Item::Competition(find_cloned(&doc.competitions, kind, id)?),
            ItemKind::Award => Item::Award(find_cloned(&doc.awards, kind, id)?),
            ItemKind::Testimonial => Item::Testimonial(find_cloned(&doc.testimonials, kind, id)?),
        })
    }

    /// Upsert `item` into its collection: update in place when the id is
    /// already present, append otherwise.
    pub fn commit(
        &self,
        document: &PortfolioDocument,
        item: Item,
        parent_id: Option<&str>,
    ) -> Result<PortfolioDocument, ContentError> {
        validate_item(&item)?;

        let mut doc = document.clone();
        match item {
            Item::Project(r) => upsert_dated(&mut doc.projects, r),
            Item::Experience(r) => upsert_dated(&mut doc.experiences, r),
            Item::Timeline(r) => upsert_dated(&mut doc.timeline, r),
            Item::Course(r) => upsert_dated(&mut doc.courses, r),
            Item::Volunteering(r) => upsert_dated(&mut doc.volunteering, r),
            Item::Activity(r) => upsert_dated(&mut doc.activities, r),
            Item::Competition(r) => upsert_dated(&mut doc.competitions, r),
            Item::Award(r) => upsert_dated(&mut doc.awards, r),
            Item::Testimonial(r) => upsert_dated(&mut doc.testimonials, r),
            Item::SkillCategory(mut category) => {
                for skill in &mut category.skills {
                    skill.category = category.id.clone();
                }
                upsert(&mut doc.skill_categories, category);
            }
            Item::Skill(skill) => commit_skill(&mut doc.skill_categories, skill, parent_id)?,
        }
        Ok(doc)
    }

    /// Drop the record with `id`. Unknown ids leave the document unchanged.
    /// Removing a category removes its skills with it.
    pub fn remove(
        &self,
        document: &PortfolioDocument,
        kind: ItemKind,
        id: &str,
        parent_id: Option<&str>,
    ) -> PortfolioDocument {
        let mut doc = document.clone();
        match kind {
            ItemKind::Project => remove_by_id(&mut doc.projects, id),
            ItemKind::Experience => remove_by_id(&mut doc.experiences, id),
            ItemKind::Timeline => remove_by_id(&mut doc.timeline, id),
            ItemKind::SkillCategory => remove_by_id(&mut doc.skill_categories, id),
            ItemKind::Skill => {
                for category in doc
                    .skill_categories
                    .iter_mut()
                    .filter(|c| parent_id.is_none_or(|parent| c.id == parent))
                {
                    remove_by_id(&mut category.skills, id);
                }
            }
            ItemKind::Course => remove_by_id(&mut doc.courses, id),
            ItemKind::Volunteering => remove_by_id(&mut doc.volunteering, id),
            ItemKind::Activity => remove_by_id(&mut doc.activities, id),
            ItemKind::Competition => remove_by_id(&mut doc.competitions, id),
            ItemKind::Award => remove_by_id(&mut doc.awards, id),
            ItemKind::Testimonial => remove_by_id(&mut doc.testimonials, id),
        }
        doc
    }

    /// Swap the record with its neighbour. Moving past either end is a no-op.
    pub fn reorder(
        &self,
        document: &PortfolioDocument,
        kind: ItemKind,
        id: &str,
        direction: Direction,
    ) -> Result<PortfolioDocument, ContentError> {
        let mut doc = document.clone();
        match kind {
            ItemKind::Project => swap_adjacent(&mut doc.projects, id, direction),
            ItemKind::Experience => swap_adjacent(&mut doc.experiences, id, direction),
            ItemKind::Timeline => swap_adjacent(&mut doc.timeline, id, direction),
            other => return Err(UnknownItemKind(other.to_string()).into()),
        }
        Ok(doc)
    }

    pub fn append_to_list_field(
        &self,
        mut draft: Item,
        field: &str,
        value: &str,
    ) -> Result<Item, ContentError> {
        let kind = draft.kind();
        let list = draft
            .list_field_mut(field)
            .ok_or_else(|| ContentError::UnknownListField {
                kind,
                field: field.to_string(),
            })?;

        let value = value.trim();
        if !value.is_empty() {
            list.push(value.to_string());
        }
        Ok(draft)
    }

    pub fn remove_from_list_field(
        &self,
        mut draft: Item,
        field: &str,
        index: usize,
    ) -> Result<Item, ContentError> {
        let kind = draft.kind();
        let list = draft
            .list_field_mut(field)
            .ok_or_else(|| ContentError::UnknownListField {
                kind,
                field: field.to_string(),
            })?;

        if index < list.len() {
            list.remove(index);
        }
        Ok(draft)
    }

    pub fn attach_file(
        &self,
        mut draft: Item,
        attachment: FileAttachment,
    ) -> Result<Item, ContentError> {
        let kind = draft.kind();
        draft
            .files_mut()
            .ok_or(ContentError::AttachmentsNotSupported(kind))?
            .push(attachment);
        Ok(draft)
    }

    pub fn detach_file(&self, mut draft: Item, index: usize) -> Result<Item, ContentError> {
        let kind = draft.kind();
        let files = draft
            .files_mut()
            .ok_or(ContentError::AttachmentsNotSupported(kind))?;
        if index < files.len() {
            files.remove(index);
        }
        Ok(draft)
    }
}

fn commit_skill(
    categories: &mut [SkillCategory],
    mut skill: Skill,
    parent_id: Option<&str>,
) -> Result<(), ContentError> {
    let target = if skill.category.trim().is_empty() {
        parent_id.unwrap_or_default().to_string()
    } else {
        skill.category.clone()
    };

    let target_index = categories
        .iter()
        .position(|c| c.id == target)
        .ok_or_else(|| ContentError::OrphanSkillReference(target.clone()))?;

    // A skill lives in exactly one category; committing it elsewhere moves it.
    for (index, category) in categories.iter_mut().enumerate() {
        if index != target_index {
            remove_by_id(&mut category.skills, &skill.id);
        }
    }

    skill.category = target;
    upsert(&mut categories[target_index].skills, skill);
    Ok(())
}
