use std::collections::HashSet;

use super::entities::{PortfolioDocument, Record, Skill, Testimonial};
use super::item::{Item, ItemKind};

pub const SKILL_LEVEL_RANGE: std::ops::RangeInclusive<i32> = 0..=100;
pub const RATING_RANGE: std::ops::RangeInclusive<i32> = 1..=5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{kind} id must not be empty")]
    EmptyId { kind: ItemKind },

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: ItemKind, id: String },

    #[error("skill {skill_id}: level {level} is outside 0..=100")]
    SkillLevelOutOfRange { skill_id: String, level: i32 },

    #[error("testimonial {testimonial_id}: rating {rating} is outside 1..=5")]
    RatingOutOfRange { testimonial_id: String, rating: i32 },

    #[error("skill {skill_id} references category {referenced} but is stored in {owner}")]
    SkillCategoryMismatch {
        skill_id: String,
        referenced: String,
        owner: String,
    },
}

fn validate_skill(skill: &Skill) -> Result<(), ValidationError> {
    if !SKILL_LEVEL_RANGE.contains(&skill.level) {
        return Err(ValidationError::SkillLevelOutOfRange {
            skill_id: skill.id.clone(),
            level: skill.level,
        });
    }
    Ok(())
}

fn validate_testimonial(testimonial: &Testimonial) -> Result<(), ValidationError> {
    if !RATING_RANGE.contains(&testimonial.rating) {
        return Err(ValidationError::RatingOutOfRange {
            testimonial_id: testimonial.id.clone(),
            rating: testimonial.rating,
        });
    }
    Ok(())
}

/// Field checks applied to a single record before it enters a collection.
/// Out-of-range numbers are rejected, never clamped.
pub fn validate_item(item: &Item) -> Result<(), ValidationError> {
    if item.id().trim().is_empty() {
        return Err(ValidationError::EmptyId { kind: item.kind() });
    }

    match item {
        Item::Skill(skill) => validate_skill(skill),
        Item::SkillCategory(category) => {
            unique_ids(ItemKind::Skill, &category.skills)?;
            category.skills.iter().try_for_each(validate_skill)
        }
        Item::Testimonial(testimonial) => validate_testimonial(testimonial),
        _ => Ok(()),
    }
}

fn unique_ids<R: Record>(kind: ItemKind, records: &[R]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if record.id().trim().is_empty() {
            return Err(ValidationError::EmptyId { kind });
        }
        if !seen.insert(record.id()) {
            return Err(ValidationError::DuplicateId {
                kind,
                id: record.id().to_string(),
            });
        }
    }
    Ok(())
}

/// Whole-document checks for a replace coming from outside.
pub fn validate_document(document: &PortfolioDocument) -> Result<(), ValidationError> {
    unique_ids(ItemKind::SkillCategory, &document.skill_categories)?;
    unique_ids(ItemKind::Project, &document.projects)?;
    unique_ids(ItemKind::Experience, &document.experiences)?;
    unique_ids(ItemKind::Timeline, &document.timeline)?;
    unique_ids(ItemKind::Course, &document.courses)?;
    unique_ids(ItemKind::Volunteering, &document.volunteering)?;
    unique_ids(ItemKind::Activity, &document.activities)?;
    unique_ids(ItemKind::Competition, &document.competitions)?;
    unique_ids(ItemKind::Award, &document.awards)?;
    unique_ids(ItemKind::Testimonial, &document.testimonials)?;

    for category in &document.skill_categories {
        unique_ids(ItemKind::Skill, &category.skills)?;
        for skill in &category.skills {
            validate_skill(skill)?;
            if skill.category != category.id {
                return Err(ValidationError::SkillCategoryMismatch {
                    skill_id: skill.id.clone(),
                    referenced: skill.category.clone(),
                    owner: category.id.clone(),
                });
            }
        }
    }

    document
        .testimonials
        .iter()
        .try_for_each(validate_testimonial)
}
