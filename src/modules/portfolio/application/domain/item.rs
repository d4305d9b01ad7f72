use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use utoipa::ToSchema;

use super::entities::{
    Activity, Award, Competition, Course, Dated, Experience, FileAttachment, Project, Skill,
    SkillCategory, Testimonial, TimelineEvent, Volunteering,
};

//
// ──────────────────────────────────────────────────────────
// ItemKind
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub enum ItemKind {
    Project,
    Experience,
    Timeline,
    SkillCategory,
    Skill,
    Course,
    Volunteering,
    Activity,
    Competition,
    Award,
    Testimonial,
}

impl ItemKind {
    pub const ALL: [ItemKind; 11] = [
        ItemKind::Project,
        ItemKind::Experience,
        ItemKind::Timeline,
        ItemKind::SkillCategory,
        ItemKind::Skill,
        ItemKind::Course,
        ItemKind::Volunteering,
        ItemKind::Activity,
        ItemKind::Competition,
        ItemKind::Award,
        ItemKind::Testimonial,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Project => "project",
            ItemKind::Experience => "experience",
            ItemKind::Timeline => "timeline",
            ItemKind::SkillCategory => "skillCategory",
            ItemKind::Skill => "skill",
            ItemKind::Course => "course",
            ItemKind::Volunteering => "volunteering",
            ItemKind::Activity => "activity",
            ItemKind::Competition => "competition",
            ItemKind::Award => "award",
            ItemKind::Testimonial => "testimonial",
        }
    }

    /// Kinds with a manual display order.
    pub fn is_reorderable(&self) -> bool {
        matches!(
            self,
            ItemKind::Project | ItemKind::Experience | ItemKind::Timeline
        )
    }

    /// Names of the string-array fields editable on a draft of this kind.
    pub fn list_fields(&self) -> &'static [&'static str] {
        match self {
            ItemKind::Project => &[
                "technologies",
                "objectives",
                "challenges",
                "achievements",
                "images",
            ],
            ItemKind::Experience => &["technologies", "achievements", "responsibilities"],
            ItemKind::Timeline => &["highlights"],
            ItemKind::Course => &["courses"],
            _ => &[],
        }
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown item kind: {0}")]
pub struct UnknownItemKind(pub String);

impl FromStr for ItemKind {
    type Err = UnknownItemKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ItemKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| UnknownItemKind(s.to_string()))
    }
}

//
// ──────────────────────────────────────────────────────────
// Item
// ──────────────────────────────────────────────────────────
//

/// One record of any collection. Serializes as the bare record.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Item {
    Project(Project),
    Experience(Experience),
    Timeline(TimelineEvent),
    SkillCategory(SkillCategory),
    Skill(Skill),
    Course(Course),
    Volunteering(Volunteering),
    Activity(Activity),
    Competition(Competition),
    Award(Award),
    Testimonial(Testimonial),
}

impl Item {
    /// Parse a bare record whose kind is known from context.
    pub fn from_value(kind: ItemKind, value: serde_json::Value) -> Result<Self, serde_json::Error> {
        Ok(match kind {
            ItemKind::Project => Item::Project(serde_json::from_value(value)?),
            ItemKind::Experience => Item::Experience(serde_json::from_value(value)?),
            ItemKind::Timeline => Item::Timeline(serde_json::from_value(value)?),
            ItemKind::SkillCategory => Item::SkillCategory(serde_json::from_value(value)?),
            ItemKind::Skill => Item::Skill(serde_json::from_value(value)?),
            ItemKind::Course => Item::Course(serde_json::from_value(value)?),
            ItemKind::Volunteering => Item::Volunteering(serde_json::from_value(value)?),
            ItemKind::Activity => Item::Activity(serde_json::from_value(value)?),
            ItemKind::Competition => Item::Competition(serde_json::from_value(value)?),
            ItemKind::Award => Item::Award(serde_json::from_value(value)?),
            ItemKind::Testimonial => Item::Testimonial(serde_json::from_value(value)?),
        })
    }

    pub fn kind(&self) -> ItemKind {
        match self {
            Item::Project(_) => ItemKind::Project,
            Item::Experience(_) => ItemKind::Experience,
            Item::Timeline(_) => ItemKind::Timeline,
            Item::SkillCategory(_) => ItemKind::SkillCategory,
            Item::Skill(_) => ItemKind::Skill,
            Item::Course(_) => ItemKind::Course,
            Item::Volunteering(_) => ItemKind::Volunteering,
            Item::Activity(_) => ItemKind::Activity,
            Item::Competition(_) => ItemKind::Competition,
            Item::Award(_) => ItemKind::Award,
            Item::Testimonial(_) => ItemKind::Testimonial,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Item::Project(r) => &r.id,
            Item::Experience(r) => &r.id,
            Item::Timeline(r) => &r.id,
            Item::SkillCategory(r) => &r.id,
            Item::Skill(r) => &r.id,
            Item::Course(r) => &r.id,
            Item::Volunteering(r) => &r.id,
            Item::Activity(r) => &r.id,
            Item::Competition(r) => &r.id,
            Item::Award(r) => &r.id,
            Item::Testimonial(r) => &r.id,
        }
    }

    /// The date-stamped view of this item; `None` for skills and categories.
    pub fn as_dated_mut(&mut self) -> Option<&mut dyn Dated> {
        match self {
            Item::Project(r) => Some(r),
            Item::Experience(r) => Some(r),
            Item::Timeline(r) => Some(r),
            Item::Course(r) => Some(r),
            Item::Volunteering(r) => Some(r),
            Item::Activity(r) => Some(r),
            Item::Competition(r) => Some(r),
            Item::Award(r) => Some(r),
            Item::Testimonial(r) => Some(r),
            Item::SkillCategory(_) | Item::Skill(_) => None,
        }
    }

    pub fn files_mut(&mut self) -> Option<&mut Vec<FileAttachment>> {
        self.as_dated_mut().map(|dated| dated.files_mut())
    }

    pub fn list_field_mut(&mut self, field: &str) -> Option<&mut Vec<String>> {
        match (self, field) {
            (Item::Project(p), "technologies") => Some(&mut p.technologies),
            (Item::Project(p), "objectives") => Some(&mut p.objectives),
            (Item::Project(p), "challenges") => Some(&mut p.challenges),
            (Item::Project(p), "achievements") => Some(&mut p.achievements),
            (Item::Project(p), "images") => Some(&mut p.images),
            (Item::Experience(e), "technologies") => Some(&mut e.technologies),
            (Item::Experience(e), "achievements") => Some(&mut e.achievements),
            (Item::Experience(e), "responsibilities") => Some(&mut e.responsibilities),
            (Item::Timeline(t), "highlights") => Some(&mut t.highlights),
            (Item::Course(c), "courses") => Some(&mut c.courses),
            _ => None,
        }
    }
}
