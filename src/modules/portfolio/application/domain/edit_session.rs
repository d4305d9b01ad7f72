use super::content_repository::{ContentError, ContentRepository};
use super::entities::{FileAttachment, PortfolioDocument};
use super::item::{Item, ItemKind};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EditSessionError {
    #[error("No draft is open")]
    NoDraft,

    #[error(transparent)]
    Content(#[from] ContentError),
}

#[derive(Debug, Clone, PartialEq, Default)]
enum EditState {
    #[default]
    Idle,
    Drafting {
        parent_id: Option<String>,
        item: Item,
    },
}

/// One editor working on at most one draft.
///
/// `Idle -> Drafting` through `begin_new` / `begin_edit` (or `resume` for a
/// draft the client kept), back to `Idle` through a successful `commit`.
/// A failed commit keeps the draft so it can be fixed and retried. Dropping
/// the session discards the draft.
#[derive(Debug, Clone, Default)]
pub struct EditSession {
    repository: ContentRepository,
    state: EditState,
}

impl EditSession {
    pub fn new(repository: ContentRepository) -> Self {
        Self {
            repository,
            state: EditState::Idle,
        }
    }

    /// Pick up a draft that was kept by the client between requests.
    pub fn resume(repository: ContentRepository, item: Item, parent_id: Option<&str>) -> Self {
        let mut session = Self::new(repository);
        session.enter(parent_id, item);
        session
    }

    pub fn into_draft(self) -> Option<Item> {
        match self.state {
            EditState::Drafting { item, .. } => Some(item),
            EditState::Idle => None,
        }
    }

    /// Opening a draft while another is open discards the old one.
    pub fn begin_new(&mut self, kind: ItemKind, parent_id: Option<&str>) -> Item {
        let item = self.repository.create_draft(kind, parent_id);
        self.enter(parent_id, item)
    }

    pub fn begin_edit(
        &mut self,
        document: &PortfolioDocument,
        kind: ItemKind,
        id: &str,
        parent_id: Option<&str>,
    ) -> Result<Item, ContentError> {
        let item = self
            .repository
            .open_for_edit(document, kind, id, parent_id)?;
        Ok(self.enter(parent_id, item))
    }

    pub fn append_to_list_field(
        &mut self,
        field: &str,
        value: &str,
    ) -> Result<(), EditSessionError> {
        let repository = self.repository.clone();
        self.map_draft(|item| repository.append_to_list_field(item, field, value))
    }

    pub fn remove_from_list_field(
        &mut self,
        field: &str,
        index: usize,
    ) -> Result<(), EditSessionError> {
        let repository = self.repository.clone();
        self.map_draft(|item| repository.remove_from_list_field(item, field, index))
    }

    pub fn attach_file(&mut self, attachment: FileAttachment) -> Result<(), EditSessionError> {
        let repository = self.repository.clone();
        self.map_draft(|item| repository.attach_file(item, attachment))
    }

    pub fn detach_file(&mut self, index: usize) -> Result<(), EditSessionError> {
        let repository = self.repository.clone();
        self.map_draft(|item| repository.detach_file(item, index))
    }

    pub fn commit(
        &mut self,
        document: &PortfolioDocument,
    ) -> Result<PortfolioDocument, EditSessionError> {
        let EditState::Drafting { parent_id, item } = &self.state else {
            return Err(EditSessionError::NoDraft);
        };

        let updated = self
            .repository
            .commit(document, item.clone(), parent_id.as_deref())?;
        self.state = EditState::Idle;
        Ok(updated)
    }

    fn enter(&mut self, parent_id: Option<&str>, item: Item) -> Item {
        self.state = EditState::Drafting {
            parent_id: parent_id.map(str::to_string),
            item: item.clone(),
        };
        item
    }

    fn map_draft<F>(&mut self, f: F) -> Result<(), EditSessionError>
    where
        F: FnOnce(Item) -> Result<Item, ContentError>,
    {
        let EditState::Drafting { item, .. } = &mut self.state else {
            return Err(EditSessionError::NoDraft);
        };
        *item = f(item.clone())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portfolio::application::domain::default_document::default_document;

    fn session() -> EditSession {
        EditSession::new(ContentRepository::new())
    }

    #[test]
    fn starts_idle() {
        let session = session();
        assert!(session.into_draft().is_none());
    }

    #[test]
    fn commit_returns_to_idle() {
        let mut session = session();
        session.begin_new(ItemKind::Award, None);

        let doc = session.commit(&default_document()).unwrap();

        assert_eq!(doc.awards.len(), 1);
        assert!(session.into_draft().is_none());
    }

    #[test]
    fn failed_commit_keeps_draft() {
        let mut session = session();
        let doc = default_document();
        session.begin_new(ItemKind::Skill, Some("nope"));

        let err = session.commit(&doc).unwrap_err();

        assert!(matches!(
            err,
            EditSessionError::Content(ContentError::OrphanSkillReference(_))
        ));
        assert!(session.into_draft().is_some());
    }

    #[test]
    fn commit_without_draft_fails() {
        let mut session = session();
        assert!(matches!(
            session.commit(&default_document()),
            Err(EditSessionError::NoDraft)
        ));
    }

    #[test]
    fn opening_another_draft_replaces_the_first() {
        let mut session = session();
        let first_id = session.begin_new(ItemKind::Project, None).id().to_string();

        session
            .begin_edit(&default_document(), ItemKind::Skill, "1", None)
            .unwrap();

        let draft = session.into_draft().unwrap();
        assert_eq!(draft.kind(), ItemKind::Skill);
        assert_ne!(draft.id(), first_id);
    }

    #[test]
    fn begin_edit_of_missing_record_stays_idle() {
        let mut session = session();

        let err = session
            .begin_edit(&default_document(), ItemKind::Award, "missing", None)
            .unwrap_err();

        assert!(matches!(err, ContentError::NotFound { .. }));
        assert!(session.into_draft().is_none());
    }

    #[test]
    fn list_edits_apply_to_open_draft() {
        let mut session = session();
        session.begin_new(ItemKind::Course, None);
        session
            .append_to_list_field("courses", "PLC Programming")
            .unwrap();
        session.append_to_list_field("courses", "SCADA").unwrap();
        session.remove_from_list_field("courses", 0).unwrap();

        let Some(Item::Course(course)) = session.into_draft() else {
            panic!("expected a course draft");
        };
        assert_eq!(course.courses, vec!["SCADA".to_string()]);
    }

    #[test]
    fn resumed_draft_commits_with_its_parent() {
        let repository = ContentRepository::new();
        let draft = repository.create_draft(ItemKind::Skill, None);
        let mut session = EditSession::resume(repository, draft, Some("iot"));

        let doc = session.commit(&default_document()).unwrap();

        assert_eq!(doc.skill_categories[3].skills.len(), 5);
    }

    #[test]
    fn list_edit_without_draft_fails() {
        let mut session = session();
        assert_eq!(
            session.append_to_list_field("technologies", "Rust"),
            Err(EditSessionError::NoDraft)
        );
    }
}
