//! Inline Edit State
//!
//! Per-row edit mode: `Viewing` until the edit trigger seeds a draft, then
//! `Editing` until the draft is committed or discarded.

/// What a row should do after an edit event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Save the draft as the task's new text
    Commit(String),
    /// Leave the task untouched
    Unchanged,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditState {
    #[default]
    Viewing,
    Editing { draft: String },
}

impl EditState {
    pub fn is_editing(&self) -> bool {
        matches!(self, EditState::Editing { .. })
    }

    pub fn draft(&self) -> Option<&str> {
        match self {
            EditState::Editing { draft } => Some(draft.as_str()),
            EditState::Viewing => None,
        }
    }

    /// Enter edit mode seeded with the task's current text
    pub fn begin(&mut self, current_text: &str) {
        *self = EditState::Editing { draft: current_text.to_string() };
    }

    /// Track typing; ignored while viewing
    pub fn set_draft(&mut self, text: String) {
        if let EditState::Editing { draft } = self {
            *draft = text;
        }
    }

    /// Commit a non-blank draft and return to viewing.
    /// A blank draft keeps the editor open.
    pub fn save(&mut self) -> EditOutcome {
        let text = match self {
            EditState::Editing { draft } if !draft.trim().is_empty() => draft.trim().to_string(),
            _ => return EditOutcome::Unchanged,
        };
        *self = EditState::Viewing;
        EditOutcome::Commit(text)
    }

    /// Drop the draft and return to viewing
    pub fn cancel(&mut self) {
        *self = EditState::Viewing;
    }

    /// `Enter` saves, `Escape` cancels, anything else is ignored
    pub fn key(&mut self, key: &str) -> EditOutcome {
        match key {
            "Enter" => self.save(),
            "Escape" => {
                self.cancel();
                EditOutcome::Unchanged
            }
            _ => EditOutcome::Unchanged,
        }
    }

    /// Losing focus behaves like save
    pub fn blur(&mut self) -> EditOutcome {
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn editing(draft: &str) -> EditState {
        let mut state = EditState::default();
        state.begin("original");
        state.set_draft(draft.to_string());
        state
    }

    #[test]
    fn test_begin_seeds_draft() {
        let mut state = EditState::default();
        assert!(!state.is_editing());
        state.begin("Buy milk");
        assert_eq!(state.draft(), Some("Buy milk"));
    }

    #[test]
    fn test_save_commits_and_exits() {
        let mut state = editing("Buy oat milk ");
        assert_eq!(state.save(), EditOutcome::Commit("Buy oat milk".to_string()));
        assert_eq!(state, EditState::Viewing);
    }

    #[test]
    fn test_blank_save_is_refused() {
        for draft in ["", "   ", "\n\t"] {
            let mut state = editing(draft);
            assert_eq!(state.save(), EditOutcome::Unchanged);
            assert_eq!(state.draft(), Some(draft));
        }
    }

    #[test]
    fn test_cancel_discards() {
        let mut state = editing("changed");
        state.cancel();
        assert_eq!(state, EditState::Viewing);
        // Re-entering starts from the task text, not the old draft
        state.begin("original");
        assert_eq!(state.draft(), Some("original"));
    }

    #[test]
    fn test_keys() {
        let mut state = editing("via enter");
        assert_eq!(state.key("a"), EditOutcome::Unchanged);
        assert!(state.is_editing());
        assert_eq!(state.key("Enter"), EditOutcome::Commit("via enter".to_string()));

        let mut state = editing("via escape");
        assert_eq!(state.key("Escape"), EditOutcome::Unchanged);
        assert!(!state.is_editing());
    }

    #[test]
    fn test_blur_saves() {
        let mut state = editing("blurred");
        assert_eq!(state.blur(), EditOutcome::Commit("blurred".to_string()));
    }

    #[test]
    fn test_events_while_viewing_are_ignored() {
        let mut state = EditState::Viewing;
        state.set_draft("ghost".to_string());
        assert_eq!(state.blur(), EditOutcome::Unchanged);
        assert_eq!(state.key("Enter"), EditOutcome::Unchanged);
        assert_eq!(state, EditState::Viewing);
    }
}
