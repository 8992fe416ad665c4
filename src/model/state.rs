//! Mutable dashboard state
//!
//! The only mutable entity in the core: which tab is active. Reset on
//! restart, never persisted.

use crate::error::UnknownTabError;
use crate::model::DashboardModel;

/// Active-tab selection over a validated model.
#[derive(Debug, Clone)]
pub struct DashboardState {
    active_tab_id: String,
}

impl DashboardState {
    /// Initial state: the model's first tab. A validated model always
    /// has at least one tab.
    pub fn new(model: &DashboardModel) -> Self {
        Self {
            active_tab_id: model.tabs[0].id.clone(),
        }
    }

    pub fn active_tab_id(&self) -> &str {
        &self.active_tab_id
    }

    /// Index of the active tab within the model's tab order.
    pub fn active_index(&self, model: &DashboardModel) -> usize {
        model
            .tabs
            .iter()
            .position(|t| t.id == self.active_tab_id)
            .unwrap_or(0)
    }

    /// Select a tab by id. Unknown ids are rejected and the selection
    /// is left unchanged.
    pub fn select_tab(
        &mut self,
        model: &DashboardModel,
        id: &str,
    ) -> Result<(), UnknownTabError> {
        if model.tab(id).is_none() {
            return Err(UnknownTabError(id.to_string()));
        }
        self.active_tab_id = id.to_string();
        Ok(())
    }

    /// Cycle to the next tab in model order, wrapping at the end.
    pub fn select_next(&mut self, model: &DashboardModel) {
        let next = (self.active_index(model) + 1) % model.tabs.len();
        self.active_tab_id = model.tabs[next].id.clone();
    }

    /// Cycle to the previous tab in model order, wrapping at the start.
    pub fn select_previous(&mut self, model: &DashboardModel) {
        let current = self.active_index(model);
        let prev = if current == 0 {
            model.tabs.len() - 1
        } else {
            current - 1
        };
        self.active_tab_id = model.tabs[prev].id.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TabModel;

    fn model(ids: &[&str]) -> DashboardModel {
        let tabs = ids
            .iter()
            .map(|id| TabModel {
                id: id.to_string(),
                label: id.to_string(),
                icon: None,
                sections: vec![],
            })
            .collect();
        DashboardModel::new("T", "", tabs, "").unwrap()
    }

    #[test]
    fn test_initial_state_is_first_tab() {
        let m = model(&["summary", "credits", "flows"]);
        let state = DashboardState::new(&m);
        assert_eq!(state.active_tab_id(), "summary");
        assert_eq!(state.active_index(&m), 0);
    }

    #[test]
    fn test_select_every_known_tab_succeeds() {
        let m = model(&["summary", "credits", "flows"]);
        let mut state = DashboardState::new(&m);
        for tab in &m.tabs {
            assert!(state.select_tab(&m, &tab.id).is_ok());
            assert_eq!(state.active_tab_id(), tab.id);
        }
    }

    #[test]
    fn test_unknown_tab_leaves_state_unchanged() {
        let m = model(&["summary", "credits"]);
        let mut state = DashboardState::new(&m);
        state.select_tab(&m, "credits").unwrap();

        let err = state.select_tab(&m, "livestock").unwrap_err();
        assert_eq!(err, UnknownTabError("livestock".to_string()));
        assert_eq!(state.active_tab_id(), "credits");
    }

    #[test]
    fn test_cycling_wraps() {
        let m = model(&["a", "b", "c"]);
        let mut state = DashboardState::new(&m);

        state.select_previous(&m);
        assert_eq!(state.active_tab_id(), "c");
        state.select_next(&m);
        assert_eq!(state.active_tab_id(), "a");
        state.select_next(&m);
        assert_eq!(state.active_tab_id(), "b");
    }
}
