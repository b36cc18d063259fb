//! Committed and staged filter state.
//!
//! The desktop filter bar edits the committed state directly, one dimension at
//! a time. The mobile drawer edits a staged copy taken when it opens; the copy
//! replaces the committed state only when applied.
//!
//! ```text
//! Closed --open--> Staging --apply--> Closed   (committed := staged)
//!                  Staging --dismiss-> Closed  (committed unchanged)
//!                  Staging --clear---> Closed  (committed := defaults)
//! ```
//!
//! # Example
//!
//! ```
//! use devcat_catalog::{DrawerState, FilterController};
//!
//! let mut controller = FilterController::new();
//! controller.set_bedrooms(Some(2));
//!
//! controller.open_drawer();
//! controller.stage(|draft| draft.bedrooms = Some(4))?;
//! assert_eq!(controller.committed().bedrooms, Some(2));
//!
//! controller.apply()?;
//! assert_eq!(controller.committed().bedrooms, Some(4));
//! assert_eq!(controller.drawer_state(), DrawerState::Closed);
//! # Ok::<(), devcat_catalog::ControllerError>(())
//! ```

use crate::filter::{FilterState, SortOrder, TypeToken};

/// Errors from drawer operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ControllerError {
    /// A staging operation was attempted while the drawer is closed.
    #[error("filter drawer is not open")]
    DrawerClosed,
}

/// Result type for controller operations.
pub type Result<T> = std::result::Result<T, ControllerError>;

/// Whether the filter drawer holds a staged draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawerState {
    Closed,
    Staging,
}

/// Owner of the committed and staged filter states.
///
/// The committed state always exists. The staged state exists only while the
/// drawer is open. The controller is the only writer of either.
///
/// `defaults` is what [`FilterController::clear`] returns to. It is the
/// neutral state unless the controller was built with
/// [`FilterController::with_defaults`].
#[derive(Debug, Clone, Default)]
pub struct FilterController {
    committed: FilterState,
    staged: Option<FilterState>,
    defaults: FilterState,
    revision: u64,
}

impl FilterController {
    /// Creates a controller with the neutral committed state and the drawer closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a controller whose committed state starts at, and clears back
    /// to, `defaults`. Used for a configured default sort.
    pub fn with_defaults(defaults: FilterState) -> Self {
        Self {
            committed: defaults.clone(),
            staged: None,
            defaults,
            revision: 0,
        }
    }

    /// The state [`FilterController::clear`] resets to.
    pub fn defaults(&self) -> &FilterState {
        &self.defaults
    }

    /// The state currently driving results.
    pub fn committed(&self) -> &FilterState {
        &self.committed
    }

    /// The drawer's draft, if the drawer is open.
    pub fn staged(&self) -> Option<&FilterState> {
        self.staged.as_ref()
    }

    pub fn drawer_state(&self) -> DrawerState {
        if self.staged.is_some() {
            DrawerState::Staging
        } else {
            DrawerState::Closed
        }
    }

    /// Number of times the committed state has changed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    // ==================== Desktop (committed) ====================

    /// Sets the location facet.
    pub fn set_location(&mut self, location: Option<String>) {
        self.commit_with(|state| state.location = location);
    }

    /// Sets the minimum bedroom count.
    pub fn set_bedrooms(&mut self, bedrooms: Option<u32>) {
        self.commit_with(|state| state.bedrooms = bedrooms);
    }

    /// Sets the price window.
    pub fn set_price_range(&mut self, price_range: (u64, u64)) {
        self.commit_with(|state| state.price_range = price_range);
    }

    /// Replaces the selected property types.
    pub fn set_types(&mut self, types: Vec<TypeToken>) {
        self.commit_with(|state| state.types = types);
    }

    /// Adds the type if absent, removes it if present.
    pub fn toggle_type(&mut self, token: TypeToken) {
        self.commit_with(|state| toggle(&mut state.types, token));
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.commit_with(|state| state.sort = sort);
    }

    pub fn set_status(&mut self, status: Vec<String>) {
        self.commit_with(|state| state.status = status);
    }

    /// Replaces the committed state wholesale. The drawer is left as is.
    pub fn replace_committed(&mut self, state: FilterState) {
        self.commit_with(|current| *current = state);
    }

    /// Resets the committed state to the defaults and closes the drawer.
    ///
    /// This is both the desktop "clear filters" action and the drawer's
    /// "clear" terminal action.
    pub fn clear(&mut self) {
        self.staged = None;
        let defaults = self.defaults.clone();
        self.commit_with(|state| *state = defaults);
    }

    // ==================== Drawer (staged) ====================

    /// Opens the drawer with a copy of the committed state.
    ///
    /// Opening an already-open drawer discards the current draft and copies again.
    pub fn open_drawer(&mut self) {
        self.staged = Some(self.committed.clone());
    }

    /// Mutable access to the draft.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::DrawerClosed`] if the drawer is not open.
    pub fn staged_mut(&mut self) -> Result<&mut FilterState> {
        self.staged.as_mut().ok_or(ControllerError::DrawerClosed)
    }

    /// Edits the draft in place.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::DrawerClosed`] if the drawer is not open.
    pub fn stage<F>(&mut self, edit: F) -> Result<()>
    where
        F: FnOnce(&mut FilterState),
    {
        edit(self.staged_mut()?);
        Ok(())
    }

    /// Toggles a type in the draft.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::DrawerClosed`] if the drawer is not open.
    pub fn stage_toggle_type(&mut self, token: TypeToken) -> Result<()> {
        self.stage(|draft| toggle(&mut draft.types, token))
    }

    /// Commits the draft and closes the drawer.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::DrawerClosed`] if the drawer is not open.
    pub fn apply(&mut self) -> Result<&FilterState> {
        let staged = self.staged.take().ok_or(ControllerError::DrawerClosed)?;
        self.commit_with(|state| *state = staged);
        Ok(&self.committed)
    }

    /// Discards the draft and closes the drawer. The committed state is untouched.
    ///
    /// Returns true if a draft was discarded.
    pub fn dismiss(&mut self) -> bool {
        self.staged.take().is_some()
    }

    fn commit_with<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut FilterState),
    {
        let mut next = self.committed.clone();
        edit(&mut next);
        if next != self.committed {
            tracing::debug!(revision = self.revision + 1, filters = ?next, "committed filters changed");
            self.committed = next;
            self.revision += 1;
        }
    }
}

fn toggle(types: &mut Vec<TypeToken>, token: TypeToken) {
    if let Some(pos) = types.iter().position(|t| *t == token) {
        types.remove(pos);
    } else {
        types.push(token);
    }
}
