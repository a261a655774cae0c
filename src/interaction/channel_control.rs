use serde::{Deserialize, Serialize};

use crate::core::{Channel, Column, ColumnCatalog};
use crate::error::{AutoVegaError, AutoVegaResult};

use super::{ChannelEdit, ChannelEditKind};

/// Serializable view of one channel control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelControlSnapshot {
    pub channel: Channel,
    pub enabled: bool,
    pub selected_column: Option<String>,
}

/// Dropdown plus enable checkbox for a single channel.
///
/// Invariant: an enabled control always has a selected column. Enabling a
/// control without a selection picks the first catalog column; disabling
/// keeps the selection so a later re-enable restores it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelControl {
    channel: Channel,
    enabled: bool,
    selected: Option<Column>,
    default_column: Column,
}

impl ChannelControl {
    /// Creates a control that is enabled iff `initial` is bound.
    pub fn new(
        channel: Channel,
        catalog: &ColumnCatalog,
        initial: Option<Column>,
    ) -> AutoVegaResult<Self> {
        let default_column = catalog
            .first()
            .cloned()
            .ok_or(AutoVegaError::InsufficientColumns { found: 0 })?;
        if let Some(column) = &initial {
            if !catalog.contains(column) {
                return Err(AutoVegaError::UnknownColumn(column.name().to_owned()));
            }
        }

        let control = Self {
            channel,
            enabled: initial.is_some(),
            selected: initial,
            default_column,
        };
        control.debug_assert_invariant();
        Ok(control)
    }

    #[must_use]
    pub fn channel(&self) -> Channel {
        self.channel
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Current dropdown value, remembered even while the control is disabled.
    #[must_use]
    pub fn selected_column(&self) -> Option<&Column> {
        self.selected.as_ref()
    }

    /// Column this control contributes to the encoding, if any.
    #[must_use]
    pub fn binding(&self) -> Option<&Column> {
        if self.enabled {
            self.selected.as_ref()
        } else {
            None
        }
    }

    /// Changes the dropdown value. Only an enabled control reports the edit.
    pub fn set_selection(&mut self, column: Column) -> Option<ChannelEdit> {
        self.selected = Some(column);
        self.debug_assert_invariant();
        self.enabled.then_some(ChannelEdit {
            channel: self.channel,
            kind: ChannelEditKind::Selection,
        })
    }

    /// Toggles the checkbox. Always reports the edit.
    pub fn set_enabled(&mut self, enabled: bool) -> ChannelEdit {
        if enabled && self.selected.is_none() {
            self.selected = Some(self.default_column.clone());
        }
        self.enabled = enabled;
        self.debug_assert_invariant();
        ChannelEdit {
            channel: self.channel,
            kind: ChannelEditKind::Enabled,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> ChannelControlSnapshot {
        ChannelControlSnapshot {
            channel: self.channel,
            enabled: self.enabled,
            selected_column: self.selected.as_ref().map(|column| column.name().to_owned()),
        }
    }

    fn debug_assert_invariant(&self) {
        debug_assert!(
            !self.enabled || self.selected.is_some(),
            "enabled channel `{}` has no selected column",
            self.channel
        );
    }
}

#[cfg(test)]
mod tests {
    use super::ChannelControl;
    use crate::core::{Channel, Column, ColumnCatalog};
    use crate::error::AutoVegaError;
    use crate::interaction::ChannelEditKind;

    fn catalog() -> ColumnCatalog {
        ColumnCatalog::new(["a", "b", "c"]).expect("catalog")
    }

    #[test]
    fn unbound_control_starts_disabled() {
        let control = ChannelControl::new(Channel::Color, &catalog(), None).expect("control");
        assert!(!control.is_enabled());
        assert_eq!(control.selected_column(), None);
        assert_eq!(control.binding(), None);
    }

    #[test]
    fn enabling_without_selection_picks_first_column() {
        let mut control = ChannelControl::new(Channel::Color, &catalog(), None).expect("control");
        let edit = control.set_enabled(true);
        assert_eq!(edit.kind, ChannelEditKind::Enabled);
        assert_eq!(control.binding(), Some(&Column::new("a", 0)));
    }

    #[test]
    fn disabled_selection_is_silent_but_remembered() {
        let mut control = ChannelControl::new(Channel::Color, &catalog(), None).expect("control");
        assert_eq!(control.set_selection(Column::new("c", 2)), None);
        assert_eq!(control.binding(), None);

        control.set_enabled(true);
        assert_eq!(control.binding(), Some(&Column::new("c", 2)));
    }

    #[test]
    fn initial_column_outside_catalog_is_rejected() {
        let err = ChannelControl::new(Channel::X, &catalog(), Some(Column::new("zz", 0)))
            .expect_err("foreign column must fail");
        assert!(matches!(err, AutoVegaError::UnknownColumn(name) if name == "zz"));
    }
}
