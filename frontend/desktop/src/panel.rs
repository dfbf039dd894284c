pub mod binding;
pub mod deps;
pub mod graphics;
pub mod help;
pub mod tabs;

use ahash::AHashMap;
use binding::{Binding, Shown};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ControlId(pub &'static str);

impl fmt::Display for ControlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum PanelError {
    UnknownControl(ControlId),
    KindMismatch(ControlId),
    IndexOutOfRange { id: ControlId, index: usize },
    /// Labels and groups hold no value.
    NotEditable(ControlId),
    Disabled(ControlId),
}

impl fmt::Display for PanelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelError::UnknownControl(id) => write!(f, "no control named `{id}`"),
            PanelError::KindMismatch(id) => {
                write!(f, "value doesn't match the kind of control `{id}`")
            }
            PanelError::IndexOutOfRange { id, index } => {
                write!(f, "index {index} is out of range for control `{id}`")
            }
            PanelError::NotEditable(id) => write!(f, "control `{id}` holds no value"),
            PanelError::Disabled(id) => write!(f, "control `{id}` is disabled"),
        }
    }
}

/// A combo whose items are rebuilt by the panel instead of coming from a binding.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Choice {
    pub items: Vec<String>,
    pub selected: usize,
}

impl Choice {
    pub fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(String::as_str)
    }
}

#[derive(Clone, Debug)]
pub enum ControlKind {
    Bound { binding: Binding, shown: Shown },
    Choice(Choice),
    Label(String),
    Group,
}

#[derive(Clone, Debug)]
pub struct Control<T> {
    pub id: ControlId,
    pub tab: T,
    /// Heading the control is drawn under.
    pub section: &'static str,
    pub label: &'static str,
    pub parent: Option<ControlId>,
    pub kind: ControlKind,
    pub enabled: bool,
    pub visible: bool,
}

impl<T> Control<T> {
    pub fn binding(&self) -> Option<&Binding> {
        match &self.kind {
            ControlKind::Bound { binding, .. } => Some(binding),
            _ => None,
        }
    }

    pub fn shown(&self) -> Option<&Shown> {
        match &self.kind {
            ControlKind::Bound { shown, .. } => Some(shown),
            _ => None,
        }
    }

    pub fn choice(&self) -> Option<&Choice> {
        match &self.kind {
            ControlKind::Choice(choice) => Some(choice),
            _ => None,
        }
    }
}

/// Every control of a panel, in registration (and drawing) order.
pub struct Controls<T> {
    order: Vec<ControlId>,
    by_id: AHashMap<ControlId, Control<T>>,
}

impl<T: Copy + PartialEq> Controls<T> {
    pub fn new() -> Self {
        Controls {
            order: Vec::new(),
            by_id: AHashMap::new(),
        }
    }

    pub fn insert(&mut self, control: Control<T>) {
        if self.by_id.insert(control.id, control.clone()).is_none() {
            self.order.push(control.id);
        }
    }

    /// Removes a control and its children for good.
    pub fn remove(&mut self, id: ControlId) -> bool {
        if self.by_id.remove(&id).is_none() {
            return false;
        }
        self.order.retain(|other| *other != id);
        let children: Vec<_> = self
            .by_id
            .values()
            .filter(|control| control.parent == Some(id))
            .map(|control| control.id)
            .collect();
        for child in children {
            self.remove(child);
        }
        true
    }

    pub fn contains(&self, id: ControlId) -> bool {
        self.by_id.contains_key(&id)
    }

    pub fn get(&self, id: ControlId) -> Option<&Control<T>> {
        self.by_id.get(&id)
    }

    pub fn get_mut(&mut self, id: ControlId) -> Option<&mut Control<T>> {
        self.by_id.get_mut(&id)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Control<T>> {
        self.order.iter().filter_map(|id| self.by_id.get(id))
    }

    pub fn in_tab(&self, tab: T) -> impl Iterator<Item = &Control<T>> {
        self.iter().filter(move |control| control.tab == tab)
    }

    pub fn ids(&self) -> &[ControlId] {
        &self.order
    }

    /// Sets a control's own enabled flag; missing controls are skipped.
    pub fn set_enabled(&mut self, id: ControlId, enabled: bool) {
        if let Some(control) = self.by_id.get_mut(&id) {
            control.enabled = enabled;
        }
    }

    pub fn set_visible(&mut self, id: ControlId, visible: bool) {
        if let Some(control) = self.by_id.get_mut(&id) {
            control.visible = visible;
        }
    }

    /// Whether the control and every enclosing group are enabled.
    pub fn is_enabled(&self, id: ControlId) -> bool {
        let mut cur = Some(id);
        while let Some(id) = cur {
            match self.by_id.get(&id) {
                Some(control) if control.enabled => cur = control.parent,
                _ => return false,
            }
        }
        true
    }

    pub fn is_visible(&self, id: ControlId) -> bool {
        let mut cur = Some(id);
        while let Some(id) = cur {
            match self.by_id.get(&id) {
                Some(control) if control.visible => cur = control.parent,
                _ => return false,
            }
        }
        true
    }
}

impl<T: Copy + PartialEq> Default for Controls<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &'static str, parent: Option<ControlId>) -> Control<u8> {
        Control {
            id: ControlId(id),
            tab: 0,
            section: "",
            label: id,
            parent,
            kind: ControlKind::Group,
            enabled: true,
            visible: true,
        }
    }

    #[test]
    fn disabled_groups_disable_their_children() {
        let mut controls = Controls::new();
        controls.insert(group("options", None));
        controls.insert(group("bitrate", Some(ControlId("options"))));
        assert!(controls.is_enabled(ControlId("bitrate")));

        controls.set_enabled(ControlId("options"), false);
        assert!(!controls.is_enabled(ControlId("bitrate")));
        assert!(controls.get(ControlId("bitrate")).is_some_and(|c| c.enabled));
    }

    #[test]
    fn removing_a_group_removes_its_children() {
        let mut controls = Controls::new();
        controls.insert(group("textures", None));
        controls.insert(group("textures_dir", Some(ControlId("textures"))));
        controls.insert(group("other", None));
        assert!(controls.remove(ControlId("textures")));
        assert_eq!(controls.ids(), &[ControlId("other")]);
        assert!(!controls.is_enabled(ControlId("textures_dir")));
    }
}
