use super::ControlId;
use ahash::AHashMap;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Help {
    pub title: &'static str,
    pub recommended: &'static str,
    pub text: &'static str,
}

#[derive(Default)]
pub struct HelpRegistry {
    entries: AHashMap<ControlId, Help>,
}

impl HelpRegistry {
    pub fn new() -> Self {
        HelpRegistry::default()
    }

    pub fn register(
        &mut self,
        id: ControlId,
        title: &'static str,
        recommended: &'static str,
        text: &'static str,
    ) {
        self.entries.insert(
            id,
            Help {
                title,
                recommended,
                text,
            },
        );
    }

    pub fn get(&self, id: ControlId) -> Option<&Help> {
        self.entries.get(&id)
    }

    pub fn remove(&mut self, id: ControlId) {
        self.entries.remove(&id);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Help {
    /// The line shown under the title in the help pane.
    pub fn recommended_line(&self) -> Option<String> {
        if self.recommended.is_empty() {
            None
        } else {
            Some(format!("Recommended Value: {}", self.recommended))
        }
    }
}
