use crate::setting::{Key, Origin, Value};
use std::collections::BTreeMap;

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Entry {
    Value(String),
    List(Vec<String>),
}

/// One layer of settings, `section -> key -> entry`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Layer {
    sections: BTreeMap<String, BTreeMap<String, Entry>>,
}

impl Layer {
    pub fn new() -> Self {
        Layer::default()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn value(&self, section: &str, key: &str) -> Option<&str> {
        match self.sections.get(section)?.get(key)? {
            Entry::Value(value) => Some(value),
            Entry::List(_) => None,
        }
    }

    pub fn contains(&self, section: &str, key: &str) -> bool {
        self.value(section, key).is_some()
    }

    pub fn set_value(&mut self, section: &str, key: &str, value: impl Into<String>) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), Entry::Value(value.into()));
    }

    /// Removes a key, dropping its section once empty. Returns whether anything was removed.
    pub fn delete(&mut self, section: &str, key: &str) -> bool {
        let Some(entries) = self.sections.get_mut(section) else {
            return false;
        };
        let removed = entries.remove(key).is_some();
        if entries.is_empty() {
            self.sections.remove(section);
        }
        removed
    }

    pub fn get<T: Value>(&self, key: Key<T>) -> Option<T::Owned> {
        self.value(key.section, key.name).and_then(T::parse)
    }

    pub fn set<T: Value>(&mut self, key: Key<T>, value: &T::Owned) {
        self.set_value(key.section, key.name, T::format(value));
    }

    pub fn list(&self, section: &str, key: &str) -> &[String] {
        match self.sections.get(section).and_then(|s| s.get(key)) {
            Some(Entry::List(items)) => items,
            _ => &[],
        }
    }

    pub fn list_contains(&self, section: &str, key: &str, item: &str) -> bool {
        self.list(section, key).iter().any(|i| i == item)
    }

    /// Appends `item` unless already present. Returns whether the list changed.
    pub fn add_to_list(&mut self, section: &str, key: &str, item: &str) -> bool {
        let entries = self.sections.entry(section.to_string()).or_default();
        let mut items = match entries.remove(key) {
            Some(Entry::List(items)) => items,
            _ => Vec::new(),
        };
        let added = !items.iter().any(|i| i == item);
        if added {
            items.push(item.to_string());
        }
        entries.insert(key.to_string(), Entry::List(items));
        added
    }

    pub fn remove_from_list(&mut self, section: &str, key: &str, item: &str) -> bool {
        let Some(entries) = self.sections.get_mut(section) else {
            return false;
        };
        let Some(Entry::List(items)) = entries.get_mut(key) else {
            return false;
        };
        let prev_len = items.len();
        items.retain(|i| i != item);
        let removed = items.len() != prev_len;
        if items.is_empty() {
            entries.remove(key);
            if entries.is_empty() {
                self.sections.remove(section);
            }
        }
        removed
    }
}

/// The global layer plus, when editing a game's settings, that game's overlay.
#[derive(Clone, Debug, Default)]
pub struct Store {
    base: Layer,
    game: Option<Layer>,
}

impl Store {
    pub fn global(base: Layer) -> Self {
        Store { base, game: None }
    }

    pub fn per_game(base: Layer, game: Layer) -> Self {
        Store {
            base,
            game: Some(game),
        }
    }

    pub fn is_per_game(&self) -> bool {
        self.game.is_some()
    }

    pub fn base_layer(&self) -> &Layer {
        &self.base
    }

    pub fn game_layer(&self) -> Option<&Layer> {
        self.game.as_ref()
    }

    /// The layer writes go to.
    pub fn edited(&self) -> &Layer {
        self.game.as_ref().unwrap_or(&self.base)
    }

    pub fn edited_mut(&mut self) -> &mut Layer {
        self.game.as_mut().unwrap_or(&mut self.base)
    }

    pub fn into_layers(self) -> (Layer, Option<Layer>) {
        (self.base, self.game)
    }

    pub fn effective_raw(&self, section: &str, key: &str) -> Option<&str> {
        self.game
            .as_ref()
            .and_then(|game| game.value(section, key))
            .or_else(|| self.base.value(section, key))
    }

    pub fn resolve<T: Value>(&self, key: Key<T>) -> (T::Owned, Origin) {
        match self.game.as_ref().and_then(|game| game.get(key)) {
            Some(value) => (value, Origin::Game),
            None => (self.base(key), Origin::Global),
        }
    }

    pub fn effective<T: Value>(&self, key: Key<T>) -> T::Owned {
        self.resolve(key).0
    }

    /// The global value, ignoring any game overlay.
    pub fn base<T: Value>(&self, key: Key<T>) -> T::Owned {
        key.parse_or_default(self.base.value(key.section, key.name))
    }

    /// The game overlay's value, if it has one.
    pub fn game<T: Value>(&self, key: Key<T>) -> Option<T::Owned> {
        self.game.as_ref()?.get(key)
    }

    pub fn edited_contains<T: Value>(&self, key: Key<T>) -> bool {
        self.edited().contains(key.section, key.name)
    }

    /// Writes `value` to the edited layer; `None` deletes the key there.
    pub fn set<T: Value>(&mut self, key: Key<T>, value: Option<&T::Owned>) {
        match value {
            Some(value) => self.edited_mut().set(key, value),
            None => {
                self.edited_mut().delete(key.section, key.name);
            }
        }
    }

    pub fn set_raw(&mut self, section: &str, key: &str, value: Option<&str>) {
        match value {
            Some(value) => self.edited_mut().set_value(section, key, value),
            None => {
                self.edited_mut().delete(section, key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIPMAP: Key<bool> = Key::new("EmuCore/GS", "hw_mipmap", true);
    const CROP_LEFT: Key<i32> = Key::new("EmuCore/GS", "CropLeft", 0);

    #[test]
    fn effective_value_prefers_game_layer() {
        let mut base = Layer::new();
        base.set(CROP_LEFT, &4);
        let mut game = Layer::new();
        game.set(CROP_LEFT, &8);
        let store = Store::per_game(base.clone(), game);
        assert_eq!(store.resolve(CROP_LEFT), (8, Origin::Game));
        assert_eq!(store.base(CROP_LEFT), 4);

        let store = Store::per_game(base, Layer::new());
        assert_eq!(store.resolve(CROP_LEFT), (4, Origin::Global));
        assert_eq!(store.resolve(MIPMAP), (true, Origin::Global));
    }

    #[test]
    fn unparseable_game_value_falls_through_to_global() {
        let mut base = Layer::new();
        base.set_value("EmuCore/GS", "CropLeft", "12");
        let mut game = Layer::new();
        game.set_value("EmuCore/GS", "CropLeft", "twelve");
        let store = Store::per_game(base, game.clone());
        assert_eq!(store.resolve(CROP_LEFT), (12, Origin::Global));

        let mut base = Layer::new();
        base.set_value("EmuCore/GS", "CropLeft", "");
        let store = Store::per_game(base, game);
        assert_eq!(store.resolve(CROP_LEFT), (CROP_LEFT.default, Origin::Global));
    }

    #[test]
    fn none_deletes_from_edited_layer_only() {
        let mut base = Layer::new();
        base.set(MIPMAP, &false);
        let mut game = Layer::new();
        game.set(MIPMAP, &true);
        let mut store = Store::per_game(base, game);
        store.set(MIPMAP, None);
        assert!(!store.edited_contains(MIPMAP));
        assert_eq!(store.resolve(MIPMAP), (false, Origin::Global));
        assert!(store.base_layer().contains("EmuCore/GS", "hw_mipmap"));
        assert!(store.game_layer().is_some_and(Layer::is_empty));
    }

    #[test]
    fn global_mode_writes_base_layer() {
        let mut store = Store::global(Layer::new());
        store.set(CROP_LEFT, Some(&3));
        assert_eq!(store.base_layer().get(CROP_LEFT), Some(3));
        assert!(!store.is_per_game());
    }

    #[test]
    fn string_lists_reject_duplicates_and_clean_up() {
        let mut layer = Layer::new();
        assert!(layer.add_to_list("Patches", "Enable", "Widescreen 16:9"));
        assert!(!layer.add_to_list("Patches", "Enable", "Widescreen 16:9"));
        assert!(layer.list_contains("Patches", "Enable", "Widescreen 16:9"));
        assert!(layer.remove_from_list("Patches", "Enable", "Widescreen 16:9"));
        assert!(!layer.remove_from_list("Patches", "Enable", "Widescreen 16:9"));
        assert!(layer.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn layers_serialize_as_nested_maps() {
        let mut layer = Layer::new();
        layer.set(CROP_LEFT, &2);
        layer.add_to_list("Patches", "Disable", "No-Interlacing");
        let json = serde_json::to_string(&layer).unwrap();
        assert_eq!(
            json,
            r#"{"EmuCore/GS":{"CropLeft":"2"},"Patches":{"Disable":["No-Interlacing"]}}"#
        );
        let back: Layer = serde_json::from_str(&json).unwrap();
        assert_eq!(back, layer);
    }
}
