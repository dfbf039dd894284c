use super::{ControlId, PanelError};
use gsconf_core::{Key, Origin, Store};
use std::path::PathBuf;

/// A control-side value: what the widget holds, before conversion to the stored form.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    Bool(bool),
    Int(i32),
    Float(f32),
    Text(String),
    Index(usize),
}

/// A requested change to a control.
#[derive(Clone, Debug, PartialEq)]
pub enum ControlValue {
    /// Drop the edited layer's value; per-game this means "use the global setting".
    Inherit,
    Set(Input),
}

/// What a bound control currently shows.
#[derive(Clone, Debug, PartialEq)]
pub struct Shown {
    pub value: Input,
    pub origin: Origin,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum IntWidget {
    Combo(&'static [&'static str]),
    Spin {
        min: i32,
        max: i32,
        suffix: &'static str,
    },
    Slider {
        min: i32,
        max: i32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
    pub suffix: &'static str,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ComboItem {
    pub label: String,
    pub data: String,
}

impl ComboItem {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        ComboItem {
            label: label.into(),
            data: data.into(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Binding {
    Bool(Key<bool>),
    /// Combo indices are `stored - offset`.
    Int {
        key: Key<i32>,
        offset: i32,
        widget: IntWidget,
    },
    Float {
        key: Key<f32>,
        range: FloatRange,
    },
    /// An integer slider whose position is `stored * range`.
    Normalized {
        key: Key<f32>,
        range: f32,
        min: i32,
        max: i32,
    },
    /// Free text, or a combo whose items carry the stored text.
    Text {
        key: Key<&'static str>,
        items: Option<Vec<ComboItem>>,
    },
    Folder {
        key: Key<&'static str>,
        default: PathBuf,
    },
    /// Indices into `names`, stored as the matching `values` entry (or the name itself).
    Enum {
        key: Key<&'static str>,
        names: &'static [&'static str],
        values: Option<&'static [&'static str]>,
    },
}

impl Binding {
    pub fn section_and_name(&self) -> (&'static str, &'static str) {
        match self {
            Binding::Bool(key) => (key.section, key.name),
            Binding::Int { key, .. } => (key.section, key.name),
            Binding::Float { key, .. } | Binding::Normalized { key, .. } => (key.section, key.name),
            Binding::Text { key, .. } | Binding::Folder { key, .. } | Binding::Enum { key, .. } => {
                (key.section, key.name)
            }
        }
    }

    fn enum_index<'a>(
        names: &'a [&'a str],
        values: Option<&'a [&'a str]>,
        stored: &str,
    ) -> Option<usize> {
        values
            .unwrap_or(names)
            .iter()
            .position(|value| *value == stored)
    }

    /// The value a new game override starts from: what is shown, except that folders keep
    /// the key's unexpanded default.
    pub fn override_value(&self, shown: &Shown) -> Input {
        match self {
            Binding::Folder { key, default } => match &shown.value {
                Input::Text(value) if *value == default.to_string_lossy() => {
                    Input::Text(key.default.to_string())
                }
                value => value.clone(),
            },
            _ => shown.value.clone(),
        }
    }

    pub fn read(&self, store: &Store) -> Shown {
        let (value, origin) = match self {
            Binding::Bool(key) => {
                let (value, origin) = store.resolve(*key);
                (Input::Bool(value), origin)
            }
            Binding::Int {
                key,
                offset,
                widget,
            } => {
                let (value, origin) = store.resolve(*key);
                let value = match widget {
                    IntWidget::Combo(items) => {
                        // Wide enough for any stored value and offset
                        let index = i64::from(value) - i64::from(*offset);
                        let last = items.len().saturating_sub(1);
                        Input::Index(usize::try_from(index).map_or(0, |index| index.min(last)))
                    }
                    IntWidget::Spin { .. } | IntWidget::Slider { .. } => Input::Int(value),
                };
                (value, origin)
            }
            Binding::Float { key, .. } => {
                let (value, origin) = store.resolve(*key);
                (Input::Float(value), origin)
            }
            Binding::Normalized { key, range, .. } => {
                let (value, origin) = store.resolve(*key);
                (Input::Int((value * range).round() as i32), origin)
            }
            Binding::Text { key, items } => {
                let (value, origin) = store.resolve(*key);
                let value = match items {
                    Some(items) => Input::Index(
                        items
                            .iter()
                            .position(|item| item.data == value)
                            .unwrap_or(0),
                    ),
                    None => Input::Text(value),
                };
                (value, origin)
            }
            Binding::Folder { key, default } => {
                let (value, origin) = store.resolve(*key);
                let value = if value.is_empty() || value == key.default {
                    default.to_string_lossy().into_owned()
                } else {
                    value
                };
                (Input::Text(value), origin)
            }
            Binding::Enum { key, names, values } => {
                let (value, origin) = store.resolve(*key);
                let index = Self::enum_index(names, *values, &value)
                    .or_else(|| Self::enum_index(names, *values, key.default))
                    .unwrap_or(0);
                (Input::Index(index), origin)
            }
        };
        Shown { value, origin }
    }

    pub fn write(
        &self,
        id: ControlId,
        store: &mut Store,
        value: ControlValue,
    ) -> Result<(), PanelError> {
        let input = match value {
            ControlValue::Inherit => {
                let (section, name) = self.section_and_name();
                store.set_raw(section, name, None);
                return Ok(());
            }
            ControlValue::Set(input) => input,
        };

        let out_of_range = |index: usize| PanelError::IndexOutOfRange { id, index };

        match (self, input) {
            (Binding::Bool(key), Input::Bool(value)) => store.set(*key, Some(&value)),

            (
                Binding::Int {
                    key,
                    offset,
                    widget: IntWidget::Combo(items),
                },
                Input::Index(index),
            ) => {
                if index >= items.len() {
                    return Err(out_of_range(index));
                }
                store.set(*key, Some(&(index as i32 + offset)));
            }
            (
                Binding::Int {
                    key,
                    widget: IntWidget::Spin { min, max, .. } | IntWidget::Slider { min, max },
                    ..
                },
                Input::Int(value),
            ) => store.set(*key, Some(&value.clamp(*min, *max))),

            (Binding::Float { key, range }, Input::Float(value)) => {
                store.set(*key, Some(&value.clamp(range.min, range.max)));
            }

            (Binding::Normalized { key, range, min, max }, Input::Int(position)) => {
                let value = position.clamp(*min, *max) as f32 / range;
                store.set(*key, Some(&value));
            }

            (Binding::Text { key, items: None }, Input::Text(value)) => {
                store.set(*key, Some(&value));
            }
            (
                Binding::Text {
                    key,
                    items: Some(items),
                },
                Input::Index(index),
            ) => {
                let item = items.get(index).ok_or_else(|| out_of_range(index))?;
                store.set(*key, Some(&item.data));
            }

            (Binding::Folder { key, .. }, Input::Text(value)) => {
                if value.is_empty() {
                    store.set(*key, None);
                } else {
                    store.set(*key, Some(&value));
                }
            }

            (Binding::Enum { key, names, values }, Input::Index(index)) => {
                let stored = values
                    .unwrap_or(*names)
                    .get(index)
                    .ok_or_else(|| out_of_range(index))?;
                store.set(*key, Some(&stored.to_string()));
            }

            _ => return Err(PanelError::KindMismatch(id)),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gsconf_core::{gs, Layer};

    const ID: ControlId = ControlId("test");

    fn trilinear() -> Binding {
        Binding::Int {
            key: gs::TRILINEAR_FILTERING,
            offset: -1,
            widget: IntWidget::Combo(&["Automatic", "Off", "PS2", "Forced"]),
        }
    }

    #[test]
    fn int_combos_apply_the_index_offset() {
        let mut store = Store::global(Layer::new());
        let binding = trilinear();
        assert_eq!(binding.read(&store).value, Input::Index(0));

        binding
            .write(ID, &mut store, ControlValue::Set(Input::Index(3)))
            .unwrap();
        assert_eq!(store.effective(gs::TRILINEAR_FILTERING), 2);
        assert_eq!(binding.read(&store).value, Input::Index(3));

        assert_eq!(
            binding.write(ID, &mut store, ControlValue::Set(Input::Index(4))),
            Err(PanelError::IndexOutOfRange { id: ID, index: 4 })
        );
    }

    #[test]
    fn extreme_stored_combo_values_are_clamped() {
        let binding = trilinear();
        let key = gs::TRILINEAR_FILTERING;
        let mut layer = Layer::new();
        layer.set_value(key.section, key.name, "2147483647");
        assert_eq!(
            binding.read(&Store::global(layer.clone())).value,
            Input::Index(3)
        );

        layer.set_value(key.section, key.name, "-2147483648");
        assert_eq!(binding.read(&Store::global(layer)).value, Input::Index(0));
    }

    #[test]
    fn enum_bindings_store_the_value_table_entry() {
        let mut store = Store::global(Layer::new());
        let binding = Binding::Enum {
            key: gs::ANISOTROPIC_FILTERING,
            names: gs::ANISOTROPIC_FILTERING_NAMES,
            values: Some(gs::ANISOTROPIC_FILTERING_VALUES),
        };
        binding
            .write(ID, &mut store, ControlValue::Set(Input::Index(3)))
            .unwrap();
        assert_eq!(store.effective(gs::ANISOTROPIC_FILTERING), "8");

        store.set(gs::ANISOTROPIC_FILTERING, Some(&"3".to_string()));
        assert_eq!(binding.read(&store).value, Input::Index(0));
    }

    #[test]
    fn enum_bindings_without_values_store_names() {
        let mut store = Store::global(Layer::new());
        let binding = Binding::Enum {
            key: gs::ASPECT_RATIO,
            names: gs::ASPECT_RATIO_NAMES,
            values: None,
        };
        assert_eq!(binding.read(&store).value, Input::Index(1));
        binding
            .write(ID, &mut store, ControlValue::Set(Input::Index(3)))
            .unwrap();
        assert_eq!(store.effective(gs::ASPECT_RATIO), "16:9");
    }

    #[test]
    fn normalized_sliders_scale_by_range() {
        let mut store = Store::global(Layer::new());
        let binding = Binding::Normalized {
            key: gs::STEREO_UI_DEPTH,
            range: 100.0,
            min: -100,
            max: 100,
        };
        binding
            .write(ID, &mut store, ControlValue::Set(Input::Int(25)))
            .unwrap();
        assert_eq!(store.effective(gs::STEREO_UI_DEPTH), 0.25);
        assert_eq!(binding.read(&store).value, Input::Int(25));
    }

    #[test]
    fn inherit_deletes_the_game_value() {
        let mut base = Layer::new();
        base.set(gs::FXAA, &true);
        let mut game = Layer::new();
        game.set(gs::FXAA, &false);
        let mut store = Store::per_game(base, game);
        let binding = Binding::Bool(gs::FXAA);
        assert_eq!(
            binding.read(&store),
            Shown {
                value: Input::Bool(false),
                origin: Origin::Game
            }
        );

        binding.write(ID, &mut store, ControlValue::Inherit).unwrap();
        assert_eq!(
            binding.read(&store),
            Shown {
                value: Input::Bool(true),
                origin: Origin::Global
            }
        );
    }

    #[test]
    fn mismatched_inputs_are_rejected() {
        let mut store = Store::global(Layer::new());
        assert_eq!(
            Binding::Bool(gs::FXAA).write(ID, &mut store, ControlValue::Set(Input::Int(1))),
            Err(PanelError::KindMismatch(ID))
        );
        assert!(store.base_layer().is_empty());
    }

    #[test]
    fn folders_show_the_default_directory_until_set() {
        let mut store = Store::global(Layer::new());
        let binding = Binding::Folder {
            key: gs::TEXTURES_DIRECTORY,
            default: PathBuf::from("/data/textures"),
        };
        assert_eq!(
            binding.read(&store).value,
            Input::Text("/data/textures".to_string())
        );
        binding
            .write(ID, &mut store, ControlValue::Set(Input::Text("/mnt/tex".into())))
            .unwrap();
        assert_eq!(binding.read(&store).value, Input::Text("/mnt/tex".into()));
        binding
            .write(ID, &mut store, ControlValue::Set(Input::Text(String::new())))
            .unwrap();
        assert!(store.base_layer().is_empty());
    }

    #[test]
    fn folder_overrides_start_from_the_unexpanded_default() {
        let key = gs::TEXTURES_DIRECTORY;
        let mut base = Layer::new();
        base.set_value(key.section, key.name, "/mnt/tex");
        let binding = Binding::Folder {
            key,
            default: PathBuf::from("/data/textures"),
        };

        let store = Store::per_game(Layer::new(), Layer::new());
        let shown = binding.read(&store);
        assert_eq!(shown.origin, Origin::Global);
        assert_eq!(
            binding.override_value(&shown),
            Input::Text("textures".to_string())
        );

        let store = Store::per_game(base, Layer::new());
        let shown = binding.read(&store);
        assert_eq!(
            binding.override_value(&shown),
            Input::Text("/mnt/tex".to_string())
        );
    }
}
