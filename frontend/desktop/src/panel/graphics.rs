mod controls;
mod help_text;
mod rules;
pub mod stereo;

pub use controls::{
    id, ADAPTER, AUDIO_CAPTURE_OPTIONS, FULLSCREEN_MODE, RENDERER, STEREOSCOPY_OPTIONS,
    STEREO_UI_DEPTH_VALUE, STEREO_UI_SECOND_LAYER_DEPTH_VALUE, SW_TEXTURE_FILTERING,
    UPSCALE_MULTIPLIER, VIDEO_CAPTURE_OPTIONS,
};

use super::{
    binding::{Binding, ComboItem, ControlValue, Input},
    deps::{DependencyGraph, Recompute},
    help::{Help, HelpRegistry},
    tabs::TabHost,
    Choice, ControlId, ControlKind, Controls, PanelError,
};
use crate::emu;
use gsconf_core::{
    gs::{self, RendererType},
    host::{AdapterSource, CodecSource, Environment},
    Key, Store,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tab {
    /// Controls shown above the tab bar.
    Header,
    Display,
    HardwareRendering,
    SoftwareRendering,
    HardwareFixes,
    UpscalingFixes,
    TextureReplacement,
    PostProcessing,
    Osd,
    MediaCapture,
    Advanced,
}

impl Tab {
    pub const TABS: [Tab; 10] = [
        Tab::Display,
        Tab::HardwareRendering,
        Tab::SoftwareRendering,
        Tab::HardwareFixes,
        Tab::UpscalingFixes,
        Tab::TextureReplacement,
        Tab::PostProcessing,
        Tab::Osd,
        Tab::MediaCapture,
        Tab::Advanced,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tab::Header => "",
            Tab::Display => "Display",
            Tab::HardwareRendering => "Rendering",
            Tab::SoftwareRendering => "Rendering",
            Tab::HardwareFixes => "Hardware Fixes",
            Tab::UpscalingFixes => "Upscaling Fixes",
            Tab::TextureReplacement => "Texture Replacement",
            Tab::PostProcessing => "Post-Processing",
            Tab::Osd => "OSD",
            Tab::MediaCapture => "Media Capture",
            Tab::Advanced => "Advanced",
        }
    }
}

/// The renderers offered on this host, in combo order.
fn available_renderers(env: &Environment) -> Vec<RendererType> {
    RendererType::ALL
        .into_iter()
        .filter(|renderer| match renderer {
            RendererType::Dx11 | RendererType::Dx12 => env.is_windows(),
            RendererType::Metal => env.is_macos(),
            _ => true,
        })
        .collect()
}

fn use_global_label(global: &str) -> String {
    format!("Use Global Setting [{global}]")
}

pub struct GraphicsPanel {
    store: Store,
    env: Environment,
    adapter_source: Box<dyn AdapterSource>,
    codec_source: Box<dyn CodecSource>,
    emu: emu::Handle,
    logger: slog::Logger,
    controls: Controls<Tab>,
    tabs: TabHost<Tab>,
    help: HelpRegistry,
    rules: DependencyGraph<GraphicsPanel>,
    renderers: Vec<RendererType>,
    /// Stored multiplier for each upscale combo item; `None` is "use global".
    upscale_values: Vec<Option<f32>>,
    save_requested: bool,
    /// Sent once the edited layer is on disk.
    pending_messages: Vec<emu::Message>,
}

impl GraphicsPanel {
    pub fn new(
        store: Store,
        env: Environment,
        adapter_source: Box<dyn AdapterSource>,
        codec_source: Box<dyn CodecSource>,
        emu: emu::Handle,
        logger: slog::Logger,
    ) -> Self {
        let renderers = available_renderers(&env);
        let mut panel = GraphicsPanel {
            store,
            env,
            adapter_source,
            codec_source,
            emu,
            logger,
            controls: Controls::new(),
            tabs: TabHost::new(&Tab::TABS, Tab::HardwareRendering),
            help: HelpRegistry::new(),
            rules: DependencyGraph::new(),
            renderers,
            upscale_values: Vec::new(),
            save_requested: false,
            pending_messages: Vec::new(),
        };

        controls::register(&mut panel.controls, &panel.store, &panel.env);
        panel.remove_unavailable_controls();
        panel.migrate_patch_settings();
        rules::register(&mut panel.rules);
        help_text::register(&mut panel.help, |id| panel.controls.contains(id));

        let show_advanced = panel.env.show_advanced_settings();
        panel.tabs.set_visible(Tab::Advanced, show_advanced, Tab::Display);

        panel.populate_renderers();
        panel.run_rules(panel.rules.all());
        panel
    }

    fn remove_unavailable_controls(&mut self) {
        if !self.env.is_windows() {
            self.controls.remove(id(gs::EXCLUSIVE_FULLSCREEN_CONTROL));
        }
        if !self.env.is_dev_build() && !self.store.is_per_game() {
            self.controls.remove(id(gs::HW_DOWNLOAD_MODE));
            self.controls.remove(id(gs::MANUAL_HW_FIXES));
        }
        if self.store.is_per_game() {
            self.controls.remove(id(gs::TEXTURES_DIRECTORY));
        }
    }

    /// Turns a game's legacy patch checkboxes into entries of the patch lists.
    fn migrate_patch_settings(&mut self) {
        let Some(game) = self.store.game_layer() else {
            return;
        };

        let mut migrated = Vec::new();
        for (key, patch_name) in [
            (gs::WIDESCREEN_PATCHES, gs::WIDESCREEN_PATCH_NAME),
            (gs::NO_INTERLACING_PATCHES, gs::NO_INTERLACING_PATCH_NAME),
        ] {
            if game.contains(key.section, key.name) {
                migrated.push((key, patch_name, game.get(key).unwrap_or(false)));
            }
        }

        let layer = self.store.edited_mut();
        for (key, patch_name, enabled) in &migrated {
            layer.delete(key.section, key.name);
            let (add_to, remove_from) = if *enabled {
                (gs::PATCHES_ENABLE, gs::PATCHES_DISABLE)
            } else {
                (gs::PATCHES_DISABLE, gs::PATCHES_ENABLE)
            };
            layer.add_to_list(gs::PATCHES_SECTION, add_to, patch_name);
            layer.remove_from_list(gs::PATCHES_SECTION, remove_from, patch_name);
            slog::info!(
                self.logger,
                "Migrated {key} to the \"{patch_name}\" patch ({})",
                if *enabled { "enabled" } else { "disabled" }
            );
        }

        if !migrated.is_empty() {
            self.save_requested = true;
            self.queue_message(emu::Message::ReloadGameSettings);
        }

        self.controls.remove(id(gs::WIDESCREEN_PATCHES));
        self.controls.remove(id(gs::NO_INTERLACING_PATCHES));
    }

    pub fn store(&self) -> &Store {
        &self.store
    }

    pub fn into_store(self) -> Store {
        self.store
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn controls(&self) -> &Controls<Tab> {
        &self.controls
    }

    pub fn tabs(&self) -> &TabHost<Tab> {
        &self.tabs
    }

    pub fn select_tab(&mut self, tab: Tab) -> bool {
        self.tabs.select(tab)
    }

    pub fn help(&self, id: ControlId) -> Option<&Help> {
        self.help.get(id)
    }

    pub fn is_per_game(&self) -> bool {
        self.store.is_per_game()
    }

    /// Whether the edited layer changed since the last call.
    pub fn take_save_request(&mut self) -> bool {
        std::mem::take(&mut self.save_requested)
    }

    /// Tells the emulator about the edits made since the last call. Call only after saving.
    pub fn send_pending_messages(&mut self) {
        for message in self.pending_messages.drain(..) {
            self.emu.send(message);
        }
    }

    pub fn discard_pending_messages(&mut self) {
        self.pending_messages.clear();
    }

    fn queue_message(&mut self, message: emu::Message) {
        if self.pending_messages.last() != Some(&message) {
            self.pending_messages.push(message);
        }
    }

    /// Writes a bound control's value, then reruns the rules it governs.
    pub fn set(&mut self, id: ControlId, value: ControlValue) -> Result<(), PanelError> {
        let control = self
            .controls
            .get(id)
            .ok_or(PanelError::UnknownControl(id))?;
        let binding = match &control.kind {
            ControlKind::Bound { binding, .. } => Some(binding.clone()),
            ControlKind::Choice(_) => None,
            ControlKind::Label(_) | ControlKind::Group => {
                return Err(PanelError::NotEditable(id));
            }
        };
        let Some(binding) = binding else {
            return match value {
                ControlValue::Set(Input::Index(index)) => self.select(id, index),
                ControlValue::Inherit if self.store.is_per_game() => self.select(id, 0),
                ControlValue::Set(_) | ControlValue::Inherit => Err(PanelError::KindMismatch(id)),
            };
        };
        if !self.controls.is_enabled(id) {
            return Err(PanelError::Disabled(id));
        }

        binding.write(id, &mut self.store, value)?;
        let (section, name) = binding.section_and_name();
        self.refresh_bound(section, name);
        self.commit();
        self.run_rules(self.rules.affected_by(id));
        Ok(())
    }

    /// Picks an item of one of the combos whose items the panel builds itself.
    pub fn select(&mut self, id: ControlId, index: usize) -> Result<(), PanelError> {
        let choice = self
            .controls
            .get(id)
            .ok_or(PanelError::UnknownControl(id))?
            .choice()
            .ok_or(PanelError::KindMismatch(id))?;
        let Some(item) = choice.items.get(index).cloned() else {
            return Err(PanelError::IndexOutOfRange { id, index });
        };
        if !self.controls.is_enabled(id) {
            return Err(PanelError::Disabled(id));
        }

        match id {
            RENDERER => self.renderer_selected(index),
            ADAPTER => self.device_string_selected(gs::ADAPTER, index, &item),
            FULLSCREEN_MODE => self.device_string_selected(gs::FULLSCREEN_MODE, index, &item),
            UPSCALE_MULTIPLIER => {
                let value = self.upscale_values.get(index).copied().flatten();
                self.store.set(gs::UPSCALE_MULTIPLIER, value.as_ref());
            }
            _ => return Err(PanelError::KindMismatch(id)),
        }
        self.set_selected(id, index);
        self.commit();
        if matches!(id, RENDERER | ADAPTER | FULLSCREEN_MODE) {
            self.queue_message(emu::Message::ApplySettings);
        }
        self.run_rules(self.rules.affected_by(id));
        Ok(())
    }

    fn renderer_selected(&mut self, index: usize) {
        let renderer = if self.store.is_per_game() {
            index.checked_sub(1).map(|i| self.renderers[i])
        } else {
            Some(self.renderers[index])
        };
        self.store
            .set(gs::RENDERER, renderer.map(RendererType::id).as_ref());
        if let Some(renderer) = renderer {
            slog::info!(self.logger, "Renderer set to {}", renderer.name());
        } else {
            slog::info!(self.logger, "Renderer reset to the global setting");
        }
    }

    /// Adapter and fullscreen mode combos: "(Default)"-like first item, then device names.
    fn device_string_selected(&mut self, key: Key<&'static str>, index: usize, item: &str) {
        let per_game = self.store.is_per_game();
        let first_device = if per_game { 2 } else { 1 };
        if index >= first_device {
            self.store.set(key, Some(&item.to_string()));
        } else if index > 0 && per_game {
            self.store.set(key, Some(&String::new()));
        } else {
            self.store.set(key, None);
        }
    }

    fn commit(&mut self) {
        self.save_requested = true;
        self.queue_message(if self.store.is_per_game() {
            emu::Message::ReloadGameSettings
        } else {
            emu::Message::ApplySettings
        });
    }

    fn run_rules(&mut self, rules: Vec<Recompute<GraphicsPanel>>) {
        for apply in rules {
            apply(self);
        }
    }

    fn populate_renderers(&mut self) {
        let renderer = self.store.effective(gs::RENDERER);
        let mut items: Vec<String> = self
            .renderers
            .iter()
            .map(|renderer| renderer.name().to_string())
            .collect();
        let mut selected = self
            .renderers
            .iter()
            .position(|r| r.id() == renderer)
            .unwrap_or(0);

        if self.store.is_per_game() {
            let global = self.store.base(gs::RENDERER);
            let global_name = self
                .renderers
                .iter()
                .find(|r| r.id() == global)
                .map_or("", |r| r.name());
            items.insert(0, use_global_label(global_name));
            selected = if self.store.game(gs::RENDERER).is_some() {
                selected + 1
            } else {
                0
            };
        }
        self.set_choice(RENDERER, items, selected);
    }

    /// The renderer the emulator will actually use, with `Auto` resolved.
    fn effective_renderer(&self) -> RendererType {
        let renderer =
            RendererType::from_id(self.store.effective(gs::RENDERER)).unwrap_or(RendererType::Auto);
        if renderer == RendererType::Auto {
            self.adapter_source.preferred_renderer()
        } else {
            renderer
        }
    }

    /// A checkbox's state counting "inherit" as unchecked.
    fn explicitly_checked(&self, key: Key<bool>) -> bool {
        if !self.controls.contains(id(key)) {
            return false;
        }
        if self.store.is_per_game() {
            self.store.game(key).unwrap_or(false)
        } else {
            self.store.effective(key)
        }
    }

    fn refresh_bound(&mut self, section: &str, name: &str) {
        let ids: Vec<_> = self
            .controls
            .iter()
            .filter(|control| {
                control
                    .binding()
                    .is_some_and(|binding| binding.section_and_name() == (section, name))
            })
            .map(|control| control.id)
            .collect();
        for id in ids {
            self.refresh_control(id);
        }
    }

    fn refresh_control(&mut self, id: ControlId) {
        if let Some(control) = self.controls.get_mut(id) {
            if let ControlKind::Bound { binding, shown } = &mut control.kind {
                *shown = binding.read(&self.store);
            }
        }
    }

    fn set_enabled(&mut self, ids: &[ControlId], enabled: bool) {
        for id in ids {
            self.controls.set_enabled(*id, enabled);
        }
    }

    fn set_choice(&mut self, id: ControlId, items: Vec<String>, selected: usize) {
        if let Some(control) = self.controls.get_mut(id) {
            control.kind = ControlKind::Choice(Choice { items, selected });
        }
    }

    fn set_selected(&mut self, id: ControlId, index: usize) {
        if let Some(control) = self.controls.get_mut(id) {
            if let ControlKind::Choice(choice) = &mut control.kind {
                choice.selected = index;
            }
        }
    }

    fn set_label(&mut self, id: ControlId, text: String) {
        if let Some(control) = self.controls.get_mut(id) {
            control.kind = ControlKind::Label(text);
        }
    }

    /// Replaces the items of a data-carrying combo and shows the stored item again.
    fn set_combo_items(&mut self, id: ControlId, new_items: Vec<ComboItem>) {
        if let Some(control) = self.controls.get_mut(id) {
            if let ControlKind::Bound {
                binding: Binding::Text { items, .. },
                ..
            } = &mut control.kind
            {
                *items = Some(new_items);
            }
        }
        self.refresh_control(id);
    }
}

#[cfg(test)]
mod tests;
