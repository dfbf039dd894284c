#[macro_use]
pub mod utils;
mod control;

use crate::{
    config::{game_settings_path, File, FileError, SettingsFiles, GLOBAL_SETTINGS_FILE},
    emu,
    panel::{
        binding::ControlValue,
        graphics::{GraphicsPanel, Tab, ADAPTER, RENDERER},
        ControlId,
    },
};
use gsconf_core::{
    host::{AdapterSource, CodecSource, Environment},
    Layer,
};
use imgui::{
    Condition, StyleVar, TabItemFlags, TableColumnFlags, TableColumnSetup, TableFlags, Ui,
};
use std::path::{Path, PathBuf};
use utils::{add2, heading, heading_options};

/// The graphics settings window, drawing a [`GraphicsPanel`] and saving its edits.
pub struct SettingsWindow {
    panel: GraphicsPanel,
    files: SettingsFiles,
    logger: slog::Logger,
    help_item: Option<ControlId>,
    drawn_tab: Option<Tab>,
    buffer: String,
}

/// Tells the user a settings file couldn't be read, returning whether to overwrite it.
fn show_read_error(path: &Path, err: &FileError) -> bool {
    match err {
        FileError::Io(err) => {
            config_error!(
                "Couldn't read the settings file at `{}`: {}\n\nThe default values will be used, \
                 new changes to it will not be saved.",
                path.display(),
                err,
            );
            false
        }
        FileError::Json(err) => config_error!(
            yes_no,
            "Couldn't parse the settings file at `{}`: {}\n\nOverwrite it with the default \
             values?",
            path.display(),
            err,
        ),
    }
}

/// Reads the global and game files independently; only an unreadable one is replaced by an
/// empty layer.
fn read_settings_files(
    config_dir: &Path,
    game_serial: Option<&str>,
    logger: &slog::Logger,
    mut on_error: impl FnMut(&Path, &FileError) -> bool,
) -> SettingsFiles {
    let mut read = |path: PathBuf| match File::<Layer>::read(&path, true) {
        Ok(file) => file,
        Err(err) => {
            slog::warn!(logger, "Couldn't read settings from {}: {err}", path.display());
            let should_overwrite = on_error(path.as_path(), &err);
            File {
                path: should_overwrite.then_some(path),
                contents: Layer::new(),
            }
        }
    };
    SettingsFiles {
        global: read(config_dir.join(GLOBAL_SETTINGS_FILE)),
        game: game_serial.map(|serial| read(game_settings_path(config_dir, serial))),
    }
}

impl SettingsWindow {
    pub fn new(files: SettingsFiles, panel: GraphicsPanel, logger: slog::Logger) -> Self {
        SettingsWindow {
            panel,
            files,
            logger,
            help_item: None,
            drawn_tab: None,
            buffer: String::new(),
        }
    }

    /// Reads the settings under `config_dir`, telling the user about unreadable files.
    pub fn open(
        config_dir: &Path,
        game_serial: Option<&str>,
        env: Environment,
        adapter_source: Box<dyn AdapterSource>,
        codec_source: Box<dyn CodecSource>,
        emu: emu::Handle,
        logger: slog::Logger,
    ) -> Self {
        let files = read_settings_files(config_dir, game_serial, &logger, show_read_error);
        let panel = GraphicsPanel::new(
            files.store(),
            env,
            adapter_source,
            codec_source,
            emu,
            logger.new(slog::o!("panel" => "graphics")),
        );
        if let Some(serial) = game_serial {
            slog::info!(logger, "Editing graphics settings for {serial}");
        }
        let mut window = SettingsWindow::new(files, panel, logger);
        // Migrated game settings
        window.save_if_requested();
        window
    }

    pub fn panel(&self) -> &GraphicsPanel {
        &self.panel
    }

    /// Forwards one edit to the panel and saves the result.
    pub fn change(&mut self, id: ControlId, value: ControlValue) {
        if let Err(err) = self.panel.set(id, value) {
            slog::warn!(self.logger, "Couldn't change {id}: {err}");
        }
        self.save_if_requested();
    }

    fn save_if_requested(&mut self) {
        if !self.panel.take_save_request() {
            return;
        }
        self.files.update_from(self.panel.store());
        match self.files.write() {
            Ok(()) => {
                slog::debug!(self.logger, "Saved graphics settings");
                self.panel.send_pending_messages();
            }
            Err(err) => {
                self.panel.discard_pending_messages();
                slog::warn!(self.logger, "Couldn't save graphics settings: {err}");
                config_error!("Couldn't save the graphics settings: {}", err);
            }
        }
    }

    fn help_text(&self) -> (&str, Option<String>, &str) {
        match self.help_item.and_then(|id| self.panel.help(id)) {
            Some(help) => (help.title, help.recommended_line(), help.text),
            None => (
                "No item selected",
                None,
                "Help for the selected setting will display here.",
            ),
        }
    }

    fn help_height(&self, ui: &Ui) -> f32 {
        let (title, recommended, text) = self.help_text();
        let width = ui.content_region_avail()[0];
        let recommended_height = recommended.map_or(0.0, |line| {
            ui.calc_text_size_with_opts(line, false, width)[1] + style!(ui, item_spacing)[1]
        });
        ui.calc_text_size_with_opts(title, false, width)[1]
            + recommended_height
            + style!(ui, item_spacing)[1] * 5.0
            + ui.calc_text_size_with_opts(text, false, width)[1]
    }

    fn draw_help(&self, ui: &Ui) {
        let cursor_pos = ui.cursor_screen_pos();
        ui.get_window_draw_list()
            .add_rect(
                cursor_pos,
                add2(cursor_pos, ui.content_region_avail()),
                [0.5, 0.5, 0.5, 0.2],
            )
            .filled(true)
            .rounding(style!(ui, window_rounding))
            .build();

        ui.child_window("help")
            .size([0.0, self.help_height(ui)])
            .build(|| {
                let (title, recommended, text) = self.help_text();
                ui.dummy([0.0; 2]);
                ui.text_wrapped(title);
                if let Some(recommended) = recommended {
                    ui.text_disabled(recommended);
                }
                ui.dummy([0.0; 2]);
                ui.text_wrapped(text);
                ui.dummy([0.0; 2]);
            });
    }

    fn draw_rows(
        &mut self,
        ui: &Ui,
        table_id: &str,
        controls: &[ControlId],
        change: &mut Option<(ControlId, ControlValue)>,
    ) {
        let Some(_table) = ui.begin_table_with_flags(
            table_id,
            4,
            TableFlags::SIZING_STRETCH_SAME | TableFlags::NO_CLIP,
        ) else {
            return;
        };
        ui.table_setup_column_with(TableColumnSetup {
            flags: TableColumnFlags::WIDTH_FIXED,
            ..TableColumnSetup::new("")
        });
        ui.table_setup_column("");
        for _ in 0..2 {
            ui.table_setup_column_with(TableColumnSetup {
                flags: TableColumnFlags::WIDTH_FIXED,
                ..TableColumnSetup::new("")
            });
        }

        let per_game = self.panel.is_per_game();
        for id in controls {
            let Some(control) = self.panel.controls().get(*id) else {
                continue;
            };
            let row = control::draw(
                ui,
                control,
                self.panel.controls().is_enabled(*id),
                per_game,
                self.panel.help(*id).is_some(),
                &mut self.buffer,
            );
            if row.help_requested {
                self.help_item = Some(*id);
            }
            if row.change.is_some() {
                *change = row.change;
            }
        }
    }

    fn visible_in_tab(&self, tab: Tab) -> Vec<(&'static str, Vec<ControlId>)> {
        let mut sections: Vec<(&'static str, Vec<ControlId>)> = Vec::new();
        let controls = self.panel.controls();
        for control in controls
            .in_tab(tab)
            .filter(|control| controls.is_visible(control.id))
        {
            match sections.last_mut() {
                Some((section, ids)) if *section == control.section => ids.push(control.id),
                _ => sections.push((control.section, vec![control.id])),
            }
        }
        sections
    }

    fn draw_tab(&mut self, ui: &Ui, tab: Tab, change: &mut Option<(ControlId, ControlValue)>) {
        for (i, (section, ids)) in self.visible_in_tab(tab).into_iter().enumerate() {
            if !section.is_empty() {
                heading(ui, section, 16.0, 5.0, 1.0);
            }
            self.draw_rows(ui, &format!("{section}##{i}"), &ids, change);
        }
    }

    fn draw_tab_bar(&mut self, ui: &Ui, change: &mut Option<(ControlId, ControlValue)>) {
        let Some(_tab_bar) = ui.tab_bar("tabs") else {
            return;
        };
        let current = self.panel.tabs().current();
        // Rules can move the current tab; imgui has to be told to follow.
        let forced = self.drawn_tab != Some(current);
        let tabs: Vec<Tab> = self.panel.tabs().visible_tabs().collect();
        for tab in tabs {
            let flags = if forced && tab == current {
                TabItemFlags::SET_SELECTED
            } else {
                TabItemFlags::empty()
            };
            let label = format!("{}##{tab:?}", tab.name());
            let Some(_tab_item) = ui.tab_item_with_flags(&label, None, flags) else {
                continue;
            };
            if tab != current && !forced {
                self.panel.select_tab(tab);
            }
            self.drawn_tab = Some(tab);
            ui.child_window("tab")
                .size([0.0, -self.help_height(ui) - ui.text_line_height() * 2.0])
                .build(|| self.draw_tab(ui, tab, change));
        }
    }

    pub fn draw(&mut self, ui: &Ui, opened: &mut bool) {
        let title = if self.panel.is_per_game() {
            "Game Graphics Settings"
        } else {
            "Graphics Settings"
        };
        let _window_padding = ui.push_style_var(StyleVar::WindowPadding([8.0; 2]));
        ui.window(title)
            .opened(opened)
            .size([720.0, 640.0], Condition::FirstUseEver)
            .build(|| {
                drop(_window_padding);
                let mut change = None;

                self.draw_rows(ui, "header", &[RENDERER, ADAPTER], &mut change);

                self.draw_tab_bar(ui, &mut change);

                heading_options(
                    ui,
                    "Help",
                    16.0,
                    5.0,
                    0.0,
                    0.0,
                    2.0,
                    ui.content_region_avail()[0],
                    false,
                );
                self.draw_help(ui);

                if let Some((id, value)) = change {
                    self.change(id, value);
                }
            });
        self.save_if_requested();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{emu::Message, panel::binding::Input};
    use gsconf_core::{
        gs::{self, RendererType},
        host::{AdapterInfo, CodecInfo, HostFlags, PixelFormatInfo},
    };
    use std::fs;

    struct NoAdapters;

    impl AdapterSource for NoAdapters {
        fn adapters(&self, _renderer: RendererType) -> Vec<AdapterInfo> {
            Vec::new()
        }

        fn default_adapter(&self) -> String {
            String::new()
        }

        fn preferred_renderer(&self) -> RendererType {
            RendererType::OpenGl
        }
    }

    struct NoCodecs;

    impl CodecSource for NoCodecs {
        fn video_codecs(&self, _container: &str) -> Vec<CodecInfo> {
            Vec::new()
        }

        fn audio_codecs(&self, _container: &str) -> Vec<CodecInfo> {
            Vec::new()
        }

        fn video_formats(&self, _codec: &str) -> Vec<PixelFormatInfo> {
            Vec::new()
        }
    }

    fn open(
        config_dir: &Path,
        game_serial: Option<&str>,
    ) -> (SettingsWindow, crossbeam_channel::Receiver<Message>) {
        let (emu, messages) = emu::Handle::unbounded();
        let window = SettingsWindow::open(
            config_dir,
            game_serial,
            Environment {
                flags: HostFlags::ADVANCED_SETTINGS,
                data_root: PathBuf::from("/data"),
            },
            Box::new(NoAdapters),
            Box::new(NoCodecs),
            emu,
            slog::Logger::root(slog::Discard, slog::o!()),
        );
        (window, messages)
    }

    #[test]
    fn changes_are_saved_to_the_edited_file() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, messages) = open(dir.path(), Some("SLUS-21005"));
        window.change(
            crate::panel::graphics::id(gs::FXAA),
            ControlValue::Set(Input::Bool(true)),
        );
        assert_eq!(messages.try_recv(), Ok(Message::ReloadGameSettings));

        let reread = SettingsFiles::read(dir.path(), Some("SLUS-21005")).unwrap();
        assert_eq!(reread.store().game(gs::FXAA), Some(true));
        assert!(!dir.path().join(GLOBAL_SETTINGS_FILE).exists());
    }

    #[test]
    fn migrated_game_settings_are_saved_before_the_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = game_settings_path(dir.path(), "SLUS-20946");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, r#"{"EmuCore":{"EnableWideScreenPatches":"true"}}"#).unwrap();

        let (_window, messages) = open(dir.path(), Some("SLUS-20946"));
        assert_eq!(messages.try_recv(), Ok(Message::ReloadGameSettings));
        assert!(messages.try_recv().is_err());

        let on_disk = File::<Layer>::read(&path, false).unwrap().contents;
        assert!(!on_disk.contains(gs::WIDESCREEN_PATCHES.section, gs::WIDESCREEN_PATCHES.name));
        assert!(on_disk.list_contains(
            gs::PATCHES_SECTION,
            gs::PATCHES_ENABLE,
            gs::WIDESCREEN_PATCH_NAME
        ));
    }

    #[test]
    fn malformed_game_file_keeps_the_global_settings() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(GLOBAL_SETTINGS_FILE),
            r#"{"EmuCore/GS":{"Renderer":"13"}}"#,
        )
        .unwrap();
        let game_path = game_settings_path(dir.path(), "SLES-52056");
        fs::create_dir_all(game_path.parent().unwrap()).unwrap();
        fs::write(&game_path, "{ not json").unwrap();

        let logger = slog::Logger::root(slog::Discard, slog::o!());
        let mut failed = Vec::new();
        let files = read_settings_files(dir.path(), Some("SLES-52056"), &logger, |path, err| {
            assert!(matches!(err, FileError::Json(_)));
            failed.push(path.to_path_buf());
            false
        });

        assert_eq!(failed, [game_path]);
        assert_eq!(
            files.store().effective(gs::RENDERER),
            RendererType::Software.id()
        );
        let game = files.game.as_ref().unwrap();
        assert!(game.path.is_none());
        assert!(game.contents.is_empty());
        assert!(files.global.path.is_some());
    }

    #[test]
    fn rejected_changes_write_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let (mut window, _messages) = open(dir.path(), None);
        window.change(ControlId("missing"), ControlValue::Inherit);
        assert!(!dir.path().join(GLOBAL_SETTINGS_FILE).exists());
    }

    #[test]
    fn panel_draws_headlessly() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(GLOBAL_SETTINGS_FILE),
            r#"{"EmuCore/GS":{"Renderer":"13"}}"#,
        )
        .unwrap();
        let (mut window, _messages) = open(dir.path(), None);
        assert_eq!(
            window.panel().store().effective(gs::RENDERER),
            RendererType::Software.id()
        );

        let mut imgui = imgui::Context::create();
        imgui.set_ini_filename(None);
        imgui.io_mut().display_size = [1280.0, 720.0];
        imgui.fonts().build_rgba32_texture();
        let mut opened = true;
        for _ in 0..3 {
            let ui = imgui.new_frame();
            window.draw(ui, &mut opened);
            imgui.render();
        }
        assert_eq!(window.panel().tabs().current(), Tab::SoftwareRendering);
        assert!(window.drawn_tab.is_some());
        assert!(opened);
    }
}
