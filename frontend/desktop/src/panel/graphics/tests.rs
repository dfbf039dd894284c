use super::*;
use crate::{emu::Message, panel::binding::Shown};
use crossbeam_channel::Receiver;
use gsconf_core::{
    host::{AdapterInfo, CodecInfo, HostFlags, PixelFormatInfo},
    Layer, Origin,
};
use std::path::PathBuf;

struct FakeAdapters;

impl AdapterSource for FakeAdapters {
    fn adapters(&self, renderer: RendererType) -> Vec<AdapterInfo> {
        if !renderer.is_hardware() {
            return Vec::new();
        }
        vec![
            AdapterInfo {
                name: "GPU A".to_string(),
                fullscreen_modes: vec!["1920 x 1080 @ 60 hz".to_string()],
                max_upscale_multiplier: 16,
            },
            AdapterInfo {
                name: "GPU B".to_string(),
                fullscreen_modes: vec![
                    "1280 x 720 @ 60 hz".to_string(),
                    "2560 x 1440 @ 144 hz".to_string(),
                ],
                max_upscale_multiplier: 8,
            },
        ]
    }

    fn default_adapter(&self) -> String {
        "GPU A".to_string()
    }

    fn preferred_renderer(&self) -> RendererType {
        RendererType::Vulkan
    }
}

struct FakeCodecs;

impl CodecSource for FakeCodecs {
    fn video_codecs(&self, container: &str) -> Vec<CodecInfo> {
        let (format, name) = match container {
            "mkv" => ("libvpx-vp9", "Google VP9"),
            _ => ("libx264", "H.264 / AVC"),
        };
        vec![CodecInfo {
            format: format.to_string(),
            name: name.to_string(),
        }]
    }

    fn audio_codecs(&self, _container: &str) -> Vec<CodecInfo> {
        vec![CodecInfo {
            format: "aac".to_string(),
            name: "AAC".to_string(),
        }]
    }

    fn video_formats(&self, codec: &str) -> Vec<PixelFormatInfo> {
        if codec == "libx264" {
            vec![
                PixelFormatInfo {
                    id: 0,
                    name: "yuv420p".to_string(),
                },
                PixelFormatInfo {
                    id: 4,
                    name: "yuv422p".to_string(),
                },
            ]
        } else {
            Vec::new()
        }
    }
}

const DESKTOP_DEV: HostFlags = HostFlags::WINDOWS
    .union(HostFlags::ADVANCED_SETTINGS)
    .union(HostFlags::DEV_BUILD);

fn panel_with(store: Store, flags: HostFlags) -> (GraphicsPanel, Receiver<Message>) {
    let (emu, messages) = emu::Handle::unbounded();
    let panel = GraphicsPanel::new(
        store,
        Environment {
            flags,
            data_root: PathBuf::from("/data"),
        },
        Box::new(FakeAdapters),
        Box::new(FakeCodecs),
        emu,
        slog::Logger::root(slog::Discard, slog::o!()),
    );
    (panel, messages)
}

fn global_panel() -> (GraphicsPanel, Receiver<Message>) {
    panel_with(Store::global(Layer::new()), DESKTOP_DEV)
}

fn game_panel(base: Layer, game: Layer) -> (GraphicsPanel, Receiver<Message>) {
    panel_with(Store::per_game(base, game), DESKTOP_DEV)
}

fn choice(panel: &GraphicsPanel, id: ControlId) -> Choice {
    panel
        .controls()
        .get(id)
        .and_then(|control| control.choice())
        .cloned()
        .expect("not a choice control")
}

fn shown(panel: &GraphicsPanel, id: ControlId) -> Shown {
    panel
        .controls()
        .get(id)
        .and_then(|control| control.shown())
        .cloned()
        .expect("not a bound control")
}

fn combo_items(panel: &GraphicsPanel, id: ControlId) -> Vec<String> {
    match panel.controls().get(id).and_then(|control| control.binding()) {
        Some(Binding::Text {
            items: Some(items), ..
        }) => items.iter().map(|item| item.label.clone()).collect(),
        _ => panic!("`{id}` is not a text combo"),
    }
}

fn set(panel: &mut GraphicsPanel, id: ControlId, input: Input) {
    panel
        .set(id, ControlValue::Set(input))
        .unwrap_or_else(|err| panic!("{err}"));
}

fn renderer_index(panel: &GraphicsPanel, renderer: RendererType) -> usize {
    choice(panel, RENDERER)
        .items
        .iter()
        .position(|item| item.as_str() == renderer.name())
        .expect("renderer not offered")
}

#[test]
fn automatic_renderer_resolves_to_the_preferred_backend() {
    let (panel, messages) = global_panel();
    let renderers = choice(&panel, RENDERER);
    assert_eq!(renderers.selected_item(), Some("Automatic (Default)"));
    assert!(!renderers.items.iter().any(|item| item == "Metal"));

    assert!(panel.tabs().is_visible(Tab::HardwareRendering));
    assert!(!panel.tabs().is_visible(Tab::SoftwareRendering));
    assert!(panel.tabs().is_visible(Tab::TextureReplacement));
    assert!(!panel.tabs().is_visible(Tab::HardwareFixes));
    assert_eq!(panel.tabs().current(), Tab::HardwareRendering);
    assert!(panel
        .controls()
        .is_enabled(id(gs::EXCLUSIVE_FULLSCREEN_CONTROL)));
    assert!(messages.try_recv().is_err());
}

#[test]
fn switching_to_software_swaps_the_rendering_tabs() {
    let (mut panel, messages) = global_panel();
    let software = renderer_index(&panel, RendererType::Software);
    set(&mut panel, RENDERER, Input::Index(software));

    assert_eq!(
        panel.store().effective(gs::RENDERER),
        RendererType::Software.id()
    );
    assert!(panel.tabs().is_visible(Tab::SoftwareRendering));
    assert!(!panel.tabs().is_visible(Tab::HardwareRendering));
    assert!(!panel.tabs().is_visible(Tab::TextureReplacement));
    assert_eq!(panel.tabs().current(), Tab::SoftwareRendering);

    assert!(panel.controls().is_enabled(id(gs::USE_BLIT_SWAP_CHAIN)));
    assert!(!panel
        .controls()
        .is_enabled(id(gs::OVERRIDE_TEXTURE_BARRIERS)));
    assert!(!panel
        .controls()
        .is_enabled(id(gs::DISABLE_FRAMEBUFFER_FETCH)));
    assert!(!panel
        .controls()
        .is_enabled(id(gs::EXCLUSIVE_FULLSCREEN_CONTROL)));
    assert!(!panel.controls().is_enabled(ADAPTER));
    assert_eq!(choice(&panel, ADAPTER).items, ["(Default)"]);

    assert!(panel.take_save_request());
    assert!(!panel.take_save_request());
    assert!(messages.try_recv().is_err());
    panel.send_pending_messages();
    assert_eq!(
        messages.try_iter().collect::<Vec<_>>(),
        [Message::ApplySettings]
    );
}

#[test]
fn null_renderer_falls_back_to_the_display_tab() {
    let (mut panel, _messages) = global_panel();
    let null = renderer_index(&panel, RendererType::Null);
    set(&mut panel, RENDERER, Input::Index(null));
    assert!(!panel.tabs().is_visible(Tab::HardwareRendering));
    assert!(!panel.tabs().is_visible(Tab::SoftwareRendering));
    assert_eq!(panel.tabs().current(), Tab::Display);
}

#[test]
fn per_game_renderer_offers_the_global_setting() {
    let mut base = Layer::new();
    base.set(gs::RENDERER, &RendererType::OpenGl.id());
    let (mut panel, messages) = game_panel(base, Layer::new());

    let renderers = choice(&panel, RENDERER);
    assert_eq!(renderers.items[0], "Use Global Setting [OpenGL]");
    assert_eq!(renderers.selected, 0);
    assert!(!panel
        .controls()
        .is_enabled(id(gs::EXCLUSIVE_FULLSCREEN_CONTROL)));

    let vulkan = renderer_index(&panel, RendererType::Vulkan);
    set(&mut panel, RENDERER, Input::Index(vulkan));
    assert_eq!(
        panel.store().game(gs::RENDERER),
        Some(RendererType::Vulkan.id())
    );
    assert!(panel
        .controls()
        .is_enabled(id(gs::EXCLUSIVE_FULLSCREEN_CONTROL)));

    panel.set(RENDERER, ControlValue::Inherit).unwrap();
    assert_eq!(panel.store().game(gs::RENDERER), None);
    assert_eq!(choice(&panel, RENDERER).selected, 0);
    panel.send_pending_messages();
    assert_eq!(
        messages.try_iter().collect::<Vec<_>>(),
        [
            Message::ReloadGameSettings,
            Message::ApplySettings,
            Message::ReloadGameSettings,
            Message::ApplySettings,
        ]
    );
}

#[test]
fn adapters_store_their_name_and_default_deletes_it() {
    let (mut panel, _messages) = global_panel();
    assert_eq!(
        choice(&panel, ADAPTER).items,
        ["(Default)", "GPU A", "GPU B"]
    );

    set(&mut panel, ADAPTER, Input::Index(2));
    assert_eq!(panel.store().base(gs::ADAPTER), "GPU B");
    assert_eq!(choice(&panel, ADAPTER).selected, 2);
    assert_eq!(
        choice(&panel, FULLSCREEN_MODE).items,
        [
            "Borderless Fullscreen",
            "1280 x 720 @ 60 hz",
            "2560 x 1440 @ 144 hz"
        ]
    );

    set(&mut panel, ADAPTER, Input::Index(0));
    assert!(!panel.store().edited_contains(gs::ADAPTER));
    assert_eq!(choice(&panel, ADAPTER).selected, 0);
}

#[test]
fn the_default_adapter_name_counts_as_unset() {
    let mut base = Layer::new();
    base.set(gs::ADAPTER, &"GPU A".to_string());
    let (panel, _messages) = panel_with(Store::global(base), DESKTOP_DEV);
    assert_eq!(choice(&panel, ADAPTER).selected, 0);
}

#[test]
fn per_game_adapter_can_pin_the_default() {
    let mut base = Layer::new();
    base.set(gs::ADAPTER, &"GPU B".to_string());
    let (mut panel, _messages) = game_panel(base, Layer::new());

    let adapters = choice(&panel, ADAPTER);
    assert_eq!(adapters.items[0], "Use Global Setting [GPU B]");
    assert_eq!(adapters.selected, 0);

    set(&mut panel, ADAPTER, Input::Index(1));
    assert_eq!(panel.store().game(gs::ADAPTER), Some(String::new()));
    assert_eq!(choice(&panel, ADAPTER).selected, 1);

    set(&mut panel, ADAPTER, Input::Index(3));
    assert_eq!(panel.store().game(gs::ADAPTER), Some("GPU B".to_string()));
    assert_eq!(choice(&panel, ADAPTER).selected, 3);

    set(&mut panel, ADAPTER, Input::Index(0));
    assert_eq!(panel.store().game(gs::ADAPTER), None);
}

#[test]
fn fullscreen_modes_follow_the_selected_adapter() {
    let (mut panel, _messages) = global_panel();
    assert_eq!(
        choice(&panel, FULLSCREEN_MODE).items,
        ["Borderless Fullscreen", "1920 x 1080 @ 60 hz"]
    );
    set(&mut panel, FULLSCREEN_MODE, Input::Index(1));
    assert_eq!(
        panel.store().base(gs::FULLSCREEN_MODE),
        "1920 x 1080 @ 60 hz"
    );
    assert_eq!(choice(&panel, FULLSCREEN_MODE).selected, 1);
    set(&mut panel, FULLSCREEN_MODE, Input::Index(0));
    assert!(!panel.store().edited_contains(gs::FULLSCREEN_MODE));
}

#[test]
fn upscale_list_extends_past_twelve_only_when_asked() {
    let (mut panel, _messages) = global_panel();
    let multipliers = choice(&panel, UPSCALE_MULTIPLIER);
    assert_eq!(multipliers.items.len(), 12);
    assert_eq!(multipliers.selected_item(), Some("Native (PS2) (Default)"));

    set(
        &mut panel,
        id(gs::EXTENDED_UPSCALING_MULTIPLIERS),
        Input::Bool(true),
    );
    assert_eq!(choice(&panel, UPSCALE_MULTIPLIER).items.len(), 16);

    set(&mut panel, UPSCALE_MULTIPLIER, Input::Index(3));
    assert_eq!(panel.store().base(gs::UPSCALE_MULTIPLIER), 4.0);
    assert_eq!(
        choice(&panel, UPSCALE_MULTIPLIER).selected_item(),
        Some("4x Native (~1440px/QHD)")
    );
}

#[test]
fn per_game_upscale_shows_the_global_multiplier() {
    let mut base = Layer::new();
    base.set(gs::UPSCALE_MULTIPLIER, &2.0);
    let mut game = Layer::new();
    game.set(gs::UPSCALE_MULTIPLIER, &3.0);
    let (mut panel, _messages) = game_panel(base, game);

    let multipliers = choice(&panel, UPSCALE_MULTIPLIER);
    assert_eq!(
        multipliers.items[0],
        "Use Global Setting [2x Native (~720px/HD)]"
    );
    assert_eq!(multipliers.selected, 3);

    set(&mut panel, UPSCALE_MULTIPLIER, Input::Index(0));
    assert_eq!(panel.store().game(gs::UPSCALE_MULTIPLIER), None);
    assert_eq!(choice(&panel, UPSCALE_MULTIPLIER).selected, 0);
}

#[test]
fn legacy_patch_checkboxes_migrate_to_patch_lists() {
    let mut game = Layer::new();
    game.set(gs::WIDESCREEN_PATCHES, &true);
    game.set(gs::NO_INTERLACING_PATCHES, &false);
    let (mut panel, messages) = game_panel(Layer::new(), game);

    let game = panel.store().game_layer().expect("per-game store");
    assert!(!game.contains(gs::WIDESCREEN_PATCHES.section, gs::WIDESCREEN_PATCHES.name));
    assert!(game.list_contains(
        gs::PATCHES_SECTION,
        gs::PATCHES_ENABLE,
        gs::WIDESCREEN_PATCH_NAME
    ));
    assert!(game.list_contains(
        gs::PATCHES_SECTION,
        gs::PATCHES_DISABLE,
        gs::NO_INTERLACING_PATCH_NAME
    ));
    assert!(!panel.controls().contains(id(gs::WIDESCREEN_PATCHES)));
    assert!(panel.take_save_request());
    assert!(messages.try_recv().is_err());
    panel.send_pending_messages();
    assert_eq!(
        messages.try_iter().collect::<Vec<_>>(),
        [Message::ReloadGameSettings]
    );
}

#[test]
fn nothing_to_migrate_requests_no_save() {
    let (mut panel, messages) = game_panel(Layer::new(), Layer::new());
    assert!(!panel.take_save_request());
    panel.send_pending_messages();
    assert!(messages.try_recv().is_err());
    assert!(!panel.controls().contains(id(gs::NO_INTERLACING_PATCHES)));
}

#[test]
fn host_dependent_controls_are_removed() {
    let (panel, _messages) = panel_with(Store::global(Layer::new()), HostFlags::empty());
    assert!(!panel
        .controls()
        .contains(id(gs::EXCLUSIVE_FULLSCREEN_CONTROL)));
    assert!(!panel.controls().contains(id(gs::HW_DOWNLOAD_MODE)));
    assert!(!panel.controls().contains(id(gs::MANUAL_HW_FIXES)));
    assert!(!panel.tabs().is_visible(Tab::Advanced));
    assert!(!panel.tabs().is_visible(Tab::HardwareFixes));
    assert!(panel.help(id(gs::MANUAL_HW_FIXES)).is_none());
    assert!(!choice(&panel, RENDERER)
        .items
        .iter()
        .any(|item| item.starts_with("Direct3D")));

    let (panel, _messages) = game_panel(Layer::new(), Layer::new());
    assert!(!panel.controls().contains(id(gs::TEXTURES_DIRECTORY)));
    assert!(panel.controls().contains(id(gs::MANUAL_HW_FIXES)));
}

#[test]
fn manual_hw_fixes_reveal_the_fix_tabs() {
    let (mut panel, _messages) = global_panel();
    set(&mut panel, id(gs::MANUAL_HW_FIXES), Input::Bool(true));
    assert!(panel.tabs().is_visible(Tab::HardwareFixes));
    assert!(panel.tabs().is_visible(Tab::UpscalingFixes));
    assert!(panel.select_tab(Tab::HardwareFixes));

    set(&mut panel, id(gs::MANUAL_HW_FIXES), Input::Bool(false));
    assert!(!panel.tabs().is_visible(Tab::HardwareFixes));
    assert_eq!(panel.tabs().current(), Tab::HardwareRendering);
}

#[test]
fn inherited_hw_fixes_keep_the_fix_tabs_hidden() {
    let mut base = Layer::new();
    base.set(gs::MANUAL_HW_FIXES, &true);
    let (mut panel, _messages) = game_panel(base, Layer::new());
    assert!(!panel.tabs().is_visible(Tab::HardwareFixes));

    set(&mut panel, id(gs::MANUAL_HW_FIXES), Input::Bool(true));
    assert!(panel.tabs().is_visible(Tab::HardwareFixes));
}

#[test]
fn stereo_options_follow_the_stereo_mode() {
    let (mut panel, _messages) = global_panel();
    assert!(!panel.controls().is_enabled(id(gs::STEREO_SEPARATION)));
    assert_eq!(
        panel.set(
            id(gs::STEREO_SEPARATION),
            ControlValue::Set(Input::Float(10.0))
        ),
        Err(PanelError::Disabled(id(gs::STEREO_SEPARATION)))
    );

    set(&mut panel, id(gs::STEREO_MODE), Input::Index(1));
    assert_eq!(panel.store().base(gs::STEREO_MODE), "SideBySide");
    assert!(panel.controls().is_enabled(id(gs::STEREO_SEPARATION)));
    let first_flag = id(stereo::STEREO_FLAGS[0].key);
    assert!(panel.controls().is_enabled(first_flag));

    set(&mut panel, id(gs::STEREO_UI_DEPTH), Input::Int(-25));
    match panel.controls().get(STEREO_UI_DEPTH_VALUE).map(|c| &c.kind) {
        Some(ControlKind::Label(text)) => assert_eq!(text, "-25"),
        other => panic!("unexpected depth label {other:?}"),
    }
}

#[test]
fn capture_codecs_follow_the_container() {
    let (mut panel, _messages) = global_panel();
    assert_eq!(
        combo_items(&panel, id(gs::VIDEO_CAPTURE_CODEC)),
        ["Default", "libx264 [H.264 / AVC]"]
    );
    assert_eq!(
        combo_items(&panel, id(gs::AUDIO_CAPTURE_CODEC)),
        ["Default", "aac [AAC]"]
    );
    assert_eq!(combo_items(&panel, id(gs::VIDEO_CAPTURE_FORMAT)), ["Default"]);

    set(&mut panel, id(gs::CAPTURE_CONTAINER), Input::Index(1));
    assert_eq!(panel.store().base(gs::CAPTURE_CONTAINER), "mkv");
    assert_eq!(
        combo_items(&panel, id(gs::VIDEO_CAPTURE_CODEC)),
        ["Default", "libvpx-vp9 [Google VP9]"]
    );

    set(&mut panel, id(gs::CAPTURE_CONTAINER), Input::Index(0));
    set(&mut panel, id(gs::VIDEO_CAPTURE_CODEC), Input::Index(1));
    assert_eq!(panel.store().base(gs::VIDEO_CAPTURE_CODEC), "libx264");
    assert_eq!(
        combo_items(&panel, id(gs::VIDEO_CAPTURE_FORMAT)),
        ["Default", "yuv420p", "yuv422p"]
    );
    set(&mut panel, id(gs::VIDEO_CAPTURE_FORMAT), Input::Index(2));
    assert_eq!(panel.store().base(gs::VIDEO_CAPTURE_FORMAT), "4");
}

#[test]
fn capture_groups_and_arguments_toggle() {
    let (mut panel, _messages) = global_panel();
    assert!(panel.controls().is_enabled(id(gs::VIDEO_CAPTURE_BITRATE)));
    assert!(!panel.controls().is_enabled(id(gs::VIDEO_CAPTURE_PARAMETERS)));
    assert!(!panel.controls().is_enabled(id(gs::VIDEO_CAPTURE_WIDTH)));

    set(
        &mut panel,
        id(gs::ENABLE_VIDEO_CAPTURE_PARAMETERS),
        Input::Bool(true),
    );
    set(
        &mut panel,
        id(gs::VIDEO_CAPTURE_AUTO_RESOLUTION),
        Input::Bool(false),
    );
    assert!(panel.controls().is_enabled(id(gs::VIDEO_CAPTURE_PARAMETERS)));
    assert!(panel.controls().is_enabled(id(gs::VIDEO_CAPTURE_HEIGHT)));

    set(&mut panel, id(gs::ENABLE_VIDEO_CAPTURE), Input::Bool(false));
    assert!(!panel.controls().is_enabled(id(gs::VIDEO_CAPTURE_PARAMETERS)));
    set(&mut panel, id(gs::ENABLE_AUDIO_CAPTURE), Input::Bool(false));
    assert!(!panel.controls().is_enabled(id(gs::AUDIO_CAPTURE_BITRATE)));
}

#[test]
fn both_texture_filtering_combos_show_the_same_key() {
    let (mut panel, _messages) = global_panel();
    set(&mut panel, id(gs::TEXTURE_FILTERING), Input::Index(0));
    assert_eq!(
        shown(&panel, SW_TEXTURE_FILTERING),
        Shown {
            value: Input::Index(0),
            origin: Origin::Global,
        }
    );

    set(&mut panel, id(gs::TRILINEAR_FILTERING), Input::Index(3));
    assert_eq!(panel.store().base(gs::TRILINEAR_FILTERING), gs::TRILINEAR_FORCED);
    assert!(!panel.controls().is_enabled(id(gs::TEXTURE_FILTERING)));
}

#[test]
fn osd_warning_uses_the_game_position_per_game() {
    let mut base = Layer::new();
    base.set(gs::OSD_MESSAGES_POS, &gs::OSD_POSITION_NONE);
    let (panel, _messages) = panel_with(Store::global(base.clone()), DESKTOP_DEV);
    assert!(!panel
        .controls()
        .is_enabled(id(gs::WARN_ABOUT_UNSAFE_SETTINGS)));

    let (mut panel, _messages) = game_panel(base, Layer::new());
    assert!(panel
        .controls()
        .is_enabled(id(gs::WARN_ABOUT_UNSAFE_SETTINGS)));
    set(&mut panel, id(gs::OSD_PERFORMANCE_POS), Input::Index(0));
    assert!(!panel.controls().is_enabled(id(gs::OSD_SHOW_FPS)));
    assert!(!panel.controls().is_enabled(id(gs::OSD_SHOW_VERSION)));
    assert!(panel.controls().is_enabled(id(gs::OSD_SHOW_SETTINGS)));
}

#[test]
fn simple_toggles_gate_their_dependents() {
    let (mut panel, _messages) = global_panel();
    assert!(!panel
        .controls()
        .is_enabled(id(gs::SHADE_BOOST_BRIGHTNESS)));
    set(&mut panel, id(gs::SHADE_BOOST), Input::Bool(true));
    assert!(panel.controls().is_enabled(id(gs::SHADE_BOOST_GAMMA)));

    assert!(panel.controls().is_enabled(id(gs::ANISOTROPIC_FILTERING)));
    set(&mut panel, id(gs::GPU_PALETTE_CONVERSION), Input::Bool(true));
    assert!(!panel.controls().is_enabled(id(gs::ANISOTROPIC_FILTERING)));

    assert!(!panel
        .controls()
        .is_enabled(id(gs::CPU_SPRITE_RENDER_LEVEL)));
    set(&mut panel, id(gs::CPU_SPRITE_RENDER_BW), Input::Index(2));
    assert!(panel
        .controls()
        .is_enabled(id(gs::CPU_SPRITE_RENDER_LEVEL)));

    assert!(!panel.controls().is_enabled(id(gs::DUMP_REPLACEABLE_MIPMAPS)));
    set(&mut panel, id(gs::DUMP_REPLACEABLE_TEXTURES), Input::Bool(true));
    assert!(panel.controls().is_enabled(id(gs::DUMP_REPLACEABLE_MIPMAPS)));
}

#[test]
fn invalid_requests_are_rejected() {
    let (mut panel, _messages) = global_panel();
    let nope = ControlId("nope");
    assert_eq!(
        panel.set(nope, ControlValue::Inherit),
        Err(PanelError::UnknownControl(nope))
    );
    assert_eq!(
        panel.set(STEREO_UI_DEPTH_VALUE, ControlValue::Inherit),
        Err(PanelError::NotEditable(STEREO_UI_DEPTH_VALUE))
    );
    assert_eq!(
        panel.set(RENDERER, ControlValue::Set(Input::Bool(true))),
        Err(PanelError::KindMismatch(RENDERER))
    );
    assert_eq!(
        panel.set(RENDERER, ControlValue::Inherit),
        Err(PanelError::KindMismatch(RENDERER))
    );
    assert_eq!(
        panel.select(ADAPTER, 9),
        Err(PanelError::IndexOutOfRange {
            id: ADAPTER,
            index: 9
        })
    );
    assert!(!panel.take_save_request());
}

#[test]
fn global_inherit_resets_to_the_default() {
    let mut base = Layer::new();
    base.set(gs::FXAA, &true);
    let (mut panel, _messages) = panel_with(Store::global(base), DESKTOP_DEV);
    panel.set(id(gs::FXAA), ControlValue::Inherit).unwrap();
    assert!(!panel.store().edited_contains(gs::FXAA));
    assert_eq!(shown(&panel, id(gs::FXAA)).value, Input::Bool(false));
}

#[test]
fn help_exists_only_for_present_controls() {
    let (panel, _messages) = game_panel(Layer::new(), Layer::new());
    assert_eq!(panel.help(RENDERER).map(|help| help.title), Some("Renderer"));
    assert!(panel.help(id(gs::TEXTURES_DIRECTORY)).is_none());
    let flag = &stereo::STEREO_FLAGS[0];
    assert_eq!(panel.help(id(flag.key)).map(|help| help.title), Some(flag.title));
}

#[test]
fn out_of_range_stored_combo_values_still_load() {
    let mut base = Layer::new();
    base.set(gs::TRILINEAR_FILTERING, &i32::MAX);
    base.set(gs::OVERRIDE_TEXTURE_BARRIERS, &i32::MIN);
    let (panel, _messages) = panel_with(Store::global(base), DESKTOP_DEV);
    assert_eq!(
        shown(&panel, id(gs::TRILINEAR_FILTERING)).value,
        Input::Index(3)
    );
    assert_eq!(
        shown(&panel, id(gs::OVERRIDE_TEXTURE_BARRIERS)).value,
        Input::Index(0)
    );
    assert!(!panel.controls().is_enabled(id(gs::TEXTURE_FILTERING)));
}
