use super::{controls::*, use_global_label, GraphicsPanel, Tab};
use crate::panel::{
    binding::{ComboItem, Input},
    deps::DependencyGraph,
    ControlId,
};
use gsconf_core::{
    gs::{self, RendererType},
    host::{AdapterInfo, CodecInfo},
    Key,
};

pub(super) fn register(rules: &mut DependencyGraph<GraphicsPanel>) {
    rules.add(&[id(gs::TRILINEAR_FILTERING)], trilinear_filtering);
    rules.add(&[id(gs::SHADE_BOOST)], shade_boost);
    rules.add(&[id(gs::STEREO_MODE)], stereoscopy);
    rules.add(&[id(gs::STEREO_UI_DEPTH)], ui_depth_value);
    rules.add(&[id(gs::STEREO_UI_SECOND_LAYER_DEPTH)], ui_second_layer_depth_value);
    rules.add(&[id(gs::OSD_MESSAGES_POS)], osd_messages_position);
    rules.add(&[id(gs::OSD_PERFORMANCE_POS)], osd_performance_position);
    rules.add(&[id(gs::OSD_SHOW_SETTINGS)], osd_show_settings);
    rules.add(&[id(gs::DUMP_REPLACEABLE_TEXTURES)], texture_dumping);
    rules.add(&[id(gs::LOAD_TEXTURE_REPLACEMENTS)], texture_loading);
    rules.add(&[id(gs::CAPTURE_CONTAINER)], capture_codecs);
    rules.add(&[id(gs::VIDEO_CAPTURE_CODEC)], video_capture_formats);
    rules.add(&[id(gs::ENABLE_VIDEO_CAPTURE)], video_capture);
    rules.add(
        &[id(gs::ENABLE_VIDEO_CAPTURE_PARAMETERS)],
        video_capture_arguments,
    );
    rules.add(
        &[id(gs::VIDEO_CAPTURE_AUTO_RESOLUTION)],
        video_capture_resolution,
    );
    rules.add(&[id(gs::ENABLE_AUDIO_CAPTURE)], audio_capture);
    rules.add(
        &[id(gs::ENABLE_AUDIO_CAPTURE_PARAMETERS)],
        audio_capture_arguments,
    );
    rules.add(&[id(gs::GPU_PALETTE_CONVERSION)], gpu_palette_conversion);
    rules.add(&[id(gs::CPU_SPRITE_RENDER_BW)], cpu_sprite_render_size);
    rules.add(
        &[
            RENDERER,
            ADAPTER,
            id(gs::MANUAL_HW_FIXES),
            id(gs::EXTENDED_UPSCALING_MULTIPLIERS),
        ],
        renderer_dependent_options,
    );
}

fn trilinear_filtering(panel: &mut GraphicsPanel) {
    let forced = panel.store.effective(gs::TRILINEAR_FILTERING) >= gs::TRILINEAR_FORCED;
    panel.set_enabled(&[id(gs::TEXTURE_FILTERING)], !forced);
}

fn shade_boost(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::SHADE_BOOST);
    panel.set_enabled(
        &[
            id(gs::SHADE_BOOST_BRIGHTNESS),
            id(gs::SHADE_BOOST_CONTRAST),
            id(gs::SHADE_BOOST_GAMMA),
            id(gs::SHADE_BOOST_SATURATION),
        ],
        enabled,
    );
}

fn stereoscopy(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::STEREO_MODE) != gs::STEREO_MODE_OFF;
    panel.set_enabled(&[STEREOSCOPY_OPTIONS], enabled);
}

fn slider_label(panel: &mut GraphicsPanel, slider: ControlId, label: ControlId) {
    let text = match panel.controls.get(slider).and_then(|c| c.shown()) {
        Some(shown) => match shown.value {
            Input::Int(value) => value.to_string(),
            _ => return,
        },
        None => return,
    };
    panel.set_label(label, text);
}

fn ui_depth_value(panel: &mut GraphicsPanel) {
    slider_label(panel, id(gs::STEREO_UI_DEPTH), STEREO_UI_DEPTH_VALUE);
}

fn ui_second_layer_depth_value(panel: &mut GraphicsPanel) {
    slider_label(
        panel,
        id(gs::STEREO_UI_SECOND_LAYER_DEPTH),
        STEREO_UI_SECOND_LAYER_DEPTH_VALUE,
    );
}

/// Whether an OSD position combo is explicitly set to "None" in the edited layer.
fn osd_position_is_none(panel: &GraphicsPanel, key: Key<i32>) -> bool {
    let value = if panel.store.is_per_game() {
        panel.store.game(key)
    } else {
        Some(panel.store.effective(key))
    };
    value == Some(gs::OSD_POSITION_NONE)
}

fn osd_messages_position(panel: &mut GraphicsPanel) {
    let enabled = !osd_position_is_none(panel, gs::OSD_MESSAGES_POS);
    panel.set_enabled(&[id(gs::WARN_ABOUT_UNSAFE_SETTINGS)], enabled);
}

fn osd_performance_position(panel: &mut GraphicsPanel) {
    let enabled = !osd_position_is_none(panel, gs::OSD_PERFORMANCE_POS);
    panel.set_enabled(
        &[
            id(gs::OSD_SHOW_SPEED),
            id(gs::OSD_SHOW_FPS),
            id(gs::OSD_SHOW_VPS),
            id(gs::OSD_SHOW_RESOLUTION),
            id(gs::OSD_SHOW_GS_STATS),
            id(gs::OSD_SHOW_CPU),
            id(gs::OSD_SHOW_GPU),
            id(gs::OSD_SHOW_INDICATORS),
            id(gs::OSD_SHOW_FRAME_TIMES),
            id(gs::OSD_SHOW_HARDWARE_INFO),
            id(gs::OSD_SHOW_VERSION),
        ],
        enabled,
    );
}

fn osd_show_settings(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::OSD_SHOW_SETTINGS);
    panel.set_enabled(&[id(gs::OSD_SHOW_PATCHES)], enabled);
}

fn texture_dumping(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::DUMP_REPLACEABLE_TEXTURES);
    panel.set_enabled(
        &[
            id(gs::DUMP_REPLACEABLE_MIPMAPS),
            id(gs::DUMP_TEXTURES_WITH_FMV_ACTIVE),
        ],
        enabled,
    );
}

fn texture_loading(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::LOAD_TEXTURE_REPLACEMENTS);
    panel.set_enabled(
        &[
            id(gs::LOAD_TEXTURE_REPLACEMENTS_ASYNC),
            id(gs::PRECACHE_TEXTURE_REPLACEMENTS),
        ],
        enabled,
    );
}

fn codec_items(codecs: Vec<CodecInfo>) -> Vec<ComboItem> {
    std::iter::once(ComboItem::new("Default", ""))
        .chain(codecs.into_iter().map(|codec| {
            ComboItem::new(format!("{} [{}]", codec.format, codec.name), codec.format)
        }))
        .collect()
}

fn capture_codecs(panel: &mut GraphicsPanel) {
    let container = panel.store.effective(gs::CAPTURE_CONTAINER);
    let video = codec_items(panel.codec_source.video_codecs(&container));
    let audio = codec_items(panel.codec_source.audio_codecs(&container));
    panel.set_combo_items(id(gs::VIDEO_CAPTURE_CODEC), video);
    panel.set_combo_items(id(gs::AUDIO_CAPTURE_CODEC), audio);
}

fn video_capture_formats(panel: &mut GraphicsPanel) {
    let codec = panel.store.effective(gs::VIDEO_CAPTURE_CODEC);
    let mut items = vec![ComboItem::new("Default", "")];
    if !codec.is_empty() {
        items.extend(
            panel
                .codec_source
                .video_formats(&codec)
                .into_iter()
                .map(|format| ComboItem::new(format.name, format.id.to_string())),
        );
    }
    panel.set_combo_items(id(gs::VIDEO_CAPTURE_FORMAT), items);
}

fn video_capture(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::ENABLE_VIDEO_CAPTURE);
    panel.set_enabled(&[VIDEO_CAPTURE_OPTIONS], enabled);
}

fn video_capture_arguments(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::ENABLE_VIDEO_CAPTURE_PARAMETERS);
    panel.set_enabled(&[id(gs::VIDEO_CAPTURE_PARAMETERS)], enabled);
}

fn video_capture_resolution(panel: &mut GraphicsPanel) {
    let enabled = !panel.store.effective(gs::VIDEO_CAPTURE_AUTO_RESOLUTION);
    panel.set_enabled(
        &[id(gs::VIDEO_CAPTURE_WIDTH), id(gs::VIDEO_CAPTURE_HEIGHT)],
        enabled,
    );
}

fn audio_capture(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::ENABLE_AUDIO_CAPTURE);
    panel.set_enabled(&[AUDIO_CAPTURE_OPTIONS], enabled);
}

fn audio_capture_arguments(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::ENABLE_AUDIO_CAPTURE_PARAMETERS);
    panel.set_enabled(&[id(gs::AUDIO_CAPTURE_PARAMETERS)], enabled);
}

fn gpu_palette_conversion(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::GPU_PALETTE_CONVERSION);
    panel.set_enabled(&[id(gs::ANISOTROPIC_FILTERING)], !enabled);
}

fn cpu_sprite_render_size(panel: &mut GraphicsPanel) {
    let enabled = panel.store.effective(gs::CPU_SPRITE_RENDER_BW) != 0;
    panel.set_enabled(&[id(gs::CPU_SPRITE_RENDER_LEVEL)], enabled);
}

fn renderer_dependent_options(panel: &mut GraphicsPanel) {
    let renderer = panel.effective_renderer();
    let windows = panel.env.is_windows();
    let is_dx11 = windows && matches!(renderer, RendererType::Dx11 | RendererType::Software);
    let is_sw_dx = windows
        && matches!(
            renderer,
            RendererType::Dx11 | RendererType::Dx12 | RendererType::Software
        );
    let is_hardware = renderer.is_hardware();
    let is_software = renderer == RendererType::Software;
    let disable_barriers = matches!(renderer, RendererType::Metal | RendererType::Software);
    let hw_fixes = is_hardware && panel.explicitly_checked(gs::MANUAL_HW_FIXES);

    let rendering_tab = if is_hardware {
        panel.tabs.set_visible(Tab::HardwareRendering, true, Tab::Display);
        panel
            .tabs
            .set_visible(Tab::SoftwareRendering, false, Tab::HardwareRendering);
        Tab::HardwareRendering
    } else if is_software {
        panel.tabs.set_visible(Tab::SoftwareRendering, true, Tab::Display);
        panel
            .tabs
            .set_visible(Tab::HardwareRendering, false, Tab::SoftwareRendering);
        Tab::SoftwareRendering
    } else {
        panel
            .tabs
            .set_visible(Tab::HardwareRendering, false, Tab::Display);
        panel
            .tabs
            .set_visible(Tab::SoftwareRendering, false, Tab::Display);
        Tab::Display
    };
    panel
        .tabs
        .set_visible(Tab::HardwareFixes, hw_fixes, rendering_tab);
    panel
        .tabs
        .set_visible(Tab::UpscalingFixes, hw_fixes, rendering_tab);
    panel
        .tabs
        .set_visible(Tab::TextureReplacement, is_hardware, rendering_tab);

    panel.set_enabled(&[id(gs::USE_BLIT_SWAP_CHAIN)], is_dx11);
    panel.set_enabled(&[id(gs::OVERRIDE_TEXTURE_BARRIERS)], !disable_barriers);
    panel.set_enabled(&[id(gs::DISABLE_FRAMEBUFFER_FETCH)], !is_sw_dx);
    panel.set_enabled(
        &[id(gs::EXCLUSIVE_FULLSCREEN_CONTROL)],
        matches!(renderer, RendererType::Auto | RendererType::Vulkan),
    );

    let adapters = panel.adapter_source.adapters(renderer);
    let adapter = populate_adapters(panel, &adapters);
    populate_fullscreen_modes(panel, adapter);
    let max_upscale_multiplier = adapter.map_or(0, |adapter| adapter.max_upscale_multiplier);
    populate_upscale_multipliers(panel, max_upscale_multiplier);
    slog::debug!(
        panel.logger,
        "Refreshed options for {} ({} adapters)",
        renderer.name(),
        adapters.len()
    );
}

/// Fills the adapter combo and returns the adapter whose modes and limits apply.
fn populate_adapters<'a>(
    panel: &mut GraphicsPanel,
    adapters: &'a [AdapterInfo],
) -> Option<&'a AdapterInfo> {
    let mut current = panel.store.base(gs::ADAPTER);
    if current == panel.adapter_source.default_adapter() {
        current.clear();
    }

    let mut items = vec!["(Default)".to_string()];
    let mut selected = 0;
    if panel.store.is_per_game() {
        let global = if current.is_empty() {
            "(Default)"
        } else {
            &current
        };
        items.insert(0, use_global_label(global));
        match panel.store.game(gs::ADAPTER) {
            Some(value) => {
                current = value;
                selected = 1;
            }
            None => current.clear(),
        }
    }

    let mut current_info = None;
    for adapter in adapters {
        items.push(adapter.name.clone());
        if current == adapter.name {
            selected = items.len() - 1;
            current_info = Some(adapter);
        }
    }

    panel.set_choice(ADAPTER, items, selected);
    panel.set_enabled(&[ADAPTER], !adapters.is_empty());
    current_info.or(adapters.first())
}

fn populate_fullscreen_modes(panel: &mut GraphicsPanel, adapter: Option<&AdapterInfo>) {
    let mut current = panel.store.base(gs::FULLSCREEN_MODE);

    let mut items = vec!["Borderless Fullscreen".to_string()];
    let mut selected = 0;
    if panel.store.is_per_game() {
        let global = if current.is_empty() {
            "Borderless Fullscreen"
        } else {
            &current
        };
        items.insert(0, use_global_label(global));
        match panel.store.game(gs::FULLSCREEN_MODE) {
            Some(value) => {
                current = value;
                selected = 1;
            }
            None => current.clear(),
        }
    }

    for mode in adapter.into_iter().flat_map(|adapter| &adapter.fullscreen_modes) {
        items.push(mode.clone());
        if current == *mode {
            selected = items.len() - 1;
        }
    }

    panel.set_choice(FULLSCREEN_MODE, items, selected);
}

fn populate_upscale_multipliers(panel: &mut GraphicsPanel, adapter_max: u32) {
    let extended = panel.explicitly_checked(gs::EXTENDED_UPSCALING_MULTIPLIERS);
    let multipliers: Vec<u32> = gs::upscale_multipliers(adapter_max, extended).collect();
    let mut items: Vec<String> = multipliers
        .iter()
        .map(|multiplier| gs::upscale_multiplier_name(*multiplier))
        .collect();
    let mut values: Vec<Option<f32>> = multipliers
        .iter()
        .map(|multiplier| Some(*multiplier as f32))
        .collect();

    let global = panel.store.base(gs::UPSCALE_MULTIPLIER);
    let selected = if panel.store.is_per_game() {
        let global_name = values
            .iter()
            .position(|value| *value == Some(global))
            .map_or_else(|| format!("{global}x Native"), |i| items[i].clone());
        items.insert(0, use_global_label(&global_name));
        values.insert(0, None);
        panel
            .store
            .game(gs::UPSCALE_MULTIPLIER)
            .and_then(|value| values.iter().position(|v| *v == Some(value)))
            .unwrap_or(0)
    } else {
        values
            .iter()
            .position(|value| *value == Some(global))
            .unwrap_or(0)
    };

    panel.set_choice(UPSCALE_MULTIPLIER, items, selected);
    panel.upscale_values = values;
}
