use super::{stereo::STEREO_FLAGS, Tab};
use crate::panel::{
    binding::{Binding, ComboItem, FloatRange, IntWidget},
    Choice, Control, ControlId, ControlKind, Controls,
};
use gsconf_core::{gs, host::Environment, Key, Store, Value};

pub const RENDERER: ControlId = ControlId("Renderer");
pub const ADAPTER: ControlId = ControlId("Adapter");
pub const FULLSCREEN_MODE: ControlId = ControlId("FullscreenMode");
pub const UPSCALE_MULTIPLIER: ControlId = ControlId("upscale_multiplier");
pub const SW_TEXTURE_FILTERING: ControlId = ControlId("filter_sw");
pub const STEREOSCOPY_OPTIONS: ControlId = ControlId("stereoscopy_options");
pub const STEREO_UI_DEPTH_VALUE: ControlId = ControlId("StereoUiDepth_value");
pub const STEREO_UI_SECOND_LAYER_DEPTH_VALUE: ControlId =
    ControlId("StereoUiSecondLayerDepth_value");
pub const VIDEO_CAPTURE_OPTIONS: ControlId = ControlId("video_capture_options");
pub const AUDIO_CAPTURE_OPTIONS: ControlId = ControlId("audio_capture_options");

/// Bound controls are named after their key.
pub fn id<T: Value>(key: Key<T>) -> ControlId {
    ControlId(key.name)
}

static DEINTERLACING: &[&str] = &[
    "Automatic (Default)",
    "No-Deinterlacing",
    "Weave (Top Field First, Sawtooth)",
    "Weave (Bottom Field First, Sawtooth)",
    "Bob (Top Field First)",
    "Bob (Bottom Field First)",
    "Blend (Top Field First, Half FPS)",
    "Blend (Bottom Field First, Half FPS)",
    "Adaptive (Top Field First)",
    "Adaptive (Bottom Field First)",
];
static BILINEAR_PRESENT: &[&str] = &["None", "Bilinear (Sharp)", "Bilinear (Smooth)"];
static SCREENSHOT_SIZES: &[&str] = &[
    "Display Resolution",
    "Internal Resolution",
    "Internal Resolution (Aspect Uncorrected)",
];
static SCREENSHOT_FORMATS: &[&str] = &["PNG", "JPEG", "WebP"];
static TEXTURE_FILTERING: &[&str] = &[
    "Nearest",
    "Bilinear (Forced)",
    "Bilinear (PS2)",
    "Bilinear (Forced excluding sprite)",
];
static TRILINEAR_FILTERING: &[&str] = &[
    "Automatic (Default)",
    "Off (None)",
    "Trilinear (PS2)",
    "Trilinear (Forced)",
];
static DITHERING: &[&str] = &["Off", "Scaled", "Unscaled (Default)", "Force 32bit"];
static BLENDING_ACCURACY: &[&str] = &[
    "Minimum",
    "Basic (Recommended)",
    "Medium",
    "High",
    "Full (Slow)",
    "Maximum (Very Slow)",
];
static CPU_SPRITE_RENDER_SIZES: &[&str] = &[
    "0 (Disabled)",
    "1 (64 Max Width)",
    "2 (128 Max Width)",
    "3 (192 Max Width)",
    "4 (256 Max Width)",
    "5 (320 Max Width)",
    "6 (384 Max Width)",
    "7 (448 Max Width)",
    "8 (512 Max Width)",
    "9 (576 Max Width)",
    "10 (640 Max Width)",
];
static CPU_SPRITE_RENDER_LEVELS: &[&str] = &[
    "Sprites Only",
    "Sprites/Triangles",
    "Blended Sprites/Triangles",
];
static CPU_CLUT_RENDER: &[&str] = &["0 (Disabled)", "1 (Normal)", "2 (Aggressive)"];
static GPU_TARGET_CLUT: &[&str] = &[
    "Disabled (Default)",
    "Enabled (Exact Match)",
    "Enabled (Check Inside Target)",
];
static AUTO_FLUSH: &[&str] = &[
    "Disabled (Default)",
    "Enabled (Sprites Only)",
    "Enabled (All Primitives)",
];
static TEXTURE_INSIDE_RT: &[&str] = &["Disabled (Default)", "Inside Target", "Merge Targets"];
static LIMIT_24_BIT_DEPTH: &[&str] = &[
    "Disabled (Default)",
    "Prioritize Upper Bits",
    "Prioritize Lower Bits",
];
static HALF_PIXEL_OFFSET: &[&str] = &[
    "Off (Default)",
    "Normal (Vertex)",
    "Special (Texture)",
    "Special (Texture - Aggressive)",
    "Align to Native",
    "Align to Native - with Texture Offset",
];
static NATIVE_SCALING: &[&str] = &[
    "Off (Default)",
    "Normal",
    "Aggressive",
    "Normal (Maintain Upscale)",
    "Aggressive (Maintain Upscale)",
];
static ROUND_SPRITE: &[&str] = &["Off (Default)", "Half", "Full"];
static BILINEAR_UPSCALE: &[&str] = &["Off (Default)", "Force Bilinear", "Force Nearest"];
static TV_SHADERS: &[&str] = &[
    "None (Default)",
    "Scanline Filter",
    "Diagonal Filter",
    "Triangular Filter",
    "Wave Filter",
    "Lottes CRT",
    "4xRGSS",
    "NxAGSS",
];
static CAS_MODES: &[&str] = &[
    "None",
    "Sharpen Only (Internal Resolution)",
    "Sharpen and Resize (Display Resolution)",
];
static OSD_POSITIONS: &[&str] = &[
    "None",
    "Top Left",
    "Top Center",
    "Top Right",
    "Center Left",
    "Center",
    "Center Right",
    "Bottom Left",
    "Bottom Center",
    "Bottom Right",
];
static EXCLUSIVE_FULLSCREEN: &[&str] = &["Automatic (Default)", "Disallowed", "Allowed"];
static TEXTURE_BARRIERS: &[&str] = &["Automatic (Default)", "Force Disabled", "Force Enabled"];
static DUMP_COMPRESSION: &[&str] = &["Uncompressed", "LZMA (xz)", "Zstandard (zst)"];
static DOWNLOAD_MODES: &[&str] = &[
    "Accurate (Recommended)",
    "Disable Readbacks (Synchronize GS Thread)",
    "Unsynchronized (Non-Deterministic)",
    "Disabled (Ignore Transfers)",
];
static TEXTURE_PRELOADING: &[&str] = &["None", "Partial", "Full (Hash Cache)"];

struct Builder<'a> {
    controls: &'a mut Controls<Tab>,
    store: &'a Store,
    tab: Tab,
    section: &'static str,
    parent: Option<ControlId>,
}

impl Builder<'_> {
    fn tab(&mut self, tab: Tab, section: &'static str) {
        self.tab = tab;
        self.section = section;
    }

    fn section(&mut self, section: &'static str) {
        self.section = section;
    }

    fn push(&mut self, id: ControlId, label: &'static str, kind: ControlKind) {
        self.controls.insert(Control {
            id,
            tab: self.tab,
            section: self.section,
            label,
            parent: self.parent,
            kind,
            enabled: true,
            visible: true,
        });
    }

    fn bound(&mut self, id: ControlId, label: &'static str, binding: Binding) {
        let shown = binding.read(self.store);
        self.push(id, label, ControlKind::Bound { binding, shown });
    }

    fn bool(&mut self, key: Key<bool>, label: &'static str) {
        self.bound(id(key), label, Binding::Bool(key));
    }

    fn combo(&mut self, key: Key<i32>, label: &'static str, items: &'static [&'static str]) {
        self.combo_with_offset(key, label, items, 0);
    }

    fn combo_with_offset(
        &mut self,
        key: Key<i32>,
        label: &'static str,
        items: &'static [&'static str],
        offset: i32,
    ) {
        self.bound(
            id(key),
            label,
            Binding::Int {
                key,
                offset,
                widget: IntWidget::Combo(items),
            },
        );
    }

    fn spin(&mut self, key: Key<i32>, label: &'static str, min: i32, max: i32, suffix: &'static str) {
        self.bound(
            id(key),
            label,
            Binding::Int {
                key,
                offset: 0,
                widget: IntWidget::Spin { min, max, suffix },
            },
        );
    }

    fn slider(&mut self, key: Key<i32>, label: &'static str, min: i32, max: i32) {
        self.bound(
            id(key),
            label,
            Binding::Int {
                key,
                offset: 0,
                widget: IntWidget::Slider { min, max },
            },
        );
    }

    fn float(&mut self, key: Key<f32>, label: &'static str, range: FloatRange) {
        self.bound(id(key), label, Binding::Float { key, range });
    }

    fn enumeration(
        &mut self,
        key: Key<&'static str>,
        label: &'static str,
        names: &'static [&'static str],
        values: Option<&'static [&'static str]>,
    ) {
        self.bound(id(key), label, Binding::Enum { key, names, values });
    }

    fn text(&mut self, key: Key<&'static str>, label: &'static str) {
        self.bound(id(key), label, Binding::Text { key, items: None });
    }

    fn text_combo(&mut self, key: Key<&'static str>, label: &'static str, items: Vec<ComboItem>) {
        self.bound(
            id(key),
            label,
            Binding::Text {
                key,
                items: Some(items),
            },
        );
    }

    fn choice(&mut self, id: ControlId, label: &'static str) {
        self.push(id, label, ControlKind::Choice(Choice::default()));
    }

    fn group(&mut self, id: ControlId, label: &'static str, f: impl FnOnce(&mut Self)) {
        self.push(id, label, ControlKind::Group);
        let prev_parent = self.parent.replace(id);
        f(self);
        self.parent = prev_parent;
    }
}

fn float_range(min: f32, max: f32, step: f32, suffix: &'static str) -> FloatRange {
    FloatRange {
        min,
        max,
        step,
        suffix,
    }
}

pub(super) fn register(controls: &mut Controls<Tab>, store: &Store, env: &Environment) {
    let mut b = Builder {
        controls,
        store,
        tab: Tab::Header,
        section: "",
        parent: None,
    };

    b.choice(RENDERER, "Renderer");
    b.choice(ADAPTER, "Adapter");

    b.tab(Tab::Display, "Display");
    b.enumeration(gs::ASPECT_RATIO, "Aspect Ratio", gs::ASPECT_RATIO_NAMES, None);
    b.enumeration(
        gs::FMV_ASPECT_RATIO_SWITCH,
        "FMV Aspect Ratio Override",
        gs::FMV_ASPECT_RATIO_SWITCH_NAMES,
        None,
    );
    b.combo(gs::DEINTERLACE_MODE, "Deinterlacing", DEINTERLACING);
    b.choice(FULLSCREEN_MODE, "Fullscreen Mode");
    b.combo(gs::LINEAR_PRESENT_MODE, "Bilinear Filtering", BILINEAR_PRESENT);
    b.float(gs::STRETCH_Y, "Vertical Stretch", float_range(10.0, 300.0, 1.0, "%"));
    b.section("Crop");
    b.spin(gs::CROP_LEFT, "Left", 0, 720, "px");
    b.spin(gs::CROP_TOP, "Top", 0, 720, "px");
    b.spin(gs::CROP_RIGHT, "Right", 0, 720, "px");
    b.spin(gs::CROP_BOTTOM, "Bottom", 0, 720, "px");
    b.section("Options");
    b.bool(gs::WIDESCREEN_PATCHES, "Apply Widescreen Patches");
    b.bool(gs::NO_INTERLACING_PATCHES, "Apply No-Interlacing Patches");
    b.bool(gs::INTEGER_SCALING, "Integer Scaling");
    b.bool(gs::PCRTC_OFFSETS, "Screen Offsets");
    b.bool(gs::PCRTC_OVERSCAN, "Show Overscan");
    b.bool(gs::PCRTC_ANTIBLUR, "Anti-Blur");
    b.bool(gs::DISABLE_INTERLACE_OFFSET, "Disable Interlace Offset");

    b.tab(Tab::HardwareRendering, "Rendering");
    b.choice(UPSCALE_MULTIPLIER, "Internal Resolution");
    b.combo(gs::TEXTURE_FILTERING, "Texture Filtering", TEXTURE_FILTERING);
    b.combo_with_offset(
        gs::TRILINEAR_FILTERING,
        "Trilinear Filtering",
        TRILINEAR_FILTERING,
        gs::TRILINEAR_AUTOMATIC,
    );
    b.enumeration(
        gs::ANISOTROPIC_FILTERING,
        "Anisotropic Filtering",
        gs::ANISOTROPIC_FILTERING_NAMES,
        Some(gs::ANISOTROPIC_FILTERING_VALUES),
    );
    b.combo(gs::DITHERING, "Dithering", DITHERING);
    b.combo(gs::BLENDING_ACCURACY, "Blending Accuracy", BLENDING_ACCURACY);
    b.bool(gs::MIPMAPPING, "Mipmapping");
    b.bool(gs::MANUAL_HW_FIXES, "Manual Hardware Renderer Fixes");

    b.section("Stereoscopy");
    b.enumeration(gs::STEREO_MODE, "Stereoscopic Mode", gs::STEREO_MODE_NAMES, None);
    b.group(STEREOSCOPY_OPTIONS, "Stereoscopy Options", |b| {
        b.enumeration(
            gs::STEREO_DOMINANT_EYE,
            "Dominant Eye",
            gs::STEREO_DOMINANT_EYE_NAMES,
            None,
        );
        b.float(gs::STEREO_SEPARATION, "Separation", float_range(0.0, 100.0, 0.1, ""));
        b.float(gs::STEREO_CONVERGENCE, "Convergence", float_range(0.0, 100.0, 0.1, ""));
        b.float(gs::STEREO_DEPTH_FACTOR, "Depth Factor", float_range(0.0, 10.0, 0.01, ""));
        for (key, label, value_id) in [
            (gs::STEREO_UI_DEPTH, "UI Depth", STEREO_UI_DEPTH_VALUE),
            (
                gs::STEREO_UI_SECOND_LAYER_DEPTH,
                "UI Second Layer Depth Offset",
                STEREO_UI_SECOND_LAYER_DEPTH_VALUE,
            ),
        ] {
            b.bound(
                id(key),
                label,
                Binding::Normalized {
                    key,
                    range: 1.0,
                    min: -100,
                    max: 100,
                },
            );
            b.push(value_id, "", ControlKind::Label(String::new()));
        }
        for flag in STEREO_FLAGS {
            b.section(flag.group());
            b.bool(flag.key, flag.title);
        }
    });

    b.tab(Tab::SoftwareRendering, "Rendering");
    b.bound(
        SW_TEXTURE_FILTERING,
        "Texture Filtering",
        Binding::Int {
            key: gs::TEXTURE_FILTERING,
            offset: 0,
            widget: IntWidget::Combo(TEXTURE_FILTERING),
        },
    );
    b.spin(gs::SW_EXTRA_THREADS, "Extra Rendering Threads", 0, 32, "");
    b.bool(gs::SW_AUTO_FLUSH, "Auto Flush");
    b.bool(gs::SW_MIPMAP, "Mipmapping");

    b.tab(Tab::HardwareFixes, "Fixes");
    b.combo(gs::CPU_SPRITE_RENDER_BW, "CPU Sprite Render Size", CPU_SPRITE_RENDER_SIZES);
    b.combo(gs::CPU_SPRITE_RENDER_LEVEL, "CPU Sprite Render Level", CPU_SPRITE_RENDER_LEVELS);
    b.combo(gs::CPU_CLUT_RENDER, "Software CLUT Render", CPU_CLUT_RENDER);
    b.combo(gs::GPU_TARGET_CLUT_MODE, "GPU Target CLUT", GPU_TARGET_CLUT);
    b.spin(gs::SKIP_DRAW_START, "Skip Draw Range Start", 0, 10000, "");
    b.spin(gs::SKIP_DRAW_END, "Skip Draw Range End", 0, 10000, "");
    b.combo(gs::HW_AUTO_FLUSH, "Auto Flush", AUTO_FLUSH);
    b.combo(gs::TEXTURE_INSIDE_RT, "Texture Inside RT", TEXTURE_INSIDE_RT);
    b.combo(gs::LIMIT_24_BIT_DEPTH, "Limit Depth to 24 Bits", LIMIT_24_BIT_DEPTH);
    b.section("Options");
    b.bool(gs::CPU_FB_CONVERSION, "Framebuffer Conversion");
    b.bool(gs::DISABLE_DEPTH_CONVERSION, "Disable Depth Conversion");
    b.bool(gs::DISABLE_SAFE_FEATURES, "Disable Safe Features");
    b.bool(gs::DISABLE_RENDER_FIXES, "Disable Render Fixes");
    b.bool(gs::PRELOAD_FRAME_DATA, "Preload Frame Data");
    b.bool(gs::DISABLE_PARTIAL_INVALIDATION, "Disable Partial Source Invalidation");
    b.bool(gs::READ_TC_ON_CLOSE, "Read Targets When Closing");
    b.bool(gs::ESTIMATE_TEXTURE_REGION, "Estimate Texture Region");
    b.bool(gs::GPU_PALETTE_CONVERSION, "GPU Palette Conversion");

    b.tab(Tab::UpscalingFixes, "Fixes");
    b.combo(gs::HALF_PIXEL_OFFSET, "Half Pixel Offset", HALF_PIXEL_OFFSET);
    b.combo(gs::NATIVE_SCALING, "Native Scaling", NATIVE_SCALING);
    b.combo(gs::ROUND_SPRITE, "Round Sprite", ROUND_SPRITE);
    b.combo(gs::BILINEAR_UPSCALE, "Bilinear Dirty Upscale", BILINEAR_UPSCALE);
    b.spin(gs::TEXTURE_OFFSET_X, "Texture Offsets X", 0, 10000, "");
    b.spin(gs::TEXTURE_OFFSET_Y, "Texture Offsets Y", 0, 10000, "");
    b.section("Options");
    b.bool(gs::ALIGN_SPRITE, "Align Sprite");
    b.bool(gs::MERGE_SPRITE, "Merge Sprite");
    b.bool(gs::FORCE_EVEN_SPRITE_POSITION, "Force Even Sprite Position");
    b.bool(gs::NATIVE_PALETTE_DRAW, "Unscaled Palette Texture Draws");

    b.tab(Tab::TextureReplacement, "Folder");
    b.bound(
        id(gs::TEXTURES_DIRECTORY),
        "Texture Folder",
        Binding::Folder {
            key: gs::TEXTURES_DIRECTORY,
            default: env.data_root.join(gs::TEXTURES_DIRECTORY.default),
        },
    );
    b.section("Dumping");
    b.bool(gs::DUMP_REPLACEABLE_TEXTURES, "Dump Textures");
    b.bool(gs::DUMP_REPLACEABLE_MIPMAPS, "Dump Mipmaps");
    b.bool(gs::DUMP_TEXTURES_WITH_FMV_ACTIVE, "Dump FMV Textures");
    b.section("Loading");
    b.bool(gs::LOAD_TEXTURE_REPLACEMENTS, "Load Textures");
    b.bool(gs::LOAD_TEXTURE_REPLACEMENTS_ASYNC, "Asynchronous Texture Loading");
    b.bool(gs::PRECACHE_TEXTURE_REPLACEMENTS, "Precache Textures");

    b.tab(Tab::PostProcessing, "Sharpening/Anti-Aliasing");
    b.combo(gs::CAS_MODE, "Contrast Adaptive Sharpening", CAS_MODES);
    b.spin(gs::CAS_SHARPNESS, "Sharpness", 0, 100, "%");
    b.bool(gs::FXAA, "FXAA");
    b.section("Filters");
    b.combo(gs::TV_SHADER, "TV Shader", TV_SHADERS);
    b.bool(gs::SHADE_BOOST, "Shade Boost");
    b.slider(gs::SHADE_BOOST_BRIGHTNESS, "Brightness", 1, 100);
    b.slider(gs::SHADE_BOOST_CONTRAST, "Contrast", 1, 100);
    b.slider(gs::SHADE_BOOST_GAMMA, "Gamma", 1, 100);
    b.slider(gs::SHADE_BOOST_SATURATION, "Saturation", 1, 100);

    b.tab(Tab::Osd, "On-Screen Display");
    b.float(gs::OSD_SCALE, "OSD Scale", float_range(50.0, 500.0, 1.0, "%"));
    b.combo(gs::OSD_MESSAGES_POS, "OSD Messages Position", OSD_POSITIONS);
    b.combo(gs::OSD_PERFORMANCE_POS, "OSD Performance Position", OSD_POSITIONS);
    b.section("Performance");
    b.bool(gs::OSD_SHOW_SPEED, "Show Speed Percentages");
    b.bool(gs::OSD_SHOW_FPS, "Show FPS");
    b.bool(gs::OSD_SHOW_VPS, "Show VPS");
    b.bool(gs::OSD_SHOW_RESOLUTION, "Show Resolution");
    b.bool(gs::OSD_SHOW_GS_STATS, "Show GS Statistics");
    b.bool(gs::OSD_SHOW_CPU, "Show CPU Usage");
    b.bool(gs::OSD_SHOW_GPU, "Show GPU Usage");
    b.bool(gs::OSD_SHOW_INDICATORS, "Show Status Indicators");
    b.bool(gs::OSD_SHOW_FRAME_TIMES, "Show Frame Times");
    b.bool(gs::OSD_SHOW_HARDWARE_INFO, "Show Hardware Info");
    b.bool(gs::OSD_SHOW_VERSION, "Show Version");
    b.section("Status");
    b.bool(gs::OSD_SHOW_SETTINGS, "Show Settings");
    b.bool(gs::OSD_SHOW_PATCHES, "Show Patches");
    b.bool(gs::OSD_SHOW_INPUTS, "Show Inputs");
    b.bool(gs::OSD_SHOW_VIDEO_CAPTURE, "Show Video Capture Status");
    b.bool(gs::OSD_SHOW_INPUT_REC, "Show Input Recording Status");
    b.bool(gs::OSD_SHOW_TEXTURE_REPLACEMENTS, "Show Texture Replacement Status");
    b.bool(gs::WARN_ABOUT_UNSAFE_SETTINGS, "Warn About Unsafe Settings");

    b.tab(Tab::MediaCapture, "Screenshots");
    b.combo(gs::SCREENSHOT_SIZE, "Screenshot Resolution", SCREENSHOT_SIZES);
    b.combo(gs::SCREENSHOT_FORMAT, "Screenshot Format", SCREENSHOT_FORMATS);
    b.spin(gs::SCREENSHOT_QUALITY, "Screenshot Quality", 1, 100, "%");
    b.section("Capture");
    b.text_combo(
        gs::CAPTURE_CONTAINER,
        "Container",
        gs::CAPTURE_CONTAINERS
            .iter()
            .map(|container| ComboItem::new(container.to_uppercase(), *container))
            .collect(),
    );
    b.section("Video");
    b.bool(gs::ENABLE_VIDEO_CAPTURE, "Capture Video");
    b.group(VIDEO_CAPTURE_OPTIONS, "Video Options", |b| {
        b.text_combo(gs::VIDEO_CAPTURE_CODEC, "Video Codec", Vec::new());
        b.text_combo(gs::VIDEO_CAPTURE_FORMAT, "Video Format", Vec::new());
        b.spin(gs::VIDEO_CAPTURE_BITRATE, "Video Bitrate", 100, 200_000, "kbps");
        b.bool(gs::VIDEO_CAPTURE_AUTO_RESOLUTION, "Automatic Resolution");
        b.spin(gs::VIDEO_CAPTURE_WIDTH, "Resolution Width", 1, 8192, "px");
        b.spin(gs::VIDEO_CAPTURE_HEIGHT, "Resolution Height", 1, 8192, "px");
        b.bool(gs::ENABLE_VIDEO_CAPTURE_PARAMETERS, "Extra Video Arguments");
        b.text(gs::VIDEO_CAPTURE_PARAMETERS, "Video Arguments");
    });
    b.section("Audio");
    b.bool(gs::ENABLE_AUDIO_CAPTURE, "Capture Audio");
    b.group(AUDIO_CAPTURE_OPTIONS, "Audio Options", |b| {
        b.text_combo(gs::AUDIO_CAPTURE_CODEC, "Audio Codec", Vec::new());
        b.spin(gs::AUDIO_CAPTURE_BITRATE, "Audio Bitrate", 32, 512, "kbps");
        b.bool(gs::ENABLE_AUDIO_CAPTURE_PARAMETERS, "Extra Audio Arguments");
        b.text(gs::AUDIO_CAPTURE_PARAMETERS, "Audio Arguments");
    });

    b.tab(Tab::Advanced, "Advanced");
    b.combo(gs::HW_DOWNLOAD_MODE, "GS Download Mode", DOWNLOAD_MODES);
    b.combo(gs::GS_DUMP_COMPRESSION, "GS Dump Compression", DUMP_COMPRESSION);
    b.combo_with_offset(
        gs::EXCLUSIVE_FULLSCREEN_CONTROL,
        "Allow Exclusive Fullscreen",
        EXCLUSIVE_FULLSCREEN,
        -1,
    );
    b.combo_with_offset(
        gs::OVERRIDE_TEXTURE_BARRIERS,
        "Override Texture Barriers",
        TEXTURE_BARRIERS,
        -1,
    );
    b.combo(gs::TEXTURE_PRELOADING, "Texture Preloading", TEXTURE_PRELOADING);
    b.float(gs::FRAME_RATE_NTSC, "NTSC Frame Rate", float_range(10.0, 300.0, 0.01, "Hz"));
    b.float(gs::FRAME_RATE_PAL, "PAL Frame Rate", float_range(10.0, 300.0, 0.01, "Hz"));
    b.section("Options");
    b.bool(gs::USE_BLIT_SWAP_CHAIN, "Use Blit Swap Chain");
    b.bool(gs::USE_DEBUG_DEVICE, "Enable Debug Device");
    b.bool(gs::DISABLE_MAILBOX_PRESENTATION, "Disable Mailbox Presentation");
    b.bool(gs::EXTENDED_UPSCALING_MULTIPLIERS, "Extended Upscaling Multipliers");
    b.bool(gs::DISABLE_FRAMEBUFFER_FETCH, "Disable Framebuffer Fetch");
    b.bool(gs::DISABLE_SHADER_CACHE, "Disable Shader Cache");
    b.bool(gs::DISABLE_VERTEX_SHADER_EXPAND, "Disable Vertex Shader Expand");
    b.bool(gs::SPIN_CPU_DURING_READBACKS, "Spin CPU During Readbacks");
    b.bool(gs::SPIN_GPU_DURING_READBACKS, "Spin GPU During Readbacks");
}
