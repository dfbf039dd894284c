//! GS option keys, defaults and the name tables of string-stored options.

use crate::setting::Key;

pub const SECTION: &str = "EmuCore/GS";
pub const EMUCORE_SECTION: &str = "EmuCore";
pub const FOLDERS_SECTION: &str = "Folders";
pub const PATCHES_SECTION: &str = "Patches";

pub const PATCHES_ENABLE: &str = "Enable";
pub const PATCHES_DISABLE: &str = "Disable";
pub const WIDESCREEN_PATCH_NAME: &str = "Widescreen 16:9";
pub const NO_INTERLACING_PATCH_NAME: &str = "No-Interlacing";

const fn gs<T: crate::setting::Value>(name: &'static str, default: T) -> Key<T> {
    Key::new(SECTION, name, default)
}

const fn emucore<T: crate::setting::Value>(name: &'static str, default: T) -> Key<T> {
    Key::new(EMUCORE_SECTION, name, default)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RendererType {
    Auto,
    Dx11,
    Dx12,
    OpenGl,
    Vulkan,
    Metal,
    Software,
    Null,
}

impl RendererType {
    pub const ALL: [RendererType; 8] = [
        RendererType::Auto,
        RendererType::Dx11,
        RendererType::Dx12,
        RendererType::OpenGl,
        RendererType::Vulkan,
        RendererType::Metal,
        RendererType::Software,
        RendererType::Null,
    ];

    /// The integer stored under `Renderer`.
    pub const fn id(self) -> i32 {
        match self {
            RendererType::Auto => -1,
            RendererType::Dx11 => 3,
            RendererType::Null => 11,
            RendererType::OpenGl => 12,
            RendererType::Software => 13,
            RendererType::Vulkan => 14,
            RendererType::Dx12 => 15,
            RendererType::Metal => 17,
        }
    }

    pub fn from_id(id: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.id() == id)
    }

    pub const fn name(self) -> &'static str {
        match self {
            RendererType::Auto => "Automatic (Default)",
            RendererType::Dx11 => "Direct3D 11 (Legacy)",
            RendererType::Dx12 => "Direct3D 12",
            RendererType::OpenGl => "OpenGL",
            RendererType::Vulkan => "Vulkan",
            RendererType::Metal => "Metal",
            RendererType::Software => "Software Renderer",
            RendererType::Null => "Null",
        }
    }

    pub const fn is_hardware(self) -> bool {
        matches!(
            self,
            RendererType::Dx11
                | RendererType::Dx12
                | RendererType::OpenGl
                | RendererType::Vulkan
                | RendererType::Metal
        )
    }
}

pub const RENDERER: Key<i32> = gs("Renderer", RendererType::Auto.id());
pub const ADAPTER: Key<&str> = gs("Adapter", "");
pub const FULLSCREEN_MODE: Key<&str> = gs("FullscreenMode", "");
pub const UPSCALE_MULTIPLIER: Key<f32> = gs("upscale_multiplier", 1.0);

// Display
pub const ASPECT_RATIO_NAMES: &[&str] = &["Stretch", "Auto 4:3/3:2", "4:3", "16:9", "10:7"];
pub const FMV_ASPECT_RATIO_SWITCH_NAMES: &[&str] =
    &["Off", "Auto 4:3/3:2", "4:3", "16:9", "10:7"];

pub const ASPECT_RATIO: Key<&str> = gs("AspectRatio", "Auto 4:3/3:2");
pub const FMV_ASPECT_RATIO_SWITCH: Key<&str> = gs("FMVAspectRatioSwitch", "Off");
pub const DEINTERLACE_MODE: Key<i32> = gs("deinterlace_mode", 0);
pub const LINEAR_PRESENT_MODE: Key<i32> = gs("linear_present_mode", 2);
pub const WIDESCREEN_PATCHES: Key<bool> = emucore("EnableWideScreenPatches", false);
pub const NO_INTERLACING_PATCHES: Key<bool> = emucore("EnableNoInterlacingPatches", false);
pub const INTEGER_SCALING: Key<bool> = gs("IntegerScaling", false);
pub const PCRTC_OFFSETS: Key<bool> = gs("pcrtc_offsets", false);
pub const PCRTC_OVERSCAN: Key<bool> = gs("pcrtc_overscan", false);
pub const PCRTC_ANTIBLUR: Key<bool> = gs("pcrtc_antiblur", true);
pub const DISABLE_INTERLACE_OFFSET: Key<bool> = gs("disable_interlace_offset", false);
pub const SCREENSHOT_SIZE: Key<i32> = gs("ScreenshotSize", 0);
pub const SCREENSHOT_FORMAT: Key<i32> = gs("ScreenshotFormat", 0);
pub const SCREENSHOT_QUALITY: Key<i32> = gs("ScreenshotQuality", 90);
pub const STRETCH_Y: Key<f32> = gs("StretchY", 100.0);
pub const CROP_LEFT: Key<i32> = gs("CropLeft", 0);
pub const CROP_TOP: Key<i32> = gs("CropTop", 0);
pub const CROP_RIGHT: Key<i32> = gs("CropRight", 0);
pub const CROP_BOTTOM: Key<i32> = gs("CropBottom", 0);

// Hardware rendering
pub const TRILINEAR_AUTOMATIC: i32 = -1;
pub const TRILINEAR_FORCED: i32 = 2;
pub const BILINEAR_PS2: i32 = 2;

pub const TEXTURE_FILTERING: Key<i32> = gs("filter", BILINEAR_PS2);
pub const TRILINEAR_FILTERING: Key<i32> = gs("TriFilter", TRILINEAR_AUTOMATIC);
pub const ANISOTROPIC_FILTERING: Key<&str> = gs("MaxAnisotropy", "0");
pub const ANISOTROPIC_FILTERING_NAMES: &[&str] = &["Off (Default)", "2x", "4x", "8x", "16x"];
pub const ANISOTROPIC_FILTERING_VALUES: &[&str] = &["0", "2", "4", "8", "16"];
pub const DITHERING: Key<i32> = gs("dithering_ps2", 2);
pub const MIPMAPPING: Key<bool> = gs("hw_mipmap", true);
pub const BLENDING_ACCURACY: Key<i32> = gs("accurate_blending_unit", 1);
pub const MANUAL_HW_FIXES: Key<bool> = gs("UserHacks", false);
pub const GPU_PALETTE_CONVERSION: Key<bool> = gs("paltex", false);

// Stereoscopy
pub const STEREO_MODE_NAMES: &[&str] = &["Off", "SideBySide", "TopAndBottom", "Anaglyph"];
pub const STEREO_MODE_OFF: &str = "Off";
pub const STEREO_DOMINANT_EYE_NAMES: &[&str] = &["None", "Left", "Right"];

pub const STEREO_MODE: Key<&str> = gs("StereoMode", STEREO_MODE_OFF);
pub const STEREO_DOMINANT_EYE: Key<&str> = gs("StereoDominantEye", "None");
pub const STEREO_SEPARATION: Key<f32> = gs("StereoSeparation", 0.0);
pub const STEREO_CONVERGENCE: Key<f32> = gs("StereoConvergence", 0.0);
pub const STEREO_DEPTH_FACTOR: Key<f32> = gs("StereoDepthFactor", 0.0);
pub const STEREO_UI_DEPTH: Key<f32> = gs("StereoUiDepth", 0.0);
pub const STEREO_UI_SECOND_LAYER_DEPTH: Key<f32> = gs("StereoUiSecondLayerDepth", 0.0);

/// Creates one of the boolean stereoscopy heuristics keys.
pub const fn stereo_flag(name: &'static str, default: bool) -> Key<bool> {
    gs(name, default)
}

// Software rendering
pub const SW_EXTRA_THREADS: Key<i32> = gs("extrathreads", 2);
pub const SW_AUTO_FLUSH: Key<bool> = gs("autoflush_sw", true);
pub const SW_MIPMAP: Key<bool> = gs("mipmap", true);

// Hardware fixes
pub const CPU_SPRITE_RENDER_BW: Key<i32> = gs("UserHacks_CPUSpriteRenderBW", 0);
pub const CPU_SPRITE_RENDER_LEVEL: Key<i32> = gs("UserHacks_CPUSpriteRenderLevel", 0);
pub const CPU_CLUT_RENDER: Key<i32> = gs("UserHacks_CPUCLUTRender", 0);
pub const GPU_TARGET_CLUT_MODE: Key<i32> = gs("UserHacks_GPUTargetCLUTMode", 0);
pub const SKIP_DRAW_START: Key<i32> = gs("UserHacks_SkipDraw_Start", 0);
pub const SKIP_DRAW_END: Key<i32> = gs("UserHacks_SkipDraw_End", 0);
pub const HW_AUTO_FLUSH: Key<i32> = gs("UserHacks_AutoFlushLevel", 0);
pub const CPU_FB_CONVERSION: Key<bool> = gs("UserHacks_CPU_FB_Conversion", false);
pub const DISABLE_DEPTH_CONVERSION: Key<bool> = gs("UserHacks_DisableDepthSupport", false);
pub const DISABLE_SAFE_FEATURES: Key<bool> = gs("UserHacks_Disable_Safe_Features", false);
pub const DISABLE_RENDER_FIXES: Key<bool> = gs("UserHacks_DisableRenderFixes", false);
pub const PRELOAD_FRAME_DATA: Key<bool> = gs("preload_frame_with_gs_data", false);
pub const DISABLE_PARTIAL_INVALIDATION: Key<bool> =
    gs("UserHacks_DisablePartialInvalidation", false);
pub const TEXTURE_INSIDE_RT: Key<i32> = gs("UserHacks_TextureInsideRt", 0);
pub const LIMIT_24_BIT_DEPTH: Key<i32> = gs("UserHacks_Limit24BitDepth", 0);
pub const READ_TC_ON_CLOSE: Key<bool> = gs("UserHacks_ReadTCOnClose", false);
pub const ESTIMATE_TEXTURE_REGION: Key<bool> = gs("UserHacks_EstimateTextureRegion", false);

// Upscaling fixes
pub const HALF_PIXEL_OFFSET: Key<i32> = gs("UserHacks_HalfPixelOffset", 0);
pub const NATIVE_SCALING: Key<i32> = gs("UserHacks_native_scaling", 0);
pub const ROUND_SPRITE: Key<i32> = gs("UserHacks_round_sprite_offset", 0);
pub const BILINEAR_UPSCALE: Key<i32> = gs("UserHacks_BilinearHack", 0);
pub const TEXTURE_OFFSET_X: Key<i32> = gs("UserHacks_TCOffsetX", 0);
pub const TEXTURE_OFFSET_Y: Key<i32> = gs("UserHacks_TCOffsetY", 0);
pub const ALIGN_SPRITE: Key<bool> = gs("UserHacks_align_sprite_X", false);
pub const MERGE_SPRITE: Key<bool> = gs("UserHacks_merge_pp_sprite", false);
pub const FORCE_EVEN_SPRITE_POSITION: Key<bool> = gs("UserHacks_forceEvenSpritePosition", false);
pub const NATIVE_PALETTE_DRAW: Key<bool> = gs("UserHacks_NativePaletteDraw", false);

// Texture replacement
pub const DUMP_REPLACEABLE_TEXTURES: Key<bool> = gs("DumpReplaceableTextures", false);
pub const DUMP_REPLACEABLE_MIPMAPS: Key<bool> = gs("DumpReplaceableMipmaps", false);
pub const DUMP_TEXTURES_WITH_FMV_ACTIVE: Key<bool> = gs("DumpTexturesWithFMVActive", false);
pub const LOAD_TEXTURE_REPLACEMENTS: Key<bool> = gs("LoadTextureReplacements", false);
pub const LOAD_TEXTURE_REPLACEMENTS_ASYNC: Key<bool> = gs("LoadTextureReplacementsAsync", true);
pub const PRECACHE_TEXTURE_REPLACEMENTS: Key<bool> = gs("PrecacheTextureReplacements", false);
pub const TEXTURES_DIRECTORY: Key<&str> = Key::new(FOLDERS_SECTION, "Textures", "textures");

// Post-processing
pub const DEFAULT_TV_SHADER_MODE: i32 = 0;
pub const DEFAULT_CAS_SHARPNESS: i32 = 50;
pub const DEFAULT_SHADEBOOST: i32 = 50;

pub const FXAA: Key<bool> = gs("fxaa", false);
pub const SHADE_BOOST: Key<bool> = gs("ShadeBoost", false);
pub const SHADE_BOOST_BRIGHTNESS: Key<i32> = gs("ShadeBoost_Brightness", DEFAULT_SHADEBOOST);
pub const SHADE_BOOST_CONTRAST: Key<i32> = gs("ShadeBoost_Contrast", DEFAULT_SHADEBOOST);
pub const SHADE_BOOST_GAMMA: Key<i32> = gs("ShadeBoost_Gamma", DEFAULT_SHADEBOOST);
pub const SHADE_BOOST_SATURATION: Key<i32> = gs("ShadeBoost_Saturation", DEFAULT_SHADEBOOST);
pub const TV_SHADER: Key<i32> = gs("TVShader", DEFAULT_TV_SHADER_MODE);
pub const CAS_MODE: Key<i32> = gs("CASMode", 0);
pub const CAS_SHARPNESS: Key<i32> = gs("CASSharpness", DEFAULT_CAS_SHARPNESS);

// OSD
pub const OSD_POSITION_NONE: i32 = 0;
pub const OSD_POSITION_TOP_LEFT: i32 = 1;
pub const OSD_POSITION_TOP_RIGHT: i32 = 3;

pub const OSD_SCALE: Key<f32> = gs("OsdScale", 100.0);
pub const OSD_MESSAGES_POS: Key<i32> = gs("OsdMessagesPos", OSD_POSITION_TOP_LEFT);
pub const OSD_PERFORMANCE_POS: Key<i32> = gs("OsdPerformancePos", OSD_POSITION_TOP_RIGHT);
pub const OSD_SHOW_SPEED: Key<bool> = gs("OsdShowSpeed", false);
pub const OSD_SHOW_FPS: Key<bool> = gs("OsdShowFPS", false);
pub const OSD_SHOW_VPS: Key<bool> = gs("OsdShowVPS", false);
pub const OSD_SHOW_RESOLUTION: Key<bool> = gs("OsdShowResolution", false);
pub const OSD_SHOW_GS_STATS: Key<bool> = gs("OsdShowGSStats", false);
pub const OSD_SHOW_CPU: Key<bool> = gs("OsdShowCPU", false);
pub const OSD_SHOW_GPU: Key<bool> = gs("OsdShowGPU", false);
pub const OSD_SHOW_FRAME_TIMES: Key<bool> = gs("OsdShowFrameTimes", false);
pub const OSD_SHOW_HARDWARE_INFO: Key<bool> = gs("OsdShowHardwareInfo", false);
pub const OSD_SHOW_VERSION: Key<bool> = gs("OsdShowVersion", false);
pub const OSD_SHOW_SETTINGS: Key<bool> = gs("OsdShowSettings", false);
pub const OSD_SHOW_PATCHES: Key<bool> = gs("OsdshowPatches", false);
pub const OSD_SHOW_INPUTS: Key<bool> = gs("OsdShowInputs", false);
pub const OSD_SHOW_TEXTURE_REPLACEMENTS: Key<bool> = gs("OsdShowTextureReplacements", false);
pub const OSD_SHOW_INDICATORS: Key<bool> = gs("OsdShowIndicators", true);
pub const OSD_SHOW_VIDEO_CAPTURE: Key<bool> = gs("OsdShowVideoCapture", true);
pub const OSD_SHOW_INPUT_REC: Key<bool> = gs("OsdShowInputRec", true);
pub const WARN_ABOUT_UNSAFE_SETTINGS: Key<bool> = emucore("OsdWarnAboutUnsafeSettings", true);

// Advanced
pub const USE_BLIT_SWAP_CHAIN: Key<bool> = gs("UseBlitSwapChain", false);
pub const USE_DEBUG_DEVICE: Key<bool> = gs("UseDebugDevice", false);
pub const DISABLE_MAILBOX_PRESENTATION: Key<bool> = gs("DisableMailboxPresentation", false);
pub const EXTENDED_UPSCALING_MULTIPLIERS: Key<bool> = gs("ExtendedUpscalingMultipliers", false);
pub const EXCLUSIVE_FULLSCREEN_CONTROL: Key<i32> = gs("ExclusiveFullscreenControl", -1);
pub const OVERRIDE_TEXTURE_BARRIERS: Key<i32> = gs("OverrideTextureBarriers", -1);
pub const GS_DUMP_COMPRESSION: Key<i32> = gs("GSDumpCompression", 2);
pub const DISABLE_FRAMEBUFFER_FETCH: Key<bool> = gs("DisableFramebufferFetch", false);
pub const DISABLE_SHADER_CACHE: Key<bool> = gs("DisableShaderCache", false);
pub const DISABLE_VERTEX_SHADER_EXPAND: Key<bool> = gs("DisableVertexShaderExpand", false);
pub const HW_DOWNLOAD_MODE: Key<i32> = gs("HWDownloadMode", 0);
pub const FRAME_RATE_NTSC: Key<f32> = gs("FrameRateNTSC", 59.94);
pub const FRAME_RATE_PAL: Key<f32> = gs("FrameRatePAL", 50.0);
pub const SPIN_CPU_DURING_READBACKS: Key<bool> = gs("HWSpinCPUForReadbacks", false);
pub const SPIN_GPU_DURING_READBACKS: Key<bool> = gs("HWSpinGPUForReadbacks", false);
pub const TEXTURE_PRELOADING: Key<i32> = gs("texture_preloading", 0);

// Media capture
pub const CAPTURE_CONTAINERS: &[&str] = &["mp4", "mkv", "mov", "avi", "mp3", "wav"];
pub const DEFAULT_CAPTURE_CONTAINER: &str = "mp4";
pub const DEFAULT_VIDEO_CAPTURE_BITRATE: i32 = 6000;
pub const DEFAULT_VIDEO_CAPTURE_WIDTH: i32 = 640;
pub const DEFAULT_VIDEO_CAPTURE_HEIGHT: i32 = 480;
pub const DEFAULT_AUDIO_CAPTURE_BITRATE: i32 = 192;

pub const CAPTURE_CONTAINER: Key<&str> = gs("CaptureContainer", DEFAULT_CAPTURE_CONTAINER);
pub const ENABLE_VIDEO_CAPTURE: Key<bool> = gs("EnableVideoCapture", true);
pub const VIDEO_CAPTURE_CODEC: Key<&str> = gs("VideoCaptureCodec", "");
pub const VIDEO_CAPTURE_FORMAT: Key<&str> = gs("VideoCaptureFormat", "");
pub const VIDEO_CAPTURE_BITRATE: Key<i32> = gs("VideoCaptureBitrate", DEFAULT_VIDEO_CAPTURE_BITRATE);
pub const VIDEO_CAPTURE_WIDTH: Key<i32> = gs("VideoCaptureWidth", DEFAULT_VIDEO_CAPTURE_WIDTH);
pub const VIDEO_CAPTURE_HEIGHT: Key<i32> = gs("VideoCaptureHeight", DEFAULT_VIDEO_CAPTURE_HEIGHT);
pub const VIDEO_CAPTURE_AUTO_RESOLUTION: Key<bool> = gs("VideoCaptureAutoResolution", true);
pub const ENABLE_VIDEO_CAPTURE_PARAMETERS: Key<bool> = gs("EnableVideoCaptureParameters", false);
pub const VIDEO_CAPTURE_PARAMETERS: Key<&str> = gs("VideoCaptureParameters", "");
pub const ENABLE_AUDIO_CAPTURE: Key<bool> = gs("EnableAudioCapture", true);
pub const AUDIO_CAPTURE_CODEC: Key<&str> = gs("AudioCaptureCodec", "");
pub const AUDIO_CAPTURE_BITRATE: Key<i32> = gs("AudioCaptureBitrate", DEFAULT_AUDIO_CAPTURE_BITRATE);
pub const ENABLE_AUDIO_CAPTURE_PARAMETERS: Key<bool> = gs("EnableAudioCaptureParameters", false);
pub const AUDIO_CAPTURE_PARAMETERS: Key<&str> = gs("AudioCaptureParameters", "");

pub const MAX_TEMPLATE_UPSCALE_MULTIPLIER: u32 = 25;
pub const MAX_NON_EXTENDED_UPSCALE_MULTIPLIER: u32 = 12;
pub const MIN_ADAPTER_UPSCALE_MULTIPLIER: u32 = 10;

static UPSCALE_MULTIPLIER_NAMES: [&str; MAX_TEMPLATE_UPSCALE_MULTIPLIER as usize] = [
    "Native (PS2) (Default)",
    "2x Native (~720px/HD)",
    "3x Native (~1080px/FHD)",
    "4x Native (~1440px/QHD)",
    "5x Native (~1800px/QHD+)",
    "6x Native (~2160px/4K UHD)",
    "7x Native (~2520px)",
    "8x Native (~2880px/5K UHD)",
    "9x Native (~3240px)",
    "10x Native (~3600px/6K UHD)",
    "11x Native (~3960px)",
    "12x Native (~4320px/8K UHD)",
    "13x Native (~4680px)",
    "14x Native (~5040px)",
    "15x Native (~5400px)",
    "16x Native (~5760px)",
    "17x Native (~6120px)",
    "18x Native (~6480px/12K UHD)",
    "19x Native (~6840px)",
    "20x Native (~7200px)",
    "21x Native (~7560px)",
    "22x Native (~7920px)",
    "23x Native (~8280px)",
    "24x Native (~8640px/16K UHD)",
    "25x Native (~9000px)",
];

pub fn upscale_multiplier_name(multiplier: u32) -> String {
    match multiplier {
        1..=MAX_TEMPLATE_UPSCALE_MULTIPLIER => {
            UPSCALE_MULTIPLIER_NAMES[multiplier as usize - 1].to_string()
        }
        _ => format!("{multiplier}x Native"),
    }
}

/// The multipliers offered for an adapter that supports up to `adapter_max`.
pub fn upscale_multipliers(adapter_max: u32, extended: bool) -> impl Iterator<Item = u32> {
    let max = adapter_max.max(MIN_ADAPTER_UPSCALE_MULTIPLIER);
    let max = if extended {
        max
    } else {
        max.min(MAX_NON_EXTENDED_UPSCALE_MULTIPLIER)
    };
    1..=max
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renderer_ids_round_trip_through_the_table() {
        for renderer in RendererType::ALL {
            assert_eq!(RendererType::from_id(renderer.id()), Some(renderer));
        }
        assert_eq!(RendererType::from_id(4), None);
        assert!(!RendererType::Auto.is_hardware());
        assert!(!RendererType::Software.is_hardware());
        assert!(RendererType::Metal.is_hardware());
    }

    #[test]
    fn upscale_list_is_capped_unless_extended() {
        assert_eq!(upscale_multipliers(8, false).last(), Some(10));
        assert_eq!(upscale_multipliers(16, false).last(), Some(12));
        assert_eq!(upscale_multipliers(32, true).last(), Some(32));
    }

    #[test]
    fn multipliers_past_the_templates_get_generic_names() {
        assert_eq!(upscale_multiplier_name(2), "2x Native (~720px/HD)");
        assert_eq!(upscale_multiplier_name(26), "26x Native");
    }
}
