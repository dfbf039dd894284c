use crate::gs::RendererType;
use bitflags::bitflags;
use std::path::PathBuf;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HostFlags: u8 {
        const WINDOWS = 1 << 0;
        const MACOS = 1 << 1;
        const ADVANCED_SETTINGS = 1 << 2;
        const DEV_BUILD = 1 << 3;
    }
}

impl HostFlags {
    /// Platform flags for the target this was compiled for.
    pub fn for_target() -> Self {
        let mut flags = HostFlags::empty();
        flags.set(HostFlags::WINDOWS, cfg!(target_os = "windows"));
        flags.set(HostFlags::MACOS, cfg!(target_os = "macos"));
        flags.set(HostFlags::DEV_BUILD, cfg!(debug_assertions));
        flags
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdapterInfo {
    pub name: String,
    pub fullscreen_modes: Vec<String>,
    pub max_upscale_multiplier: u32,
}

/// Renderer adapter enumeration, answered by whatever owns the GPU backends.
pub trait AdapterSource {
    fn adapters(&self, renderer: RendererType) -> Vec<AdapterInfo>;

    /// The name the backend picks when no adapter is configured.
    fn default_adapter(&self) -> String;

    /// What `Auto` resolves to on this machine.
    fn preferred_renderer(&self) -> RendererType;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodecInfo {
    pub format: String,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelFormatInfo {
    pub id: i32,
    pub name: String,
}

pub trait CodecSource {
    fn video_codecs(&self, container: &str) -> Vec<CodecInfo>;
    fn audio_codecs(&self, container: &str) -> Vec<CodecInfo>;
    fn video_formats(&self, codec: &str) -> Vec<PixelFormatInfo>;
}

#[derive(Clone, Debug)]
pub struct Environment {
    pub flags: HostFlags,
    /// Directory relative folder settings are resolved against.
    pub data_root: PathBuf,
}

impl Environment {
    pub fn is_windows(&self) -> bool {
        self.flags.contains(HostFlags::WINDOWS)
    }

    pub fn is_macos(&self) -> bool {
        self.flags.contains(HostFlags::MACOS)
    }

    pub fn show_advanced_settings(&self) -> bool {
        self.flags.contains(HostFlags::ADVANCED_SETTINGS)
    }

    pub fn is_dev_build(&self) -> bool {
        self.flags.contains(HostFlags::DEV_BUILD)
    }
}
