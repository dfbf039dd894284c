use crate::panel::{help::HelpRegistry, ControlId};

macro_rules! help_table {
    ($($id: literal => $title: literal, $recommended: literal, $text: literal;)*) => {
        static HELP: &[(&str, &str, &str, &str)] = &[$(($id, $title, $recommended, $text)),*];
    };
}

help_table! {
    "EnableWideScreenPatches" => "Enable Widescreen Patches", "Unchecked", "Automatically loads and applies widescreen patches on game start. Can cause issues.";
    "EnableNoInterlacingPatches" => "Enable No-Interlacing Patches", "Unchecked", "Automatically loads and applies no-interlacing patches on game start. Can cause issues.";
    "disable_interlace_offset" => "Disable Interlace Offset", "Unchecked", "Disables interlacing offset which may reduce blurring in some situations.";
    "linear_present_mode" => "Bilinear Filtering", "Bilinear (Smooth)", "Enables bilinear post processing filter. Smooths the overall picture as it is displayed on the screen. Corrects positioning between pixels.";
    "pcrtc_offsets" => "Screen Offsets", "Unchecked", "Enables PCRTC Offsets which position the screen as the game requests. Useful for some games such as WipEout Fusion for its screen shake effect, but can make the picture blurry.";
    "pcrtc_overscan" => "Show Overscan", "Unchecked", "Enables the option to show the overscan area on games which draw more than the safe area of the screen.";
    "FMVAspectRatioSwitch" => "FMV Aspect Ratio Override", "Off (Default)", "Overrides the full-motion video (FMV) aspect ratio. If disabled, the FMV Aspect Ratio will match the same value as the general Aspect Ratio setting.";
    "pcrtc_antiblur" => "Anti-Blur", "Checked", "Enables internal Anti-Blur hacks. Less accurate than PS2 rendering but will make a lot of games look less blurry.";
    "IntegerScaling" => "Integer Scaling", "Unchecked", "Adds padding to the display area to ensure that the ratio between pixels on the host to pixels in the console is an integer number. May result in a sharper image in some 2D games.";
    "AspectRatio" => "Aspect Ratio", "Auto Standard (4:3/3:2 Progressive)", "Changes the aspect ratio used to display the console's output to the screen. The default is Auto Standard (4:3/3:2 Progressive) which automatically adjusts the aspect ratio to match how a game would be shown on a typical TV of the era, and adapts to widescreen/ultrawide game patches.";
    "deinterlace_mode" => "Deinterlacing", "Automatic (Default)", "Determines the deinterlacing method to be used on the interlaced screen of the emulated console. Automatic should be able to correctly deinterlace most games, but if you see visibly shaky graphics, try one of the other options.";
    "ScreenshotSize" => "Screenshot Resolution", "Display Resolution", "Determines the resolution at which screenshots will be saved. Internal resolutions preserve more detail at the cost of file size.";
    "ScreenshotFormat" => "Screenshot Format", "PNG", "Selects the format which will be used to save screenshots. JPEG produces smaller files, but loses detail.";
    "ScreenshotQuality" => "Screenshot Quality", "90%", "Selects the quality at which screenshots will be compressed. Higher values preserve more detail for JPEG and WebP, and reduce file size for PNG.";
    "StretchY" => "Vertical Stretch", "100%", "Stretches (< 100%) or squashes (> 100%) the vertical component of the display.";
    "FullscreenMode" => "Fullscreen Mode", "Borderless Fullscreen", "Chooses the fullscreen resolution and frequency.";
    "CropLeft" => "Left", "0px", "Changes the number of pixels cropped from the left side of the display.";
    "CropTop" => "Top", "0px", "Changes the number of pixels cropped from the top of the display.";
    "CropRight" => "Right", "0px", "Changes the number of pixels cropped from the right side of the display.";
    "CropBottom" => "Bottom", "0px", "Changes the number of pixels cropped from the bottom of the display.";
    "upscale_multiplier" => "Internal Resolution", "Native (PS2) (Default)", "Control the resolution at which games are rendered. High resolutions can impact performance on older or lower-end GPUs.\nNon-native resolution may cause minor graphical issues in some games.\nFMV resolution will remain unchanged, as the video files are pre-rendered.";
    "hw_mipmap" => "Mipmapping", "Checked", "Enables mipmapping, which some games require to render correctly. Mipmapping uses progressively lower resolution variants of textures at progressively further distances to reduce processing load and avoid visual artifacts.";
    "filter" => "Texture Filtering", "Bilinear (PS2)", "Changes what filtering algorithm is used to map textures to surfaces.\nNearest: Makes no attempt to blend colors.\nBilinear (Forced): Will blend colors together to remove harsh edges between different colored pixels even if the game told the PS2 not to.\nBilinear (PS2): Will apply filtering to all surfaces that a game instructs the PS2 to filter.\nBilinear (Forced Excluding Sprites): Will apply filtering to all surfaces, even if the game told the PS2 not to, except sprites.";
    "filter_sw" => "Texture Filtering", "Bilinear (PS2)", "Changes what filtering algorithm is used to map textures to surfaces.\nNearest: Makes no attempt to blend colors.\nBilinear (Forced): Will blend colors together to remove harsh edges between different colored pixels even if the game told the PS2 not to.\nBilinear (PS2): Will apply filtering to all surfaces that a game instructs the PS2 to filter.\nBilinear (Forced Excluding Sprites): Will apply filtering to all surfaces, even if the game told the PS2 not to, except sprites.";
    "TriFilter" => "Trilinear Filtering", "Automatic (Default)", "Reduces blurriness of large textures applied to small, steeply angled surfaces by sampling colors from the two nearest Mipmaps. Requires Mipmapping to be 'on'.\nOff: Disables the feature.\nTrilinear (PS2): Applies Trilinear filtering to all surfaces that a game instructs the PS2 to.\nTrilinear (Forced): Applies Trilinear filtering to all surfaces, even if the game told the PS2 not to.";
    "MaxAnisotropy" => "Anisotropic Filtering", "Off (Default)", "Reduces texture aliasing at extreme viewing angles.";
    "dithering_ps2" => "Dithering", "Unscaled (Default)", "Reduces banding between colors and improves the perceived color depth.\nOff: Disables any dithering.\nScaled: Upscaling-aware / Highest dithering effect.\nUnscaled: Native dithering / Lowest dithering effect, does not increase size of squares when upscaling.\nForce 32bit: Treats all draws as if they were 32bit to avoid banding and dithering.";
    "accurate_blending_unit" => "Blending Accuracy", "Basic (Recommended)", "Control the accuracy level of the GS blending unit emulation.\nThe higher the setting, the more blending is emulated in the shader accurately, and the higher the speed penalty will be.";
    "StereoDominantEye" => "Dominant Eye", "No (recommended)", "Biases stereo parallax toward the selected eye. Useful for FPS weapon alignment.";
    "StereoUiDepth" => "UI Depth", "0.0", "Depth offset applied to UI elements when stereoscopy is active. Negative values push UI back, positive values pull UI forward.";
    "StereoUiSecondLayerDepth" => "UI Second Layer Depth Offset", "0.0", "Additional depth offset applied when background depth detection is active.";
    "texture_preloading" => "Texture Preloading", "Full (Hash Cache)", "Uploads entire textures at once instead of in small pieces, avoiding redundant uploads when possible. Improves performance in most games, but can make a small selection slower.";
    "paltex" => "GPU Palette Conversion", "Unchecked", "When enabled the GPU will convert colormap textures, otherwise the CPU will. It is a trade-off between GPU and CPU.";
    "UserHacks" => "Manual Hardware Renderer Fixes", "Unchecked", "Enabling this option gives you the ability to change the renderer and upscaling fixes to your games. However IF you have ENABLED this, you WILL DISABLE AUTOMATIC SETTINGS and you can re-enable automatic settings by unchecking this option.";
    "HWSpinCPUForReadbacks" => "Spin CPU During Readbacks", "Unchecked", "Does useless work on the CPU during readbacks to prevent it from going to into powersave modes. May improve performance during readbacks but with a significant increase in power usage.";
    "HWSpinGPUForReadbacks" => "Spin GPU During Readbacks", "Unchecked", "Submits useless work to the GPU during readbacks to prevent it from going into powersave modes. May improve performance during readbacks but with a significant increase in power usage.";
    "extrathreads" => "Software Rendering Threads", "2 threads", "Number of rendering threads: 0 for single thread, 2 or more for multithread (1 is for debugging). 2 to 4 threads is recommended, any more than that is likely to be slower instead of faster.";
    "autoflush_sw" => "Auto Flush", "Checked", "Forces a primitive flush when a framebuffer is also an input texture. Fixes some processing effects such as the shadows in the Jak series and radiosity in GTA:SA.";
    "mipmap" => "Mipmapping", "Checked", "Enables mipmapping, which some games require to render correctly.";
    "UserHacks_CPUSpriteRenderBW" => "CPU Sprite Render Size", "0 (Disabled)", "The maximum target memory width that will allow the CPU Sprite Renderer to activate on.";
    "UserHacks_CPUCLUTRender" => "Software CLUT Render", "0 (Disabled)", "Tries to detect when a game is drawing its own color palette and then renders it in software, instead of on the GPU.";
    "UserHacks_GPUTargetCLUTMode" => "GPU Target CLUT", "Disabled", "Tries to detect when a game is drawing its own color palette and then renders it on the GPU with special handling.";
    "UserHacks_SkipDraw_Start" => "Skip Draw Range Start", "0", "Completely skips drawing surfaces from the surface in the left box up to the surface specified in the box on the right.";
    "UserHacks_SkipDraw_End" => "Skip Draw Range End", "0", "Completely skips drawing surfaces from the surface in the left box up to the surface specified in the box on the right.";
    "UserHacks_AutoFlushLevel" => "Auto Flush", "Unchecked", "Forces a primitive flush when a framebuffer is also an input texture. Fixes some processing effects such as the shadows in the Jak series and radiosity in GTA:SA.";
    "UserHacks_DisableDepthSupport" => "Disable Depth Conversion", "Unchecked", "Disables the support of depth buffers in the texture cache. Will likely create various glitches and is only useful for debugging.";
    "UserHacks_Disable_Safe_Features" => "Disable Safe Features", "Unchecked", "This option disables multiple safe features. Disables accurate Unscale Point and Line rendering which can help Xenosaga games. Disables accurate GS Memory Clearing to be done on the CPU, and lets the GPU handle it, which can help Kingdom Hearts games.";
    "UserHacks_DisableRenderFixes" => "Disable Render Fixes", "Unchecked", "This option disables game-specific render fixes.";
    "UserHacks_DisablePartialInvalidation" => "Disable Partial Source Invalidation", "Unchecked", "By default, the texture cache handles partial invalidations. Unfortunately it is very costly to compute CPU wise. This hack replaces the partial invalidation with a complete deletion of the texture to reduce the CPU load. It helps with the Snowblind engine games.";
    "UserHacks_CPU_FB_Conversion" => "Framebuffer Conversion", "Unchecked", "Convert 4-bit and 8-bit framebuffer on the CPU instead of the GPU. Helps Harry Potter and Stuntman games. It has a big impact on performance.";
    "preload_frame_with_gs_data" => "Preload Frame Data", "Unchecked", "Uploads GS data when rendering a new frame to reproduce some effects accurately.";
    "UserHacks_TextureInsideRt" => "Texture Inside RT", "Disabled", "Allows the texture cache to reuse as an input texture the inner portion of a previous framebuffer.";
    "UserHacks_Limit24BitDepth" => "Limit Depth to 24 Bits", "Disabled", "Truncate 32-bit depth values to 24 bits. Helps games struggling with Z-fighting.";
    "UserHacks_ReadTCOnClose" => "Read Targets When Closing", "Unchecked", "Flushes all targets in the texture cache back to local memory when shutting down. Can prevent lost visuals when saving state or switching graphics APIs, but can also cause graphical corruption.";
    "UserHacks_EstimateTextureRegion" => "Estimate Texture Region", "Unchecked", "Attempts to reduce the texture size when games do not set it themselves (e.g. Snowblind games).";
    "UserHacks_HalfPixelOffset" => "Half Pixel Offset", "Off (Default)", "Might fix some misaligned fog, bloom, or blend effect.";
    "UserHacks_round_sprite_offset" => "Round Sprite", "Off (Default)", "Corrects the sampling of 2D sprite textures when upscaling. Fixes lines in sprites of games like Ar tonelico when upscaling. Half option is for flat sprites, Full is for all sprites.";
    "UserHacks_TCOffsetX" => "Texture Offsets X", "0", "Offset for the ST/UV texture coordinates. Fixes some odd texture issues and might fix some post processing alignment too.";
    "UserHacks_TCOffsetY" => "Texture Offsets Y", "0", "Offset for the ST/UV texture coordinates. Fixes some odd texture issues and might fix some post processing alignment too.";
    "UserHacks_align_sprite_X" => "Align Sprite", "Unchecked", "Fixes issues with upscaling (vertical lines) in Namco games like Ace Combat, Tekken, Soul Calibur, etc.";
    "UserHacks_forceEvenSpritePosition" => "Force Even Sprite Position", "Unchecked", "Lowers the GS precision to avoid gaps between pixels when upscaling. Fixes the text on Wild Arms games.";
    "UserHacks_BilinearHack" => "Bilinear Dirty Upscale", "Unchecked", "Can smooth out textures due to be bilinear filtered when upscaling. E.g. Brave sun glare.";
    "UserHacks_merge_pp_sprite" => "Merge Sprite", "Unchecked", "Replaces post-processing multiple paving sprites by a single fat sprite. It reduces various upscaling lines.";
    "UserHacks_NativePaletteDraw" => "Unscaled Palette Texture Draws", "Unchecked", "Forces palette texture draws to render at native resolution.";
    "DumpReplaceableTextures" => "Dump Textures", "Unchecked", "Dumps replaceable textures to disk. Will reduce performance.";
    "DumpReplaceableMipmaps" => "Dump Mipmaps", "Unchecked", "Includes mipmaps when dumping textures.";
    "DumpTexturesWithFMVActive" => "Dump FMV Textures", "Unchecked", "Allows texture dumping when FMVs are active. You should not enable this.";
    "LoadTextureReplacementsAsync" => "Asynchronous Texture Loading", "Checked", "Loads replacement textures on a worker thread, reducing microstutter when replacements are enabled.";
    "LoadTextureReplacements" => "Load Textures", "Unchecked", "Loads replacement textures where available and user-provided.";
    "PrecacheTextureReplacements" => "Precache Textures", "Unchecked", "Preloads all replacement textures to memory. Not necessary with asynchronous loading.";
    "CASMode" => "Contrast Adaptive Sharpening", "None (Default)", "Enables FidelityFX Contrast Adaptive Sharpening.";
    "CASSharpness" => "Sharpness", "50%", "Determines the intensity the sharpening effect in CAS post-processing.";
    "ShadeBoost" => "Shade Boost", "Unchecked", "Enables saturation, contrast, and brightness to be adjusted. Values of brightness, saturation, and contrast are at default 50.";
    "fxaa" => "FXAA", "Unchecked", "Applies the FXAA anti-aliasing algorithm to improve the visual quality of games.";
    "ShadeBoost_Brightness" => "Brightness", "50", "Adjusts brightness. 50 is normal.";
    "ShadeBoost_Contrast" => "Contrast", "50", "Adjusts contrast. 50 is normal.";
    "ShadeBoost_Gamma" => "Gamma", "50", "Adjusts gamma. 50 is normal.";
    "ShadeBoost_Saturation" => "Saturation", "50", "Adjusts saturation. 50 is normal.";
    "TVShader" => "TV Shader", "None (Default)", "Applies a shader which replicates the visual effects of different styles of television sets.";
    "OsdScale" => "OSD Scale", "100%", "Scales the size of the onscreen OSD from 50% to 500%.";
    "OsdMessagesPos" => "OSD Messages Position", "Left (Default)", "Position of on-screen-display messages when events occur such as save states being created/loaded, screenshots being taken, etc.";
    "OsdPerformancePos" => "OSD Performance Position", "Right (Default)", "Position of a variety of on-screen performance data points as selected by the user.";
    "OsdShowSpeed" => "Show Speed Percentages", "Unchecked", "Shows the current emulation speed of the system as a percentage.";
    "OsdShowFPS" => "Show FPS", "Unchecked", "Shows the number of internal video frames displayed per second by the system.";
    "OsdShowVPS" => "Show VPS", "Unchecked", "Shows the number of Vsyncs performed per second by the system.";
    "OsdShowResolution" => "Show Resolution", "Unchecked", "Shows the internal resolution of the game.";
    "OsdShowGSStats" => "Show GS Statistics", "Unchecked", "Shows statistics about the emulated GS such as primitives and draw calls.";
    "OsdShowCPU" => "Show CPU Usage", "Unchecked", "Shows the host's CPU utilization based on threads.";
    "OsdShowGPU" => "Show GPU Usage", "Unchecked", "Shows the host's GPU utilization.";
    "OsdShowIndicators" => "Show Status Indicators", "Checked", "Shows icon indicators for emulation states such as Pausing, Turbo, Fast-Forward, and Slow-Motion.";
    "OsdShowFrameTimes" => "Show Frame Times", "Unchecked", "Displays a graph showing the average frametimes.";
    "OsdShowHardwareInfo" => "Show Hardware Info", "Unchecked", "Shows the current system CPU and GPU information.";
    "OsdShowVersion" => "Show PCSX2 Version", "Unchecked", "Shows the current PCSX2 version.";
    "OsdShowSettings" => "Show Settings", "Unchecked", "Displays various settings and the current values of those settings in the bottom-right corner of the display.";
    "OsdshowPatches" => "Show Patches", "Unchecked", "Shows the amount of currently active patches/cheats in the bottom-right corner of the display.";
    "OsdShowInputs" => "Show Inputs", "Unchecked", "Shows the current controller state of the system in the bottom-left corner of the display.";
    "OsdShowVideoCapture" => "Show Video Capture Status", "Checked", "Shows the status of the currently active video capture in the top-right corner of the display.";
    "OsdShowInputRec" => "Show Input Recording Status", "Checked", "Shows the status of the currently active input recording in the top-right corner of the display.";
    "OsdShowTextureReplacements" => "Show Texture Replacement Status", "Unchecked", "Shows the status of the number of dumped and loaded texture replacements in the top-right corner of the display.";
    "OsdWarnAboutUnsafeSettings" => "Warn About Unsafe Settings", "Checked", "Displays warnings when settings are enabled which may break games.";
    "VideoCaptureCodec" => "Video Codec", "Default", "Selects the Video Codec to be used for Video Capture. If unsure, leave it on default.";
    "VideoCaptureFormat" => "Video Format", "Default", "Selects the Video Format to be used for Video Capture. If by chance the codec does not support the format, the first format available will be used. If unsure, leave it on default.";
    "VideoCaptureBitrate" => "Video Bitrate", "6000 kbps", "Sets the video bitrate to be used. Higher bitrates generally yield better video quality at the cost of larger resulting file sizes.";
    "VideoCaptureAutoResolution" => "Automatic Resolution", "Unchecked", "When checked, the video capture resolution will follow the internal resolution of the running game.\n\nBe careful when using this setting especially when you are upscaling, as higher internal resolutions (above 4x) can result in very large video capture and can cause system overload.";
    "EnableVideoCaptureParameters" => "Enable Extra Video Arguments", "Unchecked", "Allows you to pass arguments to the selected video codec.";
    "VideoCaptureParameters" => "Extra Video Arguments", "Leave It Blank", "Parameters passed to the selected video codec.\nYou must use '=' to separate key from value and ':' to separate two pairs from each other.\nFor example: \"crf = 21 : preset = veryfast\"";
    "AudioCaptureCodec" => "Audio Codec", "Default", "Selects the Audio Codec to be used for Video Capture. If unsure, leave it on default.";
    "AudioCaptureBitrate" => "Audio Bitrate", "192 kbps", "Sets the audio bitrate to be used.";
    "EnableAudioCaptureParameters" => "Enable Extra Audio Arguments", "Unchecked", "Allows you to pass arguments to the selected audio codec.";
    "AudioCaptureParameters" => "Extra Audio Arguments", "Leave It Blank", "Parameters passed to the selected audio codec.\nYou must use '=' to separate key from value and ':' to separate two pairs from each other.\nFor example: \"compression_level = 4 : joint_stereo = 1\"";
    "GSDumpCompression" => "GS Dump Compression", "Zstandard (zst)", "Change the compression algorithm used when creating a GS dump.";
    "UseBlitSwapChain" => "Use Blit Swap Chain", "Unchecked", "Uses a blit presentation model instead of flipping when using the Direct3D 11 graphics API. This usually results in slower performance, but may be required for some streaming applications, or to uncap framerates on some systems.";
    "ExclusiveFullscreenControl" => "Allow Exclusive Fullscreen", "Automatic (Default)", "Overrides the driver's heuristics for enabling exclusive fullscreen, or direct flip/scanout.\nDisallowing exclusive fullscreen may enable smoother task switching and overlays, but increase input latency.";
    "DisableMailboxPresentation" => "Disable Mailbox Presentation", "Unchecked", "Forces the use of FIFO over Mailbox presentation, i.e. double buffering instead of triple buffering. Usually results in worse frame pacing.";
    "ExtendedUpscalingMultipliers" => "Extended Upscaling Multipliers", "Unchecked", "Displays additional, very high upscaling multipliers dependent on GPU capability.";
    "UseDebugDevice" => "Enable Debug Device", "Unchecked", "Enables API-level validation of graphics commands.";
    "HWDownloadMode" => "GS Download Mode", "Accurate", "Skips synchronizing with the GS thread and host GPU for GS downloads. Can result in a large speed boost on slower systems, at the cost of many broken graphical effects. If games are broken and you have this option enabled, please disable it first.";
    "FrameRateNTSC" => "NTSC Frame Rate", "59.94 Hz", "Determines what frame rate NTSC games run at.";
    "FrameRatePAL" => "PAL Frame Rate", "50.00 Hz", "Determines what frame rate PAL games run at.";
    "Renderer" => "Renderer", "Automatic (Default)", "Chooses the backend used to draw the emulated GS output. Automatic picks the best renderer for this system.";
    "Adapter" => "Adapter", "(Default)", "Selects the GPU used by the hardware renderers when more than one is available.";
    "StereoMode" => "Stereoscopic Mode", "Off", "Renders each frame twice from two eye positions and packs them side by side, top and bottom, or as an anaglyph.";
    "StereoSeparation" => "Separation", "0.0", "Distance between the two virtual eyes. Larger values increase the depth effect.";
    "StereoConvergence" => "Convergence", "0.0", "Depth at which both eye images line up, placing objects at screen depth.";
    "StereoDepthFactor" => "Depth Factor", "0.0", "Scales how strongly scene depth maps to parallax.";
    "UserHacks_CPUSpriteRenderLevel" => "CPU Sprite Render Level", "Sprites Only", "Chooses which primitives the CPU sprite renderer handles.";
    "UserHacks_native_scaling" => "Native Scaling", "Off (Default)", "Renders post-processing effects at native resolution to avoid misaligned or duplicated effects when upscaling.";
    "Textures" => "Texture Folder", "", "Directory replacement textures are loaded from and dumped textures are written to.";
    "OverrideTextureBarriers" => "Override Texture Barriers", "Automatic (Default)", "Forces texture barriers on or off instead of letting the renderer decide.";
    "DisableFramebufferFetch" => "Disable Framebuffer Fetch", "Unchecked", "Prevents the use of framebuffer fetch when supported by the host GPU.";
    "DisableShaderCache" => "Disable Shader Cache", "Unchecked", "Compiles every shader at runtime instead of loading it from the on-disk cache.";
    "DisableVertexShaderExpand" => "Disable Vertex Shader Expand", "Unchecked", "Falls back to the CPU for expanding points and sprites when vertex shader expansion is unavailable.";
    "CaptureContainer" => "Container", "MP4", "Determines the file format used to store captured video and audio.";
    "EnableVideoCapture" => "Capture Video", "Checked", "Records the video stream when capturing.";
    "VideoCaptureWidth" => "Resolution Width", "640", "Width of the captured video when automatic resolution is off.";
    "VideoCaptureHeight" => "Resolution Height", "480", "Height of the captured video when automatic resolution is off.";
    "EnableAudioCapture" => "Capture Audio", "Checked", "Records the audio stream when capturing.";
}

/// Registers help for every listed control that is still part of the panel.
pub fn register(help: &mut HelpRegistry, exists: impl Fn(ControlId) -> bool) {
    for &(id, title, recommended, text) in HELP {
        let id = ControlId(id);
        if exists(id) {
            help.register(id, title, recommended, text);
        }
    }
    for flag in super::stereo::STEREO_FLAGS {
        let id = ControlId(flag.key.name);
        if exists(id) {
            help.register(id, flag.title, flag.recommended(), flag.help);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markup_is_stripped() {
        assert!(HELP
            .iter()
            .all(|(_, _, _, text)| !text.contains("<br>") && !text.contains("&lt;")));
    }

    #[test]
    fn missing_controls_get_no_help() {
        let mut help = HelpRegistry::new();
        register(&mut help, |id| id == ControlId("fxaa"));
        assert_eq!(help.len(), 1);
        assert_eq!(help.get(ControlId("fxaa")).map(|h| h.title), Some("FXAA"));
    }
}
