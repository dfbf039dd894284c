//! The boolean heuristics the stereoscopy classifier reads, one checkbox each.

use gsconf_core::{gs, Key};

pub struct StereoFlag {
    pub key: Key<bool>,
    pub title: &'static str,
    pub help: &'static str,
}

impl StereoFlag {
    pub fn recommended(&self) -> &'static str {
        if self.key.default {
            "Checked"
        } else {
            "Unchecked"
        }
    }

    /// Heading the flag is listed under.
    pub fn group(&self) -> &'static str {
        let name = self.key.name;
        if name.contains("Fmv") {
            "FMV Detection"
        } else if name.starts_with("StereoUniversalReject") {
            "Universal Reject"
        } else if name.starts_with("StereoUniversalRequire") {
            "Universal Require"
        } else if name.starts_with("StereoReject") {
            "Reject Heuristics"
        } else if name.starts_with("StereoRequire") {
            "Require Heuristics"
        } else if name.contains("Stencil") {
            "Stencil"
        } else if name.starts_with("StereoMasterFix") {
            "Master Fixes"
        } else {
            "Stereo Options"
        }
    }
}

macro_rules! stereo_flags {
    ($($name: literal => $default: literal, $title: literal, $help: literal;)*) => {
        pub static STEREO_FLAGS: &[StereoFlag] = &[$(
            StereoFlag {
                key: gs::stereo_flag($name, $default),
                title: $title,
                help: $help,
            }
        ),*];
    };
}

stereo_flags! {
    "StereoSwapEyes" => false, "Swap Eyes", "Swaps the left and right eye images.";
    "StereoFlipRendering" => false, "Flip Rendering", "Flips the order in which the two eye views are rendered.";
    "StereoDontRenderMonoObjects" => false, "Don't Render Mono Objects", "Skips draws classified as mono instead of rendering them at screen depth.";
    "StereoRejectNonPositiveZ" => false, "Reject Z <= 0", "Treat draws with non-positive Z as mono.";
    "StereoRejectSmallZRange" => false, "Reject Small Z Range", "Treat draws with a near-constant Z range as mono.";
    "StereoRejectSpriteBlit" => false, "Reject Sprite Blit", "Treat 1:1 sprite blits (UI-style) as mono.";
    "StereoRejectConstantColor" => false, "Reject Constant Color", "Treat constant-color draws as mono.";
    "StereoRejectScalingDraw" => false, "Reject Scaling Draw", "Disable stereoscopy for post-processing scaling draws.";
    "StereoRejectSbsInput" => false, "Reject SBS Input", "Disable stereoscopy when the source texture already looks like SBS.";
    "StereoRejectTabInput" => false, "Reject TAB Input", "Disable stereoscopy when the source texture already looks like TAB.";
    "StereoRequireDisplayBuffer1" => true, "Require Display Buffer", "Only apply stereoscopy to draws which match the active display framebuffer. Disabling this can include offscreen effects.";
    "StereoRequireDisplayBuffer2" => true, "Require Display Buffer", "Only apply stereoscopy to draws which match the active display framebuffer. Disabling this can include offscreen effects.";
    "StereoFixStencilShadows" => false, "Fix Stencil Shadows", "Disable stereoscopy for stencil shadow passes to reduce post-processing artifacts (Tekken 5, Soul Calibur 3)";
    "StereoRequirePerspectiveUV" => true, "Require Perspective UV", "Require perspective-correct UVs for stereoscopic rendering. Useful for excluding flat UI draws.";
    "StereoRequireZVaries" => true, "Require Varying Z", "Require Z to vary within the draw before enabling stereoscopy.";
    "StereoRequireDepthActive" => true, "Require Depth Test", "Require depth test and writes to be active before enabling stereoscopy.";
    "StereoRejectSprites" => true, "Reject Sprites", "Disable stereoscopy for sprite/rect draws, which are commonly used for UI and 2D effects.";
    "StereoRejectUiLike" => true, "Reject UI-like Sprites", "Exclude sprite draws that look like UI (fixed UV, constant Q/Z, no depth).";
    "StereoUiSafeDetect" => false, "UI Safe Detect", "Safe UI detection mode for common overlays.";
    "StereoUiAdvancedDetect" => false, "UI Advanced Detect", "Stricter UI detection mode for complex overlays.";
    "StereoUiBackgroundDepth" => false, "Background Depth", "Only treat UI-like draws as UI when depth testing is active.";
    "StereoMasterFix" => false, "Master FIX", "Master toggle for additional stereo fixes.";
    "StereoMasterFix1" => false, "Master FIX 1", "Additional stereo fix toggle.";
    "StereoMasterFix2" => false, "Master FIX 2", "Additional stereo fix toggle.";
    "StereoMasterFix3" => false, "Master FIX 3", "Additional stereo fix toggle.";
    "StereoMasterFix4" => false, "Master FIX 4", "Additional stereo fix toggle.";
    "StereoMasterFix5" => false, "Master FIX 5", "Additional stereo fix toggle.";
    "StereoMasterFix6" => false, "Master FIX 6", "Additional stereo fix toggle.";
    "StereoMasterFix7" => false, "Master FIX 7", "Additional stereo fix toggle.";
    "StereoMasterFix8" => false, "Master FIX 8", "Additional stereo fix toggle.";
    "StereoMasterFix9" => false, "Master FIX 9", "Additional stereo fix toggle.";
    "StereoMasterFix10" => false, "Master FIX 10", "Additional stereo fix toggle.";
    "StereoMasterFixTest" => false, "Master FIX Test", "Experimental test toggle for stereo fixes.";
    "StereoRequireTextureMapping" => false, "Require Texture Mapping", "Only apply stereoscopy when texturing is enabled for the draw.";
    "StereoRequireAlphaBlend" => false, "Require Alpha Blending", "Only apply stereoscopy when alpha blending is enabled.";
    "StereoRequireAlphaTest" => false, "Require Alpha Test", "Only apply stereoscopy when alpha testing is enabled.";
    "StereoRequireUvVaries" => false, "Require Varying UV", "Only apply stereoscopy when UV coordinates vary across the draw.";
    "StereoRequireColorVaries" => false, "Require Varying Color", "Only apply stereoscopy when vertex colors vary across the draw.";
    "StereoRequireFog" => false, "Require Fog", "Only apply stereoscopy when fog is enabled for the draw.";
    "StereoStencilRequireDate" => false, "Require DATE", "Only apply stereoscopy when DATE is enabled for the draw.";
    "StereoStencilRequireDatm" => false, "Require DATM", "Only apply stereoscopy when DATM is enabled for the draw.";
    "StereoStencilRequireAte" => false, "Require ATE", "Only apply stereoscopy when alpha testing is enabled for the draw.";
    "StereoStencilRequireAfailZbOnly" => false, "Require AFAIL ZB Only", "Only apply stereoscopy when alpha fail is set to ZB only.";
    "StereoStencilRequireAfailNotKeep" => false, "Require AFAIL Not Keep", "Only apply stereoscopy when alpha fail does not keep existing values.";
    "StereoStencilRequireZWrite" => false, "Require Z Write", "Only apply stereoscopy when Z writes are enabled.";
    "StereoStencilRequireZTest" => false, "Require Z Test", "Only apply stereoscopy when Z testing is enabled.";
    "StereoStencilRequireZTestGequal" => false, "Require Z Test GEQUAL", "Only apply stereoscopy when Z test is set to GEQUAL.";
    "StereoStencilRequireFbMask" => false, "Require FB Mask", "Only apply stereoscopy when a framebuffer mask is enabled.";
    "StereoStencilRequireFbMaskFull" => false, "Require Full FB Mask", "Only apply stereoscopy when the framebuffer mask is fully enabled.";
    "StereoStencilRequireTexIsFb" => false, "Require Texture Is FB", "Only apply stereoscopy when the texture source matches the framebuffer.";
    "StereoRejectFullscreenDraw" => false, "Reject Fullscreen Draw Rect", "Disable stereoscopy when the draw rectangle covers the full render target.";
    "StereoRejectFullscreenScissor" => false, "Reject Fullscreen Scissor", "Disable stereoscopy when the scissor matches the full render target.";
    "StereoRejectFullCover" => false, "Reject Full Cover", "Disable stereoscopy when the primitive covers the target without gaps.";
    "StereoRejectSpriteNoGaps" => false, "Reject Sprite No Gaps", "Disable stereoscopy for sprite draws that cover without gaps.";
    "StereoRejectTexIsFb" => false, "Reject Tex-is-FB", "Disable stereoscopy when the shader samples from the framebuffer.";
    "StereoRejectChannelShuffle" => false, "Reject Channel Shuffle", "Disable stereoscopy for channel shuffle draws.";
    "StereoRejectTextureShuffle" => false, "Reject Texture Shuffle", "Disable stereoscopy for texture shuffle effects.";
    "StereoRejectFullscreenShuffle" => false, "Reject Fullscreen Shuffle", "Disable stereoscopy when a fullscreen shuffle is detected.";
    "StereoRejectShaderShuffle" => false, "Reject Shader Shuffle", "Disable stereoscopy for shader-based shuffle paths.";
    "StereoRejectShuffleAcross" => false, "Reject Shuffle Across", "Disable stereoscopy for shuffle-across effects.";
    "StereoRejectShuffleSame" => false, "Reject Shuffle Same", "Disable stereoscopy for same-group shuffle effects.";
    "StereoRejectChannelFetch" => false, "Reject Channel Fetch", "Disable stereoscopy when the draw uses channel fetching.";
    "StereoRejectChannelFetchFb" => false, "Reject Channel Fetch FB", "Disable stereoscopy when channel fetch reads from the framebuffer.";
    "StereoRejectFeedbackLoop" => false, "Reject Feedback Loop", "Disable stereoscopy when a framebuffer feedback loop is detected.";
    "StereoRejectColclip" => false, "Reject Colclip", "Disable stereoscopy when color clipping is active.";
    "StereoRejectRtaCorrection" => false, "Reject RTA Correction", "Disable stereoscopy when render target alpha correction is active.";
    "StereoUniversalRejectRtaSourceCorrection" => false, "Reject RTA Source Correction", "Universal fix: disable stereoscopy when RTA source correction is active.";
    "StereoUniversalRejectColclipHw" => false, "Reject Colclip HW", "Universal fix: disable stereoscopy when colclip HW emulation is active.";
    "StereoUniversalRejectColclip" => false, "Reject Colclip", "Universal fix: disable stereoscopy when colclip is active.";
    "StereoUniversalRejectBlendMix" => false, "Reject Blend Mix", "Universal fix: disable stereoscopy when blend mix paths are active.";
    "StereoUniversalRejectPabe" => false, "Reject PABE", "Universal fix: disable stereoscopy when PABE is enabled.";
    "StereoUniversalRejectFbMask" => false, "Reject FB Mask", "Universal fix: disable stereoscopy when framebuffer masking is active.";
    "StereoUniversalRejectTexIsFb" => false, "Reject Tex-is-FB", "Universal fix: disable stereoscopy when sampling the framebuffer.";
    "StereoUniversalRejectNoColor" => false, "Reject No Color Output", "Universal fix: disable stereoscopy for depth-only draws.";
    "StereoUniversalRejectNoColor1" => false, "Reject No Color Output 1", "Universal fix: disable stereoscopy when secondary color output is disabled.";
    "StereoUniversalRejectAemFmt" => false, "Reject AEM Format", "Universal fix: disable stereoscopy when AEM format is non-zero.";
    "StereoUniversalRejectPalFmt" => false, "Reject PAL Format", "Universal fix: disable stereoscopy when PAL format is non-zero.";
    "StereoUniversalRejectDstFmt" => false, "Reject DST Format", "Universal fix: disable stereoscopy when destination format is non-zero.";
    "StereoUniversalRejectDepthFmt" => false, "Reject Depth Format", "Universal fix: disable stereoscopy when depth format is non-zero.";
    "StereoUniversalRejectAem" => false, "Reject AEM", "Universal fix: disable stereoscopy when AEM is enabled.";
    "StereoUniversalRejectFba" => false, "Reject FBA", "Universal fix: disable stereoscopy when FBA is enabled.";
    "StereoUniversalRejectFog" => false, "Reject Fog", "Universal fix: disable stereoscopy when fog is enabled.";
    "StereoUniversalRejectIip" => false, "Reject IIP", "Universal fix: disable stereoscopy when IIP (Gouraud) is enabled.";
    "StereoUniversalRejectDate" => false, "Reject DATE", "Universal fix: disable stereoscopy when DATE is enabled.";
    "StereoUniversalRejectAtst" => false, "Reject ATST", "Universal fix: disable stereoscopy when ATST is non-zero.";
    "StereoUniversalRejectAfail" => false, "Reject AFAIL", "Universal fix: disable stereoscopy when AFAIL is non-zero.";
    "StereoUniversalRejectFst" => false, "Reject FST", "Universal fix: disable stereoscopy when FST is enabled.";
    "StereoUniversalRejectTfx" => false, "Reject TFX", "Universal fix: disable stereoscopy when TFX is non-zero.";
    "StereoUniversalRejectTcc" => false, "Reject TCC", "Universal fix: disable stereoscopy when TCC is enabled.";
    "StereoUniversalRejectWms" => false, "Reject WMS", "Universal fix: disable stereoscopy when WMS is non-zero.";
    "StereoUniversalRejectWmt" => false, "Reject WMT", "Universal fix: disable stereoscopy when WMT is non-zero.";
    "StereoUniversalRejectAdjs" => false, "Reject ADJS", "Universal fix: disable stereoscopy when ADJS is enabled.";
    "StereoUniversalRejectAdjt" => false, "Reject ADJT", "Universal fix: disable stereoscopy when ADJT is enabled.";
    "StereoUniversalRejectLtf" => false, "Reject LTF", "Universal fix: disable stereoscopy when LTF is enabled.";
    "StereoUniversalRejectShuffle" => false, "Reject Shuffle", "Universal fix: disable stereoscopy when shuffle is active.";
    "StereoUniversalRejectShuffleSame" => false, "Reject Shuffle Same", "Universal fix: disable stereoscopy when shuffle same is active.";
    "StereoUniversalRejectReal16Src" => false, "Reject Real16 Src", "Universal fix: disable stereoscopy when real16 source is active.";
    "StereoUniversalRejectProcessBa" => false, "Reject Process BA", "Universal fix: disable stereoscopy when process BA is non-zero.";
    "StereoUniversalRejectProcessRg" => false, "Reject Process RG", "Universal fix: disable stereoscopy when process RG is non-zero.";
    "StereoUniversalRejectShuffleAcross" => false, "Reject Shuffle Across", "Universal fix: disable stereoscopy when shuffle across is active.";
    "StereoUniversalRejectWriteRg" => false, "Reject Write RG", "Universal fix: disable stereoscopy when write RG is active.";
    "StereoUniversalRejectBlendA" => false, "Reject Blend A", "Universal fix: disable stereoscopy when blend A is non-zero.";
    "StereoUniversalRejectBlendB" => false, "Reject Blend B", "Universal fix: disable stereoscopy when blend B is non-zero.";
    "StereoUniversalRejectBlendC" => false, "Reject Blend C", "Universal fix: disable stereoscopy when blend C is non-zero.";
    "StereoUniversalRejectBlendD" => false, "Reject Blend D", "Universal fix: disable stereoscopy when blend D is non-zero.";
    "StereoUniversalRejectFixedOneA" => false, "Reject Fixed One A", "Universal fix: disable stereoscopy when fixed-one-A is active.";
    "StereoUniversalRejectBlendHw" => false, "Reject Blend HW", "Universal fix: disable stereoscopy when blend HW is non-zero.";
    "StereoUniversalRejectAMasked" => false, "Reject A Masked", "Universal fix: disable stereoscopy when alpha is masked.";
    "StereoUniversalRejectRoundInv" => false, "Reject Round Inv", "Universal fix: disable stereoscopy when round inversion is active.";
    "StereoUniversalRejectChannel" => false, "Reject Channel", "Universal fix: disable stereoscopy when channel fetch is non-zero.";
    "StereoUniversalRejectChannelFb" => false, "Reject Channel FB", "Universal fix: disable stereoscopy when channel fetch from FB is active.";
    "StereoUniversalRejectDither" => false, "Reject Dither", "Universal fix: disable stereoscopy when dither is non-zero.";
    "StereoUniversalRejectDitherAdjust" => false, "Reject Dither Adjust", "Universal fix: disable stereoscopy when dither adjust is active.";
    "StereoUniversalRejectZClamp" => false, "Reject Z Clamp", "Universal fix: disable stereoscopy when Z clamp is enabled.";
    "StereoUniversalRejectZFloor" => false, "Reject Z Floor", "Universal fix: disable stereoscopy when Z floor is enabled.";
    "StereoUniversalRejectTCOffsetHack" => false, "Reject TC Offset Hack", "Universal fix: disable stereoscopy when TC offset hack is active.";
    "StereoUniversalRejectUrbanChaosHle" => false, "Reject Urban Chaos HLE", "Universal fix: disable stereoscopy when Urban Chaos HLE path is active.";
    "StereoUniversalRejectTalesOfAbyssHle" => false, "Reject Tales of Abyss HLE", "Universal fix: disable stereoscopy when Tales of Abyss HLE path is active.";
    "StereoUniversalRejectAutomaticLod" => false, "Reject Automatic LOD", "Universal fix: disable stereoscopy when automatic LOD is active.";
    "StereoUniversalRejectManualLod" => false, "Reject Manual LOD", "Universal fix: disable stereoscopy when manual LOD is active.";
    "StereoUniversalRejectPointSampler" => false, "Reject Point Sampler", "Universal fix: disable stereoscopy when point sampling is active.";
    "StereoUniversalRejectRegionRect" => false, "Reject Region Rect", "Universal fix: disable stereoscopy when region rect path is active.";
    "StereoUniversalRejectScanmask" => false, "Reject Scanmask", "Universal fix: disable stereoscopy when scanmask is non-zero.";
    "StereoUniversalRequireRtaCorrection" => false, "Require RTA Correction", "Universal fix: only allow stereoscopy when RTA correction is active.";
    "StereoUniversalRequireRtaSourceCorrection" => false, "Require RTA Source Correction", "Universal fix: only allow stereoscopy when RTA source correction is active.";
    "StereoUniversalRequireColclipHw" => false, "Require Colclip HW", "Universal fix: only allow stereoscopy when colclip HW emulation is active.";
    "StereoUniversalRequireColclip" => false, "Require Colclip", "Universal fix: only allow stereoscopy when colclip is active.";
    "StereoUniversalRequireBlendMix" => false, "Require Blend Mix", "Universal fix: only allow stereoscopy when blend mix paths are active.";
    "StereoUniversalRequirePabe" => false, "Require PABE", "Universal fix: only allow stereoscopy when PABE is enabled.";
    "StereoUniversalRequireFbMask" => false, "Require FB Mask", "Universal fix: only allow stereoscopy when framebuffer masking is active.";
    "StereoUniversalRequireTexIsFb" => false, "Require Tex-is-FB", "Universal fix: only allow stereoscopy when sampling the framebuffer.";
    "StereoUniversalRequireNoColor" => false, "Require No Color Output", "Universal fix: only allow stereoscopy for depth-only draws.";
    "StereoUniversalRequireNoColor1" => false, "Require No Color Output 1", "Universal fix: only allow stereoscopy when secondary color output is disabled.";
    "StereoUniversalRequireAemFmt" => false, "Require AEM Format", "Universal fix: only allow stereoscopy when AEM format is non-zero.";
    "StereoUniversalRequirePalFmt" => false, "Require PAL Format", "Universal fix: only allow stereoscopy when PAL format is non-zero.";
    "StereoUniversalRequireDstFmt" => false, "Require DST Format", "Universal fix: only allow stereoscopy when destination format is non-zero.";
    "StereoUniversalRequireDepthFmt" => false, "Require Depth Format", "Universal fix: only allow stereoscopy when depth format is non-zero.";
    "StereoUniversalRequireAem" => false, "Require AEM", "Universal fix: only allow stereoscopy when AEM is enabled.";
    "StereoUniversalRequireFba" => false, "Require FBA", "Universal fix: only allow stereoscopy when FBA is enabled.";
    "StereoUniversalRequireFog" => false, "Require Fog", "Universal fix: only allow stereoscopy when fog is enabled.";
    "StereoUniversalRequireIip" => false, "Require IIP", "Universal fix: only allow stereoscopy when IIP (Gouraud) is enabled.";
    "StereoUniversalRequireDate" => false, "Require DATE", "Universal fix: only allow stereoscopy when DATE is enabled.";
    "StereoUniversalRequireAtst" => false, "Require ATST", "Universal fix: only allow stereoscopy when ATST is non-zero.";
    "StereoUniversalRequireAfail" => false, "Require AFAIL", "Universal fix: only allow stereoscopy when AFAIL is non-zero.";
    "StereoUniversalRequireFst" => false, "Require FST", "Universal fix: only allow stereoscopy when FST is enabled.";
    "StereoUniversalRequireTfx" => false, "Require TFX", "Universal fix: only allow stereoscopy when TFX is non-zero.";
    "StereoUniversalRequireTcc" => false, "Require TCC", "Universal fix: only allow stereoscopy when TCC is enabled.";
    "StereoUniversalRequireWms" => false, "Require WMS", "Universal fix: only allow stereoscopy when WMS is non-zero.";
    "StereoUniversalRequireWmt" => false, "Require WMT", "Universal fix: only allow stereoscopy when WMT is non-zero.";
    "StereoUniversalRequireAdjs" => false, "Require ADJS", "Universal fix: only allow stereoscopy when ADJS is enabled.";
    "StereoUniversalRequireAdjt" => false, "Require ADJT", "Universal fix: only allow stereoscopy when ADJT is enabled.";
    "StereoUniversalRequireLtf" => false, "Require LTF", "Universal fix: only allow stereoscopy when LTF is enabled.";
    "StereoUniversalRequireShuffle" => false, "Require Shuffle", "Universal fix: only allow stereoscopy when shuffle is active.";
    "StereoUniversalRequireShuffleSame" => false, "Require Shuffle Same", "Universal fix: only allow stereoscopy when shuffle same is active.";
    "StereoUniversalRequireReal16Src" => false, "Require Real16 Src", "Universal fix: only allow stereoscopy when real16 source is active.";
    "StereoUniversalRequireProcessBa" => false, "Require Process BA", "Universal fix: only allow stereoscopy when process BA is non-zero.";
    "StereoUniversalRequireProcessRg" => false, "Require Process RG", "Universal fix: only allow stereoscopy when process RG is non-zero.";
    "StereoUniversalRequireShuffleAcross" => false, "Require Shuffle Across", "Universal fix: only allow stereoscopy when shuffle across is active.";
    "StereoUniversalRequireWriteRg" => false, "Require Write RG", "Universal fix: only allow stereoscopy when write RG is active.";
    "StereoUniversalRequireBlendA" => false, "Require Blend A", "Universal fix: only allow stereoscopy when blend A is non-zero.";
    "StereoUniversalRequireBlendB" => false, "Require Blend B", "Universal fix: only allow stereoscopy when blend B is non-zero.";
    "StereoUniversalRequireBlendC" => false, "Require Blend C", "Universal fix: only allow stereoscopy when blend C is non-zero.";
    "StereoUniversalRequireBlendD" => false, "Require Blend D", "Universal fix: only allow stereoscopy when blend D is non-zero.";
    "StereoUniversalRequireFixedOneA" => false, "Require Fixed One A", "Universal fix: only allow stereoscopy when fixed-one-A is active.";
    "StereoUniversalRequireBlendHw" => false, "Require Blend HW", "Universal fix: only allow stereoscopy when blend HW is non-zero.";
    "StereoUniversalRequireAMasked" => false, "Require A Masked", "Universal fix: only allow stereoscopy when alpha is masked.";
    "StereoUniversalRequireRoundInv" => false, "Require Round Inv", "Universal fix: only allow stereoscopy when round inversion is active.";
    "StereoUniversalRequireChannel" => false, "Require Channel", "Universal fix: only allow stereoscopy when channel fetch is non-zero.";
    "StereoUniversalRequireChannelFb" => false, "Require Channel FB", "Universal fix: only allow stereoscopy when channel fetch from FB is active.";
    "StereoUniversalRequireDither" => false, "Require Dither", "Universal fix: only allow stereoscopy when dither is non-zero.";
    "StereoUniversalRequireDitherAdjust" => false, "Require Dither Adjust", "Universal fix: only allow stereoscopy when dither adjust is active.";
    "StereoUniversalRequireZClamp" => false, "Require Z Clamp", "Universal fix: only allow stereoscopy when Z clamp is enabled.";
    "StereoUniversalRequireZFloor" => false, "Require Z Floor", "Universal fix: only allow stereoscopy when Z floor is enabled.";
    "StereoUniversalRequireTCOffsetHack" => false, "Require TC Offset Hack", "Universal fix: only allow stereoscopy when TC offset hack is active.";
    "StereoUniversalRequireUrbanChaosHle" => false, "Require Urban Chaos HLE", "Universal fix: only allow stereoscopy when Urban Chaos HLE path is active.";
    "StereoUniversalRequireTalesOfAbyssHle" => false, "Require Tales of Abyss HLE", "Universal fix: only allow stereoscopy when Tales of Abyss HLE path is active.";
    "StereoUniversalRequireAutomaticLod" => false, "Require Automatic LOD", "Universal fix: only allow stereoscopy when automatic LOD is active.";
    "StereoUniversalRequireManualLod" => false, "Require Manual LOD", "Universal fix: only allow stereoscopy when manual LOD is active.";
    "StereoUniversalRequirePointSampler" => false, "Require Point Sampler", "Universal fix: only allow stereoscopy when point sampling is active.";
    "StereoUniversalRequireRegionRect" => false, "Require Region Rect", "Universal fix: only allow stereoscopy when region rect path is active.";
    "StereoUniversalRequireScanmask" => false, "Require Scanmask", "Universal fix: only allow stereoscopy when scanmask is non-zero.";
    "StereoUniversalRequireAlphaBlend" => false, "Require Alpha Blend", "Universal fix: only allow stereoscopy when alpha blending is enabled.";
    "StereoUniversalRequireAlphaTest" => false, "Require Alpha Test", "Universal fix: only allow stereoscopy when alpha test is enabled.";
    "StereoUniversalRequireDatm" => false, "Require DATM", "Universal fix: only allow stereoscopy when DATM is enabled.";
    "StereoUniversalRequireZTest" => false, "Require Z Test", "Universal fix: only allow stereoscopy when Z testing is enabled.";
    "StereoUniversalRequireZWrite" => false, "Require Z Write", "Universal fix: only allow stereoscopy when Z writes are enabled.";
    "StereoUniversalRequireZTestAlways" => false, "Require Z Test Always", "Universal fix: only allow stereoscopy when Z test is set to ALWAYS.";
    "StereoUniversalRequireZTestNever" => false, "Require Z Test Never", "Universal fix: only allow stereoscopy when Z test is set to NEVER.";
    "StereoUniversalRequireAa1" => false, "Require AA1", "Universal fix: only allow stereoscopy when AA1 is enabled.";
    "StereoUniversalRequireChannelShuffle" => false, "Require Channel Shuffle", "Universal fix: only allow stereoscopy when channel shuffle is active.";
    "StereoUniversalRequireTextureShuffle" => false, "Require Texture Shuffle", "Universal fix: only allow stereoscopy when texture shuffle is active.";
    "StereoUniversalRequireFullscreenShuffle" => false, "Require Fullscreen Shuffle", "Universal fix: only allow stereoscopy when fullscreen shuffle is active.";
    "StereoUniversalRequirePoints" => false, "Require Points", "Universal fix: only allow stereoscopy when point primitives are used.";
    "StereoUniversalRequireLines" => false, "Require Lines", "Universal fix: only allow stereoscopy when line primitives are used.";
    "StereoUniversalRequireTriangles" => false, "Require Triangles", "Universal fix: only allow stereoscopy when triangle primitives are used.";
    "StereoUniversalRequireSprites" => false, "Require Sprites", "Universal fix: only allow stereoscopy when sprite primitives are used.";
    "StereoUniversalRequireFixedQ" => false, "Require Fixed Q", "Universal fix: only allow stereoscopy when Q is constant across the draw.";
    "StereoUniversalRequireFixedZ" => false, "Require Fixed Z", "Universal fix: only allow stereoscopy when Z is constant across the draw.";
    "StereoUniversalRequireConstantColor" => false, "Require Constant Color", "Universal fix: only allow stereoscopy when color is constant across the draw.";
    "StereoRejectBlendMix" => false, "Reject Blend Mix", "Disable stereoscopy when blend mix paths are active.";
    "StereoRejectPabe" => false, "Reject PABE", "Disable stereoscopy when per-pixel alpha blend is enabled.";
    "StereoRejectDither" => false, "Reject Dither", "Disable stereoscopy when dithering is enabled.";
    "StereoRejectScanmask" => false, "Reject Scanmask", "Disable stereoscopy when scanmask is enabled.";
    "StereoRejectRegionRect" => false, "Reject Region Rect", "Disable stereoscopy when a region rectangle path is used.";
    "StereoRejectNoColorOutput" => false, "Reject No Color Output", "Disable stereoscopy for depth-only or no-color outputs.";
    "StereoRejectHleShuffle" => false, "Reject HLE Shuffle", "Disable stereoscopy for HLE shuffle effects.";
    "StereoRejectTCOffsetHack" => false, "Reject TC Offset Hack", "Disable stereoscopy when texture coordinate offsets are hacked.";
    "StereoRejectPoints" => false, "Reject Points", "Disable stereoscopy for point primitives.";
    "StereoRejectLines" => false, "Reject Lines", "Disable stereoscopy for line primitives.";
    "StereoRejectFlatShading" => false, "Reject Flat Shading", "Disable stereoscopy when flat shading is used.";
    "StereoRejectFst" => false, "Reject Fixed ST", "Disable stereoscopy when fixed texture coordinates are used (Gran Turismo 4, Need for Speed series)";
    "StereoEnableOptions" => false, "Enable options", "Enable additional stereoscopy options.";
    "StereoRemoveFixedSt" => false, "Remove Fixed ST", "Force remove when fixed texture coordinates are used.";
    "StereoRejectFixedQ" => false, "Reject Fixed Q", "Disable stereoscopy when Q is constant across the draw.";
    "StereoRejectAa1" => false, "Reject AA1", "Disable stereoscopy when AA1 is enabled.";
    "StereoRejectNoZTest" => false, "Reject No Z Test", "Disable stereoscopy when Z testing is disabled.";
    "StereoRejectNoZWrite" => false, "Reject No Z Write", "Disable stereoscopy when Z writes are masked.";
    "StereoRejectZTestAlways" => false, "Reject Z Test Always", "Disable stereoscopy when Z test is set to ALWAYS.";
    "StereoRejectZTestNever" => false, "Reject Z Test Never", "Disable stereoscopy when Z test is set to NEVER.";
    "StereoRejectAlphaTestOff" => false, "Reject Alpha Test Off", "Disable stereoscopy when alpha test is disabled.";
    "StereoRejectAlphaTestAlways" => false, "Reject Alpha Test Always", "Disable stereoscopy when alpha test is set to ALWAYS.";
    "StereoRejectAlphaTestNever" => false, "Reject Alpha Test Never", "Disable stereoscopy when alpha test is set to NEVER.";
    "StereoRejectTfxModulate" => false, "Reject TFX Modulate", "Disable stereoscopy when TFX is MODULATE.";
    "StereoRejectTfxDecal" => false, "Reject TFX Decal", "Disable stereoscopy when TFX is DECAL (Tekken 5)";
    "StereoRejectTfxHighlight" => false, "Reject TFX Highlight", "Disable stereoscopy when TFX is HIGHLIGHT.";
    "StereoRejectTfxHighlight2" => false, "Reject TFX Highlight2", "Disable stereoscopy when TFX is HIGHLIGHT2.";
    "StereoRejectSmallDrawArea" => false, "Reject Small Draw Area", "Disable stereoscopy for small draw rectangles (useful for overlay debugging).";
    "StereoRejectWideDrawBand" => false, "Reject Wide Draw Band", "Disable stereoscopy for wide, short draw bands (mirror-style overlays).";
    "StereoRejectTopDrawBand" => false, "Reject Top Draw Band", "Disable stereoscopy for top-of-screen draw bands.";
    "StereoRejectRtSpriteNoDepth" => false, "Reject RT Sprite (No Z Test)", "Disable stereoscopy for RT-backed sprite draws without Z testing.";
    "StereoRejectRtSpriteAlphaBlend" => false, "Reject RT Sprite (Alpha Blend)", "Disable stereoscopy for RT-backed sprite draws using alpha blending.";
    "StereoRequireProcessTexture" => false, "Require Process Texture", "Disable stereoscopy unless the draw actually processes a texture.";
    "StereoRejectProcessTexture" => false, "Reject Process Texture", "Disable stereoscopy when the draw processes a texture.";
    "StereoRequireSourceFromTarget" => false, "Require Texture From Target", "Disable stereoscopy unless the source texture comes from a render target.";
    "StereoRejectSourceFromTarget" => false, "Reject Texture From Target", "Disable stereoscopy when the source texture comes from a render target.";
    "StereoRequireDrawUsesTarget" => false, "Require Draw Uses Target", "Disable stereoscopy unless the draw samples from the current target.";
    "StereoRejectDrawUsesTarget" => false, "Reject Draw Uses Target", "Disable stereoscopy when the draw samples from the current target.";
    "StereoRequireTexIsRt" => false, "Require Texture Is RT", "Disable stereoscopy unless the texture overlaps the render target.";
    "StereoRejectTexIsRt" => false, "Reject Texture Is RT", "Disable stereoscopy when the texture overlaps the render target.";
    "StereoRequireInTargetDraw" => false, "Require In-Target Draw", "Disable stereoscopy unless the draw is offset inside a target.";
    "StereoRejectInTargetDraw" => false, "Reject In-Target Draw", "Disable stereoscopy when the draw is offset inside a target.";
    "StereoRequireTempZ" => false, "Require Temp Z", "Disable stereoscopy unless a temporary Z buffer is used.";
    "StereoRejectTempZ" => false, "Reject Temp Z", "Disable stereoscopy when a temporary Z buffer is used.";
    "StereoRequireOneBarrier" => false, "Require One Barrier", "Disable stereoscopy unless a single barrier is required.";
    "StereoRejectOneBarrier" => false, "Reject One Barrier", "Disable stereoscopy when a single barrier is required.";
    "StereoRequireFullBarrier" => false, "Require Full Barrier", "Disable stereoscopy unless a full barrier is required.";
    "StereoRejectFullBarrier" => false, "Reject Full Barrier", "Disable stereoscopy when a full barrier is required.";
    "StereoRequireSinglePass" => false, "Require Single Pass", "Disable stereoscopy unless the draw is single-pass.";
    "StereoRejectSinglePass" => false, "Reject Single Pass", "Disable stereoscopy when the draw is single-pass.";
    "StereoRequireFullscreenDrawArea" => false, "Require Full Draw Area", "Disable stereoscopy unless the draw area is fullscreen.";
    "StereoRejectFullscreenDrawArea" => false, "Reject Full Draw Area", "Disable stereoscopy when the draw area is fullscreen.";
    "StereoRequireFullscreenSprite" => false, "Require Fullscreen Sprite", "Disable stereoscopy unless the draw is a fullscreen sprite.";
    "StereoRejectFullscreenSprite" => false, "Reject Fullscreen Sprite", "Disable stereoscopy when the draw is a fullscreen sprite.";
    "StereoRequireTexturedSprite" => false, "Require Textured Sprite", "Disable stereoscopy unless the draw is a textured sprite.";
    "StereoRejectTexturedSprite" => false, "Reject Textured Sprite", "Disable stereoscopy when the draw is a textured sprite.";
    "StereoRequireRtOutput" => false, "Require RT Output", "Disable stereoscopy unless the draw writes to the render target.";
    "StereoRejectRtOutput" => false, "Reject RT Output", "Disable stereoscopy when the draw writes to the render target.";
    "StereoRequireDepthOutput" => false, "Require Depth Output", "Disable stereoscopy unless the draw writes depth.";
    "StereoRejectDepthOutput" => false, "Reject Depth Output", "Disable stereoscopy when the draw writes depth.";
    "StereoRequireDepthRead" => false, "Require Depth Read", "Disable stereoscopy unless the draw reads depth.";
    "StereoRejectDepthRead" => false, "Reject Depth Read", "Disable stereoscopy when the draw reads depth.";
    "StereoRequireDepthWrite" => false, "Require Depth Write", "Disable stereoscopy unless depth writes are effective.";
    "StereoRejectDepthWrite" => false, "Reject Depth Write", "Disable stereoscopy when depth writes are effective.";
    "StereoRequirePalettedTexture" => false, "Require Paletted Texture", "Disable stereoscopy unless a paletted texture is used.";
    "StereoRejectPalettedTexture" => false, "Reject Paletted Texture", "Disable stereoscopy when a paletted texture is used.";
    "StereoRequireDepthTexture" => false, "Require Depth Texture", "Disable stereoscopy unless a depth texture is used.";
    "StereoRejectDepthTexture" => false, "Reject Depth Texture", "Disable stereoscopy when a depth texture is used.";
    "StereoRequireMipmap" => false, "Require Mipmap", "Disable stereoscopy unless mipmapping is active.";
    "StereoRejectMipmap" => false, "Reject Mipmap", "Disable stereoscopy when mipmapping is active.";
    "StereoRequireLinearSampling" => false, "Require Linear Sampling", "Disable stereoscopy unless linear filtering is used.";
    "StereoRejectLinearSampling" => false, "Reject Linear Sampling", "Disable stereoscopy when linear filtering is used.";
    "StereoRequireFmvActive" => false, "Require IPU FMV Active", "Disable stereoscopy unless the IPU FMV flag is active.";
    "StereoRejectFmvActive" => false, "Reject IPU FMV Active", "Disable stereoscopy when the IPU FMV flag is active.";
    "StereoRequireFmvHeuristic" => false, "Require Heuristic Match", "Disable stereoscopy unless the FMV heuristic detects a movie-style draw.";
    "StereoRejectFmvHeuristic" => false, "Reject Heuristic Match", "Disable stereoscopy when the FMV heuristic detects a movie-style draw.";
    "StereoRequireFmvSprite" => false, "Require Sprite Primitive", "Disable stereoscopy unless the draw is a sprite primitive.";
    "StereoRejectFmvSprite" => false, "Reject Sprite Primitive", "Disable stereoscopy for sprite primitives.";
    "StereoRequireFmvSingleSprite" => false, "Require Single Sprite", "Disable stereoscopy unless the draw is a single sprite (two vertices).";
    "StereoRejectFmvSingleSprite" => false, "Reject Single Sprite", "Disable stereoscopy for single-sprite draws.";
    "StereoRequireFmvTextureMapping" => false, "Require Texture Mapping", "Disable stereoscopy unless texture mapping is enabled.";
    "StereoRejectFmvTextureMapping" => false, "Reject Texture Mapping", "Disable stereoscopy when texture mapping is enabled.";
    "StereoRequireFmvProcessTexture" => false, "Require Process Texture", "Disable stereoscopy unless the draw processes a texture.";
    "StereoRejectFmvProcessTexture" => false, "Reject Process Texture", "Disable stereoscopy when the draw processes a texture.";
    "StereoRequireFmvFullscreenDrawArea" => false, "Require Full Draw Area", "Disable stereoscopy unless the draw area is fullscreen.";
    "StereoRejectFmvFullscreenDrawArea" => false, "Reject Full Draw Area", "Disable stereoscopy when the draw area is fullscreen.";
    "StereoRequireFmvFullscreenScissor" => false, "Require Full Scissor", "Disable stereoscopy unless the scissor covers the fullscreen rectangle.";
    "StereoRejectFmvFullscreenScissor" => false, "Reject Full Scissor", "Disable stereoscopy when the scissor covers the fullscreen rectangle.";
    "StereoRequireFmvNoAlphaBlend" => false, "Require No Alpha Blend", "Disable stereoscopy unless alpha blending is disabled.";
    "StereoRejectFmvNoAlphaBlend" => false, "Reject No Alpha Blend", "Disable stereoscopy when alpha blending is disabled.";
    "StereoRequireFmvNoAlphaTest" => false, "Require No Alpha Test", "Disable stereoscopy unless alpha testing is disabled.";
    "StereoRejectFmvNoAlphaTest" => false, "Reject No Alpha Test", "Disable stereoscopy when alpha testing is disabled.";
    "StereoRequireFmvNoDepthTest" => false, "Require No Z Test", "Disable stereoscopy unless Z testing is disabled.";
    "StereoRejectFmvNoDepthTest" => false, "Reject No Z Test", "Disable stereoscopy when Z testing is disabled.";
    "StereoRequireFmvNoDepthWrite" => false, "Require No Z Write", "Disable stereoscopy unless Z writes are disabled.";
    "StereoRejectFmvNoDepthWrite" => false, "Reject No Z Write", "Disable stereoscopy when Z writes are disabled.";
    "StereoRequireFmvNoDepthOutput" => false, "Require No Depth Output", "Disable stereoscopy unless the draw does not write depth.";
    "StereoRejectFmvNoDepthOutput" => false, "Reject No Depth Output", "Disable stereoscopy when the draw does not write depth.";
    "StereoRequireFmvNoDepthRead" => false, "Require No Depth Read", "Disable stereoscopy unless the draw does not read depth.";
    "StereoRejectFmvNoDepthRead" => false, "Reject No Depth Read", "Disable stereoscopy when the draw does not read depth.";
    "StereoRequireFmvNoFbMask" => false, "Require No FB Mask", "Disable stereoscopy unless the framebuffer mask is clear.";
    "StereoRejectFmvNoFbMask" => false, "Reject No FB Mask", "Disable stereoscopy when the framebuffer mask is clear.";
    "StereoRequireFmvColorOutput" => false, "Require Color Output", "Disable stereoscopy unless the draw outputs color.";
    "StereoRejectFmvColorOutput" => false, "Reject Color Output", "Disable stereoscopy when the draw outputs color.";
    "StereoRequireFmvSourceNotFromTarget" => false, "Require Source Not From Target", "Disable stereoscopy unless the texture source is not a render target.";
    "StereoRejectFmvSourceNotFromTarget" => false, "Reject Source Not From Target", "Disable stereoscopy when the texture source is not a render target.";
    "StereoRequireFmvDrawMatchesTex" => false, "Require Draw Matches Texture", "Disable stereoscopy unless draw and texture sizes match (within 2px).";
    "StereoRejectFmvDrawMatchesTex" => false, "Reject Draw Matches Texture", "Disable stereoscopy when draw and texture sizes match (within 2px).";
    "StereoRequireFmvNoShuffle" => false, "Require No Shuffle", "Disable stereoscopy unless no shuffle path is active.";
    "StereoRejectFmvNoShuffle" => false, "Reject No Shuffle", "Disable stereoscopy when no shuffle path is active.";
    "StereoRequireFmvNoMipmap" => false, "Require No Mipmap", "Disable stereoscopy unless mipmapping is inactive.";
    "StereoRejectFmvNoMipmap" => false, "Reject No Mipmap", "Disable stereoscopy when mipmapping is inactive.";
    "StereoRequireFmvLinearSampling" => false, "Require Linear Sampling", "Disable stereoscopy unless linear sampling is used.";
    "StereoRejectFmvLinearSampling" => false, "Reject Linear Sampling", "Disable stereoscopy when linear sampling is used.";
    "StereoRequireFmvEeUpload" => false, "Require EE Upload", "Disable stereoscopy unless the texture was recently uploaded by EE transfers.";
    "StereoRejectFmvEeUpload" => false, "Reject EE Upload", "Disable stereoscopy when the texture was recently uploaded by EE transfers.";
    "StereoRequireFmvDisplayMatch" => false, "Require Display Match", "Disable stereoscopy unless the draw matches an active display buffer.";
    "StereoRejectFmvDisplayMatch" => false, "Reject Display Match", "Disable stereoscopy when the draw matches an active display buffer.";
    "StereoRequireFmvRecentEeUpload" => false, "Require Recent EE Upload", "Disable stereoscopy unless a matching EE upload occurred within the last 5 draws.";
    "StereoRejectFmvRecentEeUpload" => false, "Reject Recent EE Upload", "Disable stereoscopy when a matching EE upload occurred within the last 5 draws.";
    "StereoRequireFmvRecentTransferDraw" => false, "Require Recent Transfer Draw", "Disable stereoscopy unless a transfer happened within the last 2 draws.";
    "StereoRejectFmvRecentTransferDraw" => false, "Reject Recent Transfer Draw", "Disable stereoscopy when a transfer happened within the last 2 draws.";
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn flag_names_are_unique() {
        let names: HashSet<_> = STEREO_FLAGS.iter().map(|flag| flag.key.name).collect();
        assert_eq!(names.len(), STEREO_FLAGS.len());
    }

    #[test]
    fn display_buffer_requirements_default_on() {
        let flag = STEREO_FLAGS
            .iter()
            .find(|flag| flag.key.name == "StereoRequireDisplayBuffer1")
            .unwrap();
        assert!(flag.key.default);
        assert_eq!(flag.recommended(), "Checked");
        assert_eq!(flag.group(), "Require Heuristics");
    }

    #[test]
    fn fmv_flags_are_grouped_together() {
        assert!(STEREO_FLAGS
            .iter()
            .filter(|flag| flag.key.name.contains("Fmv"))
            .all(|flag| flag.group() == "FMV Detection"));
    }
}
