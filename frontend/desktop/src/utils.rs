use gsconf_core::host::{Environment, HostFlags};
use std::{
    path::{Path, PathBuf},
    sync::LazyLock,
};

macro_rules! style {
    ($ui: expr, $ident: ident) => {
        unsafe { $ui.style() }.$ident
    };
}

macro_rules! error {
    (yes_no, $title: expr, $($desc: tt)*) => {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title($title)
            .set_description(&format!($($desc)*))
            .set_buttons(rfd::MessageButtons::YesNo)
            .show()
        == rfd::MessageDialogResult::Yes
    };
    ($title: expr, $($desc: tt)*) => {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title($title)
            .set_description(&format!($($desc)*))
            .set_buttons(rfd::MessageButtons::Ok)
            .show()
    };
}

pub struct BaseDirs {
    pub config: PathBuf,
    pub data: PathBuf,
}

static BASE_DIRS: LazyLock<BaseDirs> = LazyLock::new(|| {
    if let Some(base_dirs) = directories::BaseDirs::new() {
        BaseDirs {
            config: base_dirs.config_dir().join("gsconf"),
            data: base_dirs.data_local_dir().join("gsconf"),
        }
    } else {
        BaseDirs {
            config: Path::new("/.config/gsconf").to_path_buf(),
            data: Path::new("/.local/share/gsconf").to_path_buf(),
        }
    }
});

pub fn base_dirs<'a>() -> &'a BaseDirs {
    &BASE_DIRS
}

/// This machine's environment, with relative folders resolved against the data directory.
pub fn host_environment(show_advanced_settings: bool) -> Environment {
    let mut flags = HostFlags::for_target();
    flags.set(HostFlags::ADVANCED_SETTINGS, show_advanced_settings);
    Environment {
        flags,
        data_root: base_dirs().data.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advanced_settings_are_opt_in() {
        assert!(host_environment(true).show_advanced_settings());
        let env = host_environment(false);
        assert!(!env.show_advanced_settings());
        assert!(env.data_root.ends_with("gsconf"));
    }
}
