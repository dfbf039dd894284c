use core::fmt;

/// Where a resolved value came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Origin {
    Global,
    Game,
}

/// A type that can be stored as the scalar text of a settings entry.
pub trait Value: Copy {
    type Owned: Clone + PartialEq + fmt::Debug;

    fn parse(raw: &str) -> Option<Self::Owned>;
    fn format(value: &Self::Owned) -> String;
    fn to_owned_value(self) -> Self::Owned;
}

pub fn parse_bool(raw: &str) -> Option<bool> {
    let raw = raw.trim();
    if raw.eq_ignore_ascii_case("true") || raw == "1" {
        Some(true)
    } else if raw.eq_ignore_ascii_case("false") || raw == "0" {
        Some(false)
    } else {
        None
    }
}

impl Value for bool {
    type Owned = bool;

    fn parse(raw: &str) -> Option<bool> {
        parse_bool(raw)
    }

    fn format(value: &bool) -> String {
        if *value { "true" } else { "false" }.to_string()
    }

    fn to_owned_value(self) -> bool {
        self
    }
}

impl Value for i32 {
    type Owned = i32;

    fn parse(raw: &str) -> Option<i32> {
        raw.trim().parse().ok()
    }

    fn format(value: &i32) -> String {
        value.to_string()
    }

    fn to_owned_value(self) -> i32 {
        self
    }
}

impl Value for f32 {
    type Owned = f32;

    fn parse(raw: &str) -> Option<f32> {
        raw.trim().parse::<f32>().ok().filter(|v| v.is_finite())
    }

    fn format(value: &f32) -> String {
        value.to_string()
    }

    fn to_owned_value(self) -> f32 {
        self
    }
}

impl Value for &'static str {
    type Owned = String;

    fn parse(raw: &str) -> Option<String> {
        Some(raw.to_string())
    }

    fn format(value: &String) -> String {
        value.clone()
    }

    fn to_owned_value(self) -> String {
        self.to_string()
    }
}

/// A typed settings key: section, name and the value used when neither layer holds it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Key<T: Value> {
    pub section: &'static str,
    pub name: &'static str,
    pub default: T,
}

impl<T: Value> Key<T> {
    pub const fn new(section: &'static str, name: &'static str, default: T) -> Self {
        Key {
            section,
            name,
            default,
        }
    }

    pub fn default_value(&self) -> T::Owned {
        self.default.to_owned_value()
    }

    pub fn parse_or_default(&self, raw: Option<&str>) -> T::Owned {
        raw.and_then(T::parse)
            .unwrap_or_else(|| self.default_value())
    }
}

impl<T: Value> fmt::Display for Key<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.section, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bools_accept_numeric_and_mixed_case_text() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" 0 "), Some(false));
        assert_eq!(parse_bool("yes"), None);
    }

    #[test]
    fn unparseable_values_fall_back_to_the_default() {
        let key = Key::new("EmuCore/GS", "StretchY", 100.0_f32);
        assert_eq!(key.parse_or_default(Some("abc")), 100.0);
        assert_eq!(key.parse_or_default(Some("nan")), 100.0);
        assert_eq!(key.parse_or_default(Some("87.5")), 87.5);
        assert_eq!(key.parse_or_default(None), 100.0);
    }

    #[test]
    fn string_keys_own_their_default() {
        let key = Key::new("EmuCore/GS", "CaptureContainer", "mp4");
        assert_eq!(key.default_value(), "mp4".to_string());
        assert_eq!(key.to_string(), "EmuCore/GS/CaptureContainer");
    }
}
