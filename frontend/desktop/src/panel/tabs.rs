/// A tab bar whose tabs can be hidden; exactly one visible tab is current.
pub struct TabHost<T> {
    tabs: Vec<(T, bool)>,
    current: T,
}

impl<T: Copy + PartialEq> TabHost<T> {
    /// All tabs start out visible.
    pub fn new(tabs: &[T], current: T) -> Self {
        TabHost {
            tabs: tabs.iter().map(|tab| (*tab, true)).collect(),
            current,
        }
    }

    pub fn current(&self) -> T {
        self.current
    }

    pub fn is_visible(&self, tab: T) -> bool {
        self.tabs.iter().any(|(t, visible)| *t == tab && *visible)
    }

    pub fn visible_tabs(&self) -> impl Iterator<Item = T> + '_ {
        self.tabs
            .iter()
            .filter(|(_, visible)| *visible)
            .map(|(tab, _)| *tab)
    }

    /// Makes `tab` current if it's visible. Returns whether it is now current.
    pub fn select(&mut self, tab: T) -> bool {
        if self.is_visible(tab) {
            self.current = tab;
            true
        } else {
            false
        }
    }

    /// Shows or hides `tab`; hiding the current tab moves the selection to `fallback`.
    pub fn set_visible(&mut self, tab: T, visible: bool, fallback: T) {
        let Some(entry) = self.tabs.iter_mut().find(|(t, _)| *t == tab) else {
            return;
        };
        entry.1 = visible;
        if !visible && self.current == tab {
            self.current = fallback;
            if !self.is_visible(fallback) {
                let first = self.visible_tabs().next();
                if let Some(first) = first {
                    self.current = first;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hiding_the_current_tab_selects_the_fallback() {
        let mut tabs = TabHost::new(&['d', 'h', 's'], 'h');
        tabs.set_visible('s', false, 'd');
        assert_eq!(tabs.current(), 'h');
        tabs.set_visible('h', false, 'd');
        assert_eq!(tabs.current(), 'd');
        assert_eq!(tabs.visible_tabs().collect::<Vec<_>>(), ['d']);
    }

    #[test]
    fn hidden_fallbacks_fall_through_to_the_first_visible_tab() {
        let mut tabs = TabHost::new(&['d', 'h', 'f'], 'f');
        tabs.set_visible('h', false, 'd');
        tabs.set_visible('f', false, 'h');
        assert_eq!(tabs.current(), 'd');
    }

    #[test]
    fn hidden_tabs_cant_be_selected() {
        let mut tabs = TabHost::new(&['d', 'h'], 'd');
        tabs.set_visible('h', false, 'd');
        assert!(!tabs.select('h'));
        tabs.set_visible('h', true, 'd');
        assert!(tabs.select('h'));
        assert_eq!(tabs.current(), 'h');
    }
}
