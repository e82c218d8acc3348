//! Mobile navigation menu state

/// Open/closed state of the collapsible mobile menu
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    is_open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_closed() {
        assert!(!MenuState::default().is_open());
    }

    #[test]
    fn test_toggle_twice_is_identity() {
        for initial in [false, true] {
            let mut menu = MenuState { is_open: initial };
            menu.toggle();
            assert_eq!(menu.is_open(), !initial);
            menu.toggle();
            assert_eq!(menu.is_open(), initial);
        }
    }
}
