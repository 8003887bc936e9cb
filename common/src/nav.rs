// mobile menu state
//
// the same "open" class goes on both the nav element and its toggle button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    // following a nav link only collapses the menu on narrow viewports; returns
    // true if the menu was open and is now closed
    pub fn close_for_link(&mut self, viewport_width: f64, breakpoint: f64) -> bool {
        if viewport_width <= breakpoint && self.open {
            self.open = false;
            return true;
        }
        false
    }

    pub fn class(&self, base: &str) -> String {
        if self.open {
            format!("{base} open")
        } else {
            base.to_owned()
        }
    }
}
