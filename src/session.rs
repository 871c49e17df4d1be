//! Session-scoped lesson navigation.
//!
//! One [`Session`] per user; the current screen and the back history are an
//! owned value rather than ambient global state, so concurrent sessions
//! cannot observe each other.

use crate::component::CircleComponent;

/// One screen of the lesson flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    #[default]
    Menu,
    Lesson(CircleComponent),
}

/// Navigation state: the current screen plus an explicit back-history
/// stack.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    current: Screen,
    history: Vec<Screen>,
}

impl Session {
    pub const fn new() -> Self {
        Self { current: Screen::Menu, history: Vec::new() }
    }

    pub const fn current(&self) -> Screen {
        self.current
    }

    /// Number of screens the back button can still pop.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Navigate to `screen`, remembering where we came from.
    pub fn go_to(&mut self, screen: Screen) {
        self.history.push(self.current);
        self.current = screen;
    }

    /// Pop back to the previous screen; with an empty history this lands on
    /// the menu.
    pub fn back(&mut self) {
        self.current = self.history.pop().unwrap_or(Screen::Menu);
    }

    /// Return to the menu and forget the history.
    pub fn reset(&mut self) {
        self.current = Screen::Menu;
        self.history.clear();
    }

    /// Advance along the lesson chain; the menu leads to the first lesson
    /// and the last lesson wraps back to the menu.
    pub fn next(&mut self) {
        let target = match self.current {
            Screen::Menu => Screen::Lesson(CircleComponent::ALL[0]),
            Screen::Lesson(component) => {
                let index = position(component) + 1;
                match CircleComponent::ALL.get(index) {
                    Some(next) => Screen::Lesson(*next),
                    None => Screen::Menu,
                }
            },
        };
        self.go_to(target);
    }

    /// Step back along the lesson chain; the first lesson leads to the
    /// menu, and the menu stays put.
    pub fn prev(&mut self) {
        let target = match self.current {
            Screen::Menu => return,
            Screen::Lesson(component) => match position(component) {
                0 => Screen::Menu,
                index => Screen::Lesson(CircleComponent::ALL[index - 1]),
            },
        };
        self.go_to(target);
    }
}

fn position(component: CircleComponent) -> usize {
    CircleComponent::ALL
        .iter()
        .position(|c| *c == component)
        .unwrap_or(0)
}
