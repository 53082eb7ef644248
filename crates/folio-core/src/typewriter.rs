//! Typewriter effect over a list of role titles.
//!
//! Types a role one character at a time, holds it, deletes it, then moves on
//! to the next role (wrapping). The machine is pure: the caller owns the timer
//! and sleeps for each frame's `delay`.

use std::time::Duration;

pub const TYPE_DELAY: Duration = Duration::from_millis(100);
pub const DELETE_DELAY: Duration = Duration::from_millis(50);
pub const PAUSE_DELAY: Duration = Duration::from_millis(2000);

/// What to show now and how long until the next tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub delay: Duration,
}

#[derive(Debug, Clone)]
pub struct Typewriter {
    roles: Vec<Vec<char>>,
    index: usize,
    shown: usize,
    deleting: bool,
    cycles: usize,
}

impl Typewriter {
    pub fn new<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            roles: roles
                .into_iter()
                .map(|r| r.as_ref().chars().collect())
                .collect(),
            index: 0,
            shown: 0,
            deleting: false,
            cycles: 0,
        }
    }

    /// Index of the role currently being typed or deleted.
    pub fn role_index(&self) -> usize {
        self.index
    }

    /// Number of times the last role has been deleted and the list wrapped.
    pub fn cycles_completed(&self) -> usize {
        self.cycles
    }

    /// Advances one step.
    pub fn tick(&mut self) -> Frame {
        let Some(role_len) = self.roles.get(self.index).map(Vec::len) else {
            return Frame {
                text: String::new(),
                delay: PAUSE_DELAY,
            };
        };

        let delay = if !self.deleting {
            if self.shown < role_len {
                self.shown += 1;
                if self.shown == role_len {
                    PAUSE_DELAY
                } else {
                    TYPE_DELAY
                }
            } else if self.shown == 0 {
                self.next_role();
                TYPE_DELAY
            } else {
                self.deleting = true;
                self.shown -= 1;
                self.after_delete()
            }
        } else if self.shown > 0 {
            self.shown -= 1;
            self.after_delete()
        } else {
            self.next_role();
            TYPE_DELAY
        };

        Frame {
            text: self.text(),
            delay,
        }
    }

    fn after_delete(&mut self) -> Duration {
        if self.shown == 0 {
            self.next_role();
            TYPE_DELAY
        } else {
            DELETE_DELAY
        }
    }

    fn next_role(&mut self) {
        self.deleting = false;
        self.shown = 0;
        self.index += 1;
        if self.index >= self.roles.len() {
            self.index = 0;
            self.cycles += 1;
        }
    }

    fn text(&self) -> String {
        match self.roles.get(self.index) {
            Some(role) => role[..self.shown.min(role.len())].iter().collect(),
            None => String::new(),
        }
    }
}
