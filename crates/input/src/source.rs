//! crossterm-backed [`InputSource`].

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

use crate::engine::InputSource;
use crate::held::HeldKeyTracker;
use crate::map::{flight_key, menu_event, should_quit};
use crate::types::{FrameInput, MenuEvent};

pub struct CrosstermInput {
    held: HeldKeyTracker,
}

impl CrosstermInput {
    /// `release_events`: the terminal was switched into a mode that reports
    /// key releases.
    pub fn new(release_events: bool) -> Self {
        Self::with_tracker(HeldKeyTracker::new().with_release_events(release_events))
    }

    pub fn with_tracker(held: HeldKeyTracker) -> Self {
        Self { held }
    }

    /// Feed one key event into the held-key state. Returns true on quit.
    pub fn apply_key(&mut self, key: KeyEvent, at: Instant) -> bool {
        match key.kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                if key.kind == KeyEventKind::Press && should_quit(key) {
                    return true;
                }
                if let Some(k) = flight_key(key.code) {
                    self.held.press(k, at);
                }
            }
            KeyEventKind::Release => {
                if let Some(k) = flight_key(key.code) {
                    self.held.release(k);
                }
            }
        }
        false
    }

    pub fn held(&self) -> &HeldKeyTracker {
        &self.held
    }
}

impl InputSource for CrosstermInput {
    fn poll_frame(&mut self) -> Result<FrameInput> {
        let mut quit = false;
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                quit |= self.apply_key(key, Instant::now());
            }
        }
        Ok(FrameInput {
            quit,
            keys: self.held.snapshot(Instant::now()),
        })
    }

    fn next_menu_event(&mut self, timeout: Duration) -> Result<Option<MenuEvent>> {
        if !event::poll(timeout)? {
            return Ok(None);
        }
        let event = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => menu_event(key),
            _ => None,
        };
        // Menu keys must not leak into the next session as held keys.
        self.held.reset();
        Ok(event)
    }
}
