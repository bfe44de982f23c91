use std::time::Duration;

use anyhow::Result;

use crate::types::{FrameInput, MenuEvent};

/// Input collaborator contract.
pub trait InputSource {
    /// Drain everything that arrived since the previous call and report the
    /// quit signal plus the flight keys held right now. Never blocks.
    fn poll_frame(&mut self) -> Result<FrameInput>;

    /// Wait up to `timeout` for the next menu navigation event.
    fn next_menu_event(&mut self, timeout: Duration) -> Result<Option<MenuEvent>>;
}
