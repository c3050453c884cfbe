//! Realtime link status as seen by the UI.

#[cfg(test)]
#[path = "link_test.rs"]
mod link_test;

/// Status gem color while the socket is open.
pub const CONNECTED_COLOR: &str = "#00ff00";
/// Status gem color after the socket closed.
pub const DISCONNECTED_COLOR: &str = "#ff0000";

/// WebSocket connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    /// No attempt made yet.
    #[default]
    Idle,
    /// Socket created, handshake in progress.
    Connecting,
    /// Socket is open.
    Open,
    /// Socket closed or failed; a retry is pending.
    Closed,
}

impl ConnectionStatus {
    /// Color the status gem switches to on entering this status.
    ///
    /// `Idle` and `Connecting` leave the gem as it was.
    pub fn indicator_color(self) -> Option<&'static str> {
        match self {
            Self::Open => Some(CONNECTED_COLOR),
            Self::Closed => Some(DISCONNECTED_COLOR),
            Self::Idle | Self::Connecting => None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkState {
    pub status: ConnectionStatus,
    /// Connection attempts since page load.
    pub attempts: u64,
    /// Last color applied to the status gem.
    pub indicator: Option<&'static str>,
}

impl LinkState {
    pub fn transition(&mut self, status: ConnectionStatus) {
        if status == ConnectionStatus::Connecting {
            self.attempts += 1;
        }
        if let Some(color) = status.indicator_color() {
            self.indicator = Some(color);
        }
        self.status = status;
    }
}
