//! Signal-backed surface the connection manager renders through.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use leptos::prelude::{RwSignal, Update};

use crate::net::link::Surface;
use crate::state::link::{ConnectionStatus, LinkState};
use crate::state::notice::{Notice, NoticeSink, NoticeState};

#[derive(Clone, Copy, Debug)]
pub struct SignalSurface {
    pub notice: RwSignal<NoticeState>,
    pub link: RwSignal<LinkState>,
}

impl SignalSurface {
    pub fn new(notice: RwSignal<NoticeState>, link: RwSignal<LinkState>) -> Self {
        Self { notice, link }
    }
}

impl NoticeSink for SignalSurface {
    fn show(&self, notice: Notice) {
        self.notice.show(notice);
    }
}

impl Surface for SignalSurface {
    fn set_status(&self, status: ConnectionStatus) {
        self.link.update(|l| l.transition(status));
    }
}
