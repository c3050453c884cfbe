//! Scripted transport, timer and surface for driving `link` without a browser.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::time::Duration;

use futures::FutureExt;
use futures::StreamExt;
use futures::channel::mpsc;
use futures::future::LocalBoxFuture;
use futures::stream::{self, LocalBoxStream};

use crate::net::link::{Attempt, LinkError, LinkEvent, Socket, Surface, Timer, Transport};
use crate::state::link::{ConnectionStatus, LinkState};
use crate::state::notice::{Notice, NoticeSink, NoticeState};

/// Ordered record of the side effects the loop performed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Step {
    Sleep(Duration),
    Open(String),
}

/// Shared journal of everything the manager did.
#[derive(Default)]
pub struct Journal {
    pub steps: RefCell<Vec<Step>>,
    pub notices: RefCell<Vec<Notice>>,
    pub statuses: RefCell<Vec<ConnectionStatus>>,
    pub notice_state: RefCell<NoticeState>,
    pub link_state: RefCell<LinkState>,
}

impl Journal {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn opens(&self) -> usize {
        self.steps.borrow().iter().filter(|s| matches!(s, Step::Open(_))).count()
    }

    pub fn notice_texts(&self) -> Vec<String> {
        self.notices.borrow().iter().map(|n| n.text.clone()).collect()
    }

    /// Gem colors in the order they were applied.
    pub fn colors(&self) -> Vec<&'static str> {
        self.statuses.borrow().iter().filter_map(|s| s.indicator_color()).collect()
    }
}

#[derive(Clone)]
pub struct RecordingSurface(pub Rc<Journal>);

impl NoticeSink for RecordingSurface {
    fn show(&self, notice: Notice) {
        self.0.notice_state.borrow_mut().show(notice.clone());
        self.0.notices.borrow_mut().push(notice);
    }
}

impl Surface for RecordingSurface {
    fn set_status(&self, status: ConnectionStatus) {
        self.0.link_state.borrow_mut().transition(status);
        self.0.statuses.borrow_mut().push(status);
    }
}

/// Timer that resolves immediately and journals the requested delay.
pub struct InstantTimer(pub Rc<Journal>);

impl Timer for InstantTimer {
    fn sleep(&self, delay: Duration) -> LocalBoxFuture<'static, ()> {
        self.0.steps.borrow_mut().push(Step::Sleep(delay));
        futures::future::ready(()).boxed_local()
    }
}

#[derive(Default)]
pub struct FakeSocket {
    pub open: Cell<bool>,
    pub reject_sends: Cell<bool>,
    pub sent: RefCell<Vec<String>>,
}

impl FakeSocket {
    pub fn opened() -> Rc<Self> {
        let socket = Self::default();
        socket.open.set(true);
        Rc::new(socket)
    }
}

impl Socket for FakeSocket {
    fn is_open(&self) -> bool {
        self.open.get()
    }

    fn send_text(&self, text: &str) -> Result<(), LinkError> {
        if self.reject_sends.get() {
            return Err(LinkError::Send("rejected".to_owned()));
        }
        self.sent.borrow_mut().push(text.to_owned());
        Ok(())
    }
}

/// Scripted outcome for one call to `Transport::open`.
pub enum Script {
    Events(LocalBoxStream<'static, LinkEvent>),
    Fail,
}

impl Script {
    /// Emit `events` in order, then end the stream.
    pub fn events(events: Vec<LinkEvent>) -> Self {
        Self::Events(stream::iter(events).boxed_local())
    }

    /// Attempt that opens, then fails straight away.
    pub fn refused() -> Self {
        Self::events(vec![LinkEvent::Closed])
    }

    /// Attempt whose events the test pushes by hand.
    pub fn live() -> (mpsc::UnboundedSender<LinkEvent>, Self) {
        let (tx, rx) = mpsc::unbounded();
        (tx, Self::Events(rx.boxed_local()))
    }
}

/// Transport that replays scripts in order. Once the scripts run out every
/// attempt stays pending forever, which parks the reconnect loop.
pub struct ScriptedTransport {
    journal: Rc<Journal>,
    scripts: RefCell<VecDeque<Script>>,
    pub sockets: RefCell<Vec<Rc<FakeSocket>>>,
}

impl ScriptedTransport {
    pub fn new(journal: Rc<Journal>, scripts: Vec<Script>) -> Rc<Self> {
        Rc::new(Self { journal, scripts: RefCell::new(scripts.into()), sockets: RefCell::new(Vec::new()) })
    }
}

impl Transport for Rc<ScriptedTransport> {
    fn open(&self, url: &str) -> Result<Attempt, LinkError> {
        self.journal.steps.borrow_mut().push(Step::Open(url.to_owned()));
        let events = match self.scripts.borrow_mut().pop_front() {
            Some(Script::Events(events)) => events,
            Some(Script::Fail) => return Err(LinkError::Open("refused".to_owned())),
            None => stream::pending().boxed_local(),
        };
        let socket = Rc::new(FakeSocket::default());
        self.sockets.borrow_mut().push(Rc::clone(&socket));
        Ok(Attempt { socket, events })
    }
}
