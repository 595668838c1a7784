use std::sync::mpsc;

use recruit_core::{update, Msg, Session, SessionViewModel};
use recruit_engine::{ApiError, ApiSettings, EngineHandle};
use recruit_logging::recruit_debug;

use crate::clipboard::Clipboard;
use crate::effects::EffectRunner;

/// Owns the session and drives it: host events in, effects out, engine and
/// timer completions back in.
///
/// All transitions run on the thread that calls [`App::dispatch`] and
/// [`App::pump`].
pub struct App {
    state: Session,
    runner: EffectRunner,
    msg_tx: mpsc::Sender<Msg>,
    msg_rx: mpsc::Receiver<Msg>,
}

impl App {
    pub fn new(settings: ApiSettings, clipboard: Box<dyn Clipboard>) -> Result<Self, ApiError> {
        let engine = EngineHandle::new(settings)?;
        Ok(Self::with_engine(engine, clipboard))
    }

    pub fn with_engine(engine: EngineHandle, clipboard: Box<dyn Clipboard>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel();
        let runner = EffectRunner::new(engine, clipboard, msg_tx.clone());
        Self {
            state: Session::new(),
            runner,
            msg_tx,
            msg_rx,
        }
    }

    /// Sender for host event handlers living on other threads.
    pub fn sender(&self) -> mpsc::Sender<Msg> {
        self.msg_tx.clone()
    }

    pub fn session(&self) -> &Session {
        &self.state
    }

    pub fn view(&self) -> SessionViewModel {
        self.state.view()
    }

    pub fn consume_dirty(&mut self) -> bool {
        self.state.consume_dirty()
    }

    pub fn dispatch(&mut self, msg: Msg) {
        recruit_debug!("dispatch {}", msg_name(&msg));
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);
    }

    /// Applies every pending engine completion and queued message. Returns
    /// how many messages were processed.
    pub fn pump(&mut self) -> usize {
        let mut inbox = Vec::new();
        while let Some(msg) = self.runner.poll_engine() {
            inbox.push(msg);
        }
        while let Ok(msg) = self.msg_rx.try_recv() {
            inbox.push(msg);
        }
        let processed = inbox.len();
        for msg in inbox {
            self.dispatch(msg);
        }
        processed
    }
}

fn msg_name(msg: &Msg) -> &'static str {
    match msg {
        Msg::JdTextChanged(_) => "JdTextChanged",
        Msg::JdFileSelected(_) => "JdFileSelected",
        Msg::ModeSelected(_) => "ModeSelected",
        Msg::GeneratorFieldChanged(_) => "GeneratorFieldChanged",
        Msg::ResumesSelected(_) => "ResumesSelected",
        Msg::MatchClicked => "MatchClicked",
        Msg::GenerateClicked => "GenerateClicked",
        Msg::MatchCompleted { .. } => "MatchCompleted",
        Msg::GenerateCompleted { .. } => "GenerateCompleted",
        Msg::CandidateSelected(_) => "CandidateSelected",
        Msg::EmailFieldEdited { .. } => "EmailFieldEdited",
        Msg::CopyClicked { .. } => "CopyClicked",
        Msg::CopyFinished { .. } => "CopyFinished",
        Msg::NotificationExpired { .. } => "NotificationExpired",
        Msg::NoOp => "NoOp",
    }
}
