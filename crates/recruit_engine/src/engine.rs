use std::sync::{mpsc, Arc};
use std::thread;

use recruit_logging::{recruit_error, recruit_info, recruit_warn};

use crate::client::{RecruitApi, ReqwestApiClient};
use crate::{
    ApiError, ApiFailureKind, ApiSettings, EngineEvent, GenerateJdRequest, MatchRequest,
    RequestGeneration,
};

enum EngineCommand {
    Match {
        generation: RequestGeneration,
        request: MatchRequest,
    },
    Generate {
        generation: RequestGeneration,
        request: GenerateJdRequest,
    },
}

/// Enough of a command to report its failure after the command is consumed.
#[derive(Debug, Clone, Copy)]
enum Pending {
    Match(RequestGeneration),
    Generate(RequestGeneration),
}

impl Pending {
    fn of(command: &EngineCommand) -> Self {
        match command {
            EngineCommand::Match { generation, .. } => Pending::Match(*generation),
            EngineCommand::Generate { generation, .. } => Pending::Generate(*generation),
        }
    }

    fn failed(self, err: ApiError) -> EngineEvent {
        match self {
            Pending::Match(generation) => EngineEvent::MatchCompleted {
                generation,
                result: Err(err),
            },
            Pending::Generate(generation) => EngineEvent::GenerateCompleted {
                generation,
                result: Err(err),
            },
        }
    }
}

/// Runs backend requests on a background tokio runtime.
///
/// Requests are never cancelled; every submission eventually yields exactly
/// one [`EngineEvent`] carrying its generation, including when the runtime is
/// unavailable or the request task panics.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    pub fn new(settings: ApiSettings) -> Result<Self, ApiError> {
        recruit_info!("engine targeting {}", settings.base_url);
        let client = ReqwestApiClient::new(settings)?;
        Ok(Self::with_api(Arc::new(client)))
    }

    pub fn with_api(api: Arc<dyn RecruitApi>) -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        let worker_tx = event_tx.clone();
        thread::spawn(move || run_worker(api, cmd_rx, worker_tx));

        Self {
            cmd_tx,
            event_tx,
            event_rx,
        }
    }

    pub fn submit_match(&self, generation: RequestGeneration, request: MatchRequest) {
        self.send(EngineCommand::Match {
            generation,
            request,
        });
    }

    pub fn submit_generate(&self, generation: RequestGeneration, request: GenerateJdRequest) {
        self.send(EngineCommand::Generate {
            generation,
            request,
        });
    }

    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    fn send(&self, command: EngineCommand) {
        let pending = Pending::of(&command);
        if self.cmd_tx.send(command).is_err() {
            recruit_error!("engine thread is gone; failing {:?}", pending);
            let err = ApiError::new(ApiFailureKind::Network, "request engine is not running");
            let _ = self.event_tx.send(pending.failed(err));
        }
    }
}

fn run_worker(
    api: Arc<dyn RecruitApi>,
    cmd_rx: mpsc::Receiver<EngineCommand>,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    let runtime = match tokio::runtime::Runtime::new() {
        Ok(runtime) => runtime,
        Err(err) => {
            recruit_error!("failed to start engine runtime: {}", err);
            // Keep answering so no submission waits forever.
            let message = format!("engine runtime unavailable: {err}");
            while let Ok(command) = cmd_rx.recv() {
                let err = ApiError::new(ApiFailureKind::Network, message.clone());
                let _ = event_tx.send(Pending::of(&command).failed(err));
            }
            return;
        }
    };

    while let Ok(command) = cmd_rx.recv() {
        let pending = Pending::of(&command);
        let task = runtime.spawn(handle_command(api.clone(), command));
        let event_tx = event_tx.clone();
        runtime.spawn(async move {
            let event = match task.await {
                Ok(event) => event,
                Err(join_err) => {
                    recruit_error!("{:?} request task failed: {}", pending, join_err);
                    let err = ApiError::new(
                        ApiFailureKind::Network,
                        format!("request task failed: {join_err}"),
                    );
                    pending.failed(err)
                }
            };
            let _ = event_tx.send(event);
        });
    }
}

async fn handle_command(api: Arc<dyn RecruitApi>, command: EngineCommand) -> EngineEvent {
    match command {
        EngineCommand::Match {
            generation,
            request,
        } => {
            let result = api.match_resumes(request).await;
            if let Err(err) = &result {
                recruit_warn!("match generation={} failed: {}", generation, err);
            }
            EngineEvent::MatchCompleted { generation, result }
        }
        EngineCommand::Generate {
            generation,
            request,
        } => {
            let result = api.generate_jd(request).await;
            if let Err(err) = &result {
                recruit_warn!("generate generation={} failed: {}", generation, err);
            }
            EngineEvent::GenerateCompleted { generation, result }
        }
    }
}
