/// Engine doubles for lifecycle tests
///
/// `RecordingBackend` hands out handles that append every engine call to a
/// shared `EngineLog`, so a test can assert exactly what reached the engine
/// and in which order. `FailingBackend` refuses to create anything.

use std::cell::RefCell;
use std::rc::Rc;

use crate::config::RenderConfig;
use crate::engine::{EngineError, LayoutBox, RenderBackend, RenderHandle, Surface, SurfaceId};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Create(SurfaceId),
    Configure(SurfaceId, RenderConfig),
    Resize(SurfaceId, LayoutBox),
    Destroy(SurfaceId),
}

/// Shared, append-only record of engine calls
#[derive(Debug, Clone, Default)]
pub struct EngineLog(Rc<RefCell<Vec<EngineCall>>>);

impl EngineLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, call: EngineCall) {
        self.0.borrow_mut().push(call);
    }

    pub fn calls(&self) -> Vec<EngineCall> {
        self.0.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    /// Every configuration pushed to the engine, oldest first
    pub fn configs(&self) -> Vec<RenderConfig> {
        self.0
            .borrow()
            .iter()
            .filter_map(|call| match call {
                EngineCall::Configure(_, config) => Some(config.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn last_config(&self) -> Option<RenderConfig> {
        self.configs().pop()
    }

    pub fn count_configures(&self) -> usize {
        self.0
            .borrow()
            .iter()
            .filter(|call| matches!(call, EngineCall::Configure(..)))
            .count()
    }

    /// Surfaces that were created but not destroyed yet
    pub fn live_handles(&self) -> Vec<SurfaceId> {
        let calls = self.0.borrow();
        calls
            .iter()
            .filter_map(|call| match call {
                EngineCall::Create(id) => Some(*id),
                _ => None,
            })
            .filter(|id| !calls.contains(&EngineCall::Destroy(*id)))
            .collect()
    }
}

#[derive(Debug, Clone, Default)]
pub struct RecordingBackend {
    pub log: EngineLog,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderBackend for RecordingBackend {
    type Handle = RecordingHandle;

    fn create(&mut self, surface: &Surface) -> Result<Self::Handle, EngineError> {
        self.log.push(EngineCall::Create(surface.id));
        Ok(RecordingHandle {
            surface: surface.id,
            log: self.log.clone(),
        })
    }
}

#[derive(Debug)]
pub struct RecordingHandle {
    surface: SurfaceId,
    log: EngineLog,
}

impl RenderHandle for RecordingHandle {
    fn configure(&mut self, config: &RenderConfig) {
        self.log.push(EngineCall::Configure(self.surface, config.clone()));
    }

    fn resize(&mut self, surface: &Surface) {
        self.log.push(EngineCall::Resize(self.surface, surface.layout));
    }

    fn destroy(self) {
        self.log.push(EngineCall::Destroy(self.surface));
    }
}

/// Backend whose engine never comes up (script not loaded, no host element)
#[derive(Debug, Clone, Default)]
pub struct FailingBackend;

impl RenderBackend for FailingBackend {
    type Handle = RecordingHandle;

    fn create(&mut self, _surface: &Surface) -> Result<Self::Handle, EngineError> {
        Err(EngineError::Unavailable("engine not loaded".to_string()))
    }
}
