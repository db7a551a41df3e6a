//! # Widget Instance
//!
//! Binds a [`PropertyStore`] to one exclusively owned engine handle and drives
//! the re-render pipeline: store, normalize, adapt, configure.
//!
//! ## Lifecycle:
//! - `Unmounted`: writes are stored, nothing is drawn
//! - `Mounted`: a fresh surface and handle exist; every write renders
//!   synchronously before `set` returns
//!
//! A write that fails to normalize is stored but leaves the drawn frame and the
//! lifecycle untouched. The next corrected write is the only recovery path.

use log::{debug, error, info, warn};
use shared::RawValue;
use std::mem;
use thiserror::Error;

use crate::config::RenderConfig;
use crate::engine::{EngineError, LayoutBox, RenderBackend, RenderHandle, Surface};
use crate::kind::WidgetKind;
use crate::normalize::{InputWarning, NormalizationError};
use crate::property::{Property, PropertyStore, UnknownProperty};
use crate::style::StylePolicy;

#[derive(Debug, Error)]
pub enum PropertyError {
    #[error("{widget} has no {property} property")]
    Unbound {
        widget: &'static str,
        property: Property,
    },
    #[error(transparent)]
    Unknown(#[from] UnknownProperty),
}

/// What a render pass did
#[derive(Debug)]
pub enum RenderOutcome {
    /// A fresh configuration reached the engine
    Rendered,
    /// Not mounted; nothing was drawn
    Detached,
    /// Input not ready; the previous frame stays on screen
    Skipped(NormalizationError),
}

impl RenderOutcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, RenderOutcome::Rendered)
    }

    pub fn error(&self) -> Option<&NormalizationError> {
        match self {
            RenderOutcome::Skipped(err) => Some(err),
            _ => None,
        }
    }
}

/// Observable lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetState {
    Unmounted,
    /// Mounted, no frame drawn yet
    Awaiting,
    /// Mounted with a drawn frame, redrawn `updates` times since the first
    Rendered { updates: usize },
}

enum Lifecycle<H> {
    Unmounted,
    Mounted {
        surface: Surface,
        handle: H,
        frames: usize,
    },
}

pub struct Widget<H: RenderHandle> {
    kind: WidgetKind,
    style: StylePolicy,
    store: PropertyStore,
    lifecycle: Lifecycle<H>,
    warnings: Vec<InputWarning>,
}

impl<H: RenderHandle> Widget<H> {
    pub fn new(kind: WidgetKind) -> Self {
        Self {
            kind,
            style: StylePolicy::default(),
            store: PropertyStore::new(),
            lifecycle: Lifecycle::Unmounted,
            warnings: Vec::new(),
        }
    }

    pub fn with_style(mut self, style: StylePolicy) -> Self {
        self.style = style;
        self
    }

    pub fn kind(&self) -> WidgetKind {
        self.kind
    }

    /// Allocate a fresh surface, start an engine on it and draw whatever
    /// inputs are already stored.
    pub fn mount<B>(&mut self, backend: &mut B, layout: LayoutBox) -> Result<RenderOutcome, EngineError>
    where
        B: RenderBackend<Handle = H>,
    {
        if let Lifecycle::Mounted { surface, .. } = &self.lifecycle {
            warn!("{}: mount ignored, already on surface {}", self.kind.tag(), surface.id);
            return Err(EngineError::AlreadyMounted(surface.id));
        }

        let surface = Surface::allocate(self.kind.surface_kind(), layout);
        let handle = backend.create(&surface).map_err(|err| {
            error!("{}: failed to start engine: {}", self.kind.tag(), err);
            err
        })?;

        info!("📊 {} mounted on surface {}", self.kind.tag(), surface.id);
        self.lifecycle = Lifecycle::Mounted {
            surface,
            handle,
            frames: 0,
        };
        Ok(self.render())
    }

    /// Destroy the engine handle. Safe to call any number of times.
    pub fn unmount(&mut self) {
        match mem::replace(&mut self.lifecycle, Lifecycle::Unmounted) {
            Lifecycle::Mounted { surface, handle, .. } => {
                handle.destroy();
                info!("📊 {} unmounted from surface {}", self.kind.tag(), surface.id);
            }
            Lifecycle::Unmounted => debug!("{}: unmount while not mounted", self.kind.tag()),
        }
    }

    /// Store a raw value and render right away
    pub fn set(&mut self, property: Property, value: impl Into<RawValue>) -> Result<RenderOutcome, PropertyError> {
        if !self.kind.binds(property) {
            return Err(PropertyError::Unbound {
                widget: self.kind.tag(),
                property,
            });
        }
        self.store.set(property, value.into());
        Ok(self.render())
    }

    /// `set` by attribute name, as written in host markup
    pub fn set_named(&mut self, name: &str, value: impl Into<RawValue>) -> Result<RenderOutcome, PropertyError> {
        let property = name.parse::<Property>()?;
        self.set(property, value)
    }

    pub fn get(&self, property: Property) -> Option<&RawValue> {
        self.store.get(property)
    }

    /// Forget a stored value and render what is left
    pub fn unset(&mut self, property: Property) -> Result<RenderOutcome, PropertyError> {
        if !self.kind.binds(property) {
            return Err(PropertyError::Unbound {
                widget: self.kind.tag(),
                property,
            });
        }
        self.store.remove(property);
        Ok(self.render())
    }

    /// Forward a new layout box to the engine. Returns false when not mounted.
    pub fn resize(&mut self, layout: LayoutBox) -> bool {
        match &mut self.lifecycle {
            Lifecycle::Mounted { surface, handle, .. } => {
                surface.layout = layout;
                handle.resize(surface);
                true
            }
            Lifecycle::Unmounted => false,
        }
    }

    pub fn set_style(&mut self, style: StylePolicy) -> RenderOutcome {
        self.style = style;
        self.render()
    }

    /// One full pass of the pipeline against the live handle
    pub fn render(&mut self) -> RenderOutcome {
        let tag = self.kind.tag();
        let Lifecycle::Mounted { handle, frames, .. } = &mut self.lifecycle else {
            debug!("{}: not mounted, render skipped", tag);
            return RenderOutcome::Detached;
        };

        match self.kind.normalize(&self.store) {
            Ok(normalized) => {
                for warning in &normalized.warnings {
                    warn!("{}: {}", tag, warning);
                }
                let config = normalized.payload.to_config(&self.style);
                handle.configure(&config);
                *frames += 1;
                self.warnings = normalized.warnings;
                RenderOutcome::Rendered
            }
            Err(err) => {
                if err.is_expected() {
                    debug!("{}: waiting for input, {}", tag, err);
                } else {
                    error!("{}: keeping last frame, {}", tag, err);
                }
                RenderOutcome::Skipped(err)
            }
        }
    }

    /// The configuration the current inputs would produce, without touching the engine
    pub fn build_config(&self) -> Result<RenderConfig, NormalizationError> {
        let normalized = self.kind.normalize(&self.store)?;
        Ok(normalized.payload.to_config(&self.style))
    }

    pub fn state(&self) -> WidgetState {
        match &self.lifecycle {
            Lifecycle::Unmounted => WidgetState::Unmounted,
            Lifecycle::Mounted { frames: 0, .. } => WidgetState::Awaiting,
            Lifecycle::Mounted { frames, .. } => WidgetState::Rendered {
                updates: frames - 1,
            },
        }
    }

    pub fn is_mounted(&self) -> bool {
        matches!(self.lifecycle, Lifecycle::Mounted { .. })
    }

    pub fn surface(&self) -> Option<&Surface> {
        match &self.lifecycle {
            Lifecycle::Mounted { surface, .. } => Some(surface),
            Lifecycle::Unmounted => None,
        }
    }

    /// Warnings of the last successful render
    pub fn warnings(&self) -> &[InputWarning] {
        &self.warnings
    }
}

impl<H: RenderHandle> Drop for Widget<H> {
    fn drop(&mut self) {
        self.unmount();
    }
}
