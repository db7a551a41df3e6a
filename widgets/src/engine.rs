//! # Rendering Engine Seam
//!
//! The drawing engine (ECharts in the browser, a DOM table builder, or a test
//! double) sits behind two traits. A backend creates one handle per surface;
//! the widget owns that handle exclusively until it destroys it.

use std::fmt;
use thiserror::Error;
use uuid::Uuid;

use crate::config::RenderConfig;

/// Size of the widget's layout box in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutBox {
    pub width: f64,
    pub height: f64,
}

impl LayoutBox {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Identity of one allocated surface. Fresh on every mount, never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SurfaceId(Uuid);

impl SurfaceId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Element id for the surface's container in a DOM host
    pub fn dom_id(&self) -> String {
        format!("widget-surface-{}", self.0)
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    Chart,
    Table,
}

/// Drawing target allocated for one mounted widget
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub id: SurfaceId,
    pub kind: SurfaceKind,
    pub layout: LayoutBox,
}

impl Surface {
    pub(crate) fn allocate(kind: SurfaceKind, layout: LayoutBox) -> Self {
        Self {
            id: SurfaceId::new(),
            kind,
            layout,
        }
    }
}

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("rendering engine unavailable: {0}")]
    Unavailable(String),
    #[error("no drawing target for surface {0}")]
    SurfaceMissing(SurfaceId),
    #[error("widget is already mounted on surface {0}")]
    AlreadyMounted(SurfaceId),
}

/// A live engine instance bound to one surface
pub trait RenderHandle {
    /// Replace whatever is drawn with `config`
    fn configure(&mut self, config: &RenderConfig);

    /// The surface's layout box changed
    fn resize(&mut self, surface: &Surface);

    /// Release the engine instance. Consumes the handle.
    fn destroy(self);
}

/// Creates engine instances against freshly allocated surfaces
pub trait RenderBackend {
    type Handle: RenderHandle;

    fn create(&mut self, surface: &Surface) -> Result<Self::Handle, EngineError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_ids_are_unique() {
        let a = Surface::allocate(SurfaceKind::Chart, LayoutBox::new(800.0, 400.0));
        let b = Surface::allocate(SurfaceKind::Chart, LayoutBox::new(800.0, 400.0));
        assert_ne!(a.id, b.id);
        assert_ne!(a.id.dom_id(), b.id.dom_id());
        assert!(a.id.dom_id().starts_with("widget-surface-"));
    }
}
