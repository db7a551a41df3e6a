//! # DOM Rendering Backend
//!
//! Implements the widget crate's engine seam for the browser. Every mounted
//! widget gets its own container `div` inside its host element; charts are
//! drawn by an ECharts instance bound to that container, tables are built as
//! plain DOM nodes.
//!
//! ## Key Components:
//! - **DomBackend**: creates a container plus engine instance per surface
//! - **DomHandle**: the live engine for one surface (chart or table)

pub mod echarts;
pub mod table;

use anyhow::anyhow;
use dashboard_widgets::{
    EngineError, LayoutBox, RenderBackend, RenderConfig, RenderHandle, Surface, SurfaceKind,
};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, HtmlElement};

use self::echarts::EChartsHandle;
use self::table::TableHandle;

/// Fallback box when the host has not been laid out yet
pub const DEFAULT_LAYOUT: LayoutBox = LayoutBox {
    width: 600.0,
    height: 320.0,
};

pub(crate) fn js_error(err: JsValue) -> anyhow::Error {
    match err.as_string() {
        Some(message) => anyhow!(message),
        None => anyhow!("{:?}", err),
    }
}

/// Layout box of a host element, with `height` chosen by the host
pub fn layout_of(host: &Element, height: f64) -> LayoutBox {
    let width = f64::from(host.client_width());
    LayoutBox {
        width: if width > 0.0 { width } else { DEFAULT_LAYOUT.width },
        height: if height > 0.0 { height } else { DEFAULT_LAYOUT.height },
    }
}

pub(crate) fn apply_layout(container: &HtmlElement, layout: LayoutBox) -> anyhow::Result<()> {
    let style = container.style();
    style
        .set_property("width", &format!("{}px", layout.width))
        .map_err(js_error)?;
    style
        .set_property("height", &format!("{}px", layout.height))
        .map_err(js_error)?;
    Ok(())
}

pub struct DomBackend {
    host: Element,
}

impl DomBackend {
    pub fn new(host: Element) -> Self {
        Self { host }
    }

    fn create_container(&self, surface: &Surface) -> anyhow::Result<HtmlElement> {
        let container = gloo::utils::document()
            .create_element("div")
            .map_err(js_error)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| anyhow!("surface container is not an HTML element"))?;
        container.set_id(&surface.id.dom_id());
        container.set_class_name("widget-surface");
        apply_layout(&container, surface.layout)?;
        self.host.append_child(&container).map_err(js_error)?;
        Ok(container)
    }
}

impl RenderBackend for DomBackend {
    type Handle = DomHandle;

    fn create(&mut self, surface: &Surface) -> Result<Self::Handle, EngineError> {
        if !self.host.is_connected() {
            return Err(EngineError::SurfaceMissing(surface.id));
        }
        let container = self
            .create_container(surface)
            .map_err(|err| EngineError::Unavailable(format!("{:#}", err)))?;

        match surface.kind {
            SurfaceKind::Table => Ok(DomHandle::Table(TableHandle::new(container))),
            SurfaceKind::Chart => match EChartsHandle::init(container.clone()) {
                Ok(chart) => Ok(DomHandle::Chart(chart)),
                Err(err) => {
                    container.remove();
                    Err(EngineError::Unavailable(format!("{:#}", err)))
                }
            },
        }
    }
}

pub enum DomHandle {
    Chart(EChartsHandle),
    Table(TableHandle),
}

impl RenderHandle for DomHandle {
    fn configure(&mut self, config: &RenderConfig) {
        let result = match (&*self, config) {
            (DomHandle::Chart(chart), RenderConfig::Chart(option)) => chart.set_option(option),
            (DomHandle::Table(table), RenderConfig::Table(model)) => table.draw(model),
            _ => Err(anyhow!("configuration does not match the surface kind")),
        };
        if let Err(err) = result {
            log::error!("engine: configure failed: {:#}", err);
        }
    }

    fn resize(&mut self, surface: &Surface) {
        let result = match &*self {
            DomHandle::Chart(chart) => chart.resize(surface.layout),
            DomHandle::Table(table) => table.resize(surface.layout),
        };
        if let Err(err) = result {
            log::warn!("engine: resize failed: {:#}", err);
        }
    }

    fn destroy(self) {
        match self {
            DomHandle::Chart(chart) => chart.dispose(),
            DomHandle::Table(table) => table.remove(),
        }
    }
}

