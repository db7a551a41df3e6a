//! ECharts bindings. The library is loaded by the host page as the global `echarts`.

use anyhow::anyhow;
use dashboard_widgets::{ChartOption, LayoutBox};
use js_sys::{Array, Function, Reflect, JSON};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

use super::{apply_layout, js_error};

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(catch, js_namespace = echarts, js_name = init)]
    fn echarts_init(dom: &HtmlElement) -> Result<JsValue, JsValue>;
}

/// One ECharts instance, exclusively bound to its container
pub struct EChartsHandle {
    container: HtmlElement,
    instance: JsValue,
}

impl EChartsHandle {
    pub fn init(container: HtmlElement) -> anyhow::Result<Self> {
        let instance = echarts_init(&container).map_err(js_error)?;
        if instance.is_null() || instance.is_undefined() {
            return Err(anyhow!("echarts.init returned no instance"));
        }
        Ok(Self {
            container,
            instance,
        })
    }

    fn call(&self, method: &str, args: &Array) -> anyhow::Result<JsValue> {
        let func = Reflect::get(&self.instance, &JsValue::from_str(method))
            .map_err(js_error)?
            .dyn_into::<Function>()
            .map_err(|_| anyhow!("echarts instance has no {} method", method))?;
        func.apply(&self.instance, args).map_err(js_error)
    }

    /// Replace the drawn frame. `notMerge` is set so series from a previous
    /// option never linger.
    pub fn set_option(&self, option: &ChartOption) -> anyhow::Result<()> {
        let json = serde_json::to_string(option)?;
        let option = JSON::parse(&json).map_err(js_error)?;
        self.call("setOption", &Array::of2(&option, &JsValue::TRUE))?;
        Ok(())
    }

    pub fn resize(&self, layout: LayoutBox) -> anyhow::Result<()> {
        apply_layout(&self.container, layout)?;
        self.call("resize", &Array::new())?;
        Ok(())
    }

    pub fn dispose(self) {
        if let Err(err) = self.call("dispose", &Array::new()) {
            log::warn!("engine: dispose failed: {:#}", err);
        }
        self.container.remove();
    }
}
