//! # Bound Widget Component
//!
//! Yew host for one `Widget`. The component lifecycle drives the widget:
//! - first `rendered` mounts it against a fresh container inside the host `div`
//! - `changed` issues one `set` per binding whose value changed, in order,
//!   then drops bindings the host no longer supplies
//! - `destroy` unmounts it
//!
//! Each instance owns exactly one window resize listener, registered on mount
//! and dropped on destroy.

use dashboard_widgets::{Property, RawValue, RenderOutcome, StylePolicy, Widget, WidgetKind};
use gloo::events::EventListener;
use web_sys::Element;
use yew::prelude::*;

use super::dropped;
use crate::engine::{layout_of, DomBackend, DomHandle};
use crate::services::Logger;

/// Property values in the order the host applies them
pub type Bindings = Vec<(Property, RawValue)>;

#[derive(Properties, PartialEq)]
pub struct BoundWidgetProps {
    pub kind: WidgetKind,
    #[prop_or_default]
    pub bindings: Bindings,
    #[prop_or_default]
    pub style: StylePolicy,
    /// Surface height in CSS pixels; width follows the host element
    #[prop_or(320.0)]
    pub height: f64,
    #[prop_or_default]
    pub class: Classes,
}

pub enum Msg {
    Resize,
}

pub struct BoundWidget {
    host: NodeRef,
    widget: Widget<DomHandle>,
    resize_listener: Option<EventListener>,
}

impl BoundWidget {
    fn component(&self) -> &'static str {
        self.widget.kind().tag()
    }

    fn host(&self) -> Option<Element> {
        self.host.cast::<Element>()
    }

    fn apply(&mut self, property: Property, value: RawValue) {
        match self.widget.set(property, value) {
            Ok(RenderOutcome::Rendered) => Logger::debug_with_component(
                self.component(),
                &format!("redrawn after {} update", property),
            ),
            // Detached and skipped renders are logged by the widget itself
            Ok(_) => {}
            Err(err) => Logger::error_with_component(self.component(), &err.to_string()),
        }
    }

    fn unset(&mut self, property: Property) {
        match self.widget.unset(property) {
            Ok(_) => Logger::debug_with_component(
                self.component(),
                &format!("{} binding removed", property),
            ),
            Err(err) => Logger::error_with_component(self.component(), &err.to_string()),
        }
    }

    fn resize(&mut self, ctx: &Context<Self>) {
        if let Some(host) = self.host() {
            self.widget.resize(layout_of(&host, ctx.props().height));
        }
    }

    fn mount(&mut self, ctx: &Context<Self>) {
        let Some(host) = self.host() else {
            Logger::error_with_component(self.component(), "host element missing, not mounting");
            return;
        };

        let layout = layout_of(&host, ctx.props().height);
        let mut backend = DomBackend::new(host);
        if let Err(err) = self.widget.mount(&mut backend, layout) {
            Logger::error_with_component(self.component(), &format!("mount failed: {}", err));
            return;
        }

        let link = ctx.link().clone();
        self.resize_listener = Some(EventListener::new(&gloo::utils::window(), "resize", move |_| {
            link.send_message(Msg::Resize)
        }));
    }

    fn unmount(&mut self) {
        self.resize_listener = None;
        self.widget.unmount();
    }

    fn fresh_widget(props: &BoundWidgetProps) -> Widget<DomHandle> {
        let mut widget = Widget::new(props.kind).with_style(props.style.clone());
        for (property, value) in &props.bindings {
            if let Err(err) = widget.set(*property, value.clone()) {
                Logger::error_with_component(props.kind.tag(), &err.to_string());
            }
        }
        widget
    }
}

impl Component for BoundWidget {
    type Message = Msg;
    type Properties = BoundWidgetProps;

    fn create(ctx: &Context<Self>) -> Self {
        Self {
            host: NodeRef::default(),
            widget: Self::fresh_widget(ctx.props()),
            resize_listener: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Resize => {
                self.resize(ctx);
                false
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();

        if props.kind != old_props.kind {
            // A different kind needs a different surface
            self.unmount();
            self.widget = Self::fresh_widget(props);
            self.mount(ctx);
            return true;
        }

        if props.style != old_props.style {
            self.widget.set_style(props.style.clone());
        }

        for (property, value) in &props.bindings {
            let previous = old_props
                .bindings
                .iter()
                .find(|(old, _)| old == property)
                .map(|(_, old_value)| old_value);
            if previous != Some(value) {
                self.apply(*property, value.clone());
            }
        }
        for property in dropped(&old_props.bindings, &props.bindings) {
            self.unset(property);
        }

        if props.height != old_props.height {
            self.resize(ctx);
        }

        props.class != old_props.class
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let kind = ctx.props().kind;
        html! {
            <div
                ref={self.host.clone()}
                class={classes!("bound-widget", kind.tag(), ctx.props().class.clone())}
                data-widget={kind.tag()}
            ></div>
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.mount(ctx);
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.unmount();
    }
}
