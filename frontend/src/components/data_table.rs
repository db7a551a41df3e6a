use dashboard_widgets::{Property, RawValue, WidgetKind};
use yew::prelude::*;

use super::bind;
use super::bound_widget::BoundWidget;

#[derive(Properties, PartialEq)]
pub struct DataTableProps {
    #[prop_or_default]
    pub headers: Option<RawValue>,
    #[prop_or_default]
    pub rows: Option<RawValue>,
    #[prop_or(240.0)]
    pub height: f64,
}

/// Plain-text table; cell values are never interpreted as markup
#[function_component(DataTable)]
pub fn data_table(props: &DataTableProps) -> Html {
    let bindings = bind(&[(Property::Headers, &props.headers), (Property::Rows, &props.rows)]);
    html! {
        <BoundWidget kind={WidgetKind::DataTable} {bindings} height={props.height} />
    }
}
