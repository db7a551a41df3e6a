//! Data table engine. Cells are inserted with `textContent`, never as markup.

use dashboard_widgets::{LayoutBox, TableModel, TableRow};
use web_sys::{Document, Element, HtmlElement};

use super::{apply_layout, js_error};

pub struct TableHandle {
    container: HtmlElement,
}

impl TableHandle {
    pub fn new(container: HtmlElement) -> Self {
        Self { container }
    }

    /// Build the new table completely, then swap it in
    pub fn draw(&self, model: &TableModel) -> anyhow::Result<()> {
        let document = gloo::utils::document();
        let table = build_table(&document, model)?;

        self.container.set_text_content(None);
        self.container.append_child(&table).map_err(js_error)?;
        Ok(())
    }

    pub fn resize(&self, layout: LayoutBox) -> anyhow::Result<()> {
        apply_layout(&self.container, layout)
    }

    pub fn remove(self) {
        self.container.remove();
    }
}

fn build_table(document: &Document, model: &TableModel) -> anyhow::Result<Element> {
    let table = document.create_element("table").map_err(js_error)?;
    table.set_class_name("data-table");

    let thead = document.create_element("thead").map_err(js_error)?;
    let head_row = build_row(document, "th", &model.head)?;
    thead.append_child(&head_row).map_err(js_error)?;
    table.append_child(&thead).map_err(js_error)?;

    let tbody = document.create_element("tbody").map_err(js_error)?;
    for row in &model.body {
        let body_row = build_row(document, "td", row)?;
        tbody.append_child(&body_row).map_err(js_error)?;
    }
    table.append_child(&tbody).map_err(js_error)?;

    Ok(table)
}

fn build_row(document: &Document, cell_tag: &str, row: &TableRow) -> anyhow::Result<Element> {
    let tr = document.create_element("tr").map_err(js_error)?;
    for text in &row.cells {
        let cell = document.create_element(cell_tag).map_err(js_error)?;
        cell.set_text_content(Some(text));
        tr.append_child(&cell).map_err(js_error)?;
    }
    Ok(tr)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn container() -> HtmlElement {
        let document = gloo::utils::document();
        let div = document
            .create_element("div")
            .unwrap()
            .dyn_into::<HtmlElement>()
            .unwrap();
        document.body().unwrap().append_child(&div).unwrap();
        div
    }

    fn model(head: &[&str], body: &[&[&str]]) -> TableModel {
        let row = |cells: &[&str]| TableRow::new(cells.iter().map(|c| c.to_string()).collect());
        TableModel {
            head: row(head),
            body: body.iter().map(|cells| row(*cells)).collect(),
        }
    }

    #[wasm_bindgen_test]
    fn test_table_structure() {
        let div = container();
        let handle = TableHandle::new(div.clone());
        handle
            .draw(&model(&["A", "B"], &[&["1", "2"], &["3", "4"]]))
            .unwrap();

        assert_eq!(div.query_selector_all("thead tr").unwrap().length(), 1);
        assert_eq!(div.query_selector_all("th").unwrap().length(), 2);
        assert_eq!(div.query_selector_all("tbody tr").unwrap().length(), 2);
        assert_eq!(div.query_selector_all("td").unwrap().length(), 4);
        handle.remove();
    }

    #[wasm_bindgen_test]
    fn test_cells_are_text_not_markup() {
        let div = container();
        let handle = TableHandle::new(div.clone());
        handle.draw(&model(&["<b>Name</b>"], &[])).unwrap();

        assert!(div.query_selector("b").unwrap().is_none());
        let th = div.query_selector("th").unwrap().unwrap();
        assert_eq!(th.text_content().as_deref(), Some("<b>Name</b>"));
        handle.remove();
    }

    #[wasm_bindgen_test]
    fn test_redraw_replaces_previous_table() {
        let div = container();
        let handle = TableHandle::new(div.clone());
        handle.draw(&model(&["A"], &[&["1"]])).unwrap();
        handle.draw(&model(&["A"], &[&["1"], &["2"]])).unwrap();

        assert_eq!(div.query_selector_all("table").unwrap().length(), 1);
        assert_eq!(div.query_selector_all("td").unwrap().length(), 2);
        handle.remove();
    }
}
