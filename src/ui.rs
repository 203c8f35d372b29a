use crate::models::month_name;
use crate::svg::Element;
use crate::tooltip::{self, HOVER_SCRIPT, HoverDatum};

/// The drawable parts of the page: the chart surface and the shared overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub surface: Option<Element>,
    pub tooltip: Option<Element>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    pub fn new() -> Self {
        Self {
            surface: Some(Element::new("svg").attr("id", "heatmap")),
            tooltip: None,
        }
    }

    pub fn cells(&self) -> Vec<&Element> {
        self.surface
            .as_ref()
            .map(|surface| surface.select_all("rect", "cell"))
            .unwrap_or_default()
    }

    /// Pointer entered the `index`-th cell at page coordinates `(page_x, page_y)`.
    pub fn pointer_enter(&mut self, index: usize, page_x: f64, page_y: f64) -> bool {
        let Some(datum) = self.cells().get(index).and_then(|cell| hover_datum(cell)) else {
            return false;
        };
        match self.tooltip.as_mut() {
            Some(overlay) => {
                tooltip::show(overlay, &datum, page_x, page_y);
                true
            }
            None => false,
        }
    }

    pub fn pointer_leave(&mut self) {
        if let Some(overlay) = self.tooltip.as_mut() {
            tooltip::hide(overlay);
        }
    }
}

fn hover_datum(cell: &Element) -> Option<HoverDatum> {
    let month: u32 = cell.get_attr("data-month")?.parse().ok()?;
    Some(HoverDatum {
        year: cell.get_attr("data-year")?.parse().ok()?,
        month_name: month_name(month + 1)?,
        temp: cell.get_attr("data-temp")?.parse().ok()?,
        variance: cell.get_attr("data-variance")?.parse().ok()?,
    })
}

pub fn render_page(headings: &[Element], document: &Document) -> String {
    let headings: String = headings.iter().map(|h| h.to_string()).collect();
    let chart = document
        .surface
        .as_ref()
        .map(|s| s.to_string())
        .unwrap_or_default();
    let overlay = document
        .tooltip
        .as_ref()
        .map(|t| t.to_string())
        .unwrap_or_default();

    INDEX_HTML
        .replace("{{HEADINGS}}", &headings)
        .replace("{{CHART}}", &chart)
        .replace("{{TOOLTIP}}", &overlay)
        .replace("{{SCRIPT}}", HOVER_SCRIPT)
}

const INDEX_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Monthly Global Land-Surface Temperature</title>
  <style>
    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: #f4f1ea;
      color: #2b2a28;
      font-family: "Trebuchet MS", sans-serif;
      display: grid;
      place-items: center;
      padding: 32px 18px 48px;
    }

    #container {
      background: white;
      border-radius: 20px;
      box-shadow: 0 24px 60px rgba(47, 72, 88, 0.18);
      padding: 24px 32px;
      overflow-x: auto;
    }

    h1,
    h3 {
      text-align: center;
      margin: 0 0 8px;
    }

    h3 {
      font-weight: 400;
      color: #5f5c57;
    }

    rect.cell:hover {
      stroke: black;
      stroke-width: 1;
    }
  </style>
</head>
<body>
  <div id="container">
    {{HEADINGS}}
    {{CHART}}
  </div>
  {{TOOLTIP}}
  <script>{{SCRIPT}}</script>
</body>
</html>
"#;
