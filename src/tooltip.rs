use crate::svg::Element;

pub const TOOLTIP_ID: &str = "tooltip";

const OFFSET_X: f64 = 10.0;
const OFFSET_Y: f64 = 28.0;

/// What a hovered cell exposes to the overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HoverDatum {
    pub year: i32,
    pub month_name: &'static str,
    pub temp: f64,
    pub variance: f64,
}

/// Returns the page's single overlay, creating it hidden on first use.
pub fn ensure_tooltip(slot: &mut Option<Element>) -> &mut Element {
    slot.get_or_insert_with(|| {
        Element::new("div")
            .attr("id", TOOLTIP_ID)
            .style("position", "absolute")
            .style("background-color", "rgb(145, 138, 109)")
            .style("color", "rgb(255, 212, 249)")
            .style("padding", "8px")
            .style("border-radius", "5px")
            .style("font-size", "12px")
            .style("pointer-events", "none")
            .style("opacity", 0)
    })
}

pub fn tooltip_html(datum: &HoverDatum) -> String {
    format!(
        "<strong>{} - {}</strong><br/>Temp: {:.2}℃<br/>Variance: {:.2}℃",
        datum.year, datum.month_name, datum.temp, datum.variance
    )
}

pub fn show(tooltip: &mut Element, datum: &HoverDatum, page_x: f64, page_y: f64) {
    tooltip.set_style("opacity", 1);
    tooltip.set_html(tooltip_html(datum));
    tooltip.set_attr("data-year", datum.year);
    tooltip.set_style("left", format!("{}px", page_x + OFFSET_X));
    tooltip.set_style("top", format!("{}px", page_y + OFFSET_Y));
}

pub fn hide(tooltip: &mut Element) {
    tooltip.set_style("opacity", 0);
}

/// Browser-side twin of [`show`] and [`hide`], wired to every `rect.cell`.
pub const HOVER_SCRIPT: &str = r#"
(function () {
  const MONTHS = ['January', 'February', 'March', 'April', 'May', 'June', 'July',
    'August', 'September', 'October', 'November', 'December'];
  const tooltip = document.getElementById('tooltip');
  if (!tooltip) {
    return;
  }
  document.querySelectorAll('rect.cell').forEach((cell) => {
    cell.addEventListener('mouseover', (event) => {
      const year = cell.dataset.year;
      const month = MONTHS[Number(cell.dataset.month)];
      const temp = Number(cell.dataset.temp).toFixed(2);
      const variance = Number(cell.dataset.variance).toFixed(2);
      tooltip.innerHTML = `<strong>${year} - ${month}</strong><br/>Temp: ${temp}℃<br/>Variance: ${variance}℃`;
      tooltip.dataset.year = year;
      tooltip.style.left = `${event.pageX + 10}px`;
      tooltip.style.top = `${event.pageY + 28}px`;
      tooltip.style.opacity = 1;
    });
    cell.addEventListener('mouseout', () => {
      tooltip.style.opacity = 0;
    });
  });
})();
"#;
