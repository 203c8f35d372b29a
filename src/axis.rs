use crate::svg::Element;

const TICK_SIZE: f64 = 6.0;
const TICK_PADDING: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orient {
    Bottom,
    Left,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub offset: f64,
    pub label: String,
}

impl Tick {
    pub fn new(offset: f64, label: impl Into<String>) -> Self {
        Self {
            offset,
            label: label.into(),
        }
    }
}

/// Builds an axis group: a domain path spanning `range` and one group per tick.
///
/// The caller positions the returned group with a `transform`.
pub fn axis(orient: Orient, range: (f64, f64), ticks: &[Tick]) -> Element {
    let (r0, r1) = range;
    let (anchor, domain_path) = match orient {
        Orient::Bottom => (
            "middle",
            format!("M{r0},{TICK_SIZE}V0H{r1}V{TICK_SIZE}"),
        ),
        Orient::Left => ("end", format!("M-{TICK_SIZE},{r0}H0V{r1}H-{TICK_SIZE}")),
    };

    let mut group = Element::new("g")
        .attr("fill", "none")
        .attr("font-size", 10)
        .attr("font-family", "sans-serif")
        .attr("text-anchor", anchor)
        .child(
            Element::new("path")
                .attr("class", "domain")
                .attr("stroke", "currentColor")
                .attr("d", domain_path),
        );

    for tick in ticks {
        group.append(tick_group(orient, tick));
    }
    group
}

fn tick_group(orient: Orient, tick: &Tick) -> Element {
    let spacing = TICK_SIZE + TICK_PADDING;
    let (transform, line, text) = match orient {
        Orient::Bottom => (
            format!("translate({},0)", tick.offset),
            Element::new("line").attr("stroke", "currentColor").attr("y2", TICK_SIZE),
            Element::new("text")
                .attr("fill", "currentColor")
                .attr("y", spacing)
                .attr("dy", "0.71em"),
        ),
        Orient::Left => (
            format!("translate(0,{})", tick.offset),
            Element::new("line").attr("stroke", "currentColor").attr("x2", -TICK_SIZE),
            Element::new("text")
                .attr("fill", "currentColor")
                .attr("x", -spacing)
                .attr("dy", "0.32em"),
        ),
    };

    Element::new("g")
        .attr("class", "tick")
        .attr("opacity", 1)
        .attr("transform", transform)
        .child(line)
        .child(text.text(tick.label.clone()))
}
