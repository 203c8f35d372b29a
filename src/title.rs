use crate::svg::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    pub fn tag(self) -> &'static str {
        match self {
            HeadingLevel::H1 => "h1",
            HeadingLevel::H2 => "h2",
            HeadingLevel::H3 => "h3",
        }
    }
}

pub fn title(level: HeadingLevel, text: &str, id: &str) -> Element {
    Element::new(level.tag()).attr("id", id).text(text)
}
