pub type Color = String;

/// A straight stroke between two points, in surface-local coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
    pub width: f64,
    pub color: Color,
}

/// Text anchored at its baseline start
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// Drawing operations in the order they were issued; later elements paint over earlier ones
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Line(Line),
    Text(Text),
    Child { x: f64, y: f64, surface: Surface },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
    pub elements: Vec<Element>,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            elements: Vec::new(),
        }
    }

    pub fn draw_line(&mut self, x0: f64, y0: f64, x1: f64, y1: f64, width: f64, color: &str) {
        self.elements.push(Element::Line(Line {
            x0,
            y0,
            x1,
            y1,
            width,
            color: color.to_owned(),
        }));
    }

    pub fn draw_text(&mut self, x: f64, y: f64, text: &str) {
        self.elements.push(Element::Text(Text {
            x,
            y,
            text: text.to_owned(),
        }));
    }

    /// Places `child` with its origin at (x, y) of this surface
    pub fn compose(&mut self, child: Surface, x: f64, y: f64) {
        self.elements.push(Element::Child {
            x,
            y,
            surface: child,
        });
    }

    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.elements.iter().filter_map(|element| match element {
            Element::Line(line) => Some(line),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &Text> {
        self.elements.iter().filter_map(|element| match element {
            Element::Text(text) => Some(text),
            _ => None,
        })
    }

    pub fn children(&self) -> impl Iterator<Item = (f64, f64, &Surface)> {
        self.elements.iter().filter_map(|element| match element {
            Element::Child { x, y, surface } => Some((*x, *y, surface)),
            _ => None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct FontConfig {
    pub family: String,
    pub weight: String,
    pub size: String,
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            family: "Arial, Helvetica, sans-serif".to_string(),
            weight: "normal".to_string(),
            size: "12px".to_string(),
        }
    }
}

impl FontConfig {
    pub fn set_family(&mut self, font_family: &str) {
        self.family = font_family.to_owned();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elements_keep_issue_order() {
        let mut surface = Surface::new(10, 10);
        surface.draw_line(0.0, 5.0, 10.0, 5.0, 2.0, "#000000");
        surface.draw_text(1.0, 2.0, "r1");
        surface.compose(Surface::new(4, 4), 3.0, 3.0);

        assert!(matches!(surface.elements[0], Element::Line(_)));
        assert!(matches!(surface.elements[1], Element::Text(_)));
        assert!(matches!(surface.elements[2], Element::Child { .. }));
        assert_eq!(surface.lines().count(), 1);
        assert_eq!(surface.texts().next().unwrap().text, "r1");
        assert_eq!(surface.children().next().unwrap().0, 3.0);
    }
}
