use crate::surface::{Element, FontConfig, Line, Surface, Text};
use std::{fs, path::Path};

pub fn generate_string(surface: &Surface, font: &FontConfig) -> String {
    let mut generator = Generator::new(font);
    generator.generate(surface);
    generator.buffer
}

pub fn render_from_string(svg_content: &str, path: &Path) -> Result<(), String> {
    fs::write(path, svg_content).map_err(|e| e.to_string())
}

struct Generator<'a> {
    font: &'a FontConfig,
    buffer: String,
}

impl<'a> Generator<'a> {
    fn new(font: &'a FontConfig) -> Self {
        Self {
            font,
            buffer: String::with_capacity(10_000),
        }
    }

    fn generate(&mut self, surface: &Surface) {
        self.start_svg(surface.width, surface.height);
        self.add_background();
        self.plot_elements(surface);
        self.end_svg();
    }

    fn add_line(&mut self, line: &str) {
        self.buffer.reserve(line.len() + 1);
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn plot_elements(&mut self, surface: &Surface) {
        for element in &surface.elements {
            match element {
                Element::Line(line) => self.add_stroke(line),
                Element::Text(text) => self.add_text(text),
                Element::Child { x, y, surface } => {
                    let group = format!(r#"<g transform="translate({},{})">"#, x, y);
                    self.add_line(&group);
                    self.plot_elements(surface);
                    self.add_line("</g>");
                }
            }
        }
    }

    fn add_stroke(&mut self, line: &Line) {
        let x1y1 = format!("x1=\"{}\" y1=\"{}\"", line.x0, line.y0);
        let x2y2 = format!("x2=\"{}\" y2=\"{}\"", line.x1, line.y1);
        let style = format!(
            "stroke=\"{}\" stroke-width=\"{}\"",
            escape(&line.color),
            line.width
        );
        let elem = format!("<line {} {} {} />", x1y1, x2y2, style);
        self.add_line(&elem);
    }

    fn add_text(&mut self, text: &Text) {
        let point = format!("x=\"{}\" y=\"{}\"", text.x, text.y);
        let font_style = format!(
            r#"font-family="{}" font-weight="{}" font-size="{}""#,
            escape(&self.font.family),
            escape(&self.font.weight),
            escape(&self.font.size)
        );
        let elem = format!(
            "<text {} {} >{}</text>",
            point,
            font_style,
            escape(&text.text)
        );
        self.add_line(&elem);
    }

    fn start_svg(&mut self, width: u32, height: u32) {
        self.add_line(r#"<?xml version="1.0"?>"#);
        let line = format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{}" height="{}">"#,
            width, height
        );
        self.add_line(&line);
    }

    fn end_svg(&mut self) {
        self.add_line("</svg>");
    }

    fn add_background(&mut self) {
        self.add_line(r#"<rect width="100%" height="100%" fill="white"/>"#);
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn svg_has_canvas_dimensions() {
        let surface = Surface::new(120, 80);
        let svg = generate_string(&surface, &FontConfig::default());
        assert!(svg.contains(r#"width="120" height="80""#));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn children_are_translated_groups() {
        let mut child = Surface::new(10, 10);
        child.draw_line(0.0, 5.0, 10.0, 5.0, 3.0, "#66c2a5");
        let mut root = Surface::new(50, 50);
        root.compose(child, 20.0, 7.5);

        let svg = generate_string(&root, &FontConfig::default());
        assert!(svg.contains(r#"<g transform="translate(20,7.5)">"#));
        assert!(svg.contains(
            r##"<line x1="0" y1="5" x2="10" y2="5" stroke="#66c2a5" stroke-width="3" />"##
        ));
    }

    fn styled_text_svg(font: &FontConfig) -> String {
        let mut surface = Surface::new(10, 10);
        surface.draw_text(0.0, 15.0, "r1");
        generate_string(&surface, font)
    }

    #[test]
    fn font_family_is_escaped() {
        let mut font = FontConfig::default();
        font.set_family("Fira \"Mono\" & Co");
        let svg = styled_text_svg(&font);
        assert!(svg.contains(r#"font-family="Fira &quot;Mono&quot; &amp; Co""#));
        assert!(!svg.contains("\"Mono\""));
    }

    #[test]
    fn font_weight_is_escaped() {
        let font = FontConfig {
            weight: "bold\" onload=\"x".to_string(),
            ..FontConfig::default()
        };
        let svg = styled_text_svg(&font);
        assert!(svg.contains(r#"font-weight="bold&quot; onload=&quot;x""#));
    }

    #[test]
    fn font_size_is_escaped() {
        let font = FontConfig {
            size: "<12px>".to_string(),
            ..FontConfig::default()
        };
        let svg = styled_text_svg(&font);
        assert!(svg.contains(r#"font-size="&lt;12px&gt;""#));
    }

    #[test]
    fn text_is_escaped() {
        let mut surface = Surface::new(10, 10);
        surface.draw_text(0.0, 0.0, "a<b&c");
        let svg = generate_string(&surface, &FontConfig::default());
        assert!(svg.contains(">a&lt;b&amp;c</text>"));
    }
}
