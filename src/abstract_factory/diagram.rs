use std::io::{self, Write};

use serde::Deserialize;
use tracing::debug;

use crate::error::Result;

pub trait Diagram {
    type Component;

    fn add(&mut self, component: Self::Component);

    fn save(&self, out: &mut dyn Write) -> io::Result<()>;

    fn to_text(&self) -> io::Result<String> {
        let mut buf = Vec::new();
        self.save(&mut buf)?;
        String::from_utf8(buf).map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))
    }
}

/// A family of diagram parts. The diagram only accepts components made by
/// the same factory, so mixing text and SVG parts does not compile.
pub trait DiagramFactory {
    type Component;
    type Diagram: Diagram<Component = Self::Component>;

    fn make_diagram(&self, width: usize, height: usize) -> Self::Diagram;

    fn make_rectangle(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        fill: &str,
        stroke: &str,
    ) -> Self::Component;

    fn make_text(&self, x: usize, y: usize, text: &str, fontsize: usize) -> Self::Component;
}

/// The same drawing for any family: a filled box with a caption.
pub fn create_diagram<F: DiagramFactory>(factory: &F) -> F::Diagram {
    let mut diagram = factory.make_diagram(30, 7);
    let rectangle = factory.make_rectangle(4, 1, 22, 5, "yellow", "black");
    let text = factory.make_text(7, 3, "Abstract Factory", 12);
    diagram.add(rectangle);
    diagram.add(text);
    diagram
}

// Plain text family

const BLANK: char = ' ';
const CORNER: char = '+';
const HORIZONTAL: char = '-';
const VERTICAL: char = '|';
const SHADE: char = '%';

fn box_rows(width: usize, height: usize, fill: char) -> Vec<Vec<char>> {
    if width == 0 || height == 0 {
        return Vec::new();
    }
    let mut rows = vec![vec![fill; width]; height];
    let (right, bottom) = (width - 1, height - 1);
    for x in 1..right {
        rows[0][x] = HORIZONTAL;
        rows[bottom][x] = HORIZONTAL;
    }
    for row in rows.iter_mut().take(bottom).skip(1) {
        row[0] = VERTICAL;
        row[right] = VERTICAL;
    }
    for (y, x) in [(0, 0), (0, right), (bottom, 0), (bottom, right)] {
        rows[y][x] = CORNER;
    }
    rows
}

#[derive(Debug, Clone)]
pub struct TextComponent {
    x: usize,
    y: usize,
    rows: Vec<Vec<char>>,
}

#[derive(Debug, Clone)]
pub struct TextDiagram {
    rows: Vec<Vec<char>>,
}

impl Diagram for TextDiagram {
    type Component = TextComponent;

    /// Characters falling outside the diagram are clipped.
    fn add(&mut self, component: TextComponent) {
        for (dy, row) in component.rows.iter().enumerate() {
            for (dx, &ch) in row.iter().enumerate() {
                let (Some(y), Some(x)) = (component.y.checked_add(dy), component.x.checked_add(dx))
                else {
                    continue;
                };
                let cell = self.rows.get_mut(y).and_then(|line| line.get_mut(x));
                if let Some(cell) = cell {
                    *cell = ch;
                }
            }
        }
    }

    fn save(&self, out: &mut dyn Write) -> io::Result<()> {
        for row in &self.rows {
            writeln!(out, "{}", row.iter().collect::<String>())?;
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct TextDiagramFactory;

impl DiagramFactory for TextDiagramFactory {
    type Component = TextComponent;
    type Diagram = TextDiagram;

    fn make_diagram(&self, width: usize, height: usize) -> TextDiagram {
        TextDiagram {
            rows: box_rows(width, height, BLANK),
        }
    }

    fn make_rectangle(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        fill: &str,
        _stroke: &str,
    ) -> TextComponent {
        let fill = if fill == "white" { BLANK } else { SHADE };
        TextComponent {
            x,
            y,
            rows: box_rows(width, height, fill),
        }
    }

    fn make_text(&self, x: usize, y: usize, text: &str, _fontsize: usize) -> TextComponent {
        TextComponent {
            x,
            y,
            rows: vec![text.chars().collect()],
        }
    }
}

// SVG family

const SVG_SCALE: usize = 20;
const SVG_END: &str = "</svg>\n";

fn scaled(value: usize) -> usize {
    value.saturating_mul(SVG_SCALE)
}

#[derive(Debug, Clone)]
pub struct SvgComponent {
    svg: String,
}

impl SvgComponent {
    pub fn as_str(&self) -> &str {
        &self.svg
    }
}

#[derive(Debug, Clone)]
pub struct SvgDiagram {
    parts: Vec<String>,
}

impl Diagram for SvgDiagram {
    type Component = SvgComponent;

    fn add(&mut self, component: SvgComponent) {
        self.parts.push(component.svg);
    }

    fn save(&self, out: &mut dyn Write) -> io::Result<()> {
        out.write_all(self.parts.join("\n").as_bytes())?;
        write!(out, "\n{SVG_END}")
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SvgDiagramFactory;

impl DiagramFactory for SvgDiagramFactory {
    type Component = SvgComponent;
    type Diagram = SvgDiagram;

    fn make_diagram(&self, width: usize, height: usize) -> SvgDiagram {
        let (pxwidth, pxheight) = (scaled(width), scaled(height));
        let header = format!(
            "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"no\"?>\n\
             <!DOCTYPE svg PUBLIC \"-//W3C//DTD SVG 20010904//EN\"\n    \
             \"http://www.w3.org/TR/2001/REC-SVG-20010904/DTD/svg10.dtd\">\n\
             <svg xmlns=\"http://www.w3.org/2000/svg\"\n    \
             xmlns:xlink=\"http://www.w3.org/1999/xlink\" xml:space=\"preserve\"\n    \
             width=\"{pxwidth}px\" height=\"{pxheight}px\">"
        );
        let outline = self.make_rectangle(0, 0, width, height, "lightgreen", "black");
        SvgDiagram {
            parts: vec![header, outline.svg],
        }
    }

    fn make_rectangle(
        &self,
        x: usize,
        y: usize,
        width: usize,
        height: usize,
        fill: &str,
        stroke: &str,
    ) -> SvgComponent {
        let fill = html_escape::encode_double_quoted_attribute(fill);
        let stroke = html_escape::encode_double_quoted_attribute(stroke);
        SvgComponent {
            svg: format!(
                "<rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\" fill=\"{fill}\" stroke=\"{stroke}\"/>",
                scaled(x),
                scaled(y),
                scaled(width),
                scaled(height),
            ),
        }
    }

    fn make_text(&self, x: usize, y: usize, text: &str, fontsize: usize) -> SvgComponent {
        SvgComponent {
            svg: format!(
                "<text x=\"{}\" y=\"{}\" text-anchor=\"left\" font-family=\"sans-serif\" font-size=\"{}\">{}</text>",
                scaled(x),
                scaled(y),
                fontsize.saturating_mul(SVG_SCALE / 10),
                html_escape::encode_text(text),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DiagramStyle {
    #[default]
    Text,
    Svg,
}

impl DiagramStyle {
    /// Draws the sample diagram with this style's factory.
    pub fn render_sample(self) -> Result<String> {
        debug!(style = ?self, "drawing sample diagram");
        let text = match self {
            DiagramStyle::Text => create_diagram(&TextDiagramFactory).to_text()?,
            DiagramStyle::Svg => create_diagram(&SvgDiagramFactory).to_text()?,
        };
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_sample_diagram() {
        let text = DiagramStyle::Text.render_sample().unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], format!("+{}+", "-".repeat(28)));
        assert_eq!(lines[1], format!("|   +{}+   |", "-".repeat(20)));
        assert_eq!(lines[2], format!("|   |{}|   |", "%".repeat(20)));
        assert_eq!(lines[3], "|   |%%Abstract Factory%%|   |");
        assert_eq!(lines[5], lines[1]);
        assert_eq!(lines[6], lines[0]);
    }

    #[test]
    fn test_white_rectangle_is_hollow() {
        let factory = TextDiagramFactory;
        let mut diagram = factory.make_diagram(5, 3);
        diagram.add(factory.make_rectangle(0, 0, 5, 3, "white", "black"));
        assert_eq!(diagram.to_text().unwrap(), "+---+\n|   |\n+---+\n");
    }

    #[test]
    fn test_text_is_clipped_at_edges() {
        let factory = TextDiagramFactory;
        let mut diagram = factory.make_diagram(4, 3);
        diagram.add(factory.make_text(2, 1, "overflow", 12));
        diagram.add(factory.make_text(0, 9, "gone", 12));
        assert_eq!(diagram.to_text().unwrap(), "+--+\n| ov\n+--+\n");
    }

    #[test]
    fn test_far_offsets_are_clipped() {
        let factory = TextDiagramFactory;
        let mut diagram = factory.make_diagram(4, 3);
        diagram.add(factory.make_text(usize::MAX, 1, "ab", 12));
        diagram.add(factory.make_rectangle(1, usize::MAX, 3, 3, "red", "black"));
        assert_eq!(diagram.to_text().unwrap(), "+--+\n|  |\n+--+\n");
    }

    #[test]
    fn test_svg_coordinates_saturate() {
        let component = SvgDiagramFactory.make_rectangle(usize::MAX, 1, 2, 3, "red", "black");
        assert!(component
            .as_str()
            .starts_with(&format!("<rect x=\"{}\" y=\"20\"", usize::MAX)));
    }

    #[test]
    fn test_degenerate_sizes_do_not_panic() {
        let factory = TextDiagramFactory;
        assert_eq!(factory.make_diagram(0, 0).to_text().unwrap(), "");
        assert_eq!(factory.make_diagram(1, 1).to_text().unwrap(), "+\n");
    }

    #[test]
    fn test_svg_sample_diagram() {
        let svg = DiagramStyle::Svg.render_sample().unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\""));
        assert!(svg.contains("width=\"600px\" height=\"140px\""));
        assert!(svg.contains(
            "<rect x=\"0\" y=\"0\" width=\"600\" height=\"140\" fill=\"lightgreen\" stroke=\"black\"/>"
        ));
        assert!(svg.contains(
            "<rect x=\"80\" y=\"20\" width=\"440\" height=\"100\" fill=\"yellow\" stroke=\"black\"/>"
        ));
        assert!(svg.contains("font-size=\"24\">Abstract Factory</text>"));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_svg_text_is_escaped() {
        let component = SvgDiagramFactory.make_text(0, 0, "a < b & c", 10);
        assert!(component.as_str().contains(">a &lt; b &amp; c</text>"));
    }
}
