/// Panel draws a frame with an optional title around a block of text lines.
#[derive(Debug, Clone, Default)]
pub struct Panel {
    pub title: Option<String>,
    pub lines: Vec<String>,
    pub padding: usize,
}

impl Panel {
    pub fn new(title: Option<&str>, lines: Vec<String>) -> Panel {
        Panel {
            title: title.map(|x| x.to_owned()),
            lines,
            padding: 1,
        }
    }

    pub fn with_padding(mut self, padding: usize) -> Panel {
        self.padding = padding;
        self
    }

    /// The method returns the inner width of the panel, i.e. the width without frame and padding.
    fn get_inner_width(&self) -> usize {
        let width_lines = self.lines.iter().map(|x| text_width(x)).max().unwrap_or(0);
        let width_title = self.title.as_ref().map_or(0, |x| text_width(x) + 3);
        width_lines.max(width_title.saturating_sub(2 * self.padding))
    }

    /// render returns the framed lines. The panel is at least min_width characters wide.
    pub fn render(&self, min_width: usize) -> Vec<String> {
        let inner_width = self
            .get_inner_width()
            .max(min_width.saturating_sub(2 + 2 * self.padding));
        let frame_width = inner_width + 2 * self.padding;

        let mut out = Vec::with_capacity(self.lines.len() + 2);

        // top border (with title)
        let top = match &self.title {
            Some(title) => {
                let title = format!(" {} ", title);
                let rest = frame_width.saturating_sub(text_width(&title) + 1);
                format!("┌─{}{}┐", title, "─".repeat(rest))
            }
            None => format!("┌{}┐", "─".repeat(frame_width)),
        };
        out.push(top);

        let pad = " ".repeat(self.padding);
        for line in self.lines.iter() {
            out.push(format!("│{}{}{}│", pad, pad_right(line, inner_width), pad));
        }

        out.push(format!("└{}┘", "─".repeat(frame_width)));
        out
    }
}

/// text_width returns the number of characters (not bytes) of a line.
pub fn text_width(text: &str) -> usize {
    text.chars().count()
}

pub fn pad_right(text: &str, width: usize) -> String {
    format!("{}{}", text, " ".repeat(width.saturating_sub(text_width(text))))
}

pub fn center(text: &str, width: usize) -> String {
    let space = width.saturating_sub(text_width(text));
    let left = space / 2;
    format!("{}{}{}", " ".repeat(left), text, " ".repeat(space - left))
}

/// join_columns places the blocks next to each other, separated by gap spaces. Shorter blocks
/// are filled with empty lines.
pub fn join_columns(blocks: &[Vec<String>], gap: usize) -> Vec<String> {
    let height = blocks.iter().map(|x| x.len()).max().unwrap_or(0);
    let widths: Vec<usize> = blocks
        .iter()
        .map(|block| block.iter().map(|x| text_width(x)).max().unwrap_or(0))
        .collect();
    let sep = " ".repeat(gap);

    (0..height)
        .map(|row| {
            let cells: Vec<String> = blocks
                .iter()
                .zip(widths.iter())
                .map(|(block, &width)| {
                    pad_right(block.get(row).map_or("", |x| x.as_str()), width)
                })
                .collect();
            cells.join(&sep).trim_end().to_owned()
        })
        .collect()
}
