use helpers::general::{max, min};

/// Markers used for the athletes, in athlete order (repeated if there are more athletes).
pub const MARKERS: [char; 5] = ['*', '+', 'o', 'x', '#'];

const LINE_CHAR: char = '·';
const Y_LABEL_WIDTH: usize = 7;

/// Series is one line of a plot: one value per lap, 0.0 marks a lap without value.
#[derive(Debug, Clone)]
pub struct Series {
    pub label: String,
    pub marker: char,
    pub values: Vec<f64>,
}

/// LinePlot renders series over the laps of a race into text. The y range is extended if a
/// value exceeds the preferred range.
#[derive(Debug, Clone)]
pub struct LinePlot {
    pub title: String,
    pub nr_laps: usize,
    pub y_range: [f64; 2],
    pub width: usize,
    pub height: usize,
}

impl LinePlot {
    /// The method returns the y range that contains the preferred range and all values.
    fn get_y_range(&self, series: &[Series]) -> [f64; 2] {
        let values: Vec<f64> = series
            .iter()
            .flat_map(|x| x.values.iter().copied())
            .filter(|&v| v > 0.0)
            .collect();

        if values.is_empty() {
            return self.y_range;
        }

        let y_min = self.y_range[0].min(min(&values));
        let y_max = self.y_range[1].max(max(&values));

        if y_max - y_min < 1e-6 {
            [y_min - 1.0, y_max + 1.0]
        } else {
            [y_min, y_max]
        }
    }

    fn get_col(&self, lap_idx: usize) -> usize {
        if self.nr_laps <= 1 {
            0
        } else {
            lap_idx * (self.width - 1) / (self.nr_laps - 1)
        }
    }

    fn get_row(&self, value: f64, y_range: [f64; 2]) -> usize {
        let frac = ((value - y_range[0]) / (y_range[1] - y_range[0])).max(0.0).min(1.0);
        self.height - 1 - (frac * (self.height - 1) as f64).round() as usize
    }

    /// render returns the lines of the plot: title, plot area with y axis, x axis with lap numbers
    /// and the legend.
    pub fn render(&self, series: &[Series]) -> Vec<String> {
        let y_range = self.get_y_range(series);
        let mut grid = vec![vec![' '; self.width]; self.height];

        // points of every series (laps without value are skipped)
        let points: Vec<Vec<(usize, usize)>> = series
            .iter()
            .map(|s| {
                s.values
                    .iter()
                    .enumerate()
                    .filter(|(_, v)| **v > 0.0)
                    .map(|(lap_idx, v)| (self.get_col(lap_idx), self.get_row(*v, y_range)))
                    .collect()
            })
            .collect();

        // connect consecutive points at first such that the markers are drawn on top
        for pts in points.iter() {
            for pair in pts.windows(2) {
                let ((c0, r0), (c1, r1)) = (pair[0], pair[1]);

                for c in c0 + 1..c1 {
                    let frac = (c - c0) as f64 / (c1 - c0) as f64;
                    let r = r0 as f64 + frac * (r1 as f64 - r0 as f64);
                    grid[r.round() as usize][c] = LINE_CHAR;
                }
            }
        }

        for (pts, s) in points.iter().zip(series.iter()) {
            for &(c, r) in pts.iter() {
                grid[r][c] = s.marker;
            }
        }

        // assemble output
        let mut out = Vec::with_capacity(self.height + 4);
        out.push(self.title.to_owned());

        for (i, row) in grid.iter().enumerate() {
            let label = if i == 0 {
                format!("{:>w$.1}", y_range[1], w = Y_LABEL_WIDTH)
            } else if i == self.height - 1 {
                format!("{:>w$.1}", y_range[0], w = Y_LABEL_WIDTH)
            } else {
                " ".repeat(Y_LABEL_WIDTH)
            };
            out.push(format!("{} ┤{}", label, row.iter().collect::<String>()));
        }

        out.push(format!("{} └{}", " ".repeat(Y_LABEL_WIDTH), "─".repeat(self.width)));

        // lap numbers below the x axis (skipped if they would overlap)
        let mut ticks = vec![' '; self.width];
        let mut next_free = 0;
        for lap_idx in 0..self.nr_laps {
            let col = self.get_col(lap_idx);
            let label: Vec<char> = (lap_idx + 1).to_string().chars().collect();

            if col >= next_free && col + label.len() <= self.width {
                ticks[col..col + label.len()].copy_from_slice(&label);
                next_free = col + label.len() + 1;
            }
        }
        out.push(format!(
            "{}  {}",
            " ".repeat(Y_LABEL_WIDTH),
            ticks.iter().collect::<String>().trim_end()
        ));

        let legend: Vec<String> = series
            .iter()
            .map(|s| format!("{} {}", s.marker, s.label))
            .collect();
        out.push(format!("{}  {}", " ".repeat(Y_LABEL_WIDTH), legend.join("   ")));

        out
    }
}
