use crate::core::panel::{center, join_columns, Panel};
use crate::core::plot::{LinePlot, Series, MARKERS};
use crate::core::progress::create_progress_panel;
use crate::core::tables::{create_best_table, create_lap_time_table};
use skatetrack::core::category::Category;
use skatetrack::interfaces::dashboard_interface::RaceView;

/// Preferred upper bound of a lap time (s), used to scale the plots.
const T_LAP_MAX: f64 = 35.0;
/// Preferred lower bound of a lap time (s), used to scale the lap time plot.
const T_LAP_MIN: f64 = 5.0;

const APP_TITLE: &str = "CLI speed skate race tracker";

/// Dashboard renders the screens of the tracker into strings that can be printed as a whole.
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub plot_width: usize,
    pub plot_height: usize,
    pub progress_width: usize,
}

impl Default for Dashboard {
    fn default() -> Self {
        Dashboard {
            plot_width: 60,
            plot_height: 10,
            progress_width: 40,
        }
    }
}

impl Dashboard {
    /// render_welcome returns the start screen showing the chosen race and what happens next.
    pub fn render_welcome(&self, category: &Category, tournament: Option<&str>, save: bool) -> String {
        let race = match tournament {
            Some(t) => format!("{} race in {}", category, t),
            None => format!("{} race", category),
        };
        let save_text = if save { "be saved" } else { "not be saved" };

        let welcome = Panel::new(
            Some(APP_TITLE),
            vec![
                "I will start tracking the race with the following parameters:".to_owned(),
                String::new(),
                format!("    -- {},", race),
                format!("    -- {} lap(s) per athlete,", category.nr_laps()),
                format!("    -- The results will {}.", save_text),
            ],
        )
        .with_padding(2);

        let instructions = Panel::new(
            Some("Instructions"),
            vec![
                "During every race, you can track one or more athletes.".to_owned(),
                String::new(),
                "Type the name(s) of the athlete(s) in a comma separated fashion,".to_owned(),
                "then enter the lap times of every lap in the same order.".to_owned(),
            ],
        )
        .with_padding(2);

        let mut out = self.render_header(APP_TITLE);
        out.extend(join_columns(
            &[instructions.render(0), welcome.render(0)],
            1,
        ));
        out.join("\n")
    }

    /// render_race returns the race view: plots, lap time progression, best times and progress.
    pub fn render_race(&self, race_view: &RaceView) -> String {
        let title = format!("{}: {}", race_view.category, race_view.names().join(" vs "));
        let mut out = self.render_header(&title);

        let plots = Panel::new(None, self.render_plots(race_view)).render(0);
        let lap_times = create_lap_time_table(race_view).render(0);
        let best = create_best_table(race_view).render(0);

        out.extend(plots);
        out.extend(join_columns(&[lap_times, best], 1));
        out.extend(
            create_progress_panel(race_view.compl_laps, race_view.nr_laps, self.progress_width)
                .render(0),
        );

        out.join("\n")
    }

    fn render_header(&self, title: &str) -> Vec<String> {
        let width = self.plot_width + 12;
        Panel::new(None, vec![center(title, width)]).render(0)
    }

    /// The method creates the two plots of the race view: total times and lap times per lap.
    fn render_plots(&self, race_view: &RaceView) -> Vec<String> {
        let nr_laps = race_view.nr_laps;
        let names = race_view.names().join(" vs ");

        let series_total: Vec<Series> = race_view
            .athletes
            .iter()
            .enumerate()
            .map(|(i, x)| Series {
                label: x.name.to_owned(),
                marker: MARKERS[i % MARKERS.len()],
                values: x.racetimes.to_owned(),
            })
            .collect();
        let series_lap: Vec<Series> = race_view
            .athletes
            .iter()
            .enumerate()
            .map(|(i, x)| Series {
                label: x.name.to_owned(),
                marker: MARKERS[i % MARKERS.len()],
                values: x.laptimes.to_owned(),
            })
            .collect();

        let plot_total = LinePlot {
            title: format!("{} race total times: {}", race_view.category, names),
            nr_laps,
            y_range: [0.0, nr_laps as f64 * T_LAP_MAX],
            width: self.plot_width,
            height: self.plot_height,
        };
        let plot_lap = LinePlot {
            title: format!("{} race lap times: {}", race_view.category, names),
            nr_laps,
            y_range: [T_LAP_MIN, T_LAP_MAX],
            width: self.plot_width,
            height: self.plot_height,
        };

        let mut out = plot_total.render(&series_total);
        out.push(String::new());
        out.extend(plot_lap.render(&series_lap));
        out
    }
}
