use crate::core::panel::Panel;
use helpers::general::{argmin, fmt_delta, fmt_racetime};
use prettytable::format::{Alignment, FormatBuilder, LinePosition, LineSeparator, TableFormat};
use prettytable::{Cell, Row, Table};
use skatetrack::interfaces::dashboard_interface::RaceView;

/// Shown for lap times and deltas that are not available (yet).
pub const NOT_AVAILABLE: &str = "NA";

/// Title row separated from the body, no outer border.
fn get_table_format() -> TableFormat {
    FormatBuilder::new()
        .column_separator('│')
        .separator(LinePosition::Title, LineSeparator::new('─', '┼', '─', '─'))
        .padding(1, 1)
        .build()
}

fn centered_row(cells: &[String]) -> Row {
    Row::new(
        cells
            .iter()
            .map(|x| Cell::new_align(x, Alignment::CENTER))
            .collect(),
    )
}

fn new_table(titles: &[String]) -> Table {
    let mut table = Table::new();
    table.set_format(get_table_format());
    table.set_titles(centered_row(titles));
    table
}

/// The function splits the rendered table into lines for a panel.
fn table_lines(table: &Table) -> Vec<String> {
    table
        .to_string()
        .lines()
        .map(|x| x.trim_end().to_owned())
        .collect()
}

/// lap_time_table creates the table that shows the progression of the current race: per
/// athlete the lap times and the difference to the best time so far, followed by a row with the
/// totals. The fastest lap time of a lap is marked with an asterisk if more than one athlete is
/// racing.
pub fn lap_time_table(race_view: &RaceView) -> Table {
    let mut titles = vec!["Lap".to_owned()];
    for athlete in race_view.athletes.iter() {
        titles.push(athlete.name.to_owned());
        titles.push("Best diff".to_owned());
    }

    let mut table = new_table(&titles);

    for lap_idx in 0..race_view.nr_laps {
        let laptimes: Vec<f64> = race_view
            .athletes
            .iter()
            .map(|x| x.laptimes[lap_idx])
            .collect();
        let mut row = vec![(lap_idx + 1).to_string()];

        if laptimes.iter().all(|&t| t == 0.0) {
            row.extend(vec![NOT_AVAILABLE.to_owned(); 2 * laptimes.len()]);
            table.add_row(centered_row(&row));
            continue;
        }

        // the fastest athlete is determined among the athletes with a lap time
        let laptimes_ranked: Vec<f64> = laptimes
            .iter()
            .map(|&t| if t > 0.0 { t } else { f64::INFINITY })
            .collect();
        let idx_fastest = argmin(&laptimes_ranked);

        for (i, athlete) in race_view.athletes.iter().enumerate() {
            let t_lap = laptimes[i];

            row.push(if t_lap == 0.0 {
                NOT_AVAILABLE.to_owned()
            } else if i == idx_fastest && laptimes.len() > 1 {
                format!("{:.2}*", t_lap)
            } else {
                format!("{:.2}", t_lap)
            });

            row.push(match athlete.deltas[lap_idx] {
                Some(delta) => fmt_delta(delta),
                None => NOT_AVAILABLE.to_owned(),
            });
        }

        table.add_row(centered_row(&row));
    }

    let mut totals = vec!["Total".to_owned()];
    for athlete in race_view.athletes.iter() {
        totals.push(fmt_racetime(athlete.total));
        totals.push(String::new());
    }
    table.add_row(centered_row(&totals));

    table
}

pub fn create_lap_time_table(race_view: &RaceView) -> Panel {
    Panel::new(
        Some("Lap time progression"),
        table_lines(&lap_time_table(race_view)),
    )
}

/// best_table creates the table with the top 3 times so far (one column per rank) and their
/// totals in the last row.
pub fn best_table(race_view: &RaceView) -> Table {
    let mut titles = vec!["Lap".to_owned()];
    titles.extend(
        race_view
            .best
            .iter()
            .enumerate()
            .map(|(i, x)| format!("{}. {}", i + 1, x.name)),
    );

    let mut table = new_table(&titles);

    for lap_idx in 0..race_view.nr_laps {
        let mut row = vec![(lap_idx + 1).to_string()];
        row.extend(race_view.best.iter().map(|x| {
            let t_lap = x.laptimes.get(lap_idx).copied().unwrap_or(0.0);
            format!("{:.2}", t_lap)
        }));
        table.add_row(centered_row(&row));
    }

    let mut totals = vec!["Total".to_owned()];
    totals.extend(race_view.best.iter().map(|x| fmt_racetime(x.total)));
    table.add_row(centered_row(&totals));

    table
}

pub fn create_best_table(race_view: &RaceView) -> Panel {
    Panel::new(Some("Best times so far"), table_lines(&best_table(race_view)))
}
