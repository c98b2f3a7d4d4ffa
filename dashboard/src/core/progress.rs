use crate::core::panel::Panel;

/// get_percentage returns the share of completed laps in percent (a race without laps is done).
pub fn get_percentage(compl_laps: usize, nr_laps: usize) -> f64 {
    if nr_laps == 0 {
        return 100.0;
    }
    compl_laps.min(nr_laps) as f64 / nr_laps as f64 * 100.0
}

/// create_progress_bar returns a bar of the given width, e.g. "Progress ██████░░░░  60%".
pub fn create_progress_bar(compl_laps: usize, nr_laps: usize, width: usize) -> String {
    let percentage = get_percentage(compl_laps, nr_laps);
    let filled = ((percentage / 100.0) * width as f64).round() as usize;

    format!(
        "Progress {}{} {:>3.0}%",
        "█".repeat(filled),
        "░".repeat(width - filled),
        percentage
    )
}

pub fn create_progress_panel(compl_laps: usize, nr_laps: usize, width: usize) -> Panel {
    Panel::new(
        None,
        vec![format!(
            "{}   lap {}/{}",
            create_progress_bar(compl_laps, nr_laps, width),
            compl_laps.min(nr_laps),
            nr_laps
        )],
    )
}
