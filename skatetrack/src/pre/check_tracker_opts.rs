use crate::core::category::Category;
use crate::pre::tracker_opts::TrackerOpts;
use std::path::PathBuf;

/// check_tracker_opts assures that the inserted options describe a race that exists and returns
/// its category. An invalid combination is a configuration mistake and is not retried.
pub fn check_tracker_opts(tracker_opts: &TrackerOpts) -> anyhow::Result<Category> {
    let category = Category::new(tracker_opts.gender, tracker_opts.length)?;
    Ok(category)
}

/// get_history_path returns the path of the history file of the category.
pub fn get_history_path(tracker_opts: &TrackerOpts, category: &Category) -> PathBuf {
    let mut filepath = tracker_opts.data_dir.to_owned();
    filepath.push(category.history_file_name(tracker_opts.tournament.as_deref()));
    filepath
}
