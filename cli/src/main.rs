mod prompt;
mod session;

use clap::Parser;
use dashboard::core::dashboard::Dashboard;
use log::{info, warn};
use prompt::{prompt_line, prompt_yes_no};
use session::Session;
use skatetrack::core::history::History;
use skatetrack::pre::check_tracker_opts::{check_tracker_opts, get_history_path};
use skatetrack::pre::read_history::read_history;
use skatetrack::pre::tracker_opts::TrackerOpts;
use std::io::{self, Write};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // PRE-PROCESSING ------------------------------------------------------------------------------
    // get tracker options from the command line arguments and check that the race exists
    let tracker_opts: TrackerOpts = TrackerOpts::parse();
    let category = check_tracker_opts(&tracker_opts)?;
    let history_path = get_history_path(&tracker_opts, &category);

    info!(
        "tracking the {} ({} laps), history file {}",
        category,
        category.nr_laps(),
        history_path.display()
    );

    let stdin = io::stdin();
    let mut rdr = stdin.lock();
    let stdout = io::stdout();
    let mut wtr = stdout.lock();

    // print welcome screen
    let dashboard = Dashboard::default();
    writeln!(
        wtr,
        "{}",
        dashboard.render_welcome(
            &category,
            tracker_opts.tournament.as_deref(),
            !tracker_opts.no_save
        )
    )?;

    // use the results of earlier sessions if available and wanted
    let history_exists = history_path.is_file();
    let use_history = history_exists
        && (tracker_opts.yes
            || prompt_yes_no(
                &mut rdr,
                &mut wtr,
                "Data for this race was already found. Do you want to use it? [y/n]: ",
            )?);

    warn_replaced_history(
        &mut wtr,
        &history_path,
        history_exists && !use_history && !tracker_opts.no_save,
    )?;

    let history = if use_history {
        read_history(&history_path, &category)?
    } else {
        History::new(category.nr_laps())
    };

    // EXECUTION -----------------------------------------------------------------------------------
    let session = Session {
        category,
        dashboard,
        best_times: history.best_times(),
        history,
        history_path: if tracker_opts.no_save {
            None
        } else {
            Some(history_path)
        },
        clear_screen: true,
    };

    let outcome = session.run(&mut rdr, &mut wtr)?;

    // POST-PROCESSING -----------------------------------------------------------------------------
    // print results of the last race
    writeln!(wtr, "{}", outcome.last_race.fmt_lap_and_race_times())?;
    info!(
        "session finished with {} result(s) in the history, fastest: {} ({:.2}s)",
        outcome.history.names().len(),
        outcome.best_times.fastest().name,
        outcome.best_times.fastest().total()
    );

    prompt_line(&mut rdr, &mut wtr, "Input anything to quit the Tracker!")?;

    Ok(())
}

/// warn_replaced_history tells the operator that saving the first race replaces the results of
/// an existing history file that is not used. It returns true if a warning was written.
fn warn_replaced_history<W: Write>(
    wtr: &mut W,
    history_path: &Path,
    replaced: bool,
) -> anyhow::Result<bool> {
    if !replaced {
        return Ok(false);
    }

    warn!(
        "existing history file {} is not used and will be overwritten",
        history_path.display()
    );
    writeln!(
        wtr,
        "WARNING: the results in {} will be replaced when the first race is saved!",
        history_path.display()
    )?;

    Ok(true)
}
