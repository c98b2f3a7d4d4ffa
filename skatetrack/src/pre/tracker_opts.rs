use crate::core::category::Gender;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[clap(
    version = "0.1.0",
    author = "Hidde Fokkema",
    name = "SkateTracker",
    about = "CLI tool to track lap times during speed skating races"
)]
pub struct TrackerOpts {
    // FLAGS ---------------------------------------------------------------------------------------
    /// Do not save the results to the history file of the race
    #[clap(short, long)]
    pub no_save: bool,

    /// Use existing results of the race without asking
    #[clap(short, long)]
    pub yes: bool,

    // OPTIONS -------------------------------------------------------------------------------------
    /// Set the gender of the race, M (men) or F (women)
    #[clap(short, long)]
    pub gender: Gender,

    /// Set the length of the race in meters (500, 1000, 1500, 3000, 5000 or 10000)
    #[clap(short, long)]
    pub length: u32,

    /// Set the name of the tournament, it is used as prefix of the history file
    #[clap(short, long)]
    pub tournament: Option<String>,

    /// Set path to the directory that contains the history files
    #[clap(parse(from_os_str), short, long, default_value = "skate_data")]
    pub data_dir: PathBuf,
}
