use std::path::PathBuf;

use argh::FromArgs;
use log::LevelFilter;

/// Generates the reciprocal lookup table consumed by the divider.
#[derive(FromArgs)]
pub struct Opts {
    /// number of table rows (subintervals)
    #[argh(option, short = 'n', default = "8")]
    pub intervals: u32,

    /// polynomial degree per row
    #[argh(option, short = 'd', default = "1")]
    pub degree: u32,

    /// output file
    #[argh(option, short = 'o', default = "PathBuf::from(\"divider_lut.h\")")]
    pub output: PathBuf,

    /// logging level
    #[argh(option, long = "log", default = "LevelFilter::Warn")]
    pub log_level: LevelFilter,
}

impl Opts {
    /// Parse options from `env::args`.
    pub fn parse() -> Opts {
        argh::from_env()
    }
}
