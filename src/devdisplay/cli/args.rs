use clap::{Parser, Subcommand, ValueEnum};
use devdisplay::browser::PagePolicy;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "devdisplay", bin_name = "devdisplay", version)]
#[command(about = "Browse, search and page through developer profiles", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Site root holding the manifest, data directory and devdisplay.json
    #[arg(short, long, global = true, default_value = ".")]
    pub root: PathBuf,

    /// Fetch data files over HTTP from this base URL
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Fixed seed for the display order
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    /// What a new search does to the current page
    #[arg(long, global = true, value_enum)]
    pub page_policy: Option<PagePolicyArg>,

    /// Print the page as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List profiles in display order
    #[command(alias = "ls")]
    List {
        /// Page to show (clamped to the last page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Search profiles by name, location or skill
    #[command(alias = "s")]
    Search {
        /// Text to look for
        value: String,

        /// Field to search: name, location or skill
        #[arg(short = 'b', long = "by", default_value = "name")]
        criterion: String,

        /// Page to show (clamped to the last page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,
    },

    /// Show which sources loaded and which were skipped
    Sources,

    /// Interactive session: n, p, /criterion value, c, q
    Browse,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum PagePolicyArg {
    Preserve,
    Reset,
}

impl From<PagePolicyArg> for PagePolicy {
    fn from(arg: PagePolicyArg) -> Self {
        match arg {
            PagePolicyArg::Preserve => PagePolicy::Preserve,
            PagePolicyArg::Reset => PagePolicy::ResetOnSearch,
        }
    }
}
