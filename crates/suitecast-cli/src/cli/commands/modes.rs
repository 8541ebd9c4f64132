use suitecast_core::options::DEFAULT_REPORT_TYPE;
use suitecast_core::ReportMode;

use crate::exit_codes::SUCCESS;

pub fn run() -> i32 {
    for mode in ReportMode::ALL {
        if mode.as_str() == DEFAULT_REPORT_TYPE {
            println!("{} (default)", mode);
        } else {
            println!("{}", mode);
        }
    }
    SUCCESS
}
