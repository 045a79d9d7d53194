//! Implements ReportPort. One summary line on stdout; logs stay on stderr.

use crate::domain::CombineReport;
use crate::ports::ReportPort;

#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl ConsoleReporter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportPort for ConsoleReporter {
    fn report(&self, report: &CombineReport) {
        println!("{}", report.summary_line());
    }
}
