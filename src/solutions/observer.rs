use log::{debug, info};

use crate::expression::Equation;
use crate::solutions::map::Summary;

/// Notified by the builder as numbers are processed, possibly from several threads.
pub trait ProgressObserver: Sync {
    fn on_start(&self, _total: usize) {}

    fn on_number(&self, number: u32, equation: Option<&Equation>);

    fn on_finish(&self, _summary: &Summary) {}
}

/// Ignores every notification
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl ProgressObserver for NoopObserver {
    fn on_number(&self, _number: u32, _equation: Option<&Equation>) {}
}

/// Reports each outcome through `log`
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl ProgressObserver for LogObserver {
    fn on_start(&self, total: usize) {
        info!("Checking {} numbers", total);
    }

    fn on_number(&self, number: u32, equation: Option<&Equation>) {
        match equation {
            Some(eq) => debug!("{}: {}", number, eq),
            None => info!("Solution for {} was not found", number),
        }
    }

    fn on_finish(&self, summary: &Summary) {
        info!("{}", summary);
    }
}
