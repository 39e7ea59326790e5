//! Start/finish notifications for each (workload, element type) pair.

use colored::{ColoredString, Colorize};
use tracing::info;

use crate::{elem::ElementKind, workload::Workload};

pub trait ProgressReporter {
    fn suite_started(&mut self) {}

    fn suite_finished(&mut self) {}

    fn started(&mut self, workload: Workload, element: ElementKind);

    fn finished(&mut self, workload: Workload, element: ElementKind);
}

impl<P: ProgressReporter + ?Sized> ProgressReporter for &mut P {
    fn suite_started(&mut self) {
        (**self).suite_started();
    }

    fn suite_finished(&mut self) {
        (**self).suite_finished();
    }

    fn started(&mut self, workload: Workload, element: ElementKind) {
        (**self).started(workload, element);
    }

    fn finished(&mut self, workload: Workload, element: ElementKind) {
        (**self).finished(workload, element);
    }
}

fn orange(text: &str) -> ColoredString {
    text.bold().truecolor(255, 165, 0)
}

fn purple(text: &str) -> ColoredString {
    text.bold().truecolor(160, 32, 240)
}

fn green(text: &str) -> ColoredString {
    text.bold().green()
}

fn gold(text: &str) -> ColoredString {
    text.bold().truecolor(255, 215, 0)
}

fn light_green(text: &str) -> ColoredString {
    text.bold().bright_green()
}

/// Human readable progress lines on stdout.
///
/// With colour enabled the banners are still subject to `colored`'s terminal
/// and `NO_COLOR` detection.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleProgress {
    color: bool,
}

impl ConsoleProgress {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn styled(&self, text: &str, paint: fn(&str) -> ColoredString) -> String {
        if self.color {
            paint(text).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn pair_line(&self, started: bool, workload: Workload, element: ElementKind) -> String {
        let banner = if started {
            self.styled("[ Started Benchmark ]:", orange)
        } else {
            self.styled("[ Finished Benchmark ]:", green)
        };
        format!(
            "{} {} -- {} {}",
            banner,
            workload.name(),
            self.styled("[ Element Type ]:", purple),
            element.name()
        )
    }

    fn emit(&self, line: &str) {
        println!("{line}");
    }
}

impl Default for ConsoleProgress {
    fn default() -> Self {
        Self::new(true)
    }
}

impl ProgressReporter for ConsoleProgress {
    fn suite_started(&mut self) {
        info!("all benchmarks started");
        self.emit(&self.styled("[ Started All Benchmarks ]", gold));
    }

    fn suite_finished(&mut self) {
        info!("all benchmarks finished");
        self.emit(&self.styled("[ Finished All Benchmarks ]", light_green));
    }

    fn started(&mut self, workload: Workload, element: ElementKind) {
        info!(workload = workload.key(), element = element.name(), "benchmark started");
        self.emit(&self.pair_line(true, workload, element));
    }

    fn finished(&mut self, workload: Workload, element: ElementKind) {
        info!(workload = workload.key(), element = element.name(), "benchmark finished");
        self.emit(&self.pair_line(false, workload, element));
    }
}

/// Discards notifications apart from the tracing events.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn started(&mut self, workload: Workload, element: ElementKind) {
        info!(workload = workload.key(), element = element.name(), "benchmark started");
    }

    fn finished(&mut self, workload: Workload, element: ElementKind) {
        info!(workload = workload.key(), element = element.name(), "benchmark finished");
    }
}
