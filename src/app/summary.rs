use crate::results::{Metric, ResultTable};

const SIZE_WIDTH: usize = 12;
const CONTAINER_WIDTH: usize = 22;
const METRIC_WIDTH: usize = 25;
const RULE_WIDTH: usize = 120;

/// Fixed-width console table of the loaded results, one line per row.
pub(crate) fn summary_lines(table: &ResultTable) -> Vec<String> {
    let mut lines = Vec::with_capacity(table.len().saturating_add(2));

    let mut header = format!(
        "{:<size$} {:<container$}",
        "Size",
        "Container",
        size = SIZE_WIDTH,
        container = CONTAINER_WIDTH
    );
    for metric in Metric::ALL {
        let title = format!("{} (ms ±95%CI)", metric.title());
        header.push_str(&format!(" {:>width$}", title, width = METRIC_WIDTH));
    }
    lines.push(header);
    lines.push("-".repeat(RULE_WIDTH));

    for row in table.rows() {
        let mut line = format!(
            "{:<size$} {:<container$}",
            row.size,
            row.container,
            size = SIZE_WIDTH,
            container = CONTAINER_WIDTH
        );
        for metric in Metric::ALL {
            let stats = row.stats(metric);
            line.push_str(&format!(" {:>15.3} ±{:>10.3}", stats.mean, stats.ci95));
        }
        lines.push(line);
    }

    lines
}

pub(crate) fn print_summary(table: &ResultTable) {
    for line in summary_lines(table) {
        println!("{}", line);
    }
}
