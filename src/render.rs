//! Text reporter.
//!
//! Renders one policy run as a title banner, a Gantt-style timeline, and a
//! schedule table with an aggregate-metric footer. Writes to any
//! `io::Write`, so output can go to stdout or be captured in tests. Holds
//! no state of its own.

use std::io::{self, Write};

use crate::policy::PolicyReport;

const TABLE_HEADERS: [&str; 7] = [
    "ID",
    "Priority",
    "Burst",
    "Arrival",
    "Wait",
    "Turnaround",
    "Exit",
];

/// Renders a full report: banner, Gantt trace, schedule table, metrics.
pub fn write_report<W: Write>(w: &mut W, title: &str, report: &PolicyReport) -> io::Result<()> {
    write_title(w, title)?;
    write_gantt(w, report)?;
    write_table(w, report)
}

fn write_title<W: Write>(w: &mut W, title: &str) -> io::Result<()> {
    let bar = "-".repeat(title.len() * 2);
    writeln!(w, "{bar}")?;
    writeln!(w, "{}{title}", " ".repeat(title.len() / 2))?;
    writeln!(w, "{bar}")
}

/// Process ids over contiguous intervals, with start marks and the final
/// stop underneath.
fn write_gantt<W: Write>(w: &mut W, report: &PolicyReport) -> io::Result<()> {
    writeln!(w, "Gantt schedule")?;

    let slices = &report.timeline.slices;
    write!(w, "|")?;
    for slice in slices {
        write!(w, "{:^8}|", slice.process)?;
    }
    writeln!(w)?;

    for (i, slice) in slices.iter().enumerate() {
        write!(w, "{}\t", slice.start)?;
        if i == slices.len() - 1 {
            write!(w, "{}", slice.stop)?;
        }
    }
    writeln!(w)?;
    writeln!(w)
}

fn write_table<W: Write>(w: &mut W, report: &PolicyReport) -> io::Result<()> {
    writeln!(w, "Schedule table")?;

    let cells: Vec<[String; 7]> = report
        .rows
        .iter()
        .map(|r| {
            [
                r.process.to_string(),
                r.priority.to_string(),
                r.burst.to_string(),
                r.arrival.to_string(),
                r.waiting.to_string(),
                r.turnaround.to_string(),
                r.completion.to_string(),
            ]
        })
        .collect();

    let mut widths: [usize; 7] = TABLE_HEADERS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.len());
        }
    }

    for (header, &width) in TABLE_HEADERS.iter().zip(widths.iter()) {
        write!(w, "{header:>width$}  ")?;
    }
    writeln!(w)?;
    let total: usize = widths.iter().map(|width| width + 2).sum();
    writeln!(w, "{}", "-".repeat(total))?;

    for row in &cells {
        for (cell, &width) in row.iter().zip(widths.iter()) {
            write!(w, "{cell:>width$}  ")?;
        }
        writeln!(w)?;
    }
    writeln!(w, "{}", "-".repeat(total))?;

    let m = &report.metrics;
    writeln!(w, "Average waiting:    {:.2}", m.average_waiting)?;
    writeln!(w, "Average turnaround: {:.2}", m.average_turnaround)?;
    writeln!(w, "Throughput:         {:.2}/t", m.throughput)?;
    writeln!(w)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Process;
    use crate::policy::FcfsScheduler;

    fn render_fcfs() -> String {
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 3),
            Process::new(3, 2, 1),
        ];
        let report = FcfsScheduler::new().run(&processes);

        let mut out = Vec::new();
        write_report(&mut out, "First-come, first-serve", &report).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_title_banner() {
        let out = render_fcfs();
        assert!(out.contains("First-come, first-serve"));
        assert!(out.starts_with("------"));
    }

    #[test]
    fn test_gantt_marks() {
        let out = render_fcfs();
        assert!(out.contains("Gantt schedule"));
        // Start marks 0, 5, 8 and the final stop 9.
        assert!(out.contains("0\t5\t8\t9"));
    }

    #[test]
    fn test_table_headers_and_rows() {
        let out = render_fcfs();
        assert!(out.contains("Schedule table"));
        for header in TABLE_HEADERS {
            assert!(out.contains(header), "missing header {header}");
        }
    }

    #[test]
    fn test_metric_footer() {
        let out = render_fcfs();
        assert!(out.contains("Average waiting:    3.33"));
        assert!(out.contains("Average turnaround: 6.33"));
        assert!(out.contains("Throughput:         0.33/t"));
    }

    #[test]
    fn test_empty_report_renders() {
        let report = FcfsScheduler::new().run(&[]);
        let mut out = Vec::new();
        write_report(&mut out, "First-come, first-serve", &report).unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.contains("Throughput:         0.00/t"));
    }
}
