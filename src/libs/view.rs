use crate::libs::formatter::FormattedCycle;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn cycles(cycles: &[FormattedCycle]) {
        let mut table = Table::new();

        table.add_row(row!["ID", "TASK", "DURATION", "STARTED", "STATUS"]);
        for cycle in cycles {
            table.add_row(row![cycle.id, cycle.task, cycle.duration, cycle.start, cycle.status]);
        }
        table.printstd();
    }
}
