use crate::application::engine::TableSnapshot;
use crate::error::Result;
use std::io::Write;

/// Writes final table statuses as CSV with a `table,status` header.
pub struct StatusWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatusWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_statuses(&mut self, snapshots: impl IntoIterator<Item = TableSnapshot>) -> Result<()> {
        let mut wrote_any = false;
        for snapshot in snapshots {
            self.writer.serialize(snapshot)?;
            wrote_any = true;
        }
        if !wrote_any {
            self.writer.write_record(["table", "status"])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
