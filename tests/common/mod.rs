use rand::Rng;
use std::fs::File;
use std::io::Error;
use std::path::Path;

pub const HEADER: [&str; 5] = ["type", "table", "amount", "method", "allowances"];

/// Writes `rows` request events spread over tables `1..=tables`.
pub fn generate_requests_csv(path: &Path, rows: usize, tables: u16) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    for i in 0..rows {
        let table = (i as u16 % tables) + 1;
        wtr.write_record(["request", &table.to_string(), "", "", ""])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes a script mixing every event type, chosen at random.
pub fn generate_mixed_csv(path: &Path, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);
    wtr.write_record(HEADER)?;

    let methods = ["cash", "bank_transfer", "momo", "vnpay"];
    let allowances = ["manager", "director", "accountant"];
    let mut rng = rand::thread_rng();

    for _ in 0..rows {
        let table = rng.gen_range(1..=20u16).to_string();
        match rng.gen_range(0..4) {
            0 => wtr.write_record(["request", &table, "", "", ""])?,
            1 => wtr.write_record(["fix", &table, "", "", ""])?,
            2 => {
                let amount = rng.gen_range(1..=5_000_000u64).to_string();
                let method = methods[rng.gen_range(0..methods.len())];
                wtr.write_record(["pay", "", &amount, method, ""])?
            }
            _ => {
                let allowance = allowances[rng.gen_range(0..allowances.len())];
                wtr.write_record(["salary", "", "15000000", "", allowance])?
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
