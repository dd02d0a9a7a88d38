//! Serial number formatting

/// Width of a serial number, zero padded
pub const SERIAL_WIDTH: usize = 4;

/// Serial number for the record at 1-based `position`
pub fn format_serial(position: usize) -> String {
    format!("{:0width$}", position, width = SERIAL_WIDTH)
}

/// Whether `serials` is exactly `0001..N` in order
pub fn is_dense<'a>(serials: impl IntoIterator<Item = &'a str>) -> bool {
    serials
        .into_iter()
        .enumerate()
        .all(|(i, serial)| serial == format_serial(i + 1))
}
