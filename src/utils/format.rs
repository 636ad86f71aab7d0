const FACTOR: u64 = 1000;
const UNITS: &[u8] = b"kMGTPE";

/// Formats a byte count with decimal (power of 1000) units, e.g. `1.5 kB`.
pub fn humanize(bytes: u64) -> String {
    if bytes < FACTOR {
        return format!("{} B", bytes);
    }
    let mut divisor = FACTOR;
    let mut exponent = 0;
    let mut scaled = bytes / FACTOR;
    while scaled >= FACTOR {
        divisor *= FACTOR;
        exponent += 1;
        scaled /= FACTOR;
    }
    format!(
        "{:.1} {}B",
        bytes as f64 / divisor as f64,
        UNITS[exponent] as char
    )
}
