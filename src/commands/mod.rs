pub mod console;
pub mod images;
pub mod iso;

use std::io::Write;

use crate::error::{Error, Result};

/// Writes command output, mapping failures to an I/O error on stdout.
pub(crate) fn emit<W: Write>(out: &mut W, bytes: &[u8]) -> Result<()> {
    out.write_all(bytes)
        .and_then(|_| out.flush())
        .map_err(|e| Error::io("<stdout>", e))
}
