use std::io::Write;

use crate::models::download::DownloadProgress;
use crate::utils::humanize;

/// Receives download progress after every chunk.
pub trait ProgressSink {
    fn report(&mut self, progress: &DownloadProgress);

    fn finish(&mut self, _progress: &DownloadProgress) {}
}

/// Renders progress on a single terminal line, rewritten with `\r`.
pub struct ConsoleProgress<W: Write> {
    out: W,
    last_width: usize,
}

impl ConsoleProgress<std::io::Stdout> {
    pub fn stdout() -> Self {
        ConsoleProgress::new(std::io::stdout())
    }
}

impl<W: Write> ConsoleProgress<W> {
    pub fn new(out: W) -> Self {
        ConsoleProgress { out, last_width: 0 }
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn render_line(progress: &DownloadProgress) -> String {
    let downloaded = humanize(progress.bytes_downloaded);
    match progress.percent() {
        Some(percent) => format!(
            "Downloading... {} of {} ({:.2}%) complete",
            downloaded,
            humanize(progress.total_size),
            percent
        ),
        None => format!("Downloading... {} complete", downloaded),
    }
}

impl<W: Write> ProgressSink for ConsoleProgress<W> {
    fn report(&mut self, progress: &DownloadProgress) {
        let line = render_line(progress);
        // Pad over leftovers of a longer previous line.
        let pad = self.last_width.saturating_sub(line.len());
        self.last_width = line.len();
        let _ = write!(self.out, "\r{}{}", line, " ".repeat(pad));
        let _ = self.out.flush();
    }

    fn finish(&mut self, _progress: &DownloadProgress) {
        if self.last_width > 0 {
            let _ = writeln!(self.out);
        }
    }
}
