//! Character display stand-in that mirrors both rows over RTT.
//!
//! Useful for bring-up before an LCD is wired: each row is buffered and the
//! pair is printed whenever the label row changes or a second ticks over.

use led_chronograph::{CharDisplay, DISPLAY_COLUMNS};
use rtt_target::rprintln;

pub struct RttDisplay {
    rows: [[u8; DISPLAY_COLUMNS]; 2],
    col: usize,
    row: usize,
    last_printed: [[u8; DISPLAY_COLUMNS]; 2],
}

impl RttDisplay {
    pub fn new() -> Self {
        Self {
            rows: [[b' '; DISPLAY_COLUMNS]; 2],
            col: 0,
            row: 0,
            last_printed: [[0; DISPLAY_COLUMNS]; 2],
        }
    }

    fn row_str(&self, row: usize) -> &str {
        core::str::from_utf8(&self.rows[row]).unwrap_or("")
    }

    fn maybe_print(&mut self) {
        // Row 1 reads HH:MM:SS:mmm; bytes 0..8 change once per second.
        let label_changed = self.rows[0] != self.last_printed[0];
        let second_changed = self.rows[1][..8] != self.last_printed[1][..8];

        if label_changed || second_changed {
            rprintln!("{} | {}", self.row_str(0), self.row_str(1));
            self.last_printed = self.rows;
        }
    }
}

impl Default for RttDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl CharDisplay for RttDisplay {
    fn set_cursor(&mut self, col: u8, row: u8) {
        self.col = col as usize;
        self.row = (row as usize).min(1);
    }

    fn write_str(&mut self, text: &str) {
        for byte in text.bytes() {
            if self.col < DISPLAY_COLUMNS {
                self.rows[self.row][self.col] = byte;
                self.col += 1;
            }
        }
        self.maybe_print();
    }
}
