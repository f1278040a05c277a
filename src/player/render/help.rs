//! Key help for the terminal player.

/// Help text lines, printed when `?` is pressed.
pub const HELP_LINES: &[&str] = &[
    "╔═════════════════════════════════════╗",
    "║        lyrsync Player Keys          ║",
    "╠═════════════════════════════════════╣",
    "║  Space        Pause / Resume        ║",
    "║  <-/->  ,/.   Seek -/+ step         ║",
    "║  Home / End   First / last line     ║",
    "║  0-9          Seek to 0%-90%        ║",
    "║  ?            Show this help        ║",
    "║  q / Esc      Quit                  ║",
    "╚═════════════════════════════════════╝",
];

/// Width of the help box in columns.
pub const HELP_BOX_WIDTH: usize = 39;
