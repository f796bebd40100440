/// Runtime options gathered from the command line.
#[derive(Debug, Clone, Copy, Default)]
pub struct Config {
    /// Skips the banner printed at startup.
    pub no_banner: bool,
    /// Output reduction level.
    ///
    /// `0` prints everything, `1` drops headers and decorations,
    /// `2` and above only prints results and warnings.
    pub quiet: u8,
}

impl Config {
    pub fn is_quiet(&self) -> bool {
        self.quiet > 0
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
