//! Command line definition.
//!
//! Lives in the library so `xtask` can render the man page from it.

use clap::Parser;

const KEYS_HELP: &str = "\
Keys:
  space      pause / resume
  a / d      seek -3s / +3s
  w / s      seek -10s / +10s
  x / c      step one frame back / forward
  j / k      next / previous entry
  1 .. 5     speed 1x, 1.2x, 1.5x, 2x, 3x
  f          save the current frame to your home directory
  e          show / hide position label and scrub bar
  q          quit

Click the scrub bar to jump to that position.";

/// vidcue - keyboard-driven video playlist player
#[derive(Debug, Parser)]
#[command(name = "vidcue", version, about, long_about = None, after_help = KEYS_HELP)]
pub struct Cli {
    /// Media files or URLs to play, in order
    #[arg(required = true, num_args = 1.., value_name = "MEDIA")]
    pub paths: Vec<String>,
}
