use design_patterns::demo::{self, Pattern};
use std::process::ExitCode;

fn main() -> ExitCode {
    demo::run_standalone(Pattern::Decorator)
}
