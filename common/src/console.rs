/// Destination of the human-readable lines written by the pattern demos.
pub trait Console {
    fn print_line(&self, line: &str);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutConsole;

impl Console for StdoutConsole {
    fn print_line(&self, line: &str) {
        println!("{line}");
    }
}
