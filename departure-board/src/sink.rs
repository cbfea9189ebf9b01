/// Line-oriented destination for everything the board displays.
pub trait DisplaySink {
    /// Receives one fully formatted line, without its trailing newline.
    fn emit(&mut self, line: &str);
}

/// Prints every line to standard output.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl DisplaySink for StdoutSink {
    fn emit(&mut self, line: &str) {
        println!("{}", line);
    }
}

/// Keeps the lines in memory, in the order they were emitted.
impl DisplaySink for Vec<String> {
    fn emit(&mut self, line: &str) {
        self.push(line.to_string());
    }
}
