/// Terminator written after every complete QIF line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub enum LineEnding {
    #[default]
    Lf,
    CrLf
}

impl LineEnding {
    pub fn as_str(&self) -> &'static str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n"
        }
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct WriterOptions {
    pub line_ending: LineEnding,
    /// When false, the `L:` line of a split transaction carries no terminator and runs into
    /// the first `S:` line. This is what existing consumers of the output expect.
    pub terminate_split_category: bool
}
