//! Input file layout: HRML lines, an empty line, then query lines up to the
//! next empty line. Anything after that is ignored.

/// The two sections of an input file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    pub markup: String,
    pub queries: Vec<String>,
}

pub fn split_input(source: &str) -> Input {
    let mut lines = source.lines();
    let markup: Vec<&str> = lines
        .by_ref()
        .take_while(|line| !line.trim().is_empty())
        .collect();
    let queries = lines
        .take_while(|line| !line.trim().is_empty())
        .map(str::to_string)
        .collect();

    Input {
        markup: markup.join("\n"),
        queries,
    }
}
