use owo_colors::OwoColorize;
use slc_syntax::error::{Error, ErrorKind};

/// Print the failing stage, the message, and a caret under the source line.
pub fn render_error(stage: &str, source: &str, err: &Error) {
    eprintln!("{}: {}", stage.red().bold(), err.kind.to_string().red());
    eprintln!("  --> line {}, column {}", err.line, err.col);
    if let Some(src_line) = source.lines().nth(err.line.saturating_sub(1)) {
        let line_num_str = format!("{:3} | ", err.line);
        eprintln!("     |");
        eprintln!("{}{}", line_num_str.bright_black(), src_line);

        let mut marker = String::new();
        marker.push_str(&" ".repeat(line_num_str.len()));
        if err.col > 1 {
            marker.push_str(&" ".repeat(err.col - 1));
        }
        marker.push('^');
        eprintln!("{}{}", marker.red(), " error here".red());
        eprintln!("     |");
    }
    provide_error_suggestions(&err.kind);
}

pub fn provide_error_suggestions(kind: &ErrorKind) {
    match kind {
        ErrorKind::Lex { found } => {
            eprintln!("{}", format!("Help: '{}' is not part of the language.", found).yellow());
            eprintln!(
                "    {}",
                "Operators: && || == != < > <= >= + - * / % =  Punctuation: . , : ; ( ) { } [ ]".bright_black()
            );
        }
        ErrorKind::UnterminatedString => {
            eprintln!("{}", "Help: String is missing its closing quote.".yellow());
            eprintln!("    {}", "Make sure every \" has a matching closing \"".bright_black());
        }
        ErrorKind::MalformedNumber { .. } => {
            eprintln!("{}", "Help: A decimal point must be followed by digits.".yellow());
            eprintln!("    {}", "Write 1.0 instead of 1.".bright_black());
        }
        ErrorKind::UnclosedBlock => {
            eprintln!("{}", "Help: A block was opened with '{' but never closed.".yellow());
            eprintln!("    {}", "Check that braces are balanced".bright_black());
        }
        ErrorKind::InvalidLiteral { .. } => {
            eprintln!("{}", "Help: Number is out of range.".yellow());
            eprintln!("    {}", "Integers are 64-bit signed values".bright_black());
        }
        ErrorKind::TooDeep => {
            eprintln!("{}", "Help: Expression or block is nested too deeply.".yellow());
            eprintln!("    {}", "Split it into smaller pieces with variables".bright_black());
        }
        ErrorKind::Parse { expected, .. } => {
            if expected == "type keyword" {
                eprintln!("{}", "Help: Top-level code must be inside a function.".yellow());
                eprintln!("    {}", "Example: void main() { printf(\"hello\"); }".bright_black());
            } else if expected == "';'" {
                eprintln!("{}", "Help: Statements end with ';'.".yellow());
            } else if expected == "expression" {
                eprintln!("{}", "Help: A value or expression is missing here.".yellow());
            }
        }
    }
}
