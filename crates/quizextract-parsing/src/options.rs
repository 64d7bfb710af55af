use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::ParsingConfig;

/// `A)`, `b.`, `D)` ... at the very start of the trimmed line.
static OPTION_LINE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Da-d][).]").unwrap());

/// Trim whitespace from both ends of `s`, counting the ASCII separator
/// controls `\x1c`-`\x1f` as whitespace too.
pub fn strip_line(s: &str) -> &str {
    s.trim_matches(|c: char| c.is_whitespace() || ('\x1c'..='\x1f').contains(&c))
}

/// Whether `line` is an answer choice: after trimming, it starts with a
/// letter A-D (either case) immediately followed by `)` or `.`.
pub fn is_option_line(line: &str) -> bool {
    is_option_line_with_config(line, &ParsingConfig::default())
}

pub(crate) fn is_option_line_with_config(line: &str, config: &ParsingConfig) -> bool {
    let re = config.option_line_re.as_ref().unwrap_or(&OPTION_LINE_RE);
    re.is_match(strip_line(line))
}

/// Collect the trimmed option lines from `lines`, in order.
pub fn extract_options<'a, I>(lines: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    extract_options_with_config(lines, &ParsingConfig::default())
}

pub(crate) fn extract_options_with_config<'a, I>(lines: I, config: &ParsingConfig) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter(|line| is_option_line_with_config(line, config))
        .map(|line| strip_line(line).to_string())
        .collect()
}
