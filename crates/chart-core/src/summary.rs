// File: crates/chart-core/src/summary.rs
// Summary: Human-readable console echo of each instrument's final return.

use crate::series::ReturnSet;

const RULE: &str = "============================================================";

/// `"{id:<10}: {ret:+7.2}%"`, one line per instrument.
pub fn summary_lines(returns: &ReturnSet) -> Vec<String> {
    returns
        .final_returns()
        .into_iter()
        .map(|(id, ret)| format!("{id:<10}: {ret:+7.2}%"))
        .collect()
}

/// Full block with heading and rules, newline-terminated.
pub fn format_summary(heading: &str, returns: &ReturnSet) -> String {
    let mut out = format!("{RULE}\n{heading}\n{RULE}\n");
    for line in summary_lines(returns) {
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str(RULE);
    out.push('\n');
    out
}
