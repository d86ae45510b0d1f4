use crate::config::DisplayConfig;

/// Box-drawing characters for table borders
#[derive(Debug, Clone, PartialEq)]
pub struct BoxChars {
    pub horizontal: String,
    pub double_horizontal: String,
    pub vertical: String,
    pub top_left: String,
    pub top_right: String,
    pub bottom_left: String,
    pub bottom_right: String,
    pub top_junction: String,
    pub bottom_junction: String,
    pub left_junction: String,
    pub right_junction: String,
    pub cross: String,
}

impl BoxChars {
    pub fn unicode() -> Self {
        Self {
            horizontal: "─".to_string(),
            double_horizontal: "═".to_string(),
            vertical: "│".to_string(),
            top_left: "╭".to_string(),
            top_right: "╮".to_string(),
            bottom_left: "╰".to_string(),
            bottom_right: "╯".to_string(),
            top_junction: "┬".to_string(),
            bottom_junction: "┴".to_string(),
            left_junction: "├".to_string(),
            right_junction: "┤".to_string(),
            cross: "┼".to_string(),
        }
    }

    pub fn ascii() -> Self {
        Self {
            horizontal: "-".to_string(),
            double_horizontal: "=".to_string(),
            vertical: "|".to_string(),
            top_left: "+".to_string(),
            top_right: "+".to_string(),
            bottom_left: "+".to_string(),
            bottom_right: "+".to_string(),
            top_junction: "+".to_string(),
            bottom_junction: "+".to_string(),
            left_junction: "+".to_string(),
            right_junction: "+".to_string(),
            cross: "+".to_string(),
        }
    }

    pub fn from_display(display: &DisplayConfig) -> Self {
        if display.use_unicode {
            Self::unicode()
        } else {
            Self::ascii()
        }
    }
}

/// Format a header with text and underline
///
/// # Arguments
/// * `text` - The header text to display
/// * `double_line` - If true, uses double-line (═/=), otherwise single-line (─/-)
/// * `chars` - Character set to draw the underline with
pub fn format_header(text: &str, double_line: bool, chars: &BoxChars) -> String {
    let separator_char = if double_line {
        &chars.double_horizontal
    } else {
        &chars.horizontal
    };
    format!("{}\n{}\n", text, separator_char.repeat(text.chars().count()))
}

/// Width of the team abbreviation column in score tables
const TEAM_ABBREV_COL_WIDTH: usize = 5;

/// Width of each period column in score tables
const PERIOD_COL_WIDTH: usize = 4;

/// One side of a period-by-period score table: team abbreviation, per-period
/// values, and the total. `None` renders as a dash (period not played yet,
/// or score withheld).
#[derive(Debug, Clone)]
pub struct ScoreRow {
    pub abbrev: String,
    pub periods: Vec<Option<u32>>,
    pub total: Option<u32>,
}

/// Build a bordered score table with one column per period plus a totals
/// column. `labels` names the period columns ("1".."9" for innings,
/// "1".."4" for quarters); both rows are padded to the label count.
pub fn build_score_table(
    labels: &[String],
    away: &ScoreRow,
    home: &ScoreRow,
    chars: &BoxChars,
) -> String {
    let total_cols = labels.len() + 2; // team column + periods + T
    let mut output = String::new();

    output.push_str(&border_row(
        total_cols,
        &chars.top_left,
        &chars.top_junction,
        &chars.top_right,
        chars,
    ));

    // Header: blank over the team column, then the period labels and T.
    output.push_str(&chars.vertical);
    output.push_str(&format!("{:^width$}", "", width = TEAM_ABBREV_COL_WIDTH));
    for label in labels {
        output.push_str(&chars.vertical);
        output.push_str(&format!("{label:^PERIOD_COL_WIDTH$}"));
    }
    output.push_str(&chars.vertical);
    output.push_str(&format!("{:^PERIOD_COL_WIDTH$}", "T"));
    output.push_str(&chars.vertical);
    output.push('\n');

    output.push_str(&border_row(
        total_cols,
        &chars.left_junction,
        &chars.cross,
        &chars.right_junction,
        chars,
    ));
    output.push_str(&team_row(away, labels.len(), chars));
    output.push_str(&team_row(home, labels.len(), chars));
    output.push_str(&border_row(
        total_cols,
        &chars.bottom_left,
        &chars.bottom_junction,
        &chars.bottom_right,
        chars,
    ));

    output
}

fn border_row(total_cols: usize, left: &str, junction: &str, right: &str, chars: &BoxChars) -> String {
    let mut border = String::new();
    border.push_str(left);
    border.push_str(&chars.horizontal.repeat(TEAM_ABBREV_COL_WIDTH));
    for _ in 1..total_cols {
        border.push_str(junction);
        border.push_str(&chars.horizontal.repeat(PERIOD_COL_WIDTH));
    }
    border.push_str(right);
    border.push('\n');
    border
}

fn cell(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())
}

fn team_row(row: &ScoreRow, period_count: usize, chars: &BoxChars) -> String {
    let mut out = String::new();
    out.push_str(&chars.vertical);
    out.push_str(&format!("{:^TEAM_ABBREV_COL_WIDTH$}", row.abbrev));
    for i in 0..period_count {
        out.push_str(&chars.vertical);
        let value = row.periods.get(i).copied().flatten();
        out.push_str(&format!("{:^PERIOD_COL_WIDTH$}", cell(value)));
    }
    out.push_str(&chars.vertical);
    out.push_str(&format!("{:^PERIOD_COL_WIDTH$}", cell(row.total)));
    out.push_str(&chars.vertical);
    out.push('\n');
    out
}

/// Format an RFC 3339 start time in the local timezone; falls back to the
/// raw string when the upstream timestamp does not parse.
pub fn format_start_time(start_time: &str, time_format: &str) -> String {
    match chrono::DateTime::parse_from_rfc3339(start_time) {
        Ok(parsed) => {
            let local: chrono::DateTime<chrono::Local> = parsed.into();
            local.format(time_format).to_string()
        }
        Err(_) => start_time.to_string(),
    }
}
