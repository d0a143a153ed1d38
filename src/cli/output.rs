//! Output formatting utilities

use crate::application::VariableInfo;
use crate::domain::{format_date, DayRecord, VariableKind, VariableName};

/// Format one location's variables under a heading
pub fn format_variable_list(heading: &str, names: &[VariableName]) -> String {
    let mut output = format!("{}:\n", heading);
    if names.is_empty() {
        output.push_str("  None\n");
        return output;
    }

    for name in names {
        output.push_str(&format!("  {}\n", name));
    }
    output
}

/// Format the details of one variable
pub fn format_variable_info(info: &VariableInfo) -> String {
    let kind = match &info.kind {
        VariableKind::Numeric => "numeric".to_string(),
        VariableKind::Categorical(categories) => {
            format!("categorical ({})", categories.join(", "))
        }
    };

    format!(
        "name     = {}\nlocation = {}\nkind     = {}\nentries  = {}\n",
        info.name, info.location, kind, info.entries
    )
}

/// Format the day log for display
pub fn format_day_list(days: &[DayRecord]) -> String {
    if days.is_empty() {
        return "No days recorded".to_string();
    }

    let mut output = String::new();
    for day in days {
        output.push_str(&format!("{}  {}\n", format_date(day.date), day.entry_id));
    }
    output
}
