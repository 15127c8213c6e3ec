use crate::types::report::HealthReport;

pub fn to_markdown(report: &HealthReport) -> String {
    let mut output = String::new();
    output.push_str(&format!("# Health Report: {}\n\n", report.repo));
    output.push_str(&format!(
        "Score: {}/100 ({})\n\nFiles analyzed: {}\n\n",
        report.score,
        report.status.as_str(),
        report.file_count
    ));

    output.push_str("## Findings\n\n");
    if report.findings.is_empty() {
        output.push_str("- none\n\n");
    } else {
        for finding in &report.findings {
            output.push_str(&format!(
                "- [{}] {}: {}\n  - remedy: {}\n  - urgency: {}\n",
                finding.severity.as_str(),
                finding.title,
                finding.explanation,
                finding.remedy,
                finding.urgency
            ));
        }
        output.push('\n');
    }

    output.push_str("## Largest Files\n\n");
    if report.largest_files.is_empty() {
        output.push_str("- none\n");
    } else {
        output.push_str("| path | size (bytes) | risk |\n|---|---|---|\n");
        for file in &report.largest_files {
            output.push_str(&format!(
                "| {} | {} | {}% ({}) |\n",
                file.path, file.size, file.risk_percent, file.risk_label
            ));
        }
    }

    output
}
