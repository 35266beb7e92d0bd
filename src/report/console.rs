use crate::report::report_model::ResolutionReport;

// ============================================================================
// Console reporter: formatted terminal output
// ============================================================================

/// Format a resolution report for terminal output.
///
/// Produces output like:
/// ```text
/// ✓ spell-30451-3  Arcane Blast (2 Stacks)
///     icon: https://wow.zamimg.com/images/wow/icons/large/spell_arcane_blast.jpg
///     link: https://wowhead.com/classic/spell=30451
/// ✗ item-1  item 1 not found in data source
///
/// === Results: 1 resolved, 1 failed ===
/// ```
pub fn format_console_report(report: &ResolutionReport) -> String {
    let mut out = String::new();

    for entry in &report.entries {
        match &entry.error {
            None => {
                out.push_str(&format!(
                    "\u{2713} {}  {}\n",
                    entry.id,
                    entry.name.as_deref().unwrap_or("")
                ));
                if let Some(icon) = entry.icon_url.as_deref().filter(|i| !i.is_empty()) {
                    out.push_str(&format!("    icon: {}\n", icon));
                }
                if let Some(ref href) = entry.href {
                    out.push_str(&format!("    link: {}\n", href));
                }
            }
            Some(error) => {
                out.push_str(&format!("\u{2717} {}  {}\n", entry.id, error));
            }
        }
    }

    out.push_str(&format!(
        "\n=== Results: {} resolved, {} failed ===\n",
        report.resolved, report.failed
    ));

    out
}
