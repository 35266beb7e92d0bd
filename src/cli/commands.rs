use std::io::Read;

use crate::action::action_model::ActionId;
use crate::report::console::format_console_report;
use crate::report::report_model::{ResolutionReport, ResolvedEntry};
use crate::resolve::cache::ResolveCache;
use crate::resolve::resolver::ActionResolver;
use crate::trace::logger::TraceLogger;
use crate::trace::trace::ResolveTraceEvent;

// ============================================================================
// resolve subcommand
// ============================================================================

/// Resolve every id, print a console report and return whether all resolved.
pub async fn cmd_resolve(
    ids: &[String],
    viewer: Option<i32>,
    lang_prefix: &str,
    resolver: ActionResolver,
    tracer: &TraceLogger,
) -> Result<bool, Box<dyn std::error::Error>> {
    let report = resolve_report(ids, viewer, lang_prefix, resolver, tracer).await;
    print!("{}", format_console_report(&report));
    Ok(report.all_resolved())
}

/// Resolve ids into a report without printing. Duplicate ids hit the data
/// source once.
pub async fn resolve_report(
    ids: &[String],
    viewer: Option<i32>,
    lang_prefix: &str,
    resolver: ActionResolver,
    tracer: &TraceLogger,
) -> ResolutionReport {
    let cache = ResolveCache::new(resolver);
    let mut entries = Vec::with_capacity(ids.len());

    for (step, raw) in ids.iter().enumerate() {
        let id: ActionId = match raw.parse() {
            Ok(id) => id,
            Err(e) => {
                tracing::warn!("{}", e);
                entries.push(ResolvedEntry {
                    id: raw.clone(),
                    name: None,
                    icon_url: None,
                    href: None,
                    error: Some(e.to_string()),
                });
                continue;
            }
        };

        tracing::info!("Resolving {}", raw);

        let trace = ResolveTraceEvent::now(step as u64, &id);
        match cache.fill(&id, viewer).await {
            Ok(filled) => {
                tracer.log(&trace.with_filled(&filled));
                entries.push(ResolvedEntry::resolved(&filled, lang_prefix));
            }
            Err(e) => {
                tracer.log(&trace.with_error(&e));
                entries.push(ResolvedEntry::failed(&id, e));
            }
        }
    }

    ResolutionReport::from_entries(entries)
}

// ============================================================================
// expand subcommand
// ============================================================================

/// Read log text from `input` (or stdin) and print it with every action id
/// token replaced by its display name.
pub async fn cmd_expand(
    input: Option<&str>,
    resolver: ActionResolver,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = match input {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read {}: {}", path, e))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let expanded = resolver.replace_all_in_string(&text).await?;
    print!("{}", expanded);
    Ok(())
}

// ============================================================================
// key subcommand
// ============================================================================

pub fn cmd_key(id: &str) -> Result<String, Box<dyn std::error::Error>> {
    let id: ActionId = id.parse()?;
    Ok(id.to_key_string())
}
