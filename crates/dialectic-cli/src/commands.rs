//! Subcommand implementations
//!
//! Each command writes to the supplied writer so output can be captured in
//! tests; `main` wires them to stdout.

use anyhow::{Context, Result};
use dialectic_model::FrameworkKey;
use dialectic_semantics::{Dialectic, Discrepancy, ExtensionSelection};
use serde::Serialize;
use std::io::Write;

/// Keys to operate on: the one requested, or every registered key
///
/// # Errors
/// The requested key is not registered.
pub fn select_keys(engine: &Dialectic, requested: Option<&str>) -> Result<Vec<FrameworkKey>> {
    match requested {
        Some(name) => {
            let key = FrameworkKey::from(name);
            engine.snapshot(&key)?;
            Ok(vec![key])
        }
        None => Ok(engine.keys()),
    }
}

/// Print grounded partition, preferred extensions and acceptance per framework
///
/// # Errors
/// Lookup or output failures.
pub fn analyze(
    engine: &Dialectic,
    keys: &[FrameworkKey],
    json: bool,
    out: &mut impl Write,
) -> Result<()> {
    let reports = keys
        .iter()
        .map(|key| engine.report(key).with_context(|| format!("analysing {key}")))
        .collect::<Result<Vec<_>>>()?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &reports)?;
        writeln!(out)?;
        return Ok(());
    }

    for (position, report) in reports.iter().enumerate() {
        if position > 0 {
            writeln!(out)?;
        }
        out.write_all(report.render_text().as_bytes())?;
    }
    Ok(())
}

#[derive(Serialize)]
struct AuditEntry<'a> {
    key: &'a FrameworkKey,
    discrepancies: &'a [Discrepancy],
}

/// Print disagreements between authored claims and computed semantics
///
/// Returns the total number of discrepancies found.
///
/// # Errors
/// Lookup or output failures.
pub fn audit(
    engine: &Dialectic,
    keys: &[FrameworkKey],
    json: bool,
    out: &mut impl Write,
) -> Result<usize> {
    let findings = keys
        .iter()
        .map(|key| engine.audit(key).map(|found| (key, found)))
        .collect::<Result<Vec<_>, _>>()?;
    let total = findings.iter().map(|(_, found)| found.len()).sum();

    if json {
        let entries: Vec<AuditEntry<'_>> = findings
            .iter()
            .map(|(key, found)| AuditEntry {
                key,
                discrepancies: found,
            })
            .collect();
        serde_json::to_writer_pretty(&mut *out, &entries)?;
        writeln!(out)?;
        return Ok(total);
    }

    for (key, found) in &findings {
        if found.is_empty() {
            writeln!(out, "{key}: claims agree with computed semantics")?;
            continue;
        }
        writeln!(out, "{key}: {} discrepancies", found.len())?;
        for discrepancy in found {
            writeln!(out, "  {discrepancy}")?;
        }
    }
    Ok(total)
}

/// Print attacks on and from one argument
///
/// With a `selection`, the argument's status under that extension is shown
/// after its header.
///
/// # Errors
/// Unknown key, argument or preferred index, or output failure.
pub fn attacks(
    engine: &Dialectic,
    key: &FrameworkKey,
    argument: &str,
    selection: Option<ExtensionSelection>,
    out: &mut impl Write,
) -> Result<()> {
    let framework = engine.framework(key)?;
    let subject = framework.argument(argument)?;
    writeln!(out, "{} [{}] {}", subject.id, subject.agent_id, subject.claim)?;
    if let Some(selection) = selection {
        let label = engine
            .status_of(key, argument, selection)
            .with_context(|| format!("status of {argument} under {selection}"))?;
        writeln!(out, "  {selection}: {label}")?;
    }

    writeln!(out, "  attacked by:")?;
    let incoming = engine.attacks_on(key, argument)?;
    if incoming.is_empty() {
        writeln!(out, "    (none)")?;
    }
    for attack in &incoming {
        writeln!(
            out,
            "    {} {} ({}): {}",
            attack.attacker_id,
            attack.attack_type.as_str(),
            attack.id,
            attack.reason
        )?;
    }

    writeln!(out, "  attacks:")?;
    let outgoing = engine.attacks_from(key, argument)?;
    if outgoing.is_empty() {
        writeln!(out, "    (none)")?;
    }
    for attack in &outgoing {
        writeln!(
            out,
            "    {} {} ({}): {}",
            attack.target_id,
            attack.attack_type.as_str(),
            attack.id,
            attack.reason
        )?;
    }
    Ok(())
}
