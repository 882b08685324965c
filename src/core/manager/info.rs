// Author: Dustin Pilgrim
// License: MIT

use crate::core::{
    champion::{Catalog, NameFilter},
    info::{SessionSnapshot, SlotInfo},
    timer::SpellProjection,
    utils::format_seconds,
};

pub fn render_info(snap: &SessionSnapshot) -> String {
    let mut out = String::new();

    out.push_str("◆ OPPONENTS\n");
    for slot in &snap.slots {
        out.push_str(&render_slot(slot));
    }

    out.push('\n');
    out.push_str("◆ CATALOG\n");
    if let Some(err) = snap.catalog.error.as_deref() {
        out.push_str(&format!("Champions: unavailable ({err})\n"));
    } else if snap.catalog.loaded {
        out.push_str(&format!("Champions: {}\n", snap.catalog.champions));
    } else if snap.catalog.disabled {
        out.push_str("Champions: disabled\n");
    } else {
        out.push_str("Champions: loading\n");
    }

    out.trim_end().to_string()
}

fn render_slot(slot: &SlotInfo) -> String {
    let mut out = String::new();

    let marker = if slot.highlighted { "→" } else { " " };
    let champion = match &slot.champion {
        Some(c) => c.name.clone().unwrap_or_else(|| format!("{} (unknown)", c.id)),
        None => "no champion".to_string(),
    };

    out.push_str(&format!("{marker} {:<8} {champion}\n", slot.label));
    out.push_str(&format!("    {}\n", spell_line(&slot.spell1)));
    out.push_str(&format!("    {}\n", spell_line(&slot.spell2)));

    let ult_name = slot
        .champion
        .as_ref()
        .and_then(|c| c.ult_name.as_deref())
        .unwrap_or("Ult");

    let ult = match (&slot.champion, &slot.ult.projection) {
        (None, _) => "-".to_string(),
        (Some(c), _) if c.ult_cooldowns.is_empty() => "no cooldown data".to_string(),
        (Some(_), None) => format!("ready  [{}]", slot.ult.mode),
        (Some(_), Some(p)) if !p.is_running() => format!("{}  [{}]", p.status.as_str(), slot.ult.mode),
        (Some(_), Some(p)) => format!(
            "{} {}  ({} as {})  [{}]",
            p.status.as_str(),
            format_seconds(p.remaining),
            format_seconds(p.elapsed),
            p.rank_label,
            slot.ult.mode
        ),
    };
    out.push_str(&format!("    {ult_name}: {ult}\n"));

    if !slot.pending.is_empty() {
        let names: Vec<&str> = slot.pending.iter().map(|a| a.as_str()).collect();
        out.push_str(&format!("    pending: {}\n", names.join(", ")));
    }

    out
}

fn spell_line(p: &SpellProjection) -> String {
    if p.remaining == 0 {
        return format!("{:<9} ready", p.spell.name());
    }
    format!(
        "{:<9} {} {}",
        p.spell.name(),
        p.status.as_str(),
        format_seconds(p.remaining)
    )
}

/// One champion per line, aligned, for `spellwatch champions`.
pub fn render_champions(catalog: &Catalog, filter: Option<&NameFilter>) -> String {
    if let Some(err) = catalog.error() {
        return format!("Champion data unavailable: {err}");
    }
    if catalog.is_disabled() {
        return "Champion data is disabled (catalog_source none)".to_string();
    }
    if !catalog.is_loaded() {
        return "Champion data is still loading".to_string();
    }

    let rows: Vec<_> = match filter {
        Some(f) => catalog.search(f).collect(),
        None => catalog.iter().collect(),
    };

    if rows.is_empty() {
        return match filter {
            Some(f) => format!("No champions match {f}"),
            None => "No champions".to_string(),
        };
    }

    let name_w = rows.iter().map(|c| c.name.len()).max().unwrap_or(0).max(8);
    let ult_w = rows.iter().map(|c| c.ult_name.len()).max().unwrap_or(0);

    let mut out = String::new();
    for c in rows {
        out.push_str(&format!(
            "{:<name_w$}  {:<ult_w$}  {}\n",
            c.name,
            c.ult_name,
            c.cooldowns_label(),
            name_w = name_w,
            ult_w = ult_w
        ));
    }

    out.trim_end().to_string()
}
