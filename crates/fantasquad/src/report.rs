// Plain-text lineup report: one line per slot in formation order, then the
// bench.

use std::fmt::Write;

use fantasquad_core::lineup::{EnrichedPlayer, LineupEvaluation};

const NAME_WIDTH: usize = 24;

fn role_codes(player: &EnrichedPlayer) -> String {
    player
        .roles
        .iter()
        .map(|r| r.code())
        .collect::<Vec<_>>()
        .join("/")
}

/// Render an evaluation as a fixed-width text report.
pub fn render(eval: &LineupEvaluation) -> String {
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Formation {}: {}/{} slots filled, total value {:.1}",
        eval.formation,
        eval.filled,
        eval.slot_count(),
        eval.total_value
    );
    out.push('\n');

    for assignment in &eval.assignments {
        match &assignment.occupant {
            Some(occ) => {
                let _ = writeln!(
                    out,
                    "  {:<4} {:<width$} {:<5} {:<3} {:>6.1}",
                    assignment.slot.label,
                    occ.player.name,
                    occ.player.team,
                    occ.chosen_role.code(),
                    occ.player.value,
                    width = NAME_WIDTH
                );
            }
            None => {
                let _ = writeln!(out, "  {:<4} (empty)", assignment.slot.label);
            }
        }
    }

    if !eval.bench.is_empty() {
        let _ = writeln!(out, "\nBench ({}):", eval.bench.len());
        for player in &eval.bench {
            let _ = writeln!(
                out,
                "  {:<width$} {:<5} {:<9} {:>6.1}",
                player.name,
                player.team,
                role_codes(player),
                player.value,
                width = NAME_WIDTH
            );
        }
    }

    out
}
