//! Score listing command

use crate::ledger::ScoreLedger;
use crate::output::write_stats_table;
use std::io::{self, Write};

/// Print every player record, ordered by name
///
/// # Errors
///
/// Propagates write failures.
pub fn show_stats<W: Write>(ledger: &ScoreLedger, out: &mut W) -> io::Result<()> {
    write_stats_table(out, ledger.get_all().values())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_players_in_name_order() {
        colored::control::set_override(false);
        let dir = tempfile::tempdir().unwrap();
        let mut ledger = ScoreLedger::open(dir.path().join("scores.csv")).unwrap();
        ledger.update("Zed", 25).unwrap();
        ledger.update("Amy", 100).unwrap();

        let mut out = Vec::new();
        show_stats(&ledger, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        let amy = text.find("Amy").unwrap();
        let zed = text.find("Zed").unwrap();
        assert!(amy < zed);
    }

    #[test]
    fn empty_ledger_message() {
        let dir = tempfile::tempdir().unwrap();
        let ledger = ScoreLedger::open(dir.path().join("scores.csv")).unwrap();

        let mut out = Vec::new();
        show_stats(&ledger, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "No games recorded yet.\n");
    }
}
