use crate::domain::trust::ReconciledEntry;
use crate::ui::logger::Logger;
use chrono::{DateTime, Utc};
use std::fmt::Write;

const SEPARATOR_WIDTH: usize = 80;
const SERIAL_COLUMN: usize = 59;
const PRIVATE_COLUMN: usize = 10;
const COLUMN_GAP: &str = "  ";
const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

fn separator() -> String {
    "-".repeat(SEPARATOR_WIDTH)
}

/// Renders the reconciled key list as a plain-text table: one header, then
/// per key a row with serial, private-key presence and trust, followed by
/// its subject attributes and validity window.
pub fn render_report(entries: &[ReconciledEntry], now: DateTime<Utc>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", separator());
    let _ = writeln!(
        out,
        "{:<serial$}{gap}{:<private$}{gap}{}",
        "x509 Certificate Serial Number",
        "Have Priv?",
        "Trust?",
        serial = SERIAL_COLUMN,
        private = PRIVATE_COLUMN,
        gap = COLUMN_GAP
    );
    let _ = writeln!(out, "(SubjectNames)");
    let _ = writeln!(out, "{}", separator());

    for entry in entries {
        let pair = &entry.pair;
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:<serial$}{gap}{:<private$}{gap}{}",
            pair.id(),
            pair.have_private_key(),
            entry.trusted,
            serial = SERIAL_COLUMN,
            private = PRIVATE_COLUMN,
            gap = COLUMN_GAP
        );
        for (name, value) in pair.subject() {
            let _ = writeln!(out, "{}:{}", name, value);
        }
        let _ = write!(
            out,
            "Valid: {} to {}",
            pair.not_before().format(DATE_FORMAT),
            pair.not_after().format(DATE_FORMAT)
        );
        if pair.is_expired_at(now) {
            let _ = write!(out, " (expired)");
        }
        let _ = writeln!(out);
    }

    out
}

pub fn display_report(entries: &[ReconciledEntry], logger: &Logger) {
    let trusted = entries.iter().filter(|e| e.trusted).count();
    logger.debug(
        &format!("{} key pair(s), {} trusted", entries.len(), trusted),
        None,
    );
    print!("{}", render_report(entries, Utc::now()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::key_pair::{KeyIdentifier, KeyPairRecord};
    use chrono::TimeZone;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn entry(id: &str, have_private_key: bool, trusted: bool, expires_year: i32) -> ReconciledEntry {
        let pair = KeyPairRecord::new(
            KeyIdentifier::new(id),
            BTreeMap::from([
                ("CN".to_string(), "signer".to_string()),
                ("O".to_string(), "Acme".to_string()),
            ]),
            have_private_key,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(expires_year, 1, 1, 0, 0, 0).unwrap(),
            PathBuf::from("/k/x-public.pem"),
        );
        ReconciledEntry::new(pair, trusted)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 0, 0, 0).unwrap()
    }

    #[test]
    fn empty_report_is_header_only() {
        let report = render_report(&[], now());
        let lines: Vec<&str> = report.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "-".repeat(80));
        assert!(lines[1].starts_with("x509 Certificate Serial Number"));
        assert!(lines[1].ends_with("Have Priv?  Trust?"));
        assert_eq!(lines[2], "(SubjectNames)");
    }

    #[test]
    fn row_lists_serial_flags_and_subject() {
        let report = render_report(&[entry("0a:0b", true, false, 2030)], now());

        let row = report
            .lines()
            .find(|l| l.starts_with("0a:0b"))
            .expect("row for serial");
        let columns: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(columns, ["0a:0b", "true", "false"]);
        assert!(report.contains("\nCN:signer\nO:Acme\n"));
        assert!(report.contains("Valid: 2020-01-01 00:00:00 UTC to 2030-01-01 00:00:00 UTC\n"));
        assert!(!report.contains("(expired)"));
    }

    #[test]
    fn columns_line_up_with_header() {
        let report = render_report(&[entry("01", false, true, 2030)], now());
        let lines: Vec<&str> = report.lines().collect();
        let header = lines[1];
        let row = lines.iter().find(|l| l.starts_with("01")).unwrap();

        assert_eq!(header.find("Have Priv?"), row.find("false"));
        assert_eq!(header.find("Trust?"), row.find("true"));
    }

    #[test]
    fn long_serial_keeps_columns_apart() {
        let serial: Vec<u8> = (0..21).collect();
        let pair = KeyPairRecord::new(
            KeyIdentifier::from_serial_bytes(&serial),
            BTreeMap::new(),
            true,
            Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap(),
            PathBuf::from("/k/x-public.pem"),
        );
        let report = render_report(&[ReconciledEntry::new(pair, false)], now());

        let row = report.lines().find(|l| l.starts_with("00:01")).unwrap();
        let columns: Vec<&str> = row.split_whitespace().collect();
        assert_eq!(columns.len(), 3);
        assert_eq!(columns[0].len(), 62);
        assert_eq!(&columns[1..], ["true", "false"]);
    }

    #[test]
    fn expired_keys_are_marked() {
        let report = render_report(&[entry("01", false, true, 2024)], now());
        assert!(report.contains("(expired)"));
    }

    #[test]
    fn one_row_per_entry_in_order() {
        let report = render_report(
            &[
                entry("01", true, true, 2030),
                entry("02", true, false, 2030),
                entry("ff", false, true, 2030),
            ],
            now(),
        );
        let serials: Vec<&str> = report
            .lines()
            .filter(|l| l.contains("true") || l.contains("false"))
            .map(|l| l.split_whitespace().next().unwrap())
            .collect();
        assert_eq!(serials, ["01", "02", "ff"]);
    }
}
