//! Required-amount extraction from raw form fields.

use vtu_types::{AmountSource, FormFields, ServiceKind};

/// Integer-prefix parse: skips leading whitespace and an optional `+`, reads
/// the leading run of ASCII digits, and returns 0 when there are none.
pub fn parse_leading_int(raw: &str) -> u64 {
    let trimmed = raw.trim_start();
    let trimmed = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = trimmed
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(trimmed.len());
    let digits = &trimmed[..end];
    if digits.is_empty() {
        return 0;
    }
    // only overflow can fail here
    digits.parse().unwrap_or(u64::MAX)
}

/// Amount segment of a `plan-amount` value, e.g. `mtn1gb-500` → 500.
pub fn plan_amount(plan: &str) -> u64 {
    plan.split('-').nth(1).map(parse_leading_int).unwrap_or(0)
}

/// Amount a form would charge, 0 when the relevant field is missing or blank.
pub fn required_amount(kind: ServiceKind, fields: &FormFields) -> u64 {
    match kind.amount_source() {
        AmountSource::Direct(field) => fields.get(field).map(|v| parse_leading_int(v)).unwrap_or(0),
        AmountSource::Plan(field) => fields.get(field).map(|v| plan_amount(v)).unwrap_or(0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn leading_int_follows_prefix_semantics() {
        assert_eq!(parse_leading_int("500"), 500);
        assert_eq!(parse_leading_int("  42 "), 42);
        assert_eq!(parse_leading_int("250.75"), 250);
        assert_eq!(parse_leading_int("12abc"), 12);
        assert_eq!(parse_leading_int("abc"), 0);
        assert_eq!(parse_leading_int(""), 0);
        assert_eq!(parse_leading_int("-5"), 0);
        assert_eq!(parse_leading_int("+500"), 500);
        assert_eq!(parse_leading_int(" +75kg"), 75);
        assert_eq!(parse_leading_int("++5"), 0);
    }

    #[test]
    fn oversized_digit_runs_saturate() {
        assert_eq!(parse_leading_int("99999999999999999999999"), u64::MAX);
    }

    #[test]
    fn direct_forms_read_their_amount_field() {
        let f = fields(&[("airtime-phone", "08012345678"), ("airtime-amount", "500")]);
        assert_eq!(required_amount(ServiceKind::Airtime, &f), 500);

        let f = fields(&[("electricity-amount", "1500")]);
        assert_eq!(required_amount(ServiceKind::Electricity, &f), 1500);
    }

    #[test]
    fn plan_forms_take_segment_after_delimiter() {
        let f = fields(&[("data-plan", "mtn1gb-300")]);
        assert_eq!(required_amount(ServiceKind::Data, &f), 300);

        let f = fields(&[("tv-package", "dstv_compact-9000")]);
        assert_eq!(required_amount(ServiceKind::Tv, &f), 9000);
    }

    #[test]
    fn missing_or_malformed_fields_yield_zero() {
        assert_eq!(required_amount(ServiceKind::Data, &FormFields::new()), 0);
        let f = fields(&[("tv-package", "gotv")]);
        assert_eq!(required_amount(ServiceKind::Tv, &f), 0);
        let f = fields(&[("airtime-amount", "")]);
        assert_eq!(required_amount(ServiceKind::Airtime, &f), 0);
    }
}
