use chrono::NaiveDate;

/// Renders an amount as `$1,234.56`, negative values as `-$1,234.56`.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as i64;
    format!(
        "{}${}.{:02}",
        sign,
        group_thousands(cents / 100),
        cents % 100
    )
}

fn group_thousands(value: i64) -> String {
    let digits = value.to_string().chars().rev().collect::<Vec<char>>();
    let mut out = Vec::new();
    for (i, ch) in digits.iter().enumerate() {
        if i > 0 && i % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out.into_iter().rev().collect()
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_amounts_get_two_decimals() {
        assert_eq!(format_amount(50.0), "$50.00");
    }

    #[test]
    fn cents_are_preserved() {
        assert_eq!(format_amount(19.99), "$19.99");
        assert_eq!(format_amount(0.5), "$0.50");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_amount(1234567.89), "$1,234,567.89");
    }

    #[test]
    fn negative_amounts_keep_the_sign_outside() {
        assert_eq!(format_amount(-20.0), "-$20.00");
    }

    #[test]
    fn dates_render_short_month() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(format_date(date), "Jan 5, 2024");
    }
}
