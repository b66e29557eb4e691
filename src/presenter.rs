//! Text rendering of a pension report with Indian rupee formatting

use std::fmt::Write;

use crate::scenario::PensionReport;

/// Format as whole rupees with Indian digit grouping, e.g. `₹ 12,34,568`
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return "-".to_string();
    }

    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());

    format!("₹ {}{}", sign, group_indian(&digits))
}

/// Group a digit string as `xx,xx,xxx`
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, last_three) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), last_three)
}

/// Human-readable summary of a report
pub fn render_report(report: &PensionReport) -> String {
    let nps = &report.comparison.nps;
    let ups = &report.comparison.ups;
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(out, "Retirement date:      {}", report.retirement_date.format("%d/%m/%Y"));
    let _ = writeln!(
        out,
        "Qualifying service:   {} years, {} months ({} months)",
        report.qualifying_service_years, report.qualifying_service_months, report.service_months_total
    );
    let _ = writeln!(out, "Last basic pay:       {}", format_inr(report.final_basic_pay));
    let _ = writeln!(out, "Last emoluments:      {}", format_inr(report.final_emoluments));

    let _ = writeln!(out, "\nNPS");
    let _ = writeln!(out, "  Corpus:             {}", format_inr(nps.corpus));
    let _ = writeln!(out, "  Lumpsum (60%):      {}", format_inr(nps.lumpsum));
    let _ = writeln!(out, "  Annuity corpus:     {}", format_inr(nps.annuity_corpus));
    let _ = writeln!(out, "  Pension:            {} / month", format_inr(nps.monthly_pension));
    let _ = writeln!(out, "  Pension, 20 years:  {}", format_inr(nps.pension_payout));
    let _ = writeln!(out, "  Total, 20 years:    {}", format_inr(nps.total_payout));

    let _ = writeln!(out, "\nUPS");
    if ups.eligible {
        let _ = writeln!(out, "  Assured pension:    {} / month", format_inr(ups.assured_monthly_pension));
    } else {
        let _ = writeln!(out, "  Assured pension:    Not Eligible (<10 Yrs Service)");
    }
    let _ = writeln!(out, "  Gratuity:           {}", format_inr(ups.gratuity));
    let _ = writeln!(out, "  Lumpsum:            {}", format_inr(ups.guaranteed_lumpsum));
    let _ = writeln!(out, "  Optional lumpsum:   {}", format_inr(ups.optional_lumpsum));
    let _ = writeln!(out, "  Pension, 20 years:  {}", format_inr(ups.pension_payout));
    let _ = writeln!(out, "  Total, 20 years:    {}", format_inr(ups.total_payout));

    let _ = writeln!(out, "\nComparison");
    let _ = writeln!(out, "  NPS total:          {}", format_inr(nps.total_payout));
    let _ = writeln!(out, "  UPS total:          {}", format_inr(ups.total_payout));
    let _ = writeln!(out, "  {}", report.comparison.verdict);

    if !report.warnings.is_empty() {
        let _ = writeln!(out, "\nWarnings");
        for warning in &report.warnings {
            let _ = writeln!(out, "  - {}", warning);
        }
    }

    out
}
