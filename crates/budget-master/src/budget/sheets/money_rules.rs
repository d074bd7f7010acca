//! Money Rules: a page of priorities and reminders

use budget_master_core::{FontStyle, Result};

use crate::budget::presets;
use crate::budget::writer::SheetWriter;

pub const NAME: &str = "Money Rules";

const SEPARATOR: &str = "────────────────────────────────────";

/// Markers that start a section heading
const HEADING_MARKERS: [&str; 6] = ["🎯", "💡", "⚠️", "🏆", "📊", "🎮"];

/// One line per row starting at row 2; empty strings are spacer rows
const RULES: [&str; 41] = [
    "",
    "🎯 THE PRIORITY ORDER (Pay Yourself First)",
    SEPARATOR,
    "1. Fixed expenses MUST be covered (rent, utilities, food)",
    "2. Credit card debt gets eliminated (4 months then done!)",
    "3. Roth IRA gets maxed ($583.33/month - tax-free forever)",
    "4. Emergency fund grows ($750/month until $15k)",
    "5. Brokerage for extra wealth building",
    "6. Fun money LAST (but don't skip it - burnout is real)",
    "",
    "💡 KEY INSIGHTS FROM YOUR NUMBERS",
    SEPARATOR,
    "• Your employer gives you FREE 8% 401k match = ~$6,080/year FREE MONEY",
    "• You're already saving 8% in Roth 401k + HSA from paycheck",
    "• Total retirement savings: ~24% of gross (excellent!)",
    "• After CC payoff, you'll have $230 extra/month",
    "",
    "⚠️ WARNING SIGNS TO WATCH",
    SEPARATOR,
    "• Fun spending hitting $308? That's eating into savings",
    "• Work expense float > 1 paycheck? Delay discretionary spending",
    "• Skipping Roth IRA contribution? You lose that year's limit forever",
    "",
    "🏆 YOUR FINANCIAL SUPERPOWERS",
    SEPARATOR,
    "• Young + high savings rate = compound interest machine",
    "• HSA = triple tax advantage (pre-tax in, grows tax-free, tax-free out for medical)",
    "• Roth IRA = flexibility (contributions out anytime, $10k for house)",
    "• Employer match = instant 100% return on investment",
    "",
    "📊 THE MATH THAT MATTERS",
    SEPARATOR,
    "• $583/month in Roth IRA for 30 years @ 7% = ~$700,000",
    "• That $308 fun spending? Over 30 years @ 7% = ~$370,000 opportunity cost",
    "• Every $1 saved in your 20s = ~$7.60 at retirement (7% for 30 years)",
    "",
    "🎮 GAMIFY YOUR FINANCES",
    SEPARATOR,
    "• Set monthly 'high scores' for savings",
    "• Celebrate milestones (first $1k, $5k, $10k in emergency fund)",
    "• Track your net worth monthly - watch it grow!",
];

pub fn build(w: &mut SheetWriter<'_>) -> Result<()> {
    w.set("A1", "📚 JOSHUA'S MONEY MANAGEMENT RULES")?;
    w.font("A1", presets::title())?;
    w.merge("A1:E1")?;

    for (r, rule) in (2..).zip(RULES) {
        let address = format!("A{r}");
        w.set(&address, rule)?;
        w.merge(&format!("A{r}:E{r}"))?;
        if HEADING_MARKERS.iter().any(|marker| rule.contains(marker)) {
            w.font(&address, presets::section(12.0))?;
        }
        if rule.contains("────") {
            w.font(&address, FontStyle::new().with_color(presets::RULE_GRAY))?;
        }
    }

    w.widths(&[("A", 70.0)])
}
