use leptos::prelude::*;

/// How a [`StatCard`] renders its number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardFormat {
    Integer,
    Money,
}

/// "1234567.891" -> "1 234 567,89" (non-breaking spaces)
pub fn format_value(val: f64, fmt: CardFormat) -> String {
    match fmt {
        CardFormat::Integer => format_thousands(val.round() as i64),
        CardFormat::Money => {
            let cents = (val.abs() * 100.0).round() as i64;
            let sign = if val < 0.0 && cents != 0 { "-" } else { "" };
            format!("{}{},{:02} ₽", sign, format_thousands(cents / 100), cents % 100)
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('\u{00a0}');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    /// Primary numeric value (None = loading/error)
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: CardFormat,
    /// Route opened by clicking the card
    #[prop(into)]
    href: String,
) -> impl IntoView {
    view! {
        <a class="stat-card" href=href>
            <div class="stat-card__label">{label}</div>
            <div class="stat-card__value">
                {move || value.get().map(|v| format_value(v, format)).unwrap_or_else(|| "—".to_string())}
            </div>
        </a>
    }
}
