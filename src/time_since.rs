/// Coarse relative ages ("3 hours ago", "Next week")

enum Bucket {
    /// `floor(seconds / divisor) <label> <ago|from now>`
    Count { label: &'static str, divisor: f64 },
    /// A fixed phrase for "about one unit"
    Literal { past: &'static str, future: &'static str },
}

/// Upper bounds in seconds, smallest first
const TIME_FORMATS: &[(f64, Bucket)] = &[
    (60.0, Bucket::Count { label: "seconds", divisor: 1.0 }),
    (120.0, Bucket::Literal { past: "1 minute ago", future: "1 minute from now" }),
    (3_600.0, Bucket::Count { label: "minutes", divisor: 60.0 }),
    (7_200.0, Bucket::Literal { past: "1 hour ago", future: "1 hour from now" }),
    (86_400.0, Bucket::Count { label: "hours", divisor: 3_600.0 }),
    (172_800.0, Bucket::Literal { past: "Yesterday", future: "Tomorrow" }),
    (604_800.0, Bucket::Count { label: "days", divisor: 86_400.0 }),
    (1_209_600.0, Bucket::Literal { past: "Last week", future: "Next week" }),
    (2_419_200.0, Bucket::Count { label: "weeks", divisor: 604_800.0 }),
    (4_838_400.0, Bucket::Literal { past: "Last month", future: "Next month" }),
    (29_030_400.0, Bucket::Count { label: "months", divisor: 2_419_200.0 }),
    (58_060_800.0, Bucket::Literal { past: "Last year", future: "Next year" }),
    (2_903_040_000.0, Bucket::Count { label: "years", divisor: 29_030_400.0 }),
];

/// Relative age of `time_ms` (epoch millis) as seen from `now_ms`
///
/// Returns the input value unchanged when it is further away than the
/// largest bucket.
pub fn time_since_at(time_ms: f64, now_ms: f64) -> String {
    let mut seconds = (now_ms - time_ms) / 1000.0;

    if seconds == 0.0 {
        return "Just now".to_string();
    }

    let future = seconds < 0.0;
    if future {
        seconds = seconds.abs();
    }
    let token = if future { "from now" } else { "ago" };

    for (limit, bucket) in TIME_FORMATS {
        if seconds < *limit {
            return match bucket {
                Bucket::Literal { past, future: ahead } => {
                    if future { ahead.to_string() } else { past.to_string() }
                }
                Bucket::Count { label, divisor } => {
                    format!("{} {} {}", (seconds / divisor).floor(), label, token)
                }
            };
        }
    }

    time_ms.to_string()
}

/// Relative age of `time_ms` against the browser clock
pub fn time_since(time_ms: f64) -> String {
    time_since_at(time_ms, js_sys::Date::now())
}
