//! Funding Progress Bar

use leptos::prelude::*;

/// Fill percentage towards the highest goal, clamped to 0..=100
pub fn progress_percent(current: i64, min: Option<i64>, max: Option<i64>) -> f64 {
    let Some(target) = max.filter(|m| *m > 0).or(min.filter(|m| *m > 0)) else {
        return 0.0;
    };
    (current as f64 / target as f64 * 100.0).clamp(0.0, 100.0)
}

/// Where the minimum goal sits on the bar, when both goals are set
pub fn min_marker_percent(min: Option<i64>, max: Option<i64>) -> Option<f64> {
    match (min, max) {
        (Some(min), Some(max)) if min > 0 && max > min => Some(min as f64 / max as f64 * 100.0),
        _ => None,
    }
}

#[component]
pub fn ProgressBar(current: i64, min: Option<i64>, max: Option<i64>) -> impl IntoView {
    let percent = progress_percent(current, min, max);
    let reached = min.is_some_and(|m| current >= m);

    view! {
        <div class="progress-bar" role="progressbar" aria-valuenow=format!("{:.0}", percent)>
            <div
                class="progress-fill"
                class:progress-reached=reached
                style=format!("width: {:.1}%", percent)
            ></div>
            {min_marker_percent(min, max).map(|at| view! {
                <div class="progress-min-marker" style=format!("left: {:.1}%", at)></div>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percent_uses_max_goal_first() {
        assert_eq!(progress_percent(5, Some(10), Some(20)), 25.0);
        assert_eq!(progress_percent(5, Some(10), None), 50.0);
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(progress_percent(50, Some(10), None), 100.0);
        assert_eq!(progress_percent(-3, Some(10), None), 0.0);
        assert_eq!(progress_percent(3, None, Some(0)), 0.0);
    }

    #[test]
    fn test_min_marker_only_between_goals() {
        assert_eq!(min_marker_percent(Some(5), Some(20)), Some(25.0));
        assert_eq!(min_marker_percent(Some(20), Some(20)), None);
        assert_eq!(min_marker_percent(None, Some(20)), None);
    }
}
