//! Feedback history → FeedbackPattern. Pure functions over already-loaded rows.

use std::collections::{BTreeMap, HashMap, HashSet};

use atelier_core::constants::COMBINATION_SEPARATOR;
use atelier_core::models::{
    FeedbackPattern, LearningData, OutfitLog, StyleSnapshot, UserFeedback,
};

/// One feedback signal, whichever table it came from.
struct Signal<'a> {
    liked: bool,
    item_ids: Vec<&'a str>,
    colors: &'a [String],
}

fn signals<'a>(feedback: &'a [UserFeedback], logs: &'a [OutfitLog]) -> Vec<Signal<'a>> {
    let direct = feedback.iter().map(|f| Signal {
        liked: f.liked,
        item_ids: f.item_ids.iter().map(String::as_str).collect(),
        colors: &f.colors,
    });
    // Unrated legacy logs carry no signal.
    let legacy = logs.iter().filter_map(|log| {
        Some(Signal {
            liked: log.user_liked?,
            item_ids: [&log.top_id, &log.bottom_id, &log.shoes_id]
                .into_iter()
                .flatten()
                .map(String::as_str)
                .collect(),
            colors: &log.colors,
        })
    });
    direct.chain(legacy).collect()
}

/// Colors of liked records, most frequent first; ties keep first-seen order.
pub fn preferred_colors(feedback: &[UserFeedback], logs: &[OutfitLog]) -> Vec<String> {
    let mut counts: HashMap<String, (usize, usize)> = HashMap::new();
    let mut order = 0;
    for signal in signals(feedback, logs).iter().filter(|s| s.liked) {
        for color in signal.colors {
            let color = color.trim().to_lowercase();
            if color.is_empty() {
                continue;
            }
            let entry = counts.entry(color).or_insert((0, order));
            entry.0 += 1;
            order += 1;
        }
    }
    let mut ranked: Vec<(String, (usize, usize))> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1 .0.cmp(&a.1 .0).then(a.1 .1.cmp(&b.1 .1)));
    ranked.into_iter().map(|(color, _)| color).collect()
}

/// Every item id of a disliked record, deduplicated, in encounter order.
pub fn disliked_items(feedback: &[UserFeedback], logs: &[OutfitLog]) -> Vec<String> {
    let mut seen = HashSet::new();
    signals(feedback, logs)
        .iter()
        .filter(|s| !s.liked)
        .flat_map(|s| s.item_ids.iter().copied())
        .filter(|id| seen.insert(*id))
        .map(String::from)
        .collect()
}

/// Combination key: item ids in top, bottom, shoes order joined by the separator.
pub fn combination_key<'a>(ids: impl IntoIterator<Item = &'a str>) -> String {
    ids.into_iter()
        .collect::<Vec<_>>()
        .join(&COMBINATION_SEPARATOR.to_string())
}

/// One key per liked record with at least two items.
pub fn liked_combinations(feedback: &[UserFeedback], logs: &[OutfitLog]) -> Vec<String> {
    signals(feedback, logs)
        .iter()
        .filter(|s| s.liked && s.item_ids.len() >= 2)
        .map(|s| combination_key(s.item_ids.iter().copied()))
        .collect()
}

/// How often each occasion appears among logged successful combinations.
pub fn occasion_preferences(data: &[LearningData]) -> BTreeMap<String, u32> {
    let mut occasions = BTreeMap::new();
    for combo in data.iter().flat_map(|d| &d.successful_combinations) {
        *occasions.entry(combo.occasion.clone()).or_insert(0) += 1;
    }
    occasions
}

/// Oldest-first profile snapshots; confidence is engagement × 10.
pub fn style_evolution(data: &[LearningData]) -> Vec<StyleSnapshot> {
    let mut snapshots: Vec<StyleSnapshot> = data
        .iter()
        .map(|d| StyleSnapshot {
            timestamp: d.created_at,
            style_profile: d.user_preferences.style_profile.clone(),
            confidence: d.context_data.user_engagement * 10.0,
        })
        .collect();
    snapshots.sort_by_key(|s| s.timestamp);
    snapshots
}

pub fn analyze(
    feedback: &[UserFeedback],
    logs: &[OutfitLog],
    learning_data: &[LearningData],
) -> FeedbackPattern {
    FeedbackPattern {
        preferred_colors: preferred_colors(feedback, logs),
        disliked_items: disliked_items(feedback, logs),
        liked_combinations: liked_combinations(feedback, logs),
        occasion_preferences: occasion_preferences(learning_data),
        style_evolution: style_evolution(learning_data),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn feedback(ids: &[&str], liked: bool, colors: &[&str]) -> UserFeedback {
        UserFeedback {
            user_id: "u".into(),
            look_id: "l".into(),
            item_ids: ids.iter().map(|s| s.to_string()).collect(),
            liked,
            colors: colors.iter().map(|s| s.to_string()).collect(),
            created_at: Utc::now(),
        }
    }

    fn log(ids: [&str; 3], liked: Option<bool>) -> OutfitLog {
        OutfitLog {
            user_id: "u".into(),
            top_id: Some(ids[0].into()),
            bottom_id: Some(ids[1].into()),
            shoes_id: Some(ids[2].into()),
            user_liked: liked,
            colors: vec![],
            created_at: Utc::now(),
        }
    }

    #[test]
    fn colors_rank_by_frequency_then_first_seen() {
        let fb = [
            feedback(&["a"], true, &["Navy", "white"]),
            feedback(&["b"], true, &["black", "navy"]),
            feedback(&["c"], false, &["red", "red", "red"]),
        ];
        assert_eq!(preferred_colors(&fb, &[]), vec!["navy", "white", "black"]);
    }

    #[test]
    fn disliked_ids_come_from_both_tables() {
        let fb = [feedback(&["a", "b"], false, &[])];
        let logs = [log(["b", "c", "d"], Some(false)), log(["x", "y", "z"], None)];
        assert_eq!(disliked_items(&fb, &logs), vec!["a", "b", "c", "d"]);
    }

    #[test]
    fn liked_combinations_use_separator() {
        let logs = [log(["top-1", "bottom-1", "shoes-1"], Some(true))];
        assert_eq!(liked_combinations(&[], &logs), vec!["top-1|bottom-1|shoes-1"]);
    }
}
