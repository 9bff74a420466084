//! Canonical evidence tags.
//!
//! Tags arrive already canonicalised as `sig.<axis>.<level>` (or
//! `ctx.<name>` for context markers). This module names the ones the micro
//! catalogue and the topic-gate table refer to, so both read from the same
//! vocabulary.

pub const TENSION_HIGH: &str = "sig.tension.high";
pub const TENSION_LOW: &str = "sig.tension.low";
pub const BODY_CALM: &str = "sig.body.calm";
pub const REST_RECENT: &str = "sig.rest.recent";

pub const ENERGY_LOW: &str = "sig.energy.low";
pub const FATIGUE_HIGH: &str = "sig.fatigue.high";
pub const SLEEP_POOR: &str = "sig.sleep.poor";

pub const AGENCY_LOW: &str = "sig.agency.low";
pub const AGENCY_HIGH: &str = "sig.agency.high";
pub const CONTROL_LOST: &str = "sig.control.lost";
pub const OPTIONS_FEW: &str = "sig.options.few";

pub const CLARITY_LOW: &str = "sig.clarity.low";
pub const CLARITY_HIGH: &str = "sig.clarity.high";
pub const RUMINATION_PRESENT: &str = "sig.rumination.present";

pub const WORKLOAD_HIGH: &str = "sig.workload.high";
pub const TASKS_MANY: &str = "sig.tasks.many";
pub const DEADLINE_PRESENT: &str = "sig.deadline.present";
pub const EVALUATION_PRESENT: &str = "sig.evaluation.present";
pub const BOUNDARY_CROSSED: &str = "sig.boundary.crossed";

pub const SOCIAL_LOW: &str = "sig.social.low";
pub const SOCIAL_HIGH: &str = "sig.social.high";
pub const SOCIAL_SUPPORT: &str = "sig.social.support";
pub const SOCIAL_CONFLICT: &str = "sig.social.conflict";
pub const SOCIAL_EXPOSED: &str = "sig.social.exposed";
pub const LONELINESS_PRESENT: &str = "sig.loneliness.present";
pub const BELONGING_PRESENT: &str = "sig.belonging.present";
pub const WITHDRAWAL_PRESENT: &str = "sig.withdrawal.present";

pub const BLAME_OTHER: &str = "sig.blame.other";
pub const FEAR_HIGH: &str = "sig.fear.high";
pub const DISGUST_PRESENT: &str = "sig.disgust.present";

pub const PROGRESS_STALLED: &str = "sig.progress.stalled";
pub const OBSTACLE_EXTERNAL: &str = "sig.obstacle.external";

pub const MOOD_LOW: &str = "sig.mood.low";
pub const LOSS_PRESENT: &str = "sig.loss.present";
pub const MEANING_LOW: &str = "sig.meaning.low";
pub const INTEREST_LOW: &str = "sig.interest.low";
pub const INTEREST_HIGH: &str = "sig.interest.high";
pub const NUMBNESS_PRESENT: &str = "sig.numbness.present";

pub const GRATITUDE_PRESENT: &str = "sig.gratitude.present";
pub const MASTERY_PRESENT: &str = "sig.mastery.present";
pub const PREPARATION_DONE: &str = "sig.preparation.done";
pub const FOCUS_HIGH: &str = "sig.focus.high";
pub const FLOW_PRESENT: &str = "sig.flow.present";
pub const CURIOSITY_PRESENT: &str = "sig.curiosity.present";
pub const NOVELTY_PRESENT: &str = "sig.novelty.present";
pub const PLAY_PRESENT: &str = "sig.play.present";

pub const CTX_WORK: &str = "ctx.work";
pub const CTX_HOME: &str = "ctx.home";
pub const CTX_SOCIAL: &str = "ctx.social";

/// Split a `sig.<axis>.<level>` tag into `(axis, level)`.
///
/// Returns `None` for context tags and anything not in canonical form.
///
/// ```
/// use moodgate_engine::tags::split_signal;
///
/// assert_eq!(split_signal("sig.tension.high"), Some(("tension", "high")));
/// assert_eq!(split_signal("ctx.work"), None);
/// assert_eq!(split_signal("Tension High"), None);
/// ```
pub fn split_signal(tag: &str) -> Option<(&str, &str)> {
    let rest = tag.strip_prefix("sig.")?;
    let (axis, level) = rest.split_once('.')?;
    let well_formed = |s: &str| {
        !s.is_empty() && s.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_')
    };
    (well_formed(axis) && well_formed(level)).then_some((axis, level))
}

/// True for `sig.<axis>.<level>` and `ctx.<name>` tags.
pub fn is_canonical(tag: &str) -> bool {
    if split_signal(tag).is_some() {
        return true;
    }
    tag.strip_prefix("ctx.")
        .map(|name| !name.is_empty() && name.chars().all(|c| c.is_ascii_lowercase() || c == '_'))
        .unwrap_or(false)
}
