pub const TIP_TOO_SHORT: &str = "too short, consider expanding";
pub const TIP_NO_QUESTION: &str = "no question reduces reply potential";
pub const TIP_WEAK_HOOK: &str = "weak hook opening, try contrast/provocation/personal story";
pub const TIP_NO_EMOJI: &str = "no emojis may reduce visual interest";
pub const TIP_EXCESS_EMOJI: &str = "too many emojis looks spam-like";
pub const TIP_EXCESS_HASHTAGS: &str = "too many hashtags may trigger disinterest signals";
pub const TIP_LOW_OVERALL: &str = "consider making the post more personal or controversial";
pub const TIP_WEAK_OPENING: &str = "a stronger opening can dramatically increase visibility";
pub const TIP_BELOW_MIN_LENGTH: &str = "post is too short to score.";

const LOW_OVERALL_THRESHOLD: i32 = 60;
const WEAK_OPENING_THRESHOLD: f64 = 50.0;

pub const DISPLAY_TIP_LIMIT: usize = 3;

pub fn build_score_tips(raised: Vec<String>, overall: i32, hook_strength: f64) -> Vec<String> {
    let mut tips = raised;
    if overall < LOW_OVERALL_THRESHOLD {
        tips.push(TIP_LOW_OVERALL.to_string());
    }
    if hook_strength < WEAK_OPENING_THRESHOLD {
        tips.push(TIP_WEAK_OPENING.to_string());
    }
    tips
}

pub fn display_tips(tips: &[String]) -> &[String] {
    &tips[..tips.len().min(DISPLAY_TIP_LIMIT)]
}
