//! Verdict determiner (§4.7): fuses the four component scores by
//! democratic voting, with a fixed set of signals that override the vote
//! outright. This is the resolution of the spec's Open Question in §9 —
//! voting, not pure threshold scoring, is the codified strategy.

use crate::types::{ComponentKind, ComponentScores, Signal, SignalId, Verdict};

/// Signals that force MALICIOUS regardless of how the rest of the vote
/// goes (§4.7 step 1).
const CRITICAL_OVERRIDE: [SignalId; 5] = [
    SignalId::Homograph,
    SignalId::AtInAuthority,
    SignalId::RtlOverride,
    SignalId::DoubleExtension,
    SignalId::ObfuscatedIp,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Vote {
    Safe,
    Suspicious,
    Malicious,
}

fn vote_for(kind: ComponentKind, score: u8) -> Vote {
    let (safe_at_or_below, malicious_above) = match kind {
        ComponentKind::Heuristic => (10, 25),
        ComponentKind::Ml => (30, 60),
        ComponentKind::Brand => (5, 15),
        ComponentKind::Tld => (3, 7),
    };
    if score <= safe_at_or_below {
        Vote::Safe
    } else if score > malicious_above {
        Vote::Malicious
    } else {
        Vote::Suspicious
    }
}

fn vote_as_verdict(vote: Vote) -> Verdict {
    match vote {
        Vote::Safe => Verdict::Safe,
        Vote::Suspicious => Verdict::Suspicious,
        Vote::Malicious => Verdict::Malicious,
    }
}

pub struct VerdictResult {
    pub verdict: Verdict,
    pub final_score: u8,
    pub confidence: u8,
}

/// Runs the full §4.7 algorithm. `signals` must be the complete triggered
/// signal list so the critical-override check can scan it.
pub fn determine(components: ComponentScores, signals: &[Signal]) -> VerdictResult {
    let critical_override = signals
        .iter()
        .any(|s| s.triggered && CRITICAL_OVERRIDE.contains(&s.id));

    let votes = [
        (ComponentKind::Heuristic, vote_for(ComponentKind::Heuristic, components.heuristic)),
        (ComponentKind::Ml, vote_for(ComponentKind::Ml, components.ml)),
        (ComponentKind::Brand, vote_for(ComponentKind::Brand, components.brand)),
        (ComponentKind::Tld, vote_for(ComponentKind::Tld, components.tld)),
    ];

    let safe_votes = votes.iter().filter(|(_, v)| *v == Vote::Safe).count();
    let malicious_votes = votes.iter().filter(|(_, v)| *v == Vote::Malicious).count();

    let verdict = if critical_override {
        Verdict::Malicious
    } else if safe_votes >= 3 {
        Verdict::Safe
    } else if malicious_votes >= 2 {
        Verdict::Malicious
    } else {
        // Cautious default (§4.7 step 2): 2+ suspicious votes land here
        // deliberately, and so does every other remaining split (e.g. one
        // safe, one malicious, two suspicious) that isn't a clear majority.
        Verdict::Suspicious
    };

    let final_score = (0.40 * components.heuristic as f64
        + 0.30 * components.ml as f64
        + 0.20 * components.brand as f64
        + 0.10 * components.tld as f64)
        .clamp(0.0, 100.0)
        .round() as u8;

    let agreeing = votes.iter().filter(|(_, v)| vote_as_verdict(*v) == verdict).count() as u8;
    let confidence = if critical_override { agreeing.saturating_add(1) } else { agreeing }.min(4);

    VerdictResult { verdict, final_score, confidence }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Signal;

    fn scores(heuristic: u8, ml: u8, brand: u8, tld: u8) -> ComponentScores {
        ComponentScores { heuristic, ml, brand, tld }
    }

    #[test]
    fn all_low_scores_are_safe() {
        let result = determine(scores(0, 0, 0, 0), &[]);
        assert_eq!(result.verdict, Verdict::Safe);
    }

    #[test]
    fn all_high_scores_are_malicious() {
        let result = determine(scores(90, 90, 90, 90), &[]);
        assert_eq!(result.verdict, Verdict::Malicious);
    }

    #[test]
    fn critical_override_forces_malicious_even_with_low_scores() {
        let signals = vec![Signal::fired(SignalId::Homograph, 45, "x", vec![])];
        let result = determine(scores(0, 0, 0, 0), &signals);
        assert_eq!(result.verdict, Verdict::Malicious);
        assert!(result.confidence >= 1);
    }

    #[test]
    fn mixed_scores_default_to_suspicious() {
        let result = determine(scores(15, 40, 0, 3), &[]);
        assert_eq!(result.verdict, Verdict::Suspicious);
    }

    #[test]
    fn final_score_is_bounded() {
        let result = determine(scores(100, 100, 100, 100), &[]);
        assert!(result.final_score <= 100);
    }
}
