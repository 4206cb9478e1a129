//! Pure transformations from static set prescriptions to concrete
//! runtime values. Every function is total: malformed input yields
//! `None` or a default, never a panic.

use crate::{Cluster, Reps, SetPrescription, Time};

const DEFAULT_CLUSTER_REPS: u32 = 2;
const DEFAULT_CLUSTER_SETS: usize = 3;
const DEFAULT_CLUSTER_REST_SECONDS: u32 = 20;

/// Extracts the first integer substring from a free-form reps
/// prescription ("8-10" → 8, "AMRAP" → `None`).
#[must_use]
pub fn parse_reps_target(text: &str) -> Option<Reps> {
    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(char::is_ascii_digit)
        .collect();
    digits.parse::<u32>().ok().and_then(|v| Reps::new(v).ok())
}

/// Returns the tempo cue for a set. An explicit tempo field wins;
/// otherwise the free-text notes are scanned for a 3-or-4-number dash
/// pattern ("3-1-1-0"). A 3-number pattern gets the top pause digit
/// filled in as "0".
#[must_use]
pub fn parse_tempo_cue(prescription: &SetPrescription) -> Option<String> {
    if let Some(tempo) = &prescription.tempo {
        if !tempo.trim().is_empty() {
            return Some(tempo.trim().to_string());
        }
    }
    scan_tempo_pattern(&prescription.notes)
}

fn scan_tempo_pattern(notes: &str) -> Option<String> {
    let chars: Vec<char> = notes.chars().collect();
    for (i, c) in chars.iter().enumerate() {
        if !c.is_ascii_digit() {
            continue;
        }
        let mut digits = vec![*c];
        let mut j = i + 1;
        while digits.len() < 4
            && j + 1 < chars.len()
            && chars[j] == '-'
            && chars[j + 1].is_ascii_digit()
        {
            digits.push(chars[j + 1]);
            j += 2;
        }
        if digits.len() >= 3 {
            if digits.len() == 3 {
                digits.push('0');
            }
            return Some(
                digits
                    .iter()
                    .map(char::to_string)
                    .collect::<Vec<_>>()
                    .join("-"),
            );
        }
    }
    None
}

/// Builds the cluster configuration for a set. Explicitly listed
/// positive rep counts are used as given; a cluster-tagged prescription
/// without any valid counts falls back to the 2+2+2 default with 20 s
/// intra-set rest. Non-cluster prescriptions without rep counts have no
/// cluster configuration.
#[must_use]
pub fn parse_cluster_config(prescription: &SetPrescription) -> Option<Cluster> {
    let reps = prescription
        .cluster_reps
        .iter()
        .filter(|&&r| r > 0)
        .filter_map(|&r| Reps::new(r).ok())
        .collect::<Vec<_>>();

    let rest_seconds = prescription
        .cluster_rest_seconds
        .and_then(|s| Time::new(s).ok())
        .unwrap_or_else(|| Time::new(DEFAULT_CLUSTER_REST_SECONDS).unwrap());

    if !reps.is_empty() {
        return Some(Cluster { reps, rest_seconds });
    }

    if prescription.cluster {
        return Some(Cluster {
            reps: vec![Reps::new(DEFAULT_CLUSTER_REPS).unwrap(); DEFAULT_CLUSTER_SETS],
            rest_seconds,
        });
    }

    None
}

/// Rounds to the nearest multiple of 5, ties rounding up (182 → 180,
/// 183 → 185, 182.5 → 185).
#[must_use]
pub fn round_to_nearest_five(value: f32) -> f32 {
    (value / 5.0).round() * 5.0
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn prescription(
        reps: &str,
        tempo: Option<&str>,
        notes: &str,
        cluster: bool,
        cluster_reps: &[u32],
        cluster_rest_seconds: Option<u32>,
    ) -> SetPrescription {
        SetPrescription {
            tempo: tempo.map(ToString::to_string),
            notes: notes.to_string(),
            cluster,
            cluster_reps: cluster_reps.to_vec(),
            cluster_rest_seconds,
            ..SetPrescription::working(reps)
        }
    }

    #[rstest]
    #[case("8-10", Some(8))]
    #[case("12", Some(12))]
    #[case("5x3", Some(5))]
    #[case("max 20", Some(20))]
    #[case("AMRAP", None)]
    #[case("", None)]
    fn test_parse_reps_target(#[case] text: &str, #[case] expected: Option<u32>) {
        assert_eq!(
            parse_reps_target(text),
            expected.map(|v| Reps::new(v).unwrap())
        );
    }

    #[rstest]
    #[case(Some("4-0-1-0"), "", Some("4-0-1-0"))]
    #[case(Some("4-0-1-0"), "tempo 3-1-1-0", Some("4-0-1-0"))]
    #[case(None, "tempo 3-1-1-0, pause at the bottom", Some("3-1-1-0"))]
    #[case(None, "3-1-1 strict", Some("3-1-1-0"))]
    #[case(Some("  "), "3-1-1", Some("3-1-1-0"))]
    #[case(None, "slow eccentric", None)]
    #[case(None, "8-10 reps", None)]
    #[case(None, "", None)]
    fn test_parse_tempo_cue(
        #[case] tempo: Option<&str>,
        #[case] notes: &str,
        #[case] expected: Option<&str>,
    ) {
        assert_eq!(
            parse_tempo_cue(&prescription("8", tempo, notes, false, &[], None)),
            expected.map(ToString::to_string)
        );
    }

    #[rstest]
    #[case(false, &[3, 3, 2], Some(15), Some((vec![3, 3, 2], 15)))]
    #[case(true, &[4, 4], None, Some((vec![4, 4], 20)))]
    #[case(true, &[], None, Some((vec![2, 2, 2], 20)))]
    #[case(true, &[0, 0], None, Some((vec![2, 2, 2], 20)))]
    #[case(false, &[], None, None)]
    #[case(false, &[0], None, None)]
    fn test_parse_cluster_config(
        #[case] cluster: bool,
        #[case] cluster_reps: &[u32],
        #[case] rest: Option<u32>,
        #[case] expected: Option<(Vec<u32>, u32)>,
    ) {
        assert_eq!(
            parse_cluster_config(&prescription("8", None, "", cluster, cluster_reps, rest)),
            expected.map(|(reps, rest_seconds)| Cluster {
                reps: reps.into_iter().map(|r| Reps::new(r).unwrap()).collect(),
                rest_seconds: Time::new(rest_seconds).unwrap(),
            })
        );
    }

    #[rstest]
    #[case(182.0, 180.0)]
    #[case(183.0, 185.0)]
    #[case(182.5, 185.0)]
    #[case(0.0, 0.0)]
    #[case(2.4, 0.0)]
    #[case(2.5, 5.0)]
    fn test_round_to_nearest_five(#[case] value: f32, #[case] expected: f32) {
        assert_approx_eq!(round_to_nearest_five(value), expected);
    }
}
