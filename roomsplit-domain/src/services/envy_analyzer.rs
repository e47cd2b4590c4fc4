use crate::model::{AssessmentMatrix, EnvyProfile, EnvyRecord, EnvyTargets, Money, ParticipantId};

/// Derives every participant's maximum envy from the assessment matrix.
///
/// Envy of `i` towards `j` is `assessment[i][j] - assessment[i][i]`. Since
/// the self-comparison is always zero, the maximum is never negative.
pub fn analyze_envy(assessments: &AssessmentMatrix) -> EnvyProfile {
    let size = assessments.size();
    let records = (0..size)
        .map(|idx| envy_record(assessments.row(ParticipantId(idx)), ParticipantId(idx)))
        .collect();
    EnvyProfile::new(records)
}

fn envy_record(row: &[Money], participant: ParticipantId) -> EnvyRecord {
    let own = row[participant.0];
    let max_envy_amount = row
        .iter()
        .map(|&assessment| assessment - own)
        .max()
        .unwrap_or(Money::ZERO);

    let max_envy_targets: EnvyTargets = if max_envy_amount.is_zero() {
        EnvyTargets::new()
    } else {
        row.iter()
            .enumerate()
            .filter(|&(_, &assessment)| assessment - own == max_envy_amount)
            .map(|(idx, _)| ParticipantId(idx))
            .collect()
    };

    EnvyRecord {
        max_envy_amount,
        max_envy_targets,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn matrix(values: &[&[i64]]) -> AssessmentMatrix {
        let size = values.len();
        let cells = values
            .iter()
            .flat_map(|row| row.iter().copied().map(Money::from_i64))
            .collect();
        AssessmentMatrix::from_cells(size, cells)
    }

    #[test]
    fn records_max_envy_and_targets() {
        let assessments = matrix(&[
            &[0, -20, -15, -10],
            &[10, 0, -10, -20],
            &[-50, 0, 0, 5],
            &[0, -5, -15, 0],
        ]);

        let profile = analyze_envy(&assessments);

        assert_eq!(profile.record(ParticipantId(0)).max_envy_amount, Money::ZERO);
        assert!(profile.record(ParticipantId(0)).max_envy_targets.is_empty());
        assert_eq!(profile.record(ParticipantId(1)).max_envy_amount, Money::from_i64(10));
        assert_eq!(
            profile.record(ParticipantId(1)).max_envy_targets.as_slice(),
            &[ParticipantId(0)]
        );
        assert_eq!(profile.record(ParticipantId(2)).max_envy_amount, Money::from_i64(5));
        assert_eq!(
            profile.record(ParticipantId(2)).max_envy_targets.as_slice(),
            &[ParticipantId(3)]
        );
        assert!(profile.record(ParticipantId(3)).is_envyless());
        assert!(!profile.is_envy_free());
    }

    #[test]
    fn ties_list_every_target_in_ascending_order() {
        let assessments = matrix(&[&[0, 0, 0], &[7, 0, 7], &[0, 0, 0]]);

        let profile = analyze_envy(&assessments);

        assert_eq!(
            profile.record(ParticipantId(1)).max_envy_targets.as_slice(),
            &[ParticipantId(0), ParticipantId(2)]
        );
    }

    #[rstest]
    #[case::single(&[&[0][..]])]
    #[case::all_negative(&[&[0, -5][..], &[-3, 0][..]])]
    #[case::equal_preference(&[&[0, 0][..], &[0, 0][..]])]
    fn envy_free_when_no_positive_envy(#[case] values: &[&[i64]]) {
        let profile = analyze_envy(&matrix(values));
        assert!(profile.is_envy_free());
        assert_eq!(profile.envyless_participants().len(), values.len());
    }

    #[test]
    fn envy_is_relative_to_the_diagonal() {
        let assessments = matrix(&[&[4, 9], &[0, 0]]);

        let profile = analyze_envy(&assessments);

        assert_eq!(profile.record(ParticipantId(0)).max_envy_amount, Money::from_i64(5));
    }
}
