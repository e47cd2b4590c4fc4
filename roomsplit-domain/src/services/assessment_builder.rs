use crate::model::{AssessmentMatrix, Assignment, BidMatrix, Money, ParticipantId};

/// Builds the initial assessment matrix for `assignment`.
///
/// Entry `(i, j)` is `bid[i][room_j] - bid[j][room_j]`, so the diagonal is
/// zero.
pub fn build_assessment_matrix(bids: &BidMatrix, assignment: &Assignment) -> AssessmentMatrix {
    let size = bids.size();
    let mut cells = Vec::with_capacity(size * size);

    for assessor in bids.participants() {
        for holder in bids.participants() {
            cells.push(assessment(bids, assignment, assessor, holder));
        }
    }

    AssessmentMatrix::from_cells(size, cells)
}

/// How much `assessor` values `holder`'s room over their own bid for it.
pub fn assessment(
    bids: &BidMatrix,
    assignment: &Assignment,
    assessor: ParticipantId,
    holder: ParticipantId,
) -> Money {
    let room = assignment.room_of(holder);
    bids.bid(assessor, room) - bids.bid(holder, room)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::BidValidator;

    #[test]
    fn entries_compare_bids_on_the_holders_room() {
        let rows: Vec<Vec<Money>> = [
            [55, 30, 10, 5],
            [0, 65, 5, 30],
            [15, 50, 20, 15],
            [20, 15, 30, 35],
        ]
        .iter()
        .map(|row| row.iter().copied().map(Money::from_i64).collect())
        .collect();
        let bids = BidValidator::validate(&rows, Money::from_i64(100)).expect("valid bids");
        let assignment = Assignment::from_indices(&[0, 1, 2, 3]);

        let matrix = build_assessment_matrix(&bids, &assignment);

        let expected: [[i64; 4]; 4] = [
            [0, -35, -10, -30],
            [-55, 0, -15, -5],
            [-40, -15, 0, -20],
            [-35, -50, 10, 0],
        ];
        for (i, row) in expected.iter().enumerate() {
            let actual: Vec<Money> = matrix.row(ParticipantId(i)).to_vec();
            let expected_row: Vec<Money> = row.iter().copied().map(Money::from_i64).collect();
            assert_eq!(actual, expected_row, "row {i}");
        }

        for participant in bids.participants() {
            assert!(matrix.get(participant, participant).is_zero());
            for holder in bids.participants() {
                assert_eq!(
                    matrix.get(participant, holder),
                    assessment(&bids, &assignment, participant, holder)
                );
            }
        }
    }

    #[test]
    fn matrix_follows_the_assignment_permutation() {
        let rows = vec![
            vec![Money::from_i64(70), Money::from_i64(30)],
            vec![Money::from_i64(40), Money::from_i64(60)],
        ];
        let bids = BidValidator::validate(&rows, Money::from_i64(100)).expect("valid bids");
        let swapped = Assignment::from_indices(&[1, 0]);

        let matrix = build_assessment_matrix(&bids, &swapped);

        assert_eq!(matrix.get(ParticipantId(0), ParticipantId(1)), Money::from_i64(30));
        assert_eq!(matrix.get(ParticipantId(1), ParticipantId(0)), Money::from_i64(30));
    }
}
