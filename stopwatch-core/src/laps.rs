//! Lap list presentation: newest first, fastest/slowest highlighting.

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LapMark {
    Fastest,
    Slowest,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LapRow {
    /// 1-based chronological position.
    pub number: usize,
    /// Cumulative elapsed time when the lap was taken.
    pub split_ms: u64,
    /// Time since the previous lap (the split itself for the first lap).
    pub interval_ms: u64,
    pub mark: Option<LapMark>,
}

/// Build display rows, most recent lap first.
///
/// Marks are only assigned once there are two or more laps. Every lap equal
/// to the minimum split is `Fastest`, every lap equal to the maximum is
/// `Slowest`; when all laps are equal they are all `Fastest`.
pub fn lap_rows(laps: &[u64]) -> Vec<LapRow> {
    let (min, max) = match (laps.iter().min(), laps.iter().max()) {
        (Some(&min), Some(&max)) if laps.len() > 1 => (Some(min), Some(max)),
        _ => (None, None),
    };

    laps.iter()
        .enumerate()
        .rev()
        .map(|(i, &split_ms)| {
            let previous = if i == 0 { 0 } else { laps[i - 1] };
            let mark = if Some(split_ms) == min {
                Some(LapMark::Fastest)
            } else if Some(split_ms) == max {
                Some(LapMark::Slowest)
            } else {
                None
            };
            LapRow {
                number: i + 1,
                split_ms,
                interval_ms: split_ms.saturating_sub(previous),
                mark,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty() {
        assert!(lap_rows(&[]).is_empty());
    }

    #[test]
    fn test_single_lap_unmarked() {
        let rows = lap_rows(&[1500]);
        assert_eq!(
            rows,
            vec![LapRow {
                number: 1,
                split_ms: 1500,
                interval_ms: 1500,
                mark: None
            }]
        );
    }

    #[test]
    fn test_order_and_marks() {
        let rows = lap_rows(&[500, 200, 800]);
        let splits: Vec<u64> = rows.iter().map(|r| r.split_ms).collect();
        let numbers: Vec<usize> = rows.iter().map(|r| r.number).collect();
        assert_eq!(splits, vec![800, 200, 500]);
        assert_eq!(numbers, vec![3, 2, 1]);
        assert_eq!(rows[0].mark, Some(LapMark::Slowest));
        assert_eq!(rows[1].mark, Some(LapMark::Fastest));
        assert_eq!(rows[2].mark, None);
    }

    #[test]
    fn test_ties_all_marked() {
        let rows = lap_rows(&[100, 300, 100, 300, 200]);
        let fastest: Vec<usize> = rows
            .iter()
            .filter(|r| r.mark == Some(LapMark::Fastest))
            .map(|r| r.number)
            .collect();
        let slowest: Vec<usize> = rows
            .iter()
            .filter(|r| r.mark == Some(LapMark::Slowest))
            .map(|r| r.number)
            .collect();
        assert_eq!(fastest, vec![3, 1]);
        assert_eq!(slowest, vec![4, 2]);
    }

    #[test]
    fn test_all_equal_are_fastest() {
        let rows = lap_rows(&[400, 400]);
        assert!(rows.iter().all(|r| r.mark == Some(LapMark::Fastest)));
    }

    #[test]
    fn test_intervals() {
        let rows = lap_rows(&[1000, 2500, 2500, 4000]);
        let intervals: Vec<u64> = rows.iter().map(|r| r.interval_ms).collect();
        assert_eq!(intervals, vec![1500, 0, 1500, 1000]);
    }
}
