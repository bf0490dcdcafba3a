use crate::template::SideValues;

/// Pick sides whose weights add up to `target`.
///
/// Walks from the highest index down to 0 and takes every side whose weight
/// still fits in the remaining amount. Unset and zero-weight sides are never
/// taken. There is no backtracking, so a given amount always maps to the
/// same switch pattern.
///
/// Returns the chosen indices in ascending order, or the leftover amount
/// when the pass cannot reach the target exactly.
pub fn greedy_subset(sides: &SideValues, target: u32) -> Result<Vec<usize>, u32> {
    let mut residual = target;
    let mut picked = Vec::new();

    for (index, weight) in sides.weights().rev() {
        if residual == 0 {
            break;
        }
        if weight > 0 && weight <= residual {
            residual -= weight;
            picked.push(index);
        }
    }

    if residual == 0 {
        picked.reverse();
        Ok(picked)
    } else {
        Err(residual)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sides(values: &[Option<u32>]) -> SideValues {
        SideValues::from_values(values.to_vec()).unwrap()
    }

    #[test]
    fn test_zero_target_is_empty() {
        assert_eq!(greedy_subset(&sides(&[Some(3)]), 0), Ok(vec![]));
    }

    #[test]
    fn test_takes_from_high_index_first() {
        // Both index 0 and index 2 weigh 5; the higher index wins
        assert_eq!(greedy_subset(&sides(&[Some(5), Some(1), Some(5)]), 6), Ok(vec![1, 2]));
    }

    #[test]
    fn test_reports_remainder() {
        assert_eq!(greedy_subset(&sides(&[Some(3), Some(5)]), 4), Err(1));
        assert_eq!(greedy_subset(&sides(&[None, None]), 7), Err(7));
    }

    #[test]
    fn test_zero_weight_never_taken() {
        assert_eq!(greedy_subset(&sides(&[Some(0), Some(2)]), 2), Ok(vec![1]));
    }
}
