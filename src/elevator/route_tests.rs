/*
 * Unit tests for the route planner
 *
 * The unit tests follows the Arrange, Act, Assert pattern.
 *
 * Tests:
 * - test_plan_tie_goes_down_first
 * - test_plan_start_at_bottom
 * - test_plan_start_at_top
 * - test_plan_duplicates_and_start_in_targets
 * - test_plan_closer_to_top_goes_up_first
 * - test_plan_single_floor
 * - test_normalize
 * - test_choose_direction
 * - test_plan_properties_exhaustive
 * - test_plan_is_deterministic
 */

/***************************************/
/*             Unit tests              */
/***************************************/
#[cfg(test)]
mod route_tests {
    use crate::elevator::route::{choose_direction, normalize, plan, SINGLE_FLOOR_TRAVEL_TIME};
    use crate::shared::Direction::{Down, Up};
    use crate::shared::Floor;

    #[test]
    fn test_plan_tie_goes_down_first() {
        // Purpose: Equal distance to both ends resolves to going down first

        // Act
        let result = plan(5, &[1, 9]);

        // Assert
        assert_eq!(result.floors_visited_order, vec![5, 1, 9]);
        assert_eq!(result.total_travel_time, 120);
    }

    #[test]
    fn test_plan_start_at_bottom() {
        // Purpose: Starting at the lowest floor only goes up

        // Act
        let result = plan(1, &[5, 9]);

        // Assert
        assert_eq!(result.floors_visited_order, vec![1, 5, 9]);
        assert_eq!(result.total_travel_time, 80);
    }

    #[test]
    fn test_plan_start_at_top() {
        // Purpose: Starting at the highest floor only goes down

        // Act
        let result = plan(9, &[1, 5]);

        // Assert
        assert_eq!(result.floors_visited_order, vec![9, 5, 1]);
        assert_eq!(result.total_travel_time, 80);
    }

    #[test]
    fn test_plan_duplicates_and_start_in_targets() {
        // Purpose: Duplicates and the start floor in the targets are visited once

        // Act
        let result = plan(3, &[3, 3, 7]);

        // Assert
        assert_eq!(result.floors_visited_order, vec![3, 7]);
        assert_eq!(result.total_travel_time, 40);
    }

    #[test]
    fn test_plan_closer_to_top_goes_up_first() {
        // Purpose: The first leg goes towards the closer end

        // Arrange
        let targets: Vec<Floor> = vec![12, 2, 8, 14, 4];

        // Act
        let result = plan(10, &targets);

        // Assert
        // Up 10 -> 14 (4 floors), then down 14 -> 2 (12 floors)
        assert_eq!(result.floors_visited_order, vec![10, 12, 14, 8, 4, 2]);
        assert_eq!(result.total_travel_time, 160);
    }

    #[test]
    fn test_plan_closer_to_bottom_goes_down_first() {
        // Purpose: The unsorted target order does not affect the route

        // Act
        let result = plan(4, &[20, 3, 1, 6]);

        // Assert
        // Down 4 -> 1 (3 floors), then up 1 -> 20 (19 floors)
        assert_eq!(result.floors_visited_order, vec![4, 3, 1, 6, 20]);
        assert_eq!(result.total_travel_time, 220);
    }

    #[test]
    fn test_plan_single_floor() {
        // Purpose: Only the start floor gives a zero time single floor route

        // Act
        let result = plan(4, &[4]);

        // Assert
        assert_eq!(result.floors_visited_order, vec![4]);
        assert_eq!(result.total_travel_time, 0);
    }

    #[test]
    fn test_normalize() {
        // Purpose: The start floor is merged into the sorted, deduplicated targets

        // Act
        let sorted = normalize(6, &[9, 2, 9, 6, 2, 1]);

        // Assert
        assert_eq!(sorted, vec![1, 2, 6, 9]);
    }

    #[test]
    fn test_choose_direction() {
        // Purpose: Check boundary and tie handling of the direction choice

        // Assert
        assert_eq!(choose_direction(&[1, 5, 9], 0), Up);
        assert_eq!(choose_direction(&[1, 5, 9], 2), Down);
        assert_eq!(choose_direction(&[1, 5, 9], 1), Down);
        assert_eq!(choose_direction(&[1, 3, 9], 1), Down);
        assert_eq!(choose_direction(&[1, 7, 9], 1), Up);
        assert_eq!(choose_direction(&[3, 7], 0), Up);
        assert_eq!(choose_direction(&[3, 7], 1), Down);
    }

    #[test]
    fn test_plan_properties_exhaustive() {
        // Purpose: Check the route invariants for every start floor and target set in a small building

        // Arrange
        let n_floors: Floor = 7;

        for start in 1..=n_floors {
            // Every non-empty subset of the floors, encoded as a bitmask
            for mask in 1u32..(1 << n_floors) {
                let targets: Vec<Floor> = (1..=n_floors)
                    .filter(|floor| mask & (1 << (floor - 1)) != 0)
                    .collect();

                // Act
                let result = plan(start, &targets);

                // Assert
                let sorted = normalize(start, &targets);
                let mut visited = result.floors_visited_order.clone();
                visited.sort_unstable();
                assert_eq!(visited, sorted, "not a permutation for {} {:?}", start, targets);
                assert_eq!(result.floors_visited_order[0], start);

                let low = sorted[0];
                let high = sorted[sorted.len() - 1];
                let dist_to_low = (start - low) as u64;
                let dist_to_high = (high - start) as u64;
                let expected = if start == low || start == high {
                    (high - low) as u64 * SINGLE_FLOOR_TRAVEL_TIME
                } else {
                    (2 * dist_to_low.min(dist_to_high) + dist_to_low.max(dist_to_high))
                        * SINGLE_FLOOR_TRAVEL_TIME
                };
                assert_eq!(result.total_travel_time, expected, "wrong time for {} {:?}", start, targets);
                assert_eq!(result.total_travel_time == 0, sorted.len() == 1);

                // Each leg is monotonic, so the route reverses at most once
                let reversals = result
                    .floors_visited_order
                    .windows(3)
                    .filter(|w| (w[1] > w[0]) != (w[2] > w[1]))
                    .count();
                assert!(reversals <= 1);
            }
        }
    }

    #[test]
    fn test_plan_is_deterministic() {
        // Purpose: Repeated calls with the same input give the same route, ties included

        // Arrange
        let targets: Vec<Floor> = vec![9, 1, 5, 1];

        // Act
        let first = plan(5, &targets);
        let second = plan(5, &targets);

        // Assert
        assert_eq!(first, second);
    }
}
