/// Returns the total volume of water trapped between bars of the given
/// elevation map.
///
/// Heights are unsigned, so the negative-height case cannot arise. Inputs
/// shorter than two bars trap nothing.
///
/// O(n) time, O(1) extra space. Water at any position is capped by the lower
/// of the two enclosing maxima, and the side with the lower current bar
/// already knows its true maximum, so that side can be settled and advanced.
pub fn trapped_water(heights: &[u32]) -> u64 {
    if heights.len() < 2 {
        return 0;
    }

    let mut l = 0;
    let mut r = heights.len() - 1;
    let mut left_max = 0u32;
    let mut right_max = 0u32;
    let mut trapped = 0u64;

    while l < r {
        if heights[l] < heights[r] {
            if heights[l] >= left_max {
                left_max = heights[l];
            } else {
                trapped += u64::from(left_max - heights[l]);
            }
            l += 1;
        } else {
            if heights[r] >= right_max {
                right_max = heights[r];
            } else {
                trapped += u64::from(right_max - heights[r]);
            }
            r -= 1;
        }
    }

    trapped
}
