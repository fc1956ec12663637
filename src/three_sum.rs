use std::cmp::Ordering;

/// Returns every unique triplet of input values summing to zero.
///
/// The input is copied and sorted, so the caller's slice is never mutated.
/// Each triplet comes back in ascending order, and no two triplets in the
/// result share the same value set. Inputs with fewer than three elements
/// produce an empty vector.
///
/// O(n log n) sort plus an O(n²) two-pointer scan; duplicates are skipped
/// structurally while scanning, never filtered with a membership check.
pub fn find_zero_triplets(nums: &[i32]) -> Vec<[i32; 3]> {
    if nums.len() < 3 {
        return Vec::new();
    }

    let mut nums = nums.to_vec();
    nums.sort_unstable();

    let mut triplets = Vec::new();

    for (i, &ni) in nums.iter().enumerate() {
        // Same anchor value as last iteration would re-emit its triplets.
        if i > 0 && ni == nums[i - 1] {
            continue;
        }

        let mut j = i + 1;
        let mut k = nums.len() - 1;

        while j < k {
            let nj = nums[j];
            let nk = nums[k];

            let sum = i64::from(ni) + i64::from(nj) + i64::from(nk);
            match sum.cmp(&0) {
                Ordering::Less => j += 1,
                Ordering::Greater => k -= 1,
                Ordering::Equal => {
                    triplets.push([ni, nj, nk]);
                    j += 1;
                    k -= 1;
                    while j < k && nums[j] == nums[j - 1] {
                        j += 1;
                    }
                    while j < k && nums[k] == nums[k + 1] {
                        k -= 1;
                    }
                }
            }
        }
    }

    triplets
}
